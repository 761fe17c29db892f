use std::collections::VecDeque;
use std::sync::RwLock;

use crate::capture::record::CapturedRequest;

/// Bounded, append-only store of captured requests.
///
/// Writers only ever append; once `capacity` is reached the oldest entry is
/// evicted. All access goes through the interior lock, so the store can be
/// shared freely between the capture handler and the dashboard endpoints.
#[derive(Debug)]
pub struct HistoryStore {
    capacity: usize,
    entries: RwLock<VecDeque<CapturedRequest>>,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(VecDeque::new()),
        }
    }

    /// Appends one captured request, evicting the oldest entry when full.
    pub fn push(&self, record: CapturedRequest) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.write().unwrap();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(record);
    }

    /// All retained captures, newest first.
    pub fn recent(&self) -> Vec<CapturedRequest> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .rev()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
