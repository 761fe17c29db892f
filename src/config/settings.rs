use serde::Deserialize;

/// Top-level configuration settings for the application.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub broadcaster: BroadcasterSettings,
    pub history: HistorySettings,
    pub log: LogSettings,
}

/// Configuration settings for the server.
///
/// Defines the host and port the server will bind to.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Configuration settings for the live broadcaster.
///
/// `buffer` is the per-viewer delivery channel capacity. The default of one
/// keeps delivery effectively unbuffered: a viewer that stops reading holds
/// up the fan-out until it reads or disconnects.
#[derive(Debug, Deserialize, Clone)]
pub struct BroadcasterSettings {
    pub buffer: usize,
}

/// Configuration settings for the request history store.
#[derive(Debug, Deserialize, Clone)]
pub struct HistorySettings {
    pub capacity: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub server: Option<PartialServerSettings>,
    pub broadcaster: Option<PartialBroadcasterSettings>,
    pub history: Option<PartialHistorySettings>,
    pub log: Option<PartialLogSettings>,
}

/// Partial server settings.
#[derive(Debug, Deserialize)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Partial broadcaster settings.
#[derive(Debug, Deserialize)]
pub struct PartialBroadcasterSettings {
    pub buffer: Option<usize>,
}

/// Partial history settings.
#[derive(Debug, Deserialize)]
pub struct PartialHistorySettings {
    pub capacity: Option<usize>,
}

/// Partial logging settings.
#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            broadcaster: BroadcasterSettings { buffer: 1 },
            history: HistorySettings { capacity: 1000 },
            log: LogSettings {
                level: "info".to_string(),
            },
        }
    }
}
