use std::sync::Arc;

use hookmirror::broadcaster::Broadcaster;
use hookmirror::config::load_config;
use hookmirror::history::HistoryStore;
use hookmirror::transport::http::{serve, AppState};
use hookmirror::utils::logging;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    logging::init(&config.log.level);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState {
        broadcaster: Broadcaster::start(config.broadcaster.buffer),
        history: HistoryStore::new(config.history.capacity),
    });

    if let Err(e) = serve(&addr, state).await {
        error!("server failed: {e}");
        std::process::exit(1);
    }
}
