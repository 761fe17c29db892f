mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

use settings::Settings;

pub use settings::{BroadcasterSettings, HistorySettings, LogSettings, ServerSettings};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct with the server, broadcaster, history and log sections
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_").try_parsing(true));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        server: ServerSettings {
            host: partial
                .server
                .as_ref()
                .and_then(|s| s.host.clone())
                .unwrap_or(default.server.host),
            port: partial
                .server
                .as_ref()
                .and_then(|s| s.port)
                .unwrap_or(default.server.port),
        },
        broadcaster: BroadcasterSettings {
            buffer: partial
                .broadcaster
                .as_ref()
                .and_then(|b| b.buffer)
                .unwrap_or(default.broadcaster.buffer),
        },
        history: HistorySettings {
            capacity: partial
                .history
                .as_ref()
                .and_then(|h| h.capacity)
                .unwrap_or(default.history.capacity),
        },
        log: LogSettings {
            level: partial
                .log
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.log.level),
        },
    })
}

#[cfg(test)]
mod tests;
