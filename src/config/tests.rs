use serial_test::serial;

use super::load_config;
use super::settings::Settings;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.broadcaster.buffer, 1);
    assert_eq!(settings.history.capacity, 1000);
    assert_eq!(settings.log.level, "info");
}

#[test]
#[serial]
fn load_config_falls_back_to_defaults() {
    let settings = load_config().expect("load_config");
    assert_eq!(settings.broadcaster.buffer, 1);
    assert_eq!(settings.log.level, "info");
}

#[test]
#[serial]
fn environment_overrides_defaults() {
    temp_env::with_vars(
        [
            ("SERVER_PORT", Some("9100")),
            ("HISTORY_CAPACITY", Some("5")),
            ("LOG_LEVEL", Some("debug")),
        ],
        || {
            let settings = load_config().expect("load_config");
            assert_eq!(settings.server.port, 9100);
            assert_eq!(settings.history.capacity, 5);
            assert_eq!(settings.log.level, "debug");
            // Untouched sections keep their defaults.
            assert_eq!(settings.server.host, "127.0.0.1");
            assert_eq!(settings.broadcaster.buffer, 1);
        },
    );
}
