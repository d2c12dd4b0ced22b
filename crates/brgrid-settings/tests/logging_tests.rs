//! Global subscriber installation
//!
//! Kept in its own test binary so nothing else installs a subscriber first.

use brgrid_settings::logging::{self, LoggingConfig};

#[test]
fn init_installs_once_and_rejects_a_second_subscriber() {
    logging::init(LoggingConfig::testing()).expect("first install succeeds");
    tracing::debug!(target: "brgrid_settings", "subscriber installed");

    let dir = tempfile::tempdir().expect("temp dir");
    let production = LoggingConfig {
        log_dir: dir.path().join("logs"),
        ..LoggingConfig::production()
    };
    let err = logging::init(production).unwrap_err();

    assert!(err.to_string().contains("Logging already initialized"));
    assert!(dir.path().join("logs").is_dir());
}
