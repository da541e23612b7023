//! Installs the process-wide subscriber, so it lives in its own test binary.

use confab_observe::tracing_setup::{init_tracing, shutdown_tracing};
use confab_types::config::LogFormat;

#[test]
fn second_init_fails_instead_of_panicking() {
    init_tracing(LogFormat::Pretty, false).unwrap();
    assert!(init_tracing(LogFormat::Json, false).is_err());

    tracing::info!("subscriber installed");
    shutdown_tracing();
}
