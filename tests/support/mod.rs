// ABOUTME: Test support utilities.
// ABOUTME: Tracing setup and local runtime discovery for integration tests.

use berth::runtime::{BollardRuntime, RuntimeConfig, detect_local};
use std::sync::Once;
use std::time::Duration;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("berth=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Local runtime handle, or `None` when no daemon socket is present.
#[allow(dead_code)]
pub fn local_runtime() -> Option<BollardRuntime> {
    let info = detect_local(&RuntimeConfig::default()).ok()?;
    if !std::path::Path::new(&info.socket_path).exists() {
        return None;
    }
    BollardRuntime::connect(&info, Duration::from_secs(30), Duration::from_secs(600)).ok()
}

/// Skip test if no local runtime available.
macro_rules! require_runtime {
    () => {
        match support::local_runtime() {
            Some(rt) => rt,
            None => {
                eprintln!("Skipping test: no local container runtime found");
                return;
            }
        }
    };
}
