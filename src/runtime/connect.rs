// ABOUTME: Builds the runtime handle once at startup.
// ABOUTME: Detect the socket, open a client, and ping it before anything else runs.

use super::bollard::BollardRuntime;
use super::detection::detect_local;
use super::error::{ConnectError, ConnectionSnafu, DetectionSnafu, HealthCheckSnafu};
use super::traits::SystemOps;
use super::types::RuntimeConfig;
use snafu::ResultExt;
use std::time::Duration;

/// Detect, connect and health-check the local runtime.
///
/// The returned handle is meant to be created once and passed to every view
/// builder and command.
pub async fn connect(
    config: &RuntimeConfig,
    call_timeout: Duration,
    long_timeout: Duration,
) -> Result<BollardRuntime, ConnectError> {
    let info = detect_local(config).context(DetectionSnafu)?;
    tracing::debug!(runtime = %info.runtime_type, socket = %info.socket_path, "runtime detected");

    let runtime = BollardRuntime::connect(&info, call_timeout, long_timeout).context(
        ConnectionSnafu {
            runtime: info.runtime_type,
            socket: info.socket_path.clone(),
        },
    )?;

    runtime.ping().await.context(HealthCheckSnafu {
        runtime: info.runtime_type,
        socket: info.socket_path.clone(),
    })?;

    Ok(runtime)
}
