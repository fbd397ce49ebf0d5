// ABOUTME: Startup connection error types with SNAFU pattern.
// ABOUTME: Distinguishes detection, client construction and failed health checks.

use snafu::Snafu;

use super::detection::DetectionError;
use super::traits::RuntimeError;
use super::types::RuntimeType;

/// Failure to obtain a usable runtime handle at startup.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConnectError {
    #[snafu(display("runtime detection failed: {source}"))]
    Detection { source: DetectionError },

    #[snafu(display("cannot open {runtime} socket {socket}: {source}"))]
    Connection {
        runtime: RuntimeType,
        socket: String,
        source: RuntimeError,
    },

    #[snafu(display(
        "{runtime} at {socket} is not responding ({source}); is the daemon running?"
    ))]
    HealthCheck {
        runtime: RuntimeType,
        socket: String,
        source: RuntimeError,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectErrorKind {
    /// No container runtime found on the system.
    NoRuntimeFound,
    /// The configured host or socket cannot be used.
    Unsupported,
    /// The client could not be built for the socket.
    ConnectionFailed,
    /// The daemon did not answer the startup ping.
    Unhealthy,
}

impl ConnectError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ConnectErrorKind {
        match self {
            ConnectError::Detection { source } => match source {
                DetectionError::NoRuntimeFound => ConnectErrorKind::NoRuntimeFound,
                DetectionError::UnsupportedHost(_) => ConnectErrorKind::Unsupported,
            },
            ConnectError::Connection { .. } => ConnectErrorKind::ConnectionFailed,
            ConnectError::HealthCheck { .. } => ConnectErrorKind::Unhealthy,
        }
    }
}
