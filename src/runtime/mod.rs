// ABOUTME: Runtime client adapter for Docker and Podman.
// ABOUTME: Capability traits, the bollard implementation, detection and startup connection.

mod bollard;
mod connect;
mod detection;
mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use connect::connect;
pub use detection::{DetectionError, detect_local};
pub use error::{ConnectError, ConnectErrorKind};
pub use traits::*;
pub use types::{RuntimeConfig, RuntimeInfo, RuntimeType};
