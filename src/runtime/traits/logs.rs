// ABOUTME: Log operations trait for container runtimes.
// ABOUTME: Reads the tail of a container's combined output.

use super::error::RuntimeError;
use super::sealed::Sealed;
use super::shared_types::LogLine;
use crate::types::ContainerId;
use async_trait::async_trait;

/// Log retrieval.
#[async_trait]
pub trait LogOps: Sealed + Send + Sync {
    /// The last `tail` lines of stdout and stderr, oldest first.
    async fn tail_logs(&self, id: &ContainerId, tail: u64) -> Result<Vec<LogLine>, RuntimeError>;
}
