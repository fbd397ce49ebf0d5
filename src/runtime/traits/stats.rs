// ABOUTME: Resource usage trait for container runtimes.
// ABOUTME: Fetches one previous/current counter pair per call.

use super::error::RuntimeError;
use super::sealed::Sealed;
use super::shared_types::StatsPair;
use crate::types::ContainerId;
use async_trait::async_trait;

/// Resource usage snapshots.
#[async_trait]
pub trait StatsOps: Sealed + Send + Sync {
    /// Fetch a single non-streaming usage snapshot.
    ///
    /// The runtime samples twice internally, so the pair's `previous` and
    /// `current` are consecutive readings of the same container.
    async fn stats_snapshot(&self, id: &ContainerId) -> Result<StatsPair, RuntimeError>;
}
