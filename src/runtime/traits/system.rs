// ABOUTME: Runtime-wide operations trait.
// ABOUTME: Summary info, connectivity ping and pruning of unused objects.

use super::error::RuntimeError;
use super::sealed::Sealed;
use super::shared_types::{PruneReport, PruneScope, SystemSummary};
use async_trait::async_trait;

/// Runtime-wide operations.
#[async_trait]
pub trait SystemOps: Sealed + Send + Sync {
    /// Version, platform and object counts.
    async fn info(&self) -> Result<SystemSummary, RuntimeError>;

    /// Ping the runtime to check connectivity.
    async fn ping(&self) -> Result<(), RuntimeError>;

    /// Remove unused objects in the given scope.
    async fn prune(&self, scope: PruneScope) -> Result<PruneReport, RuntimeError>;
}
