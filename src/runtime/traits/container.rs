// ABOUTME: Container operations trait for container runtimes.
// ABOUTME: List, inspect, create, start, stop and remove containers.

use super::error::RuntimeError;
use super::sealed::Sealed;
use super::shared_types::{ContainerConfig, ContainerDetails, RawContainer};
use crate::types::ContainerId;
use async_trait::async_trait;
use std::time::Duration;

/// Container lifecycle operations.
#[async_trait]
pub trait ContainerOps: Sealed + Send + Sync {
    /// List containers; stopped ones are included when `all` is set.
    async fn list_containers(&self, all: bool) -> Result<Vec<RawContainer>, RuntimeError>;

    /// Get detailed information about a container.
    async fn inspect_container(&self, id: &ContainerId) -> Result<ContainerDetails, RuntimeError>;

    /// Create a container from the given configuration.
    async fn create_container(&self, config: &ContainerConfig)
    -> Result<ContainerId, RuntimeError>;

    /// Start a created or stopped container.
    async fn start_container(&self, id: &ContainerId) -> Result<(), RuntimeError>;

    /// Stop a running container, killing it after `timeout`.
    async fn stop_container(&self, id: &ContainerId, timeout: Duration)
    -> Result<(), RuntimeError>;

    /// Remove a container; `force` kills it first if running.
    async fn remove_container(&self, id: &ContainerId, force: bool) -> Result<(), RuntimeError>;
}
