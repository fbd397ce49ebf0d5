// ABOUTME: Image operations trait for container runtimes.
// ABOUTME: List, inspect, pull, remove and search container images.

use super::error::RuntimeError;
use super::sealed::Sealed;
use super::shared_types::{ImageDetails, RawImage, RegistryHit};
use crate::types::{ImageId, ImageRef};
use async_trait::async_trait;

/// Image operations.
#[async_trait]
pub trait ImageOps: Sealed + Send + Sync {
    /// List local images.
    async fn list_images(&self) -> Result<Vec<RawImage>, RuntimeError>;

    /// Inspect a local image by ID or reference.
    async fn inspect_image(&self, id: &ImageId) -> Result<ImageDetails, RuntimeError>;

    /// Check if an image exists locally.
    async fn image_exists(&self, reference: &ImageRef) -> Result<bool, RuntimeError> {
        match self.inspect_image(&ImageId::new(reference.to_string())).await {
            Ok(_) => Ok(true),
            Err(RuntimeError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Pull an image from its registry, waiting for completion.
    async fn pull_image(&self, reference: &ImageRef) -> Result<(), RuntimeError>;

    /// Remove a local image.
    async fn remove_image(&self, id: &ImageId, force: bool) -> Result<(), RuntimeError>;

    /// Search the default registry.
    async fn search_images(&self, term: &str, limit: u32)
    -> Result<Vec<RegistryHit>, RuntimeError>;
}
