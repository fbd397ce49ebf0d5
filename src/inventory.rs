// ABOUTME: Inventory reconciler: assembles container and image listings from raw runtime data.
// ABOUTME: A failed list call empties the listing; per-row failures degrade only that row.

use crate::diagnostics::{Diagnostics, Warning};
use crate::metrics::{self, MetricsReading};
use crate::runtime::{
    ContainerOps, ContainerState, ImageOps, RawContainer, RawImage, RuntimeError, StatsOps,
    StatsPair,
};
use crate::types::ImageId;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use std::fmt;

/// What a container's image resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "name", rename_all = "snake_case")]
pub enum ImageReference {
    /// Tags joined with ", ", or the short image ID when untagged.
    Resolved(String),
    /// The image could not be looked up, typically because it was deleted.
    Unresolved,
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageReference::Resolved(name) => f.write_str(name),
            ImageReference::Unresolved => f.write_str("<unresolved>"),
        }
    }
}

/// One row of the container listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerSummary {
    /// Short container ID.
    pub id: String,
    pub name: String,
    pub state: ContainerState,
    /// Runtime status text, e.g. "Up 3 minutes".
    pub status: String,
    pub image: ImageReference,
    /// Present only for running containers whose stats could be sampled.
    pub metrics: Option<MetricsReading>,
}

/// One row of the image listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSummary {
    pub id: ImageId,
    /// May be empty for untagged images.
    pub tags: Vec<String>,
    pub size: u64,
    pub created: Option<DateTime<Utc>>,
}

impl From<RawImage> for ImageSummary {
    fn from(image: RawImage) -> Self {
        Self {
            id: image.id,
            tags: image.tags,
            size: image.size,
            created: DateTime::from_timestamp(image.created, 0),
        }
    }
}

/// A listing plus how it was obtained.
///
/// `error` is set only when the top-level list call failed, in which case
/// `items` is empty. Row-level problems end up in `warnings`.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub error: Option<RuntimeError>,
    pub warnings: Vec<Warning>,
}

impl<T> Listing<T> {
    pub(crate) fn failed(error: RuntimeError) -> Self {
        Self {
            items: Vec::new(),
            error: Some(error),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn complete(items: Vec<T>, diagnostics: Diagnostics) -> Self {
        Self {
            items,
            error: None,
            warnings: diagnostics.into_warnings(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Per-row lookups, each allowed to fail on its own.
struct Enrichment {
    image: Result<String, RuntimeError>,
    stats: Option<Result<StatsPair, RuntimeError>>,
}

/// Build the full container listing, running and stopped.
///
/// Image resolution and stats sampling run concurrently across rows. A
/// failed image lookup gives that row [`ImageReference::Unresolved`]; a
/// failed stats call leaves its metrics absent. Neither affects other rows.
pub async fn build_container_listing<R>(runtime: &R) -> Listing<ContainerSummary>
where
    R: ContainerOps + ImageOps + StatsOps + ?Sized,
{
    let containers = match runtime.list_containers(true).await {
        Ok(containers) => containers,
        Err(e) => {
            tracing::warn!(error = %e, "container listing failed");
            return Listing::failed(e);
        }
    };

    let enrichments = join_all(containers.iter().map(|c| enrich(runtime, c))).await;

    let mut diagnostics = Diagnostics::default();
    let items = containers
        .into_iter()
        .zip(enrichments)
        .map(|(container, enrichment)| summarize(container, enrichment, &mut diagnostics))
        .collect();

    Listing::complete(items, diagnostics)
}

/// Build the image listing. There is no per-row enrichment.
pub async fn build_image_listing<R: ImageOps + ?Sized>(runtime: &R) -> Listing<ImageSummary> {
    match runtime.list_images().await {
        Ok(images) => Listing::complete(
            images.into_iter().map(ImageSummary::from).collect(),
            Diagnostics::default(),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "image listing failed");
            Listing::failed(e)
        }
    }
}

/// Human name of an image: its tags, or its short ID when it has none.
pub async fn resolve_image_name<R: ImageOps + ?Sized>(
    runtime: &R,
    image_id: &ImageId,
) -> Result<String, RuntimeError> {
    let details = runtime.inspect_image(image_id).await?;
    if details.tags.is_empty() {
        Ok(details.id.short().to_string())
    } else {
        Ok(details.tags.join(", "))
    }
}

async fn enrich<R>(runtime: &R, container: &RawContainer) -> Enrichment
where
    R: ImageOps + StatsOps + ?Sized,
{
    let image = resolve_image_name(runtime, &container.image_id);
    if container.state.is_running() {
        let (image, stats) = futures::join!(image, runtime.stats_snapshot(&container.id));
        Enrichment {
            image,
            stats: Some(stats),
        }
    } else {
        Enrichment {
            image: image.await,
            stats: None,
        }
    }
}

fn summarize(
    container: RawContainer,
    enrichment: Enrichment,
    diagnostics: &mut Diagnostics,
) -> ContainerSummary {
    let image = match enrichment.image {
        Ok(name) => ImageReference::Resolved(name),
        Err(e) => {
            tracing::debug!(container = %container.name, kind = %e.kind(), "image lookup failed");
            diagnostics.warn(Warning::image_unresolved(&container.name, e.to_string()));
            ImageReference::Unresolved
        }
    };

    let metrics = match enrichment.stats {
        Some(Ok(pair)) => Some(metrics::derive(&pair)),
        Some(Err(e)) => {
            diagnostics.warn(Warning::metrics_unavailable(&container.name, e.to_string()));
            None
        }
        None => None,
    };

    ContainerSummary {
        id: container.id.short().to_string(),
        name: container.name,
        state: container.state,
        status: container.status,
        image,
        metrics,
    }
}
