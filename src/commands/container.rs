// ABOUTME: Container commands: start, stop, remove and run.
// ABOUTME: Run validates the image and port spec up front and pulls the image when missing.

use super::{CommandError, Outcome};
use crate::runtime::{ContainerConfig, ContainerOps, ImageOps};
use crate::types::{ContainerId, ImageRef, PortSpec};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A lifecycle action on an existing container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerAction {
    Start,
    Stop,
    /// Forced: a running container is killed first.
    Remove,
}

impl ContainerAction {
    fn past_tense(self) -> &'static str {
        match self {
            ContainerAction::Start => "started",
            ContainerAction::Stop => "stopped",
            ContainerAction::Remove => "removed",
        }
    }
}

impl fmt::Display for ContainerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContainerAction::Start => "start",
            ContainerAction::Stop => "stop",
            ContainerAction::Remove => "remove",
        })
    }
}

impl FromStr for ContainerAction {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(ContainerAction::Start),
            "stop" => Ok(ContainerAction::Stop),
            "remove" | "rm" => Ok(ContainerAction::Remove),
            other => Err(CommandError::Validation(format!(
                "unknown container action {other:?}"
            ))),
        }
    }
}

/// Start, stop or remove a container by ID or name.
///
/// The container is looked up first so the outcome can name it; a vanished
/// container fails here as NotFound.
pub async fn perform_container_action<R: ContainerOps + ?Sized>(
    runtime: &R,
    id: &ContainerId,
    action: ContainerAction,
    stop_timeout: Duration,
) -> Result<Outcome, CommandError> {
    let details = runtime.inspect_container(id).await?;
    tracing::debug!(container = %details.name, %action, "performing container action");

    match action {
        ContainerAction::Start => runtime.start_container(&details.id).await?,
        ContainerAction::Stop => runtime.stop_container(&details.id, stop_timeout).await?,
        ContainerAction::Remove => runtime.remove_container(&details.id, true).await?,
    }

    Ok(Outcome::new(format!(
        "Container {} {} successfully.",
        details.name,
        action.past_tense()
    ))
    .with_subject(details.name))
}

/// Create and start a detached container, pulling its image when absent.
///
/// Both `image` and `ports` are parsed before any runtime call, so a
/// malformed value has no effect at all.
pub async fn run_container<R: ContainerOps + ImageOps + ?Sized>(
    runtime: &R,
    image: &str,
    name: Option<&str>,
    ports: &str,
) -> Result<Outcome, CommandError> {
    let image = ImageRef::parse(image)?;
    let ports = PortSpec::parse(ports)?;
    let name = name.map(str::trim).filter(|n| !n.is_empty());

    if !runtime.image_exists(&image).await? {
        tracing::info!(%image, "image not present locally, pulling");
        runtime.pull_image(&image).await?;
    }

    let config = ContainerConfig {
        name: name.map(str::to_string),
        image: image.clone(),
        ports,
    };
    let id = runtime.create_container(&config).await?;
    runtime.start_container(&id).await?;

    Ok(
        Outcome::new(format!("Successfully started container from image {image}."))
            .with_subject(name.map(str::to_string).unwrap_or_else(|| id.short().to_string())),
    )
}
