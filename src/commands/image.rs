// ABOUTME: Image commands: pull and remove.
// ABOUTME: Removal looks the image up first so the outcome can name it by its tags.

use super::{CommandError, Outcome};
use crate::runtime::ImageOps;
use crate::types::{ImageId, ImageRef};

/// Pull an image and wait for it to finish.
pub async fn pull_image<R: ImageOps + ?Sized>(
    runtime: &R,
    reference: &str,
) -> Result<Outcome, CommandError> {
    let reference = ImageRef::parse(reference)?;
    runtime.pull_image(&reference).await?;
    Ok(Outcome::new(format!("Image '{reference}' pulled successfully."))
        .with_subject(reference.to_string()))
}

/// Force-remove an image by ID or tag.
///
/// The reference is passed through as given, so removing one tag of a
/// multi-tag image only untags it. An image still used by a container
/// fails with Conflict.
pub async fn remove_image<R: ImageOps + ?Sized>(
    runtime: &R,
    reference: &str,
) -> Result<Outcome, CommandError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(CommandError::Validation("image name is required".to_string()));
    }

    let target = ImageId::new(reference);
    let details = runtime.inspect_image(&target).await?;
    let label = if details.tags.is_empty() {
        details.id.short().to_string()
    } else {
        details.tags.join(", ")
    };

    runtime.remove_image(&target, true).await?;

    Ok(Outcome::new(format!("Image {label} removed successfully.")).with_subject(label))
}
