// ABOUTME: System-wide prune of unused containers, images and networks.
// ABOUTME: Volumes are only included when asked for.

use super::{CommandError, Outcome};
use crate::runtime::{PruneScope, SystemOps};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Remove stopped containers, unused images and unused networks.
pub async fn prune<R: SystemOps + ?Sized>(
    runtime: &R,
    include_volumes: bool,
) -> Result<Outcome, CommandError> {
    let report = runtime.prune(PruneScope::system(include_volumes)).await?;
    tracing::debug!(
        containers = report.containers_deleted,
        images = report.images_deleted,
        networks = report.networks_deleted,
        volumes = report.volumes_deleted,
        "prune finished"
    );

    let mut outcome = Outcome::new(format!(
        "System cleanup successful. Reclaimed {:.2} MB.",
        report.reclaimed_bytes as f64 / BYTES_PER_MB
    ));
    outcome.reclaimed_bytes = Some(report.reclaimed_bytes);
    Ok(outcome)
}
