// ABOUTME: Composable capability traits for container runtimes.
// ABOUTME: Defines ContainerOps, ImageOps, StatsOps, SystemOps, LogOps and FullRuntime.

mod container;
mod error;
mod image;
mod logs;
pub(crate) mod sealed;
mod shared_types;
mod stats;
mod system;

pub use container::ContainerOps;
pub use error::{RuntimeError, RuntimeErrorKind};
pub use image::ImageOps;
pub use logs::LogOps;
pub use shared_types::*;
pub use stats::StatsOps;
pub use system::SystemOps;

/// Every capability at once.
pub trait FullRuntime: ContainerOps + ImageOps + StatsOps + SystemOps + LogOps {}

impl<T> FullRuntime for T where T: ContainerOps + ImageOps + StatsOps + SystemOps + LogOps {}
