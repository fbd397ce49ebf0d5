// ABOUTME: Type-safe identifiers and validated user input types.
// ABOUTME: Container/image IDs, image references and port specs.

mod id;
mod image_ref;
mod port_spec;

pub use id::{ContainerId, Id, ImageId, SHORT_ID_LEN};
pub use image_ref::{DEFAULT_TAG, ImageRef, ParseImageRefError};
pub use port_spec::{ParsePortSpecError, PortSpec};
