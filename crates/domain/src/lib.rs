mod error;
mod image;
mod size;

pub use error::DomainError;
pub use image::{detect_image_kind, ImageKind, ImageRef, PendingSelection};
pub use size::human_readable_size;
