use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Opaque handle (usually a URI) naming a picked or saved image.
///
/// Nothing inspects the contents; two refs are equal when their strings are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyImageRef);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The image currently being previewed but not yet saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSelection {
    pub image_ref: ImageRef,
    pub byte_size: Option<u64>,
    pub dimensions: Option<(u32, u32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
    Webp,
    Heic,
    Unsupported,
}

impl ImageKind {
    pub fn is_supported(self) -> bool {
        self != Self::Unsupported
    }
}

pub fn detect_image_kind(path: &Path) -> ImageKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return ImageKind::Unsupported;
    };

    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => ImageKind::Jpeg,
        "png" => ImageKind::Png,
        "gif" => ImageKind::Gif,
        "webp" => ImageKind::Webp,
        "heic" | "heif" => ImageKind::Heic,
        _ => ImageKind::Unsupported,
    }
}
