use std::path::Path;

use photo_gallery_application::{ApplicationError, ImagePicker, PickOutcome, PickedImage};
use photo_gallery_domain::{detect_image_kind, ImageKind, ImageRef};
use tracing::debug;

/// Picks images straight from the local filesystem.
///
/// The source is a file path; a blank source counts as a cancelled pick.
/// Picked images are referenced as `file://` URIs of their canonical path.
#[derive(Debug, Default)]
pub struct FsImagePicker;

impl ImagePicker for FsImagePicker {
    fn pick(&self, source: &str) -> Result<PickOutcome, ApplicationError> {
        let source = source.trim();
        if source.is_empty() {
            return Ok(PickOutcome::Cancelled);
        }

        let path = Path::new(source);
        if !path.is_file() {
            return Err(ApplicationError::InvalidInput(format!(
                "image file does not exist: {source}"
            )));
        }

        let kind = detect_image_kind(path);
        if !kind.is_supported() {
            return Err(ApplicationError::InvalidInput(format!(
                "unsupported image format: {source}"
            )));
        }

        let canonical = path
            .canonicalize()
            .map_err(|error| ApplicationError::Io(error.to_string()))?;
        let metadata = canonical
            .metadata()
            .map_err(|error| ApplicationError::Io(error.to_string()))?;
        let image_ref = ImageRef::new(format!("file://{}", canonical.display()))?;

        Ok(PickOutcome::Picked(PickedImage {
            image_ref,
            byte_size: Some(metadata.len()),
            dimensions: probe_dimensions(&canonical, kind),
        }))
    }
}

fn probe_dimensions(path: &Path, kind: ImageKind) -> Option<(u32, u32)> {
    // no HEIC decoder available
    if kind == ImageKind::Heic {
        return None;
    }

    match image::image_dimensions(path) {
        Ok(dimensions) => Some(dimensions),
        Err(error) => {
            debug!(?path, %error, "could not read image dimensions");
            None
        }
    }
}
