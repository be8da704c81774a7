use std::path::PathBuf;

use photo_gallery_domain::{ImageKind, ImageRef};

use crate::ApplicationError;

/// String key-value persistence, the backing store of the saved gallery.
pub trait KeyValueStore {
    fn initialize(&self) -> Result<(), ApplicationError>;

    fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError>;

    fn delete(&self, key: &str) -> Result<(), ApplicationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    pub image_ref: ImageRef,
    pub byte_size: Option<u64>,
    pub dimensions: Option<(u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Cancelled,
    Picked(PickedImage),
}

pub trait ImagePicker {
    /// Resolves `source` into an image. An empty source means the user
    /// backed out of the picker.
    fn pick(&self, source: &str) -> Result<PickOutcome, ApplicationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

pub trait GalleryObserver {
    fn gallery_changed(&self, gallery: &[ImageRef]);
}

#[derive(Debug, Clone)]
pub struct LibraryEntry {
    pub path: PathBuf,
    pub byte_size: u64,
    pub kind: ImageKind,
}

pub trait LibraryScanner {
    fn scan(&self, folder: &str) -> Result<Vec<LibraryEntry>, ApplicationError>;
}

pub trait Clock {
    fn now_timestamp_string(&self) -> String;
}
