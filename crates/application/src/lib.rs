mod codec;
mod error;
mod ports;
mod service;
mod use_cases;

pub use codec::{decode_gallery, encode_gallery};
pub use error::ApplicationError;
pub use ports::{
    Clock, GalleryObserver, ImagePicker, KeyValueStore, LibraryEntry, LibraryScanner,
    Notification, NotificationKind, Notifier, PickOutcome, PickedImage,
};
pub use service::{GalleryStore, GALLERY_STORAGE_KEY};
pub use use_cases::{
    BootstrapStorageCommand, BrowseLibraryCommand, CommitPendingCommand, DiscardPendingCommand,
    LoadGalleryCommand, PickImageCommand, RemoveImageCommand, SelectPendingCommand,
};
