pub mod fs;
pub mod memory;
pub mod migrations;
pub mod notify;
pub mod presenters;
pub mod sqlite;

pub use fs::{FsImagePicker, SystemClock, WalkdirLibraryScanner};
pub use memory::InMemoryKeyValueStore;
pub use notify::{ConsoleNotifier, TracingGalleryObserver};
pub use presenters::{
    present_gallery_row, present_library_entry, present_notification, present_pending,
};
pub use sqlite::SqliteKeyValueStore;
