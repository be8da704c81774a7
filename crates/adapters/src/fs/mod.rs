mod clock;
mod picker;
mod scanner;

pub use clock::SystemClock;
pub use picker::FsImagePicker;
pub use scanner::WalkdirLibraryScanner;
