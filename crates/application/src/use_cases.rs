use photo_gallery_domain::ImageRef;

#[derive(Debug, Clone, Default)]
pub struct BootstrapStorageCommand;

#[derive(Debug, Clone, Default)]
pub struct LoadGalleryCommand;

#[derive(Debug, Clone)]
pub struct SelectPendingCommand {
    pub image_ref: ImageRef,
    pub byte_size: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct PickImageCommand {
    pub source: String,
}

#[derive(Debug, Clone, Default)]
pub struct CommitPendingCommand;

#[derive(Debug, Clone, Default)]
pub struct DiscardPendingCommand;

#[derive(Debug, Clone, Copy)]
pub struct RemoveImageCommand {
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct BrowseLibraryCommand {
    pub folder: String,
}
