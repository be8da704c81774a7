use photo_gallery_domain::{human_readable_size, DomainError, ImageRef, PendingSelection};
use tracing::{debug, error, warn};

use crate::{
    decode_gallery, encode_gallery, ApplicationError, BootstrapStorageCommand,
    BrowseLibraryCommand, CommitPendingCommand, DiscardPendingCommand, GalleryObserver,
    ImagePicker, KeyValueStore, LibraryEntry, LibraryScanner, LoadGalleryCommand, Notification,
    Notifier, PickImageCommand, PickOutcome, RemoveImageCommand, SelectPendingCommand,
};

pub const GALLERY_STORAGE_KEY: &str = "galeria";

/// Owns the saved gallery and the pending selection.
///
/// Every mutation writes the full gallery to storage first and only touches
/// memory once the write succeeded, so the in-memory list always matches the
/// persisted one. Mutations take `&mut self`, which keeps at most one of them
/// in flight.
pub struct GalleryStore {
    storage: Box<dyn KeyValueStore>,
    picker: Box<dyn ImagePicker>,
    scanner: Box<dyn LibraryScanner>,
    notifier: Box<dyn Notifier>,
    observers: Vec<Box<dyn GalleryObserver>>,
    gallery: Vec<ImageRef>,
    pending: Option<PendingSelection>,
    loaded: bool,
}

impl GalleryStore {
    pub fn new(
        storage: Box<dyn KeyValueStore>,
        picker: Box<dyn ImagePicker>,
        scanner: Box<dyn LibraryScanner>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            storage,
            picker,
            scanner,
            notifier,
            observers: Vec::new(),
            gallery: Vec::new(),
            pending: None,
            loaded: false,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn GalleryObserver>) {
        self.observers.push(observer);
    }

    pub fn bootstrap_storage(
        &self,
        _command: BootstrapStorageCommand,
    ) -> Result<(), ApplicationError> {
        self.storage.initialize()
    }

    pub fn gallery(&self) -> &[ImageRef] {
        &self.gallery
    }

    pub fn pending(&self) -> Option<&PendingSelection> {
        self.pending.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn pending_size_label(&self) -> String {
        human_readable_size(self.pending.as_ref().and_then(|pending| pending.byte_size))
    }

    /// Reads the persisted gallery. Failures are logged and leave the
    /// previous in-memory gallery in place.
    pub fn load(&mut self, _command: LoadGalleryCommand) -> &[ImageRef] {
        match self.read_persisted() {
            Ok(gallery) => {
                debug!(count = gallery.len(), "gallery loaded");
                self.gallery = gallery;
                self.loaded = true;
                self.notify_observers();
            }
            Err(error) => {
                error!(%error, "failed to load gallery");
            }
        }
        &self.gallery
    }

    pub fn select_pending(&mut self, command: SelectPendingCommand) {
        self.pending = Some(PendingSelection {
            image_ref: command.image_ref,
            byte_size: command.byte_size,
            dimensions: None,
        });
    }

    /// Runs the picker and makes its result the pending selection. A
    /// cancelled pick leaves the store untouched and yields `None`.
    pub fn pick_image(
        &mut self,
        command: PickImageCommand,
    ) -> Result<Option<&PendingSelection>, ApplicationError> {
        match self.picker.pick(&command.source)? {
            PickOutcome::Cancelled => {
                debug!("image pick cancelled");
                Ok(None)
            }
            PickOutcome::Picked(picked) => {
                debug!(image_ref = %picked.image_ref, "image picked");
                self.pending = Some(PendingSelection {
                    image_ref: picked.image_ref,
                    byte_size: picked.byte_size,
                    dimensions: picked.dimensions,
                });
                Ok(self.pending.as_ref())
            }
        }
    }

    pub fn discard_pending(&mut self, _command: DiscardPendingCommand) {
        self.pending = None;
    }

    pub fn commit_pending(
        &mut self,
        _command: CommitPendingCommand,
    ) -> Result<&[ImageRef], ApplicationError> {
        let Some(pending) = self.pending.as_ref() else {
            return Err(ApplicationError::NoPendingSelection);
        };

        let mut next = self.gallery.clone();
        next.push(pending.image_ref.clone());

        if let Err(error) = self.write_persisted(&next) {
            warn!(%error, "failed to save image to gallery");
            self.notifier
                .notify(Notification::error("Could not save the image."));
            return Err(error);
        }

        self.gallery = next;
        self.pending = None;
        self.notifier
            .notify(Notification::success("Image saved to gallery."));
        self.notify_observers();
        Ok(&self.gallery)
    }

    /// Removes the image at `index`. Indices outside the current gallery are
    /// rejected without touching storage.
    pub fn remove(
        &mut self,
        command: RemoveImageCommand,
    ) -> Result<&[ImageRef], ApplicationError> {
        let len = self.gallery.len();
        if command.index >= len {
            return Err(DomainError::IndexOutOfRange {
                index: command.index,
                len,
            }
            .into());
        }

        let mut next = self.gallery.clone();
        next.remove(command.index);

        if let Err(error) = self.write_persisted(&next) {
            warn!(%error, index = command.index, "failed to remove image from gallery");
            self.notifier
                .notify(Notification::error("Could not remove the image."));
            return Err(error);
        }

        self.gallery = next;
        self.notifier
            .notify(Notification::success("Image removed from gallery."));
        self.notify_observers();
        Ok(&self.gallery)
    }

    pub fn browse_library(
        &self,
        command: BrowseLibraryCommand,
    ) -> Result<Vec<LibraryEntry>, ApplicationError> {
        if command.folder.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "library folder must not be empty".to_string(),
            ));
        }
        self.scanner.scan(&command.folder)
    }

    fn read_persisted(&self) -> Result<Vec<ImageRef>, ApplicationError> {
        match self.storage.get(GALLERY_STORAGE_KEY)? {
            Some(raw) => decode_gallery(&raw),
            None => Ok(Vec::new()),
        }
    }

    // An empty gallery is stored as an absent key.
    fn write_persisted(&self, gallery: &[ImageRef]) -> Result<(), ApplicationError> {
        if gallery.is_empty() {
            return self.storage.delete(GALLERY_STORAGE_KEY);
        }
        let encoded = encode_gallery(gallery)?;
        self.storage.set(GALLERY_STORAGE_KEY, &encoded)
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            observer.gallery_changed(&self.gallery);
        }
    }
}
