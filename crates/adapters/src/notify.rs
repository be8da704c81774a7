use photo_gallery_application::{GalleryObserver, Notification, NotificationKind, Notifier};
use photo_gallery_domain::ImageRef;
use tracing::{debug, info, warn};

use crate::presenters::present_notification;

#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                info!(message = %notification.message, "user notified")
            }
            NotificationKind::Error => {
                warn!(message = %notification.message, "user notified of failure")
            }
        }
        println!("{}", present_notification(&notification));
    }
}

#[derive(Debug, Default)]
pub struct TracingGalleryObserver;

impl GalleryObserver for TracingGalleryObserver {
    fn gallery_changed(&self, gallery: &[ImageRef]) {
        debug!(count = gallery.len(), "gallery changed");
    }
}
