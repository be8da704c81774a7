use photo_gallery_application::{LibraryEntry, Notification, NotificationKind};
use photo_gallery_domain::{human_readable_size, ImageKind, ImageRef, PendingSelection};

pub fn present_gallery_row(index: usize, image: &ImageRef) -> String {
    format!("{index}\t{image}")
}

pub fn present_pending(pending: &PendingSelection) -> String {
    let mut details = Vec::new();
    let size = human_readable_size(pending.byte_size);
    if !size.is_empty() {
        details.push(size);
    }
    if let Some((width, height)) = pending.dimensions {
        details.push(format!("{width}x{height}"));
    }

    if details.is_empty() {
        format!("pending {}", pending.image_ref)
    } else {
        format!("pending {} ({})", pending.image_ref, details.join(", "))
    }
}

pub fn present_library_entry(entry: &LibraryEntry) -> String {
    format!(
        "{}\t{}\t{}",
        kind_label(entry.kind),
        human_readable_size(Some(entry.byte_size)),
        entry.path.display()
    )
}

pub fn present_notification(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Error => "error",
    };
    format!(
        "[{marker}] {}: {}",
        notification.title, notification.message
    )
}

fn kind_label(kind: ImageKind) -> &'static str {
    match kind {
        ImageKind::Jpeg => "JPEG",
        ImageKind::Png => "PNG",
        ImageKind::Gif => "GIF",
        ImageKind::Webp => "WEBP",
        ImageKind::Heic => "HEIC",
        ImageKind::Unsupported => "UNKNOWN",
    }
}
