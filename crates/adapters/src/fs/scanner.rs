use std::path::Path;

use photo_gallery_application::{ApplicationError, LibraryEntry, LibraryScanner};
use photo_gallery_domain::detect_image_kind;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct WalkdirLibraryScanner;

impl LibraryScanner for WalkdirLibraryScanner {
    fn scan(&self, folder: &str) -> Result<Vec<LibraryEntry>, ApplicationError> {
        let folder_path = Path::new(folder);
        if !folder_path.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "folder does not exist or is not a directory: {folder}"
            )));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(folder_path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let kind = detect_image_kind(entry.path());
            if !kind.is_supported() {
                continue;
            }

            let metadata = entry
                .metadata()
                .map_err(|error| ApplicationError::Io(error.to_string()))?;
            entries.push(LibraryEntry {
                path: entry.into_path(),
                byte_size: metadata.len(),
                kind,
            });
        }

        Ok(entries)
    }
}
