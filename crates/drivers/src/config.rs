pub const STORAGE_PATH_ENV: &str = "PHOTO_GALLERY_STORAGE";
pub const LIBRARY_DIR_ENV: &str = "PHOTO_GALLERY_LIBRARY";
pub const IN_MEMORY_STORAGE: &str = ":memory:";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_path: String,
    pub library_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: "gallery.sqlite3".to_string(),
            library_dir: ".".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(STORAGE_PATH_ENV).filter(|value| !value.trim().is_empty()) {
            config.storage_path = path;
        }
        if let Some(dir) = lookup(LIBRARY_DIR_ENV).filter(|value| !value.trim().is_empty()) {
            config.library_dir = dir;
        }
        config
    }

    pub fn uses_in_memory_storage(&self) -> bool {
        self.storage_path == IN_MEMORY_STORAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_local_storage_file() {
        let config = AppConfig::default();
        assert_eq!(config.storage_path, "gallery.sqlite3");
        assert_eq!(config.library_dir, ".");
        assert!(!config.uses_in_memory_storage());
    }

    #[test]
    fn environment_overrides_non_blank_values() {
        let config = AppConfig::from_lookup(|key| match key {
            STORAGE_PATH_ENV => Some(IN_MEMORY_STORAGE.to_string()),
            LIBRARY_DIR_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert!(config.uses_in_memory_storage());
        assert_eq!(config.library_dir, ".");
    }
}
