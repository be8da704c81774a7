mod queries;

use std::fs;
use std::path::PathBuf;

use photo_gallery_application::{ApplicationError, Clock, KeyValueStore};
use rusqlite::Connection;

use crate::migrations::MIGRATIONS;

/// Key-value storage in a single SQLite table. Each call opens its own
/// connection, so a value is durable as soon as `set` returns.
pub struct SqliteKeyValueStore {
    path: PathBuf,
    clock: Box<dyn Clock>,
}

impl SqliteKeyValueStore {
    pub fn new(path: String, clock: Box<dyn Clock>) -> Self {
        Self {
            path: PathBuf::from(path),
            clock,
        }
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "storage path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        for migration in MIGRATIONS {
            conn.execute_batch(migration)
                .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        }

        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let conn = self.open_connection()?;
        queries::get_value(&conn, key)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        let now = self.clock.now_timestamp_string();
        queries::put_value(&conn, key, value, &now)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        queries::delete_value(&conn, key)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}
