pub const MIGRATIONS: &[&str] = &["CREATE TABLE IF NOT EXISTS key_values (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );"];
