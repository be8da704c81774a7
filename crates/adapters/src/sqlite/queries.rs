use rusqlite::{params, Connection, OptionalExtension, Result};

pub fn get_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM key_values WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}

pub fn put_value(conn: &Connection, key: &str, value: &str, updated_at: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO key_values (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at",
        params![key, value, updated_at],
    )?;
    Ok(())
}

pub fn delete_value(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM key_values WHERE key = ?1", params![key])?;
    Ok(())
}
