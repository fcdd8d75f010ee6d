use rusqlite::{Connection, OptionalExtension, Result, params};

/// Current schema version stored in `schema_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Ensure the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure the key-value slot table exists.
fn ensure_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn ensure_version_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            id      INTEGER PRIMARY KEY CHECK (id = 1),
            version INTEGER NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Read the recorded schema version (0 when never initialized).
pub fn current_version(conn: &Connection) -> Result<i64> {
    ensure_version_table(conn)?;
    let v: Option<i64> = conn
        .query_row("SELECT version FROM schema_version WHERE id = 1", [], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v.unwrap_or(0))
}

/// Apply every missing schema step. Idempotent: safe to call on each open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let version = current_version(conn)?;

    if version < 1 {
        ensure_log_table(conn)?;
        ensure_kv_table(conn)?;
        conn.execute(
            "INSERT OR REPLACE INTO schema_version (id, version) VALUES (1, ?1)",
            params![SCHEMA_VERSION],
        )?;
    }

    Ok(())
}
