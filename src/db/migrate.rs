use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
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

/// Check if the `intervals` table exists.
fn intervals_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='intervals'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `intervals` table has a `notes` column.
fn intervals_has_notes_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('intervals')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "notes" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `intervals` table with the modern schema (including `notes`).
fn create_intervals_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS intervals (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_id   TEXT NOT NULL,
            begin_date TEXT NOT NULL,
            end_date   TEXT NOT NULL,
            days       INTEGER NOT NULL,
            location   TEXT NOT NULL DEFAULT 'UNKNOWN',
            notes      TEXT,
            status     INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_intervals_owner ON intervals(owner_id);
        CREATE INDEX IF NOT EXISTS idx_intervals_owner_status ON intervals(owner_id, status);
        "#,
    )?;
    Ok(())
}

/// Ensure the local user directory table exists.
fn ensure_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         TEXT PRIMARY KEY,
            username   TEXT NOT NULL,
            avatar_url TEXT DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Migrate an old `intervals` table to include the `notes` column.
fn migrate_add_notes_column(conn: &Connection) -> Result<(), Error> {
    let version = "20240406_0001_add_interval_notes";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if intervals_has_notes_column(conn)? {
        return Ok(());
    }

    warning("Adding 'notes' column to intervals table...");

    // 2) Run the migration
    conn.execute("ALTER TABLE intervals ADD COLUMN notes TEXT;", [])
        .map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to add 'notes' column: {}", e)),
            )
        })?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added notes column to intervals')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'notes' to intervals table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by the `init` and `db --migrate` commands.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure intervals table exists
    if !intervals_table_exists(conn)? {
        create_intervals_table(conn)?;
        success("Created intervals table (modern schema).");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_intervals_owner ON intervals(owner_id);
            CREATE INDEX IF NOT EXISTS idx_intervals_owner_status ON intervals(owner_id, status);
            "#,
        )?;

        migrate_add_notes_column(conn)?;
    }

    // 3) Ensure the user directory table
    ensure_users_table(conn)?;

    Ok(())
}
