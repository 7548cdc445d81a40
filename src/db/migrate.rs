use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::progress;
use rusqlite::{Connection, OptionalExtension, Result};

/// One schema step, recorded in the `log` table once applied.
struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_parking_schema",
        description: "Created users, parking_areas and parking_status tables",
        apply: create_parking_schema,
    },
    Migration {
        version: "20250312_0002_add_lookup_indexes",
        description: "Added lookup indexes on parking_status and log",
        apply: add_lookup_indexes,
    },
];

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

fn create_parking_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            email         TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            is_admin      INTEGER NOT NULL DEFAULT 0 CHECK(is_admin IN (0, 1)),
            created_at    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS parking_areas (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL UNIQUE,
            location     TEXT NOT NULL,
            created_at   TEXT NOT NULL,
            last_updated TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS parking_status (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            area_id      INTEGER NOT NULL REFERENCES parking_areas(id) ON DELETE CASCADE,
            vehicle_type TEXT NOT NULL,
            capacity     INTEGER NOT NULL CHECK(capacity >= 1),
            occupied     INTEGER NOT NULL DEFAULT 0 CHECK(occupied >= 0 AND occupied <= capacity),
            created_at   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn add_lookup_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_parking_status_area_type
            ON parking_status(area_id, vehicle_type);
        CREATE INDEX IF NOT EXISTS idx_log_operation_target
            ON log(operation, target);
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Names of the migrations already recorded in the `log` table.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Every migration runs in its own transaction together with the
/// `migration_applied` marker, so a failed step leaves no trace.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for migration in MIGRATIONS {
        if is_applied(conn, migration.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        (migration.apply)(&tx).map_err(|e| {
            AppError::Migration(format!("{} failed: {}", migration.version, e))
        })?;
        audit(
            &tx,
            "migration_applied",
            migration.version,
            migration.description,
        )?;
        tx.commit()?;

        progress(format!(
            "Migration applied: {} → {}",
            migration.version, migration.description
        ));
    }

    Ok(())
}
