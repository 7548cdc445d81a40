use crate::errors::{AppError, AppResult};
use crate::models::account::Account;
use crate::models::area::Area;
use crate::models::status::StatusRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::HashMap;

const AREA_COLUMNS: &str = "id, name, location, created_at, last_updated";
const STATUS_COLUMNS: &str = "id, area_id, vehicle_type, capacity, occupied, created_at";
const USER_COLUMNS: &str = "id, email, password_hash, is_admin, created_at";

// ---------------------------
// Helpers
// ---------------------------

pub fn ts_to_db(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn ts_from_db(idx: usize, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// True when `e` comes from a UNIQUE constraint of the store.
pub fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
                && err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

// ---------------------------
// Row mapping
// ---------------------------

pub fn map_area_row(row: &Row) -> Result<Area> {
    let created: String = row.get("created_at")?;
    let updated: String = row.get("last_updated")?;

    Ok(Area {
        id: row.get("id")?,
        name: row.get("name")?,
        location: row.get("location")?,
        created_at: ts_from_db(3, &created)?,
        last_updated: ts_from_db(4, &updated)?,
        statuses: Vec::new(),
    })
}

pub fn map_status_row(row: &Row) -> Result<StatusRecord> {
    let created: String = row.get("created_at")?;

    Ok(StatusRecord {
        id: row.get("id")?,
        area_id: row.get("area_id")?,
        vehicle_type: row.get("vehicle_type")?,
        capacity: row.get("capacity")?,
        occupied: row.get("occupied")?,
        created_at: ts_from_db(5, &created)?,
    })
}

pub fn map_account_row(row: &Row) -> Result<Account> {
    let created: String = row.get("created_at")?;

    Ok(Account {
        id: row.get("id")?,
        email: row.get("email")?,
        password_hash: row.get("password_hash")?,
        is_admin: row.get::<_, i64>("is_admin")? == 1,
        created_at: ts_from_db(4, &created)?,
    })
}

// ---------------------------
// Areas
// ---------------------------

pub fn find_area(conn: &Connection, id: i64) -> AppResult<Option<Area>> {
    let sql = format!("SELECT {AREA_COLUMNS} FROM parking_areas WHERE id = ?1");
    let area = conn.query_row(&sql, [id], map_area_row).optional()?;

    match area {
        Some(mut a) => {
            a.statuses = load_statuses_for_area(conn, a.id)?;
            Ok(Some(a))
        }
        None => Ok(None),
    }
}

/// Area by id with its statuses, or `NotFound`.
pub fn get_area(conn: &Connection, id: i64) -> AppResult<Area> {
    find_area(conn, id)?.ok_or_else(|| AppError::not_found("Parking area", id))
}

pub fn area_id_by_name(conn: &Connection, name: &str) -> AppResult<Option<i64>> {
    let id = conn
        .query_row(
            "SELECT id FROM parking_areas WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

/// All areas ordered by name, each with its statuses attached.
pub fn load_areas(conn: &Connection) -> AppResult<Vec<Area>> {
    let sql = format!("SELECT {AREA_COLUMNS} FROM parking_areas ORDER BY name ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_area_row)?;

    let mut areas = Vec::new();
    for r in rows {
        areas.push(r?);
    }

    let mut grouped = load_statuses_grouped(conn)?;
    for area in &mut areas {
        area.statuses = grouped.remove(&area.id).unwrap_or_default();
    }

    Ok(areas)
}

pub fn insert_area(
    conn: &Connection,
    name: &str,
    location: &str,
    now: &DateTime<Utc>,
) -> Result<i64> {
    let ts = ts_to_db(now);
    conn.execute(
        "INSERT INTO parking_areas (name, location, created_at, last_updated)
         VALUES (?1, ?2, ?3, ?4)",
        params![name, location, ts, ts],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_area(
    conn: &Connection,
    id: i64,
    name: &str,
    location: &str,
    now: &DateTime<Utc>,
) -> Result<usize> {
    conn.execute(
        "UPDATE parking_areas
         SET name = ?1, location = ?2, last_updated = ?3
         WHERE id = ?4",
        params![name, location, ts_to_db(now), id],
    )
}

/// Refresh `last_updated` after a change to one of the area's records.
pub fn touch_area(conn: &Connection, id: i64, now: &DateTime<Utc>) -> Result<usize> {
    conn.execute(
        "UPDATE parking_areas SET last_updated = ?1 WHERE id = ?2",
        params![ts_to_db(now), id],
    )
}

pub fn delete_area_row(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM parking_areas WHERE id = ?1", [id])
}

// ---------------------------
// Status records
// ---------------------------

pub fn load_statuses_for_area(conn: &Connection, area_id: i64) -> AppResult<Vec<StatusRecord>> {
    let sql = format!(
        "SELECT {STATUS_COLUMNS} FROM parking_status
         WHERE area_id = ?1
         ORDER BY vehicle_type ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([area_id], map_status_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn load_statuses_grouped(conn: &Connection) -> AppResult<HashMap<i64, Vec<StatusRecord>>> {
    let sql = format!(
        "SELECT {STATUS_COLUMNS} FROM parking_status
         ORDER BY vehicle_type ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_status_row)?;

    let mut grouped: HashMap<i64, Vec<StatusRecord>> = HashMap::new();
    for r in rows {
        let status = r?;
        grouped.entry(status.area_id).or_default().push(status);
    }
    Ok(grouped)
}

pub fn find_status(conn: &Connection, id: i64) -> AppResult<Option<StatusRecord>> {
    let sql = format!("SELECT {STATUS_COLUMNS} FROM parking_status WHERE id = ?1");
    Ok(conn.query_row(&sql, [id], map_status_row).optional()?)
}

/// Status record by id, or `NotFound`.
pub fn get_status(conn: &Connection, id: i64) -> AppResult<StatusRecord> {
    find_status(conn, id)?.ok_or_else(|| AppError::not_found("Parking status", id))
}

pub fn insert_status(
    conn: &Connection,
    area_id: i64,
    vehicle_type: &str,
    capacity: i64,
    occupied: i64,
    now: &DateTime<Utc>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO parking_status (area_id, vehicle_type, capacity, occupied, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![area_id, vehicle_type, capacity, occupied, ts_to_db(now)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a status record (all fields except id, area and creation time).
pub fn update_status_row(conn: &Connection, status: &StatusRecord) -> Result<usize> {
    conn.execute(
        "UPDATE parking_status
         SET vehicle_type = ?1, capacity = ?2, occupied = ?3
         WHERE id = ?4",
        params![
            status.vehicle_type,
            status.capacity,
            status.occupied,
            status.id
        ],
    )
}

pub fn delete_status_row(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM parking_status WHERE id = ?1", [id])
}

pub fn delete_statuses_of_area(conn: &Connection, area_id: i64) -> Result<usize> {
    conn.execute("DELETE FROM parking_status WHERE area_id = ?1", [area_id])
}

// ---------------------------
// Accounts
// ---------------------------

pub fn find_account_by_email(conn: &Connection, email: &str) -> AppResult<Option<Account>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1");
    Ok(conn.query_row(&sql, [email], map_account_row).optional()?)
}

pub fn find_account(conn: &Connection, id: i64) -> AppResult<Option<Account>> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1");
    Ok(conn.query_row(&sql, [id], map_account_row).optional()?)
}

pub fn insert_account(
    conn: &Connection,
    email: &str,
    password_hash: &str,
    is_admin: bool,
    now: &DateTime<Utc>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO users (email, password_hash, is_admin, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![email, password_hash, if is_admin { 1 } else { 0 }, ts_to_db(now)],
    )?;
    Ok(conn.last_insert_rowid())
}

// ---------------------------
// Maintenance
// ---------------------------

/// Remove every area, status record and account.
/// Returns the number of (areas, statuses, accounts) removed.
pub fn wipe_all(conn: &Connection) -> Result<(usize, usize, usize)> {
    let statuses = conn.execute("DELETE FROM parking_status", [])?;
    let areas = conn.execute("DELETE FROM parking_areas", [])?;
    let accounts = conn.execute("DELETE FROM users", [])?;
    Ok((areas, statuses, accounts))
}
