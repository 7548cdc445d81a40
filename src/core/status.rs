use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_status_row, get_area, get_status, insert_status, touch_area, update_status_row,
};
use crate::errors::{AppError, AppResult};
use crate::models::status::StatusRecord;
use crate::models::views::QuickSetOutcome;
use chrono::Utc;
use rusqlite::Connection;

/// Mutations of per-vehicle-type status records.
///
/// Every operation runs in one transaction: the record, the owning area's
/// `last_updated` and the audit entry are committed together or not at all.
pub struct StatusLogic;

/// Upper bound for one record's capacity. Area and global totals are
/// `i64` sums of these.
pub const MAX_CAPACITY: i64 = i32::MAX as i64;

/// Check `0 <= occupied <= capacity` and `1 <= capacity <= MAX_CAPACITY`.
/// Missing values count as 0.
pub fn validate_counts(capacity: Option<i64>, occupied: Option<i64>) -> AppResult<(i64, i64)> {
    let capacity = capacity.unwrap_or(0);
    let occupied = occupied.unwrap_or(0);

    if occupied > capacity {
        return Err(AppError::InvalidRange(format!(
            "occupied spots ({occupied}) cannot exceed capacity ({capacity})"
        )));
    }
    if occupied < 0 {
        return Err(AppError::InvalidRange(format!(
            "occupied spots cannot be negative ({occupied})"
        )));
    }
    if capacity < 1 {
        return Err(AppError::InvalidRange(format!(
            "capacity must be at least 1 ({capacity})"
        )));
    }
    if capacity > MAX_CAPACITY {
        return Err(AppError::InvalidRange(format!(
            "capacity cannot exceed {MAX_CAPACITY} ({capacity})"
        )));
    }

    Ok((capacity, occupied))
}

impl StatusLogic {
    /// Attach a new status record to an area.
    pub fn add(
        pool: &mut DbPool,
        area_id: i64,
        vehicle_type: &str,
        capacity: Option<i64>,
        occupied: Option<i64>,
    ) -> AppResult<StatusRecord> {
        pool.with_tx(|tx| Self::add_in(tx, area_id, vehicle_type, capacity, occupied))
    }

    /// `add` inside a transaction owned by the caller.
    pub(crate) fn add_in(
        tx: &Connection,
        area_id: i64,
        vehicle_type: &str,
        capacity: Option<i64>,
        occupied: Option<i64>,
    ) -> AppResult<StatusRecord> {
        let area = get_area(tx, area_id)?;

        if area.has_vehicle_type(vehicle_type) {
            return Err(AppError::DuplicateVehicleType {
                area: area.name,
                vehicle_type: vehicle_type.to_string(),
            });
        }

        let (capacity, occupied) = validate_counts(capacity, occupied)?;

        let now = Utc::now();
        let id = insert_status(tx, area.id, vehicle_type, capacity, occupied, &now)?;
        touch_area(tx, area.id, &now)?;

        audit(
            tx,
            "add_status",
            &area.name,
            &format!("Added {vehicle_type} status ({occupied}/{capacity})"),
        )?;

        get_status(tx, id)
    }

    /// Replace type and counters of an existing record.
    ///
    /// The vehicle type is not checked against the area's other records here.
    pub fn update(
        pool: &mut DbPool,
        status_id: i64,
        vehicle_type: &str,
        capacity: Option<i64>,
        occupied: Option<i64>,
    ) -> AppResult<StatusRecord> {
        pool.with_tx(|tx| {
            let mut status = get_status(tx, status_id)?;
            let (capacity, occupied) = validate_counts(capacity, occupied)?;

            status.vehicle_type = vehicle_type.to_string();
            status.capacity = capacity;
            status.occupied = occupied;
            update_status_row(tx, &status)?;
            touch_area(tx, status.area_id, &Utc::now())?;

            audit(
                tx,
                "edit_status",
                &format!("status #{status_id}"),
                &format!("Updated {vehicle_type} status ({occupied}/{capacity})"),
            )?;

            Ok(status)
        })
    }

    /// Lightweight occupancy update; returns the recomputed availability.
    pub fn quick_set_occupied(
        pool: &mut DbPool,
        status_id: i64,
        new_occupied: Option<i64>,
    ) -> AppResult<QuickSetOutcome> {
        pool.with_tx(|tx| {
            let mut status = get_status(tx, status_id)?;

            let occupied = new_occupied
                .ok_or_else(|| AppError::InvalidRange("occupied value required".into()))?;
            if occupied < 0 {
                return Err(AppError::InvalidRange(format!(
                    "occupied cannot be negative ({occupied})"
                )));
            }
            if occupied > status.capacity {
                return Err(AppError::InvalidRange(format!(
                    "occupied ({occupied}) exceeds capacity ({})",
                    status.capacity
                )));
            }

            status.occupied = occupied;
            update_status_row(tx, &status)?;
            touch_area(tx, status.area_id, &Utc::now())?;

            audit(
                tx,
                "set_status",
                &format!("status #{status_id}"),
                &format!(
                    "Set {} occupancy to {}/{}",
                    status.vehicle_type, status.occupied, status.capacity
                ),
            )?;

            Ok(QuickSetOutcome {
                success: true,
                available: status.available(),
                occupied: status.occupied,
            })
        })
    }

    /// Remove one record from its area.
    pub fn delete(pool: &mut DbPool, status_id: i64) -> AppResult<StatusRecord> {
        pool.with_tx(|tx| {
            let status = get_status(tx, status_id)?;

            delete_status_row(tx, status.id)?;
            touch_area(tx, status.area_id, &Utc::now())?;

            audit(
                tx,
                "del_status",
                &format!("status #{status_id}"),
                &format!("Deleted {} status", status.vehicle_type),
            )?;

            Ok(status)
        })
    }
}
