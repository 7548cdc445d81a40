use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{
    area_id_by_name, delete_area_row, delete_statuses_of_area, get_area, insert_area,
    is_unique_violation, update_area,
};
use crate::errors::{AppError, AppResult};
use crate::models::area::Area;
use chrono::Utc;
use rusqlite::Connection;

/// High-level business logic for parking areas.
pub struct AreaLogic;

impl AreaLogic {
    pub fn add(pool: &mut DbPool, name: &str, location: &str) -> AppResult<Area> {
        pool.with_tx(|tx| Self::add_in(tx, name, location))
    }

    /// `add` inside a transaction owned by the caller.
    pub(crate) fn add_in(tx: &Connection, name: &str, location: &str) -> AppResult<Area> {
        if area_id_by_name(tx, name)?.is_some() {
            return Err(AppError::DuplicateName(name.to_string()));
        }

        let now = Utc::now();
        let id = insert_area(tx, name, location, &now).map_err(|e| {
            if is_unique_violation(&e) {
                AppError::DuplicateName(name.to_string())
            } else {
                AppError::Db(e)
            }
        })?;

        audit(tx, "add_area", name, &format!("Added parking area at {location}"))?;

        get_area(tx, id)
    }

    /// Change name and location. Keeping the current name is allowed;
    /// taking the name of another area is not.
    pub fn rename(
        pool: &mut DbPool,
        area_id: i64,
        new_name: &str,
        new_location: &str,
    ) -> AppResult<Area> {
        pool.with_tx(|tx| {
            let area = get_area(tx, area_id)?;

            if let Some(other) = area_id_by_name(tx, new_name)?
                && other != area.id
            {
                return Err(AppError::DuplicateName(new_name.to_string()));
            }

            update_area(tx, area.id, new_name, new_location, &Utc::now()).map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::DuplicateName(new_name.to_string())
                } else {
                    AppError::Db(e)
                }
            })?;

            let message = if area.name == new_name {
                format!("Updated parking area (location: {new_location})")
            } else {
                format!("Renamed '{}' (location: {new_location})", area.name)
            };
            audit(tx, "edit_area", new_name, &message)?;

            get_area(tx, area.id)
        })
    }

    /// Delete an area together with every status record it owns.
    /// Returns the area as it was before deletion.
    pub fn delete(pool: &mut DbPool, area_id: i64) -> AppResult<Area> {
        pool.with_tx(|tx| {
            let area = get_area(tx, area_id)?;

            let removed = delete_statuses_of_area(tx, area.id)?;
            delete_area_row(tx, area.id)?;

            audit(
                tx,
                "del_area",
                &area.name,
                &format!("Deleted parking area and {removed} status record(s)"),
            )?;

            Ok(area)
        })
    }
}
