use crate::cli::commands::{admin_context, ask_confirmation};
use crate::cli::parser::StatusAction;
use crate::config::Config;
use crate::core::query::QueryLogic;
use crate::core::status::StatusLogic;
use crate::core::validate;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(action: &StatusAction, cfg: &Config) -> AppResult<()> {
    let (mut pool, _admin) = admin_context(cfg)?;

    match action {
        StatusAction::Add {
            area_id,
            vehicle_type,
            capacity,
            occupied,
        } => {
            let vehicle_type = validate::vehicle_type(vehicle_type)?;
            let status =
                StatusLogic::add(&mut pool, *area_id, &vehicle_type, *capacity, *occupied)?;
            success(format!(
                "{} status added successfully (id {}, {}/{}).",
                status.vehicle_type, status.id, status.occupied, status.capacity
            ));
        }

        StatusAction::Edit {
            status_id,
            vehicle_type,
            capacity,
            occupied,
        } => {
            // omitted options keep the stored value
            let current = QueryLogic::status_by_id(&pool, *status_id)?;
            let vehicle_type =
                validate::vehicle_type(vehicle_type.as_deref().unwrap_or(&current.vehicle_type))?;
            let capacity = capacity.or(Some(current.capacity));
            let occupied = occupied.or(Some(current.occupied));

            let status =
                StatusLogic::update(&mut pool, *status_id, &vehicle_type, capacity, occupied)?;
            success(format!(
                "{} status updated successfully ({}/{}).",
                status.vehicle_type, status.occupied, status.capacity
            ));
        }

        StatusAction::Del { status_id, force } => {
            let status = QueryLogic::status_by_id(&pool, *status_id)?;
            let area = QueryLogic::owning_area(&pool, &status)?;

            if !*force
                && !ask_confirmation(&format!(
                    "Delete {} status of '{}'? This action is irreversible.",
                    status.vehicle_type, area.name
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = StatusLogic::delete(&mut pool, *status_id)?;
            success(format!(
                "{} status deleted successfully.",
                removed.vehicle_type
            ));
        }

        StatusAction::Set {
            status_id,
            occupied,
        } => {
            let outcome = StatusLogic::quick_set_occupied(&mut pool, *status_id, *occupied)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
