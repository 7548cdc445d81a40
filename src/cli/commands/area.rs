use crate::cli::commands::{admin_context, ask_confirmation};
use crate::cli::parser::AreaAction;
use crate::config::Config;
use crate::core::area::AreaLogic;
use crate::core::query::QueryLogic;
use crate::core::validate;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(action: &AreaAction, cfg: &Config) -> AppResult<()> {
    let (mut pool, _admin) = admin_context(cfg)?;

    match action {
        AreaAction::Add { name, location } => {
            let name = validate::area_name(name)?;
            let location = validate::location(location)?;

            let area = AreaLogic::add(&mut pool, name, location)?;
            success(format!(
                "Parking area '{}' added successfully (id {}).",
                area.name, area.id
            ));
        }

        AreaAction::Edit { id, name, location } => {
            // fields left out keep their current value
            let current = QueryLogic::area_by_id(&pool, *id)?;
            let name = validate::area_name(name.as_deref().unwrap_or(&current.name))?;
            let location =
                validate::location(location.as_deref().unwrap_or(&current.location))?;

            let area = AreaLogic::rename(&mut pool, *id, name, location)?;
            success(format!("Parking area '{}' updated successfully.", area.name));
        }

        AreaAction::Del { id, force } => {
            let area = QueryLogic::area_by_id(&pool, *id)?;

            if !*force
                && !ask_confirmation(&format!(
                    "Delete parking area '{}' and its {} status record(s)? This action is irreversible.",
                    area.name,
                    area.statuses.len()
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = AreaLogic::delete(&mut pool, *id)?;
            success(format!(
                "Parking area '{}' deleted successfully.",
                removed.name
            ));
        }
    }

    Ok(())
}
