use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::seed::SeedLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the operator commands `seed` and `reset-db`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(&cfg.database)?;

    match cmd {
        Commands::Seed => {
            let report = SeedLogic::seed(&mut pool, &cfg.default_vehicle_types)?;
            success(format!(
                "Seeded {} area(s) with {} status record(s) ({} skipped).",
                report.areas_added, report.statuses_added, report.areas_skipped
            ));
        }

        Commands::ResetDb { force } => {
            if !*force
                && !ask_confirmation("Delete ALL parking areas, status records and accounts?")
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let report = SeedLogic::reset(&mut pool)?;
            success(format!(
                "Database reset: {} area(s), {} status record(s), {} account(s) removed.",
                report.areas, report.statuses, report.accounts
            ));
        }

        _ => {}
    }

    Ok(())
}
