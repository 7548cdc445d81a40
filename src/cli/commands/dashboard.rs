use crate::cli::commands::{admin_context, list::areas_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::QueryLogic;
use crate::errors::AppResult;
use crate::models::views::DashboardView;
use crate::ui::messages::header;
use crate::utils::formatting::format_rate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { json } = cmd {
        let (pool, admin) = admin_context(cfg)?;

        let areas = QueryLogic::list_areas(&pool)?;
        let view = DashboardView::build(&areas);

        if *json {
            println!("{}", serde_json::to_string_pretty(&view)?);
            return Ok(());
        }

        let stats = view.stats;

        header(format!("Admin dashboard ({})", admin.email));
        println!("Areas:     {}", stats.total_areas);
        println!("Capacity:  {}", stats.total_capacity);
        println!("Occupied:  {}", stats.total_occupied);
        println!("Available: {}", stats.total_available);
        println!("Rate:      {}\n", format_rate(stats.occupancy_rate()));

        if !areas.is_empty() {
            print!("{}", areas_table(&areas).render());
        }
    }

    Ok(())
}
