use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::QueryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::area::Area;
use crate::models::views::AreaStatusView;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_available;
use crate::utils::formatting::{bold, format_occupancy, format_rate, format_timestamp};
use crate::utils::table::{Column, Table};

/// Public, read-only views: `list`, `show` and `search`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;

    match cmd {
        Commands::List => {
            let areas = QueryLogic::list_areas(&pool)?;
            if areas.is_empty() {
                info("No parking areas yet.");
                return Ok(());
            }
            header("Parking areas");
            print!("{}", areas_table(&areas).render());
        }

        Commands::Show { area_id, json } => {
            let area = QueryLogic::area_by_id(&pool, *area_id)?;
            if *json {
                let view = AreaStatusView::from(&area);
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_area(&area);
            }
        }

        Commands::Search { q } => {
            let items = QueryLogic::search_items(&pool, q.as_deref().unwrap_or(""))?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }

        _ => {}
    }

    Ok(())
}

pub(crate) fn areas_table(areas: &[Area]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("Name", 24),
        Column::new("Location", 30),
        Column::new("Available", 9),
        Column::new("Capacity", 8),
        Column::new("Rate", 6),
        Column::new("Updated", 16),
    ]);

    for area in areas {
        let capacity = area.total_capacity();
        let available = area.available_spots();
        table.add_row(vec![
            area.id.to_string(),
            area.name.clone(),
            area.location.clone(),
            colorize_available(&available.to_string(), available, capacity),
            capacity.to_string(),
            format_rate(area.occupancy_rate()),
            format_timestamp(&area.last_updated),
        ]);
    }

    table
}

fn print_area(area: &Area) {
    header(format!("{} (#{})", area.name, area.id));
    println!("📍 {}", area.location);
    println!("🕒 Last updated: {}\n", format_timestamp(&area.last_updated));

    if area.statuses.is_empty() {
        info("No vehicle status recorded for this area.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("Vehicle", 12),
        Column::new("Occupied", 10),
        Column::new("Available", 9),
        Column::new("Rate", 6),
    ]);

    for s in &area.statuses {
        let vehicle = if s.is_full() {
            format!("{} (full)", s.vehicle_type)
        } else {
            s.vehicle_type.clone()
        };
        table.add_row(vec![
            s.id.to_string(),
            vehicle,
            format_occupancy(s.occupied, s.capacity),
            colorize_available(&s.available().to_string(), s.available(), s.capacity),
            format_rate(s.occupancy_percentage()),
        ]);
    }
    print!("{}", table.render());

    println!(
        "\n{} {} of {} spots free ({} occupied)",
        bold("Total:"),
        area.available_spots(),
        area.total_capacity(),
        format_rate(area.occupancy_rate())
    );
}
