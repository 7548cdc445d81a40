use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW, colorize_optional};
use rusqlite::OptionalExtension;
use std::fs;

/// Row counts of the main tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub areas: i64,
    pub statuses: i64,
    pub accounts: i64,
    pub log_entries: i64,
}

pub fn table_counts(pool: &DbPool) -> AppResult<TableCounts> {
    let count = |table: &str| -> rusqlite::Result<i64> {
        pool.conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
    };

    Ok(TableCounts {
        areas: count("parking_areas")?,
        statuses: count("parking_status")?,
        accounts: count("users")?,
        log_entries: count("log")?,
    })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let counts = table_counts(pool)?;
    println!("{}• Parking areas:{} {}{}{}", CYAN, RESET, GREEN, counts.areas, RESET);
    println!("{}• Status records:{} {}{}{}", CYAN, RESET, GREEN, counts.statuses, RESET);
    println!("{}• Accounts:{} {}{}{}", CYAN, RESET, GREEN, counts.accounts, RESET);
    println!("{}• Log entries:{} {}", CYAN, RESET, counts.log_entries);

    //
    // 3) MOST RECENT UPDATE
    //
    let last_update: Option<String> = pool
        .conn
        .query_row(
            "SELECT last_updated FROM parking_areas ORDER BY last_updated DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_last = last_update.unwrap_or_else(|| colorize_optional("--"));
    println!("{}• Last update:{} {}", CYAN, RESET, fmt_last);

    //
    // 4) SCHEMA VERSION
    //
    let versions = applied_versions(&pool.conn)?;
    let latest = versions
        .last()
        .cloned()
        .unwrap_or_else(|| colorize_optional("--"));
    println!(
        "{}• Migrations:{} {} applied (latest: {})",
        CYAN,
        RESET,
        versions.len(),
        latest
    );

    println!();
    Ok(())
}
