use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing parkwatch…");
    println!("🗄️  Database   : {}", &db_path);

    let mut pool = DbPool::open(&db_path)?;

    success(format!("Database initialized at {}", &db_path));

    // internal log entry is not blocking
    if let Err(e) = pool.with_tx(|tx| {
        audit(
            tx,
            "init",
            "",
            &format!("Database initialized at {}", &db_path),
        )
    }) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
