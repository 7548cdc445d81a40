pub mod area;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod init;
pub mod list;
pub mod log;
pub mod seed;
pub mod status;

use crate::config::Config;
use crate::core::auth::require_admin;
use crate::core::session::SessionStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::account::Account;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Password from the command line, or one line read from stdin.
pub(crate) fn password_or_prompt(given: &Option<String>) -> AppResult<String> {
    if let Some(p) = given {
        return Ok(p.clone());
    }

    print!("Password: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Open the database and check that the session belongs to an admin.
pub(crate) fn admin_context(cfg: &Config) -> AppResult<(DbPool, Account)> {
    let pool = DbPool::open(&cfg.database)?;
    let store = SessionStore::from_config(cfg);
    let current = store.current_account(&pool)?;
    let admin = require_admin(current.as_ref())?.clone();
    Ok((pool, admin))
}
