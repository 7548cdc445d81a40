use crate::cli::commands::password_or_prompt;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::{AuthLogic, require_login};
use crate::core::session::{SessionLogic, SessionStore};
use crate::core::validate;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_timestamp;

/// Handle `register`, `login`, `logout`, `whoami` and `create-admin`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Register { email, password } => {
            let email = validate::email(email)?;
            let password = password_or_prompt(password)?;
            validate::password(&password, cfg.min_password_length)?;

            let mut pool = DbPool::open(&cfg.database)?;
            let account = AuthLogic::register(&mut pool, &email, &password)?;
            success(format!(
                "Registration successful for {}. You can now login.",
                account.email
            ));
        }

        Commands::CreateAdmin { email, password } => {
            let email = validate::email(email)?;
            let password = password_or_prompt(password)?;
            validate::password(&password, cfg.min_password_length)?;

            let mut pool = DbPool::open(&cfg.database)?;
            let account = AuthLogic::create_admin(&mut pool, &email, &password)?;
            success(format!("Admin user created: {}", account.email));
        }

        Commands::Login { email, password } => {
            let password = password_or_prompt(password)?;

            let mut pool = DbPool::open(&cfg.database)?;
            let store = SessionStore::from_config(cfg);
            let account = SessionLogic::login(&mut pool, &store, email, &password)?;

            success(format!(
                "Login successful! Welcome back, {} ({}).",
                account.email,
                account.role()
            ));
        }

        Commands::Logout => {
            let mut pool = DbPool::open(&cfg.database)?;
            let store = SessionStore::from_config(cfg);

            match SessionLogic::logout(&mut pool, &store)? {
                Some(email) => success(format!("{} has been logged out.", email)),
                None => info("No active session."),
            }
        }

        Commands::Whoami => {
            let pool = DbPool::open(&cfg.database)?;
            let store = SessionStore::from_config(cfg);
            let current = store.current_account(&pool)?;
            let account = require_login(current.as_ref())?;

            println!("{} ({})", account.email, account.role());
            if let Some(session) = store.load()? {
                println!(
                    "Session expires at {}",
                    format_timestamp(&session.expires_at(store.lifetime()))
                );
            }
        }

        _ => {}
    }

    Ok(())
}
