//! File-backed login session for the CLI.
//!
//! The session file only remembers *who* logged in; the account itself is
//! re-read from the database on every command.

use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::find_account;
use crate::errors::{AppError, AppResult};
use crate::models::account::Account;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub account_id: i64,
    pub email: String,
    pub database: String,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn expires_at(&self, lifetime: Duration) -> DateTime<Utc> {
        self.issued_at + lifetime
    }

    pub fn is_expired(&self, now: DateTime<Utc>, lifetime: Duration) -> bool {
        now >= self.expires_at(lifetime)
    }
}

pub struct SessionStore {
    path: PathBuf,
    database: String,
    lifetime: Duration,
}

impl SessionStore {
    pub fn new(path: PathBuf, database: &str, lifetime_secs: i64) -> Self {
        Self {
            path,
            database: database.to_string(),
            lifetime: Duration::seconds(lifetime_secs),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Config::session_file(),
            &cfg.database,
            cfg.session_lifetime_secs,
        )
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn save(&self, account: &Account) -> AppResult<Session> {
        let session = Session {
            account_id: account.id,
            email: account.email.clone(),
            database: self.database.clone(),
            issued_at: Utc::now(),
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_yaml::to_string(&session)?)?;
        Ok(session)
    }

    /// The stored session, if any, still valid and issued for this database.
    /// Expired sessions are removed.
    pub fn load(&self) -> AppResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let Ok(session) = serde_yaml::from_str::<Session>(&content) else {
            // unreadable file: treat as logged out
            self.clear()?;
            return Ok(None);
        };

        if session.is_expired(Utc::now(), self.lifetime) {
            self.clear()?;
            return Ok(None);
        }

        if session.database != self.database {
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Remove the session file. Returns whether one existed.
    pub fn clear(&self) -> AppResult<bool> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Account of the current session, re-read from the store.
    pub fn current_account(&self, pool: &DbPool) -> AppResult<Option<Account>> {
        let Some(session) = self.load()? else {
            return Ok(None);
        };

        let account = find_account(&pool.conn, session.account_id)?;
        Ok(account.filter(|a| a.email == session.email))
    }
}

pub struct SessionLogic;

impl SessionLogic {
    pub fn login(
        pool: &mut DbPool,
        store: &SessionStore,
        email: &str,
        plaintext: &str,
    ) -> AppResult<Account> {
        let account =
            AuthLogic::authenticate(pool, email, plaintext)?.ok_or(AppError::AuthenticationFailed)?;

        store.save(&account)?;
        pool.with_tx(|tx| audit(tx, "login", &account.email, "Logged in"))?;

        Ok(account)
    }

    /// Returns the email of the account that was logged in, if any.
    ///
    /// A session issued for another database is left in place.
    pub fn logout(pool: &mut DbPool, store: &SessionStore) -> AppResult<Option<String>> {
        let Some(session) = store.load()? else {
            return Ok(None);
        };

        store.clear()?;
        pool.with_tx(|tx| audit(tx, "logout", &session.email, "Logged out"))?;
        Ok(Some(session.email))
    }
}
