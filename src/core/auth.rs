use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{find_account, find_account_by_email, insert_account, is_unique_violation};
use crate::errors::{AppError, AppResult};
use crate::models::account::{Account, normalize_email};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use rand_core::OsRng;

/// Registration, credential checks and the admin guard.
pub struct AuthLogic;

/// Hash a password with Argon2id and a fresh random salt (PHC string).
pub fn hash_password(plaintext: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify `plaintext` against a stored PHC hash.
/// An empty password or an unparsable hash never matches.
pub fn verify_password(stored_hash: &str, plaintext: &str) -> bool {
    if plaintext.is_empty() {
        return false;
    }
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

impl AuthLogic {
    /// Create an ordinary account.
    pub fn register(pool: &mut DbPool, email: &str, plaintext: &str) -> AppResult<Account> {
        Self::create_account(pool, email, plaintext, false)
    }

    /// Create an administrator account (operator command).
    pub fn create_admin(pool: &mut DbPool, email: &str, plaintext: &str) -> AppResult<Account> {
        Self::create_account(pool, email, plaintext, true)
    }

    fn create_account(
        pool: &mut DbPool,
        email: &str,
        plaintext: &str,
        is_admin: bool,
    ) -> AppResult<Account> {
        let email = normalize_email(email);
        let password_hash = hash_password(plaintext)?;

        pool.with_tx(|tx| {
            if find_account_by_email(tx, &email)?.is_some() {
                return Err(AppError::EmailTaken(email.clone()));
            }

            let id = insert_account(tx, &email, &password_hash, is_admin, &Utc::now()).map_err(
                |e| {
                    if is_unique_violation(&e) {
                        AppError::EmailTaken(email.clone())
                    } else {
                        AppError::Db(e)
                    }
                },
            )?;

            let (operation, message) = if is_admin {
                ("create_admin", "Administrator account created")
            } else {
                ("register", "Account registered")
            };
            audit(tx, operation, &email, message)?;

            find_account(tx, id)?.ok_or_else(|| AppError::not_found("Account", id))
        })
    }

    /// Look up the account for `email` and check its password.
    /// Returns `None` for an unknown email or a wrong password.
    pub fn authenticate(
        pool: &mut DbPool,
        email: &str,
        plaintext: &str,
    ) -> AppResult<Option<Account>> {
        let email = normalize_email(email);
        let Some(account) = find_account_by_email(&pool.conn, &email)? else {
            return Ok(None);
        };

        if verify_password(&account.password_hash, plaintext) {
            Ok(Some(account))
        } else {
            Ok(None)
        }
    }
}

/// Gate for every administrative operation.
pub fn require_admin(current: Option<&Account>) -> AppResult<&Account> {
    match current {
        None => Err(AppError::Unauthenticated),
        Some(account) if !account.is_admin => Err(AppError::Forbidden),
        Some(account) => Ok(account),
    }
}

/// Gate for operations that only need a logged-in account.
pub fn require_login(current: Option<&Account>) -> AppResult<&Account> {
    current.ok_or(AppError::Unauthenticated)
}
