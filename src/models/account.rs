use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub id: i64,
    pub email: String, // ⇔ users.email (lowercase, unique)
    #[serde(skip_serializing)]
    pub password_hash: String, // ⇔ users.password_hash (Argon2 PHC string)
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn role(&self) -> &'static str {
        if self.is_admin { "admin" } else { "user" }
    }
}

/// Lowercase and trim an email the way it is stored.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
