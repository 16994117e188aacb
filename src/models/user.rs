use serde::{Deserialize, Serialize};

/// User row as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique, compared case-sensitively
    pub email: String,
    /// Hex SHA-256 of `salt + password`
    pub password_hash: String,
    /// Per-user random salt (32 hex characters)
    pub salt: String,
    /// UTC timestamp (RFC 3339)
    pub created_at: String,
}

/// Public projection of a user, without password material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
