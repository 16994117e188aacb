use serde::{Deserialize, Serialize};

/// A password a user checked in the trainer and chose to keep
///
/// The value is stored verbatim so it can be shown back to its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SavedPassword {
    pub id: i64,
    pub user_id: i64,
    pub password_value: String,
    /// Opaque score computed by the client
    pub strength_score: i64,
    pub created_at: String,
}
