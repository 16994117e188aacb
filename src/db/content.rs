//! Content store: per-user saved passwords and the static tip library.

use super::seed::STARTER_TIPS;
use super::{fault, now_timestamp, Store};
use crate::constants::DEFAULT_TIP_SEARCH_LIMIT;
use crate::error::StoreResult;
use crate::models::{SavedPassword, Tip, TipFilter};

impl Store {
    /// Store a checked password for `user_id`. Always inserts a new row.
    pub async fn save_password(
        &self,
        user_id: i64,
        password_value: &str,
        strength_score: i64,
    ) -> StoreResult<SavedPassword> {
        let created_at = now_timestamp();

        let result = sqlx::query(
            "INSERT INTO saved_passwords (user_id, password_value, strength_score, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(password_value)
        .bind(strength_score)
        .bind(&created_at)
        .execute(&self.pool)
        .await
        .map_err(fault("save_password"))?;

        Ok(SavedPassword {
            id: result.last_insert_rowid(),
            user_id,
            password_value: password_value.to_string(),
            strength_score,
            created_at,
        })
    }

    /// Saved passwords for `user_id`, newest first, capped at `limit` when given
    pub async fn get_saved_passwords(
        &self,
        user_id: i64,
        limit: Option<u32>,
    ) -> StoreResult<Vec<SavedPassword>> {
        // A negative LIMIT means "no limit" in SQLite
        let limit = limit.map(i64::from).unwrap_or(-1);

        sqlx::query_as::<_, SavedPassword>(
            r#"SELECT id, user_id, password_value, strength_score, created_at
               FROM saved_passwords
               WHERE user_id = ?
               ORDER BY created_at DESC, id DESC
               LIMIT ?"#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(fault("get_saved_passwords"))
    }

    /// Delete a saved password owned by `user_id`
    ///
    /// Returns `false` when no row matched, whether the id does not exist or
    /// belongs to someone else.
    pub async fn delete_saved_password(
        &self,
        password_id: i64,
        user_id: i64,
    ) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM saved_passwords WHERE id = ? AND user_id = ?")
            .bind(password_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(fault("delete_saved_password"))?;

        let deleted = result.rows_affected() > 0;
        if !deleted {
            tracing::debug!(password_id, user_id, "No saved password matched for delete");
        }

        Ok(deleted)
    }

    /// Search the tip library, newest tip first
    ///
    /// `query` matches title or content case-insensitively, `category` must
    /// match exactly. `limit` defaults to 20.
    pub async fn search_tips(
        &self,
        query: Option<&str>,
        category: Option<&str>,
        limit: Option<u32>,
    ) -> StoreResult<Vec<Tip>> {
        let filter = TipFilter::new(query, category);
        let limit = limit.unwrap_or(DEFAULT_TIP_SEARCH_LIMIT) as usize;

        let tips = sqlx::query_as::<_, Tip>(
            "SELECT id, title, content, category FROM tips ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(fault("search_tips"))?;

        Ok(tips
            .into_iter()
            .filter(|tip| filter.matches(tip))
            .take(limit)
            .collect())
    }

    /// Distinct non-null tip categories
    pub async fn get_tip_categories(&self) -> StoreResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM tips WHERE category IS NOT NULL ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(fault("get_tip_categories"))
    }

    /// Insert the starter tips if the table is empty
    pub(crate) async fn seed_tips(&self) -> StoreResult<()> {
        let mut tx = self.pool.begin().await.map_err(fault("seed_tips"))?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tips")
            .fetch_one(&mut *tx)
            .await
            .map_err(fault("seed_tips"))?;

        if count > 0 {
            return Ok(());
        }

        for &(title, content, category) in STARTER_TIPS {
            sqlx::query("INSERT INTO tips (title, content, category) VALUES (?, ?, ?)")
                .bind(title)
                .bind(content)
                .bind(category)
                .execute(&mut *tx)
                .await
                .map_err(fault("seed_tips"))?;
        }

        tx.commit().await.map_err(fault("seed_tips"))?;

        tracing::info!("Seeded {} starter tips", STARTER_TIPS.len());

        Ok(())
    }
}
