use color_eyre::Result;

use super::Db;
use crate::session::QuizAttempt;

/// In-progress attempts older than this are discarded; the user has to
/// restart.
const ATTEMPT_TTL_SECONDS: i64 = 3600;

impl Db {
    /// Upserts the serialized attempt state under its cookie token.
    pub async fn save_attempt(&self, token: &str, attempt: &QuizAttempt) -> Result<()> {
        let state = serde_json::to_string(attempt)?;

        sqlx::query(
            r#"
            INSERT INTO quiz_attempts (token, state) VALUES ($1, $2)
            ON CONFLICT(token) DO UPDATE SET state = excluded.state
            "#,
        )
        .bind(token)
        .bind(&state)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn load_attempt(&self, token: &str) -> Result<Option<QuizAttempt>> {
        let state: Option<String> =
            sqlx::query_scalar("SELECT state FROM quiz_attempts WHERE token = $1")
                .bind(token)
                .fetch_optional(&self.pool)
                .await?;

        match state {
            Some(state) => Ok(Some(serde_json::from_str(&state)?)),
            None => Ok(None),
        }
    }

    pub async fn delete_attempt(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM quiz_attempts WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn purge_stale_attempts(&self) -> Result<u64> {
        let result = sqlx::query(
            "DELETE FROM quiz_attempts WHERE created_at < strftime('%s', 'now') - $1",
        )
        .bind(ATTEMPT_TTL_SECONDS)
        .execute(&self.pool)
        .await?;

        let purged = result.rows_affected();
        if purged > 0 {
            tracing::info!("purged {purged} stale quiz attempts");
        }

        Ok(purged)
    }
}
