use std::collections::HashMap;

use color_eyre::Result;

use super::models::{ResultModel, ReviewEntry};
use super::Db;
use crate::session::{AnswerRecord, AttemptSummary};

impl Db {
    /// Persists one completed attempt: the result row plus one
    /// user_answers row per log entry, each linked to its chosen option
    /// set. Everything happens in a single transaction so a result can
    /// never exist without its answers.
    pub async fn save_result(
        &self,
        summary: &AttemptSummary,
        answers: &[AnswerRecord],
    ) -> Result<i64> {
        let mut tx = self.pool.begin().await?;

        let result_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO quiz_results
                (user_name, quiz_id, score, correct_count, wrong_count, total_questions, percentage)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&summary.user_name)
        .bind(summary.quiz_id)
        .bind(summary.score)
        .bind(summary.correct_count)
        .bind(summary.wrong_count)
        .bind(summary.total_questions)
        .bind(summary.percentage)
        .fetch_one(&mut *tx)
        .await?;

        for record in answers {
            let user_answer_id: i64 = sqlx::query_scalar(
                "INSERT INTO user_answers (result_id, question_id, is_correct) VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(result_id)
            .bind(record.question_id)
            .bind(record.is_correct)
            .fetch_one(&mut *tx)
            .await?;

            for option_id in &record.selected_option_ids {
                sqlx::query(
                    "INSERT INTO user_answer_options (user_answer_id, option_id) VALUES ($1, $2)",
                )
                .bind(user_answer_id)
                .bind(option_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        tracing::info!(
            "result {result_id} saved for quiz={}: {}/{} correct",
            summary.quiz_id,
            summary.correct_count,
            summary.total_questions
        );
        Ok(result_id)
    }

    pub async fn get_result(&self, result_id: i64) -> Result<Option<ResultModel>> {
        let result = sqlx::query_as::<_, ResultModel>(
            r#"
            SELECT id, user_name, quiz_id, score, correct_count, wrong_count,
                   total_questions, percentage, created_at
            FROM quiz_results WHERE id = $1
            "#,
        )
        .bind(result_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Leaderboard for one quiz: best percentage first, score breaking
    /// ties.
    pub async fn top_results(&self, quiz_id: i64, limit: i64) -> Result<Vec<ResultModel>> {
        let results = sqlx::query_as::<_, ResultModel>(
            r#"
            SELECT id, user_name, quiz_id, score, correct_count, wrong_count,
                   total_questions, percentage, created_at
            FROM quiz_results
            WHERE quiz_id = $1
            ORDER BY percentage DESC, score DESC, id ASC
            LIMIT $2
            "#,
        )
        .bind(quiz_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }

    /// Reassembles the answer-by-answer review of a stored result from
    /// the normalized answer tables.
    pub async fn result_review(&self, result_id: i64) -> Result<Vec<ReviewEntry>> {
        let answers = sqlx::query_as::<_, (i64, i64, String, bool)>(
            r#"
            SELECT ua.id, ua.question_id, q.question, ua.is_correct
            FROM user_answers ua
            JOIN questions q ON q.id = ua.question_id
            WHERE ua.result_id = $1
            ORDER BY ua.id
            "#,
        )
        .bind(result_id)
        .fetch_all(&self.pool)
        .await?;

        let selected_rows = sqlx::query_as::<_, (i64, String)>(
            r#"
            SELECT uao.user_answer_id, o.option
            FROM user_answer_options uao
            JOIN options o ON o.id = uao.option_id
            JOIN user_answers ua ON ua.id = uao.user_answer_id
            WHERE ua.result_id = $1
            ORDER BY uao.id
            "#,
        )
        .bind(result_id)
        .fetch_all(&self.pool)
        .await?;

        let correct_rows = sqlx::query_as::<_, (i64, String)>(
            r#"
            SELECT DISTINCT ua.id, o.option
            FROM user_answers ua
            JOIN options o ON o.question_id = ua.question_id AND o.is_answer = 1
            WHERE ua.result_id = $1
            ORDER BY ua.id
            "#,
        )
        .bind(result_id)
        .fetch_all(&self.pool)
        .await?;

        let mut selected: HashMap<i64, Vec<String>> = HashMap::new();
        for (user_answer_id, text) in selected_rows {
            selected.entry(user_answer_id).or_default().push(text);
        }

        let mut correct: HashMap<i64, Vec<String>> = HashMap::new();
        for (user_answer_id, text) in correct_rows {
            correct.entry(user_answer_id).or_default().push(text);
        }

        Ok(answers
            .into_iter()
            .map(|(user_answer_id, _question_id, question, is_correct)| ReviewEntry {
                question,
                is_correct,
                selected: selected.remove(&user_answer_id).unwrap_or_default(),
                correct: correct.remove(&user_answer_id).unwrap_or_default(),
            })
            .collect())
    }
}
