use color_eyre::Result;
use sqlx::Row;

use super::models::QuizModel;
use super::Db;
use crate::session::{QuestionKind, ScoredOption, ScoredQuestion};

impl Db {
    pub async fn quizzes(&self) -> Result<Vec<QuizModel>> {
        let quizzes = sqlx::query_as::<_, QuizModel>(
            "SELECT id, name, level, description, question_count FROM quizzes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    pub async fn get_quiz(&self, quiz_id: i64) -> Result<Option<QuizModel>> {
        let quiz = sqlx::query_as::<_, QuizModel>(
            "SELECT id, name, level, description, question_count FROM quizzes WHERE id = $1",
        )
        .bind(quiz_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quiz)
    }

    /// Question ids of a quiz in declared order. The attempt engine
    /// applies its own permutation on top.
    pub async fn question_ids(&self, quiz_id: i64) -> Result<Vec<i64>> {
        let ids = sqlx::query_scalar(
            "SELECT id FROM questions WHERE quiz_id = $1 ORDER BY sort_order, id",
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    pub async fn questions_count(&self, quiz_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE quiz_id = $1")
            .bind(quiz_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// A question with its options and correctness flags, ready for the
    /// attempt engine to score.
    pub async fn scored_question(&self, question_id: i64) -> Result<Option<ScoredQuestion>> {
        let Some(row) =
            sqlx::query("SELECT question, is_multiple_choice FROM questions WHERE id = $1")
                .bind(question_id)
                .fetch_optional(&self.pool)
                .await?
        else {
            return Ok(None);
        };

        let text: String = row.get("question");
        let is_multiple_choice: bool = row.get("is_multiple_choice");

        let options = sqlx::query_as::<_, (i64, String, bool)>(
            "SELECT id, option, is_answer FROM options WHERE question_id = $1 ORDER BY id",
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(ScoredQuestion {
            id: question_id,
            text,
            kind: if is_multiple_choice {
                QuestionKind::Multiple
            } else {
                QuestionKind::Single
            },
            options: options
                .into_iter()
                .map(|(id, text, is_answer)| ScoredOption {
                    id,
                    text,
                    is_answer,
                })
                .collect(),
        }))
    }
}
