use color_eyre::{eyre::OptionExt, Result};

use super::Db;
use crate::models::CatalogSeed;

impl Db {
    /// True when no species and no quizzes have been loaded yet.
    pub async fn catalog_is_empty(&self) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT (SELECT COUNT(*) FROM species) + (SELECT COUNT(*) FROM quizzes)")
                .fetch_one(&self.pool)
                .await?;

        Ok(count == 0)
    }

    /// Imports the whole catalog seed in one transaction. Seed entries
    /// reference each other by name, resolved against the rows inserted
    /// earlier in the same transaction; a dangling reference aborts the
    /// import.
    pub async fn load_catalog(&self, seed: &CatalogSeed) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for species in &seed.species {
            sqlx::query(
                r#"
                INSERT INTO species
                    (name, latin_name, species_type, edibility, description, habitat,
                     season, distribution, key_features, warning, cooking_tips)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(&species.name)
            .bind(&species.latin_name)
            .bind(&species.species_type)
            .bind(&species.edibility)
            .bind(&species.description)
            .bind(&species.habitat)
            .bind(&species.season)
            .bind(&species.distribution)
            .bind(&species.key_features)
            .bind(&species.warning)
            .bind(&species.cooking_tips)
            .execute(&mut *tx)
            .await?;
        }

        for characteristic in &seed.characteristics {
            let characteristic_id: i64 = sqlx::query_scalar(
                "INSERT INTO characteristics (name, question, sort_order, is_important) VALUES ($1, $2, $3, $4) RETURNING id",
            )
            .bind(&characteristic.name)
            .bind(&characteristic.question)
            .bind(characteristic.order)
            .bind(characteristic.is_important)
            .fetch_one(&mut *tx)
            .await?;

            for option in &characteristic.options {
                sqlx::query(
                    "INSERT INTO characteristic_options (characteristic_id, value, label) VALUES ($1, $2, $3)",
                )
                .bind(characteristic_id)
                .bind(&option.value)
                .bind(&option.label)
                .execute(&mut *tx)
                .await?;
            }
        }

        for assignment in &seed.assignments {
            let species_id: i64 = sqlx::query_scalar("SELECT id FROM species WHERE name = $1")
                .bind(&assignment.species)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_eyre("assignment references unknown species")?;

            let (characteristic_id, option_id): (i64, i64) = sqlx::query_as(
                r#"
                SELECT c.id, co.id
                FROM characteristics c
                JOIN characteristic_options co ON co.characteristic_id = c.id
                WHERE c.name = $1 AND co.value = $2
                "#,
            )
            .bind(&assignment.characteristic)
            .bind(&assignment.value)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_eyre("assignment references unknown characteristic option")?;

            sqlx::query(
                "INSERT INTO species_characteristics (species_id, characteristic_id, option_id) VALUES ($1, $2, $3)",
            )
            .bind(species_id)
            .bind(characteristic_id)
            .bind(option_id)
            .execute(&mut *tx)
            .await?;
        }

        for lookalike in &seed.lookalikes {
            let species_id: i64 = sqlx::query_scalar("SELECT id FROM species WHERE name = $1")
                .bind(&lookalike.species)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_eyre("lookalike references unknown species")?;

            let lookalike_id: i64 = sqlx::query_scalar("SELECT id FROM species WHERE name = $1")
                .bind(&lookalike.lookalike)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_eyre("lookalike references unknown confusable species")?;

            sqlx::query(
                r#"
                INSERT INTO lookalikes
                    (species_id, lookalike_id, danger_level, differences, visual_differences, warning)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(species_id)
            .bind(lookalike_id)
            .bind(&lookalike.danger_level)
            .bind(&lookalike.differences)
            .bind(&lookalike.visual_differences)
            .bind(&lookalike.warning)
            .execute(&mut *tx)
            .await?;
        }

        for quiz in &seed.quizzes {
            let question_count = quiz
                .question_count
                .unwrap_or(quiz.questions.len() as i64);

            let quiz_id: i64 = sqlx::query_scalar(
                "INSERT INTO quizzes (name, level, description, question_count) VALUES ($1, $2, $3, $4) RETURNING id",
            )
            .bind(&quiz.name)
            .bind(&quiz.level)
            .bind(&quiz.description)
            .bind(question_count)
            .fetch_one(&mut *tx)
            .await?;

            for (idx, question) in quiz.questions.iter().enumerate() {
                let question_id: i64 = sqlx::query_scalar(
                    "INSERT INTO questions (quiz_id, question, sort_order, is_multiple_choice) VALUES ($1, $2, $3, $4) RETURNING id",
                )
                .bind(quiz_id)
                .bind(&question.text)
                .bind(idx as i64)
                .bind(question.is_multiple_choice)
                .fetch_one(&mut *tx)
                .await?;

                for option in &question.options {
                    sqlx::query(
                        "INSERT INTO options (question_id, option, is_answer) VALUES ($1, $2, $3)",
                    )
                    .bind(question_id)
                    .bind(&option.text)
                    .bind(option.is_answer)
                    .execute(&mut *tx)
                    .await?;
                }
            }
        }

        tx.commit().await?;

        tracing::info!(
            "catalog seed loaded: {} species, {} characteristics, {} quizzes",
            seed.species.len(),
            seed.characteristics.len(),
            seed.quizzes.len()
        );
        Ok(())
    }

    /// Consistency pass over quiz content: a question with no correct
    /// option gets its first option promoted; a single-select question
    /// with several correct options is reported but left as is.
    /// Returns the number of repaired questions.
    pub async fn repair_answer_flags(&self) -> Result<u64> {
        let broken: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT q.id FROM questions q
            WHERE NOT EXISTS (
                SELECT 1 FROM options o WHERE o.question_id = q.id AND o.is_answer = 1
            )
            AND EXISTS (SELECT 1 FROM options o WHERE o.question_id = q.id)
            ORDER BY q.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        for question_id in &broken {
            tracing::warn!("question {question_id} has no correct option, promoting the first one");
            sqlx::query(
                r#"
                UPDATE options SET is_answer = 1
                WHERE id = (SELECT MIN(id) FROM options WHERE question_id = $1)
                "#,
            )
            .bind(question_id)
            .execute(&self.pool)
            .await?;
        }

        let ambiguous: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT q.id FROM questions q
            WHERE q.is_multiple_choice = 0
            AND (SELECT COUNT(*) FROM options o WHERE o.question_id = q.id AND o.is_answer = 1) > 1
            ORDER BY q.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        for question_id in ambiguous {
            tracing::warn!("single-select question {question_id} has more than one correct option");
        }

        Ok(broken.len() as u64)
    }
}
