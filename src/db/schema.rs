// Database schema initialization

use color_eyre::Result;
use sqlx::SqlitePool;

pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS species (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            latin_name TEXT NOT NULL,
            species_type TEXT NOT NULL,
            edibility TEXT NOT NULL,
            description TEXT NOT NULL,
            habitat TEXT NOT NULL,
            season TEXT NOT NULL,
            distribution TEXT NOT NULL DEFAULT '',
            key_features TEXT NOT NULL DEFAULT '',
            warning TEXT NOT NULL DEFAULT '',
            cooking_tips TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lookalikes (
            id INTEGER PRIMARY KEY,
            species_id INTEGER NOT NULL,
            lookalike_id INTEGER NOT NULL,
            danger_level TEXT NOT NULL,
            differences TEXT NOT NULL,
            visual_differences TEXT NOT NULL,
            warning TEXT NOT NULL DEFAULT '',
            FOREIGN KEY(species_id) REFERENCES species(id) ON DELETE CASCADE,
            FOREIGN KEY(lookalike_id) REFERENCES species(id) ON DELETE CASCADE,
            UNIQUE(species_id, lookalike_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS characteristics (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            question TEXT NOT NULL,
            sort_order INTEGER NOT NULL DEFAULT 0,
            is_important BOOLEAN NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS characteristic_options (
            id INTEGER PRIMARY KEY,
            characteristic_id INTEGER NOT NULL,
            value TEXT NOT NULL,
            label TEXT NOT NULL,
            FOREIGN KEY(characteristic_id) REFERENCES characteristics(id) ON DELETE CASCADE,
            UNIQUE(characteristic_id, value)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS species_characteristics (
            id INTEGER PRIMARY KEY,
            species_id INTEGER NOT NULL,
            characteristic_id INTEGER NOT NULL,
            option_id INTEGER NOT NULL,
            FOREIGN KEY(species_id) REFERENCES species(id) ON DELETE CASCADE,
            FOREIGN KEY(characteristic_id) REFERENCES characteristics(id) ON DELETE CASCADE,
            FOREIGN KEY(option_id) REFERENCES characteristic_options(id) ON DELETE CASCADE,
            UNIQUE(species_id, characteristic_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quizzes (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            level TEXT NOT NULL,
            description TEXT NOT NULL,
            question_count INTEGER NOT NULL DEFAULT 20
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY,
            quiz_id INTEGER NOT NULL,
            question TEXT NOT NULL,
            sort_order INTEGER NOT NULL DEFAULT 0,
            is_multiple_choice BOOLEAN NOT NULL DEFAULT 0,
            FOREIGN KEY(quiz_id) REFERENCES quizzes(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS options (
            id INTEGER PRIMARY KEY,
            question_id INTEGER NOT NULL,
            option TEXT NOT NULL,
            is_answer BOOLEAN NOT NULL DEFAULT 0,
            FOREIGN KEY(question_id) REFERENCES questions(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quiz_results (
            id INTEGER PRIMARY KEY,
            user_name TEXT NOT NULL,
            quiz_id INTEGER NOT NULL,
            score INTEGER NOT NULL,
            correct_count INTEGER NOT NULL,
            wrong_count INTEGER NOT NULL,
            total_questions INTEGER NOT NULL,
            percentage INTEGER NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY(quiz_id) REFERENCES quizzes(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_answers (
            id INTEGER PRIMARY KEY,
            result_id INTEGER NOT NULL,
            question_id INTEGER NOT NULL,
            is_correct BOOLEAN NOT NULL,
            FOREIGN KEY(result_id) REFERENCES quiz_results(id) ON DELETE CASCADE,
            FOREIGN KEY(question_id) REFERENCES questions(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_answer_options (
            id INTEGER PRIMARY KEY,
            user_answer_id INTEGER NOT NULL,
            option_id INTEGER NOT NULL,
            FOREIGN KEY(user_answer_id) REFERENCES user_answers(id) ON DELETE CASCADE,
            FOREIGN KEY(option_id) REFERENCES options(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // In-progress attempt state, keyed by the cookie token. Rows are
    // deleted on finalize and purged by age.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quiz_attempts (
            token TEXT PRIMARY KEY,
            state TEXT NOT NULL,
            created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
