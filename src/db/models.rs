// Database model structs

#[derive(Clone, sqlx::FromRow)]
pub struct SpeciesSummary {
    pub id: i64,
    pub name: String,
    pub latin_name: String,
    pub species_type: String,
    pub edibility: String,
}

#[derive(sqlx::FromRow)]
pub struct SpeciesModel {
    pub id: i64,
    pub name: String,
    pub latin_name: String,
    pub species_type: String,
    pub edibility: String,
    pub description: String,
    pub habitat: String,
    pub season: String,
    pub distribution: String,
    pub key_features: String,
    pub warning: String,
    pub cooking_tips: String,
}

/// A lookalike edge joined with the confusable species' names.
#[derive(sqlx::FromRow)]
pub struct LookalikeModel {
    pub lookalike_id: i64,
    pub name: String,
    pub latin_name: String,
    pub edibility: String,
    pub danger_level: String,
    pub differences: String,
    pub visual_differences: String,
    pub warning: String,
}

/// One recorded trait of a species, labeled for display.
#[derive(sqlx::FromRow)]
pub struct SpeciesTraitLabel {
    pub characteristic: String,
    pub label: String,
}

pub struct CharacteristicModel {
    pub id: i64,
    pub name: String,
    pub question: String,
    pub is_important: bool,
    pub options: Vec<CharacteristicOptionModel>,
}

#[derive(sqlx::FromRow)]
pub struct CharacteristicOptionModel {
    pub id: i64,
    pub characteristic_id: i64,
    pub value: String,
    pub label: String,
}

#[derive(sqlx::FromRow)]
pub struct QuizModel {
    pub id: i64,
    pub name: String,
    pub level: String,
    pub description: String,
    pub question_count: i64,
}

#[derive(sqlx::FromRow)]
pub struct ResultModel {
    pub id: i64,
    pub user_name: String,
    pub quiz_id: i64,
    pub score: i64,
    pub correct_count: i64,
    pub wrong_count: i64,
    pub total_questions: i64,
    pub percentage: i64,
    pub created_at: String,
}

/// One reviewed answer of a stored result, reassembled from the
/// normalized answer tables.
pub struct ReviewEntry {
    pub question: String,
    pub is_correct: bool,
    pub selected: Vec<String>,
    pub correct: Vec<String>,
}
