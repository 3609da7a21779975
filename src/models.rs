//! JSON shapes of the catalog seed file loaded at startup.

use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSeed {
    #[serde(default)]
    pub species: Vec<SpeciesSeed>,
    #[serde(default)]
    pub characteristics: Vec<CharacteristicSeed>,
    #[serde(default)]
    pub assignments: Vec<AssignmentSeed>,
    #[serde(default)]
    pub lookalikes: Vec<LookalikeSeed>,
    #[serde(default)]
    pub quizzes: Vec<QuizSeed>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesSeed {
    pub name: String,
    pub latin_name: String,
    pub species_type: String,
    pub edibility: String,
    pub description: String,
    pub habitat: String,
    pub season: String,
    #[serde(default)]
    pub distribution: String,
    #[serde(default)]
    pub key_features: String,
    #[serde(default)]
    pub warning: String,
    #[serde(default)]
    pub cooking_tips: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicSeed {
    pub name: String,
    pub question: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_important: bool,
    pub options: Vec<CharacteristicOptionSeed>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicOptionSeed {
    pub value: String,
    pub label: String,
}

/// Links a species to a characteristic option, all referenced by name so
/// the seed file stays readable.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSeed {
    pub species: String,
    pub characteristic: String,
    pub value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookalikeSeed {
    pub species: String,
    pub lookalike: String,
    pub danger_level: String,
    pub differences: String,
    #[serde(default)]
    pub visual_differences: String,
    #[serde(default)]
    pub warning: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSeed {
    pub name: String,
    pub level: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub question_count: Option<i64>,
    pub questions: Vec<QuestionSeed>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSeed {
    pub text: String,
    #[serde(default)]
    pub is_multiple_choice: bool,
    pub options: Vec<AnswerOptionSeed>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOptionSeed {
    pub text: String,
    #[serde(default)]
    pub is_answer: bool,
}
