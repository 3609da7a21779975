pub const HOME_URL: &str = "/";
pub const EDIBLE_URL: &str = "/edible";
pub const POISONOUS_URL: &str = "/poisonous";
pub const GALLERY_URL: &str = "/gallery";
pub const SEARCH_URL: &str = "/search";
pub const KINGDOM_URL: &str = "/kingdom";
pub const IDENTIFIER_URL: &str = "/identifier";
pub const QUIZ_HOME_URL: &str = "/quiz";
pub const QUIZ_QUESTION_URL: &str = "/quiz/question";
pub const QUIZ_ANSWER_URL: &str = "/quiz/answer";
pub const QUIZ_RESULT_URL: &str = "/quiz/result";

pub const ATTEMPT_COOKIE_NAME: &str = "quiz_attempt";

pub fn species_url(species_id: i64) -> String {
    format!("/mushroom/{species_id}")
}

pub fn quiz_start_url(quiz_id: i64) -> String {
    format!("/quiz/{quiz_id}/start")
}

pub fn result_detail_url(result_id: i64) -> String {
    format!("/quiz/results/{result_id}")
}

/// Form field prefix for identifier selections (`char_<id>`).
pub const CHARACTERISTIC_FIELD_PREFIX: &str = "char_";

/// Leaderboard length on the quiz pages.
pub const TOP_RESULTS_LIMIT: i64 = 5;
