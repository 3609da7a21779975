use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::CookieJar;
use maud::Markup;
use rand::seq::SliceRandom;
use serde::Deserialize;
use ulid::Ulid;

use crate::{
    names,
    rejections::{AppError, ResultExt},
    session::{performance_level, QuizAttempt},
    utils, views,
    views::quiz as quiz_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quiz", get(quiz_home))
        .route("/quiz/{id}/start", get(start_page).post(start_attempt))
        .route("/quiz/question", get(current_question))
        .route("/quiz/answer", post(submit_answer_raw))
        .route("/quiz/result", get(finalize_attempt))
        .route("/quiz/results/{id}", get(result_detail))
}

async fn quiz_home(State(state): State<AppState>) -> Result<Markup, AppError> {
    let quizzes = state.db.quizzes().await.reject("could not get quizzes")?;

    let mut entries = Vec::with_capacity(quizzes.len());
    for quiz in quizzes {
        let top_results = state
            .db
            .top_results(quiz.id, names::TOP_RESULTS_LIMIT)
            .await
            .reject("could not get top results")?;
        entries.push(quiz_views::QuizHomeEntry { quiz, top_results });
    }

    Ok(views::page("Quizzes", quiz_views::quiz_home(entries)))
}

async fn start_page(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
) -> Result<Markup, AppError> {
    let quiz = state
        .db
        .get_quiz(quiz_id)
        .await
        .reject("could not get quiz")?
        .ok_or(AppError::NotFound("this quiz"))?;

    let questions_count = state
        .db
        .questions_count(quiz_id)
        .await
        .reject("could not get question count")?;

    let title = quiz.name.clone();
    Ok(views::page(
        &title,
        quiz_views::start_page(quiz, questions_count, None),
    ))
}

#[derive(Deserialize)]
struct StartAttemptBody {
    #[serde(default)]
    user_name: String,
}

async fn start_attempt(
    State(state): State<AppState>,
    Path(quiz_id): Path<i64>,
    Form(body): Form<StartAttemptBody>,
) -> Result<Response, AppError> {
    let quiz = state
        .db
        .get_quiz(quiz_id)
        .await
        .reject("could not get quiz")?
        .ok_or(AppError::NotFound("this quiz"))?;

    let question_ids = state
        .db
        .question_ids(quiz_id)
        .await
        .reject("could not get question ids")?;

    // Opportunistic cleanup of abandoned attempts
    let _ = state.db.purge_stale_attempts().await;

    // Scope the rng so the non-Send ThreadRng is dropped before any await.
    let start_result = {
        let mut rng = rand::thread_rng();
        QuizAttempt::start(quiz_id, &body.user_name, question_ids, &mut rng)
    };
    let attempt =
        match start_result {
            Ok(attempt) => attempt,
            Err(AppError::Validation(message)) => {
                let questions_count = state
                    .db
                    .questions_count(quiz_id)
                    .await
                    .reject("could not get question count")?;
                let title = quiz.name.clone();
                let page = views::page(
                    &title,
                    quiz_views::start_page(quiz, questions_count, Some(&message)),
                );
                return Ok(page.into_response());
            }
            Err(e) => return Err(e),
        };

    let token = Ulid::new().to_string();
    state
        .db
        .save_attempt(&token, &attempt)
        .await
        .reject("could not save attempt")?;

    tracing::info!(
        "attempt started for quiz={quiz_id} by '{}' with {} questions",
        attempt.user_name,
        attempt.total_questions()
    );

    let cookie = utils::cookie(names::ATTEMPT_COOKIE_NAME, &token, state.secure_cookies);
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie).reject("could not build attempt cookie")?,
    );

    let page = question_page(&state, &attempt).await?;
    Ok((headers, page).into_response())
}

async fn current_question(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let Some(attempt) = load_attempt(&state, &jar).await? else {
        return Ok(Redirect::to(names::QUIZ_HOME_URL).into_response());
    };

    if attempt.is_complete() {
        return Ok(Redirect::to(names::QUIZ_RESULT_URL).into_response());
    }

    Ok(question_page(&state, &attempt).await?.into_response())
}

/// HTML forms send multi-select answers as repeated `options` fields,
/// which plain urlencoded deserialization cannot express, so the body is
/// parsed by hand.
async fn submit_answer_raw(
    State(state): State<AppState>,
    jar: CookieJar,
    body_bytes: Bytes,
) -> Result<Markup, AppError> {
    let body_str = String::from_utf8(body_bytes.to_vec())
        .map_err(|_| AppError::Validation("The answer form could not be read.".to_owned()))?;

    let mut option: Option<String> = None;
    let mut options: Vec<String> = Vec::new();

    for pair in body_str.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            let decoded_value = urlencoding::decode(value)
                .map_err(|e| {
                    tracing::error!("failed to decode URL value: {e}");
                    AppError::Validation("The answer form could not be read.".to_owned())
                })?
                .to_string();

            match key {
                "option" => option = Some(decoded_value),
                "options" => options.push(decoded_value),
                _ => {}
            }
        }
    }

    let selected_ids: Vec<i64> = if !options.is_empty() {
        options.iter().filter_map(|s| s.parse::<i64>().ok()).collect()
    } else if let Some(option) = option {
        vec![option
            .parse::<i64>()
            .map_err(|_| AppError::Validation("The selected answer is not valid.".to_owned()))?]
    } else {
        Vec::new()
    };

    submit_answer(state, jar, selected_ids).await
}

async fn submit_answer(
    state: AppState,
    jar: CookieJar,
    selected_ids: Vec<i64>,
) -> Result<Markup, AppError> {
    let token = attempt_token(&jar)?;
    let mut attempt = state
        .db
        .load_attempt(&token)
        .await
        .reject("could not load attempt")?
        .ok_or(AppError::SessionState(
            "There is no quiz in progress. Please start again.",
        ))?;

    let question_id = attempt.current_question_id().ok_or(AppError::SessionState(
        "All questions have already been answered.",
    ))?;

    let question = state
        .db
        .scored_question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound("the current question"))?;

    let feedback = attempt.submit(&question, &selected_ids)?;

    state
        .db
        .save_attempt(&token, &attempt)
        .await
        .reject("could not save attempt")?;

    let quiz = state
        .db
        .get_quiz(attempt.quiz_id)
        .await
        .reject("could not get quiz")?
        .ok_or(AppError::NotFound("this quiz"))?;

    let record = attempt
        .answers
        .last()
        .ok_or(AppError::Internal("answer log is empty after submit"))?;

    Ok(views::page(
        &quiz.name,
        quiz_views::answer_feedback(quiz_views::AnswerFeedbackData {
            question_text: question.text,
            feedback,
            selected_texts: record.selected_texts.clone(),
            answered: attempt.current_index,
            total: attempt.total_questions(),
            is_final: attempt.is_complete(),
        }),
    ))
}

async fn finalize_attempt(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let token = attempt_token(&jar)?;
    let attempt = state
        .db
        .load_attempt(&token)
        .await
        .reject("could not load attempt")?
        .ok_or(AppError::SessionState(
            "There is no quiz in progress. Please start again.",
        ))?;

    let summary = attempt.summary()?;

    let result_id = state
        .db
        .save_result(&summary, &attempt.answers)
        .await
        .reject("could not save result")?;

    state
        .db
        .delete_attempt(&token)
        .await
        .reject("could not discard attempt")?;

    let quiz = state
        .db
        .get_quiz(summary.quiz_id)
        .await
        .reject("could not get quiz")?
        .ok_or(AppError::NotFound("this quiz"))?;

    let top_results = state
        .db
        .top_results(summary.quiz_id, names::TOP_RESULTS_LIMIT)
        .await
        .reject("could not get top results")?;

    let page = views::page(
        "Results",
        quiz_views::result_page(quiz_views::ResultPageData {
            quiz,
            level: performance_level(summary.percentage),
            summary,
            result_id,
            answers: attempt.answers.clone(),
            top_results,
        }),
    );

    let cookie = utils::clear_cookie(names::ATTEMPT_COOKIE_NAME, state.secure_cookies);
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&cookie).reject("could not build clear cookie")?,
    );

    Ok((headers, page).into_response())
}

async fn result_detail(
    State(state): State<AppState>,
    Path(result_id): Path<i64>,
) -> Result<Markup, AppError> {
    let result = state
        .db
        .get_result(result_id)
        .await
        .reject("could not get result")?
        .ok_or(AppError::NotFound("this quiz result"))?;

    let quiz = state
        .db
        .get_quiz(result.quiz_id)
        .await
        .reject("could not get quiz")?
        .ok_or(AppError::NotFound("this quiz"))?;

    let review = state
        .db
        .result_review(result_id)
        .await
        .reject("could not get result review")?;

    Ok(views::page(
        "Result Details",
        quiz_views::result_detail(quiz_views::ResultDetailData {
            level: performance_level(result.percentage),
            result,
            quiz,
            review,
        }),
    ))
}

// --- Helpers ---

fn attempt_token(jar: &CookieJar) -> Result<String, AppError> {
    jar.get(names::ATTEMPT_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .ok_or(AppError::SessionState(
            "There is no quiz in progress. Please start again.",
        ))
}

async fn load_attempt(state: &AppState, jar: &CookieJar) -> Result<Option<QuizAttempt>, AppError> {
    let Some(token) = jar
        .get(names::ATTEMPT_COOKIE_NAME)
        .map(|c| c.value().to_string())
    else {
        return Ok(None);
    };

    state
        .db
        .load_attempt(&token)
        .await
        .reject("could not load attempt")
}

async fn question_page(state: &AppState, attempt: &QuizAttempt) -> Result<Markup, AppError> {
    let question_id = attempt.current_question_id().ok_or(AppError::SessionState(
        "All questions have already been answered.",
    ))?;

    let mut question = state
        .db
        .scored_question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound("the current question"))?;

    let quiz = state
        .db
        .get_quiz(attempt.quiz_id)
        .await
        .reject("could not get quiz")?
        .ok_or(AppError::NotFound("this quiz"))?;

    // Display order only; correctness never depends on option order.
    question.options.shuffle(&mut rand::thread_rng());

    let title = quiz.name.clone();
    Ok(views::page(
        &title,
        quiz_views::question_page(quiz_views::QuestionPageData {
            quiz,
            question,
            current: attempt.current_index + 1,
            total: attempt.total_questions(),
            score: attempt.score,
            correct_count: attempt.correct_count,
            wrong_count: attempt.wrong_count,
        }),
    ))
}
