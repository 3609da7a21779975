use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{html, Markup};

use crate::views;

/// Application-level failures surfaced at the handler boundary.
///
/// Everything except `Internal` is a deterministic, client-correctable
/// error; none of them are fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Malformed or missing caller input.
    Validation(String),
    /// The quiz has no linked questions.
    EmptyQuiz,
    /// A referenced entity does not exist (anymore).
    NotFound(&'static str),
    /// Operation invoked outside its valid session state.
    SessionState(&'static str),
    /// Anything we cannot hand back to the caller to fix.
    Internal(&'static str),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyQuiz => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::SessionState(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::EmptyQuiz => "This quiz has no questions yet.".to_owned(),
            AppError::NotFound(what) => format!("Could not find {what}."),
            AppError::SessionState(msg) => (*msg).to_owned(),
            AppError::Internal(_) => "Something went wrong on our side.".to_owned(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "validation error: {msg}"),
            AppError::EmptyQuiz => write!(f, "quiz has no questions"),
            AppError::NotFound(what) => write!(f, "{what} not found"),
            AppError::SessionState(msg) => write!(f, "invalid session state: {msg}"),
            AppError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(msg) = &self {
            tracing::error!("internal error surfaced to client: {msg}");
        }

        (self.status(), error_page(&self.message())).into_response()
    }
}

/// Maps data-layer errors into `AppError` without losing the original
/// cause from the logs.
pub trait ResultExt<T> {
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            article {
                header { h2 { "Error" } }
                p { (message) }
                p { a href="/" { "Back to the homepage" } }
            }
        },
    )
}
