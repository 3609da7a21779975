//! The quiz attempt state machine.
//!
//! One `QuizAttempt` value tracks a single user's linear traversal of a
//! quiz: the shuffled question order is fixed at `start`, every
//! `submit` scores one answer and advances the index, and `summary`
//! closes the attempt once all questions are answered. The value is
//! passed by serialization through the `quiz_attempts` table between
//! requests; nothing here touches the database.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::rejections::AppError;

pub const POINTS_PER_CORRECT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    Single,
    Multiple,
}

/// An answer option with its correctness marking, as loaded for scoring.
#[derive(Debug, Clone)]
pub struct ScoredOption {
    pub id: i64,
    pub text: String,
    pub is_answer: bool,
}

/// A question with everything `submit` needs to score a response.
#[derive(Debug, Clone)]
pub struct ScoredQuestion {
    pub id: i64,
    pub text: String,
    pub kind: QuestionKind,
    pub options: Vec<ScoredOption>,
}

/// One entry of the answer log, snapshotting the chosen and correct
/// option sets so the review pages work even against a changed catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: i64,
    pub question_text: String,
    pub selected_option_ids: Vec<i64>,
    pub selected_texts: Vec<String>,
    pub correct_option_ids: Vec<i64>,
    pub correct_texts: Vec<String>,
    pub is_correct: bool,
}

/// Immediate feedback returned from `submit`, rendered to the user
/// before the next question.
#[derive(Debug, Clone)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub correct_option_ids: Vec<i64>,
    pub correct_texts: Vec<String>,
    pub score: i64,
    pub correct_count: i64,
    pub wrong_count: i64,
}

/// Final counters of a completed attempt, persisted as one result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptSummary {
    pub quiz_id: i64,
    pub user_name: String,
    pub score: i64,
    pub correct_count: i64,
    pub wrong_count: i64,
    pub total_questions: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub quiz_id: i64,
    pub user_name: String,
    pub question_ids: Vec<i64>,
    pub current_index: usize,
    pub score: i64,
    pub correct_count: i64,
    pub wrong_count: i64,
    pub answers: Vec<AnswerRecord>,
}

impl QuizAttempt {
    /// Starts a fresh attempt with a one-time random question
    /// permutation. A blank display name or an empty question pool
    /// fails without creating any state.
    pub fn start(
        quiz_id: i64,
        user_name: &str,
        mut question_ids: Vec<i64>,
        rng: &mut impl Rng,
    ) -> Result<Self, AppError> {
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(AppError::Validation("Please enter your name.".to_owned()));
        }
        if question_ids.is_empty() {
            return Err(AppError::EmptyQuiz);
        }

        question_ids.shuffle(rng);

        Ok(Self {
            quiz_id,
            user_name: user_name.to_owned(),
            question_ids,
            current_index: 0,
            score: 0,
            correct_count: 0,
            wrong_count: 0,
            answers: Vec::new(),
        })
    }

    pub fn total_questions(&self) -> usize {
        self.question_ids.len()
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.question_ids.len()
    }

    /// The question id the next `submit` must answer, if any remain.
    pub fn current_question_id(&self) -> Option<i64> {
        self.question_ids.get(self.current_index).copied()
    }

    /// Scores one response against the current question, appends the
    /// answer log entry, updates the counters and advances the index.
    ///
    /// Single-select requires exactly one option id, multiple-select at
    /// least one; multiple-select is correct only on exact set equality
    /// with the question's correct options. A selected option id the
    /// question does not carry is a `NotFound`. Validation failures
    /// leave the attempt untouched.
    pub fn submit(
        &mut self,
        question: &ScoredQuestion,
        selected: &[i64],
    ) -> Result<AnswerFeedback, AppError> {
        let Some(expected_id) = self.current_question_id() else {
            return Err(AppError::SessionState(
                "All questions have already been answered.",
            ));
        };
        if question.id != expected_id {
            return Err(AppError::SessionState(
                "The submitted answer does not belong to the current question.",
            ));
        }

        match question.kind {
            QuestionKind::Single if selected.len() != 1 => {
                return Err(AppError::Validation(
                    "Please select exactly one answer.".to_owned(),
                ));
            }
            QuestionKind::Multiple if selected.is_empty() => {
                return Err(AppError::Validation(
                    "Please select at least one answer.".to_owned(),
                ));
            }
            _ => {}
        }

        for option_id in selected {
            if !question.options.iter().any(|o| o.id == *option_id) {
                return Err(AppError::NotFound("the selected answer option"));
            }
        }

        let correct_option_ids: Vec<i64> = question
            .options
            .iter()
            .filter(|o| o.is_answer)
            .map(|o| o.id)
            .collect();

        let is_correct = match question.kind {
            QuestionKind::Single => correct_option_ids.contains(&selected[0]),
            QuestionKind::Multiple => {
                let selected_set: BTreeSet<i64> = selected.iter().copied().collect();
                let correct_set: BTreeSet<i64> = correct_option_ids.iter().copied().collect();
                selected_set == correct_set
            }
        };

        let option_text = |id: i64| {
            question
                .options
                .iter()
                .find(|o| o.id == id)
                .map(|o| o.text.clone())
                .unwrap_or_default()
        };

        self.answers.push(AnswerRecord {
            question_id: question.id,
            question_text: question.text.clone(),
            selected_option_ids: selected.to_vec(),
            selected_texts: selected.iter().map(|&id| option_text(id)).collect(),
            correct_option_ids: correct_option_ids.clone(),
            correct_texts: correct_option_ids.iter().map(|&id| option_text(id)).collect(),
            is_correct,
        });

        if is_correct {
            self.score += POINTS_PER_CORRECT;
            self.correct_count += 1;
        } else {
            self.wrong_count += 1;
        }
        self.current_index += 1;

        Ok(AnswerFeedback {
            is_correct,
            correct_option_ids,
            correct_texts: self
                .answers
                .last()
                .map(|a| a.correct_texts.clone())
                .unwrap_or_default(),
            score: self.score,
            correct_count: self.correct_count,
            wrong_count: self.wrong_count,
        })
    }

    /// Final counters for persistence. Fails while questions remain.
    pub fn summary(&self) -> Result<AttemptSummary, AppError> {
        if !self.is_complete() {
            return Err(AppError::SessionState("The quiz is not finished yet."));
        }

        let total = self.question_ids.len() as i64;
        let percentage = if total > 0 {
            self.correct_count * 100 / total
        } else {
            0
        };

        Ok(AttemptSummary {
            quiz_id: self.quiz_id,
            user_name: self.user_name.clone(),
            score: self.score,
            correct_count: self.correct_count,
            wrong_count: self.wrong_count,
            total_questions: total,
            percentage,
        })
    }
}

/// Result banding shown on the result pages.
pub fn performance_level(percentage: i64) -> &'static str {
    if percentage >= 90 {
        "Excellent"
    } else if percentage >= 70 {
        "Good"
    } else if percentage >= 50 {
        "Satisfactory"
    } else {
        "Keep studying"
    }
}
