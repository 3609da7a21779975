use maud::{html, Markup};

use crate::{
    db::models::{QuizModel, ResultModel, ReviewEntry},
    names,
    session::{AnswerFeedback, AnswerRecord, AttemptSummary, QuestionKind, ScoredQuestion},
};

pub struct QuizHomeEntry {
    pub quiz: QuizModel,
    pub top_results: Vec<ResultModel>,
}

fn leaderboard(results: &[ResultModel]) -> Markup {
    html! {
        @if results.is_empty() {
            p { small { em { "No results yet. Be the first!" } } }
        } @else {
            table."leaderboard" {
                thead {
                    tr {
                        th { "#" }
                        th { "Name" }
                        th { "Score" }
                        th { "%" }
                    }
                }
                tbody {
                    @for (i, result) in results.iter().enumerate() {
                        tr {
                            td { (i + 1) }
                            td {
                                a href=(names::result_detail_url(result.id)) { (result.user_name) }
                            }
                            td { (result.score) }
                            td { (result.percentage) "%" }
                        }
                    }
                }
            }
        }
    }
}

pub fn quiz_home(entries: Vec<QuizHomeEntry>) -> Markup {
    html! {
        h1 { "Mushroom Quizzes" }
        p { "Test what you have learned. Each correct answer is worth 10 points." }
        @if entries.is_empty() {
            p { em { "No quizzes are configured yet." } }
        }
        @for entry in &entries {
            article."quiz-card" {
                header {
                    h2 { (entry.quiz.name) }
                    p { small { (entry.quiz.level) " · " (entry.quiz.question_count) " questions" } }
                }
                @if !entry.quiz.description.is_empty() {
                    p { (entry.quiz.description) }
                }
                a role="button" href=(names::quiz_start_url(entry.quiz.id)) { "Start" }
                details {
                    summary { "Top results" }
                    (leaderboard(&entry.top_results))
                }
            }
        }
    }
}

pub fn start_page(quiz: QuizModel, questions_count: i64, error: Option<&str>) -> Markup {
    html! {
        hgroup {
            h1 { (quiz.name) }
            p { (quiz.level) " · " (questions_count) " questions" }
        }
        @if !quiz.description.is_empty() {
            p { (quiz.description) }
        }
        @if let Some(message) = error {
            p."error-text" { (message) }
        }
        form action=(names::quiz_start_url(quiz.id)) method="post" {
            label {
                "Your name"
                input type="text" name="user_name" placeholder="Enter your name" required;
            }
            button type="submit" { "Begin quiz" }
        }
        a href=(names::QUIZ_HOME_URL) { "Back to quizzes" }
    }
}

fn progress(current: usize, total: usize, score: i64, correct: i64, wrong: i64) -> Markup {
    html! {
        div."quiz-progress" {
            span { "Question " (current) " of " (total) }
            span { "Score: " (score) }
            span."correct" { "✓ " (correct) }
            span."wrong" { "✗ " (wrong) }
        }
        progress value=(current.saturating_sub(1)) max=(total) {}
    }
}

pub struct QuestionPageData {
    pub quiz: QuizModel,
    pub question: ScoredQuestion,
    pub current: usize,
    pub total: usize,
    pub score: i64,
    pub correct_count: i64,
    pub wrong_count: i64,
}

pub fn question_page(data: QuestionPageData) -> Markup {
    html! {
        h1 { (data.quiz.name) }
        (progress(data.current, data.total, data.score, data.correct_count, data.wrong_count))

        article."question" {
            header {
                h2 { (data.question.text) }
                @if data.question.kind == QuestionKind::Multiple {
                    p { small { em { "Several answers may be correct. Select all that apply." } } }
                }
            }
            form action=(names::QUIZ_ANSWER_URL) method="post" {
                @for option in &data.question.options {
                    label {
                        @match data.question.kind {
                            QuestionKind::Single => {
                                input type="radio" name="option" value=(option.id) required;
                            }
                            QuestionKind::Multiple => {
                                input type="checkbox" name="options" value=(option.id);
                            }
                        }
                        (option.text)
                    }
                }
                button type="submit" { "Submit answer" }
            }
        }
    }
}

pub struct AnswerFeedbackData {
    pub question_text: String,
    pub feedback: AnswerFeedback,
    pub selected_texts: Vec<String>,
    pub answered: usize,
    pub total: usize,
    pub is_final: bool,
}

pub fn answer_feedback(data: AnswerFeedbackData) -> Markup {
    html! {
        article."feedback" {
            header {
                @if data.feedback.is_correct {
                    h2."correct" { "✓ Correct!" }
                } @else {
                    h2."wrong" { "✗ Not quite" }
                }
            }
            p { strong { (data.question_text) } }
            p {
                "Your answer: "
                @for (i, text) in data.selected_texts.iter().enumerate() {
                    @if i > 0 { ", " }
                    (text)
                }
            }
            @if !data.feedback.is_correct {
                p {
                    "Correct answer: "
                    @for (i, text) in data.feedback.correct_texts.iter().enumerate() {
                        @if i > 0 { ", " }
                        (text)
                    }
                }
            }
            footer {
                p {
                    small {
                        (data.answered) " of " (data.total) " answered · score " (data.feedback.score)
                    }
                }
                @if data.is_final {
                    a role="button" href=(names::QUIZ_RESULT_URL) { "See your results" }
                } @else {
                    a role="button" href=(names::QUIZ_QUESTION_URL) { "Next question" }
                }
            }
        }
    }
}

fn review_list(answers: &[AnswerRecord]) -> Markup {
    html! {
        section {
            h2 { "Review" }
            @for (i, record) in answers.iter().enumerate() {
                article."review-entry" {
                    header {
                        @if record.is_correct {
                            span."correct" { "✓" }
                        } @else {
                            span."wrong" { "✗" }
                        }
                        " " strong { (i + 1) ". " (record.question_text) }
                    }
                    p {
                        "You answered: "
                        @for (j, text) in record.selected_texts.iter().enumerate() {
                            @if j > 0 { ", " }
                            (text)
                        }
                    }
                    @if !record.is_correct {
                        p {
                            "Correct: "
                            @for (j, text) in record.correct_texts.iter().enumerate() {
                                @if j > 0 { ", " }
                                (text)
                            }
                        }
                    }
                }
            }
        }
    }
}

pub struct ResultPageData {
    pub quiz: QuizModel,
    pub summary: AttemptSummary,
    pub level: &'static str,
    pub result_id: i64,
    pub answers: Vec<AnswerRecord>,
    pub top_results: Vec<ResultModel>,
}

pub fn result_page(data: ResultPageData) -> Markup {
    html! {
        hgroup {
            h1 { "Quiz complete!" }
            p { (data.quiz.name) }
        }

        article."result-summary" {
            h2 { (data.summary.percentage) "% — " (data.level) }
            p {
                "Well done, " strong { (data.summary.user_name) } "! "
                "You scored " strong { (data.summary.score) } " points: "
                (data.summary.correct_count) " correct and "
                (data.summary.wrong_count) " wrong out of "
                (data.summary.total_questions) " questions."
            }
            p {
                small {
                    "Saved as result #" (data.result_id) " — "
                    a href=(names::result_detail_url(data.result_id)) { "permanent link" }
                }
            }
        }

        (review_list(&data.answers))

        section {
            h2 { "Top results" }
            (leaderboard(&data.top_results))
        }

        div."result-links" {
            a role="button" href=(names::quiz_start_url(data.quiz.id)) { "Try again" }
            a role="button" href=(names::QUIZ_HOME_URL) class="outline" { "All quizzes" }
        }
    }
}

pub struct ResultDetailData {
    pub result: ResultModel,
    pub quiz: QuizModel,
    pub level: &'static str,
    pub review: Vec<ReviewEntry>,
}

pub fn result_detail(data: ResultDetailData) -> Markup {
    html! {
        hgroup {
            h1 { (data.quiz.name) " — result" }
            p { (data.result.user_name) " · " (data.result.created_at) }
        }

        article."result-summary" {
            h2 { (data.result.percentage) "% — " (data.level) }
            p {
                (data.result.score) " points: "
                (data.result.correct_count) " correct, "
                (data.result.wrong_count) " wrong, "
                (data.result.total_questions) " questions."
            }
        }

        @if !data.review.is_empty() {
            section {
                h2 { "Answers" }
                @for (i, entry) in data.review.iter().enumerate() {
                    article."review-entry" {
                        header {
                            @if entry.is_correct {
                                span."correct" { "✓" }
                            } @else {
                                span."wrong" { "✗" }
                            }
                            " " strong { (i + 1) ". " (entry.question) }
                        }
                        p {
                            "Answered: "
                            @for (j, text) in entry.selected.iter().enumerate() {
                                @if j > 0 { ", " }
                                (text)
                            }
                        }
                        @if !entry.is_correct {
                            p {
                                "Correct: "
                                @for (j, text) in entry.correct.iter().enumerate() {
                                    @if j > 0 { ", " }
                                    (text)
                                }
                            }
                        }
                    }
                }
            }
        }

        a href=(names::QUIZ_HOME_URL) { "Back to quizzes" }
    }
}
