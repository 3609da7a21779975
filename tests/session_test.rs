use mycoguide::rejections::AppError;
use mycoguide::session::{
    performance_level, QuestionKind, QuizAttempt, ScoredOption, ScoredQuestion, POINTS_PER_CORRECT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn option(id: i64, text: &str, is_answer: bool) -> ScoredOption {
    ScoredOption {
        id,
        text: text.to_string(),
        is_answer,
    }
}

fn single_question(id: i64) -> ScoredQuestion {
    ScoredQuestion {
        id,
        text: format!("Question {id}"),
        kind: QuestionKind::Single,
        options: vec![
            option(id * 10 + 1, "Right", true),
            option(id * 10 + 2, "Wrong", false),
        ],
    }
}

fn multiple_question(id: i64) -> ScoredQuestion {
    ScoredQuestion {
        id,
        text: format!("Question {id}"),
        kind: QuestionKind::Multiple,
        options: vec![
            option(id * 10 + 1, "Right A", true),
            option(id * 10 + 2, "Right B", true),
            option(id * 10 + 3, "Wrong", false),
        ],
    }
}

#[test]
fn start_rejects_a_blank_name() {
    let err = QuizAttempt::start(1, "   ", vec![1, 2], &mut rng()).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn start_rejects_an_empty_question_pool() {
    let err = QuizAttempt::start(1, "Mira", vec![], &mut rng()).unwrap_err();
    assert_eq!(err, AppError::EmptyQuiz);
}

#[test]
fn start_trims_the_name_and_shuffles_the_questions() {
    let ids: Vec<i64> = (1..=20).collect();
    let attempt = QuizAttempt::start(1, "  Mira  ", ids.clone(), &mut rng()).unwrap();

    assert_eq!(attempt.user_name, "Mira");
    assert_eq!(attempt.total_questions(), 20);
    assert!(!attempt.is_complete());

    // Same multiset of ids, almost surely a different order
    let mut sorted = attempt.question_ids.clone();
    sorted.sort();
    assert_eq!(sorted, ids);
    assert_ne!(attempt.question_ids, ids);
}

#[test]
fn correct_single_answer_scores_ten_points() {
    let mut attempt = QuizAttempt::start(1, "Mira", vec![5], &mut rng()).unwrap();
    let question = single_question(5);

    let feedback = attempt.submit(&question, &[51]).unwrap();

    assert!(feedback.is_correct);
    assert_eq!(feedback.score, POINTS_PER_CORRECT);
    assert_eq!(feedback.correct_count, 1);
    assert_eq!(feedback.wrong_count, 0);
    assert!(attempt.is_complete());
}

#[test]
fn wrong_single_answer_reports_the_correct_option() {
    let mut attempt = QuizAttempt::start(1, "Mira", vec![5], &mut rng()).unwrap();
    let question = single_question(5);

    let feedback = attempt.submit(&question, &[52]).unwrap();

    assert!(!feedback.is_correct);
    assert_eq!(feedback.score, 0);
    assert_eq!(feedback.correct_option_ids, vec![51]);
    assert_eq!(feedback.correct_texts, vec!["Right"]);
}

#[test]
fn single_select_requires_exactly_one_answer() {
    let mut attempt = QuizAttempt::start(1, "Mira", vec![5], &mut rng()).unwrap();
    let question = single_question(5);

    let err = attempt.submit(&question, &[51, 52]).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = attempt.submit(&question, &[]).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // Validation failures leave the attempt untouched
    assert_eq!(attempt.current_index, 0);
    assert_eq!(attempt.score, 0);
    assert!(attempt.answers.is_empty());
}

#[test]
fn unknown_option_id_is_rejected() {
    let mut attempt = QuizAttempt::start(1, "Mira", vec![5], &mut rng()).unwrap();
    let question = single_question(5);

    let err = attempt.submit(&question, &[999]).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(attempt.current_index, 0);
}

#[test]
fn multiple_select_requires_the_exact_correct_set() {
    let question = multiple_question(7);

    // Exact set, any order
    let mut attempt = QuizAttempt::start(1, "Mira", vec![7], &mut rng()).unwrap();
    let feedback = attempt.submit(&question, &[72, 71]).unwrap();
    assert!(feedback.is_correct);

    // A subset is wrong
    let mut attempt = QuizAttempt::start(1, "Mira", vec![7], &mut rng()).unwrap();
    let feedback = attempt.submit(&question, &[71]).unwrap();
    assert!(!feedback.is_correct);

    // A superset is wrong
    let mut attempt = QuizAttempt::start(1, "Mira", vec![7], &mut rng()).unwrap();
    let feedback = attempt.submit(&question, &[71, 72, 73]).unwrap();
    assert!(!feedback.is_correct);

    // Empty selection is a validation error, not a wrong answer
    let mut attempt = QuizAttempt::start(1, "Mira", vec![7], &mut rng()).unwrap();
    let err = attempt.submit(&question, &[]).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn submit_checks_the_question_against_the_cursor() {
    let mut attempt = QuizAttempt::start(1, "Mira", vec![5], &mut rng()).unwrap();

    // Wrong question for the current position
    let err = attempt.submit(&single_question(6), &[61]).unwrap_err();
    assert!(matches!(err, AppError::SessionState(_)));

    // Past the end
    attempt.submit(&single_question(5), &[51]).unwrap();
    let err = attempt.submit(&single_question(5), &[51]).unwrap_err();
    assert!(matches!(err, AppError::SessionState(_)));
}

#[test]
fn summary_fails_while_questions_remain() {
    let attempt = QuizAttempt::start(1, "Mira", vec![5, 6], &mut rng()).unwrap();
    let err = attempt.summary().unwrap_err();
    assert!(matches!(err, AppError::SessionState(_)));
}

#[test]
fn a_full_run_accumulates_score_and_log() {
    let mut attempt = QuizAttempt::start(3, "Mira", vec![5, 7], &mut rng()).unwrap();

    // Answer in whatever order the shuffle produced
    while let Some(question_id) = attempt.current_question_id() {
        match question_id {
            5 => attempt.submit(&single_question(5), &[51]).unwrap(),
            7 => attempt.submit(&multiple_question(7), &[73]).unwrap(),
            other => panic!("unexpected question id {other}"),
        };
    }

    assert!(attempt.is_complete());
    assert_eq!(attempt.answers.len(), 2);

    let summary = attempt.summary().unwrap();
    assert_eq!(summary.quiz_id, 3);
    assert_eq!(summary.user_name, "Mira");
    assert_eq!(summary.score, POINTS_PER_CORRECT);
    assert_eq!(summary.correct_count, 1);
    assert_eq!(summary.wrong_count, 1);
    assert_eq!(summary.total_questions, 2);
    assert_eq!(summary.percentage, 50);
}

#[test]
fn the_answer_log_snapshots_texts_and_correct_sets() {
    let mut attempt = QuizAttempt::start(1, "Mira", vec![7], &mut rng()).unwrap();
    attempt.submit(&multiple_question(7), &[71, 73]).unwrap();

    let record = &attempt.answers[0];
    assert_eq!(record.question_id, 7);
    assert_eq!(record.question_text, "Question 7");
    assert_eq!(record.selected_option_ids, vec![71, 73]);
    assert_eq!(record.selected_texts, vec!["Right A", "Wrong"]);
    assert_eq!(record.correct_option_ids, vec![71, 72]);
    assert_eq!(record.correct_texts, vec!["Right A", "Right B"]);
    assert!(!record.is_correct);
}

#[test]
fn summary_counters_agree_with_the_answer_log() {
    let mut attempt = QuizAttempt::start(1, "Mira", vec![1, 2, 3], &mut rng()).unwrap();

    while let Some(question_id) = attempt.current_question_id() {
        let question = single_question(question_id);
        // Answer question 2 wrong, the rest right
        let selected = if question_id == 2 {
            question_id * 10 + 2
        } else {
            question_id * 10 + 1
        };
        attempt.submit(&question, &[selected]).unwrap();
    }

    let summary = attempt.summary().unwrap();
    let correct_in_log = attempt.answers.iter().filter(|a| a.is_correct).count() as i64;
    assert_eq!(summary.correct_count, correct_in_log);
    assert_eq!(summary.wrong_count, attempt.answers.len() as i64 - correct_in_log);
    assert_eq!(summary.score, correct_in_log * POINTS_PER_CORRECT);
}

#[test]
fn attempts_round_trip_through_json() {
    let mut attempt = QuizAttempt::start(1, "Mira", vec![5, 7], &mut rng()).unwrap();
    let question_id = attempt.current_question_id().unwrap();
    if question_id == 5 {
        attempt.submit(&single_question(5), &[51]).unwrap();
    } else {
        attempt.submit(&multiple_question(7), &[71, 72]).unwrap();
    }

    let json = serde_json::to_string(&attempt).unwrap();
    let restored: QuizAttempt = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.question_ids, attempt.question_ids);
    assert_eq!(restored.current_index, attempt.current_index);
    assert_eq!(restored.score, attempt.score);
    assert_eq!(restored.answers.len(), attempt.answers.len());
}

#[test]
fn performance_levels_band_the_percentage() {
    assert_eq!(performance_level(100), "Excellent");
    assert_eq!(performance_level(90), "Excellent");
    assert_eq!(performance_level(89), "Good");
    assert_eq!(performance_level(70), "Good");
    assert_eq!(performance_level(69), "Satisfactory");
    assert_eq!(performance_level(50), "Satisfactory");
    assert_eq!(performance_level(49), "Keep studying");
    assert_eq!(performance_level(0), "Keep studying");
}
