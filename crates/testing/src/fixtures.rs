//! Test fixtures for quiz data.
//!
//! Fixed fixtures reproduce known positions and scores; the `random_*`
//! helpers use `fake` for names where the exact text does not matter.

use eval_quiz_domain::{
    Answer, EngineEvaluation, PositionContext, QuestionResult, Variation,
};
use fake::{
    faker::{address::en::CityName, name::en::Name},
    Fake,
};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A fixed context: Carlsen vs Nakamura at Norway Chess
pub fn create_test_context() -> PositionContext {
    PositionContext::new("Magnus Carlsen", "Hikaru Nakamura", "Norway Chess").with_fen(START_FEN)
}

/// A context with random player names and a random city tournament
pub fn random_context() -> PositionContext {
    let white: String = Name().fake();
    let black: String = Name().fake();
    let city: String = CityName().fake();
    PositionContext::new(white, black, format!("{} Open", city))
}

/// Three-line engine evaluation: e2e4 +0.35, d2d4 +0.30, g1f3 +0.20
pub fn create_test_engine_evaluation() -> EngineEvaluation {
    create_engine_evaluation(&[("e2e4", 0.35), ("d2d4", 0.30), ("g1f3", 0.20)])
}

/// Engine evaluation from `(move, evaluation)` pairs, best first.
///
/// Panics on an empty slice; fixtures are expected to be well formed.
pub fn create_engine_evaluation(lines: &[(&str, f64)]) -> EngineEvaluation {
    EngineEvaluation::new(
        lines
            .iter()
            .map(|(mv, evaluation)| Variation::new(*mv, *evaluation))
            .collect(),
    )
    .expect("fixture engine evaluation must be non-empty and finite")
}

/// A perfect answer for [`create_test_engine_evaluation`] that names no one
pub fn create_test_answer() -> Answer {
    Answer::new(0.35, "e2e4", "Kasparov")
}

/// Fixed question result built from the fixtures above
pub fn create_test_question_result() -> QuestionResult {
    QuestionResult::new(
        create_test_context(),
        create_test_engine_evaluation(),
        create_test_answer(),
    )
}

/// Top evaluation +1.0 on "e4", a perfect guess, no name overlap: scores 170
pub fn create_perfect_guess() -> QuestionResult {
    QuestionResult::new(
        PositionContext::new("Magnus Carlsen", "Wesley So", "Sinquefield Cup"),
        create_engine_evaluation(&[("e4", 1.0), ("d4", 0.8), ("c4", 0.6)]),
        Answer::new(1.0, "e4", "Fischer"),
    )
}

/// Top evaluation +2.0, a drawn guess, a move outside the candidates and
/// a correct surname: scores 28
pub fn create_drawn_guess_with_surname() -> QuestionResult {
    QuestionResult::new(
        PositionContext::new("Magnus Carlsen", "Wesley So", "Sinquefield Cup"),
        create_engine_evaluation(&[("e4", 2.0), ("d4", 1.7), ("c4", 1.1)]),
        Answer::new(0.0, "h4", "Carlsen"),
    )
}

/// The perfect-guess fixture as JSON in the original `stockfishEval` shape
pub fn perfect_guess_json() -> String {
    serde_json::json!({
        "question": {
            "players": {"white": "Magnus Carlsen", "black": "Wesley So"},
            "tournament": "Sinquefield Cup"
        },
        "stockfishEval": [
            {"move": "e4", "evaluation": 1.0},
            {"move": "d4", "evaluation": 0.8},
            {"move": "c4", "evaluation": 0.6}
        ],
        "answer": {"evaluation": 1.0, "bestMove": "e4", "playerOrTournament": "Fischer"}
    })
    .to_string()
}
