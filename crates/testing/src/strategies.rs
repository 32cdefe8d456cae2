//! Proptest strategies for quiz data.

use eval_quiz_domain::{Answer, EngineEvaluation, PositionContext, QuestionResult, Variation};
use proptest::prelude::*;

/// Evaluations in a realistic pawn range
pub fn arb_evaluation() -> impl Strategy<Value = f64> {
    -20.0f64..20.0
}

/// Evaluations bounded away from zero
pub fn arb_nonzero_evaluation() -> impl Strategy<Value = f64> {
    prop_oneof![0.01f64..20.0, -20.0f64..-0.01]
}

/// Coordinate-notation moves such as "e2e4"
pub fn arb_move() -> impl Strategy<Value = String> {
    "[a-h][1-8][a-h][1-8]"
}

/// One capitalised word
pub fn arb_word() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8}"
}

/// One or two capitalised words separated by a space
pub fn arb_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8}( [A-Z][a-z]{2,8})?"
}

/// Between one and five engine lines
pub fn arb_engine_evaluation() -> impl Strategy<Value = EngineEvaluation> {
    prop::collection::vec((arb_move(), arb_evaluation()), 1..6).prop_map(|lines| {
        EngineEvaluation::new(
            lines
                .into_iter()
                .map(|(mv, evaluation)| Variation::new(mv, evaluation))
                .collect(),
        )
        .expect("strategy yields at least one finite line")
    })
}

pub fn arb_context() -> impl Strategy<Value = PositionContext> {
    (arb_name(), arb_name(), arb_name())
        .prop_map(|(white, black, tournament)| PositionContext::new(white, black, tournament))
}

pub fn arb_answer() -> impl Strategy<Value = Answer> {
    (arb_evaluation(), arb_move(), arb_name())
        .prop_map(|(evaluation, mv, name)| Answer::new(evaluation, mv, name))
}

pub fn arb_question_result() -> impl Strategy<Value = QuestionResult> {
    (arb_context(), arb_engine_evaluation(), arb_answer()).prop_map(
        |(context, engine_evaluation, answer)| {
            QuestionResult::new(context, engine_evaluation, answer)
        },
    )
}
