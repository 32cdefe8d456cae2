//! Tests for the scorer against fixtures and scoring properties
//!
//! Covers the documented examples, the point tables and the invariants
//! of each criterion.

use eval_quiz_application::{Scorer, ScorerBuilder};
use eval_quiz_domain::{PointTable, QuestionResult};
use eval_quiz_testing::builders::QuestionResultBuilder;
use eval_quiz_testing::fixtures::*;
use eval_quiz_testing::strategies::*;
use proptest::prelude::*;

// ============================================================================
// Documented examples
// ============================================================================

#[test]
fn test_perfect_guess_scores_170() {
    let scorer = Scorer::default();
    let breakdown = scorer.score(&create_perfect_guess()).unwrap();

    assert!(breakdown.found_winning_side);
    assert_eq!(breakdown.eval_points, 50.0);
    assert!(breakdown.found_best_move);
    assert_eq!(breakdown.best_move_multiplier, 3.0);
    assert!(!breakdown.found_player_or_tournament);
    assert_eq!(breakdown.total, 170.0);
}

#[test]
fn test_drawn_guess_with_surname_scores_28() {
    let scorer = Scorer::default();
    let breakdown = scorer.score(&create_drawn_guess_with_surname()).unwrap();

    assert!(!breakdown.found_winning_side);
    assert_eq!(breakdown.eval_points, 18.0);
    assert!(!breakdown.found_best_move);
    assert_eq!(breakdown.best_move_multiplier, 1.0);
    assert!(breakdown.found_player_or_tournament);
    assert_eq!(breakdown.total, 28.0);
}

#[test]
fn test_original_json_shape_scores_the_same() {
    let result: QuestionResult = serde_json::from_str(&perfect_guess_json()).unwrap();
    let breakdown = Scorer::default().score(&result).unwrap();
    assert_eq!(breakdown.total, 170.0);
}

#[test]
fn test_drawn_position_guessed_as_drawn_gets_no_side_credit() {
    let result = QuestionResultBuilder::new()
        .with_top("e2e4", 0.0)
        .with_guess_eval(0.0)
        .with_guess_move("e2e4")
        .with_guess_name("")
        .build();

    let breakdown = Scorer::default().score(&result).unwrap();

    assert!(!breakdown.found_winning_side);
    assert_eq!(breakdown.total, 150.0);
}

#[test]
fn test_lower_ranked_move_multiplier() {
    let result = QuestionResultBuilder::new()
        .with_top("e4", 1.0)
        .with_line("d4", 0.0)
        .with_line("c4", -1.0)
        .with_guess_eval(1.0)
        .with_guess_move("d4")
        .with_guess_name("")
        .build();

    let breakdown = Scorer::default().score(&result).unwrap();

    assert!(breakdown.found_best_move);
    assert_eq!(breakdown.best_move_multiplier, 2.25);
    assert_eq!(breakdown.total, 20.0 + 50.0 * 2.25);
}

#[test]
fn test_tournament_word_matches() {
    let result = QuestionResultBuilder::new()
        .with_players("Magnus Carlsen", "Hikaru Nakamura")
        .with_tournament("Norway Chess")
        .with_guess_name("Norway")
        .build();

    assert!(Scorer::default().score(&result).unwrap().found_player_or_tournament);
}

#[test]
fn test_guess_identical_to_one_field_matches() {
    let result = QuestionResultBuilder::new()
        .with_players("Magnus Carlsen", "Hikaru Nakamura")
        .with_guess_name("Hikaru Nakamura")
        .build();

    assert!(Scorer::default().score(&result).unwrap().found_player_or_tournament);
}

#[test]
fn test_misspelled_every_token_fails() {
    let result = QuestionResultBuilder::new()
        .with_players("Magnus Carlsen", "Hikaru Nakamura")
        .with_tournament("Norway Chess")
        .with_guess_name("Magnis Carlson")
        .build();

    assert!(!Scorer::default().score(&result).unwrap().found_player_or_tournament);
}

#[test]
fn test_empty_engine_evaluation_is_rejected_before_scoring() {
    let json = r#"{
        "question": {"players": {"white": "A", "black": "B"}, "tournament": "C"},
        "engineEvaluation": [],
        "answer": {"evaluation": 0.5, "bestMove": "e2e4", "playerOrTournament": "A"}
    }"#;
    assert!(serde_json::from_str::<QuestionResult>(json).is_err());
}

#[test]
fn test_custom_point_table() {
    let scorer = ScorerBuilder::new()
        .points(PointTable {
            winning_side_points: 0.0,
            player_or_tournament_points: 0.0,
            ..Default::default()
        })
        .build()
        .unwrap();

    let breakdown = scorer.score(&create_perfect_guess()).unwrap();
    assert_eq!(breakdown.total, 150.0);
}

#[test]
fn test_fixture_question_result() {
    let result = create_test_question_result();
    assert!(result.validate().valid);

    let breakdown = Scorer::default().score(&result).unwrap();
    assert!(breakdown.found_winning_side);
    assert_eq!(breakdown.weighted_eval_points(), 150.0);
    assert!(!breakdown.found_player_or_tournament);
    assert_eq!(breakdown.total, 170.0);
}

#[test]
fn test_random_players_match_on_exact_surname() {
    let scorer = Scorer::default();

    for _ in 0..25 {
        let context = random_context();
        let surname = context.players.white.split_whitespace().last().unwrap().to_string();

        assert!(
            scorer.found_player_or_tournament(&surname, &context),
            "{:?} should match {:?}",
            surname,
            context
        );
        assert!(!scorer.found_player_or_tournament("Grandmaster7", &context));

        let shouted = surname.to_uppercase();
        if shouted != surname {
            assert!(!scorer.found_player_or_tournament(&shouted, &context));
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_same_sign_nonzero_finds_winning_side(a in arb_nonzero_evaluation(), b in arb_nonzero_evaluation()) {
        let scorer = Scorer::default();
        prop_assert_eq!(scorer.found_winning_side(a, b), (a > 0.0) == (b > 0.0));
    }

    #[test]
    fn prop_zero_never_finds_winning_side(a in arb_evaluation()) {
        let scorer = Scorer::default();
        prop_assert!(!scorer.found_winning_side(0.0, a));
        prop_assert!(!scorer.found_winning_side(a, 0.0));
    }

    #[test]
    fn prop_eval_points_linear(guess in arb_evaluation(), actual in arb_evaluation()) {
        let scorer = Scorer::default();
        let d = (guess - actual).abs();
        prop_assert_eq!(scorer.eval_points(guess, actual), 50.0 - 16.0 * d);
    }

    #[test]
    fn prop_eval_points_non_increasing(actual in arb_evaluation(), d1 in 0.0f64..30.0, extra in 0.0f64..30.0) {
        let scorer = Scorer::default();
        let near = scorer.eval_points(actual + d1, actual);
        let far = scorer.eval_points(actual + d1 + extra, actual);
        prop_assert!(far <= near + 1e-9);
    }

    #[test]
    fn prop_multiplier_bounds(result in arb_question_result()) {
        let scorer = Scorer::default();
        let outcome = scorer.best_move(&result.answer.best_move, &result.engine_evaluation);
        prop_assert!(outcome.multiplier >= 1.0);
        prop_assert!(outcome.multiplier <= 3.0);
        if !outcome.found {
            prop_assert_eq!(outcome.multiplier, 1.0);
        }
    }

    #[test]
    fn prop_top_move_gets_full_multiplier(result in arb_question_result()) {
        let scorer = Scorer::default();
        let top = result.engine_evaluation.top().mv.clone();
        let outcome = scorer.best_move(&top, &result.engine_evaluation);
        prop_assert!(outcome.found);
        prop_assert_eq!(outcome.multiplier, 3.0);
    }

    #[test]
    fn prop_total_matches_formula(result in arb_question_result()) {
        let breakdown = Scorer::default().score(&result).unwrap();
        let expected = (if breakdown.found_winning_side { 20.0 } else { 0.0 })
            + breakdown.eval_points * breakdown.best_move_multiplier
            + (if breakdown.found_player_or_tournament { 10.0 } else { 0.0 });
        prop_assert_eq!(breakdown.total, expected);
    }

    #[test]
    fn prop_scoring_is_idempotent(result in arb_question_result()) {
        let scorer = Scorer::default();
        let first = scorer.score(&result).unwrap();
        let second = scorer.score(&result).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_guess_containing_context_word_matches(context in arb_context(), noise in arb_word()) {
        let scorer = Scorer::default();
        let surname = context.players.black.split_whitespace().last().unwrap().to_string();
        let guess = format!("{} {}", noise, surname);
        prop_assert!(scorer.found_player_or_tournament(&guess, &context));
    }
}
