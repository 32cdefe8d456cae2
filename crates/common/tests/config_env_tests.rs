//! Environment overrides read through `AppConfig::load`.
//!
//! Kept to a single test so no other test in this binary races on the
//! process environment.

use eval_quiz_common::AppConfig;

#[test]
fn test_load_reads_points_from_environment() {
    std::env::set_var("EVAL_QUIZ_POINTS__WINNING_SIDE_POINTS", "25");
    std::env::set_var("EVAL_QUIZ_POINTS__PLAYER_OR_TOURNAMENT_POINTS", "12.5");

    let loaded = AppConfig::load();

    std::env::remove_var("EVAL_QUIZ_POINTS__WINNING_SIDE_POINTS");
    std::env::remove_var("EVAL_QUIZ_POINTS__PLAYER_OR_TOURNAMENT_POINTS");

    let config = loaded.unwrap();
    assert_eq!(config.points.winning_side_points, 25.0);
    assert_eq!(config.points.player_or_tournament_points, 12.5);
    assert_eq!(config.points.eval_base_points, 50.0);
}
