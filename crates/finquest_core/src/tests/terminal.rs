use crate::error::EngineError;
use crate::model::{AssetCategory, Career, CategoryAmounts, GamePhase, Outcome, UserProfile};
use crate::month::{advance_month, process_month_end, submit_contributions};
use crate::random::ScriptedRandom;

use super::{break_even, engineer, new_game, quiet_rules};

#[test]
fn test_crossing_five_million_wins() {
    let mut state = new_game(engineer());
    state.cash = 4_999_999.0;
    state.net_worth = 4_999_999.0;

    let (next, report) =
        process_month_end(&state, &quiet_rules(), &mut ScriptedRandom::constant(0.5)).unwrap();

    assert_eq!(report.outcome, Some(Outcome::Win));
    assert_eq!(next.phase, GamePhase::GameOver(Outcome::Win));
    assert!(next.is_over());
}

#[test]
fn test_exactly_five_million_wins() {
    let profile = UserProfile::new("Edge", Career::Designer, 1.0, 0.0);
    let mut state = new_game(profile);
    state.cash = 4_999_999.0;

    let (next, _) =
        process_month_end(&state, &quiet_rules(), &mut ScriptedRandom::constant(0.5)).unwrap();

    assert_eq!(next.net_worth, 5_000_000.0);
    assert_eq!(next.phase.outcome(), Some(Outcome::Win));
}

#[test]
fn test_loss_threshold_is_strict() {
    let rules = quiet_rules();
    let mut rng = ScriptedRandom::constant(0.5);

    let mut state = new_game(break_even());
    state.cash = -100_000.0;
    let (at_threshold, _) = process_month_end(&state, &rules, &mut rng).unwrap();
    assert_eq!(at_threshold.net_worth, -100_000.0);
    assert_eq!(at_threshold.phase, GamePhase::AwaitingContribution);

    let mut state = new_game(break_even());
    state.cash = -100_001.0;
    let (below, report) = process_month_end(&state, &rules, &mut rng).unwrap();
    assert_eq!(report.outcome, Some(Outcome::Loss));
    assert_eq!(below.phase, GamePhase::GameOver(Outcome::Loss));
}

#[test]
fn test_game_over_is_absorbing() {
    let mut state = new_game(break_even());
    state.cash = -200_000.0;
    let rules = quiet_rules();
    let mut rng = ScriptedRandom::constant(0.5);

    let (over, _) = process_month_end(&state, &rules, &mut rng).unwrap();
    let contributions = CategoryAmounts::default().with(AssetCategory::Savings, 1.0);

    assert_eq!(
        process_month_end(&over, &rules, &mut rng).unwrap_err(),
        EngineError::GameOver(Outcome::Loss)
    );
    assert_eq!(
        submit_contributions(&over, &contributions).unwrap_err(),
        EngineError::GameOver(Outcome::Loss)
    );
    assert_eq!(
        advance_month(&over, &contributions, &rules, &mut rng).unwrap_err(),
        EngineError::GameOver(Outcome::Loss)
    );

    // Starting over is the only way out
    let fresh = over.reset(2025);
    assert!(!fresh.is_over());
}
