//! Month advancer
//!
//! Drives the `AwaitingContribution -> Processing -> AwaitingContribution`
//! loop. Every transition takes the current state by reference and returns a
//! new one; a rejected transition returns an error and the caller keeps the
//! state it already had.

use crate::achievements::{self, EvaluationContext};
use crate::config::GameRules;
use crate::error::{ContributionError, EngineError};
use crate::ledger;
use crate::life_events::roll_month_event;
use crate::model::{CategoryAmounts, GamePhase, GameState, MonthRecord, MonthReport, Outcome};
use crate::progression::award_xp;
use crate::random::RandomSource;
use crate::returns::sample_returns;

/// Check a contribution request against the available cash, returning its total.
pub fn validate_contributions(
    cash: f64,
    contributions: &CategoryAmounts,
) -> Result<f64, ContributionError> {
    for (category, amount) in contributions.iter() {
        if !amount.is_finite() {
            return Err(ContributionError::NonFiniteAmount { category });
        }
        if amount < 0.0 {
            return Err(ContributionError::NegativeAmount { category, amount });
        }
    }

    let total = contributions.total();
    if total == 0.0 {
        return Err(ContributionError::NothingToInvest);
    }
    if total > cash {
        return Err(ContributionError::InsufficientCash {
            requested: total,
            available: cash,
        });
    }
    Ok(total)
}

/// Accept a month's contributions: debit cash, credit the portfolio, and
/// move to `Processing`.
pub fn submit_contributions(
    state: &GameState,
    contributions: &CategoryAmounts,
) -> Result<GameState, EngineError> {
    match state.phase {
        GamePhase::GameOver(outcome) => return Err(EngineError::GameOver(outcome)),
        GamePhase::Processing => return Err(EngineError::StepInProgress),
        GamePhase::AwaitingContribution => {}
    }

    let total = validate_contributions(state.cash, contributions)?;

    let mut next = state.clone();
    next.cash -= total;
    next.portfolio = ledger::apply_contributions(&state.portfolio, contributions)?;
    next.last_contributions = *contributions;
    next.phase = GamePhase::Processing;

    tracing::debug!(total, cash = next.cash, "contributions accepted");
    Ok(next)
}

/// Close the current month.
///
/// Accepted from `Processing` (after a submission) and from
/// `AwaitingContribution`, which skips the month without investing.
pub fn process_month_end<R: RandomSource + ?Sized>(
    state: &GameState,
    rules: &GameRules,
    rng: &mut R,
) -> Result<(GameState, MonthReport), EngineError> {
    if let GamePhase::GameOver(outcome) = state.phase {
        return Err(EngineError::GameOver(outcome));
    }

    let context = EvaluationContext::from_state(state);
    let mut next = state.clone();

    let returns = sample_returns(&state.portfolio, &rules.returns, rng);
    next.portfolio = ledger::apply_returns(&state.portfolio, &returns)?;

    let life_event = roll_month_event(&rules.life_events, rng);
    let impact = life_event.as_ref().map_or(0.0, |e| e.impact);

    let (closed_month, closed_year) = (state.month, state.year);
    (next.month, next.year) = next_month(state.month, state.year);

    let surplus = state.profile.monthly_surplus();
    next.cash = state.cash + surplus + impact;
    next.net_worth = next.cash + ledger::total_value(&next.portfolio);

    let xp_before = state.xp;
    award_xp(&mut next, rules.xp.month_end);
    let unlocked = achievements::unlock_pending(&mut next, &context, rules);

    let outcome = terminal_outcome(next.net_worth, rules);
    next.phase = match outcome {
        Some(outcome) => GamePhase::GameOver(outcome),
        None => GamePhase::AwaitingContribution,
    };
    next.last_contributions = CategoryAmounts::default();

    next.history.push(MonthRecord {
        year: closed_year,
        month: closed_month,
        cash: next.cash,
        portfolio_value: ledger::total_value(&next.portfolio),
        net_worth: next.net_worth,
        life_event: life_event.as_ref().map(|e| e.name.clone()),
    });

    if let Some(event) = &life_event {
        tracing::info!(event = %event.name, impact = event.impact, "life event");
    }
    if let Some(outcome) = outcome {
        tracing::info!(?outcome, net_worth = next.net_worth, "game over");
    }
    tracing::debug!(
        month = closed_month,
        year = closed_year,
        cash = next.cash,
        net_worth = next.net_worth,
        "month closed"
    );

    let report = MonthReport {
        closed_month,
        closed_year,
        returns,
        life_event,
        surplus,
        xp_gained: next.xp - xp_before,
        previous_level: context.previous_level,
        level: next.level,
        unlocked,
        previous_net_worth: context.previous_net_worth,
        net_worth: next.net_worth,
        outcome,
    };
    Ok((next, report))
}

/// Submit contributions and close the month in one call.
pub fn advance_month<R: RandomSource + ?Sized>(
    state: &GameState,
    contributions: &CategoryAmounts,
    rules: &GameRules,
    rng: &mut R,
) -> Result<(GameState, MonthReport), EngineError> {
    let submitted = submit_contributions(state, contributions)?;
    process_month_end(&submitted, rules, rng)
}

/// Win at or above the win threshold; lose strictly below the loss threshold.
#[must_use]
pub fn terminal_outcome(net_worth: f64, rules: &GameRules) -> Option<Outcome> {
    if net_worth >= rules.win_net_worth {
        Some(Outcome::Win)
    } else if net_worth < rules.loss_net_worth {
        Some(Outcome::Loss)
    } else {
        None
    }
}

/// Month 12 rolls over to month 1 of the next year
#[must_use]
pub fn next_month(month: u8, year: i16) -> (u8, i16) {
    if month >= 12 { (1, year + 1) } else { (month + 1, year) }
}
