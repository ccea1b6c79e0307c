//! Achievement evaluator
//!
//! Predicates are pure functions of the post-transition state plus the
//! pre-transition net worth and level (`EvaluationContext`). Unlocking is
//! one-way: an achievement already unlocked is skipped, so its XP bonus can
//! only ever be paid once.
//!
//! A login only re-checks the login-driven achievements (streak and level).
//! Contribution and net-worth achievements wait for the month to close.

use crate::config::GameRules;
use crate::model::{AchievementId, GameState};
use crate::progression::award_xp;

/// The transition that prompted an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    MonthEnd,
    Login,
}

/// Values captured before a transition, needed by edge-triggered predicates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationContext {
    pub trigger: Trigger,
    pub previous_net_worth: f64,
    pub previous_level: u32,
}

impl EvaluationContext {
    /// Context for closing the month that `state` is in
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self::new(Trigger::MonthEnd, state)
    }

    /// Context for a daily login on `state`
    #[must_use]
    pub fn for_login(state: &GameState) -> Self {
        Self::new(Trigger::Login, state)
    }

    fn new(trigger: Trigger, state: &GameState) -> Self {
        Self {
            trigger,
            previous_net_worth: state.net_worth,
            previous_level: state.level,
        }
    }
}

/// Whether `id` can be earned by a transition of kind `trigger`
#[must_use]
pub fn checked_on(id: AchievementId, trigger: Trigger) -> bool {
    match trigger {
        Trigger::MonthEnd => true,
        Trigger::Login => matches!(id, AchievementId::WeekStreak | AchievementId::Level5),
    }
}

/// True on the transition from below `threshold` to at-or-above it
#[must_use]
pub fn crossed_upward(previous: f64, current: f64, threshold: f64) -> bool {
    previous < threshold && current >= threshold
}

fn qualifies(
    id: AchievementId,
    state: &GameState,
    context: &EvaluationContext,
    rules: &GameRules,
) -> bool {
    match id {
        AchievementId::FirstInvestment => state.last_contributions.sip > 0.0,
        AchievementId::Millionaire => crossed_upward(
            context.previous_net_worth,
            state.net_worth,
            rules.millionaire_net_worth,
        ),
        AchievementId::Diversified => state.last_contributions.is_all_positive(),
        AchievementId::Level5 => context.previous_level < 5 && state.level >= 5,
        AchievementId::WeekStreak => state.login_streak == rules.streak_length,
        // Catalogued, but no rule awards it yet.
        AchievementId::SteadyInvestor => false,
    }
}

/// Locked achievements whose predicate holds for `state`, in catalog order
#[must_use]
pub fn evaluate(state: &GameState, context: &EvaluationContext, rules: &GameRules) -> Vec<AchievementId> {
    state
        .achievements
        .iter()
        .filter(|a| {
            !a.unlocked
                && checked_on(a.id, context.trigger)
                && qualifies(a.id, state, context, rules)
        })
        .map(|a| a.id)
        .collect()
}

/// Unlock every qualifying achievement and pay its XP bonus.
///
/// Bonus XP can itself raise the level, so evaluation repeats until nothing
/// new unlocks. Returns the ids unlocked by this call.
pub fn unlock_pending(
    state: &mut GameState,
    context: &EvaluationContext,
    rules: &GameRules,
) -> Vec<AchievementId> {
    let mut unlocked = Vec::new();
    loop {
        let pending = evaluate(state, context, rules);
        if pending.is_empty() {
            return unlocked;
        }
        for id in pending {
            if let Some(achievement) = state.achievements.iter_mut().find(|a| a.id == id) {
                achievement.unlocked = true;
                award_xp(state, rules.xp.achievement);
                tracing::info!(achievement = %id, xp = state.xp, "achievement unlocked");
                unlocked.push(id);
            }
        }
    }
}
