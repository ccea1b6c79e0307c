//! XP, levels, and the daily-login streak

use jiff::civil::Date;

use crate::achievements::{self, EvaluationContext};
use crate::config::GameRules;
use crate::model::{GameState, LoginReport};

pub const XP_PER_LEVEL: u32 = 200;

/// `floor(xp / 200) + 1`
#[must_use]
pub fn level_for(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

/// Add XP and keep the derived level in sync
pub fn award_xp(state: &mut GameState, amount: u32) {
    state.xp = state.xp.saturating_add(amount);
    state.level = level_for(state.xp);
}

/// Record a login on `today`.
///
/// Same day (or a date earlier than the stored one) is a no-op. The day after
/// the stored date extends the streak; any other gap restarts it at 1. Every
/// new day awards the login XP and re-checks the login-driven achievements,
/// unless the game is over, in which case only the date and streak move.
#[must_use]
pub fn advance_login(state: &GameState, today: Date, rules: &GameRules) -> (GameState, LoginReport) {
    let streak = match state.last_login {
        Some(last) if today <= last => {
            return (
                state.clone(),
                LoginReport {
                    new_day: false,
                    streak: state.login_streak,
                    xp_gained: 0,
                    unlocked: Vec::new(),
                },
            );
        }
        Some(last) if last.tomorrow().is_ok_and(|next| next == today) => {
            state.login_streak.saturating_add(1)
        }
        _ => 1,
    };

    let context = EvaluationContext::for_login(state);
    let xp_before = state.xp;

    let mut next = state.clone();
    next.last_login = Some(today);
    next.login_streak = streak;
    let unlocked = if state.is_over() {
        Vec::new()
    } else {
        award_xp(&mut next, rules.xp.daily_login);
        achievements::unlock_pending(&mut next, &context, rules)
    };

    tracing::debug!(%today, streak, xp = next.xp, "daily login recorded");

    let report = LoginReport {
        new_day: true,
        streak,
        xp_gained: next.xp - xp_before,
        unlocked,
    };
    (next, report)
}
