//! Integration tests for the finquest engine
//!
//! Tests are organized by topic:
//! - `contributions` - Submission validation and rejection without side effects
//! - `month_end` - Returns, life events, calendar, XP, and history per month
//! - `terminal` - Win/loss boundaries and the absorbing game-over phase
//! - `achievement_flow` - Achievements unlocked through real month transitions
//! - `scenario` - Multi-month playthroughs and login streaks
//! - `session` - Orchestration, persistence, and collaborator fallbacks

mod month_end;
mod terminal;

use crate::config::GameRules;
use crate::model::{Career, GameState, UserProfile};

pub(crate) fn engineer() -> UserProfile {
    UserProfile::new("Asha", Career::Engineer, 80_000.0, 35_000.0)
}

/// Profile whose salary exactly covers expenses
pub(crate) fn break_even() -> UserProfile {
    UserProfile::new("Even", Career::Teacher, 30_000.0, 30_000.0)
}

/// Default rules with the life-event gate closed
pub(crate) fn quiet_rules() -> GameRules {
    GameRules::default().without_life_events()
}

pub(crate) fn new_game(profile: UserProfile) -> GameState {
    GameState::new(profile, 2025)
}
