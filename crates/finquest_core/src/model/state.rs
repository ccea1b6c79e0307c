//! The game-state aggregate
//!
//! `GameState` is a plain value: engine operations take it by reference and
//! return a new one, so a rejected step can never leave a half-applied state.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::achievement::{Achievement, AchievementId, achievement_catalog};
use super::category::CategoryAmounts;
use super::profile::UserProfile;

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
}

/// Where the month state machine currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", content = "outcome")]
pub enum GamePhase {
    #[default]
    AwaitingContribution,
    /// Contributions accepted, month-end not yet applied
    Processing,
    GameOver(Outcome),
}

impl GamePhase {
    #[must_use]
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GamePhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Mentor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Snapshot appended after every month-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    pub year: i16,
    pub month: u8,
    pub cash: f64,
    pub portfolio_value: f64,
    pub net_worth: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_event: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Calendar month, 1..=12
    pub month: u8,
    pub year: i16,
    pub cash: f64,
    /// Snapshot of cash + portfolio value as of the last transition
    pub net_worth: f64,
    pub profile: UserProfile,
    pub portfolio: CategoryAmounts,
    pub xp: u32,
    pub level: u32,
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub last_login: Option<Date>,
    #[serde(default)]
    pub login_streak: u32,
    /// Amounts contributed in the month currently being processed
    #[serde(default)]
    pub last_contributions: CategoryAmounts,
    #[serde(default)]
    pub phase: GamePhase,
    #[serde(default)]
    pub history: Vec<MonthRecord>,
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
}

impl GameState {
    /// Onboard a new player: one month of surplus in cash, nothing invested.
    pub fn new(profile: UserProfile, start_year: i16) -> Self {
        let cash = profile.monthly_surplus();
        Self {
            month: 1,
            year: start_year,
            cash,
            net_worth: cash,
            profile,
            portfolio: CategoryAmounts::default(),
            xp: 0,
            level: 1,
            achievements: achievement_catalog(),
            last_login: None,
            login_streak: 0,
            last_contributions: CategoryAmounts::default(),
            phase: GamePhase::AwaitingContribution,
            history: Vec::new(),
            chat_history: Vec::new(),
        }
    }

    /// Start over with the same profile
    #[must_use]
    pub fn reset(&self, start_year: i16) -> Self {
        Self::new(self.profile.clone(), start_year)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    #[must_use]
    pub fn achievement(&self, id: AchievementId) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.achievement(id).is_some_and(|a| a.unlocked)
    }

    pub fn unlocked_achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|a| a.unlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Career, UserProfile};

    #[test]
    fn test_onboarding_state() {
        let profile = UserProfile::new("Asha", Career::Engineer, 80_000.0, 35_000.0);
        let state = GameState::new(profile, 2025);

        assert_eq!(state.cash, 45_000.0);
        assert_eq!(state.net_worth, 45_000.0);
        assert!(state.portfolio.is_zero());
        assert_eq!((state.month, state.year), (1, 2025));
        assert_eq!((state.xp, state.level), (0, 1));
        assert_eq!(state.achievements.len(), 6);
        assert_eq!(state.phase, GamePhase::AwaitingContribution);
        assert!(state.last_login.is_none());
    }

    #[test]
    fn test_reset_keeps_profile_only() {
        let profile = UserProfile::with_preset("Ravi", Career::Teacher);
        let mut state = GameState::new(profile.clone(), 2025);
        state.xp = 900;
        state.cash = -5.0;
        state.phase = GamePhase::GameOver(Outcome::Loss);

        let fresh = state.reset(2030);
        assert_eq!(fresh, GameState::new(profile, 2030));
    }

    #[test]
    fn test_json_round_trip() {
        let mut state = GameState::new(UserProfile::with_preset("Mei", Career::Designer), 2025);
        state.last_login = Some(jiff::civil::date(2025, 3, 14));
        state.phase = GamePhase::GameOver(Outcome::Win);
        state.achievements[1].unlocked = true;

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
