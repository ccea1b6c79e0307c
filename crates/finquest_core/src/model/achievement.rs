//! Achievement catalog
//!
//! The catalog is fixed; a game state carries one record per entry and only
//! ever flips `unlocked` from false to true.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementId {
    FirstInvestment,
    Millionaire,
    Diversified,
    #[serde(rename = "level-5")]
    Level5,
    WeekStreak,
    SteadyInvestor,
}

impl AchievementId {
    pub const ALL: [AchievementId; 6] = [
        AchievementId::FirstInvestment,
        AchievementId::Millionaire,
        AchievementId::Diversified,
        AchievementId::Level5,
        AchievementId::WeekStreak,
        AchievementId::SteadyInvestor,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            AchievementId::FirstInvestment => "first-investment",
            AchievementId::Millionaire => "millionaire",
            AchievementId::Diversified => "diversified",
            AchievementId::Level5 => "level-5",
            AchievementId::WeekStreak => "week-streak",
            AchievementId::SteadyInvestor => "steady-investor",
        }
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub unlocked: bool,
}

impl Achievement {
    fn locked(id: AchievementId, title: &str, description: &str, icon: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            unlocked: false,
        }
    }
}

/// Fresh, fully locked catalog in `AchievementId::ALL` order
#[must_use]
pub fn achievement_catalog() -> Vec<Achievement> {
    AchievementId::ALL
        .into_iter()
        .map(|id| match id {
            AchievementId::FirstInvestment => Achievement::locked(
                id,
                "First Steps",
                "Start your first SIP contribution",
                "🌱",
            ),
            AchievementId::Millionaire => Achievement::locked(
                id,
                "Millionaire",
                "Reach a net worth of 10 lakh",
                "💰",
            ),
            AchievementId::Diversified => Achievement::locked(
                id,
                "Diversified",
                "Invest in every asset category in the same month",
                "🧺",
            ),
            AchievementId::Level5 => {
                Achievement::locked(id, "Rising Star", "Reach level 5", "⭐")
            }
            AchievementId::WeekStreak => Achievement::locked(
                id,
                "Week Warrior",
                "Log in 7 days in a row",
                "🔥",
            ),
            AchievementId::SteadyInvestor => Achievement::locked(
                id,
                "Steady Investor",
                "Keep investing month after month",
                "📈",
            ),
        })
        .collect()
}
