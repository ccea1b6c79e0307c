use serde::{Deserialize, Serialize};

use super::achievement::AchievementId;
use super::category::CategoryAmounts;
use super::life_event::LifeEvent;
use super::state::Outcome;

/// What happened during one month-end step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthReport {
    /// Month and year that were closed
    pub closed_month: u8,
    pub closed_year: i16,
    pub returns: CategoryAmounts,
    pub life_event: Option<LifeEvent>,
    pub surplus: f64,
    pub xp_gained: u32,
    pub previous_level: u32,
    pub level: u32,
    pub unlocked: Vec<AchievementId>,
    pub previous_net_worth: f64,
    pub net_worth: f64,
    pub outcome: Option<Outcome>,
}

impl MonthReport {
    #[must_use]
    pub fn total_return(&self) -> f64 {
        self.returns.total()
    }

    #[must_use]
    pub fn leveled_up(&self) -> bool {
        self.level > self.previous_level
    }
}

/// Result of a daily login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginReport {
    /// False when the player already logged in on this calendar day
    pub new_day: bool,
    pub streak: u32,
    pub xp_gained: u32,
    pub unlocked: Vec<AchievementId>,
}
