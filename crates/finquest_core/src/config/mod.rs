//! Game rules
//!
//! `GameRules` gathers every tunable constant of the engine: return bands,
//! the life-event table, XP awards, and the terminal thresholds.
//! `GameRules::default()` is the standard game; any subset of fields can be
//! overridden from a config file since every field has a serde default.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::model::{AssetCategory, LifeEvent, default_life_events};

fn default_start_year() -> i16 {
    2025
}

fn default_gate_probability() -> f64 {
    0.3
}

fn default_win_net_worth() -> f64 {
    5_000_000.0
}

fn default_loss_net_worth() -> f64 {
    -100_000.0
}

fn default_millionaire_net_worth() -> f64 {
    1_000_000.0
}

fn default_streak_length() -> u32 {
    7
}

/// Monthly return rate drawn uniformly from `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnBand {
    pub low: f64,
    pub high: f64,
}

impl ReturnBand {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// A band with no width yields its rate without consuming a draw
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.low == self.high
    }
}

/// Return bands for every category that can earn a return.
/// Savings has no entry: it never grows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnTable {
    pub sip: ReturnBand,
    pub stocks: ReturnBand,
    pub gold: ReturnBand,
    pub real_estate: ReturnBand,
}

impl Default for ReturnTable {
    fn default() -> Self {
        Self {
            sip: ReturnBand::new(0.006, 0.012),
            stocks: ReturnBand::new(-0.05, 0.08),
            gold: ReturnBand::new(-0.01, 0.03),
            real_estate: ReturnBand::new(0.0, 0.012),
        }
    }
}

impl ReturnTable {
    #[must_use]
    pub fn band(&self, category: AssetCategory) -> Option<ReturnBand> {
        match category {
            AssetCategory::Sip => Some(self.sip),
            AssetCategory::Stocks => Some(self.stocks),
            AssetCategory::Gold => Some(self.gold),
            AssetCategory::RealEstate => Some(self.real_estate),
            AssetCategory::Savings => None,
        }
    }
}

/// Two-stage life-event selection: a monthly gate, then a weighted walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEventTable {
    /// Chance that any event is rolled in a given month
    #[serde(default = "default_gate_probability")]
    pub gate_probability: f64,
    #[serde(default = "default_life_events")]
    pub events: Vec<LifeEvent>,
}

impl Default for LifeEventTable {
    fn default() -> Self {
        Self {
            gate_probability: default_gate_probability(),
            events: default_life_events(),
        }
    }
}

impl LifeEventTable {
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.events.iter().map(|e| e.probability).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpRules {
    pub month_end: u32,
    pub daily_login: u32,
    pub achievement: u32,
}

impl Default for XpRules {
    fn default() -> Self {
        Self {
            month_end: 20,
            daily_login: 50,
            achievement: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRules {
    #[serde(default = "default_start_year")]
    pub start_year: i16,
    #[serde(default)]
    pub returns: ReturnTable,
    #[serde(default)]
    pub life_events: LifeEventTable,
    #[serde(default)]
    pub xp: XpRules,
    /// Net worth at or above this wins
    #[serde(default = "default_win_net_worth")]
    pub win_net_worth: f64,
    /// Net worth strictly below this loses
    #[serde(default = "default_loss_net_worth")]
    pub loss_net_worth: f64,
    #[serde(default = "default_millionaire_net_worth")]
    pub millionaire_net_worth: f64,
    /// Consecutive logins needed for the streak achievement
    #[serde(default = "default_streak_length")]
    pub streak_length: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            returns: ReturnTable::default(),
            life_events: LifeEventTable::default(),
            xp: XpRules::default(),
            win_net_worth: default_win_net_worth(),
            loss_net_worth: default_loss_net_worth(),
            millionaire_net_worth: default_millionaire_net_worth(),
            streak_length: default_streak_length(),
        }
    }
}

impl GameRules {
    /// Same rules with no life events at all
    #[must_use]
    pub fn without_life_events(mut self) -> Self {
        self.life_events.gate_probability = 0.0;
        self
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        for category in AssetCategory::ALL {
            if let Some(band) = self.returns.band(category)
                && (!band.low.is_finite() || !band.high.is_finite() || band.low > band.high)
            {
                return Err(RulesError::InvalidReturnBand {
                    category,
                    low: band.low,
                    high: band.high,
                });
            }
        }

        check_probability("life event gate", self.life_events.gate_probability)?;
        for event in &self.life_events.events {
            check_probability(&event.name, event.probability)?;
            if !event.impact.is_finite() {
                return Err(RulesError::NonFinite("life event impact"));
            }
        }
        let total = self.life_events.total_weight();
        if total > 1.0 + 1e-9 {
            return Err(RulesError::EventWeightsExceedOne(total));
        }

        for (name, value) in [
            ("win_net_worth", self.win_net_worth),
            ("loss_net_worth", self.loss_net_worth),
            ("millionaire_net_worth", self.millionaire_net_worth),
        ] {
            if !value.is_finite() {
                return Err(RulesError::NonFinite(name));
            }
        }
        Ok(())
    }
}

fn check_probability(what: &str, value: f64) -> Result<(), RulesError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RulesError::InvalidProbability {
            what: what.to_string(),
            value,
        })
    }
}
