//! Monthly personal-finance game engine
//!
//! This crate advances a player's simulated finances one month at a time:
//! - Stochastic monthly returns per asset category (SIP, stocks, gold, real estate, savings)
//! - Probability-weighted life events behind a monthly gate
//! - XP, levels, daily-login streaks, and a fixed achievement catalog
//! - Win/loss detection on net worth
//!
//! Engine operations are pure over an explicit `GameState` value and take an
//! injectable `RandomSource`, so every step is reproducible from a seed or a
//! scripted sequence of draws.
//!
//! ```ignore
//! use finquest_core::{GameRules, GameState, SeededRandom};
//! use finquest_core::model::{AssetCategory, CategoryAmounts, Career, UserProfile};
//! use finquest_core::month::advance_month;
//!
//! let rules = GameRules::default();
//! let state = GameState::new(UserProfile::with_preset("Asha", Career::Engineer), rules.start_year);
//! let contributions = CategoryAmounts::default().with(AssetCategory::Sip, 10_000.0);
//! let (state, report) = advance_month(&state, &contributions, &rules, &mut SeededRandom::new(7))?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Engine components
// ============================================================================

pub mod achievements;
pub mod batch;
pub mod ledger;
pub mod life_events;
pub mod month;
pub mod progression;
pub mod random;
pub mod returns;

// ============================================================================
// Boundaries and orchestration
// ============================================================================

pub mod collaborators;
pub mod session;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod error;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::GameRules;
pub use model::GameState;
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use session::GameSession;
