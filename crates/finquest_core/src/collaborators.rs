//! Boundary contracts for persistence and the AI mentor
//!
//! Neither collaborator can affect simulation correctness: a failed save is
//! logged and skipped, a failed mentor call is replaced by a canned reply.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{MentorError, StoreError};
use crate::model::{Career, CategoryAmounts, GameState};

pub const MENTOR_FALLBACK: &str = "Your mentor is unavailable right now. Keep investing steadily, \
     hold an emergency fund in savings, and check back next month.";

/// Persists whole game states keyed by user
pub trait GameStore {
    fn save(&mut self, user: &str, state: &GameState) -> Result<(), StoreError>;

    /// `StoreError::NotFound` when the user has no saved game
    fn load(&self, user: &str) -> Result<GameState, StoreError>;
}

/// In-process store, mainly for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    states: HashMap<String, GameState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl GameStore for MemoryStore {
    fn save(&mut self, user: &str, state: &GameState) -> Result<(), StoreError> {
        self.states.insert(user.to_string(), state.clone());
        Ok(())
    }

    fn load(&self, user: &str) -> Result<GameState, StoreError> {
        self.states
            .get(user)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(user.to_string()))
    }
}

/// Read-only summary handed to the mentor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorContext {
    pub career: Career,
    pub level: u32,
    pub cash: f64,
    pub net_worth: f64,
    pub portfolio: CategoryAmounts,
}

impl MentorContext {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            career: state.profile.career,
            level: state.level,
            cash: state.cash,
            net_worth: state.net_worth,
            portfolio: state.portfolio,
        }
    }
}

pub trait Mentor {
    fn ask(&self, message: &str, context: &MentorContext) -> Result<String, MentorError>;
}

/// Used when no mentor service is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMentor;

impl Mentor for NoMentor {
    fn ask(&self, _message: &str, _context: &MentorContext) -> Result<String, MentorError> {
        Err(MentorError::Unavailable)
    }
}

/// Ask the mentor about `state`, falling back to a canned reply on failure.
pub fn consult<M: Mentor + ?Sized>(mentor: &M, state: &GameState, message: &str) -> String {
    let context = MentorContext::from_state(state);
    match mentor.ask(message, &context) {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, "mentor request failed, using fallback reply");
            MENTOR_FALLBACK.to_string()
        }
    }
}
