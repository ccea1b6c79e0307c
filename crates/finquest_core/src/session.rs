//! A single player's game session
//!
//! `GameSession` is the orchestrating caller around the pure engine: it owns
//! the one live `GameState`, serializes transitions through `&mut self`, and
//! persists after each accepted transition. Save failures are logged and
//! ignored; the in-memory state stays authoritative.

use jiff::civil::Date;

use crate::collaborators::{GameStore, Mentor, consult};
use crate::config::GameRules;
use crate::error::{EngineError, StoreError};
use crate::model::{
    CategoryAmounts, ChatMessage, ChatRole, GamePhase, GameState, LoginReport, MonthReport,
    UserProfile,
};
use crate::month;
use crate::progression;
use crate::random::RandomSource;

pub struct GameSession<S, M, R> {
    user: String,
    state: GameState,
    rules: GameRules,
    store: S,
    mentor: M,
    rng: R,
}

impl<S: GameStore, M: Mentor, R: RandomSource> GameSession<S, M, R> {
    /// Start a new game for `user` and save it.
    pub fn onboard(
        user: impl Into<String>,
        profile: UserProfile,
        rules: GameRules,
        store: S,
        mentor: M,
        rng: R,
    ) -> Self {
        let state = GameState::new(profile, rules.start_year);
        let mut session = Self {
            user: user.into(),
            state,
            rules,
            store,
            mentor,
            rng,
        };
        session.persist();
        session
    }

    /// Resume the saved game for `user`.
    pub fn resume(
        user: impl Into<String>,
        rules: GameRules,
        store: S,
        mentor: M,
        rng: R,
    ) -> Result<Self, StoreError> {
        let user = user.into();
        let state = store.load(&user)?;
        Ok(Self {
            user,
            state,
            rules,
            store,
            mentor,
            rng,
        })
    }

    /// Resume `user`'s saved game, or onboard `profile` when there is none.
    ///
    /// Any load failure other than `NotFound` is returned rather than
    /// silently replacing the saved game.
    pub fn start(
        user: impl Into<String>,
        profile: impl FnOnce() -> UserProfile,
        rules: GameRules,
        store: S,
        mentor: M,
        rng: R,
    ) -> Result<Self, StoreError> {
        let user = user.into();
        match store.load(&user) {
            Ok(state) => Ok(Self {
                user,
                state,
                rules,
                store,
                mentor,
                rng,
            }),
            Err(StoreError::NotFound(_)) => {
                tracing::info!(user = %user, "no saved game, onboarding");
                Ok(Self::onboard(user, profile(), rules, store, mentor, rng))
            }
            Err(e) => Err(e),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Accept contributions without closing the month yet.
    pub fn submit(&mut self, contributions: &CategoryAmounts) -> Result<(), EngineError> {
        self.state = month::submit_contributions(&self.state, contributions)?;
        self.persist();
        Ok(())
    }

    /// Close the month, whether or not contributions were submitted.
    pub fn finish_month(&mut self) -> Result<MonthReport, EngineError> {
        let (next, report) = month::process_month_end(&self.state, &self.rules, &mut self.rng)?;
        self.state = next;
        self.persist();
        Ok(report)
    }

    /// Submit contributions and close the month.
    pub fn invest(&mut self, contributions: &CategoryAmounts) -> Result<MonthReport, EngineError> {
        self.submit(contributions)?;
        self.finish_month()
    }

    /// Close the month without investing anything.
    pub fn skip_month(&mut self) -> Result<MonthReport, EngineError> {
        if self.state.phase == GamePhase::Processing {
            return Err(EngineError::StepInProgress);
        }
        self.finish_month()
    }

    pub fn login(&mut self, today: Date) -> LoginReport {
        let (next, report) = progression::advance_login(&self.state, today, &self.rules);
        if report.new_day {
            self.state = next;
            self.persist();
        }
        report
    }

    /// Ask the mentor a question; the exchange is kept in the chat history.
    pub fn ask(&mut self, message: &str) -> String {
        let reply = consult(&self.mentor, &self.state, message);
        self.state.chat_history.push(ChatMessage {
            role: ChatRole::User,
            text: message.to_string(),
        });
        self.state.chat_history.push(ChatMessage {
            role: ChatRole::Mentor,
            text: reply.clone(),
        });
        self.persist();
        reply
    }

    /// Throw the current game away and start again with the same profile.
    pub fn reset(&mut self) {
        self.state = self.state.reset(self.rules.start_year);
        tracing::info!(user = %self.user, "game reset");
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.user, &self.state) {
            tracing::warn!(user = %self.user, error = %e, "failed to save game state");
        }
    }
}
