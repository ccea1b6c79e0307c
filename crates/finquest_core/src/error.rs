use crate::model::{AssetCategory, Outcome};

/// Rejected contribution request. State is never touched when one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContributionError {
    #[error("contribution to {category} is negative ({amount})")]
    NegativeAmount { category: AssetCategory, amount: f64 },

    #[error("contribution to {category} is not a finite number")]
    NonFiniteAmount { category: AssetCategory },

    #[error("nothing to invest: every contribution is zero")]
    NothingToInvest,

    #[error("contributions total {requested} but only {available} cash is available")]
    InsufficientCash { requested: f64, available: f64 },
}

/// Portfolio invariant violation. Indicates a ledger bug, never user input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("{category} balance went negative ({balance})")]
    NegativeBalance { category: AssetCategory, balance: f64 },

    #[error("{category} balance is not a finite number")]
    NonFiniteBalance { category: AssetCategory },
}

/// Errors from the month state machine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("the game is over ({0:?}); reset to play again")]
    GameOver(Outcome),

    #[error("a month is already being processed")]
    StepInProgress,

    #[error(transparent)]
    Contribution(#[from] ContributionError),

    #[error("portfolio invariant violated: {0}")]
    Ledger(#[from] LedgerError),
}

/// Invalid rule tables
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RulesError {
    #[error("return band for {category} is invalid (low={low}, high={high})")]
    InvalidReturnBand {
        category: AssetCategory,
        low: f64,
        high: f64,
    },

    #[error("probability for {what} must be within [0, 1], got {value}")]
    InvalidProbability { what: String, value: f64 },

    #[error("life event weights sum to {0}, which exceeds 1")]
    EventWeightsExceedOne(f64),

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

/// Persistence collaborator failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no saved game for {0}")]
    NotFound(String),

    #[error("storage I/O error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// AI mentor collaborator failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MentorError {
    #[error("mentor service unavailable")]
    Unavailable,

    #[error("mentor rejected the request: {0}")]
    Rejected(String),
}
