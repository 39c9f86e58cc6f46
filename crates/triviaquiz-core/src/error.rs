//! Error types for fetching and playing a quiz.
//!
//! `FetchFailure` lives in the core crate so providers and the session
//! controller share one classification of what can go wrong on the wire.

use thiserror::Error;

use crate::model::GameState;

/// Errors that can occur while fetching a question set from a provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// A network error occurred before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The provider answered with an error status.
    #[error("provider error (HTTP {status}): {message}")]
    Http { status: u16, message: String },

    /// The response body was not a valid question list.
    #[error("failed to parse questions: {0}")]
    Parse(String),

    /// The provider returned an empty question list.
    #[error("provider returned no questions")]
    Empty,
}

/// Errors raised by the session controller and question runner.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Fetching the question set failed.
    #[error(transparent)]
    Fetch(#[from] FetchFailure),

    /// The requested action is not allowed in the current state.
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        state: GameState,
        action: &'static str,
    },

    /// An answer was submitted without selecting an option.
    #[error("no option selected")]
    EmptySelection,

    /// There is no question to answer.
    #[error("no active question")]
    NoActiveQuestion,

    /// Scoring was requested before every question was answered.
    #[error("only {answered} of {total} questions answered")]
    IncompleteAnswers { answered: usize, total: usize },
}
