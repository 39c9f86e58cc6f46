//! Core trait definitions for question providers.
//!
//! Implemented by the `triviaquiz-providers` crate.

use async_trait::async_trait;

use crate::error::FetchFailure;
use crate::model::QuestionSet;

// ---------------------------------------------------------------------------
// Question provider trait
// ---------------------------------------------------------------------------

/// A source of trivia questions.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Human-readable provider name (e.g. "trivia-api").
    fn name(&self) -> &str;

    /// Fetch one question set. Called once per game.
    async fn fetch_questions(&self) -> Result<QuestionSet, FetchFailure>;
}
