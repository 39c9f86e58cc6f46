//! Mock provider for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use triviaquiz_core::error::FetchFailure;
use triviaquiz_core::model::{Question, QuestionSet};
use triviaquiz_core::traits::QuestionProvider;

/// A question provider that never touches the network.
///
/// Replays queued responses in order, then falls back to a default.
pub struct MockProvider {
    /// Responses handed out before the default, front first.
    queued: Mutex<Vec<Result<QuestionSet, FetchFailure>>>,
    /// Returned once the queue is empty.
    default_response: Result<QuestionSet, FetchFailure>,
    /// Number of fetches made.
    call_count: AtomicU32,
}

impl MockProvider {
    /// A mock that always returns `questions`.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            queued: Mutex::new(Vec::new()),
            default_response: Ok(questions.into()),
            call_count: AtomicU32::new(0),
        }
    }

    /// A mock whose every fetch fails with `error`.
    pub fn failing(error: FetchFailure) -> Self {
        Self {
            queued: Mutex::new(Vec::new()),
            default_response: Err(error),
            call_count: AtomicU32::new(0),
        }
    }

    /// Queue a one-shot response ahead of the default.
    pub fn then(self, response: Result<QuestionSet, FetchFailure>) -> Self {
        self.queued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(response);
        self
    }

    /// Number of fetches made against this provider.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl QuestionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_questions(&self) -> Result<QuestionSet, FetchFailure> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        let mut queued = self
            .queued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if queued.is_empty() {
            self.default_response.clone()
        } else {
            queued.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_questions() {
        let provider =
            MockProvider::with_questions(vec![Question::new("2+2?", "4", vec!["3".into()])]);

        let questions = provider.fetch_questions().await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "4");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn queued_failure_then_default() {
        let provider = MockProvider::with_questions(vec![Question::new("Q", "A", vec![])])
            .then(Err(FetchFailure::Network("down".into())));

        assert!(provider.fetch_questions().await.is_err());
        assert!(provider.fetch_questions().await.is_ok());
        assert!(provider.fetch_questions().await.is_ok());
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn always_failing() {
        let provider = MockProvider::failing(FetchFailure::Parse("bad json".into()));
        let err = provider.fetch_questions().await.unwrap_err();
        assert_eq!(err, FetchFailure::Parse("bad json".into()));
    }
}
