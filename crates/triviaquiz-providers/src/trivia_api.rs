//! The Trivia API provider implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use triviaquiz_core::error::FetchFailure;
use triviaquiz_core::model::{Question, QuestionSet};
use triviaquiz_core::traits::QuestionProvider;

pub const DEFAULT_ENDPOINT: &str = "https://the-trivia-api.com/api/questions";

/// Fetches question sets with a single unauthenticated GET.
pub struct TriviaApiProvider {
    endpoint: String,
    timeout_secs: Option<u64>,
    client: reqwest::Client,
}

impl TriviaApiProvider {
    /// Build a provider for `endpoint` (the public API when `None`).
    ///
    /// Requests never time out unless `timeout_secs` is set.
    pub fn new(endpoint: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout_secs,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiQuestion {
    question: ApiQuestionText,
    correct_answer: String,
    #[serde(default)]
    incorrect_answers: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
}

/// `/api/questions` sends the question as a string; `/v2/questions` wraps it
/// in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum ApiQuestionText {
    Plain(String),
    Wrapped { text: String },
}

impl From<ApiQuestion> for Question {
    fn from(api: ApiQuestion) -> Self {
        let text = match api.question {
            ApiQuestionText::Plain(text) | ApiQuestionText::Wrapped { text } => text,
        };
        Question {
            text,
            correct_answer: api.correct_answer,
            incorrect_answers: api.incorrect_answers,
            category: api.category,
            difficulty: api.difficulty,
        }
    }
}

#[async_trait]
impl QuestionProvider for TriviaApiProvider {
    fn name(&self) -> &str {
        "trivia-api"
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_questions(&self) -> Result<QuestionSet, FetchFailure> {
        let response = self.client.get(&self.endpoint).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchFailure::Timeout(self.timeout_secs.unwrap_or_default())
            } else {
                FetchFailure::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchFailure::Http {
                status,
                message: body,
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchFailure::Timeout(self.timeout_secs.unwrap_or_default())
            } else {
                FetchFailure::Network(e.to_string())
            }
        })?;
        let questions: Vec<ApiQuestion> =
            serde_json::from_str(&body).map_err(|e| FetchFailure::Parse(e.to_string()))?;

        tracing::debug!(count = questions.len(), "questions received");
        Ok(questions.into_iter().map(Question::from).collect::<Vec<_>>().into())
    }
}
