//! triviaquiz-providers: Question provider integrations.
//!
//! Implements the `QuestionProvider` trait for the public Trivia API and
//! provides a mock for tests, plus configuration loading.

pub mod config;
pub mod mock;
pub mod trivia_api;

pub use config::{create_provider, load_config_from, QuizConfig};
