//! triviaquiz-core: Quiz state machine, shuffling, and scoring.
//!
//! This crate defines the data model, the provider trait, and the session
//! logic that the rest of triviaquiz builds on. It knows nothing about how
//! questions are fetched or how they are rendered.

pub mod error;
pub mod model;
pub mod runner;
pub mod scoring;
pub mod session;
pub mod shuffle;
pub mod traits;

pub use error::{FetchFailure, QuizError};
pub use model::{AnswerLog, AnswerReview, GameState, Question, QuestionSet, Score};
pub use session::{Progress, SessionController, SessionObserver};
pub use traits::QuestionProvider;
