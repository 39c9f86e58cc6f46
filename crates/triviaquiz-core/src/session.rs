//! Session controller.
//!
//! Owns the game state, fetches the question set from a provider, hands it
//! to a [`QuestionRunner`], and scores the answers once the runner signals
//! completion. Every state change is announced to subscribed observers.

use std::sync::Arc;

use crate::error::{FetchFailure, QuizError};
use crate::model::{AnswerLog, AnswerReview, GameState, Question, QuestionSet, Score};
use crate::runner::{QuestionRunner, RunnerStep};
use crate::scoring;
use crate::traits::QuestionProvider;

/// Something that moves a session from one state to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Begin fetching a new question set.
    Start,
    /// The question set arrived.
    Loaded,
    /// Fetching failed.
    LoadFailed,
    /// Every question was answered.
    Finish,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Loaded => "finish loading",
            Action::LoadFailed => "fail loading",
            Action::Finish => "finish",
        }
    }
}

/// Compute the state that `action` leads to from `state`.
pub fn transition(state: GameState, action: Action) -> Result<GameState, QuizError> {
    match (state, action) {
        (GameState::Idle | GameState::Finished, Action::Start) => Ok(GameState::Loading),
        (GameState::Loading, Action::Loaded) => Ok(GameState::InProgress),
        (GameState::Loading, Action::LoadFailed) => Ok(GameState::Idle),
        (GameState::InProgress, Action::Finish) => Ok(GameState::Finished),
        (state, action) => Err(QuizError::InvalidTransition {
            state,
            action: action.verb(),
        }),
    }
}

/// Receives notifications about session changes.
pub trait SessionObserver: Send + Sync {
    fn on_state_changed(&self, from: GameState, to: GameState);
    fn on_fetch_error(&self, error: &FetchFailure);
}

/// Result of submitting an answer through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The question at `index` is now current.
    Next { index: usize },
    /// The game is over.
    Finished(Score),
}

/// Everything the controller knows about the current game. Only changed
/// through [`transition`] and the controller's operations.
#[derive(Debug, Default)]
struct SessionState {
    state: GameState,
    questions: Arc<QuestionSet>,
    answers: AnswerLog,
    score: Option<Score>,
    review: Vec<AnswerReview>,
    last_error: Option<FetchFailure>,
}

impl SessionState {
    fn reset_for_new_game(&mut self) {
        self.questions = Arc::default();
        self.answers.clear();
        self.score = None;
        self.review.clear();
        self.last_error = None;
    }
}

/// Drives one player through repeated games.
pub struct SessionController {
    provider: Arc<dyn QuestionProvider>,
    session: SessionState,
    runner: Option<QuestionRunner>,
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl SessionController {
    pub fn new(provider: Arc<dyn QuestionProvider>) -> Self {
        Self {
            provider,
            session: SessionState::default(),
            runner: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer for state changes and fetch errors.
    pub fn subscribe(&mut self, observer: Arc<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn score(&self) -> Option<Score> {
        self.session.score
    }

    pub fn review(&self) -> &[AnswerReview] {
        &self.session.review
    }

    pub fn last_error(&self) -> Option<&FetchFailure> {
        self.session.last_error.as_ref()
    }

    pub fn answers(&self) -> &AnswerLog {
        &self.session.answers
    }

    pub fn question_count(&self) -> usize {
        self.session.questions.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.runner.as_ref().map(QuestionRunner::current_index)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.runner.as_ref().and_then(QuestionRunner::current_question)
    }

    /// Shuffled options for the current question.
    pub fn present_options(&self) -> Option<Vec<String>> {
        self.present_options_with(&mut rand::thread_rng())
    }

    /// Like [`present_options`](Self::present_options) with a caller-supplied rng.
    pub fn present_options_with<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<String>> {
        self.runner.as_ref().and_then(|r| r.present_options(rng))
    }

    /// Fetch a question set and begin a game.
    ///
    /// On failure the error is logged and recorded, the session returns to
    /// [`GameState::Idle`], and the error is returned. Nothing is retried.
    pub async fn start(&mut self) -> Result<(), QuizError> {
        self.apply(Action::Start)?;
        self.session.reset_for_new_game();
        self.runner = None;

        tracing::info!(provider = self.provider.name(), "fetching questions");
        let fetched = match self.provider.fetch_questions().await {
            Ok(questions) if questions.is_empty() => Err(FetchFailure::Empty),
            other => other,
        };

        match fetched {
            Ok(questions) => {
                let questions = Arc::new(questions);
                tracing::info!(count = questions.len(), "quiz started");
                self.runner = Some(QuestionRunner::new(Arc::clone(&questions)));
                self.session.questions = questions;
                self.apply(Action::Loaded)
            }
            Err(e) => {
                tracing::error!("failed to fetch questions: {e}");
                for observer in &self.observers {
                    observer.on_fetch_error(&e);
                }
                self.session.last_error = Some(e.clone());
                self.apply(Action::LoadFailed)?;
                Err(e.into())
            }
        }
    }

    /// Answer the current question. Scores the game after the last one.
    pub fn submit_answer(&mut self, selected: &str) -> Result<Progress, QuizError> {
        if self.session.state != GameState::InProgress {
            return Err(QuizError::InvalidTransition {
                state: self.session.state,
                action: "submit an answer",
            });
        }
        let runner = self.runner.as_mut().ok_or(QuizError::NoActiveQuestion)?;

        match runner.submit_answer(&mut self.session.answers, selected)? {
            RunnerStep::Advanced { index } => Ok(Progress::Next { index }),
            RunnerStep::Completed => self.finish().map(Progress::Finished),
        }
    }

    /// Score the answer log and end the game.
    ///
    /// Requires one answer per question. The answer log is cleared and the
    /// question set dropped once the score is computed.
    pub fn finish(&mut self) -> Result<Score, QuizError> {
        let next = transition(self.session.state, Action::Finish)?;

        let answered = self.session.answers.len();
        let total = self.session.questions.len();
        if answered != total {
            return Err(QuizError::IncompleteAnswers { answered, total });
        }

        let score = scoring::score(&self.session.questions, &self.session.answers);
        self.session.review = scoring::review(&self.session.questions, &self.session.answers);
        self.session.score = Some(score);
        self.session.answers.clear();
        self.session.questions = Arc::default();
        self.runner = None;

        self.enter(next);
        tracing::info!(correct = score.correct, total = score.total, "quiz finished");
        Ok(score)
    }

    fn apply(&mut self, action: Action) -> Result<(), QuizError> {
        let next = transition(self.session.state, action)?;
        self.enter(next);
        Ok(())
    }

    fn enter(&mut self, next: GameState) {
        let previous = std::mem::replace(&mut self.session.state, next);
        tracing::debug!(from = %previous, to = %next, "state changed");
        for observer in &self.observers {
            observer.on_state_changed(previous, next);
        }
    }
}
