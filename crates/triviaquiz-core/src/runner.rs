//! Walks a player through a question set one question at a time.

use std::sync::Arc;

use rand::Rng;

use crate::error::QuizError;
use crate::model::{AnswerLog, Question, QuestionSet};
use crate::shuffle;

/// Outcome of submitting one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerStep {
    /// Moved on to the question at `index`.
    Advanced { index: usize },
    /// The last question was answered; the log is ready to be scored.
    Completed,
}

/// Tracks which question is current and records answers into a log.
#[derive(Debug, Clone)]
pub struct QuestionRunner {
    questions: Arc<QuestionSet>,
    current: usize,
}

impl QuestionRunner {
    pub fn new(questions: Arc<QuestionSet>) -> Self {
        Self {
            questions,
            current: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Shuffled options for the current question.
    pub fn present_options<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<String>> {
        self.current_question()
            .map(|question| shuffle::present_options(question, rng))
    }

    /// Record `selected` for the current question and move on.
    ///
    /// After the last question the index goes back to 0 and
    /// [`RunnerStep::Completed`] is returned.
    pub fn submit_answer(
        &mut self,
        answers: &mut AnswerLog,
        selected: &str,
    ) -> Result<RunnerStep, QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::NoActiveQuestion);
        }
        if selected.trim().is_empty() {
            return Err(QuizError::EmptySelection);
        }

        answers.push(selected);
        tracing::debug!(index = self.current, "answer recorded");

        let last = self.questions.len() - 1;
        if self.current < last {
            self.current += 1;
            Ok(RunnerStep::Advanced {
                index: self.current,
            })
        } else {
            self.current = 0;
            Ok(RunnerStep::Completed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set_of(n: usize) -> Arc<QuestionSet> {
        Arc::new(
            (0..n)
                .map(|i| Question::new(format!("Q{i}"), format!("A{i}"), vec![format!("B{i}")]))
                .collect::<Vec<_>>()
                .into(),
        )
    }

    #[test]
    fn starts_at_first_question() {
        let runner = QuestionRunner::new(set_of(3));
        assert_eq!(runner.current_index(), 0);
        assert_eq!(runner.current_question().unwrap().text, "Q0");
    }

    #[test]
    fn advances_then_completes() {
        let mut runner = QuestionRunner::new(set_of(3));
        let mut log = AnswerLog::new();

        assert_eq!(
            runner.submit_answer(&mut log, "A0").unwrap(),
            RunnerStep::Advanced { index: 1 }
        );
        assert_eq!(
            runner.submit_answer(&mut log, "B1").unwrap(),
            RunnerStep::Advanced { index: 2 }
        );
        assert_eq!(
            runner.submit_answer(&mut log, "A2").unwrap(),
            RunnerStep::Completed
        );
        assert_eq!(runner.current_index(), 0);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["A0", "B1", "A2"]);
    }

    #[test]
    fn single_question_completes_immediately() {
        let mut runner = QuestionRunner::new(set_of(1));
        let mut log = AnswerLog::new();
        assert_eq!(
            runner.submit_answer(&mut log, "A0").unwrap(),
            RunnerStep::Completed
        );
        assert_eq!(runner.current_index(), 0);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let mut runner = QuestionRunner::new(set_of(2));
        let mut log = AnswerLog::new();
        assert!(matches!(
            runner.submit_answer(&mut log, "   "),
            Err(QuizError::EmptySelection)
        ));
        assert!(log.is_empty());
        assert_eq!(runner.current_index(), 0);
    }

    #[test]
    fn empty_set_has_no_active_question() {
        let mut runner = QuestionRunner::new(set_of(0));
        let mut log = AnswerLog::new();
        assert!(runner.current_question().is_none());
        assert!(runner.present_options(&mut StdRng::seed_from_u64(0)).is_none());
        assert!(matches!(
            runner.submit_answer(&mut log, "x"),
            Err(QuizError::NoActiveQuestion)
        ));
    }

    #[test]
    fn options_follow_current_question() {
        let mut runner = QuestionRunner::new(set_of(2));
        let mut log = AnswerLog::new();
        let mut rng = StdRng::seed_from_u64(9);

        let mut first = runner.present_options(&mut rng).unwrap();
        first.sort();
        assert_eq!(first, vec!["A0", "B0"]);

        runner.submit_answer(&mut log, "A0").unwrap();
        let mut second = runner.present_options(&mut rng).unwrap();
        second.sort();
        assert_eq!(second, vec!["A1", "B1"]);
    }
}
