//! Scoring a completed answer log against its question set.

use crate::model::{AnswerLog, AnswerReview, QuestionSet, Score};

/// Count answers that exactly equal the corresponding correct answer.
///
/// Pairs are matched by index; an answer with no question (or a question
/// with no answer) never counts.
pub fn count_correct(questions: &QuestionSet, answers: &AnswerLog) -> usize {
    questions
        .iter()
        .zip(answers.iter())
        .filter(|(question, answer)| question.is_correct(answer))
        .count()
}

/// Compute the score for a game.
pub fn score(questions: &QuestionSet, answers: &AnswerLog) -> Score {
    Score {
        correct: count_correct(questions, answers),
        total: questions.len(),
    }
}

/// Per-question breakdown of a game.
pub fn review(questions: &QuestionSet, answers: &AnswerLog) -> Vec<AnswerReview> {
    questions
        .iter()
        .zip(answers.iter())
        .map(|(question, given)| AnswerReview {
            question: question.text.clone(),
            given: given.to_string(),
            correct: question.correct_answer.clone(),
            is_correct: question.is_correct(given),
        })
        .collect()
}
