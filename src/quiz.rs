//! Linear quiz play-through state machine.
//!
//! Idle → InProgress(index) → Completed, with `reset` jumping back to Idle
//! from anywhere. Answer selection records a pending choice without a phase
//! change; `advance` commits it. Scoring is exact index equality against
//! each question's correct answer.

use crate::types::{Quiz, QuizQuestion};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    InProgress { index: usize },
    Completed { score: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    quiz: Quiz,
    phase: QuizPhase,
    selected: Option<usize>,
    answers: Vec<usize>,
}

impl QuizSession {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            phase: QuizPhase::Idle,
            selected: None,
            answers: Vec::new(),
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::InProgress { index } => self.quiz.questions.get(index),
            _ => None,
        }
    }

    /// Idle → InProgress at question 0, discarding any previous play-through.
    pub fn start(&mut self) {
        self.phase = QuizPhase::InProgress { index: 0 };
        self.selected = None;
        self.answers.clear();
    }

    /// Records the pending choice for the current question. Not a phase
    /// transition; out-of-range choices are ignored.
    pub fn select_answer(&mut self, choice: usize) {
        let Some(question) = self.current_question() else {
            return;
        };
        if choice < question.options.len() {
            self.selected = Some(choice);
        }
    }

    /// Commits the pending choice and advances, or completes on the last
    /// question. A missing selection makes this a no-op.
    pub fn advance(&mut self) {
        let QuizPhase::InProgress { index } = self.phase else {
            return;
        };
        let Some(choice) = self.selected.take() else {
            return;
        };

        self.answers.push(choice);
        if index + 1 < self.quiz.questions.len() {
            self.phase = QuizPhase::InProgress { index: index + 1 };
        } else {
            let score = count_correct(&self.answers, &self.quiz.questions);
            self.phase = QuizPhase::Completed { score };
        }
    }

    /// Any state → Idle with empty answers.
    pub fn reset(&mut self) {
        self.phase = QuizPhase::Idle;
        self.selected = None;
        self.answers.clear();
    }

    /// 0–100 completion percentage shown on the progress bar.
    pub fn progress_percent(&self) -> f64 {
        match self.phase {
            QuizPhase::InProgress { index } if !self.quiz.questions.is_empty() => {
                (index + 1) as f64 / self.quiz.questions.len() as f64 * 100.0
            }
            QuizPhase::Completed { .. } => 100.0,
            _ => 0.0,
        }
    }

    /// Final score as a rounded percentage, once completed.
    pub fn score_percent(&self) -> Option<u32> {
        match self.phase {
            QuizPhase::Completed { score } if !self.quiz.questions.is_empty() => {
                Some((score as f64 / self.quiz.questions.len() as f64 * 100.0).round() as u32)
            }
            _ => None,
        }
    }
}

/// Count of positions where the recorded answer matches the question's
/// correct-answer index.
pub fn count_correct(answers: &[usize], questions: &[QuizQuestion]) -> usize {
    answers
        .iter()
        .zip(questions)
        .filter(|(answer, question)| **answer == question.correct_answer)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::mock_quiz;

    #[test]
    fn starts_idle() {
        let session = QuizSession::new(mock_quiz("doc"));
        assert_eq!(session.phase(), QuizPhase::Idle);
        assert!(session.answers().is_empty());
        assert!(session.current_question().is_none());
    }

    #[test]
    fn advance_without_selection_is_a_no_op() {
        let mut session = QuizSession::new(mock_quiz("doc"));
        session.start();
        session.advance();
        assert_eq!(session.phase(), QuizPhase::InProgress { index: 0 });
        assert!(session.answers().is_empty());
    }

    #[test]
    fn perfect_run_scores_full_marks() {
        let mut session = QuizSession::new(mock_quiz("doc"));
        session.start();
        // Correct answers for the canned quiz: [1, 2, 1, 1, 2].
        for choice in [1, 2, 1, 1, 2] {
            session.select_answer(choice);
            session.advance();
        }
        assert_eq!(session.phase(), QuizPhase::Completed { score: 5 });
        assert_eq!(session.score_percent(), Some(100));
    }

    #[test]
    fn score_counts_exact_matches_only() {
        let mut session = QuizSession::new(mock_quiz("doc"));
        session.start();
        for choice in [1, 0, 1, 3, 2] {
            session.select_answer(choice);
            session.advance();
        }
        assert_eq!(session.phase(), QuizPhase::Completed { score: 3 });
        assert_eq!(session.score_percent(), Some(60));
        assert_eq!(session.answers(), &[1, 0, 1, 3, 2]);
    }

    #[test]
    fn selection_clears_between_questions() {
        let mut session = QuizSession::new(mock_quiz("doc"));
        session.start();
        session.select_answer(1);
        session.advance();
        assert_eq!(session.selected(), None);
        assert_eq!(session.phase(), QuizPhase::InProgress { index: 1 });
    }

    #[test]
    fn out_of_range_choice_is_ignored() {
        let mut session = QuizSession::new(mock_quiz("doc"));
        session.start();
        session.select_answer(9);
        assert_eq!(session.selected(), None);
        session.select_answer(3);
        assert_eq!(session.selected(), Some(3));
    }

    #[test]
    fn reset_from_any_state_returns_to_idle() {
        let mut session = QuizSession::new(mock_quiz("doc"));
        session.start();
        session.select_answer(1);
        session.advance();
        session.reset();
        assert_eq!(session.phase(), QuizPhase::Idle);
        assert!(session.answers().is_empty());
        assert_eq!(session.selected(), None);

        // Reset out of Completed as well.
        session.start();
        for choice in [0, 0, 0, 0, 0] {
            session.select_answer(choice);
            session.advance();
        }
        assert!(matches!(session.phase(), QuizPhase::Completed { .. }));
        session.reset();
        assert_eq!(session.phase(), QuizPhase::Idle);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn restart_discards_previous_answers() {
        let mut session = QuizSession::new(mock_quiz("doc"));
        session.start();
        session.select_answer(2);
        session.advance();
        session.start();
        assert_eq!(session.phase(), QuizPhase::InProgress { index: 0 });
        assert!(session.answers().is_empty());
    }
}
