//! Integration tests for the quiz play-through state machine.

use mindpal::mocks::mock_quiz;
use mindpal::quiz::{QuizPhase, QuizSession, count_correct};

mod play_through {
    use super::*;

    #[test]
    fn full_run_scores_matching_answers() {
        let quiz = mock_quiz("doc-1");
        let correct: Vec<usize> = quiz.questions.iter().map(|q| q.correct_answer).collect();
        assert_eq!(correct, vec![1, 2, 1, 1, 2]);

        let mut session = QuizSession::new(quiz);
        session.start();
        for choice in correct {
            session.select_answer(choice);
            session.advance();
        }

        assert_eq!(session.phase(), QuizPhase::Completed { score: 5 });
        assert_eq!(session.score_percent(), Some(100));
    }

    #[test]
    fn partial_run_counts_exact_index_matches() {
        let mut session = QuizSession::new(mock_quiz("doc-1"));
        session.start();
        // Two of these match the correct indices [1, 2, 1, 1, 2].
        for choice in [1, 2, 0, 0, 0] {
            session.select_answer(choice);
            session.advance();
        }
        assert_eq!(session.phase(), QuizPhase::Completed { score: 2 });
        assert_eq!(session.score_percent(), Some(40));
    }

    #[test]
    fn progress_walks_the_question_list() {
        let mut session = QuizSession::new(mock_quiz("doc-1"));
        assert_eq!(session.progress_percent(), 0.0);
        session.start();
        assert_eq!(session.progress_percent(), 20.0);
        session.select_answer(0);
        session.advance();
        assert_eq!(session.progress_percent(), 40.0);
    }
}

mod transitions {
    use super::*;

    #[test]
    fn select_answer_is_not_a_transition() {
        let mut session = QuizSession::new(mock_quiz("doc-1"));
        session.start();
        session.select_answer(2);
        session.select_answer(0);
        assert_eq!(session.phase(), QuizPhase::InProgress { index: 0 });
        assert_eq!(session.selected(), Some(0));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn advance_requires_a_selection() {
        let mut session = QuizSession::new(mock_quiz("doc-1"));
        session.start();
        session.advance();
        session.advance();
        assert_eq!(session.phase(), QuizPhase::InProgress { index: 0 });
    }

    #[test]
    fn reset_discards_answers_from_every_phase() {
        let mut session = QuizSession::new(mock_quiz("doc-1"));

        // From Idle.
        session.reset();
        assert_eq!(session.phase(), QuizPhase::Idle);

        // From the middle of a run.
        session.start();
        session.select_answer(1);
        session.advance();
        session.select_answer(3);
        session.reset();
        assert_eq!(session.phase(), QuizPhase::Idle);
        assert!(session.answers().is_empty());
        assert_eq!(session.selected(), None);

        // From Completed.
        session.start();
        for _ in 0..5 {
            session.select_answer(0);
            session.advance();
        }
        assert!(matches!(session.phase(), QuizPhase::Completed { .. }));
        session.reset();
        assert_eq!(session.phase(), QuizPhase::Idle);
        assert!(session.answers().is_empty());
    }
}

mod scoring {
    use super::*;

    #[test]
    fn count_correct_ignores_unanswered_tail() {
        let quiz = mock_quiz("doc-1");
        assert_eq!(count_correct(&[1, 2], &quiz.questions), 2);
        assert_eq!(count_correct(&[], &quiz.questions), 0);
    }

    #[test]
    fn count_correct_is_positional() {
        let quiz = mock_quiz("doc-1");
        // Right answers in the wrong slots score nothing.
        assert_eq!(count_correct(&[2, 1, 2, 2, 1], &quiz.questions), 0);
    }
}
