use super::catalog::{self, QuizQuestion};

/// Where the visitor is in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress { index: usize, score: u32 },
    Completed { score: u32 },
}

/// Deterministic progression over the fixed question list.
///
/// Answers are compared by exact string equality. A string that matches no
/// option is an ordinary incorrect answer, not an error; the quiz still
/// advances.
pub struct QuizEngine {
    questions: &'static [QuizQuestion],
    state: QuizState,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self {
            questions: catalog::quiz_questions(),
            state: QuizState::InProgress { index: 0, score: 0 },
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, or `None` once completed.
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        match self.state {
            QuizState::InProgress { index, .. } => Some(&self.questions[index]),
            QuizState::Completed { .. } => None,
        }
    }

    /// Record an answer for the current question and advance.
    ///
    /// Does nothing once the quiz is completed; `reset` is the only way
    /// out of that state.
    pub fn answer(&mut self, selected: &str) -> QuizState {
        if let QuizState::InProgress { index, score } = self.state {
            let score = if selected == self.questions[index].answer {
                score + 1
            } else {
                score
            };

            self.state = if index + 1 == self.questions.len() {
                QuizState::Completed { score }
            } else {
                QuizState::InProgress {
                    index: index + 1,
                    score,
                }
            };
        }
        self.state
    }

    /// Return to the first question with a zero score. Safe from any state.
    pub fn reset(&mut self) -> QuizState {
        self.state = QuizState::InProgress { index: 0, score: 0 };
        self.state
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let engine = QuizEngine::new();
        assert_eq!(engine.state(), QuizState::InProgress { index: 0, score: 0 });
        assert!(engine.current_question().is_some());
    }

    #[test]
    fn test_all_correct_answers_complete_with_full_score() {
        let mut engine = QuizEngine::new();
        assert_eq!(engine.answer("A clowder"), QuizState::InProgress { index: 1, score: 1 });
        assert_eq!(engine.answer("32"), QuizState::InProgress { index: 2, score: 2 });
        assert_eq!(engine.answer("15-20 years"), QuizState::Completed { score: 3 });
    }

    #[test]
    fn test_score_counts_only_correct_answers() {
        let mut engine = QuizEngine::new();
        engine.answer("A clowder");
        engine.answer("48");
        let state = engine.answer("15-20 years");
        assert_eq!(state, QuizState::Completed { score: 2 });
    }

    #[test]
    fn test_all_wrong_answers_complete_with_zero() {
        let mut engine = QuizEngine::new();
        engine.answer("A pack");
        engine.answer("12");
        assert_eq!(engine.answer("5-8 years"), QuizState::Completed { score: 0 });
    }

    #[test]
    fn test_unmatched_free_text_counts_as_incorrect_and_advances() {
        let mut engine = QuizEngine::new();
        let state = engine.answer("not a real option");
        assert_eq!(state, QuizState::InProgress { index: 1, score: 0 });

        engine.answer("not a real option");
        let state = engine.answer("not a real option");
        assert_eq!(state, QuizState::Completed { score: 0 });
    }

    #[test]
    fn test_answer_after_completion_is_a_noop() {
        let mut engine = QuizEngine::new();
        engine.answer("A clowder");
        engine.answer("32");
        engine.answer("15-20 years");
        assert_eq!(engine.answer("A clowder"), QuizState::Completed { score: 3 });
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn test_reset_from_completed() {
        let mut engine = QuizEngine::new();
        engine.answer("A clowder");
        engine.answer("32");
        engine.answer("15-20 years");
        assert_eq!(engine.reset(), QuizState::InProgress { index: 0, score: 0 });
    }

    #[test]
    fn test_reset_mid_quiz_is_safe() {
        let mut engine = QuizEngine::new();
        engine.answer("A clowder");
        assert_eq!(engine.reset(), QuizState::InProgress { index: 0, score: 0 });
    }
}
