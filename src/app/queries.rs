use super::*;
use crate::session::SessionOutcome;

impl QuizApp {
    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref().map(|s| s.current_question())
    }

    /// 1-based position and set size, for the quiz header.
    pub fn question_number(&self) -> Option<(usize, usize)> {
        self.session.as_ref().map(|s| (s.index() + 1, s.len()))
    }

    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.session.as_ref().and_then(|s| s.outcome())
    }

    pub fn missed_questions(&self) -> &[Question] {
        self.session.as_ref().map(|s| s.missed()).unwrap_or(&[])
    }
}
