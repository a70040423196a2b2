use super::*;
use crate::model::{Answer, QuizMode};
use crate::session::{Advanced, SessionOutcome, StartError};
use crate::stats::ProgressRecord;

impl QuizApp {
    /// Menu entry point for all three modes. An empty selection stays in
    /// the menu with a message instead of opening a broken quiz view.
    pub fn start_quiz(&mut self, mode: QuizMode, unit: Option<u32>) {
        match Session::start(mode, unit, &self.bank) {
            Ok(session) => {
                self.session = Some(session);
                self.state = AppState::Quiz;
                self.answer_input.clear();
                self.message.clear();
                self.cancel_timer();
                self.narrator.speak(mode.intro_line(), self.stats.muted);
            }
            Err(StartError::EmptyPool) => {
                self.session = None;
                self.message = "⚠ No questions available for this selection yet.".to_string();
            }
        }
    }

    /// Grades the current question once and folds the result into the
    /// persisted record. Repeat submissions and stray calls are ignored.
    pub fn submit_answer(&mut self, answer: Answer) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let key = ProgressRecord::key_for(session.mode, session.unit);
        let Some(correct) = session.submit(answer) else {
            return;
        };
        self.record_answer(&key, correct);
    }

    /// Moves to the next question, or ends the session after the last one.
    /// Ignored until the current question has been answered.
    pub fn next_question(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.advance() {
            Some(Advanced::Next) => {
                self.answer_input.clear();
                let prompt = session.current_question().prompt.clone();
                self.narrator.speak(&prompt, self.stats.muted);
            }
            Some(Advanced::Finished(outcome)) => self.apply_outcome(outcome),
            None => {}
        }
    }

    /// Ends the running session in place: timer expiry, or an explicit
    /// finish. Safe to call repeatedly.
    pub fn end_quiz(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(outcome) = session.end() {
            self.apply_outcome(outcome);
        }
    }

    /// Exit button: drops the live session together with its timer.
    pub fn back_to_menu(&mut self) {
        self.session = None;
        self.cancel_timer();
        self.celebrate = false;
        self.confetti = None;
        self.answer_input.clear();
        self.message.clear();
        self.state = AppState::Menu;
    }

    pub(crate) fn apply_outcome(&mut self, outcome: SessionOutcome) {
        let real_exam = self
            .session
            .as_ref()
            .is_some_and(|s| s.mode == QuizMode::RealExam);
        if outcome.passed && real_exam {
            self.record_exam_pass();
            self.celebrate = true;
        }
        self.cancel_timer();
        self.state = AppState::Results;
    }
}
