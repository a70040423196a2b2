use super::*;
use crate::model::QuizMode;

impl QuizApp {
    /// Advances the countdown from the UI clock. `now` is the frame time in
    /// seconds; whole elapsed seconds become ticks and the fraction stays
    /// in the baseline for the next frame.
    pub fn advance_timer(&mut self, now: f64) {
        if !self.timer_active() {
            self.timer_baseline = None;
            return;
        }
        let baseline = *self.timer_baseline.get_or_insert(now);
        let elapsed = (now - baseline).floor();
        if elapsed < 1.0 {
            return;
        }
        self.timer_baseline = Some(baseline + elapsed);
        for _ in 0..elapsed as u64 {
            self.tick_second();
            if self.state != AppState::Quiz {
                // the session just ended; leftover seconds are void
                break;
            }
        }
    }

    /// One countdown second. Ends the session when the clock hits zero.
    pub fn tick_second(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(outcome) = session.tick() {
            self.apply_outcome(outcome);
        }
    }

    pub fn timer_active(&self) -> bool {
        self.state == AppState::Quiz
            && self
                .session
                .as_ref()
                .is_some_and(|s| s.mode == QuizMode::RealExam && s.time_left() > 0)
    }

    /// Drops the tick anchor so a stale frame can never decrement a
    /// session started later.
    pub(crate) fn cancel_timer(&mut self) {
        self.timer_baseline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, QuestionBody, QuizMode};
    use crate::session::REAL_EXAM_SECONDS;
    use crate::stats::MemoryStore;

    fn exam_app() -> QuizApp {
        let bank: Vec<Question> = (0..20)
            .map(|i| Question {
                unit: 1,
                prompt: format!("q{i}"),
                body: QuestionBody::TrueFalse { answer: true },
                explanation: String::new(),
                source: None,
            })
            .collect();
        let mut app = QuizApp::with_bank(Box::new(MemoryStore::new()), bank);
        app.start_quiz(QuizMode::RealExam, None);
        app
    }

    #[test]
    fn fractional_frames_accumulate_into_whole_ticks() {
        let mut app = exam_app();
        app.advance_timer(10.0);
        assert_eq!(app.session.as_ref().unwrap().time_left(), REAL_EXAM_SECONDS);
        app.advance_timer(10.6);
        assert_eq!(app.session.as_ref().unwrap().time_left(), REAL_EXAM_SECONDS);
        app.advance_timer(11.2);
        assert_eq!(
            app.session.as_ref().unwrap().time_left(),
            REAL_EXAM_SECONDS - 1
        );
        // the 0.2 fraction carried over
        app.advance_timer(12.0);
        assert_eq!(
            app.session.as_ref().unwrap().time_left(),
            REAL_EXAM_SECONDS - 2
        );
    }

    #[test]
    fn clock_runout_moves_to_results_with_the_current_score() {
        let mut app = exam_app();
        app.submit_answer(Answer::Bool(true));
        app.next_question();
        app.submit_answer(Answer::Bool(true));

        app.advance_timer(0.0);
        app.advance_timer(REAL_EXAM_SECONDS as f64 + 5.0);
        assert_eq!(app.state, AppState::Results);
        let outcome = app.outcome().unwrap();
        assert_eq!(outcome.score, 2);
        assert!(!outcome.passed);
    }

    #[test]
    fn timer_never_runs_for_practice_sessions() {
        let bank: Vec<Question> = (0..5)
            .map(|i| Question {
                unit: 2,
                prompt: format!("q{i}"),
                body: QuestionBody::TrueFalse { answer: true },
                explanation: String::new(),
                source: None,
            })
            .collect();
        let mut app = QuizApp::with_bank(Box::new(MemoryStore::new()), bank);
        app.start_quiz(QuizMode::Unit, Some(2));
        assert!(!app.timer_active());
        app.advance_timer(0.0);
        app.advance_timer(100.0);
        assert_eq!(app.session.as_ref().unwrap().time_left(), 0);
        assert_eq!(app.state, AppState::Quiz);
    }

    #[test]
    fn leaving_the_quiz_view_cancels_the_pending_tick() {
        let mut app = exam_app();
        app.advance_timer(50.0);
        app.back_to_menu();
        // a stale frame from the old session must not touch a new one
        app.start_quiz(QuizMode::RealExam, None);
        app.advance_timer(500.0);
        assert_eq!(app.session.as_ref().unwrap().time_left(), REAL_EXAM_SECONDS);
        app.advance_timer(501.0);
        assert_eq!(
            app.session.as_ref().unwrap().time_left(),
            REAL_EXAM_SECONDS - 1
        );
    }
}
