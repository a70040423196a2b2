use super::*;

impl QuizApp {
    /// Updates the keyed bucket and writes the record back right away.
    /// A failed write is the store's problem; the session keeps going.
    pub fn record_answer(&mut self, key: &str, correct: bool) {
        self.stats.record_answer(key, correct);
        self.store.save(&self.stats);
    }

    pub fn record_exam_pass(&mut self) {
        self.stats.exams_passed += 1;
        self.store.save(&self.stats);
    }

    pub fn toggle_mute(&mut self) {
        self.stats.muted = !self.stats.muted;
        self.store.save(&self.stats);
    }
}
