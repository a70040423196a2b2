use rand::seq::SliceRandom;
use rand::thread_rng;
use thiserror::Error;

use crate::model::{Answer, Question, QuizMode};

/// Countdown for the timed exam simulation, in seconds.
pub const REAL_EXAM_SECONDS: u32 = 1800;

/// The real exam passes on 16 correct answers out of 20. The mark is
/// absolute: it does not scale down when the pool holds fewer questions.
pub const REAL_EXAM_PASS_MARK: u32 = 16;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StartError {
    #[error("no questions available for this selection")]
    EmptyPool,
}

/// Final numbers of a finished session, fixed by the first `end` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Advanced {
    Next,
    Finished(SessionOutcome),
}

/// One quiz run: a fixed question set, a cursor, a score and (for the real
/// exam) a countdown. Created by `start`, discarded on return to the menu.
pub struct Session {
    pub mode: QuizMode,
    pub unit: Option<u32>,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    selected: Option<Answer>,
    revealed: bool,
    missed: Vec<Question>,
    time_left: u32,
    outcome: Option<SessionOutcome>,
}

/// Practice pass mark: 80 % of the set, rounded up.
pub fn pass_mark(total: usize) -> u32 {
    (total as u32 * 4).div_ceil(5)
}

impl Session {
    /// Draws a shuffled subset of the bank: the whole bank, or one unit's
    /// questions, truncated to the mode cap. Consecutive starts on the
    /// same pool are not guaranteed the same order.
    pub fn start(mode: QuizMode, unit: Option<u32>, bank: &[Question]) -> Result<Self, StartError> {
        let mut pool: Vec<Question> = match unit {
            Some(id) => bank.iter().filter(|q| q.unit == id).cloned().collect(),
            None => bank.to_vec(),
        };
        pool.shuffle(&mut thread_rng());
        let cap = mode.cap(pool.len());
        pool.truncate(cap);
        if pool.is_empty() {
            return Err(StartError::EmptyPool);
        }

        Ok(Self {
            mode,
            unit,
            questions: pool,
            current: 0,
            score: 0,
            selected: None,
            revealed: false,
            missed: Vec::new(),
            time_left: if mode == QuizMode::RealExam {
                REAL_EXAM_SECONDS
            } else {
                0
            },
            outcome: None,
        })
    }

    /// Grades the current question. At most one grading per question:
    /// a second submission is ignored and returns `None`.
    pub fn submit(&mut self, answer: Answer) -> Option<bool> {
        if self.revealed || self.outcome.is_some() {
            return None;
        }
        let correct = self.questions[self.current].grade(&answer);
        if correct {
            self.score += 1;
        } else {
            self.missed.push(self.questions[self.current].clone());
        }
        self.selected = Some(answer);
        self.revealed = true;
        Some(correct)
    }

    /// Moves past a revealed question; the last question ends the session.
    /// Ignored while the current question is unanswered.
    pub fn advance(&mut self) -> Option<Advanced> {
        if !self.revealed || self.outcome.is_some() {
            return None;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            self.revealed = false;
            Some(Advanced::Next)
        } else {
            self.end().map(Advanced::Finished)
        }
    }

    /// Terminal transition. Only the first call computes and returns the
    /// outcome; repeats get `None`, so pass stats cannot double-count when
    /// timer expiry races a manual finish.
    pub fn end(&mut self) -> Option<SessionOutcome> {
        if self.outcome.is_some() {
            return None;
        }
        let total = self.questions.len();
        let passed = match self.mode {
            QuizMode::RealExam => self.score >= REAL_EXAM_PASS_MARK,
            QuizMode::Unit | QuizMode::Full => self.score >= pass_mark(total),
        };
        let percentage = (self.score as f32 / total as f32 * 100.0).round() as u32;
        let outcome = SessionOutcome {
            score: self.score,
            total,
            percentage,
            passed,
        };
        self.outcome = Some(outcome.clone());
        Some(outcome)
    }

    /// One countdown second. Only a live real-exam session ticks; hitting
    /// zero ends the session with whatever score has accumulated.
    pub fn tick(&mut self) -> Option<SessionOutcome> {
        if self.mode != QuizMode::RealExam || self.outcome.is_some() || self.time_left == 0 {
            return None;
        }
        self.time_left -= 1;
        if self.time_left == 0 { self.end() } else { None }
    }

    // Read-only views for the UI

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn at_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected(&self) -> Option<&Answer> {
        self.selected.as_ref()
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn missed(&self) -> &[Question] {
        &self.missed
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Fraction of the set dealt with, counting a revealed answer.
    pub fn progress_fraction(&self) -> f32 {
        let done = self.current + usize::from(self.revealed);
        done as f32 / self.questions.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionBody;

    fn tf_bank(unit: u32, n: usize, answer: bool) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                unit,
                prompt: format!("question {i}"),
                body: QuestionBody::TrueFalse { answer },
                explanation: "why".into(),
                source: None,
            })
            .collect()
    }

    #[test]
    fn real_exam_draws_at_most_twenty_and_sets_the_clock() {
        let bank = tf_bank(1, 60, true);
        let session = Session::start(QuizMode::RealExam, None, &bank).unwrap();
        assert_eq!(session.len(), 20);
        assert_eq!(session.time_left(), REAL_EXAM_SECONDS);

        let small = tf_bank(1, 8, true);
        let session = Session::start(QuizMode::RealExam, None, &small).unwrap();
        assert_eq!(session.len(), 8);
    }

    #[test]
    fn full_practice_caps_at_fifty_with_no_timer() {
        let bank = tf_bank(1, 80, true);
        let session = Session::start(QuizMode::Full, None, &bank).unwrap();
        assert_eq!(session.len(), 50);
        assert_eq!(session.time_left(), 0);
    }

    #[test]
    fn unit_session_takes_the_whole_matching_pool() {
        let mut bank = tf_bank(3, 12, true);
        bank.extend(tf_bank(5, 7, false));
        let session = Session::start(QuizMode::Unit, Some(3), &bank).unwrap();
        assert_eq!(session.len(), 12);
        // every drawn question belongs to the requested unit
        let mut s = session;
        loop {
            assert_eq!(s.current_question().unit, 3);
            s.submit(Answer::Bool(true));
            match s.advance() {
                Some(Advanced::Next) => continue,
                _ => break,
            }
        }
    }

    #[test]
    fn empty_unit_pool_refuses_to_start() {
        let bank = tf_bank(1, 5, true);
        assert!(matches!(
            Session::start(QuizMode::Unit, Some(9), &bank),
            Err(StartError::EmptyPool)
        ));
    }

    #[test]
    fn consecutive_starts_are_not_locked_to_one_order() {
        let bank: Vec<Question> = (0..12)
            .map(|i| Question {
                unit: 1,
                prompt: format!("q{i}"),
                body: QuestionBody::TrueFalse { answer: true },
                explanation: String::new(),
                source: None,
            })
            .collect();
        let mut orders = std::collections::HashSet::new();
        for _ in 0..12 {
            let session = Session::start(QuizMode::Unit, Some(1), &bank).unwrap();
            let order: Vec<String> = session
                .questions
                .iter()
                .map(|q| q.prompt.clone())
                .collect();
            orders.insert(order);
        }
        assert!(orders.len() > 1, "twelve starts produced a single ordering");
    }

    #[test]
    fn score_and_missed_partition_the_answered_questions() {
        let bank = tf_bank(1, 6, true);
        let mut session = Session::start(QuizMode::Unit, Some(1), &bank).unwrap();
        // alternate right and wrong answers
        for i in 0.. {
            let answer = Answer::Bool(i % 2 == 0);
            session.submit(answer);
            match session.advance() {
                Some(Advanced::Next) => continue,
                _ => break,
            }
        }
        let answered = session.len() as u32;
        assert_eq!(session.score() + session.missed().len() as u32, answered);
        assert_eq!(session.score(), 3);
        assert_eq!(session.missed().len(), 3);
    }

    #[test]
    fn grading_is_idempotent_per_question() {
        let bank = tf_bank(1, 2, true);
        let mut session = Session::start(QuizMode::Unit, Some(1), &bank).unwrap();
        assert_eq!(session.submit(Answer::Bool(true)), Some(true));
        assert_eq!(session.submit(Answer::Bool(false)), None);
        assert_eq!(session.submit(Answer::Bool(true)), None);
        assert_eq!(session.score(), 1);
        assert!(session.missed().is_empty());
    }

    #[test]
    fn advance_is_ignored_before_the_reveal() {
        let bank = tf_bank(1, 3, true);
        let mut session = Session::start(QuizMode::Unit, Some(1), &bank).unwrap();
        assert_eq!(session.advance(), None);
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn real_exam_pass_mark_is_a_fixed_sixteen() {
        let bank = tf_bank(1, 20, true);
        // 16 correct of 20: passed
        let mut session = Session::start(QuizMode::RealExam, None, &bank).unwrap();
        for i in 0..20 {
            session.submit(Answer::Bool(i < 16));
            session.advance();
        }
        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.score, 16);
        assert!(outcome.passed);

        // 15 correct of 20: not passed
        let mut session = Session::start(QuizMode::RealExam, None, &bank).unwrap();
        for i in 0..20 {
            session.submit(Answer::Bool(i < 15));
            session.advance();
        }
        assert!(!session.outcome().unwrap().passed);
    }

    #[test]
    fn practice_pass_mark_scales_with_the_set() {
        assert_eq!(pass_mark(10), 8);
        assert_eq!(pass_mark(5), 4);
        assert_eq!(pass_mark(7), 6);

        let bank = tf_bank(1, 10, true);
        let mut session = Session::start(QuizMode::Unit, Some(1), &bank).unwrap();
        for i in 0..10 {
            session.submit(Answer::Bool(i < 7));
            session.advance();
        }
        assert!(!session.outcome().unwrap().passed, "7 of 10 must not pass");
    }

    #[test]
    fn end_reports_only_once() {
        let bank = tf_bank(1, 1, true);
        let mut session = Session::start(QuizMode::Unit, Some(1), &bank).unwrap();
        session.submit(Answer::Bool(true));
        let first = session.end();
        assert!(first.is_some());
        assert_eq!(session.end(), None);
        assert!(session.is_finished());
    }

    #[test]
    fn clock_runout_ends_the_session_with_the_current_score() {
        let bank = tf_bank(1, 20, true);
        let mut session = Session::start(QuizMode::RealExam, None, &bank).unwrap();
        session.submit(Answer::Bool(true));
        session.advance();
        session.submit(Answer::Bool(true));

        let mut ended = None;
        for _ in 0..REAL_EXAM_SECONDS {
            if let Some(outcome) = session.tick() {
                ended = Some(outcome);
            }
        }
        let outcome = ended.expect("timer must end the session");
        assert_eq!(outcome.score, 2);
        assert!(!outcome.passed);
        assert_eq!(session.time_left(), 0);
        // a stale tick after the end changes nothing
        assert_eq!(session.tick(), None);
    }

    #[test]
    fn practice_sessions_never_tick() {
        let bank = tf_bank(1, 4, true);
        let mut session = Session::start(QuizMode::Full, None, &bank).unwrap();
        assert_eq!(session.tick(), None);
        assert_eq!(session.time_left(), 0);
    }

    #[test]
    fn percentage_is_rounded() {
        let bank = tf_bank(1, 3, true);
        let mut session = Session::start(QuizMode::Unit, Some(1), &bank).unwrap();
        session.submit(Answer::Bool(true));
        session.advance();
        session.submit(Answer::Bool(false));
        session.advance();
        session.submit(Answer::Bool(false));
        session.advance();
        assert_eq!(session.outcome().unwrap().percentage, 33);
    }

    #[test]
    fn progress_counts_a_revealed_answer() {
        let bank = tf_bank(1, 4, true);
        let mut session = Session::start(QuizMode::Unit, Some(1), &bank).unwrap();
        assert_eq!(session.progress_fraction(), 0.0);
        session.submit(Answer::Bool(true));
        assert_eq!(session.progress_fraction(), 0.25);
        session.advance();
        assert_eq!(session.progress_fraction(), 0.25);
    }
}
