use crate::data::read_questions_embedded;
use crate::model::{AppState, Question};
use crate::session::Session;
use crate::speech::Narrator;
use crate::stats::{ProgressRecord, StatsStore};
use crate::ui::confetti::Confetti;

// Submodules
pub mod actions;
pub mod progress;
pub mod queries;
pub mod timer;
pub mod view_models;

pub use view_models::UnitCard;

/// Application shell: the question bank, the persisted record with its
/// injected store, the optional live session, and the current view.
pub struct QuizApp {
    pub bank: Vec<Question>,
    pub stats: ProgressRecord,
    pub store: Box<dyn StatsStore>,
    pub session: Option<Session>,
    pub state: AppState,
    pub message: String,
    /// Text buffer for fill-in-the-blank answers.
    pub answer_input: String,
    pub narrator: Narrator,
    /// Set by a real-exam pass; the UI turns it into a confetti burst.
    pub celebrate: bool,
    pub confetti: Option<Confetti>,
    /// Anchor of the whole-second countdown accumulator.
    timer_baseline: Option<f64>,
}

impl QuizApp {
    pub fn new(store: Box<dyn StatsStore>) -> Self {
        Self::with_bank(store, read_questions_embedded())
    }

    pub fn with_bank(store: Box<dyn StatsStore>, bank: Vec<Question>) -> Self {
        let stats = store.load();
        Self {
            bank,
            stats,
            store,
            session: None,
            state: AppState::Menu,
            message: String::new(),
            answer_input: String::new(),
            narrator: Narrator,
            celebrate: false,
            confetti: None,
            timer_baseline: None,
        }
    }

    /// App wired to the platform store: a stats file on native builds,
    /// localStorage in the browser.
    pub fn with_default_store() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let store = Box::new(crate::stats::FileStore::new(crate::APP_ID));
        #[cfg(target_arch = "wasm32")]
        let store = Box::new(crate::stats::LocalStorageStore);
        Self::new(store)
    }
}
