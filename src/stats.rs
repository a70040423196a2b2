use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::QuizMode;

/// Fixed key the record lives under: the localStorage key in the browser,
/// the stats file stem on native builds.
pub const STORAGE_KEY: &str = "mn_bus_stats_2026";

/// One progress bucket: answers seen and answers gotten right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub correct: u32,
    pub total: u32,
}

impl Tally {
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            (self.correct as f32 / self.total as f32 * 100.0).round() as u32
        }
    }
}

/// The persisted progress record. Missing fields in stored data fall back
/// to their defaults, so older or partially damaged records still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressRecord {
    pub unit_progress: HashMap<String, Tally>,
    pub total_correct: u64,
    pub exams_passed: u32,
    pub muted: bool,
}

impl ProgressRecord {
    /// Bucket key: the unit id when the session has one, else the mode slug.
    pub fn key_for(mode: QuizMode, unit: Option<u32>) -> String {
        match unit {
            Some(id) => id.to_string(),
            None => mode.slug().to_string(),
        }
    }

    /// Folds one graded answer into the keyed bucket and the global counter.
    pub fn record_answer(&mut self, key: &str, correct: bool) {
        let bucket = self.unit_progress.entry(key.to_string()).or_default();
        bucket.total += 1;
        if correct {
            bucket.correct += 1;
            self.total_correct += 1;
        }
    }

    pub fn unit_tally(&self, unit_id: u32) -> Tally {
        self.unit_progress
            .get(&unit_id.to_string())
            .copied()
            .unwrap_or_default()
    }
}

/// Persistence boundary for the progress record. `load` never fails and
/// `save` is best-effort: the quiz keeps running on a broken disk.
pub trait StatsStore {
    fn load(&self) -> ProgressRecord;
    fn save(&mut self, record: &ProgressRecord);
}

/// Shared in-memory store, for tests and headless runs.
#[derive(Clone, Default)]
pub struct MemoryStore {
    saved: std::sync::Arc<std::sync::Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw stored bytes, valid or not.
    pub fn with_raw(json: &str) -> Self {
        let store = Self::default();
        if let Ok(mut guard) = store.saved.lock() {
            *guard = Some(json.to_string());
        }
        store
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> ProgressRecord {
        self.saved
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    fn save(&mut self, record: &ProgressRecord) {
        match serde_json::to_string(record) {
            Ok(json) => {
                if let Ok(mut guard) = self.saved.lock() {
                    *guard = Some(json);
                }
            }
            Err(err) => log::warn!("could not serialize progress record: {err}"),
        }
    }
}

/// JSON file in the per-user data directory, next to where eframe keeps
/// its own persistence. Falls back to the working directory.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(app_id: &str) -> Self {
        let dir = eframe::storage_dir(app_id).unwrap_or_else(|| std::path::PathBuf::from("."));
        Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StatsStore for FileStore {
    fn load(&self) -> ProgressRecord {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                log::warn!("stored progress is unreadable, starting fresh: {err}");
                ProgressRecord::default()
            }),
            Err(_) => ProgressRecord::default(),
        }
    }

    fn save(&mut self, record: &ProgressRecord) {
        let json = match serde_json::to_string_pretty(record) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("could not serialize progress record: {err}");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(err) = std::fs::write(&self.path, json) {
            log::warn!("could not save progress to {}: {err}", self.path.display());
        }
    }
}

/// Browser store under the fixed localStorage key.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl StatsStore for LocalStorageStore {
    fn load(&self) -> ProgressRecord {
        Self::storage()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    fn save(&mut self, record: &ProgressRecord) {
        let Ok(json) = serde_json::to_string(record) else {
            return;
        };
        if let Some(storage) = Self::storage() {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                log::warn!("localStorage rejected the progress record");
            }
        }
    }
}
