pub mod store;

use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
pub use store::{JsonFileStore, KvStore, MemoryStore};
use tracing::{info, warn};

pub const XP_KEY: &str = "oslab-xp";
pub const COMPLETED_KEY: &str = "oslab-completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleId {
    Fcfs,
    FirstFit,
    Quiz,
}

impl ModuleId {
    pub const ALL: [ModuleId; 3] = [ModuleId::Fcfs, ModuleId::FirstFit, ModuleId::Quiz];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::FirstFit => "first-fit",
            Self::Quiz => "quiz",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS Scheduling",
            Self::FirstFit => "First Fit Allocation",
            Self::Quiz => "Quiz Challenge",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Experience points and completed modules, mirrored to a [`KvStore`] on
/// every change.
#[derive(Debug)]
pub struct Progress<K: KvStore> {
    store: K,
    xp: u64,
    completed: Vec<ModuleId>,
    xp_per_level: u64,
}

impl<K: KvStore> Progress<K> {
    /// Reads the saved state once. Values that fail to parse are treated as
    /// absent.
    pub fn load(store: K, xp_per_level: u64) -> Result<Self> {
        let xp = match store.get(XP_KEY)? {
            Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "ignoring unreadable xp");
                0
            }),
            None => 0,
        };

        let completed = match store.get(COMPLETED_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
                Ok(ids) => {
                    let mut completed = Vec::new();
                    for id in ids {
                        match serde_json::from_value::<ModuleId>(id) {
                            Ok(module) if !completed.contains(&module) => completed.push(module),
                            Ok(_) => {}
                            Err(e) => warn!(error = %e, "dropping stored module"),
                        }
                    }
                    completed
                }
                Err(e) => {
                    warn!(value = %raw, error = %e, "ignoring unreadable module list");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self {
            store,
            xp,
            completed,
            xp_per_level: xp_per_level.max(1),
        })
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    pub fn level(&self) -> u64 {
        self.xp / self.xp_per_level + 1
    }

    /// Share of modules completed, rounded to a whole percent.
    pub fn progress_percent(&self) -> u32 {
        let total = ModuleId::ALL.len() as f64;
        (self.completed.len() as f64 / total * 100.0).round() as u32
    }

    pub fn completed_modules(&self) -> &[ModuleId] {
        &self.completed
    }

    pub fn is_completed(&self, module: ModuleId) -> bool {
        self.completed.contains(&module)
    }

    /// Writes the store before updating memory; a failed write changes nothing.
    pub fn add_xp(&mut self, amount: u64) -> Result<()> {
        let xp = self.xp.saturating_add(amount);
        self.store.set(XP_KEY, xp.to_string())?;
        self.xp = xp;
        Ok(())
    }

    pub fn complete_module(&mut self, module: ModuleId) -> Result<()> {
        if self.is_completed(module) {
            return Ok(());
        }
        let mut completed = self.completed.clone();
        completed.push(module);
        let encoded = serde_json::to_string(&completed).map_err(StoreError::from)?;
        self.store.set(COMPLETED_KEY, encoded)?;
        self.completed = completed;
        Ok(())
    }

    /// Credits a finished exercise.
    pub fn record_run(&mut self, module: ModuleId, reward: u64) -> Result<()> {
        let level = self.level();
        self.add_xp(reward)?;
        self.complete_module(module)?;
        if self.level() > level {
            info!(level = self.level(), xp = self.xp, "level up");
        }
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.store.remove(XP_KEY)?;
        self.xp = 0;
        self.store.remove(COMPLETED_KEY)?;
        self.completed.clear();
        Ok(())
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn into_store(self) -> K {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Accepts reads, refuses every write.
    #[derive(Default)]
    struct ReadOnlyStore(MemoryStore);

    impl KvStore for ReadOnlyStore {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: String) -> std::result::Result<(), StoreError> {
            Err(StoreError::Io {
                path: "read-only".into(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn remove(&mut self, key: &str) -> std::result::Result<(), StoreError> {
            self.set(key, String::new())
        }
    }

    #[test]
    fn starts_empty_at_level_one() {
        let progress = Progress::load(MemoryStore::new(), 100).unwrap();
        assert_eq!(progress.xp(), 0);
        assert_eq!(progress.level(), 1);
        assert_eq!(progress.progress_percent(), 0);
    }

    #[test]
    fn level_and_percent_follow_state() {
        let mut progress = Progress::load(MemoryStore::new(), 100).unwrap();
        progress.record_run(ModuleId::Fcfs, 25).unwrap();
        progress.record_run(ModuleId::FirstFit, 80).unwrap();
        assert_eq!(progress.xp(), 105);
        assert_eq!(progress.level(), 2);
        assert_eq!(progress.progress_percent(), 67);

        progress.record_run(ModuleId::Quiz, 0).unwrap();
        assert_eq!(progress.progress_percent(), 100);
    }

    #[test]
    fn complete_module_is_idempotent() {
        let mut progress = Progress::load(MemoryStore::new(), 100).unwrap();
        progress.complete_module(ModuleId::Quiz).unwrap();
        progress.complete_module(ModuleId::Quiz).unwrap();
        assert_eq!(progress.completed_modules(), &[ModuleId::Quiz]);
    }

    #[test]
    fn state_survives_reload() {
        let mut progress = Progress::load(MemoryStore::new(), 100).unwrap();
        progress.record_run(ModuleId::FirstFit, 30).unwrap();
        let store = progress.into_store();
        assert_eq!(store.get(XP_KEY).unwrap().as_deref(), Some("30"));
        assert_eq!(
            store.get(COMPLETED_KEY).unwrap().as_deref(),
            Some(r#"["first-fit"]"#)
        );

        let reloaded = Progress::load(store, 100).unwrap();
        assert_eq!(reloaded.xp(), 30);
        assert!(reloaded.is_completed(ModuleId::FirstFit));
    }

    #[test]
    fn reset_clears_store() {
        let mut progress = Progress::load(MemoryStore::new(), 100).unwrap();
        progress.record_run(ModuleId::Fcfs, 25).unwrap();
        progress.reset().unwrap();
        assert_eq!(progress.xp(), 0);
        assert!(progress.completed_modules().is_empty());
        assert_eq!(progress.store().get(XP_KEY).unwrap(), None);
        assert_eq!(progress.store().get(COMPLETED_KEY).unwrap(), None);
    }

    #[test]
    fn failed_writes_leave_state_unchanged() {
        let mut store = ReadOnlyStore::default();
        store.0.set(XP_KEY, "30".into()).unwrap();
        store.0.set(COMPLETED_KEY, r#"["fcfs"]"#.into()).unwrap();
        let mut progress = Progress::load(store, 100).unwrap();

        assert!(progress.add_xp(10).is_err());
        assert!(progress.complete_module(ModuleId::Quiz).is_err());
        assert!(progress.reset().is_err());
        assert_eq!(progress.xp(), 30);
        assert_eq!(progress.completed_modules(), &[ModuleId::Fcfs]);
    }

    #[test]
    fn unreadable_values_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(XP_KEY, "lots".into()).unwrap();
        store
            .set(COMPLETED_KEY, r#"["fcfs","paging",7,"fcfs"]"#.into())
            .unwrap();
        let progress = Progress::load(store, 100).unwrap();
        assert_eq!(progress.xp(), 0);
        assert_eq!(progress.completed_modules(), &[ModuleId::Fcfs]);
    }
}
