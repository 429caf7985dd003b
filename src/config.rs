use crate::error::Result;
use config::{Config, Environment, File, Map};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "oslab.toml";

/// XP granted for each kind of exercise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Rewards {
    pub fcfs_run: u64,
    pub first_fit_run: u64,
    pub quiz_correct: u64,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            fcfs_run: 25,
            first_fit_run: 30,
            quiz_correct: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub store_path: PathBuf,
    pub xp_per_level: u64,
    pub rewards: Rewards,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("oslab-progress.json"),
            xp_per_level: 100,
            rewards: Rewards::default(),
        }
    }
}

impl LabConfig {
    /// Loads from `path` if it exists, layering `OSLAB__*` variables on top.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// As [`LabConfig::load`], reading variables from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(
        path: impl AsRef<Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("OSLAB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;
        let config: Self = settings.try_deserialize()?;
        debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = LabConfig::load_with_env(path, Some(Map::new())).unwrap();
        assert_eq!(config.xp_per_level, 100);
        assert_eq!(config.rewards, Rewards::default());
    }

    #[test]
    fn file_overrides_selected_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oslab.toml");
        std::fs::write(
            &path,
            "xp_per_level = 50\nstore_path = \"lab.json\"\n\n[rewards]\nquiz_correct = 5\n",
        )
        .unwrap();

        let config = LabConfig::load_with_env(&path, Some(Map::new())).unwrap();
        assert_eq!(config.xp_per_level, 50);
        assert_eq!(config.store_path, PathBuf::from("lab.json"));
        assert_eq!(config.rewards.quiz_correct, 5);
        assert_eq!(config.rewards.fcfs_run, 25);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oslab.toml");
        std::fs::write(&path, "xp_per_level = 50\n\n[rewards]\nquiz_correct = 5\n").unwrap();

        let env: Map<String, String> = [
            ("OSLAB__REWARDS__QUIZ_CORRECT", "40"),
            ("OSLAB__STORE_PATH", "env.json"),
            ("OTHER__XP_PER_LEVEL", "7"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

        let config = LabConfig::load_with_env(&path, Some(env)).unwrap();
        assert_eq!(config.rewards.quiz_correct, 40);
        assert_eq!(config.store_path, PathBuf::from("env.json"));
        assert_eq!(config.xp_per_level, 50);
        assert_eq!(config.rewards.first_fit_run, 30);
    }
}
