pub mod migrate;

use crate::core::compliance::MatchPolicy;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_offset;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Runtime configuration, stored as YAML in `~/.gearcheck/gearcheck.conf`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to the SQLite database file.
    pub database: String,
    /// Fixed UTC offset of the plant, e.g. "+07:00". Defines where a
    /// calendar day starts and ends.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    /// Default port for `serve` (overridden by --port and PORT).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Default scan-matching policy: "tag" or "label".
    #[serde(default = "default_match_policy")]
    pub match_policy: String,
}

fn default_utc_offset() -> String {
    "+07:00".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_match_policy() -> String {
    "tag".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: Config::database_file().to_string_lossy().to_string(),
            utc_offset: default_utc_offset(),
            port: default_port(),
            match_policy: default_match_policy(),
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".gearcheck")
    }

    pub fn config_file() -> PathBuf {
        Config::config_dir().join("gearcheck.conf")
    }

    pub fn database_file() -> PathBuf {
        Config::config_dir().join("gearcheck.sqlite")
    }

    /// Load the configuration file, falling back to defaults when absent.
    pub fn load() -> AppResult<Self> {
        let path = Config::config_file();
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    pub fn save(&self) -> AppResult<()> {
        let path = Config::config_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Create the config directory and write a fresh config file.
    ///
    /// `custom_db` points the database somewhere other than the default;
    /// `is_test` suppresses chatter so assertions stay stable.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Config::config_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            if !is_test {
                crate::ui::messages::info(format!("Created {}", dir.display()));
            }
        }

        let mut cfg = Config::default();
        if let Some(db) = custom_db {
            cfg.database = db.to_string();
        }
        cfg.save()?;
        if !is_test {
            crate::ui::messages::success(format!(
                "Configuration written to {}",
                Config::config_file().display()
            ));
        }
        Ok(cfg)
    }

    /// The configured UTC offset, parsed.
    pub fn offset(&self) -> AppResult<FixedOffset> {
        parse_offset(&self.utc_offset)
            .ok_or_else(|| AppError::InvalidOffset(self.utc_offset.clone()))
    }

    /// The configured default matching policy, parsed.
    pub fn policy(&self) -> AppResult<MatchPolicy> {
        MatchPolicy::parse(&self.match_policy)
            .ok_or_else(|| AppError::InvalidPolicy(self.match_policy.clone()))
    }
}
