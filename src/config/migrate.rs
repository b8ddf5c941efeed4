//! Config-file upkeep: older installs predate some keys, and loading fails
//! hard only on malformed YAML, so missing keys are detected and filled here.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;

const KNOWN_KEYS: [&str; 4] = ["database", "utc_offset", "port", "match_policy"];

/// Keys the on-disk file does not define. Empty when the file is current
/// (or does not exist yet, since load() then uses full defaults).
pub fn missing_fields() -> AppResult<Vec<&'static str>> {
    let path = Config::config_file();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)?;
    let doc: Value = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;
    let map = match doc.as_mapping() {
        Some(m) => m,
        None => return Ok(KNOWN_KEYS.to_vec()),
    };
    Ok(KNOWN_KEYS
        .iter()
        .filter(|k| !map.contains_key(&Value::String((**k).to_string())))
        .copied()
        .collect())
}

/// Rewrite the config file with defaults filled in for any missing keys.
/// Returns the keys that were added.
pub fn fill_missing() -> AppResult<Vec<&'static str>> {
    let missing = missing_fields()?;
    if missing.is_empty() {
        return Ok(missing);
    }
    // load() already applies serde defaults for absent keys
    let cfg = Config::load()?;
    cfg.save()?;
    Ok(missing)
}
