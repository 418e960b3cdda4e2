// config.rs - Detector configuration, passed explicitly into the constructor
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for one detector instance. The target phrase is immutable
/// for the life of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Phrase to detect, matched as a case-insensitive substring.
    pub target_phrase: String,
    /// Language tag handed to the speech backend (e.g. "en-US").
    pub language: String,
    /// Haptic pulse length on detection, in milliseconds.
    pub vibration_ms: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            target_phrase: "Adil".to_string(),
            language: "en-US".to_string(),
            vibration_ms: 500,
        }
    }
}

impl DetectorConfig {
    /// Loads configuration from a JSON file. Missing fields fall back to
    /// the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid config in {}", path.display()))
    }

    pub fn vibration(&self) -> Duration {
        Duration::from_millis(self.vibration_ms)
    }
}
