//! # Configuration Module
//!
//! Data directory, corpus location and scoring parameters.
//!
//! ## Data Storage
//!
//! Chordclass keeps the user's corpus in the platform-standard data directory:
//! - Linux: `~/.local/share/chordclass/`
//! - macOS: `~/Library/Application Support/chordclass/`
//! - Windows: `%APPDATA%\chordclass\`
//!
//! An optional `config.json` in the same directory overrides the defaults.

use crate::algorithm::DEFAULT_SMOOTHING;
use crate::song::DifficultyScale;
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "chordclass";
const CONFIG_FILE: &str = "config.json";
const CORPUS_FILE: &str = "corpus.json";

/// Returns the platform-appropriate data directory for chordclass.
///
/// Nothing is created here; [`crate::song::Corpus::save`] creates the
/// directory the first time a corpus is written.
///
/// # Returns
///
/// `None` if the platform has no standard data directory.
pub fn get_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}

/// Default location of the training corpus.
///
/// ```no_run
/// let path = chordclass::config::get_corpus_path()?;
/// println!("Corpus location: {}", path.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Fails if the system data directory cannot be determined.
pub fn get_corpus_path() -> Result<PathBuf> {
    get_data_dir()
        .map(|dir| dir.join(CORPUS_FILE))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Could not determine system data directory. Pass --corpus or set CHORDCLASS_CORPUS."
            )
        })
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Path to the corpus JSON file
    pub corpus_path: PathBuf,
    /// Additive smoothing constant for scoring
    pub smoothing: f64,
    /// Difficulty names addressed by index when adding songs
    pub difficulties: DifficultyScale,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::defaults_in(get_data_dir().as_deref())
    }
}

impl RuntimeConfig {
    /// Defaults with the corpus stored under `app_dir`, or in the working
    /// directory when there is none. Never touches the filesystem.
    pub fn defaults_in(app_dir: Option<&Path>) -> Self {
        let corpus_path = app_dir.map_or_else(
            || PathBuf::from(CORPUS_FILE),
            |dir| dir.join(CORPUS_FILE),
        );
        Self {
            corpus_path,
            smoothing: DEFAULT_SMOOTHING,
            difficulties: DifficultyScale::default(),
        }
    }

    /// Load `config.json` from the data directory, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Fails if a config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match get_data_dir() {
            Some(app_dir) => Self::load_in(&app_dir),
            None => {
                debug!("No system data directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load `config.json` from `app_dir`, or defaults rooted at `app_dir`
    /// when there is no such file.
    ///
    /// # Errors
    ///
    /// Fails if a config file exists but cannot be read or parsed.
    pub fn load_in(app_dir: &Path) -> Result<Self> {
        let path = app_dir.join(CONFIG_FILE);
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::defaults_in(Some(app_dir)));
        }
        Self::load_from(&path)
    }

    /// Load configuration from `path`. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not valid JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Create configuration with an explicit corpus path
    pub fn with_corpus_path(corpus_path: PathBuf) -> Self {
        Self {
            corpus_path,
            ..Self::default()
        }
    }
}
