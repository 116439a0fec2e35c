//! Playback options with TOML file support.
//!
//! These control what happens around a camera run rather than the path
//! itself: fast-forwarding through the idle lead-in, exiting once the path
//! is done, and headless capture of the per-tic camera.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CmanError;

/// Host tics per second.
pub const TICRATE: u32 = 35;

/// Playback behaviour around a camera run. `#[serde(default)]` so partial
/// TOML files work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlaybackOptions {
    /// Fast-forward through the profile's delay.
    pub auto_skip: bool,
    /// Exit once the camera path completes.
    pub auto_exit: bool,
    /// Write per-tic camera records to this file. Implies `auto_skip` and
    /// `auto_exit`.
    pub dump: Option<PathBuf>,
    /// Upper bound on simulated tics for headless playback.
    pub max_tics: u32,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            auto_skip: false,
            auto_exit: false,
            dump: None,
            max_tics: TICRATE * 3600,
        }
    }
}

impl PlaybackOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CmanError> {
        let content = std::fs::read_to_string(path).map_err(CmanError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CmanError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CmanError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CmanError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CmanError::Io)?;
        }
        std::fs::write(path, content).map_err(CmanError::Io)
    }

    /// Options with implied flags applied: capturing skips the lead-in and
    /// exits at the end.
    #[must_use]
    pub fn resolved(&self) -> Self {
        let capturing = self.dump.is_some();
        Self {
            auto_skip: self.auto_skip || capturing,
            auto_exit: self.auto_exit || capturing,
            ..self.clone()
        }
    }
}
