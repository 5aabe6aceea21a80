//! Session settings persistence
//!
//! Saves and loads [`SessionSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! Settings are stored in `session_settings.json` in the user's configuration
//! directory, e.g. `~/.config/chess-legality/session_settings.json` on Linux.
//! Falls back to the current directory if no config dir can be resolved.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: a missing or unreadable file logs and
//! yields defaults. Explicit paths go through [`load_from`] and [`save_to`],
//! which return [`CoreResult`].

use crate::core::error::CoreResult;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "session_settings.json";

/// Polling cadence and AI hint timing for a board session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// How often the game snapshot is refetched
    pub game_poll_interval_ms: u64,
    /// How often the AI-turn flag is refetched (AI games only)
    pub ai_flag_poll_interval_ms: u64,
    /// How long the "AI is thinking" hint survives without a flag change
    pub ai_thinking_grace_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            game_poll_interval_ms: 1000,
            ai_flag_poll_interval_ms: 2000,
            ai_thinking_grace_ms: 2000,
        }
    }
}

impl SessionSettings {
    /// Snapshot polling period, never shorter than 1 ms
    pub fn game_poll_interval(&self) -> Duration {
        Duration::from_millis(self.game_poll_interval_ms.max(1))
    }

    /// AI-flag polling period, never shorter than 1 ms
    pub fn ai_flag_poll_interval(&self) -> Duration {
        Duration::from_millis(self.ai_flag_poll_interval_ms.max(1))
    }

    pub fn ai_thinking_grace(&self) -> Duration {
        Duration::from_millis(self.ai_thinking_grace_ms)
    }
}

/// Resolve the default settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chess-legality") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from `path`
pub fn load_from(path: &Path) -> CoreResult<SessionSettings> {
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&contents)?;
    Ok(settings)
}

/// Write settings to `path` as pretty JSON, creating parent directories
pub fn save_to(settings: &SessionSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

/// Load settings from `path`, or the default location
///
/// Falls back to [`SessionSettings::default`] on any failure.
pub fn load_settings(path: Option<&Path>) -> SessionSettings {
    let settings_path = path.map(Path::to_path_buf).unwrap_or_else(settings_path);

    if !settings_path.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            settings_path
        );
        return SessionSettings::default();
    }

    match load_from(&settings_path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", settings_path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                settings_path, e
            );
            SessionSettings::default()
        }
    }
}
