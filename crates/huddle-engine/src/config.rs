//! Configuration types for the huddle engine.
//!
//! This module defines the configuration schema for huddle: the simulated
//! assistant, drawer animation timing, and runtime settings for the TUI.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Placeholder body for simulated assistant replies.
pub const DEFAULT_PLACEHOLDER_REPLY: &str = "That's a great question! I'm processing your request and will provide a detailed response shortly. This is a demo response to show the chat functionality.";

/// Main configuration for huddle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delay before a simulated reply is appended, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Body of every simulated assistant reply.
    #[serde(default = "default_placeholder_reply")]
    pub placeholder_reply: String,

    /// Display name of the assistant in the chat header.
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Subtitle shown under the assistant name.
    #[serde(default = "default_assistant_tagline")]
    pub assistant_tagline: String,

    /// Duration of the drawer open/close animation, in milliseconds.
    #[serde(default = "default_drawer_animation_ms")]
    pub drawer_animation_ms: u64,

    /// Overlay opacity when the drawer is fully open (0.0 - 1.0).
    #[serde(default = "default_overlay_opacity")]
    pub overlay_opacity: f32,

    /// Suggested prompts are shown while the transcript has at most this many messages.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// UI tick rate in milliseconds (drives animations and reply delivery).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log file used while the TUI owns the terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_reply_delay_ms() -> u64 {
    1000
}

fn default_placeholder_reply() -> String {
    DEFAULT_PLACEHOLDER_REPLY.into()
}

fn default_assistant_name() -> String {
    "AI Assistant".into()
}

fn default_assistant_tagline() -> String {
    "Always here to help".into()
}

fn default_drawer_animation_ms() -> u64 {
    300
}

fn default_overlay_opacity() -> f32 {
    0.5
}

fn default_suggestion_limit() -> usize {
    4
}

fn default_tick_rate_ms() -> u64 {
    50
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.overlay_opacity) {
            return Err(ConfigError::Invalid(format!(
                "overlay_opacity must be between 0 and 1, got {}",
                self.overlay_opacity
            )));
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("tick_rate_ms must be positive".into()));
        }
        Ok(())
    }

    /// Reply delay as a [`Duration`].
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Drawer animation duration as a [`Duration`].
    pub fn drawer_animation(&self) -> Duration {
        Duration::from_millis(self.drawer_animation_ms)
    }

    /// Tick rate as a [`Duration`].
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Log file path, falling back to `huddle.log` in the temp directory.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("huddle.log"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            placeholder_reply: default_placeholder_reply(),
            assistant_name: default_assistant_name(),
            assistant_tagline: default_assistant_tagline(),
            drawer_animation_ms: default_drawer_animation_ms(),
            overlay_opacity: default_overlay_opacity(),
            suggestion_limit: default_suggestion_limit(),
            tick_rate_ms: default_tick_rate_ms(),
            log_file: None,
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A value is outside its allowed range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
