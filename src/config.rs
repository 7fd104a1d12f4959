use crate::feedback::FeedbackTimings;
use crate::keymap::Keymap;
use crate::quiz::QuestionBank;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Custom question bank file; the built-in bank is used when unset.
    /// `~` and paths relative to the config directory are expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_path: Option<String>,
    /// Redraw interval while idle or animating, in milliseconds
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    /// Key bindings
    #[serde(default)]
    pub keymap: Keymap,
    /// Answer feedback timings
    #[serde(default)]
    pub feedback: FeedbackTimings,
    /// Directory of the file this config was loaded from; relative paths
    /// resolve against it
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_frame_ms() -> u64 {
    33
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            bank_path: None,
            frame_ms: default_frame_ms(),
            keymap: Keymap::default(),
            feedback: FeedbackTimings::default(),
            base_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from file, writing the defaults if it doesn't exist
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            config.base_dir = config_path.parent().map(Path::to_path_buf);
            tracing::debug!("Loaded config from {:?}", config_path);
            Ok(config)
        } else {
            let config = Self {
                base_dir: config_path.parent().map(Path::to_path_buf),
                ..Self::default()
            };
            config.save(config_path)?;
            tracing::info!("Created default config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn theme_type(&self) -> ThemeType {
        self.theme.parse().unwrap_or_default()
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    /// Resolved path of the custom bank, if one is configured.
    ///
    /// Relative paths resolve against the loaded config file's directory,
    /// or the default config directory for a config built in memory.
    pub fn bank_file(&self) -> Option<PathBuf> {
        let path = self.bank_path.as_deref()?;
        Some(match &self.base_dir {
            Some(base) => crate::utils::expand_path_from(path, base),
            None => crate::utils::expand_path(path),
        })
    }

    /// Load the question bank this config points at.
    ///
    /// A configured bank that is missing or invalid is an error: the quiz
    /// refuses to start rather than silently falling back.
    pub fn load_bank(&self) -> Result<QuestionBank> {
        match self.bank_file() {
            Some(path) => QuestionBank::load(&path),
            None => QuestionBank::builtin().context("Built-in question bank is invalid"),
        }
    }
}
