use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::Action;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub automation: AutomationConfig,
    #[serde(default)]
    pub ignore: IgnoreConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub process: String,
    pub bundle: String,
    pub controls_menu: u32,
    pub app_menu: u32,
    pub quit_item: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            process: "NeteaseMusic".to_string(),
            bundle: "/Applications/NeteaseMusic.app".to_string(),
            controls_menu: 4,
            app_menu: 2,
            quit_item: 11,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub play: String,
    pub pause: String,
    pub next: String,
    pub previous: String,
    pub like: String,
    pub dislike: String,
    pub toggle_lyrics: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            play: "Play".to_string(),
            pause: "Pause".to_string(),
            next: "Next".to_string(),
            previous: "Previous".to_string(),
            like: "Like".to_string(),
            dislike: "Dislike".to_string(),
            toggle_lyrics: "Show/Hide Lyrics".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureMode {
    #[default]
    LastChunk,
    Full,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationConfig {
    pub interpreter: String,
    pub timeout_ms: u64,
    pub capture: CaptureMode,
    pub process_not_found: Vec<String>,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            interpreter: "osascript".to_string(),
            timeout_ms: 1000,
            capture: CaptureMode::LastChunk,
            process_not_found: vec![
                "Can’t get process".to_string(),
                "Can't get process".to_string(),
            ],
        }
    }
}

impl AutomationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    pub previous_track: Vec<String>,
    pub next_track: Vec<String>,
    pub like: Vec<String>,
    pub dislike: Vec<String>,
    pub play_pause: Vec<String>,
    pub toggle_lyrics: Vec<String>,
    pub exit: Vec<String>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            previous_track: Vec::new(),
            next_track: Vec::new(),
            like: vec!["already liked".to_string()],
            dislike: vec!["not liked".to_string()],
            play_pause: Vec::new(),
            toggle_lyrics: Vec::new(),
            exit: Vec::new(),
        }
    }
}

impl IgnoreConfig {
    pub fn for_action(&self, action: Action) -> &[String] {
        match action {
            Action::PreviousTrack => &self.previous_track,
            Action::NextTrack => &self.next_track,
            Action::Like => &self.like,
            Action::Dislike => &self.dislike,
            Action::TogglePlayPause => &self.play_pause,
            Action::ToggleLyrics => &self.toggle_lyrics,
            Action::Exit => &self.exit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    pub enabled: bool,
    pub title: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "NeteaseMusic".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("neteasectl")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
            Self::parse(&content)
        } else {
            Ok(Config::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize config")
    }

    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).with_context(|| {
                format!(
                    "Failed to create config directory: {}",
                    config_dir.display()
                )
            })?;
        }

        fs::write(&config_path, self.to_toml()?)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(config_path)
    }
}
