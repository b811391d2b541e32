//! TOML-based application configuration.
//!
//! Stores user preferences: sound/music settings, motion preferences and
//! the selected display language.
//!
//! Configuration is stored at `~/.config/licketysplit/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::shell::MusicMode;

/// Display language. Selection only - no translation layer sits behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Chinese,
    Japanese,
    Portuguese,
    Italian,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Chinese,
        Language::Japanese,
        Language::Portuguese,
        Language::Italian,
    ];

    /// Native-script label, as shown on the language screen.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Chinese => "中文",
            Language::Japanese => "日本語",
            Language::Portuguese => "Português",
            Language::Italian => "Italiano",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::English => "🇺🇸",
            Language::Spanish => "🇪🇸",
            Language::French => "🇫🇷",
            Language::German => "🇩🇪",
            Language::Chinese => "🇨🇳",
            Language::Japanese => "🇯🇵",
            Language::Portuguese => "🇧🇷",
            Language::Italian => "🇮🇹",
        }
    }

    /// Parse either the kebab-case config value or the native label.
    pub fn parse(s: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| {
            l.label().eq_ignore_ascii_case(s)
                || serde_json::to_value(l)
                    .ok()
                    .and_then(|v| v.as_str().map(|name| name.eq_ignore_ascii_case(s)))
                    .unwrap_or(false)
        })
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

/// Sound configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_volume")]
    pub volume: u32,
    #[serde(default)]
    pub music_mode: MusicMode,
    /// Path to a custom song file (used when music_mode = "custom-song").
    #[serde(default)]
    pub custom_song: Option<String>,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub animations: bool,
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/licketysplit/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub language: Language,
}

fn default_true() -> bool {
    true
}
fn default_volume() -> u32 {
    50
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 50,
            music_mode: MusicMode::Default,
            custom_song: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animations: true,
            reduced_motion: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sound: SoundConfig::default(),
            ui: UiConfig::default(),
            language: Language::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    fn parse(path: &std::path::Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LoadFailed`] if the config file exists but
    /// cannot be parsed, or a save error if the default config cannot be
    /// written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Self::parse(&path, &content)?),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SaveFailed`] if the config cannot be
    /// serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::path()?;
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.clone(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "sound.enabled" => self.sound.enabled.to_string(),
            "sound.volume" => self.sound.volume.to_string(),
            "sound.music_mode" => self.sound.music_mode.to_json_name(),
            "sound.custom_song" => self.sound.custom_song.clone().unwrap_or_default(),
            "ui.animations" => self.ui.animations.to_string(),
            "ui.reduced_motion" => self.ui.reduced_motion.to_string(),
            "language" => self.language.label().to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a config value by key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "sound.enabled" => self.sound.enabled = parse_value(key, value)?,
            "sound.volume" => self.sound.volume = parse_value(key, value)?,
            "sound.music_mode" => {
                self.sound.music_mode = MusicMode::from_json_name(value)
                    .ok_or_else(|| invalid(key, "expected default|custom-time|custom-song"))?
            }
            "sound.custom_song" => {
                self.sound.custom_song = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "ui.animations" => self.ui.animations = parse_value(key, value)?,
            "ui.reduced_motion" => self.ui.reduced_motion = parse_value(key, value)?,
            "language" => {
                self.language = Language::parse(value)
                    .ok_or_else(|| invalid(key, "not a supported language"))?
            }
            _ => return Err(Box::new(ConfigError::UnknownKey(key.to_string()))),
        }
        self.save()?;
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(
    key: &str,
    value: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    value
        .parse()
        .map_err(|_| invalid(key, &format!("cannot parse '{value}'")))
}

fn invalid(key: &str, message: &str) -> Box<dyn std::error::Error> {
    Box::new(ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    })
}

impl MusicMode {
    /// Kebab-case name matching the serde representation.
    pub fn to_json_name(self) -> String {
        match self {
            MusicMode::Default => "default".into(),
            MusicMode::CustomTime => "custom-time".into(),
            MusicMode::CustomSong => "custom-song".into(),
        }
    }

    pub fn from_json_name(s: &str) -> Option<Self> {
        match s {
            "default" => Some(MusicMode::Default),
            "custom-time" => Some(MusicMode::CustomTime),
            "custom-song" => Some(MusicMode::CustomSong),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert!(parsed.sound.enabled);
        assert_eq!(parsed.sound.volume, 50);
        assert_eq!(parsed.language, Language::English);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("sound.enabled").as_deref(), Some("true"));
        assert_eq!(cfg.get("sound.volume").as_deref(), Some("50"));
        assert_eq!(cfg.get("sound.music_mode").as_deref(), Some("default"));
        assert_eq!(cfg.get("language").as_deref(), Some("English"));
        assert!(cfg.get("sound.missing_key").is_none());
    }

    #[test]
    fn malformed_toml_is_a_load_error_naming_the_file() {
        let path = std::path::Path::new("/tmp/config.toml");
        let err = Config::parse(path, "sound = notatable").unwrap_err();
        match err {
            ConfigError::LoadFailed { path, .. } => {
                assert!(path.ends_with("config.toml"));
            }
            other => panic!("expected LoadFailed, got: {other}"),
        }
    }

    #[test]
    fn language_parse_accepts_label_and_config_name() {
        assert_eq!(Language::parse("Español"), Some(Language::Spanish));
        assert_eq!(Language::parse("spanish"), Some(Language::Spanish));
        assert_eq!(Language::parse("日本語"), Some(Language::Japanese));
        assert_eq!(Language::parse("Klingon"), None);
    }

    #[test]
    fn language_has_eight_options_with_flags() {
        assert_eq!(Language::ALL.len(), 8);
        for l in Language::ALL {
            assert!(!l.label().is_empty());
            assert!(!l.flag().is_empty());
        }
    }

    #[test]
    fn music_mode_names_roundtrip_serde() {
        for mode in [MusicMode::Default, MusicMode::CustomTime, MusicMode::CustomSong] {
            let name = mode.to_json_name();
            assert_eq!(MusicMode::from_json_name(&name), Some(mode));
            // Must agree with the serde representation.
            assert_eq!(
                serde_json::to_value(mode).unwrap(),
                serde_json::Value::String(name)
            );
        }
    }
}
