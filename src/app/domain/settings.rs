use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::phone::GroupingRule;
use crate::app::infrastructure::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Digits per group in phone fields
    #[serde(default = "default_phone_group_size")]
    pub phone_group_size: usize,

    /// Character placed between groups
    #[serde(default = "default_phone_separator")]
    pub phone_separator: char,
}

const MIN_FONT_SIZE: i32 = 8;
const MAX_FONT_SIZE: i32 = 72;

fn default_font_size() -> u32 {
    16
}

fn default_phone_group_size() -> usize {
    GroupingRule::default().group_size
}

fn default_phone_separator() -> char {
    GroupingRule::default().separator
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            font_size: default_font_size(),
            phone_group_size: default_phone_group_size(),
            phone_separator: default_phone_separator(),
        }
    }
}

impl AppSettings {
    /// Grouping rule described by these settings.
    ///
    /// A separator that is itself a digit would be swallowed by the next
    /// pass of the digit filter, so it is rejected along with empty groups.
    pub fn grouping_rule(&self) -> Result<GroupingRule> {
        if self.phone_group_size == 0 {
            return Err(AppError::Settings(
                "phone_group_size must be at least 1".to_string(),
            ));
        }
        if self.phone_separator.is_ascii_digit() {
            return Err(AppError::Settings(format!(
                "phone_separator cannot be a digit (got '{}')",
                self.phone_separator
            )));
        }
        Ok(GroupingRule {
            group_size: self.phone_group_size,
            separator: self.phone_separator,
        })
    }

    /// Grouping rule, falling back to the default when the settings are invalid.
    pub fn grouping_rule_or_default(&self) -> GroupingRule {
        self.grouping_rule().unwrap_or_else(|e| {
            tracing::warn!("{}. Using default grouping.", e);
            GroupingRule::default()
        })
    }

    /// Font size as FLTK wants it, clamped to a usable range.
    pub fn font_size_px(&self) -> i32 {
        i32::try_from(self.font_size)
            .unwrap_or(MAX_FONT_SIZE)
            .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let default = Self::default();
                if let Err(e) = default.save_to(config_path) {
                    tracing::debug!("Could not write default settings: {}", e);
                }
                default
            }
            Err(e) => {
                // Unreadable or not UTF-8; leave the file for the user to fix
                tracing::warn!("Failed to read settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("phonepad");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.phone_group_size, 2);
        assert_eq!(settings.phone_separator, ' ');
        assert_eq!(settings.grouping_rule().unwrap(), GroupingRule::default());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"theme_mode": "Dark"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.phone_group_size, 2); // Should use default
    }

    #[test]
    fn test_invalid_group_size() {
        let settings = AppSettings {
            phone_group_size: 0,
            ..Default::default()
        };
        assert!(matches!(settings.grouping_rule(), Err(AppError::Settings(_))));
        assert_eq!(settings.grouping_rule_or_default(), GroupingRule::default());
    }

    #[test]
    fn test_digit_separator_rejected() {
        let settings = AppSettings {
            phone_separator: '7',
            ..Default::default()
        };
        let err = settings.grouping_rule().unwrap_err();
        assert!(err.to_string().contains("cannot be a digit"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
            phone_group_size: 3,
            phone_separator: '.',
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_non_utf8_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let original: &[u8] = b"{\"font_size\": 22, \"theme_mode\": \"Dark\", \"note\": \"caf\xe9\"}";
        fs::write(&path, original).unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_font_size_px_clamped() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.font_size_px(), 16);
        settings.font_size = u32::MAX;
        assert_eq!(settings.font_size_px(), MAX_FONT_SIZE);
        settings.font_size = 0;
        assert_eq!(settings.font_size_px(), MIN_FONT_SIZE);
    }

    #[test]
    fn test_load_corrupt_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}
