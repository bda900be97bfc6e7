use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::components::theme::{self, Paint};

/// Longest close delay accepted without a warning.
const MAX_CLOSE_DELAY_MS: u64 = 5_000;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub paint: PaintConfig,
    #[serde(default)]
    pub modal: ModalTimingConfig,
}

/// Shell colours
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaintConfig {
    /// Resting border of buttons and cards
    #[serde(default = "default_border")]
    pub border: String,
    /// Border while hovered
    #[serde(default = "default_border_highlight")]
    pub border_highlight: String,
    /// Background restored when the pointer leaves
    #[serde(default = "default_fill")]
    pub fill: String,
    /// Background while hovered
    #[serde(default = "default_fill_highlight")]
    pub fill_highlight: String,
    /// Border of modals, info popups and tags
    #[serde(default = "default_accent_border")]
    pub accent_border: String,
}

fn default_border() -> String {
    theme::DEFAULT_BORDER.to_string()
}

fn default_border_highlight() -> String {
    theme::HIGHLIGHT_BORDER.to_string()
}

fn default_fill() -> String {
    theme::DEFAULT_FILL.to_string()
}

fn default_fill_highlight() -> String {
    theme::HIGHLIGHT_FILL.to_string()
}

fn default_accent_border() -> String {
    theme::HIGHLIGHT_BORDER.to_string()
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            border: default_border(),
            border_highlight: default_border_highlight(),
            fill: default_fill(),
            fill_highlight: default_fill_highlight(),
            accent_border: default_accent_border(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ModalTimingConfig {
    /// Fade-out length before a closed modal is detached
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,
}

fn default_close_delay_ms() -> u64 {
    theme::CLOSE_DELAY.as_millis() as u64
}

impl Default for ModalTimingConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: default_close_delay_ms(),
        }
    }
}

/// A problem found by [`Config::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub message: String,
    /// Errors reject the whole config; warnings are only reported
    pub is_error: bool,
}

impl ConfigIssue {
    fn error(message: String) -> Self {
        Self {
            message,
            is_error: true,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            message,
            is_error: false,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{}: {}", level, self.message)
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let colors = [
            ("paint.border", &self.paint.border),
            ("paint.border_highlight", &self.paint.border_highlight),
            ("paint.fill", &self.paint.fill),
            ("paint.fill_highlight", &self.paint.fill_highlight),
            ("paint.accent_border", &self.paint.accent_border),
        ];
        for (key, value) in colors {
            if !value.starts_with('#') || parse_hex_color(value).is_none() {
                issues.push(ConfigIssue::error(format!(
                    "{} = {:?} is not a #RRGGBB or #RRGGBBAA colour",
                    key, value
                )));
            }
        }

        let delay = self.modal.close_delay_ms;
        if delay == 0 {
            issues.push(ConfigIssue::warning(
                "modal.close_delay_ms = 0 skips the close animation".to_string(),
            ));
        } else if delay > MAX_CLOSE_DELAY_MS {
            issues.push(ConfigIssue::warning(format!(
                "modal.close_delay_ms = {} keeps closed modals on screen for over {}s",
                delay,
                MAX_CLOSE_DELAY_MS / 1000
            )));
        }

        issues
    }

    /// The palette components are built with.
    pub fn paint(&self) -> Paint {
        Paint {
            border_default: self.paint.border.clone(),
            border_highlight: self.paint.border_highlight.clone(),
            fill_default: self.paint.fill.clone(),
            fill_highlight: self.paint.fill_highlight.clone(),
            accent_border: self.paint.accent_border.clone(),
            close_delay: Duration::from_millis(self.modal.close_delay_ms),
        }
    }
}

/// Parse hex color string to RGBA tuple (0.0-1.0 range)
pub fn parse_hex_color(hex: &str) -> Option<(f64, f64, f64, f64)> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| -> Option<f64> {
        Some(u8::from_str_radix(&hex[range], 16).ok()? as f64 / 255.0)
    };

    match hex.len() {
        6 => Some((channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0)),
        8 => Some((
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ffffff"), Some((1.0, 1.0, 1.0, 1.0)));
        assert_eq!(parse_hex_color("#000000"), Some((0.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_hex_color("#ff0000"), Some((1.0, 0.0, 0.0, 1.0)));
        assert_eq!(
            parse_hex_color("#00ff0080"),
            Some((0.0, 1.0, 0.0, 0.5019607843137255))
        );
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_defaults_match_builtin_paint() {
        let config = Config::from_toml_str("").expect("empty config parses");
        assert_eq!(config, Config::default());
        assert_eq!(config.paint(), Paint::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r##"
            [paint]
            accent_border = "#ff8800"

            [modal]
            close_delay_ms = 350
            "##,
        )
        .expect("valid config");

        assert_eq!(config.paint.accent_border, "#ff8800");
        assert_eq!(config.paint.border, "#333333");
        let paint = config.paint();
        assert_eq!(paint.close_delay, Duration::from_millis(350));
        assert_eq!(paint.accent_border, "#ff8800");
    }

    #[test]
    fn test_validate_reports_bad_colour_and_delay() {
        let mut config = Config::default();
        config.paint.fill = "navy".to_string();
        config.modal.close_delay_ms = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].is_error);
        assert!(issues[0].message.contains("paint.fill"));
        assert!(!issues[1].is_error);
        assert!(issues[1].to_string().starts_with("warning: "));

        config.modal.close_delay_ms = 60_000;
        assert!(config.validate().iter().any(|i| !i.is_error));
    }

    #[test]
    fn test_unknown_types_are_rejected() {
        assert!(Config::from_toml_str("[modal]\nclose_delay_ms = \"fast\"").is_err());
    }
}
