//! JSON color configuration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::Color;

/// Errors raised while loading the color config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),
}

/// One named base color with its light and dark values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    /// Light-mode base color.
    pub default: String,
    /// Dark-mode base color.
    pub dark: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub colors: Vec<ColorEntry>,
}

/// Both `{"colors": [...]}` and a bare `[...]` are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawConfig {
    Wrapped { colors: Vec<ColorEntry> },
    Bare(Vec<ColorEntry>),
}

impl Config {
    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), colors = config.colors.len(), "loaded config");
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let colors = match serde_json::from_str(text)? {
            RawConfig::Wrapped { colors } => colors,
            RawConfig::Bare(colors) => colors,
        };
        let config = Self { colors };
        config.validate()?;
        Ok(config)
    }

    /// Collect every problem rather than stopping at the first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        if self.colors.is_empty() {
            errors.push("no colors defined".to_string());
        }

        let mut seen = HashSet::new();
        for (i, entry) in self.colors.iter().enumerate() {
            if !is_valid_name(&entry.name) {
                errors.push(format!(
                    "colors[{i}]: invalid name {:?} (use letters, digits, '-' or '_', not starting with a digit)",
                    entry.name
                ));
            } else if !seen.insert(entry.name.as_str()) {
                errors.push(format!("colors[{i}]: duplicate name {:?}", entry.name));
            }
            for (field, value) in [("default", &entry.default), ("dark", &entry.dark)] {
                if let Err(e) = Color::from_hex(value) {
                    errors.push(format!("colors[{i}].{field}: {e}"));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '-' || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_form() {
        let config = Config::from_json(
            r##"{"colors": [{"name": "primary", "default": "#3366cc", "dark": "#1a2b3c"}]}"##,
        )
        .unwrap();
        assert_eq!(config.colors.len(), 1);
        assert_eq!(config.colors[0].name, "primary");
        assert_eq!(config.colors[0].dark, "#1a2b3c");
    }

    #[test]
    fn parses_bare_array() {
        let config = Config::from_json(
            r##"[{"name": "a", "default": "#000000", "dark": "#ffffff"},
                {"name": "b", "default": "#ff0000", "dark": "#00ff00"}]"##,
        )
        .unwrap();
        let names: Vec<&str> = config.colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn missing_field_is_parse_error() {
        let err = Config::from_json(r##"[{"name": "a", "default": "#000000"}]"##).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_list_rejected() {
        let err = Config::from_json(r#"{"colors": []}"#).unwrap_err();
        assert!(err.to_string().contains("no colors defined"));
    }

    #[test]
    fn collects_all_validation_errors() {
        let err = Config::from_json(
            r##"[{"name": "a", "default": "#zzzzzz", "dark": "#fff"},
                {"name": "a", "default": "#000000", "dark": "#000000"},
                {"name": "9lives", "default": "#000000", "dark": "#000000"}]"##,
        )
        .unwrap_err();
        let errors = match err {
            ConfigError::Validation(errors) => errors,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(errors.len(), 4, "{errors:?}");
        assert!(errors[0].starts_with("colors[0].default"));
        assert!(errors[1].starts_with("colors[0].dark"));
        assert!(errors[2].contains("duplicate name"));
        assert!(errors[3].contains("invalid name"));
    }

    #[test]
    fn name_rules() {
        assert!(is_valid_name("brand-primary"));
        assert!(is_valid_name("_x1"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("1a"));
        assert!(!is_valid_name("has space"));
    }

    #[test]
    fn load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/colors.json")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn load_from_disk() {
        let dir = std::env::temp_dir().join("tailshade-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("colors.json");
        std::fs::write(
            &path,
            r##"{"colors": [{"name": "gray", "default": "#808080", "dark": "#202020"}]}"##,
        )
        .unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.colors[0].default, "#808080");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
