use std::fs;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use tracing::debug;

use crate::model::config::Config;

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "GETDONE_CONFIG";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid color for ui.colors.{key}: {value} (expected #RRGGBB)")]
    InvalidColor { key: String, value: String },
    #[error("invalid ui.date_format: {0}")]
    InvalidDateFormat(String),
}

/// Resolve the config path: explicit flag first, then the environment.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
}

/// Load the config. No path means defaults; a named file must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        debug!("no config file, using defaults");
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = parse_config(&text).map_err(|e| match e {
        ConfigError::ParseError { source, .. } => ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parse and validate config text
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: PathBuf::new(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    for (key, value) in &config.ui.colors {
        if crate::tui::theme::parse_hex_color(value).is_none() {
            return Err(ConfigError::InvalidColor {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    if StrftimeItems::new(&config.ui.date_format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidDateFormat(config.ui.date_format.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::FilterMode;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"default_filter = "uncompleted"

[ui]
date_format = "%Y-%m-%d"
show_key_hints = false

[ui.colors]
background = "#000000"
highlight = "#FF8800"

[log]
level = "debug"
file = "/tmp/getdone-test.log"
"##
    }

    #[test]
    fn empty_text_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_filter, FilterMode::All);
        assert_eq!(config.ui.date_format, "%-m/%-d/%Y");
        assert!(config.ui.show_key_hints);
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.file, None);
    }

    #[test]
    fn parse_full_config() {
        let config = parse_config(sample_config()).unwrap();
        assert_eq!(config.default_filter, FilterMode::Uncompleted);
        assert_eq!(config.ui.date_format, "%Y-%m-%d");
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FF8800");
        assert_eq!(config.log.level, "debug");
        assert_eq!(
            config.log.file,
            Some(PathBuf::from("/tmp/getdone-test.log"))
        );
    }

    #[test]
    fn unknown_filter_is_rejected() {
        let err = parse_config("default_filter = \"done\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = parse_config("[ui.colors]\ntext = \"red\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { ref key, .. } if key == "text"));
    }

    #[test]
    fn bad_date_format_is_rejected() {
        let err = parse_config("[ui]\ndate_format = \"%Q\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDateFormat(_)));
    }

    #[test]
    fn load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.default_filter, FilterMode::Uncompleted);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn parse_error_names_the_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.toml");
        fs::write(&path, "[ui\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), Config::default());
    }

    #[test]
    fn explicit_path_wins() {
        let p = PathBuf::from("/etc/getdone.toml");
        assert_eq!(config_path(Some(&p)), Some(p));
    }
}
