use crate::unit::UnitKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "scopeunit.toml";

/// Command line defaults, overridden by explicit flags
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Unit kind used when --unit is not given
    #[serde(default)]
    pub unit: Option<UnitKind>,

    // Report errors instead of falling back to the sentinel / zero
    #[serde(default)]
    pub strict: bool,

    // Emit JSON instead of plain lines
    #[serde(default)]
    pub json: bool,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `path` if given, else the default file if it exists, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        match path {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::load_from_file(path)
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                log::debug!("Loading config from {}", DEFAULT_CONFIG_FILE);
                Self::load_from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::empty()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() {
        let config = Config::load_from_str(
            r#"
unit = "hz"
strict = true
json = true
"#,
        )
        .unwrap();
        assert_eq!(config.unit, Some(UnitKind::Hertz));
        assert!(config.strict);
        assert!(config.json);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config, Config::empty());
        assert_eq!(config.unit, None);
        assert!(!config.strict);
    }

    #[test]
    fn test_kind_name_is_case_insensitive() {
        let config = Config::load_from_str(r#"unit = "Volts""#).unwrap();
        assert_eq!(config.unit, Some(UnitKind::Volts));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Config::load_from_str(r#"unit = "furlongs""#).is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(Config::load_from_str("precision = 5").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("scopeunit-does-not-exist.toml");
        assert!(Config::discover(Some(&path)).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("scopeunit-{}.toml", std::process::id()));
        std::fs::write(&path, "unit = \"ps\"\n").unwrap();
        let config = Config::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.unit, Some(UnitKind::Picoseconds));
    }
}
