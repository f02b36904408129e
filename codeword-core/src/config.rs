use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{CodewordError, Result};

pub const DEFAULT_CHANCE: f64 = 10.0;

/// Where the shipped config lives, relative to the install directory.
pub const DEFAULT_CONFIG_FILE: &str = "config/config.json";

/// `base/config/config.json` if it exists.
pub fn find_default_config(base: &Path) -> Option<PathBuf> {
    let path = base.join(DEFAULT_CONFIG_FILE);
    path.is_file().then_some(path)
}

/// Contents of `config/config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodewordConfig {
    /// Percentage (0-100) used to scale the injected note weight.
    pub chance: f64,
}

impl Default for CodewordConfig {
    fn default() -> Self {
        Self {
            chance: DEFAULT_CHANCE,
        }
    }
}

impl CodewordConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let config: CodewordConfig =
            serde_json::from_str(&data).map_err(|source| CodewordError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        config.check()?;
        Ok(config)
    }

    /// Non-finite values are rejected; anything else is accepted, with a
    /// warning when it falls outside 0-100.
    pub fn check(&self) -> Result<()> {
        if !self.chance.is_finite() {
            return Err(CodewordError::Config(format!(
                "chance must be a finite number, got {}",
                self.chance
            )));
        }
        if !(0.0..=100.0).contains(&self.chance) {
            log::warn!(
                "chance {} is outside 0-100; note weights will scale accordingly",
                self.chance
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_chance_uses_default() {
        let config: CodewordConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.chance, DEFAULT_CHANCE);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chance": 25}}"#).unwrap();
        let config = CodewordConfig::load(file.path()).unwrap();
        assert_eq!(config.chance, 25.0);
    }

    #[test]
    fn out_of_range_chance_is_accepted() {
        let config = CodewordConfig { chance: 150.0 };
        assert!(config.check().is_ok());
        let config = CodewordConfig { chance: -5.0 };
        assert!(config.check().is_ok());
    }

    #[test]
    fn finds_shipped_config_under_base() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(find_default_config(tmp.path()), None);

        let path = tmp.path().join("config").join("config.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"chance": 30}"#).unwrap();

        assert_eq!(find_default_config(tmp.path()), Some(path.clone()));
        assert_eq!(CodewordConfig::load(&path).unwrap().chance, 30.0);
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chance": "lots"}}"#).unwrap();
        match CodewordConfig::load(file.path()) {
            Err(CodewordError::Json { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected json error, got {other:?}"),
        }
    }
}
