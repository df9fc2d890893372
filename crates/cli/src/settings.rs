use std::{fs, path::Path};

use anyhow::Context;
use linfit_solvers::scan::{Config, ConfigError};
use serde::Deserialize;

/// Contents of a `--config` TOML file.
///
/// ```toml
/// [scan]
/// tie_tol = 1e-9
/// max_candidates = 1_000_000
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub scan: ScanSettings,
}

/// The `[scan]` table. Unset values fall back to [`Config::default`].
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScanSettings {
    pub tie_tol: Option<f64>,
    pub max_candidates: Option<u64>,
}

impl Settings {
    /// Reads and parses a settings file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parses settings from TOML text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Builds the scan config. Explicit arguments override file values.
    pub fn config(
        &self,
        tie_tol: Option<f64>,
        max_candidates: Option<u64>,
    ) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        if let Some(tie_tol) = tie_tol.or(self.scan.tie_tol) {
            config = config.with_tie_tol(tie_tol)?;
        }
        if let Some(max_candidates) = max_candidates.or(self.scan.max_candidates) {
            config = config.with_max_candidates(max_candidates)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = Settings::parse("").expect("empty is valid");

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.config(None, None), Ok(Config::default()));
    }

    #[test]
    fn reads_scan_table() {
        let settings = Settings::parse("[scan]\ntie_tol = 1e-9\nmax_candidates = 500\n")
            .expect("valid settings");

        let config = settings.config(None, None).expect("valid config");

        assert_eq!(config.tie_tol(), 1e-9);
        assert_eq!(config.max_candidates(), 500);
    }

    #[test]
    fn arguments_override_file() {
        let settings =
            Settings::parse("[scan]\nmax_candidates = 500\n").expect("valid settings");

        let config = settings.config(Some(0.5), Some(10)).expect("valid config");

        assert_eq!(config.tie_tol(), 0.5);
        assert_eq!(config.max_candidates(), 10);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Settings::parse("[scan]\ntolerance = 1.0\n").is_err());
    }

    #[test]
    fn invalid_values_surface_config_errors() {
        let settings = Settings::parse("[scan]\nmax_candidates = 0\n").expect("valid toml");
        assert_eq!(settings.config(None, None), Err(ConfigError::MaxCandidates));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Settings::load(Path::new("/nonexistent/linfit.toml"))
            .expect_err("file does not exist");
        assert!(err.to_string().contains("failed to read config file"));
    }
}
