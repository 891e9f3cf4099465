//! Driver configuration.
//!
//! Settings come from an optional TOML file, then environment variables:
//!
//! - `JTDS_LOGIN_TIMEOUT` - login timeout in seconds
//! - `JTDS_ERROR_REPORTING` - `detailed` or `legacy`
//! - `JTDS_CATALOG` - path to a replacement property catalog
//!
//! ```toml
//! login_timeout = 30
//! error_reporting = "legacy"
//! catalog = "/etc/jtds/properties.toml"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env::{EnvSource, StdEnvSource};
use crate::error::{DriverError, DriverResult};

/// Environment variable overriding [`DriverConfig::login_timeout`].
pub const ENV_LOGIN_TIMEOUT: &str = "JTDS_LOGIN_TIMEOUT";

/// Environment variable overriding [`DriverConfig::error_reporting`].
pub const ENV_ERROR_REPORTING: &str = "JTDS_ERROR_REPORTING";

/// Environment variable overriding [`DriverConfig::catalog`].
pub const ENV_CATALOG: &str = "JTDS_CATALOG";

/// How locator parse failures are reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorReporting {
    /// Report the specific parse failure.
    #[default]
    Detailed,
    /// Collapse every parse failure into a single "invalid URL" error.
    Legacy,
}

impl ErrorReporting {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "detailed" => Some(Self::Detailed),
            "legacy" => Some(Self::Legacy),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Legacy => "legacy",
        }
    }
}

/// Driver-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    /// Login timeout in seconds applied when a locator does not set one.
    #[serde(default)]
    pub login_timeout: u64,

    /// Error reporting mode.
    #[serde(default)]
    pub error_reporting: ErrorReporting,

    /// Replacement property catalog; the bundled one is used when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl DriverConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> DriverResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DriverError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> DriverResult<Self> {
        toml::from_str(content).map_err(|e| DriverError::Toml { source: e })
    }

    /// Default settings overridden by the process environment.
    pub fn from_env() -> DriverResult<Self> {
        Self::default().with_env(&StdEnvSource)
    }

    /// Apply overrides from an environment source.
    pub fn with_env<S: EnvSource>(mut self, env: &S) -> DriverResult<Self> {
        if let Some(value) = env.get(ENV_LOGIN_TIMEOUT) {
            self.login_timeout = value.trim().parse().map_err(|_| {
                DriverError::config(format!(
                    "{ENV_LOGIN_TIMEOUT} must be a whole number of seconds, got '{value}'"
                ))
            })?;
        }

        if let Some(value) = env.get(ENV_ERROR_REPORTING) {
            self.error_reporting = ErrorReporting::from_str(&value).ok_or_else(|| {
                DriverError::config(format!(
                    "{ENV_ERROR_REPORTING} must be 'detailed' or 'legacy', got '{value}'"
                ))
            })?;
        }

        if let Some(value) = env.get(ENV_CATALOG) {
            if !value.is_empty() {
                self.catalog = Some(PathBuf::from(value));
            }
        }

        Ok(self)
    }

    /// Set the login timeout in seconds.
    pub fn login_timeout(mut self, seconds: u64) -> Self {
        self.login_timeout = seconds;
        self
    }

    /// Set the error reporting mode.
    pub fn error_reporting(mut self, mode: ErrorReporting) -> Self {
        self.error_reporting = mode;
        self
    }

    /// Use a replacement property catalog.
    pub fn catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(path.into());
        self
    }

    /// The login timeout as a [`Duration`].
    pub fn login_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.login_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnvSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = DriverConfig::default();
        assert_eq!(config.login_timeout, 0);
        assert_eq!(config.error_reporting, ErrorReporting::Detailed);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_from_toml() {
        let config = DriverConfig::from_toml_str(
            r#"
            login_timeout = 30
            error_reporting = "legacy"
            catalog = "/etc/jtds/properties.toml"
            "#,
        )
        .unwrap();
        assert_eq!(config.login_timeout_duration(), Duration::from_secs(30));
        assert_eq!(config.error_reporting, ErrorReporting::Legacy);
        assert_eq!(config.catalog, Some(PathBuf::from("/etc/jtds/properties.toml")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = DriverConfig::from_toml_str("pool_size = 4").unwrap_err();
        assert!(matches!(err, DriverError::Toml { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env = MapEnvSource::new()
            .set(ENV_LOGIN_TIMEOUT, "45")
            .set(ENV_ERROR_REPORTING, "Legacy")
            .set(ENV_CATALOG, "/srv/catalog.toml");
        let config = DriverConfig::new().login_timeout(5).with_env(&env).unwrap();
        assert_eq!(config.login_timeout, 45);
        assert_eq!(config.error_reporting, ErrorReporting::Legacy);
        assert_eq!(config.catalog, Some(PathBuf::from("/srv/catalog.toml")));
    }

    #[test]
    fn test_env_invalid_values() {
        let env = MapEnvSource::new().set(ENV_LOGIN_TIMEOUT, "soon");
        assert!(matches!(
            DriverConfig::new().with_env(&env),
            Err(DriverError::Config(_))
        ));

        let env = MapEnvSource::new().set(ENV_ERROR_REPORTING, "verbose");
        assert!(matches!(
            DriverConfig::new().with_env(&env),
            Err(DriverError::Config(_))
        ));
    }

    #[test]
    fn test_empty_env_is_noop() {
        let config = DriverConfig::new()
            .login_timeout(7)
            .with_env(&MapEnvSource::new())
            .unwrap();
        assert_eq!(config, DriverConfig::new().login_timeout(7));
    }
}
