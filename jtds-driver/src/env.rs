//! Where `JTDS_*` settings are read from.
//!
//! [`DriverConfig::with_env`](crate::DriverConfig::with_env) and
//! [`LogSettings::from_env`](crate::logging::LogSettings::from_env) take an
//! [`EnvSource`]; production code passes [`StdEnvSource`], tests pass a
//! [`MapEnvSource`] instead of touching the process environment.

use std::collections::HashMap;

/// Lookup of `JTDS_*` variables by name.
pub trait EnvSource: Send + Sync {
    /// Value of `name`, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Whether `name` is set, even to an empty value.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed set of variables, for tests and embedding hosts.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Empty source: every `JTDS_*` lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
