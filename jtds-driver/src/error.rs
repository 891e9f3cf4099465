//! Driver error types.

use jtds_url::{CatalogError, LocatorError, LocatorErrorKind};
use thiserror::Error;

/// SQLSTATE reported for unusable connection locators.
pub const SQLSTATE_BAD_LOCATOR: &str = "08001";

/// SQLSTATE reported for every other driver failure.
pub const SQLSTATE_GENERAL: &str = "HY000";

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// Errors that can occur during driver operations.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The connection locator could not be parsed.
    #[error("invalid connection locator: {0}")]
    Locator(#[from] LocatorError),

    /// The connection locator could not be parsed (legacy reporting).
    ///
    /// `url` holds the locator up to its first `;` so that property values
    /// such as passwords never end up in messages.
    #[error("invalid URL: {url}")]
    BadUrl {
        url: String,
        kind: LocatorErrorKind,
    },

    /// The property catalog is missing or incomplete.
    #[error("property catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error reading a file.
    #[error("failed to read file: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML")]
    Toml {
        #[source]
        source: toml::de::Error,
    },
}

impl DriverError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a legacy bad-URL error from a locator.
    pub fn bad_url(locator: &str, kind: LocatorErrorKind) -> Self {
        let url = match locator.split_once(';') {
            Some((head, _)) => head,
            None => locator,
        };
        Self::BadUrl {
            url: url.to_string(),
            kind,
        }
    }

    /// Check if this error rejects the connection locator.
    pub fn is_locator_error(&self) -> bool {
        matches!(self, Self::Locator(_) | Self::BadUrl { .. })
    }

    /// The parse failure behind a locator error, in either reporting mode.
    pub fn locator_kind(&self) -> Option<LocatorErrorKind> {
        match self {
            Self::Locator(err) => Some(err.kind()),
            Self::BadUrl { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// SQLSTATE code for this error.
    pub fn sql_state(&self) -> &'static str {
        if self.is_locator_error() {
            SQLSTATE_BAD_LOCATOR
        } else {
            SQLSTATE_GENERAL
        }
    }
}
