//! Error types for locator parsing and catalog loading.

// Fields are read by the derive macros.
#![allow(unused_assignments)]

use std::num::ParseIntError;

use miette::Diagnostic;
use thiserror::Error;

use crate::properties::PropertyKey;

/// Result type for locator parsing.
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while parsing a connection locator.
///
/// Offsets are byte offsets into the locator.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum LocatorError {
    /// The locator does not start with `jdbc:`.
    #[error("expected scheme `jdbc`, found `{found}`")]
    #[diagnostic(code(jtds::locator::missing_scheme))]
    MissingScheme { found: String, offset: usize },

    /// The scheme is not followed by `jtds:`.
    #[error("expected sub-scheme `jtds`, found `{found}`")]
    #[diagnostic(code(jtds::locator::missing_subscheme))]
    MissingSubscheme { found: String, offset: usize },

    /// The server family is neither `sqlserver` nor `sybase`.
    #[error("unknown server type `{found}`")]
    #[diagnostic(
        code(jtds::locator::unknown_server_type),
        help("use `sqlserver` or `sybase`")
    )]
    UnknownServerType { found: String, offset: usize },

    /// Something other than `//` follows the server family.
    #[error("expected `//` before the server name, found `{found}`")]
    #[diagnostic(code(jtds::locator::unexpected_separator))]
    UnexpectedSeparator { found: String, offset: usize },

    /// No host in the locator and no server name in the overrides.
    #[error("server name is missing")]
    #[diagnostic(
        code(jtds::locator::missing_server_name),
        help("put a host after `//` or supply SERVERNAME in the properties")
    )]
    MissingServerName { offset: usize },

    /// The port is not a base-10 integer.
    #[error("invalid port number `{value}`")]
    #[diagnostic(code(jtds::locator::invalid_port))]
    InvalidPort {
        value: String,
        offset: usize,
        #[source]
        source: ParseIntError,
    },
}

/// Fieldless discriminant of [`LocatorError`], for logging and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocatorErrorKind {
    /// See [`LocatorError::MissingScheme`].
    MissingScheme,
    /// See [`LocatorError::MissingSubscheme`].
    MissingSubscheme,
    /// See [`LocatorError::UnknownServerType`].
    UnknownServerType,
    /// See [`LocatorError::UnexpectedSeparator`].
    UnexpectedSeparator,
    /// See [`LocatorError::MissingServerName`].
    MissingServerName,
    /// See [`LocatorError::InvalidPort`].
    InvalidPort,
}

impl LocatorErrorKind {
    /// Get the kind as a snake_case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingScheme => "missing_scheme",
            Self::MissingSubscheme => "missing_subscheme",
            Self::UnknownServerType => "unknown_server_type",
            Self::UnexpectedSeparator => "unexpected_separator",
            Self::MissingServerName => "missing_server_name",
            Self::InvalidPort => "invalid_port",
        }
    }
}

impl std::fmt::Display for LocatorErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LocatorError {
    /// Get the error kind.
    pub fn kind(&self) -> LocatorErrorKind {
        match self {
            Self::MissingScheme { .. } => LocatorErrorKind::MissingScheme,
            Self::MissingSubscheme { .. } => LocatorErrorKind::MissingSubscheme,
            Self::UnknownServerType { .. } => LocatorErrorKind::UnknownServerType,
            Self::UnexpectedSeparator { .. } => LocatorErrorKind::UnexpectedSeparator,
            Self::MissingServerName { .. } => LocatorErrorKind::MissingServerName,
            Self::InvalidPort { .. } => LocatorErrorKind::InvalidPort,
        }
    }

    /// Byte offset of the offending segment.
    pub fn offset(&self) -> usize {
        match self {
            Self::MissingScheme { offset, .. }
            | Self::MissingSubscheme { offset, .. }
            | Self::UnknownServerType { offset, .. }
            | Self::UnexpectedSeparator { offset, .. }
            | Self::MissingServerName { offset }
            | Self::InvalidPort { offset, .. } => *offset,
        }
    }
}

/// Errors raised when the property catalog resource is incomplete or unreadable.
///
/// These indicate a broken deployment rather than bad user input.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum CatalogError {
    /// A recognised key has no entry in the catalog.
    #[error("property catalog has no entry for `{0}`")]
    #[diagnostic(code(jtds::catalog::missing_key))]
    MissingKey(PropertyKey),

    /// The catalog names a key the driver does not recognise.
    #[error("property catalog contains unknown key `{0}`")]
    #[diagnostic(code(jtds::catalog::unknown_key))]
    UnknownKey(String),

    /// The catalog resource is not valid TOML or has the wrong shape.
    #[error("malformed property catalog: {0}")]
    #[diagnostic(code(jtds::catalog::malformed))]
    Malformed(String),

    /// The catalog file could not be read.
    #[error("failed to read property catalog {path}: {message}")]
    #[diagnostic(code(jtds::catalog::io_error))]
    Io { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LocatorError::UnknownServerType {
            found: "oracle".to_string(),
            offset: 10,
        };
        assert_eq!(err.to_string(), "unknown server type `oracle`");
        assert_eq!(err.kind(), LocatorErrorKind::UnknownServerType);
        assert_eq!(err.offset(), 10);
    }

    #[test]
    fn test_invalid_port_has_source() {
        let source = "abc".parse::<i32>().unwrap_err();
        let err = LocatorError::InvalidPort {
            value: "abc".to_string(),
            offset: 27,
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.kind().as_str(), "invalid_port");
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::MissingKey(PropertyKey::ServerName);
        assert_eq!(err.to_string(), "property catalog has no entry for `SERVERNAME`");
    }
}
