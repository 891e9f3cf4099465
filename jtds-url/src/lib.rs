//! # jtds-url
//!
//! Connection locator parsing for the jTDS driver (Microsoft SQL Server and
//! Sybase ASE over TDS).
//!
//! This crate provides:
//! - A tokenizer and parser for `jdbc:jtds:` locators
//! - Family- and protocol-aware default connection properties
//! - A property catalog with display names and descriptions
//! - Property descriptors for introspection tooling
//!
//! ## Example
//!
//! ```rust
//! use jtds_url::{ConnectionProperties, PropertyCatalog, PropertyKey, describe, parse_locator};
//!
//! let overrides = ConnectionProperties::new().with("user", "sa");
//! let props = parse_locator("jdbc:jtds:sybase://dbhost/sales;TDS=5.0", &overrides)?;
//!
//! assert_eq!(props.get_key(PropertyKey::ServerType), Some("SYBASE"));
//! assert_eq!(props.get_key(PropertyKey::PortNumber), Some("7100"));
//! assert_eq!(props.get_key(PropertyKey::User), Some("sa"));
//!
//! let catalog = PropertyCatalog::bundled()?;
//! let descriptors = describe(&props, &catalog)?;
//! assert_eq!(descriptors.len(), catalog.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod parser;
pub mod properties;
pub mod tokenizer;

pub use catalog::{CatalogEntry, PropertyCatalog};
pub use defaults::fill_defaults;
pub use descriptor::{PropertyDescriptor, describe};
pub use error::{CatalogError, CatalogResult, LocatorError, LocatorErrorKind, LocatorResult};
pub use parser::{LOCATOR_PREFIX, accepts_locator, parse_locator};
pub use properties::{ConnectionProperties, PropertyKey, ProtocolVersion, ServerFamily};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::PropertyCatalog;
    pub use crate::descriptor::{PropertyDescriptor, describe};
    pub use crate::error::{CatalogError, LocatorError};
    pub use crate::parser::{accepts_locator, parse_locator};
    pub use crate::properties::{ConnectionProperties, PropertyKey, ProtocolVersion, ServerFamily};
}
