//! # jtds
//!
//! Connection locator resolution for Microsoft SQL Server and Sybase ASE.
//!
//! jtds provides:
//! - A parser for `jdbc:jtds:` connection locators
//! - Family- and protocol-aware default connection properties
//! - Property descriptors (names, descriptions, allowed values) for tooling
//! - A driver surface with explicit registration and configurable error reporting
//!
//! Opening sockets and speaking TDS is left to the session layer, which
//! receives the resolved [`ConnectionProperties`].
//!
//! ## Quick Start
//!
//! ```rust
//! use jtds::prelude::*;
//!
//! let driver = Driver::new()?;
//! let overrides = ConnectionProperties::new().with("password", "secret");
//!
//! let props = driver.parse_locator("jdbc:jtds:sqlserver://localhost:1433/mydb;ENCRYPT", &overrides)?;
//! assert_eq!(props.server_family(), Some(ServerFamily::SqlServer));
//! assert_eq!(props.get_key(PropertyKey::PortNumber), Some("1433"));
//! assert_eq!(props.get("ENCRYPT"), Some(""));
//!
//! for descriptor in driver.describe_properties("jdbc:jtds:sqlserver://localhost", &overrides)? {
//!     println!("{} ({}): {}", descriptor.display_name, descriptor.key, descriptor.current_value);
//! }
//! # Ok::<(), jtds::DriverError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Locator parsing, defaults, catalog and descriptors.
pub mod url {
    pub use jtds_url::*;
}

/// Driver surface, registration, configuration and logging.
pub mod driver {
    pub use jtds_driver::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use jtds_driver::prelude::*;
    pub use jtds_url::prelude::*;
}

// Re-export key types at the crate root
pub use jtds_driver::{Driver, DriverConfig, DriverError, DriverResult, register};
pub use jtds_url::{
    ConnectionProperties, LocatorError, PropertyDescriptor, PropertyKey, accepts_locator,
    parse_locator,
};
