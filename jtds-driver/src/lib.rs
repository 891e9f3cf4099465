//! # jtds-driver
//!
//! Driver surface for jTDS connection locators.
//!
//! This crate provides:
//! - [`Driver`], which accepts, parses and describes `jdbc:jtds:` locators
//! - Explicit, idempotent driver registration ([`register`], [`DriverRegistry`])
//! - Driver configuration from TOML and environment variables
//! - Optional logging setup (feature `tracing-subscriber`)
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use jtds_driver::{Driver, DriverConfig, DriverRegistry, LocatorDriver};
//! use jtds_url::ConnectionProperties;
//!
//! // At start-up
//! let driver = Driver::with_config(DriverConfig::new().login_timeout(15))?;
//! jtds_driver::register(Arc::new(driver));
//!
//! // Later
//! let locator = "jdbc:jtds:sqlserver://db1:1433/sales;user=sa";
//! let driver = DriverRegistry::global().driver_for(locator).expect("registered");
//! let props = driver
//!     .resolve_connection(locator, &ConnectionProperties::new())?
//!     .expect("accepted");
//! assert_eq!(props.get("LOGINTIMEOUT"), Some("15"));
//! # Ok::<(), jtds_driver::DriverError>(())
//! ```

pub mod config;
pub mod driver;
pub mod env;
pub mod error;
pub mod logging;
pub mod registry;

pub use config::{DriverConfig, ErrorReporting};
pub use driver::{DRIVER_NAME, Driver, DriverVersion};
pub use env::{EnvSource, MapEnvSource, StdEnvSource};
pub use error::{DriverError, DriverResult};
pub use registry::{DriverRegistry, LocatorDriver, register};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{DriverConfig, ErrorReporting};
    pub use crate::driver::Driver;
    pub use crate::error::{DriverError, DriverResult};
    pub use crate::registry::{DriverRegistry, LocatorDriver, register};
}
