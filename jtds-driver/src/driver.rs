//! The jTDS driver surface: locator acceptance, parsing, and property introspection.

use std::sync::Arc;

use jtds_url::{
    ConnectionProperties, LocatorError, PropertyCatalog, PropertyDescriptor, PropertyKey,
};
use tracing::{debug, info};

use crate::config::{DriverConfig, ErrorReporting};
use crate::error::{DriverError, DriverResult};

/// Name the driver registers under.
pub const DRIVER_NAME: &str = "jtds";

/// Driver major version.
pub const MAJOR_VERSION: u32 = 0;

/// Driver minor version.
pub const MINOR_VERSION: u32 = 9;

/// Driver version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DriverVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
}

impl std::fmt::Display for DriverVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// jTDS driver for Microsoft SQL Server and Sybase ASE locators.
///
/// The driver resolves `jdbc:jtds:` locators into the property set consumed
/// by the session layer; it does not open connections itself.
///
/// # Examples
///
/// ```rust
/// use jtds_driver::Driver;
/// use jtds_url::{ConnectionProperties, PropertyKey};
///
/// let driver = Driver::new()?;
/// let props = driver
///     .resolve_connection("jdbc:jtds:sqlserver://db1/sales", &ConnectionProperties::new())?
///     .expect("accepted locator");
/// assert_eq!(props.get_key(PropertyKey::LoginTimeout), Some("0"));
/// # Ok::<(), jtds_driver::DriverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Driver {
    config: DriverConfig,
    catalog: Arc<PropertyCatalog>,
}

impl Driver {
    /// Create a driver with default settings and the bundled catalog.
    pub fn new() -> DriverResult<Self> {
        Self::with_config(DriverConfig::default())
    }

    /// Create a driver from configuration.
    ///
    /// Loads the configured catalog (or the bundled one) and fails if it is
    /// missing or incomplete.
    pub fn with_config(config: DriverConfig) -> DriverResult<Self> {
        let catalog = match &config.catalog {
            Some(path) => Arc::new(PropertyCatalog::from_file(path)?),
            None => PropertyCatalog::bundled()?,
        };
        info!(
            version = %Self::version(),
            error_reporting = config.error_reporting.as_str(),
            login_timeout = config.login_timeout,
            "jTDS driver initialized"
        );
        Ok(Self { config, catalog })
    }

    /// Create a driver with an already loaded catalog.
    pub fn with_catalog(config: DriverConfig, catalog: Arc<PropertyCatalog>) -> Self {
        Self { config, catalog }
    }

    /// Get the driver configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Get the property catalog.
    pub fn catalog(&self) -> &PropertyCatalog {
        &self.catalog
    }

    /// Get the driver version.
    pub fn version() -> DriverVersion {
        DriverVersion {
            major: MAJOR_VERSION,
            minor: MINOR_VERSION,
        }
    }

    /// Whether the driver passes the full standard compliance suite. It does not.
    pub fn standards_compliant(&self) -> bool {
        false
    }

    /// Check whether the locator is meant for this driver.
    pub fn accepts_locator(&self, candidate: &str) -> bool {
        jtds_url::accepts_locator(candidate)
    }

    /// Parse a locator and fill in default properties.
    pub fn parse_locator(
        &self,
        locator: &str,
        overrides: &ConnectionProperties,
    ) -> DriverResult<ConnectionProperties> {
        jtds_url::parse_locator(locator, overrides).map_err(|e| self.locator_error(locator, e))
    }

    /// Describe every configurable property for the given locator.
    pub fn describe_properties(
        &self,
        locator: &str,
        overrides: &ConnectionProperties,
    ) -> DriverResult<Vec<PropertyDescriptor>> {
        let props = self.parse_locator(locator, overrides)?;
        Ok(jtds_url::describe(&props, &self.catalog)?)
    }

    /// Resolve the properties for opening a connection.
    ///
    /// Returns `Ok(None)` if the locator is not a jTDS locator, so callers
    /// can try other drivers. `LOGINTIMEOUT` is taken from the driver
    /// configuration unless the locator or overrides set it.
    pub fn resolve_connection(
        &self,
        locator: &str,
        overrides: &ConnectionProperties,
    ) -> DriverResult<Option<ConnectionProperties>> {
        if !self.accepts_locator(locator) {
            debug!(locator_len = locator.len(), "Locator not accepted");
            return Ok(None);
        }

        let mut props = self.parse_locator(locator, overrides)?;
        props.set_if_absent(PropertyKey::LoginTimeout, self.config.login_timeout.to_string());
        Ok(Some(props))
    }

    fn locator_error(&self, locator: &str, err: LocatorError) -> DriverError {
        debug!(
            kind = %err.kind(),
            offset = err.offset(),
            "Rejected connection locator"
        );
        match self.config.error_reporting {
            ErrorReporting::Detailed => DriverError::Locator(err),
            ErrorReporting::Legacy => DriverError::bad_url(locator, err.kind()),
        }
    }
}
