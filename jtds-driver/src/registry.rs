//! Explicit driver registration.
//!
//! Host programs register drivers once at start-up; nothing registers itself
//! as a side effect of being used.
//!
//! ```rust
//! use std::sync::Arc;
//! use jtds_driver::{Driver, DriverRegistry};
//!
//! let registry = DriverRegistry::new();
//! let driver = Arc::new(Driver::new()?);
//! assert!(registry.register(driver.clone()));
//! assert!(!registry.register(driver));
//! assert!(registry.driver_for("jdbc:jtds:sqlserver://db1").is_some());
//! # Ok::<(), jtds_driver::DriverError>(())
//! ```

use std::fmt;
use std::sync::{Arc, LazyLock};

use jtds_url::{ConnectionProperties, PropertyDescriptor};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::driver::{DRIVER_NAME, Driver};
use crate::error::DriverResult;

static GLOBAL: LazyLock<DriverRegistry> = LazyLock::new(DriverRegistry::new);

/// A driver that can be looked up by connection locator.
pub trait LocatorDriver: Send + Sync + fmt::Debug {
    /// Unique registration name.
    fn name(&self) -> &str;

    /// Check whether the locator is meant for this driver.
    fn accepts_locator(&self, locator: &str) -> bool;

    /// Resolve connection properties, `Ok(None)` if the locator is not accepted.
    fn resolve_connection(
        &self,
        locator: &str,
        overrides: &ConnectionProperties,
    ) -> DriverResult<Option<ConnectionProperties>>;

    /// Describe every configurable property for the locator.
    fn describe_properties(
        &self,
        locator: &str,
        overrides: &ConnectionProperties,
    ) -> DriverResult<Vec<PropertyDescriptor>>;
}

impl LocatorDriver for Driver {
    fn name(&self) -> &str {
        DRIVER_NAME
    }

    fn accepts_locator(&self, locator: &str) -> bool {
        Driver::accepts_locator(self, locator)
    }

    fn resolve_connection(
        &self,
        locator: &str,
        overrides: &ConnectionProperties,
    ) -> DriverResult<Option<ConnectionProperties>> {
        Driver::resolve_connection(self, locator, overrides)
    }

    fn describe_properties(
        &self,
        locator: &str,
        overrides: &ConnectionProperties,
    ) -> DriverResult<Vec<PropertyDescriptor>> {
        Driver::describe_properties(self, locator, overrides)
    }
}

/// Registered drivers, in registration order.
#[derive(Default)]
pub struct DriverRegistry {
    drivers: RwLock<Vec<Arc<dyn LocatorDriver>>>,
}

impl DriverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static DriverRegistry {
        &GLOBAL
    }

    /// Register a driver.
    ///
    /// Registration is idempotent by name: returns `false` and keeps the
    /// existing driver if one with the same name is already registered.
    pub fn register(&self, driver: Arc<dyn LocatorDriver>) -> bool {
        let mut drivers = self.drivers.write();
        if drivers.iter().any(|d| d.name() == driver.name()) {
            debug!(driver = driver.name(), "Driver already registered");
            return false;
        }
        debug!(driver = driver.name(), "Registering driver");
        drivers.push(driver);
        true
    }

    /// Remove a driver by name. Returns `true` if one was removed.
    pub fn deregister(&self, name: &str) -> bool {
        let mut drivers = self.drivers.write();
        let before = drivers.len();
        drivers.retain(|d| d.name() != name);
        let removed = drivers.len() != before;
        if !removed {
            warn!(driver = name, "Deregistering unknown driver");
        }
        removed
    }

    /// The first registered driver accepting the locator.
    pub fn driver_for(&self, locator: &str) -> Option<Arc<dyn LocatorDriver>> {
        self.drivers
            .read()
            .iter()
            .find(|d| d.accepts_locator(locator))
            .cloned()
    }

    /// Names of the registered drivers.
    pub fn names(&self) -> Vec<String> {
        self.drivers
            .read()
            .iter()
            .map(|d| d.name().to_string())
            .collect()
    }

    /// Number of registered drivers.
    pub fn len(&self) -> usize {
        self.drivers.read().len()
    }

    /// Whether no driver is registered.
    pub fn is_empty(&self) -> bool {
        self.drivers.read().is_empty()
    }
}

impl fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("drivers", &self.names())
            .finish()
    }
}

/// Register a driver with the process-wide registry.
///
/// Call once during application start-up; repeated calls are no-ops.
pub fn register(driver: Arc<dyn LocatorDriver>) -> bool {
    DriverRegistry::global().register(driver)
}
