//! Structured fuzzing for the connection locator parser.
//!
//! This target builds near-valid locators with the `arbitrary` crate so the
//! fuzzer spends its time past the prefix checks.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_locator_structured
//! ```

#![no_main]

use arbitrary::Arbitrary;
use jtds_url::{ConnectionProperties, PropertyCatalog, describe, parse_locator};
use libfuzzer_sys::fuzz_target;

/// A generated server family segment.
#[derive(Debug, Arbitrary)]
enum FuzzFamily {
    SqlServer,
    Sybase,
    Other(String),
}

impl FuzzFamily {
    fn as_segment(&self) -> &str {
        match self {
            Self::SqlServer => "sqlserver",
            Self::Sybase => "SyBase",
            Self::Other(s) => s,
        }
    }
}

/// A generated locator.
#[derive(Debug, Arbitrary)]
struct FuzzLocator {
    family: FuzzFamily,
    host: String,
    port: Option<String>,
    database: Option<String>,
    properties: Vec<(String, Option<String>)>,
    overrides: Vec<(String, String)>,
}

impl FuzzLocator {
    fn render(&self) -> String {
        let mut locator = format!("jdbc:jtds:{}://{}", self.family.as_segment(), self.host);
        if let Some(ref port) = self.port {
            locator.push(':');
            locator.push_str(port);
        }
        if let Some(ref database) = self.database {
            locator.push('/');
            locator.push_str(database);
        }
        for (key, value) in self.properties.iter().take(16) {
            locator.push(';');
            locator.push_str(key);
            if let Some(value) = value {
                locator.push('=');
                locator.push_str(value);
            }
        }
        locator
    }
}

fuzz_target!(|input: FuzzLocator| {
    let overrides: ConnectionProperties = input.overrides.iter().take(8).cloned().collect();
    let locator = input.render();

    if let Ok(props) = parse_locator(&locator, &overrides) {
        // Every successful parse must be describable with the bundled catalog
        if let Ok(catalog) = PropertyCatalog::bundled() {
            let descriptors = describe(&props, &catalog).expect("complete catalog");
            assert_eq!(descriptors.len(), catalog.len());
        }
    }
});
