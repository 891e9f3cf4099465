//! Property descriptors for introspection tooling.

use serde::Serialize;

use crate::catalog::PropertyCatalog;
use crate::error::CatalogResult;
use crate::properties::{ConnectionProperties, PropertyKey, ProtocolVersion, ServerFamily};

/// Keys that must be set before a connection can be opened.
const REQUIRED_KEYS: [PropertyKey; 2] = [PropertyKey::ServerName, PropertyKey::ServerType];

/// Metadata describing one configurable property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Canonical key.
    pub key: PropertyKey,
    /// Name shown to users.
    pub display_name: String,
    /// Human-readable description.
    pub description: String,
    /// Value in the resolved configuration, empty if unset.
    pub current_value: String,
    /// Whether a value is required to connect.
    pub required: bool,
    /// Allowed values; empty for free-form properties.
    pub choices: Vec<String>,
}

impl PropertyDescriptor {
    /// Whether the property has a fixed set of allowed values.
    pub fn is_enumerated(&self) -> bool {
        !self.choices.is_empty()
    }
}

/// Allowed values for `key`, empty if the property is free-form.
pub fn choices_for(key: PropertyKey) -> Vec<String> {
    if key == PropertyKey::ServerType {
        ServerFamily::ALL.iter().map(|f| f.as_str().to_string()).collect()
    } else if key == PropertyKey::Tds {
        ProtocolVersion::ALL.iter().map(|v| v.as_str().to_string()).collect()
    } else if key.is_boolean() {
        vec!["true".to_string(), "false".to_string()]
    } else {
        Vec::new()
    }
}

/// Describe every catalog entry against a resolved configuration.
///
/// Returns one descriptor per catalog entry, ordered by key. Fails if the
/// catalog lacks a key that carries required or choice metadata.
pub fn describe(
    config: &ConnectionProperties,
    catalog: &PropertyCatalog,
) -> CatalogResult<Vec<PropertyDescriptor>> {
    let annotated = REQUIRED_KEYS
        .into_iter()
        .chain([PropertyKey::Tds])
        .chain(PropertyKey::ALL.into_iter().filter(PropertyKey::is_boolean));
    for key in annotated {
        catalog.entry(key)?;
    }

    let descriptors = catalog
        .iter()
        .map(|(key, entry)| PropertyDescriptor {
            key,
            display_name: entry.name.clone(),
            description: entry.description.clone(),
            current_value: config.get_key(key).unwrap_or_default().to_string(),
            required: REQUIRED_KEYS.contains(&key),
            choices: choices_for(key),
        })
        .collect();

    Ok(descriptors)
}
