//! Property catalog: display names and descriptions for each canonical key.
//!
//! The catalog is a TOML resource with one table per key:
//!
//! ```toml
//! [SERVERNAME]
//! name = "serverName"
//! description = "The host name or IP address of the database server."
//! ```
//!
//! The bundled resource is parsed once per process on first use. Deployments
//! that localise names can load a replacement with
//! [`PropertyCatalog::from_file`].

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::Deserialize;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::properties::PropertyKey;

/// The catalog shipped with the crate.
pub const BUNDLED_CATALOG: &str = include_str!("../resources/properties.toml");

static BUNDLED: LazyLock<CatalogResult<Arc<PropertyCatalog>>> = LazyLock::new(|| {
    let catalog = PropertyCatalog::from_toml_str(BUNDLED_CATALOG).map(Arc::new);
    debug!(ok = catalog.is_ok(), "Loaded bundled property catalog");
    catalog
});

/// Display name and description of one property.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    /// Name shown to users.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

/// Immutable mapping from [`PropertyKey`] to its [`CatalogEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyCatalog {
    entries: BTreeMap<PropertyKey, CatalogEntry>,
}

impl PropertyCatalog {
    /// The bundled catalog, shared by every caller.
    pub fn bundled() -> CatalogResult<Arc<PropertyCatalog>> {
        BUNDLED.clone()
    }

    /// Parse and validate a catalog from TOML.
    ///
    /// Fails if the resource is malformed, names an unknown key, or lacks an
    /// entry for any recognised key.
    pub fn from_toml_str(content: &str) -> CatalogResult<Self> {
        let raw: BTreeMap<String, CatalogEntry> =
            toml::from_str(content).map_err(|e| CatalogError::Malformed(e.to_string()))?;

        let mut entries = BTreeMap::new();
        for (name, entry) in raw {
            let key = PropertyKey::from_name(&name).ok_or(CatalogError::UnknownKey(name))?;
            entries.insert(key, entry);
        }

        Self::from_entries(entries)
    }

    /// Load and validate a catalog from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "Loading property catalog");
        Self::from_toml_str(&content)
    }

    /// Build a complete catalog from entries.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (PropertyKey, CatalogEntry)>,
    ) -> CatalogResult<Self> {
        let catalog = Self::subset(entries);
        if let Some(missing) = PropertyKey::ALL
            .into_iter()
            .find(|key| !catalog.entries.contains_key(key))
        {
            return Err(CatalogError::MissingKey(missing));
        }
        Ok(catalog)
    }

    /// Build a catalog covering only some keys, without the completeness check.
    ///
    /// Describing properties against such a catalog fails if it lacks a key
    /// that carries required or choice metadata.
    pub fn subset(entries: impl IntoIterator<Item = (PropertyKey, CatalogEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Get the entry for `key`.
    pub fn entry(&self, key: PropertyKey) -> CatalogResult<&CatalogEntry> {
        self.entries.get(&key).ok_or(CatalogError::MissingKey(key))
    }

    /// Get the display name for `key`.
    pub fn display_name(&self, key: PropertyKey) -> Option<&str> {
        self.entries.get(&key).map(|e| e.name.as_str())
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyKey, &CatalogEntry)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_catalog_is_complete() {
        let catalog = PropertyCatalog::bundled().unwrap();
        assert_eq!(catalog.len(), PropertyKey::ALL.len());
        assert_eq!(catalog.display_name(PropertyKey::ServerName), Some("serverName"));
    }

    #[test]
    fn test_bundled_catalog_is_shared() {
        let a = PropertyCatalog::bundled().unwrap();
        let b = PropertyCatalog::bundled().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_bundled_catalog_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| PropertyCatalog::bundled().unwrap()))
            .collect();
        let catalogs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let first = &catalogs[0];
        for catalog in &catalogs[1..] {
            assert!(Arc::ptr_eq(first, catalog));
        }
    }

    #[test]
    fn test_missing_key_rejected() {
        let content = BUNDLED_CATALOG.replace("[WSID]", "[IGNORED_WSID]");
        let err = PropertyCatalog::from_toml_str(&content).unwrap_err();
        assert_eq!(err, CatalogError::UnknownKey("IGNORED_WSID".to_string()));

        let entries = PropertyCatalog::bundled()
            .unwrap()
            .iter()
            .filter(|(key, _)| *key != PropertyKey::Wsid)
            .map(|(key, entry)| (key, entry.clone()))
            .collect::<Vec<_>>();
        let err = PropertyCatalog::from_entries(entries).unwrap_err();
        assert_eq!(err, CatalogError::MissingKey(PropertyKey::Wsid));
    }

    #[test]
    fn test_table_names_ignore_case() {
        let content = BUNDLED_CATALOG.replace("[SERVERNAME]", "[serverName]");
        let catalog = PropertyCatalog::from_toml_str(&content).unwrap();
        assert_eq!(catalog.len(), PropertyKey::ALL.len());
        assert_eq!(catalog.display_name(PropertyKey::ServerName), Some("serverName"));
    }

    #[test]
    fn test_malformed_catalog() {
        let err = PropertyCatalog::from_toml_str("[SERVERNAME]\nname = 1\n").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));

        let err =
            PropertyCatalog::from_toml_str("[SERVERNAME]\nname = \"a\"\ndescription = \"b\"\nlabel = \"c\"\n")
                .unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let localised = BUNDLED_CATALOG.replace("name = \"serverName\"", "name = \"Servername\"");
        file.write_all(localised.as_bytes()).unwrap();

        let catalog = PropertyCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.display_name(PropertyKey::ServerName), Some("Servername"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = PropertyCatalog::from_file("/nonexistent/jtds/properties.toml").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
