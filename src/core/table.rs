//! core::table
//!
//! The component metadata table: an immutable, ordered mapping from
//! diagram node key to [`MetadataRecord`].
//!
//! # Lifecycle
//!
//! A table is built once, either from the compiled-in Earl Grey rows via
//! [`ComponentMetadataTable::earlgrey`] or from JSON at load time, and is
//! only read afterwards. There is no mutating API, so a shared reference
//! can be handed to any number of threads.
//!
//! # Lookup Failures
//!
//! [`ComponentMetadataTable::get`] returns [`TableError::KeyNotFound`] for
//! unknown keys. The table never logs or recovers; the caller decides
//! whether a missing key is fatal.
//!
//! # Example
//!
//! ```
//! use chipmeta::core::table::{ComponentMetadataTable, TableError};
//!
//! let table = ComponentMetadataTable::earlgrey();
//!
//! let ibex = table.get("ibex").unwrap();
//! assert_eq!(ibex.metrics(), Some("rv_core_ibex"));
//! assert_eq!(ibex.report(), None);
//!
//! assert!(matches!(table.get("nonexistent-key"), Err(TableError::KeyNotFound(_))));
//! assert_eq!(table.keys().next(), Some("opentitan-logo"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::core::earlgrey::{BuiltinEntry, EARLGREY};
use crate::core::metadata::MetadataRecord;
use crate::core::types::{Fingerprint, NodeKey, TypeError};

/// Errors from table construction and lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("unknown node key: {0}")]
    KeyNotFound(String),

    #[error("duplicate node key: {0}")]
    DuplicateKey(String),

    #[error(transparent)]
    InvalidKey(#[from] TypeError),

    #[error("failed to parse table: {0}")]
    Parse(String),

    #[error("failed to serialize table: {0}")]
    Serialize(String),
}

/// Immutable metadata lookup for diagram nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMetadataTable {
    /// Entries in definition order.
    entries: Vec<(NodeKey, MetadataRecord)>,
    /// Key to position in `entries`.
    index: HashMap<String, usize>,
}

impl ComponentMetadataTable {
    /// The built-in Earl Grey table.
    ///
    /// Materialised on first call and shared for the rest of the process.
    pub fn earlgrey() -> &'static ComponentMetadataTable {
        static TABLE: OnceLock<ComponentMetadataTable> = OnceLock::new();
        TABLE.get_or_init(|| Self::from_builtin(&EARLGREY))
    }

    /// Build a table from compiled-in rows.
    ///
    /// Built-in rows are covered by tests rather than checked at runtime.
    pub(crate) fn from_builtin(rows: &[BuiltinEntry]) -> Self {
        let mut entries = Vec::with_capacity(rows.len());
        let mut index = HashMap::with_capacity(rows.len());
        for row in rows {
            debug_assert!(!index.contains_key(row.key), "duplicate built-in key");
            index.insert(row.key.to_string(), entries.len());
            entries.push((
                NodeKey::from_static(row.key),
                MetadataRecord::from_builtin(row),
            ));
        }
        Self { entries, index }
    }

    /// Build a table from `(key, record)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// - `TableError::InvalidKey` if a key is not a valid [`NodeKey`]
    /// - `TableError::DuplicateKey` if a key appears more than once
    pub fn from_entries<K, I>(entries: I) -> Result<Self, TableError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, MetadataRecord)>,
    {
        let mut table = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };

        for (key, record) in entries {
            let key = NodeKey::new(key)?;
            if table.index.contains_key(key.as_str()) {
                return Err(TableError::DuplicateKey(key.to_string()));
            }
            table
                .index
                .insert(key.as_str().to_string(), table.entries.len());
            table.entries.push((key, record));
        }

        Ok(table)
    }

    /// Parse a table from its JSON form.
    ///
    /// Key order in the document becomes the table's definition order.
    ///
    /// # Errors
    ///
    /// Returns `TableError::Parse` for malformed JSON or records, and the
    /// [`from_entries`](Self::from_entries) errors for bad keys.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let entries: OrderedEntries =
            serde_json::from_str(json).map_err(|e| TableError::Parse(e.to_string()))?;
        Self::from_entries(entries.0)
    }

    /// Serialize the table as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, TableError> {
        serde_json::to_string_pretty(self).map_err(|e| TableError::Serialize(e.to_string()))
    }

    /// Look up the record for `key`.
    ///
    /// # Errors
    ///
    /// Returns `TableError::KeyNotFound` if `key` is not in the table.
    pub fn get(&self, key: &str) -> Result<&MetadataRecord, TableError> {
        self.lookup(key)
            .ok_or_else(|| TableError::KeyNotFound(key.to_string()))
    }

    /// Look up the record for `key`, returning `None` if absent.
    pub fn lookup(&self, key: &str) -> Option<&MetadataRecord> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Whether `key` is in the table.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All node keys, in definition order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// All entries, in definition order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&NodeKey, &MetadataRecord)> + '_ {
        self.entries.iter().map(|(key, record)| (key, record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Content hash over keys and records in definition order.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::compute(self.entries.iter().map(|(key, record)| {
            std::iter::once(Some(key.as_str())).chain(record.fields())
        }))
    }
}

impl<'a> IntoIterator for &'a ComponentMetadataTable {
    type Item = (&'a NodeKey, &'a MetadataRecord);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (NodeKey, MetadataRecord)>,
        fn(&'a (NodeKey, MetadataRecord)) -> (&'a NodeKey, &'a MetadataRecord),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let split: fn(&'a (NodeKey, MetadataRecord)) -> (&'a NodeKey, &'a MetadataRecord) =
            |(key, record)| (key, record);
        self.entries.iter().map(split)
    }
}

impl Serialize for ComponentMetadataTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(key.as_str(), record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ComponentMetadataTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = OrderedEntries::deserialize(deserializer)?;
        Self::from_entries(entries.0).map_err(serde::de::Error::custom)
    }
}

/// JSON object entries in document order, duplicates included.
struct OrderedEntries(Vec<(String, MetadataRecord)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of node keys to metadata records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, record)) = access.next_entry::<String, MetadataRecord>()? {
                    entries.push((key, record));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::earlgrey::EARLGREY_LEN;

    fn record(title: &str) -> MetadataRecord {
        MetadataRecord::new(title).unwrap()
    }

    mod earlgrey {
        use super::*;

        #[test]
        fn has_every_builtin_row() {
            assert_eq!(ComponentMetadataTable::earlgrey().len(), EARLGREY_LEN);
        }

        #[test]
        fn builtin_keys_are_valid_and_unique() {
            let rows = EARLGREY
                .iter()
                .map(|row| (row.key, MetadataRecord::from_builtin(row)));
            let checked = ComponentMetadataTable::from_entries(rows).unwrap();
            assert_eq!(&checked, ComponentMetadataTable::earlgrey());
        }

        #[test]
        fn every_title_non_empty() {
            for (key, record) in ComponentMetadataTable::earlgrey() {
                assert!(!record.title().is_empty(), "{key} has empty title");
            }
        }

        #[test]
        fn same_instance_each_call() {
            let a = ComponentMetadataTable::earlgrey();
            let b = ComponentMetadataTable::earlgrey();
            assert!(std::ptr::eq(a, b));
        }

        #[test]
        fn spi_hosts_share_title() {
            let table = ComponentMetadataTable::earlgrey();
            assert_eq!(table.get("spi-host-0").unwrap().title(), "spi-host");
            assert_eq!(table.get("spi-host-1").unwrap().title(), "spi-host");
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn get_missing_key() {
            let table = ComponentMetadataTable::earlgrey();
            assert_eq!(
                table.get("nonexistent-key"),
                Err(TableError::KeyNotFound("nonexistent-key".into()))
            );
            assert_eq!(table.lookup("nonexistent-key"), None);
            assert!(!table.contains_key("nonexistent-key"));
        }

        #[test]
        fn lookup_is_case_sensitive() {
            let table = ComponentMetadataTable::earlgrey();
            assert!(table.contains_key("aes"));
            assert!(!table.contains_key("AES"));
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn from_entries_keeps_order() {
            let table = ComponentMetadataTable::from_entries([
                ("zeta", record("z")),
                ("alpha", record("a")),
            ])
            .unwrap();
            assert_eq!(table.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        }

        #[test]
        fn from_entries_rejects_duplicates() {
            let result =
                ComponentMetadataTable::from_entries([("rom", record("a")), ("rom", record("b"))]);
            assert_eq!(result, Err(TableError::DuplicateKey("rom".into())));
        }

        #[test]
        fn from_entries_rejects_bad_key() {
            let result = ComponentMetadataTable::from_entries([("Main SRAM", record("a"))]);
            assert!(matches!(result, Err(TableError::InvalidKey(_))));
        }

        #[test]
        fn empty_table() {
            let table =
                ComponentMetadataTable::from_entries(Vec::<(String, MetadataRecord)>::new())
                    .unwrap();
            assert!(table.is_empty());
            assert_eq!(table.keys().count(), 0);
        }
    }

    mod json {
        use super::*;

        #[test]
        fn preserves_document_order() {
            let json = r#"{
                "uart": { "title": "uart", "href": null, "report": null },
                "aes": { "title": "aes", "metrics": "aes", "href": "/hw/ip/aes#top", "report": null }
            }"#;
            let table = ComponentMetadataTable::from_json(json).unwrap();
            assert_eq!(table.keys().collect::<Vec<_>>(), vec!["uart", "aes"]);
            assert_eq!(table.get("aes").unwrap().metrics(), Some("aes"));
        }

        #[test]
        fn duplicate_key_rejected() {
            let json = r#"{
                "gpio": { "title": "gpio" },
                "gpio": { "title": "gpio-again" }
            }"#;
            assert_eq!(
                ComponentMetadataTable::from_json(json),
                Err(TableError::DuplicateKey("gpio".into()))
            );
        }

        #[test]
        fn malformed_rejected() {
            assert!(matches!(
                ComponentMetadataTable::from_json("[1, 2, 3]"),
                Err(TableError::Parse(_))
            ));
            assert!(matches!(
                ComponentMetadataTable::from_json(r#"{"gpio": {"title": ""}}"#),
                Err(TableError::Parse(_))
            ));
        }

        #[test]
        fn export_then_load_is_equal() {
            let table = ComponentMetadataTable::earlgrey();
            let json = table.to_json_pretty().unwrap();
            let loaded = ComponentMetadataTable::from_json(&json).unwrap();
            assert_eq!(&loaded, table);
            assert_eq!(loaded.fingerprint(), table.fingerprint());
        }

        #[test]
        fn serde_trait_round_trip() {
            let json = r#"{"padding":{"title":"padding","href":"/p/","report":null}}"#;
            let table: ComponentMetadataTable = serde_json::from_str(json).unwrap();
            assert_eq!(serde_json::to_string(&table).unwrap(), json);
        }
    }

    mod fingerprint {
        use super::*;

        #[test]
        fn changes_with_content() {
            let a = ComponentMetadataTable::from_entries([("rom", record("rom"))]).unwrap();
            let b = ComponentMetadataTable::from_entries([("rom", record("rom").with_href("/"))])
                .unwrap();
            assert_ne!(a.fingerprint(), b.fingerprint());
        }

        #[test]
        fn changes_with_order() {
            let a = ComponentMetadataTable::from_entries([("a", record("a")), ("b", record("b"))])
                .unwrap();
            let b = ComponentMetadataTable::from_entries([("b", record("b")), ("a", record("a"))])
                .unwrap();
            assert_ne!(a.fingerprint(), b.fingerprint());
        }

        #[test]
        fn control_characters_in_titles_cannot_forge_rows() {
            let two = ComponentMetadataTable::from_entries([("a", record("x")), ("b", record("y"))])
                .unwrap();
            let one =
                ComponentMetadataTable::from_entries([("a", record("x\0n\0n\0n\0\nsb\0sy"))])
                    .unwrap();

            assert_ne!(one, two);
            assert_ne!(one.fingerprint(), two.fingerprint());
        }
    }
}
