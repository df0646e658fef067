//! core::metadata::schema
//!
//! Metadata record schema.
//!
//! # Wire Format
//!
//! Each record serializes as a JSON object:
//! - `title`: string, required, non-empty
//! - `metrics`: string, omitted when absent (`null` accepted on read)
//! - `href`: string or `null` (may be omitted on read)
//! - `report`: string or `null` (may be omitted on read)
//!
//! Unknown fields are rejected.
//!
//! # Example
//!
//! ```
//! use chipmeta::core::metadata::schema::MetadataRecord;
//!
//! let record = MetadataRecord::new("ibex")
//!     .unwrap()
//!     .with_metrics("rv_core_ibex")
//!     .with_href("/hw/ip/rv_core_ibex#top");
//!
//! let json = serde_json::to_string(&record).unwrap();
//! assert_eq!(
//!     json,
//!     r##"{"title":"ibex","metrics":"rv_core_ibex","href":"/hw/ip/rv_core_ibex#top","report":null}"##
//! );
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::earlgrey::BuiltinEntry;

/// Errors from record construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("title cannot be empty")]
    EmptyTitle,
}

/// Metadata for one diagram node.
///
/// Optional fields carry "not applicable" as `None`, which is distinct
/// from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct MetadataRecord {
    title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<String>,

    href: Option<String>,

    report: Option<String>,
}

impl MetadataRecord {
    /// Create a record with only a title.
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::EmptyTitle` if `title` is empty.
    pub fn new(title: impl Into<String>) -> Result<Self, MetadataError> {
        let title = title.into();
        if title.is_empty() {
            return Err(MetadataError::EmptyTitle);
        }
        Ok(Self {
            title,
            metrics: None,
            href: None,
            report: None,
        })
    }

    /// Build a record from a compiled-in row.
    pub(crate) fn from_builtin(entry: &BuiltinEntry) -> Self {
        debug_assert!(!entry.title.is_empty(), "empty built-in title");
        Self {
            title: entry.title.to_string(),
            metrics: entry.metrics.map(str::to_string),
            href: entry.href.map(str::to_string),
            report: entry.report.map(str::to_string),
        }
    }

    /// Set the metrics identifier.
    pub fn with_metrics(mut self, metrics: impl Into<String>) -> Self {
        self.metrics = Some(metrics.into());
        self
    }

    /// Set the navigation link.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the verification report link.
    pub fn with_report(mut self, report: impl Into<String>) -> Self {
        self.report = Some(report.into());
        self
    }

    /// Display title of the node.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Metrics identifier, if the node has one.
    pub fn metrics(&self) -> Option<&str> {
        self.metrics.as_deref()
    }

    /// Link target, if the node is navigable.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Verification report path, if one exists.
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    /// All fields in wire order, for hashing.
    pub(crate) fn fields(&self) -> [Option<&str>; 4] {
        [
            Some(self.title.as_str()),
            self.metrics(),
            self.href(),
            self.report(),
        ]
    }
}

/// Unvalidated record as it appears on the wire.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRecord {
    title: String,
    #[serde(default)]
    metrics: Option<String>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    report: Option<String>,
}

impl TryFrom<RawRecord> for MetadataRecord {
    type Error = MetadataError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let mut record = MetadataRecord::new(raw.title)?;
        record.metrics = raw.metrics;
        record.href = raw.href;
        record.report = raw.report;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn title_only() {
            let record = MetadataRecord::new("padding").unwrap();
            assert_eq!(record.title(), "padding");
            assert_eq!(record.metrics(), None);
            assert_eq!(record.href(), None);
            assert_eq!(record.report(), None);
        }

        #[test]
        fn empty_title_rejected() {
            assert_eq!(MetadataRecord::new(""), Err(MetadataError::EmptyTitle));
        }

        #[test]
        fn builders_set_fields() {
            let record = MetadataRecord::new("aes")
                .unwrap()
                .with_metrics("aes")
                .with_href("/hw/ip/aes#top")
                .with_report("/hw/ip/aes_unmasked/dv");

            assert_eq!(record.metrics(), Some("aes"));
            assert_eq!(record.href(), Some("/hw/ip/aes#top"));
            assert_eq!(record.report(), Some("/hw/ip/aes_unmasked/dv"));
        }
    }

    mod serde_format {
        use super::*;

        #[test]
        fn absent_metrics_omitted_nulls_kept() {
            let record = MetadataRecord::new("opentitan").unwrap().with_href("/");
            let json = serde_json::to_string(&record).unwrap();
            assert_eq!(json, r#"{"title":"opentitan","href":"/","report":null}"#);
        }

        #[test]
        fn omitted_fields_read_as_absent() {
            let record: MetadataRecord =
                serde_json::from_str(r#"{"title":"opentitan","href":"/"}"#).unwrap();
            assert_eq!(record.metrics(), None);
            assert_eq!(record.report(), None);
            assert_eq!(record.href(), Some("/"));
        }

        #[test]
        fn null_metrics_accepted() {
            let record: MetadataRecord =
                serde_json::from_str(r#"{"title":"padding","metrics":null}"#).unwrap();
            assert_eq!(record.metrics(), None);
        }

        #[test]
        fn empty_string_is_not_absent() {
            let record: MetadataRecord =
                serde_json::from_str(r#"{"title":"x","report":""}"#).unwrap();
            assert_eq!(record.report(), Some(""));
        }

        #[test]
        fn empty_title_rejected() {
            let result: Result<MetadataRecord, _> = serde_json::from_str(r#"{"title":""}"#);
            assert!(result.is_err());
        }

        #[test]
        fn missing_title_rejected() {
            let result: Result<MetadataRecord, _> = serde_json::from_str(r#"{"href":"/"}"#);
            assert!(result.is_err());
        }

        #[test]
        fn unknown_field_rejected() {
            let result: Result<MetadataRecord, _> =
                serde_json::from_str(r#"{"title":"x","colour":"red"}"#);
            assert!(result.is_err());
        }
    }
}
