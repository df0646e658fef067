//! core::verify
//!
//! Structural verification of metadata tables.
//!
//! # Checks
//!
//! - Optional fields are either absent or non-empty
//! - Links (`href`, `report`) are site-absolute paths or http(s) URLs
//!
//! Empty titles cannot be constructed, so they are not checked here.
//!
//! # Invariants
//!
//! - Never touches the filesystem or network; whether a link target
//!   exists is not checked
//! - Reports every issue rather than stopping at the first
//! - Must be deterministic

use thiserror::Error;

use super::table::ComponentMetadataTable;

/// A single verification issue.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("{key}: {field} is an empty string (omit it or use null)")]
    EmptyField { key: String, field: &'static str },

    #[error("{key}: {field} '{value}' is neither a site path nor an http(s) URL")]
    RelativeLink {
        key: String,
        field: &'static str,
        value: String,
    },
}

/// Result of verifying a table.
#[derive(Debug)]
pub struct VerifyResult {
    /// Whether verification passed
    pub ok: bool,
    /// Issues found during verification
    pub errors: Vec<VerifyError>,
}

impl VerifyResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: vec![],
        }
    }

    /// Create a failed result with errors.
    pub fn failure(errors: Vec<VerifyError>) -> Self {
        Self { ok: false, errors }
    }
}

/// Verify every entry of `table`.
pub fn verify_table(table: &ComponentMetadataTable) -> VerifyResult {
    let mut errors = Vec::new();

    for (key, record) in table {
        if record.metrics() == Some("") {
            errors.push(VerifyError::EmptyField {
                key: key.to_string(),
                field: "metrics",
            });
        }

        for (field, value) in [("href", record.href()), ("report", record.report())] {
            match value {
                None => {}
                Some("") => errors.push(VerifyError::EmptyField {
                    key: key.to_string(),
                    field,
                }),
                Some(link) if !is_link(link) => errors.push(VerifyError::RelativeLink {
                    key: key.to_string(),
                    field,
                    value: link.to_string(),
                }),
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() {
        VerifyResult::success()
    } else {
        VerifyResult::failure(errors)
    }
}

fn is_link(value: &str) -> bool {
    value.starts_with('/') || value.starts_with("https://") || value.starts_with("http://")
}
