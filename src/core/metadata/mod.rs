//! core::metadata
//!
//! Per-node metadata records.
//!
//! # Modules
//!
//! - [`schema`] - Record type and its JSON wire format
//!
//! # Schema Design
//!
//! - Title is mandatory and non-empty
//! - Optional fields are `Option`, never sentinel strings
//! - Strict parsing: unknown fields are rejected

pub mod schema;

pub use schema::{MetadataError, MetadataRecord};
