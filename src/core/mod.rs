//! core
//!
//! Core domain types, the metadata table, and configuration.
//!
//! # Modules
//!
//! - [`types`] - Strong types: NodeKey, Fingerprint
//! - [`metadata`] - Per-node metadata records
//! - [`table`] - The immutable lookup table
//! - [`earlgrey`] - Built-in Earl Grey diagram data
//! - [`verify`] - Structural verification of tables
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing
//! - All verification is deterministic

pub mod config;
pub mod earlgrey;
pub mod metadata;
pub mod table;
pub mod types;
pub mod verify;
