//! chipmeta - Metadata lookup for hardware block diagram nodes
//!
//! chipmeta holds the table that annotates the nodes of a chip's block
//! diagram: a display title, an optional metrics identifier, a link target
//! and an optional verification report path per node. A diagram renderer
//! walks the node keys and looks each one up.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, the metadata table, verification and config
//! - [`cli`] - Command-line interface layer (parses args, calls into core)
//! - [`ui`] - Output formatting
//!
//! # Correctness Invariants
//!
//! 1. Node keys are unique and stable
//! 2. Every record has a non-empty title
//! 3. Absent optional fields are `None`, never empty strings
//! 4. A table is never mutated after construction
//!
//! # Example
//!
//! ```
//! use chipmeta::core::table::ComponentMetadataTable;
//!
//! let table = ComponentMetadataTable::earlgrey();
//! let logo = table.get("opentitan-logo").unwrap();
//! assert_eq!(logo.title(), "opentitan");
//! assert_eq!(logo.href(), Some("/"));
//! assert_eq!(logo.metrics(), None);
//! ```

pub mod cli;
pub mod core;
pub mod ui;
