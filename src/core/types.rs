//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`NodeKey`] - Validated diagram node identifier
//! - [`Fingerprint`] - Table content hash for change detection
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use chipmeta::core::types::NodeKey;
//!
//! let key = NodeKey::new("spi-host-0").unwrap();
//! assert_eq!(key.as_str(), "spi-host-0");
//!
//! assert!(NodeKey::new("Spi Host").is_err());
//! assert!(NodeKey::new("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid node key: {0}")]
    InvalidNodeKey(String),
}

/// A validated diagram node key.
///
/// Node keys are referenced verbatim by diagram assets:
/// - Cannot be empty
/// - Only ASCII lowercase letters, digits and `-`
/// - Cannot start or end with `-`
///
/// # Example
///
/// ```
/// use chipmeta::core::types::NodeKey;
///
/// assert!(NodeKey::new("opentitan-logo").is_ok());
/// assert!(NodeKey::new("i2c").is_ok());
///
/// assert!(NodeKey::new("-rom").is_err());
/// assert!(NodeKey::new("rom-").is_err());
/// assert!(NodeKey::new("main_sram").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeKey(String);

impl NodeKey {
    /// Create a new validated node key.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidNodeKey` if the key contains characters
    /// outside the accepted alphabet.
    pub fn new(key: impl Into<String>) -> Result<Self, TypeError> {
        let key = key.into();
        Self::validate(&key)?;
        Ok(Self(key))
    }

    fn validate(key: &str) -> Result<(), TypeError> {
        if key.is_empty() {
            return Err(TypeError::InvalidNodeKey("node key cannot be empty".into()));
        }

        if key.starts_with('-') {
            return Err(TypeError::InvalidNodeKey(format!(
                "node key cannot start with '-': {key}"
            )));
        }
        if key.ends_with('-') {
            return Err(TypeError::InvalidNodeKey(format!(
                "node key cannot end with '-': {key}"
            )));
        }

        if let Some(c) = key
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(TypeError::InvalidNodeKey(format!(
                "node key cannot contain {c:?}: {key}"
            )));
        }

        Ok(())
    }

    /// Wrap a compiled-in key without re-validating it in release builds.
    pub(crate) fn from_static(key: &'static str) -> Self {
        debug_assert!(Self::validate(key).is_ok(), "invalid built-in key {key}");
        Self(key.to_string())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NodeKey {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NodeKey> for String {
    fn from(key: NodeKey) -> Self {
        key.0
    }
}

impl AsRef<str> for NodeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hash of a table's content.
///
/// Consumers that cache rendered diagrams can compare fingerprints to
/// detect that the metadata changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute a fingerprint from ordered rows of fields.
    ///
    /// Row order is significant. Absent fields hash differently from empty
    /// strings. Each row is prefixed with its field count and each value
    /// with its byte length, so field contents cannot imitate separators.
    pub fn compute<'a, I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Option<&'a str>>,
    {
        let mut hasher = Sha256::new();
        for row in rows {
            let fields: Vec<Option<&str>> = row.into_iter().collect();
            hasher.update((fields.len() as u64).to_le_bytes());
            for field in fields {
                match field {
                    Some(value) => {
                        hasher.update(b"s");
                        hasher.update((value.len() as u64).to_le_bytes());
                        hasher.update(value.as_bytes());
                    }
                    None => hasher.update(b"n"),
                }
            }
        }

        Self(hex::encode(hasher.finalize()))
    }

    /// Get the fingerprint as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
