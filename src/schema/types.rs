//! Record and attribute set definitions
//!
//! The attribute set is computed once from the seed record and never changes
//! afterwards. Its order is the seed record's own key order.

use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};

/// Name of the identifier attribute carried by every record
pub const ID_ATTRIBUTE: &str = "SID";

/// One flat programmer record, keyed by attribute name
pub type Record = Map<String, Value>;

/// Fixed, ordered set of accepted attribute names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeSet {
    names: Vec<String>,
}

impl AttributeSet {
    /// Infer the attribute set from a seed value.
    ///
    /// The seed must be a non-empty JSON object carrying `SID`.
    pub fn infer(seed: &Value) -> SchemaResult<Self> {
        let object = seed
            .as_object()
            .ok_or_else(|| SchemaError::malformed("seed", "seed must be a JSON object"))?;

        Self::from_record(object)
    }

    /// Infer the attribute set from an already-unwrapped record
    pub fn from_record(record: &Record) -> SchemaResult<Self> {
        if record.is_empty() {
            return Err(SchemaError::malformed("seed", "seed record has no attributes"));
        }

        if !record.contains_key(ID_ATTRIBUTE) {
            return Err(SchemaError::malformed(
                "seed",
                format!("seed record is missing the `{}` attribute", ID_ATTRIBUTE),
            ));
        }

        Ok(Self {
            names: record.keys().cloned().collect(),
        })
    }

    /// All attribute names in seed order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Attribute names a client may write (everything except `SID`)
    pub fn writable(&self) -> impl Iterator<Item = &str> {
        self.names().filter(|name| *name != ID_ATTRIBUTE)
    }

    /// Whether `name` is part of the set
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: a set is only built from a record holding `SID`.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
