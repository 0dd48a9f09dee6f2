//! # Attribute Whitelist
//!
//! Request bodies are projected onto the attribute set instead of being
//! validated. The projection is intentionally lossy: unknown fields are
//! dropped and missing fields stay absent. Only the top level is inspected;
//! nested objects and arrays are copied as-is.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{AttributeSet, Record, ID_ATTRIBUTE};

/// What an update does with attributes the request body leaves out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OmittedFields {
    /// Keep the stored value
    #[default]
    Preserve,
    /// Remove the attribute from the stored record
    Clear,
}

/// Copy every client-writable attribute present in `body`, in attribute order.
///
/// `SID` is never taken from the body. A body that is not a JSON object
/// projects to an empty record.
pub fn project(body: &Value, attributes: &AttributeSet) -> Record {
    let mut projected = Record::new();

    let Some(fields) = body.as_object() else {
        return projected;
    };

    for name in attributes.writable() {
        if let Some(value) = fields.get(name) {
            projected.insert(name.to_string(), value.clone());
        }
    }

    projected
}

/// Assemble a new record around `id`, keeping the attribute order.
pub fn with_identifier(fields: &Record, id: Value, attributes: &AttributeSet) -> Record {
    let mut id = Some(id);
    let mut record = Record::new();

    for name in attributes.names() {
        if name == ID_ATTRIBUTE {
            if let Some(id) = id.take() {
                record.insert(name.to_string(), id);
            }
        } else if let Some(value) = fields.get(name) {
            record.insert(name.to_string(), value.clone());
        }
    }

    record
}

/// Shallow-merge `patch` onto `existing`.
///
/// Patched attributes win. The existing `SID` is always kept. Attributes
/// missing from `patch` follow `omitted`.
pub fn merge(
    existing: &Record,
    patch: &Record,
    attributes: &AttributeSet,
    omitted: OmittedFields,
) -> Record {
    let mut merged = Record::new();

    for name in attributes.names() {
        let value = if name == ID_ATTRIBUTE {
            existing.get(name)
        } else {
            match (patch.get(name), omitted) {
                (Some(value), _) => Some(value),
                (None, OmittedFields::Preserve) => existing.get(name),
                (None, OmittedFields::Clear) => None,
            }
        };

        if let Some(value) = value {
            merged.insert(name.to_string(), value.clone());
        }
    }

    merged
}
