//! Seed loader
//!
//! Reads the single seed record at startup. A missing or malformed seed file
//! is fatal: the service never starts without its record template.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};
use super::types::{AttributeSet, Record};

/// The seed record together with the attribute set inferred from it
#[derive(Debug, Clone)]
pub struct Seed {
    pub record: Record,
    pub attributes: AttributeSet,
}

/// Loads the seed record from disk
pub struct SeedLoader {
    path: PathBuf,
}

impl SeedLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the seed file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the seed file, then infer its attribute set.
    pub fn load(&self) -> SchemaResult<Seed> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SchemaError::SeedMissing {
                path: self.path.clone(),
            },
            _ => SchemaError::SeedUnreadable {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|e| {
            SchemaError::malformed(self.path.display().to_string(), format!("invalid JSON: {}", e))
        })?;

        Self::from_value(value).map_err(|e| match e {
            SchemaError::SeedMalformed { reason, .. } => {
                SchemaError::malformed(self.path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Build a seed from an in-memory JSON value.
    pub fn from_value(value: Value) -> SchemaResult<Seed> {
        let attributes = AttributeSet::infer(&value)?;
        let record = match value {
            Value::Object(record) => record,
            _ => return Err(SchemaError::malformed("seed", "seed must be a JSON object")),
        };

        Ok(Seed { record, attributes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("programmers.json");
        fs::write(&path, r#"{"SID": "1", "name": "Ada", "language": "Analytical"}"#).unwrap();

        let seed = SeedLoader::new(&path).load().unwrap();
        assert_eq!(seed.record["name"], "Ada");
        assert_eq!(seed.attributes.len(), 3);
    }

    #[test]
    fn test_missing_file_is_seed_missing() {
        let tmp = TempDir::new().unwrap();
        let loader = SeedLoader::new(tmp.path().join("nope.json"));

        let err = loader.load().unwrap_err();
        assert_eq!(err.code(), "SEED_MISSING");
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("programmers.json");
        fs::write(&path, "{not json").unwrap();

        let err = SeedLoader::new(&path).load().unwrap_err();
        assert_eq!(err.code(), "SEED_MALFORMED");
        assert!(err.to_string().contains("programmers.json"));
    }

    #[test]
    fn test_from_value() {
        let seed = SeedLoader::from_value(json!({"SID": 1, "name": "Linus"})).unwrap();
        assert_eq!(seed.record["SID"], 1);
        assert!(SeedLoader::from_value(json!([])).is_err());
    }
}
