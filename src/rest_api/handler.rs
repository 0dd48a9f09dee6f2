//! # REST API Handler
//!
//! Request handling for the programmer collection, independent of the HTTP
//! framework. Routes in [`super::server`] translate these results into
//! responses.

use std::sync::Arc;

use serde_json::Value;

use crate::schema::{AttributeSet, Record, Seed, ID_ATTRIBUTE};
use crate::storage::{IdGenerator, RecordStore, UuidGenerator};

use super::errors::{RestError, RestResult};
use super::filter::{merge, project, with_identifier, OmittedFields};

/// Operations exposed over HTTP
pub trait RestHandler: Send + Sync {
    /// Every record in insertion order
    fn list(&self) -> RestResult<Vec<Record>>;

    /// A single record by `SID`
    fn get(&self, id: &str) -> RestResult<Record>;

    /// Merge the whitelisted body onto an existing record
    fn update(&self, id: &str, body: &Value) -> RestResult<Record>;

    /// Append a new record with a server-assigned `SID`
    fn create(&self, body: &Value) -> RestResult<Record>;
}

/// Programmer collection handler backed by a [`RecordStore`]
pub struct ProgrammerService {
    store: Arc<RecordStore>,
    attributes: AttributeSet,
    ids: Box<dyn IdGenerator>,
    omitted: OmittedFields,
}

impl ProgrammerService {
    pub fn new(store: Arc<RecordStore>, attributes: AttributeSet) -> Self {
        Self {
            store,
            attributes,
            ids: Box::new(UuidGenerator),
            omitted: OmittedFields::default(),
        }
    }

    /// Build the handler from a loaded seed
    pub fn from_seed(seed: Seed) -> Self {
        Self::new(Arc::new(RecordStore::new(seed.record)), seed.attributes)
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_omitted_fields(mut self, omitted: OmittedFields) -> Self {
        self.omitted = omitted;
        self
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }
}

impl RestHandler for ProgrammerService {
    fn list(&self) -> RestResult<Vec<Record>> {
        Ok(self.store.list()?)
    }

    fn get(&self, id: &str) -> RestResult<Record> {
        self.store
            .find_by_id(id)?
            .ok_or_else(|| RestError::not_found(id))
    }

    fn update(&self, id: &str, body: &Value) -> RestResult<Record> {
        let patch = project(body, &self.attributes);

        let updated = self.store.update_with(id, |existing| {
            merge(existing, &patch, &self.attributes, self.omitted)
        })?;

        tracing::info!(sid = %id, fields = patch.len(), "programmer updated");
        Ok(updated)
    }

    fn create(&self, body: &Value) -> RestResult<Record> {
        let fields = project(body, &self.attributes);

        let created = self.store.insert_with(self.ids.as_ref(), |id| {
            with_identifier(&fields, id, &self.attributes)
        })?;

        tracing::info!(sid = %created[ID_ATTRIBUTE], "programmer created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SeedLoader;
    use crate::storage::SequentialGenerator;
    use serde_json::json;

    fn service() -> ProgrammerService {
        let seed = SeedLoader::from_value(json!({"SID": "1", "name": "Ada"})).unwrap();
        ProgrammerService::from_seed(seed).with_id_generator(SequentialGenerator::starting_at(100))
    }

    #[test]
    fn test_list_starts_with_seed() {
        let svc = service();
        let all = svc.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0]["name"], "Ada");
    }

    #[test]
    fn test_get_missing() {
        let err = service().get("nope").unwrap_err();
        assert_eq!(err.to_string(), "Not found for id of: nope");
    }

    #[test]
    fn test_create_overwrites_client_sid() {
        let svc = service();
        let created = svc.create(&json!({"name": "Ada", "SID": "client-supplied"})).unwrap();

        assert_eq!(Value::Object(created.clone()), json!({"SID": "100", "name": "Ada"}));
        assert_eq!(svc.get("100").unwrap(), created);
        assert!(svc.get("client-supplied").is_err());
    }

    #[test]
    fn test_update_is_idempotent() {
        let svc = service();
        let body = json!({"name": "Countess", "foo": "bar"});

        let first = svc.update("1", &body).unwrap();
        let second = svc.update("1", &body).unwrap();

        assert_eq!(first, second);
        assert_eq!(Value::Object(second), json!({"SID": "1", "name": "Countess"}));
    }

    #[test]
    fn test_update_missing_leaves_collection() {
        let svc = service();
        let err = svc.update("ghost", &json!({"name": "x"})).unwrap_err();

        assert_eq!(err, RestError::not_found("ghost"));
        assert_eq!(svc.list().unwrap().len(), 1);
    }

    #[test]
    fn test_update_clear_policy() {
        let seed =
            SeedLoader::from_value(json!({"SID": "1", "name": "Ada", "language": "Analytical"}))
                .unwrap();
        let svc = ProgrammerService::from_seed(seed).with_omitted_fields(OmittedFields::Clear);

        let updated = svc.update("1", &json!({"language": "Note G"})).unwrap();
        assert_eq!(Value::Object(updated), json!({"SID": "1", "language": "Note G"}));
    }
}
