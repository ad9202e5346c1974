use super::{EmployeeStore, StoreError};
use crate::model::employee::{EmployeeDocument, EmployeePayload};
use crate::utils::db_utils::{EMPLOYEES_COLLECTION, build_update_doc, id_filter};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Collection, Database, bson::doc, bson::oid::ObjectId};
use tracing::debug;

#[derive(Clone)]
pub struct MongoEmployeeStore {
    collection: Collection<EmployeeDocument>,
}

impl MongoEmployeeStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(EMPLOYEES_COLLECTION),
        }
    }
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    async fn find_all(&self) -> Result<Vec<EmployeeDocument>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let employees: Vec<EmployeeDocument> = cursor.try_collect().await?;
        debug!(count = employees.len(), "Fetched employees");
        Ok(employees)
    }

    async fn insert(&self, payload: &EmployeePayload) -> Result<EmployeeDocument, StoreError> {
        let result = self
            .collection
            .insert_one(EmployeeDocument::from_payload(payload))
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))?;
        debug!(employee_id = %id, "Inserted employee");

        self.collection
            .find_one(id_filter(&id))
            .await?
            .ok_or(StoreError::MissingAfterInsert(id))
    }

    async fn update(&self, id: &ObjectId, payload: &EmployeePayload) -> Result<bool, StoreError> {
        let result = self
            .collection
            .update_one(id_filter(id), build_update_doc(payload))
            .await?;
        debug!(employee_id = %id, matched = result.matched_count, "Updated employee");
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        debug!(employee_id = %id, deleted = result.deleted_count, "Deleted employee");
        Ok(result.deleted_count > 0)
    }
}
