mod mongo;

#[cfg(test)]
pub mod memory;

pub use mongo::MongoEmployeeStore;

use crate::model::employee::{EmployeeDocument, EmployeePayload};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("inserted id is not an ObjectId: {0}")]
    UnexpectedId(String),

    #[error("record {0} was inserted but could not be read back")]
    MissingAfterInsert(ObjectId),
}

/// Persistence for employee records. One call per handler.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Every record, in whatever order the storage returns them.
    async fn find_all(&self) -> Result<Vec<EmployeeDocument>, StoreError>;

    /// Insert, then read the stored copy back by its new `_id`.
    async fn insert(&self, payload: &EmployeePayload) -> Result<EmployeeDocument, StoreError>;

    /// Overwrite name, salary and age. `Ok(false)` when nothing matched.
    async fn update(&self, id: &ObjectId, payload: &EmployeePayload) -> Result<bool, StoreError>;

    /// `Ok(false)` when nothing was deleted.
    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError>;
}
