use super::{EmployeeStore, StoreError};
use crate::model::employee::{EmployeeDocument, EmployeePayload};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Vec-backed store for handler tests.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    records: Mutex<Vec<EmployeeDocument>>,
    calls: AtomicUsize,
    lose_inserts: bool,
    unreachable: bool,
}

impl MemoryEmployeeStore {
    /// A store whose inserts vanish before the read-back.
    pub fn losing_inserts() -> Self {
        Self {
            lose_inserts: true,
            ..Self::default()
        }
    }

    /// A store whose every call fails the way a dropped connection does.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            let refused = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
            return Err(mongodb::error::Error::from(refused).into());
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find_all(&self) -> Result<Vec<EmployeeDocument>, StoreError> {
        self.touch()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn insert(&self, payload: &EmployeePayload) -> Result<EmployeeDocument, StoreError> {
        self.touch()?;
        let id = ObjectId::new();
        if self.lose_inserts {
            return Err(StoreError::MissingAfterInsert(id));
        }
        let doc = EmployeeDocument {
            id: Some(id),
            ..EmployeeDocument::from_payload(payload)
        };
        self.records.lock().unwrap().push(doc.clone());
        Ok(doc)
    }

    async fn update(&self, id: &ObjectId, payload: &EmployeePayload) -> Result<bool, StoreError> {
        self.touch()?;
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id.as_ref() == Some(id)) {
            Some(record) => {
                record.name = payload.name.clone();
                record.salary = payload.salary;
                record.age = payload.age;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError> {
        self.touch()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id.as_ref() != Some(id));
        Ok(records.len() < before)
    }
}
