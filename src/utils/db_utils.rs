use crate::error::ApiError;
use crate::model::employee::EmployeePayload;
use mongodb::bson::{Document, doc, oid::ObjectId};

pub const EMPLOYEES_COLLECTION: &str = "employees";

/// Parse a path identifier. Anything that is not 24 hex characters is a 400
/// and never reaches the database.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}

pub fn id_filter(id: &ObjectId) -> Document {
    doc! { "_id": *id }
}

/// `$set` over the mutable fields; `_id` is never part of the update.
pub fn build_update_doc(payload: &EmployeePayload) -> Document {
    doc! {
        "$set": {
            "name": payload.name.as_str(),
            "salary": payload.salary,
            "age": payload.age,
        }
    }
}
