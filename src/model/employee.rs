use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shape of a document in the `employees` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

impl EmployeeDocument {
    /// New document without an `_id`, so the server assigns one on insert.
    pub fn from_payload(payload: &EmployeePayload) -> Self {
        Self {
            id: None,
            name: payload.name.clone(),
            salary: payload.salary,
            age: payload.age,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "65a1f0c2e4b0a1b2c3d4e5f6",
        "name": "Ann",
        "salary": 5000.0,
        "age": 29.0
    })
)]
pub struct Employee {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[schema(example = "Ann")]
    pub name: String,

    #[schema(example = 5000.0)]
    pub salary: f64,

    #[schema(example = 29.0)]
    pub age: f64,
}

impl Employee {
    pub fn with_id(id: &ObjectId, payload: EmployeePayload) -> Self {
        Self {
            id: id.to_hex(),
            name: payload.name,
            salary: payload.salary,
            age: payload.age,
        }
    }
}

impl From<EmployeeDocument> for Employee {
    fn from(doc: EmployeeDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            salary: doc.salary,
            age: doc.age,
        }
    }
}

/// Request body for create and update. Unknown fields, `id` included, are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct EmployeePayload {
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = 5000.0)]
    pub salary: f64,
    #[schema(example = 29.0)]
    pub age: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_ignores_client_id() {
        let payload: EmployeePayload = serde_json::from_value(json!({
            "id": "not-ours",
            "name": "Ann",
            "salary": 5000,
            "age": 29
        }))
        .unwrap();

        let doc = EmployeeDocument::from_payload(&payload);
        assert_eq!(doc.id, None);
        assert_eq!(doc.name, "Ann");
        assert_eq!(doc.salary, 5000.0);
    }

    #[test]
    fn document_without_id_has_no_underscore_id_field() {
        let doc = EmployeeDocument {
            id: None,
            name: "Bo".into(),
            salary: 1.5,
            age: 40.0,
        };
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert!(!bson.contains_key("_id"));
        assert_eq!(bson.get_str("name").unwrap(), "Bo");
        assert_eq!(bson.get_f64("age").unwrap(), 40.0);
    }

    #[test]
    fn empty_id_is_omitted_from_json() {
        let employee = Employee {
            id: String::new(),
            name: "Cy".into(),
            salary: 10.0,
            age: 20.0,
        };
        let value = serde_json::to_value(&employee).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn document_id_renders_as_hex() {
        let oid = ObjectId::new();
        let employee = Employee::from(EmployeeDocument {
            id: Some(oid),
            name: "Di".into(),
            salary: 3.0,
            age: 33.0,
        });
        assert_eq!(employee.id, oid.to_hex());
        assert_eq!(employee.id.len(), 24);
    }
}
