use crate::error::ErrorBody;
use crate::model::employee::{Employee, EmployeePayload};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Employee API",
        version = "1.0.0",
        description = r#"
## Employee Records

CRUD over a single `employees` collection in MongoDB.

- `GET /employee` lists every record
- `POST /employee` creates a record; the id is assigned by the database
- `PUT /employee/{id}` overwrites name, salary and age
- `DELETE /employee/{id}` removes a record

Ids are MongoDB ObjectIds written as 24 hex characters. Every error response
has the shape `{"message": ..., "error": ...}`.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee
    ),
    components(schemas(Employee, EmployeePayload, ErrorBody)),
    tags(
        (name = "Employee", description = "Employee management APIs"),
    )
)]
pub struct ApiDoc;
