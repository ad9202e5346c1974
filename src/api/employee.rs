use crate::{
    error::ApiError,
    model::employee::{Employee, EmployeePayload},
    store::EmployeeStore,
    utils::db_utils::parse_object_id,
};
use actix_web::{HttpResponse, web};
use tracing::{debug, error};

/// List Employees
#[utoipa::path(
    get,
    path = "/employee",
    responses(
        (status = 200, description = "All employee records", body = [Employee]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<dyn EmployeeStore>) -> Result<HttpResponse, ApiError> {
    let employees = store.find_all().await.map_err(|e| {
        error!(error = %e, "Failed to fetch employees");
        ApiError::from(e)
    })?;

    let employees: Vec<Employee> = employees.into_iter().map(Employee::from).collect();
    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
///
/// Any `id` in the body is ignored; the stored copy is read back and returned.
#[utoipa::path(
    post,
    path = "/employee",
    request_body = EmployeePayload,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Malformed body", body = ErrorBody, example = json!({
            "message": "error while parsing the body",
            "error": "missing field `name` at line 1 column 27"
        })),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, ApiError> {
    let created = store.insert(&payload).await.map_err(|e| {
        error!(error = %e, "Failed to create employee");
        ApiError::from(e)
    })?;

    Ok(HttpResponse::Created().json(Employee::from(created)))
}

/// Update Employee
///
/// The response echoes the request body under the path id; it is not re-read.
#[utoipa::path(
    put,
    path = "/employee/{id}",
    params(
        ("id" = String, Path, description = "Employee ObjectId, 24 hex characters")
    ),
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Malformed id or body", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = parse_object_id(&path)?;

    let matched = store.update(&employee_id, &payload).await.map_err(|e| {
        error!(error = %e, %employee_id, "Failed to update employee");
        ApiError::from(e)
    })?;

    if !matched {
        debug!(%employee_id, "Update matched no employee");
        return Err(ApiError::NotFound);
    }

    Ok(HttpResponse::Ok().json(Employee::with_id(&employee_id, payload.into_inner())))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employee/{id}",
    params(
        ("id" = String, Path, description = "Employee ObjectId, 24 hex characters")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = String, example = json!("record deleted")),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = parse_object_id(&path)?;

    let deleted = store.delete(&employee_id).await.map_err(|e| {
        error!(error = %e, %employee_id, "Failed to delete employee");
        ApiError::from(e)
    })?;

    if !deleted {
        debug!(%employee_id, "Delete matched no employee");
        return Err(ApiError::NotFound);
    }

    Ok(HttpResponse::Ok().json("record deleted"))
}
