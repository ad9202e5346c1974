use crate::store::StoreError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Every error body the API returns.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "error while parsing the body")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "missing field `name` at line 1 column 27", nullable = true)]
    pub error: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("error while parsing the body")]
    InvalidBody(String),

    #[error("invalid employee id")]
    InvalidId(String),

    #[error("Employee not found")]
    NotFound,

    #[error("Internal Server Error")]
    Storage(#[from] StoreError),
}

impl ApiError {
    fn detail(&self) -> Option<String> {
        match self {
            ApiError::InvalidBody(detail) => Some(detail.clone()),
            ApiError::InvalidId(raw) => Some(format!("'{raw}' is not a valid ObjectId")),
            ApiError::NotFound => None,
            ApiError::Storage(e) => Some(e.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
            error: self.detail(),
        })
    }
}
