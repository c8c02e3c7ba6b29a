use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::response::{Responder, Response};
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;
use thiserror::Error;

/// Failures of the storage layer, classified by the constraint that tripped.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    UniqueViolation(String),
    #[error("{0}")]
    NotNullViolation(String),
    #[error("{0}")]
    Invalid(String),
    #[error("record not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("migration failed: {0}")]
    Migration(Box<dyn std::error::Error + Send + Sync>),
}

impl From<DieselError> for StoreError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => StoreError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                StoreError::UniqueViolation(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, info) => {
                StoreError::NotNullViolation(info.message().to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ApiError {
    error: String,
}

impl ApiError {
    pub(crate) fn new(error: String) -> ApiError {
        ApiError { error }
    }
}

#[derive(Debug)]
pub(crate) struct ErrorResponse<T = ApiError> {
    json: Json<T>,
    pub(crate) status: Status,
}

impl ErrorResponse<ApiError> {
    pub(crate) fn new(status: Status, error: String) -> ErrorResponse<ApiError> {
        ErrorResponse {
            json: Json(ApiError::new(error)),
            status,
        }
    }
}

impl From<StoreError> for ErrorResponse {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::UniqueViolation(_) => Status { code: 409 },
            StoreError::NotNullViolation(_) | StoreError::Invalid(_) => Status { code: 400 },
            StoreError::NotFound => Status { code: 404 },
            StoreError::Database(_) | StoreError::Migration(_) => Status { code: 500 },
        };
        if status.code == 500 {
            log::error!("{}", err);
        }

        ErrorResponse::new(status, err.to_string())
    }
}

/// Keeps every failure JSON, including rejected request bodies and unknown routes.
#[catch(default)]
pub(crate) fn default_catcher(status: Status, _req: &Request<'_>) -> ErrorResponse {
    ErrorResponse::new(status, status.reason().unwrap_or("Unknown error").to_string())
}

impl<'r, T: serde::Serialize> Responder<'r, 'static> for ErrorResponse<T> {
    fn respond_to(self, req: &'r Request) -> response::Result<'static> {
        Response::build_from(self.json.respond_to(req)?)
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}
