use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the record service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("invalid id {0:?}")]
    InvalidId(String),
    #[error("record {0} not found")]
    NotFound(String),
    #[error("{action}: {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl ServiceError {
    pub fn storage(action: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| ServiceError::Storage { action, source }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Storage { .. } | ServiceError::Csv(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ServiceError::Validation(errors) => {
                log::debug!("rejected request: {}", self);
                json!({ "errors": errors })
            }
            ServiceError::InvalidId(_) => json!({ "error": "Invalid id" }),
            ServiceError::NotFound(_) => json!({ "error": "Record not found" }),
            ServiceError::Storage { action, source } => {
                log::error!("{}: {:?}", action, source);
                json!({ "error": action })
            }
            ServiceError::Csv(err) => {
                log::error!("Failed to export CSV: {:?}", err);
                json!({ "error": "Failed to export CSV" })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}
