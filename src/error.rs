use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, error, web};
use sea_orm::{DbErr, SqlErr};

/// Error type shared by every handler. Each variant maps to one HTTP status and
/// renders as `{ "error": "<message>" }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing input (400).
    #[error("{0}")]
    Validation(String),

    /// The request conflicts with the current state of a row (400, row untouched).
    #[error("{0}")]
    Conflict(String),

    /// No matching active row (404).
    #[error("{0}")]
    NotFound(String),

    /// Anything the store rejected (500 unless it is an integrity violation).
    #[error("Database error: {0}")]
    Database(DbErr),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Integrity violations are the caller's fault, so they are reported as 400
    /// with an explanation instead of the raw driver message.
    fn integrity_message(&self) -> Option<String> {
        let Self::Database(e) = self else {
            return None;
        };
        match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => Some(format!(
                "Cannot complete the request because the record is referenced by other records: {detail}"
            )),
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                Some(format!("A record with the same unique value already exists: {detail}"))
            }
            _ => None,
        }
    }
}

impl From<DbErr> for ApiError {
    fn from(e: DbErr) -> Self {
        match e {
            DbErr::RecordNotFound(message) => Self::NotFound(message),
            other => Self::Database(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) if self.integrity_message().is_some() => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = self.integrity_message().unwrap_or_else(|| self.to_string());

        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::debug!(%status, "{message}");
        }

        HttpResponse::build(status).json(serde_json::json!({ "error": message }))
    }
}

/// JSON body errors are answered in the same `{ "error": ... }` shape as handler errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let message = format!("Invalid request body: {err}");
        error::InternalError::from_response(err, ApiError::Validation(message).error_response())
            .into()
    })
}

/// Non-numeric ids in the path are a bad request, not a missing route.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        let message = format!("Invalid path parameter: {err}");
        error::InternalError::from_response(err, ApiError::Validation(message).error_response())
            .into()
    })
}
