//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::borrow::Cow;
use thiserror::Error;

/// Código SQLSTATE de PostgreSQL para violación de unicidad
const PG_UNIQUE_VIOLATION: &str = "23505";
/// Código SQLSTATE de PostgreSQL para violación de clave foránea
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid {entity} transition: {from} -> {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl ErrorResponse {
    fn new(error: &str, message: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            details: None,
            code: Some(code.to_string()),
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl AppError {
    /// Código HTTP asociado a cada variante
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(e) => match database_error_code(e).as_deref() {
                Some(PG_UNIQUE_VIOLATION) => StatusCode::CONFLICT,
                Some(PG_FOREIGN_KEY_VIOLATION) => StatusCode::UNPROCESSABLE_ENTITY,
                _ if matches!(e, sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidTransition { .. } => StatusCode::CONFLICT,
            AppError::Unauthorized(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn to_error_response(&self) -> ErrorResponse {
        match self {
            AppError::Database(e) => match database_error_code(e).as_deref() {
                Some(PG_UNIQUE_VIOLATION) => ErrorResponse::new(
                    "Conflict",
                    "A record with the same unique value already exists",
                    "UNIQUE_VIOLATION",
                ),
                Some(PG_FOREIGN_KEY_VIOLATION) => ErrorResponse::new(
                    "Unprocessable Entity",
                    "A referenced record does not exist or is still in use",
                    "FOREIGN_KEY_VIOLATION",
                ),
                _ if matches!(e, sqlx::Error::RowNotFound) => {
                    ErrorResponse::new("Not Found", "Record not found", "NOT_FOUND")
                }
                _ => ErrorResponse::new(
                    "Database Error",
                    "An error occurred while accessing the database",
                    "DB_ERROR",
                ),
            },

            AppError::Validation(e) => ErrorResponse::new(
                "Validation Error",
                "The provided data is invalid",
                "VALIDATION_ERROR",
            )
            .with_details(json!(e)),

            AppError::InvalidTransition { entity, from, to } => ErrorResponse::new(
                "Invalid Transition",
                format!("{} cannot move from '{}' to '{}'", entity, from, to),
                "INVALID_TRANSITION",
            )
            .with_details(json!({ "entity": entity, "from": from, "to": to })),

            AppError::Unauthorized(msg) => ErrorResponse::new("Unauthorized", msg.clone(), "UNAUTHORIZED"),
            AppError::Forbidden(msg) => ErrorResponse::new("Forbidden", msg.clone(), "FORBIDDEN"),
            AppError::NotFound(msg) => ErrorResponse::new("Not Found", msg.clone(), "NOT_FOUND"),
            AppError::Conflict(msg) => ErrorResponse::new("Conflict", msg.clone(), "CONFLICT"),
            AppError::BadRequest(msg) => ErrorResponse::new("Bad Request", msg.clone(), "BAD_REQUEST"),

            AppError::Internal(_) => ErrorResponse::new(
                "Internal Server Error",
                "An unexpected error occurred",
                "INTERNAL_ERROR",
            ),

            AppError::RateLimitExceeded => ErrorResponse::new(
                "Rate Limit Exceeded",
                "Too many requests. Please try again later",
                "RATE_LIMIT_EXCEEDED",
            ),

            AppError::ServiceUnavailable(msg) => {
                ErrorResponse::new("Service Unavailable", msg.clone(), "SERVICE_UNAVAILABLE")
            }

            AppError::Jwt(msg) => ErrorResponse::new("JWT Error", msg.clone(), "JWT_ERROR"),

            AppError::ExternalApi(msg) => ErrorResponse::new(
                "External API Error",
                "An error occurred while communicating with external service",
                "EXTERNAL_API_ERROR",
            )
            .with_details(json!({ "external_api_error": msg })),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("❌ {}", self);
        } else {
            tracing::warn!("⚠️ {}", self);
        }

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

fn database_error_code(error: &sqlx::Error) -> Option<String> {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned())
}

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: impl Into<Cow<'static, str>>) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.message = Some(message.into());
    error.add_param("field".into(), &field);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' already exists", resource, field, value))
}

/// Función helper para crear errores de acceso prohibido
pub fn forbidden_error(operation: &str, reason: &str) -> AppError {
    AppError::Forbidden(format!("Cannot {}: {}", operation, reason))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
