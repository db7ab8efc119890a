use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::errors::internal::InternalError;
use crate::errors::validation::ValidationError;

/// One field-level validation failure as returned to the client.
#[derive(Object, Debug, Clone)]
pub struct FieldViolation {
    /// Dotted path of the offending field
    pub field: String,

    /// Human-readable message for that field
    pub message: String,
}

/// Error side of the response envelope.
///
/// Mirrors the success envelope shape: `success` is always false, `data`
/// carries field violations when present and never domain data.
#[derive(Object, Debug, Clone)]
pub struct ErrorEnvelope {
    /// Always false
    pub success: bool,

    /// Error category or message
    pub error: String,

    /// Optional human-readable hint
    pub message: Option<String>,

    /// Field-level validation detail, when the failure was a validation one
    pub data: Option<Vec<FieldViolation>>,
}

/// API error surface shared by every endpoint.
///
/// This is the single place allowed to build an error envelope; handlers and
/// stores hand over a `ValidationError` or `InternalError` and get the
/// status/envelope pairing from here, which keeps the success-flag/status
/// invariant in one spot.
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Input failed schema validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorEnvelope>),

    /// No record with the requested identifier
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),

    /// Uniqueness constraint violated
    #[oai(status = 409)]
    Conflict(Json<ErrorEnvelope>),

    /// Internal server error
    #[oai(status = 500)]
    Internal(Json<ErrorEnvelope>),
}

impl ApiError {
    /// Map a `ValidationError` to the 400 envelope, one entry per violation.
    pub fn validation_failed(err: &ValidationError) -> Self {
        let violations = err
            .violations
            .iter()
            .map(|v| FieldViolation {
                field: v.path.clone(),
                message: v.message.clone(),
            })
            .collect();

        ApiError::ValidationFailed(Json(ErrorEnvelope {
            success: false,
            error: "Validation failed".to_string(),
            message: Some("Please check your input data".to_string()),
            data: Some(violations),
        }))
    }

    pub fn not_found(resource: &str, id: i64) -> Self {
        ApiError::NotFound(Json(ErrorEnvelope {
            success: false,
            error: format!("{} with id {} not found", resource, id),
            message: None,
            data: None,
        }))
    }

    pub fn conflict(field: &str) -> Self {
        ApiError::Conflict(Json(ErrorEnvelope {
            success: false,
            error: format!("A record with this {} already exists", field),
            message: None,
            data: None,
        }))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(Json(ErrorEnvelope {
            success: false,
            error: message.into(),
            message: None,
            data: None,
        }))
    }

    /// The error-normalization chokepoint: every failure an endpoint sees is
    /// funneled through here. Database detail is logged and replaced with a
    /// generic message.
    pub fn from_internal(err: InternalError) -> Self {
        match err {
            InternalError::Validation(ref v) => ApiError::validation_failed(v),
            InternalError::NotFound { resource, id } => ApiError::not_found(resource, id),
            InternalError::Conflict { field } => ApiError::conflict(field),
            InternalError::Database(ref db_err) => {
                tracing::error!(error = %db_err, "database operation failed");
                ApiError::internal("Internal server error")
            }
        }
    }

    /// HTTP status this variant maps to.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::ValidationFailed(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn envelope(&self) -> &ErrorEnvelope {
        match self {
            ApiError::ValidationFailed(Json(e))
            | ApiError::NotFound(Json(e))
            | ApiError::Conflict(Json(e))
            | ApiError::Internal(Json(e)) => e,
        }
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        ApiError::from_internal(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation_failed(&err)
    }
}
