use poem_openapi::types::{ParseFromJSON, ToJSON};
use poem_openapi::Object;

use crate::pagination::Pagination;

/// Pagination block of the list envelope.
#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct PaginationMeta {
    /// Current page (1-based)
    pub page: u64,

    /// Page size
    pub limit: u64,

    /// Total matching records
    pub total: u64,

    /// Total number of pages
    #[oai(rename = "totalPages")]
    pub total_pages: u64,
}

impl From<Pagination> for PaginationMeta {
    fn from(p: Pagination) -> Self {
        Self {
            page: p.page,
            limit: p.limit,
            total: p.total,
            total_pages: p.total_pages,
        }
    }
}

/// Success side of the uniform response envelope.
///
/// Every endpoint returns this shape; `success` is always true here. The
/// error side lives in `errors::api::ErrorEnvelope` and is only built by
/// `ApiError`, which keeps the success-flag/status pairing consistent.
#[derive(Object, Debug)]
pub struct ApiEnvelope<T: ParseFromJSON + ToJSON> {
    /// Always true
    pub success: bool,

    /// Payload of the operation
    pub data: Option<T>,

    /// Optional human-readable message
    pub message: Option<String>,

    /// Pagination metadata for list endpoints
    pub meta: Option<PaginationMeta>,
}

impl<T: ParseFromJSON + ToJSON> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            meta: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_meta(mut self, meta: PaginationMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Envelope with no payload, used by delete endpoints.
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            meta: None,
        }
    }
}

/// Response model for the health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Name of the service answering
    pub service: String,

    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}
