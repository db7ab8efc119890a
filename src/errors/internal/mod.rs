use thiserror::Error;

pub mod database;

pub use database::DatabaseError;

use crate::errors::validation::ValidationError;

/// Internal error type for store and gateway operations.
///
/// Not exposed via the API - endpoints convert to `ApiError` at the boundary
/// so database detail never reaches the client.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("Unique constraint violated on {field}")]
    Conflict { field: &'static str },

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn not_found(resource: &'static str, id: i64) -> InternalError {
        InternalError::NotFound { resource, id }
    }
}
