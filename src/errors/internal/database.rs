use thiserror::Error;

/// Database-layer failures, tagged with the store operation that hit them.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error during {operation}: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },
}
