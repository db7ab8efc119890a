// Errors layer - Error type definitions
pub mod api;
pub mod internal;
pub mod validation;

// Re-exports for convenience
pub use api::ApiError;
pub use internal::InternalError;
pub use validation::{ValidationError, Violation};
