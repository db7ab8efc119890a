// API layer - poem-openapi endpoint implementations
pub mod health;
pub mod todos;
pub mod users;

pub use health::HealthApi;
pub use todos::TodosApi;
pub use users::UsersApi;
