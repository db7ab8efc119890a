// Database entities - SeaORM models
pub mod todo;
pub mod user;
