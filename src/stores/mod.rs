// Stores layer - Data access and repository pattern
pub mod todo_store;
pub mod user_store;

pub use todo_store::TodoStore;
pub use user_store::UserStore;
