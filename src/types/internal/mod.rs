// Transient, per-request values produced by the validation gateway
pub mod inputs;

pub use inputs::{
    CreateTodoInput, CreateUserInput, TodoListQuery, UpdateTodoInput, UserListQuery,
};
