use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::{TodoStore, UserStore};

/// Centralized application data following the main-owned stores pattern.
///
/// Stores are created once in main.rs and shared with the API structs via
/// Arc; there is no other cross-request state in this service.
pub struct AppData {
    pub db: DatabaseConnection,
    pub todo_store: Arc<TodoStore>,
    pub user_store: Arc<UserStore>,
}

impl AppData {
    /// Wire up all stores over an already-migrated connection.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::info!("Initializing AppData");

        let todo_store = Arc::new(TodoStore::new(db.clone()));
        let user_store = Arc::new(UserStore::new(db.clone()));

        Self {
            db,
            todo_store,
            user_store,
        }
    }
}
