use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::errors::InternalError;
use crate::types::db::user::{self, Entity as Users};
use crate::types::internal::CreateUserInput;

/// Data access for the users table. Rows are soft-deleted: `deleted_at` is
/// set instead of removing the row, and every read filters live rows only.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch one page of live users plus the live total.
    pub async fn list(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<user::Model>, u64), InternalError> {
        let total = Users::find()
            .filter(user::Column::DeletedAt.is_null())
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_users", e))?;

        let users = Users::find()
            .filter(user::Column::DeletedAt.is_null())
            .order_by_asc(user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_users", e))?;

        Ok((users, total))
    }

    pub async fn create(&self, input: CreateUserInput) -> Result<user::Model, InternalError> {
        let now = Utc::now().timestamp();

        let new_user = user::ActiveModel {
            name: Set(input.name),
            age: Set(input.age),
            mobile_number: Set(input.mobile_number),
            email: Set(input.email),
            password: Set(input.password),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        new_user.insert(&self.db).await.map_err(|e| {
            // The store surfaces uniqueness violations as Conflict so the
            // API can answer 409 instead of a generic 500
            let message = e.to_string();
            if message.contains("UNIQUE") {
                let field = if message.contains("mobile_number") {
                    "mobile_number"
                } else {
                    "email"
                };
                InternalError::Conflict { field }
            } else {
                InternalError::database("create_user", e)
            }
        })
    }

    /// Soft-delete: marks the row with `deleted_at`. Already-deleted or
    /// missing ids answer NotFound.
    pub async fn soft_delete(&self, id: i64) -> Result<(), InternalError> {
        let existing = Users::find_by_id(id)
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user", e))?
            .ok_or_else(|| InternalError::not_found("user", id))?;

        let now = Utc::now().timestamp();
        let mut active: user::ActiveModel = existing.into();
        active.deleted_at = Set(Some(now));
        active.updated_at = Set(now);

        active
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("soft_delete_user", e))?;

        Ok(())
    }
}
