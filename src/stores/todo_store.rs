use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::errors::InternalError;
use crate::types::db::todo::{self, Entity as Todos};
use crate::types::internal::{CreateTodoInput, TodoListQuery, UpdateTodoInput};

/// Data access for the todos table. Receives validated inputs only; all
/// shape checking happened in the validation gateway.
pub struct TodoStore {
    db: DatabaseConnection,
}

impl TodoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn filter_condition(query: &TodoListQuery) -> Condition {
        let mut condition = Condition::all();

        if let Some(completed) = query.completed {
            condition = condition.add(todo::Column::Completed.eq(completed));
        }
        if let Some(priority) = query.priority {
            condition = condition.add(todo::Column::Priority.eq(todo::Priority::from(priority)));
        }
        if let Some(ref search) = query.search {
            condition = condition.add(
                Condition::any()
                    .add(todo::Column::Title.contains(search))
                    .add(todo::Column::Description.contains(search)),
            );
        }

        condition
    }

    /// Fetch one page of todos matching the filter, newest first, together
    /// with the total match count for pagination metadata.
    pub async fn list(
        &self,
        query: &TodoListQuery,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<todo::Model>, u64), InternalError> {
        let condition = Self::filter_condition(query);

        let total = Todos::find()
            .filter(condition.clone())
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_todos", e))?;

        let todos = Todos::find()
            .filter(condition)
            .order_by_desc(todo::Column::CreatedAt)
            .order_by_desc(todo::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_todos", e))?;

        Ok((todos, total))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<todo::Model, InternalError> {
        Todos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_todo", e))?
            .ok_or_else(|| InternalError::not_found("todo", id))
    }

    pub async fn create(&self, input: CreateTodoInput) -> Result<todo::Model, InternalError> {
        let now = Utc::now().timestamp();

        let new_todo = todo::ActiveModel {
            title: Set(input.title),
            description: Set(input.description),
            completed: Set(false),
            priority: Set(input.priority.into()),
            due_date: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        new_todo
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_todo", e))
    }

    /// Partial update: absent fields keep their stored value, `updated_at`
    /// refreshes unconditionally (an empty patch still touches it).
    pub async fn update(
        &self,
        id: i64,
        input: UpdateTodoInput,
    ) -> Result<todo::Model, InternalError> {
        let existing = self.find_by_id(id).await?;
        let mut active: todo::ActiveModel = existing.into();

        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(completed) = input.completed {
            active.completed = Set(completed);
        }
        if let Some(priority) = input.priority {
            active.priority = Set(priority.into());
        }
        if let Some(due_date) = input.due_date {
            active.due_date = Set(Some(due_date));
        }
        active.updated_at = Set(Utc::now().timestamp());

        active
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_todo", e))
    }

    pub async fn delete(&self, id: i64) -> Result<(), InternalError> {
        let result = Todos::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_todo", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::not_found("todo", id));
        }

        Ok(())
    }
}
