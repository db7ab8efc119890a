use std::sync::Arc;

use poem::Request;
use poem_openapi::{param::Path, payload::Json, ApiResponse, OpenApi, Tags};

use crate::errors::ApiError;
use crate::pagination::{normalize_page_limit, paginate};
use crate::stores::TodoStore;
use crate::types::dto::common::ApiEnvelope;
use crate::types::dto::todo::TodoResponse;
use crate::validation::schemas::{
    CreateTodoSchema, TodoIdSchema, TodoListQuerySchema, UpdateTodoSchema,
};
use crate::validation::{parse_path, parse_query, validate_value};

/// Todos API endpoints
pub struct TodosApi {
    todo_store: Arc<TodoStore>,
}

impl TodosApi {
    pub fn new(todo_store: Arc<TodoStore>) -> Self {
        Self { todo_store }
    }
}

/// API tags for todo endpoints
#[derive(Tags)]
enum ApiTags {
    /// Todo management endpoints
    Todos,
}

#[derive(ApiResponse, Debug)]
pub enum ListTodosResponse {
    /// One page of todos with pagination metadata
    #[oai(status = 200)]
    Ok(Json<ApiEnvelope<Vec<TodoResponse>>>),
}

#[derive(ApiResponse, Debug)]
pub enum CreateTodoResponse {
    /// Todo created
    #[oai(status = 201)]
    Created(Json<ApiEnvelope<TodoResponse>>),
}

#[derive(ApiResponse, Debug)]
pub enum UpdateTodoResponse {
    /// Todo updated
    #[oai(status = 200)]
    Ok(Json<ApiEnvelope<TodoResponse>>),
}

#[derive(ApiResponse, Debug)]
pub enum DeleteTodoResponse {
    /// Todo deleted; data is always null
    #[oai(status = 200)]
    Ok(Json<ApiEnvelope<serde_json::Value>>),
}

#[OpenApi]
impl TodosApi {
    /// List todos with optional completed/priority/search filters
    #[oai(path = "/todos", method = "get", tag = "ApiTags::Todos")]
    async fn list_todos(&self, request: &Request) -> Result<ListTodosResponse, ApiError> {
        let raw_query = request.uri().query().unwrap_or("");
        let query = parse_query(raw_query, &TodoListQuerySchema)?;

        let (page, limit) = normalize_page_limit(query.page, query.limit);
        let offset = (page - 1).saturating_mul(limit);

        let (todos, total) = self.todo_store.list(&query, offset, limit).await?;
        let meta = paginate(page, limit, total);

        let data: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();
        Ok(ListTodosResponse::Ok(Json(
            ApiEnvelope::ok(data).with_meta(meta.into()),
        )))
    }

    /// Create a new todo
    #[oai(path = "/todos", method = "post", tag = "ApiTags::Todos")]
    async fn create_todo(
        &self,
        body: Json<serde_json::Value>,
    ) -> Result<CreateTodoResponse, ApiError> {
        let input = validate_value(&body.0, &CreateTodoSchema)?;

        let todo = self.todo_store.create(input).await?;
        tracing::debug!(id = todo.id, "todo created");

        Ok(CreateTodoResponse::Created(Json(
            ApiEnvelope::ok(TodoResponse::from(todo)).with_message("Todo created successfully"),
        )))
    }

    /// Partially update a todo; absent fields are left unchanged
    #[oai(path = "/todos/:id", method = "put", tag = "ApiTags::Todos")]
    async fn update_todo(
        &self,
        id: Path<String>,
        body: Json<serde_json::Value>,
    ) -> Result<UpdateTodoResponse, ApiError> {
        let id = parse_path(&id.0, &TodoIdSchema)?;
        let input = validate_value(&body.0, &UpdateTodoSchema)?;

        let todo = self.todo_store.update(id, input).await?;

        Ok(UpdateTodoResponse::Ok(Json(
            ApiEnvelope::ok(TodoResponse::from(todo)).with_message("Todo updated successfully"),
        )))
    }

    /// Delete a todo
    #[oai(path = "/todos/:id", method = "delete", tag = "ApiTags::Todos")]
    async fn delete_todo(&self, id: Path<String>) -> Result<DeleteTodoResponse, ApiError> {
        let id = parse_path(&id.0, &TodoIdSchema)?;

        self.todo_store.delete(id).await?;
        tracing::debug!(id, "todo deleted");

        Ok(DeleteTodoResponse::Ok(Json(ApiEnvelope::ok_empty(
            "Todo deleted successfully",
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;
    use serde_json::json;

    async fn setup_api() -> TodosApi {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        TodosApi::new(Arc::new(TodoStore::new(db)))
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let api = setup_api().await;

        let created = api
            .create_todo(Json(json!({"title": "Buy milk", "priority": "high"})))
            .await
            .expect("create succeeds");
        let CreateTodoResponse::Created(Json(envelope)) = created;
        assert!(envelope.success);
        let todo = envelope.data.expect("todo in envelope");
        assert_eq!(todo.title, "Buy milk");

        let request = Request::builder().uri("/todos".parse().unwrap()).finish();
        let listed = api.list_todos(&request).await.expect("list succeeds");
        let ListTodosResponse::Ok(Json(envelope)) = listed;
        assert!(envelope.success);
        assert_eq!(envelope.data.expect("todos").len(), 1);

        let meta = envelope.meta.expect("pagination meta");
        assert_eq!(meta.total, 1);
        assert_eq!(meta.page, 1);
    }

    #[tokio::test]
    async fn create_with_invalid_body_returns_validation_envelope() {
        let api = setup_api().await;

        let err = api
            .create_todo(Json(json!({"title": ""})))
            .await
            .expect_err("empty title rejected");
        assert_eq!(err.status(), 400);
        assert_eq!(err.envelope().error, "Validation failed");
    }

    #[tokio::test]
    async fn update_with_non_digit_id_returns_validation_envelope() {
        let api = setup_api().await;

        let err = api
            .update_todo(Path("abc".to_string()), Json(json!({})))
            .await
            .expect_err("non-digit id rejected");
        assert_eq!(err.status(), 400);
    }

    #[tokio::test]
    async fn delete_missing_todo_returns_not_found_not_500() {
        let api = setup_api().await;

        let err = api
            .delete_todo(Path("999".to_string()))
            .await
            .expect_err("missing id");
        assert_eq!(err.status(), 404);
        assert!(!err.envelope().success);
    }

    #[tokio::test]
    async fn list_with_huge_page_answers_an_empty_page() {
        let api = setup_api().await;

        api.create_todo(Json(json!({"title": "only one"})))
            .await
            .expect("create");

        let request = Request::builder()
            .uri("/todos?page=18446744073709551615&limit=10".parse().unwrap())
            .finish();
        let ListTodosResponse::Ok(Json(envelope)) =
            api.list_todos(&request).await.expect("list succeeds");

        assert!(envelope.data.expect("todos").is_empty());
        assert_eq!(envelope.meta.expect("meta").total, 1);
    }

    #[tokio::test]
    async fn list_filters_by_query_string() {
        let api = setup_api().await;

        api.create_todo(Json(json!({"title": "walk dog", "priority": "low"})))
            .await
            .expect("create");
        api.create_todo(Json(json!({"title": "file taxes", "priority": "high"})))
            .await
            .expect("create");

        let request = Request::builder()
            .uri("/todos?priority=high".parse().unwrap())
            .finish();
        let ListTodosResponse::Ok(Json(envelope)) =
            api.list_todos(&request).await.expect("list");

        let todos = envelope.data.expect("todos");
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "file taxes");
    }
}
