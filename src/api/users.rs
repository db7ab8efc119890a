use std::sync::Arc;

use poem::Request;
use poem_openapi::{param::Path, payload::Json, ApiResponse, OpenApi, Tags};

use crate::errors::ApiError;
use crate::pagination::{normalize_page_limit, paginate};
use crate::stores::UserStore;
use crate::types::dto::common::ApiEnvelope;
use crate::types::dto::user::UserResponse;
use crate::validation::schemas::{CreateUserSchema, UserIdSchema, UserListQuerySchema};
use crate::validation::{parse_path, parse_query, validate_value};

/// Users API endpoints
pub struct UsersApi {
    user_store: Arc<UserStore>,
}

impl UsersApi {
    pub fn new(user_store: Arc<UserStore>) -> Self {
        Self { user_store }
    }
}

/// API tags for user endpoints
#[derive(Tags)]
enum ApiTags {
    /// User management endpoints
    Users,
}

#[derive(ApiResponse, Debug)]
pub enum ListUsersResponse {
    /// One page of live users with pagination metadata
    #[oai(status = 200)]
    Ok(Json<ApiEnvelope<Vec<UserResponse>>>),
}

#[derive(ApiResponse, Debug)]
pub enum CreateUserResponse {
    /// User created
    #[oai(status = 201)]
    Created(Json<ApiEnvelope<UserResponse>>),
}

#[derive(ApiResponse, Debug)]
pub enum DeleteUserResponse {
    /// User soft-deleted; data is always null
    #[oai(status = 200)]
    Ok(Json<ApiEnvelope<serde_json::Value>>),
}

#[OpenApi]
impl UsersApi {
    /// List users; soft-deleted users are excluded
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn list_users(&self, request: &Request) -> Result<ListUsersResponse, ApiError> {
        let raw_query = request.uri().query().unwrap_or("");
        let query = parse_query(raw_query, &UserListQuerySchema)?;

        let (page, limit) = normalize_page_limit(query.page, query.limit);
        let offset = (page - 1).saturating_mul(limit);

        let (users, total) = self.user_store.list(offset, limit).await?;
        let meta = paginate(page, limit, total);

        let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
        Ok(ListUsersResponse::Ok(Json(
            ApiEnvelope::ok(data)
                .with_message("Users retrieved successfully")
                .with_meta(meta.into()),
        )))
    }

    /// Create a new user
    #[oai(path = "/users", method = "post", tag = "ApiTags::Users")]
    async fn create_user(
        &self,
        body: Json<serde_json::Value>,
    ) -> Result<CreateUserResponse, ApiError> {
        let input = validate_value(&body.0, &CreateUserSchema)?;

        let user = self.user_store.create(input).await?;
        tracing::debug!(id = user.id, "user created");

        Ok(CreateUserResponse::Created(Json(
            ApiEnvelope::ok(UserResponse::from(user)).with_message("User created successfully"),
        )))
    }

    /// Soft-delete a user
    #[oai(path = "/users/:id", method = "delete", tag = "ApiTags::Users")]
    async fn delete_user(&self, id: Path<String>) -> Result<DeleteUserResponse, ApiError> {
        let id = parse_path(&id.0, &UserIdSchema)?;

        self.user_store.soft_delete(id).await?;
        tracing::debug!(id, "user soft-deleted");

        Ok(DeleteUserResponse::Ok(Json(ApiEnvelope::ok_empty(
            "User deleted successfully",
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;
    use serde_json::json;

    async fn setup_api() -> UsersApi {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        UsersApi::new(Arc::new(UserStore::new(db)))
    }

    fn alice() -> serde_json::Value {
        json!({"name": "Alice", "email": "alice@example.com", "password": "hunter2"})
    }

    #[tokio::test]
    async fn created_user_response_has_no_password() {
        let api = setup_api().await;

        let CreateUserResponse::Created(Json(envelope)) =
            api.create_user(Json(alice())).await.expect("create");
        let user = envelope.data.expect("user in envelope");
        assert_eq!(user.email, "alice@example.com");

        let serialized = serde_json::to_string(&user).expect("serializable");
        assert!(!serialized.contains("hunter2"));
        assert!(!serialized.contains("password"));
    }

    #[tokio::test]
    async fn duplicate_email_returns_conflict() {
        let api = setup_api().await;

        api.create_user(Json(alice())).await.expect("first create");
        let err = api
            .create_user(Json(alice()))
            .await
            .expect_err("duplicate email");
        assert_eq!(err.status(), 409);
    }

    #[tokio::test]
    async fn soft_deleted_user_disappears_from_list() {
        let api = setup_api().await;

        let CreateUserResponse::Created(Json(envelope)) =
            api.create_user(Json(alice())).await.expect("create");
        let id = envelope.data.expect("user").id;

        let request = Request::builder().uri("/users".parse().unwrap()).finish();
        let ListUsersResponse::Ok(Json(listed)) = api.list_users(&request).await.expect("list");
        assert_eq!(listed.meta.expect("meta").total, 1);

        api.delete_user(Path(id.to_string())).await.expect("delete");

        let request = Request::builder().uri("/users".parse().unwrap()).finish();
        let ListUsersResponse::Ok(Json(listed)) = api.list_users(&request).await.expect("list");
        assert_eq!(listed.meta.expect("meta").total, 0);
        assert!(listed.data.expect("users").is_empty());

        // Deleting again answers NotFound, the row is only marked
        let err = api
            .delete_user(Path(id.to_string()))
            .await
            .expect_err("already deleted");
        assert_eq!(err.status(), 404);
    }
}
