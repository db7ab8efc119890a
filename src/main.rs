use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use todostash_backend::api::{HealthApi, TodosApi, UsersApi};
use todostash_backend::app_data::AppData;
use todostash_backend::config;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    dotenv::dotenv().ok();

    if let Err(e) = config::init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let database_url = config::database_url();
    let db = config::init_database(&database_url)
        .await
        .expect("Failed to connect to database");

    config::migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    let app_data = AppData::init(db);

    let todos_api = TodosApi::new(app_data.todo_store.clone());
    let users_api = UsersApi::new(app_data.user_store.clone());

    let api_service =
        OpenApiService::new((HealthApi, todos_api, users_api), "Todostash API", "1.0.0")
            .server("http://localhost:3000/api");
    let swagger_ui = api_service.swagger_ui();

    let app = Route::new()
        .nest("/api", api_service)
        .nest("/swagger", swagger_ui);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!("Starting server on http://{}", bind_addr);
    tracing::info!("Swagger UI available at /swagger");

    Server::new(TcpListener::bind(bind_addr)).run(app).await
}
