use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::context::handlers::get_active_context,
        features::festivals::handlers::list_festivals,
        features::festivals::handlers::create_festival,
        features::festivals::handlers::activate_festival,
        features::events::handlers::get_event,
        features::events::handlers::list_events,
        features::events::handlers::create_event,
        features::events::handlers::activate_event,
        features::categories::handlers::list_categories,
        features::categories::handlers::create_category,
        features::categories::handlers::get_categories_by_ids,
        features::categories::handlers::get_category,
        features::categories::handlers::can_delete_category,
        features::categories::handlers::delete_category,
        features::samples::handlers::get_sample,
        features::samples::handlers::list_samples,
        features::samples::handlers::create_sample,
        features::samples::handlers::update_sample,
        features::producers::handlers::list_producers,
        features::producers::handlers::create_producer,
        features::producers::handlers::update_producer,
        features::users::handlers::list_users,
        features::assignments::handlers::assign_judge,
        features::assignments::handlers::unassign_judge,
        features::assignments::handlers::lock_category,
        features::assignments::handlers::list_for_judge,
        features::assignments::handlers::list_for_categories,
        features::scores::handlers::get_score,
        features::scores::handlers::save_score,
        features::scores::handlers::scores_for_judge,
        features::results::handlers::get_event_results,
    ),
    components(
        schemas(
            storage::dto::context::ActiveContextResponse,
            storage::dto::festival::CreateFestivalRequest,
            storage::dto::festival::FestivalResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::category::CanDeleteResponse,
            storage::dto::sample::SampleData,
            storage::dto::sample::SampleResponse,
            storage::dto::producer::ProducerData,
            storage::dto::producer::ProducerResponse,
            storage::dto::user::UserResponse,
            storage::dto::assignment::AssignJudgeRequest,
            storage::dto::assignment::AssignmentResponse,
            storage::dto::score::SaveScoreRequest,
            storage::dto::score::ScoreResponse,
            storage::dto::results::ScoreEntry,
            storage::dto::results::SampleResult,
            storage::dto::results::CategoryResult,
            storage::dto::results::EventResultsResponse,
        )
    ),
    tags(
        (name = "context", description = "Active festival and event resolution"),
        (name = "festivals", description = "Festival management endpoints"),
        (name = "events", description = "Event management endpoints"),
        (name = "categories", description = "Category management endpoints"),
        (name = "samples", description = "Sample management endpoints"),
        (name = "producers", description = "Producer management endpoints"),
        (name = "users", description = "User directory endpoints"),
        (name = "assignments", description = "Judge assignment and locking endpoints"),
        (name = "scores", description = "Score recording endpoints"),
        (name = "results", description = "Aggregated results endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Festival Judging API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .nest("/context", features::context::routes::routes())
        .nest("/festivals", features::festivals::routes::routes(api_keys.clone()))
        .nest("/producers", features::producers::routes::routes(api_keys.clone()))
        .nest("/users", features::users::routes::routes())
        .merge(features::events::routes::routes(api_keys.clone()))
        .merge(features::categories::routes::routes(api_keys.clone()))
        .merge(features::samples::routes::routes(api_keys.clone()))
        .merge(features::assignments::routes::routes(api_keys.clone()))
        .merge(features::scores::routes::routes(api_keys))
        .merge(features::results::routes::routes());

    let app = Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
