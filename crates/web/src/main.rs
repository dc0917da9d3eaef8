use anyhow::Context;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use features::{matches, players};
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        players::handlers::list_players,
        players::handlers::get_player,
        players::handlers::create_player,
        players::handlers::update_player,
        players::handlers::delete_player,
        matches::handlers::list_matches,
        matches::handlers::get_match,
        matches::handlers::create_match,
        matches::handlers::update_match,
        matches::handlers::delete_match,
        matches::handlers::register_player,
        matches::handlers::unregister_player,
        matches::handlers::sort_groups,
        matches::handlers::save_groups,
    ),
    components(
        schemas(
            storage::dto::player::CreatePlayerRequest,
            storage::dto::player::UpdatePlayerRequest,
            storage::dto::player::PlayerResponse,
            storage::dto::matches::CreateMatchRequest,
            storage::dto::matches::UpdateMatchRequest,
            storage::dto::matches::RegisterPlayerRequest,
            storage::dto::matches::MatchResponse,
            storage::dto::matches::GroupsResponse,
            storage::models::Player,
            storage::models::Groups,
            storage::models::GroupStats,
        )
    ),
    tags(
        (name = "players", description = "Player roster endpoints"),
        (name = "matches", description = "Match scheduling and team sorting endpoints"),
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

fn cors_layer(allowed_origin: Option<&str>) -> anyhow::Result<CorsLayer> {
    let cors = match allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .context("CORS_ALLOWED_ORIGIN is not a valid origin")?,
            )
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Ok(cors.max_age(std::time::Duration::from_secs(3600)))
}

fn app(db: Database, api_keys: ApiKeys, cors: CorsLayer) -> Router {
    Router::new()
        .nest("/api/players", players::routes::routes(api_keys.clone()))
        .nest("/api/matches", matches::routes::routes(api_keys))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db)
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

    tracing::info!("Starting league API");

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
    let cors = cors_layer(config.cors_allowed_origin.as_deref())?;

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Starting server at http://{}", bind_address);

    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app(db, api_keys, cors)).await?;

    Ok(())
}
