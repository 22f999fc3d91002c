//! Stocktake server entry point.
//!
//! Loads configuration, connects to PostgreSQL, runs migrations, seeds
//! the date-restriction feature flag, and serves the REST API.

use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use stocktake::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use stocktake::adapters::directory::RandomUserDirectory;
use stocktake::adapters::http::auth::{auth_routes, AuthHandlers};
use stocktake::adapters::http::catalog::{product_routes, warehouse_routes, CatalogHandlers};
use stocktake::adapters::http::flags::{flag_routes, FlagHandlers};
use stocktake::adapters::http::inventory::{inventory_routes, InventoryHandlers};
use stocktake::adapters::http::middleware::{auth_middleware, AuthState};
use stocktake::adapters::http::units::{unit_routes, UnitHandlers};
use stocktake::adapters::http::users::{user_routes, UserHandlers};
use stocktake::adapters::postgres::{
    PostgresCountRepository, PostgresFeatureFlagRepository, PostgresProductRepository,
    PostgresSessionRepository, PostgresUnitRepository, PostgresUserRepository,
    PostgresWarehouseRepository,
};
use stocktake::application::handlers::auth::LoginHandler;
use stocktake::application::handlers::catalog::{ListProductsHandler, ListWarehousesHandler};
use stocktake::application::handlers::flags::{
    CreateFlagHandler, ListFlagsHandler, ToggleFlagHandler, UpdateFlagHandler,
};
use stocktake::application::handlers::inventory::{
    AddProductsHandler, CloseSessionHandler, CreateSessionHandler, GetSessionHandler,
    ListCountsHandler, ListSessionProductsHandler, ListSessionsHandler, RegisterCountHandler,
};
use stocktake::application::handlers::units::{
    CreateUnitHandler, ListUnitsHandler, ToggleUnitHandler, UpdateUnitHandler,
};
use stocktake::application::handlers::users::{
    CreateUserHandler, ListUsersHandler, SyncUsersHandler, UpdateUserHandler,
};
use stocktake::config::AppConfig;
use stocktake::domain::flag::FeatureFlag;
use stocktake::domain::foundation::{FlagId, Timestamp};
use stocktake::domain::inventory::RESTRICT_CREATION_WINDOW_FLAG;
use stocktake::ports::FeatureFlagRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.server.log_level)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("migrations applied");
    }

    let flags = PostgresFeatureFlagRepository::new(pool.clone());
    seed_feature_flags(&flags).await?;

    let app = build_router(&config, pool);
    let addr = config.server.socket_addr();
    tracing::info!(%addr, "stocktake listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Assembles repositories, handlers, and routers into the application.
fn build_router(config: &AppConfig, pool: PgPool) -> Router {
    // Repositories
    let sessions = Arc::new(PostgresSessionRepository::new(pool.clone()));
    let counts = Arc::new(PostgresCountRepository::new(pool.clone()));
    let products = Arc::new(PostgresProductRepository::new(pool.clone()));
    let warehouses = Arc::new(PostgresWarehouseRepository::new(pool.clone()));
    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let units = Arc::new(PostgresUnitRepository::new(pool.clone()));
    let flags = Arc::new(PostgresFeatureFlagRepository::new(pool));

    // Auth and integration adapters
    let tokens = Arc::new(JwtTokenService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_lifetime_minutes,
    ));
    let hasher = Arc::new(Argon2PasswordHasher);
    let directory = Arc::new(RandomUserDirectory::new());

    let inventory = InventoryHandlers {
        create: Arc::new(CreateSessionHandler::new(sessions.clone(), flags.clone())),
        close: Arc::new(CloseSessionHandler::new(sessions.clone())),
        add_products: Arc::new(AddProductsHandler::new(
            sessions.clone(),
            counts.clone(),
            products.clone(),
        )),
        register_count: Arc::new(RegisterCountHandler::new(
            sessions.clone(),
            products.clone(),
            counts.clone(),
        )),
        list_counts: Arc::new(ListCountsHandler::new(
            sessions.clone(),
            counts.clone(),
            products.clone(),
            units.clone(),
        )),
        list_session_products: Arc::new(ListSessionProductsHandler::new(
            sessions.clone(),
            counts.clone(),
            products.clone(),
        )),
        list_sessions: Arc::new(ListSessionsHandler::new(
            sessions.clone(),
            warehouses.clone(),
            counts.clone(),
            users.clone(),
        )),
        get_session: Arc::new(GetSessionHandler::new(
            sessions,
            warehouses.clone(),
            counts,
            users.clone(),
        )),
    };

    let unit_handlers = UnitHandlers {
        create: Arc::new(CreateUnitHandler::new(units.clone())),
        update: Arc::new(UpdateUnitHandler::new(units.clone())),
        toggle: Arc::new(ToggleUnitHandler::new(units.clone())),
        list: Arc::new(ListUnitsHandler::new(units)),
    };

    let user_handlers = UserHandlers {
        create: Arc::new(CreateUserHandler::new(users.clone(), hasher.clone())),
        update: Arc::new(UpdateUserHandler::new(users.clone(), hasher.clone())),
        list: Arc::new(ListUsersHandler::new(users.clone(), warehouses.clone())),
        sync: Arc::new(SyncUsersHandler::new(users.clone(), directory)),
    };

    let flag_handlers = FlagHandlers {
        create: Arc::new(CreateFlagHandler::new(flags.clone())),
        update: Arc::new(UpdateFlagHandler::new(flags.clone())),
        toggle: Arc::new(ToggleFlagHandler::new(flags.clone())),
        list: Arc::new(ListFlagsHandler::new(flags)),
    };

    let catalog = CatalogHandlers {
        list_products: Arc::new(ListProductsHandler::new(products)),
        list_warehouses: Arc::new(ListWarehousesHandler::new(warehouses)),
    };

    let auth_handlers = AuthHandlers {
        login: Arc::new(LoginHandler::new(users, hasher, tokens.clone())),
    };
    let auth_state: AuthState = tokens;

    let api = Router::new()
        .nest("/auth", auth_routes(auth_handlers))
        .nest("/inventory-sessions", inventory_routes(inventory))
        .nest("/measurement-units", unit_routes(unit_handlers))
        .nest("/users", user_routes(user_handlers))
        .nest("/feature-flags", flag_routes(flag_handlers))
        .nest("/products", product_routes(catalog.clone()))
        .nest("/warehouses", warehouse_routes(catalog))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Idempotent seed for the date-restriction flag.
async fn seed_feature_flags(
    flags: &dyn FeatureFlagRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    if flags.get_by_key(RESTRICT_CREATION_WINDOW_FLAG).await?.is_some() {
        tracing::debug!(key = RESTRICT_CREATION_WINDOW_FLAG, "feature flag already seeded");
        return Ok(());
    }
    let flag = FeatureFlag::new(
        FlagId::new(),
        RESTRICT_CREATION_WINDOW_FLAG,
        true,
        Some("Restrict inventory session creation to the first 3 days of the month".to_string()),
        Timestamp::now(),
    )?;
    flags.save(&flag).await?;
    tracing::info!(key = RESTRICT_CREATION_WINDOW_FLAG, "feature flag seeded");
    Ok(())
}
