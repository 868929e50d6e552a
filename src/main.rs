use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use deckdrop_store::ExchangeStore;

mod api;
mod auth;
mod config;

use api::{AppState, MAX_UPLOAD_BYTES};
use auth::AdminGuard;
use config::AppConfig;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health,
        api::submit_file,
        api::list_results,
        api::download_result,
        api::list_exchanges,
        api::list_inbound,
        api::download_inbound,
        api::upload_result,
        api::wipe_exchanges
    ),
    components(schemas(
        api::HealthRes,
        api::FileRes,
        api::ListFilesRes,
        api::UploadRes,
        api::ExchangesRes,
        api::WipeRes
    ))
)]
struct ApiDoc;

/// Main entry point for the DeckDrop exchange server
///
/// Serves the submitter endpoints under `/exchange` and the operator
/// endpoints under `/admin`, with the retention sweep running ahead of
/// every request.
///
/// # Environment Variables
/// - `DECKDROP_ADDR`: listen address (default: "0.0.0.0:3000")
/// - `DECKDROP_DATA_DIR`: storage root for partitions (default: "exchange_data")
/// - `DECKDROP_ADMIN_KEY`: shared operator secret (insecure "admin" fallback)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("deckdrop_run=info".parse()?)
                .add_directive("deckdrop_store=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    if config.uses_fallback_admin_key() {
        tracing::warn!("DECKDROP_ADMIN_KEY not set; using the insecure built-in fallback");
    }

    let store = ExchangeStore::new(config.data_dir())?;

    tracing::info!("++ Starting DeckDrop on {}", config.listen_addr());
    tracing::info!("++ Exchange data in {}", store.root().display());

    let state = AppState {
        store,
        guard: Arc::new(AdminGuard::new(config.admin_key())),
    };

    let admin = Router::new()
        .route(
            "/exchanges",
            get(api::list_exchanges).delete(api::wipe_exchanges),
        )
        .route("/exchanges/:code/inbound", get(api::list_inbound))
        .route(
            "/exchanges/:code/inbound/:filename",
            get(api::download_inbound),
        )
        .route(
            "/exchanges/:code/outbound/:filename",
            put(api::upload_result),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            api::require_admin,
        ));

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/exchange/:code/inbound/:filename", put(api::submit_file))
        .route("/exchange/:code/outbound", get(api::list_results))
        .route(
            "/exchange/:code/outbound/:filename",
            get(api::download_result),
        )
        .nest("/admin", admin)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::sweep_before,
        ))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
