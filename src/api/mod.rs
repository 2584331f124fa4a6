mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::store::SharedStore;

/// Router with permissive CORS, for local use and tests.
pub fn create_router(store: SharedStore) -> Router {
    create_router_with_config(store, &ServerConfig::local())
}

pub fn create_router_with_config(store: SharedStore, config: &ServerConfig) -> Router {
    let api = Router::new()
        // Document
        .route(
            "/strategy",
            get(handlers::get_strategy).patch(handlers::patch_strategy),
        )
        // Sections
        .route("/sections", get(handlers::list_sections))
        .route(
            "/sections/{id}",
            get(handlers::get_section).patch(handlers::patch_section),
        )
        .route("/edits", post(handlers::apply_edit))
        // Navigation
        .route(
            "/navigation",
            get(handlers::get_navigation).put(handlers::set_navigation),
        )
        .route("/navigation/next", post(handlers::next_section))
        .route("/navigation/previous", post(handlers::previous_section))
        // Progress & export
        .route("/progress", get(handlers::get_progress))
        .route("/export", get(handlers::export_document))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(config.cors_layer()),
        )
        .with_state(store)
}
