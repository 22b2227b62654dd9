use axum::{routing::get, Router};

use crate::{handlers::*, static_assets, AppState};

pub fn create_router() -> Router<AppState> {
    Router::new()
        // Landing page and embedded assets
        .route("/", get(home))
        .route("/static/*path", get(static_assets))
        // Addon manifest
        .route("/manifest.json", get(manifest))
        .route("/mfp/:mfp/psw/:psw/manifest.json", get(manifest_with_params))
        // Catalog (the :id capture carries the `.json` suffix)
        .route("/catalog/:ctype/:id", get(catalog))
        .route("/mfp/:mfp/psw/:psw/catalog/:ctype/:id", get(catalog_with_params))
        // Channel meta
        .route("/meta/:ctype/:id", get(meta))
        .route("/mfp/:mfp/psw/:psw/meta/:ctype/:id", get(meta_with_params))
        // Streams
        .route("/stream/:ctype/:id", get(stream))
        .route("/mfp/:mfp/psw/:psw/stream/:ctype/:id", get(stream_with_params))
        // Health and metrics
        .route("/healthz", get(health_check))
        .route("/metrics", get(metrics))
}

pub fn build_router(state: AppState) -> Router {
    create_router().with_state(state)
}
