use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use iptv_models::{
    parse_catalog_genre, CatalogResponse, ErrorShape, Manifest, MediaflowCreds, MetaResponse,
    StreamResponse,
};
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogQuery {
    // Stremio forwards the selected genre as an extra; the catalog id
    // already carries it, so only `search` changes the result.
    pub genre: Option<String>,
    pub search: Option<String>,
}

/// Landing page with the install-link generator form.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(crate::render_index(
        &state.config.server.domain,
        &state.config.mediaflow.default_url,
        &state.config.mediaflow.default_psw,
    ))
}

#[instrument(skip(state))]
pub async fn manifest(State(state): State<AppState>) -> Json<Manifest> {
    let creds = state.default_creds();
    info!("Manifest requested: {}", creds.url);
    state.metrics.record_manifest_request();
    Json(Manifest::new(&creds.url))
}

#[instrument(skip(state, _psw))]
pub async fn manifest_with_params(
    State(state): State<AppState>,
    Path((mfp, _psw)): Path<(String, String)>,
) -> Json<Manifest> {
    info!("Manifest requested with URL params: {}", mfp);
    state.metrics.record_manifest_request();
    Json(Manifest::new(&mfp))
}

#[instrument(skip(state))]
pub async fn catalog(
    State(state): State<AppState>,
    Path((ctype, id)): Path<(String, String)>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogResponse> {
    let creds = state.default_creds();
    serve_catalog(&state, creds, &ctype, &id, query).await
}

#[instrument(skip(state, psw))]
pub async fn catalog_with_params(
    State(state): State<AppState>,
    Path((mfp, psw, ctype, id)): Path<(String, String, String, String)>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogResponse> {
    let creds = MediaflowCreds { url: mfp, password: psw };
    serve_catalog(&state, creds, &ctype, &id, query).await
}

async fn serve_catalog(
    state: &AppState,
    creds: MediaflowCreds,
    ctype: &str,
    id: &str,
    query: CatalogQuery,
) -> Json<CatalogResponse> {
    state.metrics.record_catalog_request();

    let Some(genre) = addressed_catalog(ctype, id) else {
        return Json(CatalogResponse { metas: Vec::new() });
    };

    let metas = state
        .catalog
        .catalog(&creds, &genre, query.search.as_deref())
        .await;
    info!("Serving catalog for {} with {} channels", genre, metas.len());
    Json(CatalogResponse { metas })
}

#[instrument(skip(state))]
pub async fn meta(
    State(state): State<AppState>,
    Path((ctype, id)): Path<(String, String)>,
) -> Json<MetaResponse> {
    let creds = state.default_creds();
    serve_meta(&state, creds, &ctype, &id).await
}

#[instrument(skip(state, psw))]
pub async fn meta_with_params(
    State(state): State<AppState>,
    Path((mfp, psw, ctype, id)): Path<(String, String, String, String)>,
) -> Json<MetaResponse> {
    let creds = MediaflowCreds { url: mfp, password: psw };
    serve_meta(&state, creds, &ctype, &id).await
}

async fn serve_meta(
    state: &AppState,
    creds: MediaflowCreds,
    ctype: &str,
    id: &str,
) -> Json<MetaResponse> {
    state.metrics.record_meta_request();

    let Some(meta_id) = addressed_channel(ctype, id) else {
        return Json(MetaResponse { meta: None });
    };

    let meta = state.catalog.meta(&creds, &meta_id).await;
    Json(MetaResponse { meta })
}

#[instrument(skip(state))]
pub async fn stream(
    State(state): State<AppState>,
    Path((ctype, id)): Path<(String, String)>,
) -> Json<StreamResponse> {
    let creds = state.default_creds();
    serve_stream(&state, creds, &ctype, &id).await
}

#[instrument(skip(state, psw))]
pub async fn stream_with_params(
    State(state): State<AppState>,
    Path((mfp, psw, ctype, id)): Path<(String, String, String, String)>,
) -> Json<StreamResponse> {
    let creds = MediaflowCreds { url: mfp, password: psw };
    serve_stream(&state, creds, &ctype, &id).await
}

async fn serve_stream(
    state: &AppState,
    creds: MediaflowCreds,
    ctype: &str,
    id: &str,
) -> Json<StreamResponse> {
    state.metrics.record_stream_request();

    let Some(stream_id) = addressed_channel(ctype, id) else {
        return Json(StreamResponse { streams: Vec::new() });
    };

    match state.catalog.stream(&creds, &stream_id).await {
        Some(stream) => {
            info!("Serving stream id: {}", stream_id);
            Json(StreamResponse {
                streams: vec![stream],
            })
        }
        None => {
            info!("No matching stream found for channel: {}", stream_id);
            Json(StreamResponse {
                streams: Vec::new(),
            })
        }
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn metrics(
    State(state): State<AppState>,
) -> Result<String, (StatusCode, Json<ErrorShape>)> {
    state.metrics.render().map_err(|e| {
        error!("Failed to render metrics: {}", e);
        (
            StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(e.to_error_shape()),
        )
    })
}

/// Validates an addressed catalog and extracts its genre. Route captures
/// arrive as `{id}.json`, so the suffix is stripped first.
pub fn addressed_catalog(ctype: &str, id: &str) -> Option<String> {
    let id = id.strip_suffix(".json").unwrap_or(id);
    if ctype != "tv" {
        return None;
    }
    parse_catalog_genre(id).map(str::to_string)
}

/// Validates an addressed channel id (`mediaflow-{channel}` plus the
/// `.json` route suffix).
pub fn addressed_channel(ctype: &str, id: &str) -> Option<String> {
    let id = id.strip_suffix(".json").unwrap_or(id);
    if ctype != "tv" || !id.starts_with("mediaflow-") {
        return None;
    }
    Some(id.to_string())
}
