pub mod handlers;
pub mod routes;
pub mod state;

pub use handlers::*;
pub use routes::*;
pub use state::*;

use axum::extract::Path;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use rust_embed::RustEmbed;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(RustEmbed)]
#[folder = "assets"]
struct Assets;

/// Fills the landing-page template with the configured domain and the
/// default proxy credentials.
pub fn render_index(domain: &str, default_url: &str, default_psw: &str) -> String {
    let template = Assets::get("index.html")
        .map(|f| String::from_utf8_lossy(&f.data).into_owned())
        .unwrap_or_default();
    template
        .replace("{{domain}}", domain)
        .replace("{{default_url}}", default_url)
        .replace("{{default_psw}}", default_psw)
}

/// Serves files embedded under `assets/static/`.
pub async fn static_assets(Path(path): Path<String>) -> impl IntoResponse {
    match Assets::get(&format!("static/{path}")) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            let mut headers = HeaderMap::new();
            headers.insert(
                axum::http::header::CONTENT_TYPE,
                HeaderValue::from_str(mime.as_ref())
                    .unwrap_or(HeaderValue::from_static("application/octet-stream")),
            );
            (
                StatusCode::OK,
                headers,
                axum::body::Body::from(content.data.into_owned()),
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn start_server(
    bind: String,
    port: u16,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = Router::new().merge(build_router(state)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}")).await?;
    info!("Addon server listening on {}:{}", bind, port);

    axum::serve(listener, app).await?;
    Ok(())
}
