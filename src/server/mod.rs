//! Preview server for the generated site

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Site;

/// Server state
struct ServerState {
    public_dir: PathBuf,
}

/// Serve the public directory until interrupted
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState {
        public_dir: site.public_dir.clone(),
    });

    let app = Router::new()
        .fallback(fallback_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Map a request path to a file under the public directory
///
/// Directories resolve to their `index.html`, and a missing path falls back
/// to the same path with an `.html` extension.
pub fn resolve_path(public_dir: &Path, path: &str) -> PathBuf {
    let clean_path = path.trim_start_matches('/');
    if clean_path.is_empty() {
        return public_dir.join("index.html");
    }

    let candidate = public_dir.join(clean_path);
    if candidate.is_dir() {
        candidate.join("index.html")
    } else if candidate.exists() {
        candidate
    } else {
        let with_html = public_dir.join(format!("{}.html", clean_path.trim_end_matches('/')));
        if with_html.exists() {
            with_html
        } else {
            candidate
        }
    }
}

/// Serves generated pages, and any other file through `ServeDir`
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let file_path = resolve_path(&state.public_dir, request.uri().path());

    let is_html = file_path
        .extension()
        .map(|ext| ext == "html" || ext == "htm")
        .unwrap_or(false);

    if is_html {
        match tokio::fs::read_to_string(&file_path).await {
            Ok(content) => Html(content).into_response(),
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        }
    } else {
        let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
        match service.try_call(request).await {
            Ok(response) => response.into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
        }
    }
}
