//! Keepalive HTTP server.
//!
//! `GET /keepalive` answers `OK`; any other path gets a greeting echoing the path.

use axum::http::Uri;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tracing::{debug, info};

pub fn router() -> Router {
    Router::new()
        .route("/keepalive", get(keepalive))
        .fallback(hello)
}

/// Binds `addr` and serves until the process exits.
pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");
    axum::serve(listener, router()).await
}

async fn keepalive() -> &'static str {
    debug!("Keepalive pong");
    "OK"
}

async fn hello(uri: Uri) -> String {
    format!("Hello, {:?}", escape_html(uri.path()))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
