//! Static file serving for the portal frontend.
//!
//! The committed `static/` directory is embedded into the binary at
//! compile time and served with an SPA fallback, so the API binary is a
//! single self-contained executable.

use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use std::path::PathBuf;

/// Embedded static files for the portal shell.
#[derive(Embed)]
#[folder = "static"]
pub struct StaticAssets;

/// Serves static files with SPA fallback.
///
/// This handler:
/// 1. First tries to serve the exact requested path
/// 2. If not found, tries adding `.html` extension
/// 3. If still not found and path doesn't look like a file, serves
///    `index.html` (SPA fallback)
pub async fn serve_static(request: Request) -> Response {
    let path = request.uri().path();

    // Remove leading slash for embed lookup
    let path = path.trim_start_matches('/');

    // If path is empty or root, serve index.html
    if path.is_empty() {
        return serve_file("index.html");
    }

    // Try to serve the exact path first
    if let Some(content) = StaticAssets::get(path) {
        return file_response(path, content.data.as_ref());
    }

    // Try with .html extension for clean URLs
    let html_path = format!("{path}.html");
    if let Some(content) = StaticAssets::get(&html_path) {
        return file_response(&html_path, content.data.as_ref());
    }

    // Check if this looks like a file request (has extension)
    let looks_like_file = PathBuf::from(path)
        .extension()
        .is_some_and(|ext| !ext.is_empty());

    // If it looks like a file but wasn't found, return 404
    if looks_like_file {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    // SPA fallback: serve index.html for all other routes
    serve_file("index.html")
}

/// Serves a specific file from embedded assets.
fn serve_file(path: &str) -> Response {
    match StaticAssets::get(path) {
        Some(content) => file_response(path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Returns appropriate Cache-Control header based on file path.
///
/// - HTML files: no cache (always revalidate)
/// - Other files: short cache (1 hour)
fn cache_control_for_path(path: &str) -> &'static str {
    if path.ends_with(".html") {
        "no-cache"
    } else {
        "public, max-age=3600"
    }
}
