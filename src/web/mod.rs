//! Web API module for vrclife.
//!
//! This module provides a REST API over the catalog engine, enabling a
//! web frontend to query the same filtered views the TUI renders.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/items` - Fashion items (filter query params)
//! - `GET /api/worlds` - Worlds (filter query params)
//! - `GET /api/articles` - Knowledge articles (filter query params)
//! - `GET /api/trends` - Trend posts (filter query params)
//! - `GET /api/labels` - Slug → display label tables
//!
//! Filter query params: `category`, `taste`, `type`, `q`, `sort`
//! (`newest`/`oldest`), `limit`.

pub mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::{filter, CatalogDocument, CatalogEntry, CatalogSet, FilterState, Section};
use crate::config::Config;
use crate::models::labels;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Loaded catalog documents (immutable after startup)
    catalogs: Arc<CatalogSet>,
}

impl AppState {
    /// Creates the state by loading every catalog document from
    /// `data_dir`. Sections that fail to load stay empty and answer 503.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        let catalogs = CatalogSet::load_dir(&data_dir);
        for (section, err) in &catalogs.load_errors {
            tracing::warn!("failed to load {}: {err}", section.file_name());
        }
        Self {
            catalogs: Arc::new(catalogs),
        }
    }

    /// Creates the state from an already-loaded catalog set.
    #[must_use]
    pub fn from_catalogs(catalogs: CatalogSet) -> Self {
        Self {
            catalogs: Arc::new(catalogs),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Filter query parameters shared by all section endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// Category slug; omitted or `all` means unconstrained.
    pub category: Option<String>,
    /// Taste/topic tag slug.
    pub taste: Option<String>,
    /// Item type slug.
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    /// Case-insensitive substring query.
    pub q: Option<String>,
    /// Sort order: `newest` or `oldest`.
    pub sort: Option<String>,
    /// Keep only the first N matches.
    pub limit: Option<usize>,
}

impl CatalogQuery {
    /// Builds the filter state the query describes, or an error message
    /// for an unknown sort order.
    pub fn filter_state(&self) -> Result<FilterState, String> {
        let mut state = FilterState::new();
        if let Some(category) = &self.category {
            state.set_category(category);
        }
        state.tag = self.taste.clone();
        state.kind = self.item_type.clone();
        state.query = self.q.clone().unwrap_or_default();
        state.sort = match &self.sort {
            Some(raw) => Some(raw.parse()?),
            None => None,
        };
        Ok(state)
    }
}

/// Filtered section response.
#[derive(Debug, Serialize)]
pub struct SectionResponse<T> {
    /// Section slug.
    pub section: &'static str,
    /// Total entries in the document.
    pub total: usize,
    /// Entries matching the query.
    pub matched: usize,
    /// Document timestamp, when the wrapper carries one.
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Matching entries in render order.
    pub entries: Vec<T>,
}

/// Label table response.
#[derive(Debug, Serialize)]
pub struct LabelsResponse {
    /// Taste slug → display label.
    pub taste: Vec<LabelEntry>,
    /// Type slug → display label.
    pub types: Vec<LabelEntry>,
    /// Category slug → display label.
    pub categories: Vec<LabelEntry>,
}

/// One slug → label pair.
#[derive(Debug, Serialize)]
pub struct LabelEntry {
    /// Classification slug as it appears in documents.
    pub slug: String,
    /// Human-readable label.
    pub label: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

type SectionResult<T> = Result<Json<SectionResponse<T>>, (StatusCode, Json<ApiError>)>;

/// Shared filtering behind every section endpoint.
fn respond_filtered<T: CatalogEntry + Serialize + Clone>(
    section: Section,
    document: &CatalogDocument<T>,
    load_failed: bool,
    query: &CatalogQuery,
) -> SectionResult<T> {
    if load_failed {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::with_details(
                "Catalog document unavailable",
                format!("{} failed to load at startup", section.file_name()),
            )),
        ));
    }

    let state = query
        .filter_state()
        .map_err(|msg| (StatusCode::BAD_REQUEST, Json(ApiError::new(msg))))?;

    let mut matches = filter(&document.items, &state);
    if let Some(limit) = query.limit {
        matches.truncate(limit);
    }

    Ok(Json(SectionResponse {
        section: section.slug(),
        total: document.len(),
        matched: matches.len(),
        last_updated: document.last_updated,
        entries: matches.into_iter().cloned().collect(),
    }))
}

/// GET /api/items - Filtered fashion items.
async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> SectionResult<crate::models::FashionItem> {
    respond_filtered(
        Section::Items,
        &state.catalogs.items,
        state.catalogs.error_for(Section::Items).is_some(),
        &query,
    )
}

/// GET /api/worlds - Filtered worlds.
async fn list_worlds(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> SectionResult<crate::models::World> {
    respond_filtered(
        Section::Worlds,
        &state.catalogs.worlds,
        state.catalogs.error_for(Section::Worlds).is_some(),
        &query,
    )
}

/// GET /api/articles - Filtered knowledge articles.
async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> SectionResult<crate::models::Article> {
    respond_filtered(
        Section::Articles,
        &state.catalogs.articles,
        state.catalogs.error_for(Section::Articles).is_some(),
        &query,
    )
}

/// GET /api/trends - Filtered trend posts.
async fn list_trends(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> SectionResult<crate::models::TrendPost> {
    respond_filtered(
        Section::Trends,
        &state.catalogs.trends,
        state.catalogs.error_for(Section::Trends).is_some(),
        &query,
    )
}

/// GET /api/labels - The consolidated slug → label tables.
async fn list_labels() -> Json<LabelsResponse> {
    let to_entries = |table: &[(&str, &str)]| {
        table
            .iter()
            .map(|(slug, label)| LabelEntry {
                slug: (*slug).to_string(),
                label: (*label).to_string(),
            })
            .collect::<Vec<_>>()
    };

    Json(LabelsResponse {
        taste: to_entries(labels::TASTE_LABELS),
        types: to_entries(labels::TYPE_LABELS),
        categories: to_entries(labels::CATEGORY_LABELS),
    })
}

// ============================================================================
// Router & Server
// ============================================================================

/// Builds the API router over `state`.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for development.
    // The server is designed to run locally alongside the static frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Catalog endpoints
        .route("/api/items", get(list_items))
        .route("/api/worlds", get(list_worlds))
        .route("/api/articles", get(list_articles))
        .route("/api/trends", get(list_trends))
        // Label tables
        .route("/api/labels", get(list_labels))
        // Embedded static frontend with SPA fallback
        .fallback(static_files::serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the API server until the process is stopped.
pub async fn run_server(data_dir: PathBuf, addr: SocketAddr, _config: &Config) -> anyhow::Result<()> {
    let state = AppState::new(data_dir);
    let app = create_router(state);

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
