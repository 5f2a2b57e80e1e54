//! Status Page — read-only service status dashboard.
//!
//! Serves a fixed service catalog and incident log, filtered by the current
//! view state (search text + category), with an outage banner and an
//! expandable incident history. JSON API plus a minimal HTML page.
//!
//! No DB, no persistence; the only background work is a cosmetic refresh tick.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod refresh;
pub mod render;
pub mod source;
pub mod state;
pub mod types;
pub mod view;

use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

pub use config::Config;
pub use dashboard::{Dashboard, DataState};
pub use error::DashboardError;
pub use filter::{filter_services, should_alert};
pub use source::{EmbeddedSource, FileSource, StatusSource};
pub use state::AppState;
pub use types::{Category, CategoryFilter, DashboardSnapshot, IncidentRecord, ServiceRecord, Status};
pub use view::ViewState;

/// Initialize structured logging. Respects RUST_LOG; defaults to `info` for this crate.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("status_page=info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .init();
}

/// Routes for the HTML page and the JSON API.
pub fn app(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(handlers::health))
    .route("/", get(handlers::page))
    .route("/theme", get(handlers::page_toggle_theme))
    .route("/incidents/:id", get(handlers::page_toggle_incident))
    .route("/api/dashboard", get(handlers::snapshot))
    .route("/api/theme/toggle", post(handlers::toggle_theme))
    .route("/api/search", put(handlers::set_search))
    .route("/api/category", put(handlers::set_category))
    .route("/api/incidents/:id/toggle", post(handlers::toggle_incident))
    .route("/api/services", get(handlers::services))
    .route("/api/incidents", get(handlers::incidents))
    .layer(CorsLayer::permissive())
    .with_state(state)
}
