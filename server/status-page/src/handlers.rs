//! HTTP handlers for the dashboard.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::DashboardError;
use crate::render;
use crate::state::AppState;
use crate::types::{CategoryFilter, DashboardSnapshot, IncidentRecord, ServiceRecord};
use crate::view::ViewState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
  #[serde(default)]
  pub search: Option<String>,
  #[serde(default)]
  pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
  pub term: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryBody {
  pub category: String,
}

pub async fn health() -> &'static str {
  "ok"
}

/// HTML page. Form parameters, when present, are applied before rendering.
pub async fn page(
  State(state): State<Arc<AppState>>,
  Query(query): Query<PageQuery>,
) -> Result<Html<String>, DashboardError> {
  let category = query
    .category
    .as_deref()
    .map(str::parse::<CategoryFilter>)
    .transpose()?;
  let snap = state.dashboard.update_and_snapshot(|v| {
    if let Some(term) = query.search {
      v.set_search_term(term);
    }
    if let Some(category) = category {
      v.set_filter_category(category);
    }
  });
  Ok(Html(render::page(&snap)))
}

pub async fn page_toggle_theme(State(state): State<Arc<AppState>>) -> Redirect {
  state.dashboard.toggle_theme();
  Redirect::to("/")
}

pub async fn page_toggle_incident(
  State(state): State<Arc<AppState>>,
  Path(id): Path<u32>,
) -> Result<Redirect, DashboardError> {
  state.dashboard.toggle_incident(id)?;
  Ok(Redirect::to("/"))
}

pub async fn snapshot(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
  Json(state.dashboard.snapshot())
}

pub async fn toggle_theme(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
  let snap = state.dashboard.update_and_snapshot(ViewState::toggle_theme);
  tracing::debug!(theme = ?snap.theme, "theme toggled");
  Json(snap)
}

pub async fn set_search(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SearchBody>,
) -> Json<DashboardSnapshot> {
  tracing::debug!(term = %body.term, "search term set");
  Json(state.dashboard.update_and_snapshot(|v| v.set_search_term(body.term)))
}

pub async fn set_category(
  State(state): State<Arc<AppState>>,
  Json(body): Json<CategoryBody>,
) -> Result<Json<DashboardSnapshot>, DashboardError> {
  let category: CategoryFilter = body.category.parse().map_err(|e| {
    tracing::warn!(category = %body.category, "rejected category");
    e
  })?;
  Ok(Json(state.dashboard.update_and_snapshot(|v| v.set_filter_category(category))))
}

pub async fn toggle_incident(
  State(state): State<Arc<AppState>>,
  Path(id): Path<u32>,
) -> Result<Json<DashboardSnapshot>, DashboardError> {
  Ok(Json(state.dashboard.toggle_incident(id)?))
}

pub async fn services(
  State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ServiceRecord>>, DashboardError> {
  Ok(Json(state.dashboard.services()?.to_vec()))
}

pub async fn incidents(
  State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IncidentRecord>>, DashboardError> {
  Ok(Json(state.dashboard.incidents()?.to_vec()))
}
