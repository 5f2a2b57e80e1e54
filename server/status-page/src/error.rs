//! Structured error types for the status page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::types::ErrorOutput;

#[derive(Debug, Error)]
pub enum DashboardError {
  #[error("source unavailable: {source_name}: {reason}")]
  SourceUnavailable { source_name: String, reason: String },

  #[error("unknown category: {0}")]
  InvalidCategory(String),

  #[error("unknown incident: {0}")]
  UnknownIncident(u32),

  #[error("config: {key}: {reason}")]
  Config { key: String, reason: String },
}

impl DashboardError {
  pub fn unavailable(source_name: &str, reason: impl ToString) -> Self {
    Self::SourceUnavailable {
      source_name: source_name.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn config(key: &str, reason: impl ToString) -> Self {
    Self::Config {
      key: key.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn status_code(&self) -> StatusCode {
    match self {
      Self::SourceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
      Self::InvalidCategory(_) => StatusCode::BAD_REQUEST,
      Self::UnknownIncident(_) => StatusCode::NOT_FOUND,
      Self::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for DashboardError {
  fn into_response(self) -> Response {
    let body = match &self {
      Self::InvalidCategory(_) => ErrorOutput::new(self.to_string()).with_field("category"),
      Self::UnknownIncident(_) => ErrorOutput::new(self.to_string()).with_field("id"),
      _ => ErrorOutput::new(self.to_string()),
    };
    (self.status_code(), Json(body)).into_response()
  }
}
