//! Shared application state for the HTTP layer.

use crate::dashboard::Dashboard;

pub struct AppState {
  pub dashboard: Dashboard,
}

impl AppState {
  pub fn new(dashboard: Dashboard) -> Self {
    Self { dashboard }
  }
}
