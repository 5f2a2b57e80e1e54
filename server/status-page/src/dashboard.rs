//! The dashboard: loaded data, view state and the refresh timer that belongs to them.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::DashboardError;
use crate::filter;
use crate::refresh::RefreshTimer;
use crate::source::StatusSource;
use crate::types::*;
use crate::view::ViewState;

/// Result of reading the source at startup.
#[derive(Debug, Clone)]
pub enum DataState {
  Ready {
    services: Vec<ServiceRecord>,
    incidents: Vec<IncidentRecord>,
  },
  Unavailable {
    reason: String,
  },
}

impl DataState {
  pub fn load(source: &dyn StatusSource) -> Self {
    match source.load() {
      Ok(StatusData { services, incidents }) => {
        tracing::info!(
          source = source.name(),
          services = services.len(),
          incidents = incidents.len(),
          "status data loaded"
        );
        Self::Ready { services, incidents }
      }
      Err(e) => {
        tracing::warn!(source = source.name(), error = %e, "status data unavailable");
        Self::Unavailable {
          reason: e.to_string(),
        }
      }
    }
  }
}

/// One dashboard view. Holds the immutable data snapshot and the mutable view state;
/// the refresh task, when active, is torn down with the dashboard.
pub struct Dashboard {
  data: DataState,
  view: Arc<Mutex<ViewState>>,
  refresh: Option<RefreshTimer>,
}

impl Dashboard {
  pub fn new(data: DataState) -> Self {
    Self {
      data,
      view: Arc::new(Mutex::new(ViewState::default())),
      refresh: None,
    }
  }

  pub fn from_source(source: &dyn StatusSource) -> Self {
    Self::new(DataState::load(source))
  }

  /// Start the periodic "last refreshed" tick. Restarting replaces the previous timer.
  pub fn activate(&mut self, interval: Duration) {
    self.activate_with_clock(interval, Utc::now);
  }

  /// Like [`Dashboard::activate`], stamping each tick with `clock()`.
  pub fn activate_with_clock<C>(&mut self, interval: Duration, mut clock: C)
  where
    C: FnMut() -> DateTime<Utc> + Send + 'static,
  {
    let view = Arc::clone(&self.view);
    self.refresh = Some(RefreshTimer::start(interval, move || {
      let now = clock();
      lock(&view).tick(now);
      tracing::trace!(at = %now, "view refreshed");
    }));
  }

  /// Cancel the refresh tick, if any.
  pub fn deactivate(&mut self) {
    if let Some(timer) = self.refresh.take() {
      timer.cancel();
    }
  }

  pub fn is_active(&self) -> bool {
    self.refresh.as_ref().is_some_and(RefreshTimer::is_running)
  }

  pub fn data(&self) -> &DataState {
    &self.data
  }

  pub fn services(&self) -> Result<&[ServiceRecord], DashboardError> {
    match &self.data {
      DataState::Ready { services, .. } => Ok(services),
      DataState::Unavailable { reason } => Err(DashboardError::unavailable("services", reason)),
    }
  }

  pub fn incidents(&self) -> Result<&[IncidentRecord], DashboardError> {
    match &self.data {
      DataState::Ready { incidents, .. } => Ok(incidents),
      DataState::Unavailable { reason } => Err(DashboardError::unavailable("incidents", reason)),
    }
  }

  /// Apply one transition to the view state. Transitions never interleave.
  pub fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
    f(&mut lock(&self.view))
  }

  pub fn view(&self) -> ViewState {
    lock(&self.view).clone()
  }

  pub fn toggle_theme(&self) {
    self.update(ViewState::toggle_theme);
  }

  pub fn set_search_term(&self, text: impl Into<String>) {
    let text = text.into();
    self.update(|v| v.set_search_term(text));
  }

  pub fn set_filter_category(&self, category: CategoryFilter) {
    self.update(|v| v.set_filter_category(category));
  }

  /// Toggle expansion of an incident that exists in the log, returning the resulting snapshot.
  pub fn toggle_incident(&self, id: u32) -> Result<DashboardSnapshot, DashboardError> {
    if !self.incidents()?.iter().any(|i| i.id == id) {
      return Err(DashboardError::UnknownIncident(id));
    }
    Ok(self.update_and_snapshot(|v| v.toggle_incident_expansion(id)))
  }

  /// Everything the presentation layer needs, computed from the current view state.
  pub fn snapshot(&self) -> DashboardSnapshot {
    self.update_and_snapshot(|_| ())
  }

  /// Apply a transition and build the snapshot under the same lock, so no other
  /// transition lands between the two.
  pub fn update_and_snapshot(&self, f: impl FnOnce(&mut ViewState)) -> DashboardSnapshot {
    let mut view = lock(&self.view);
    f(&mut view);
    self.build_snapshot(&view)
  }

  fn build_snapshot(&self, view: &ViewState) -> DashboardSnapshot {
    let data = match &self.data {
      DataState::Ready { services, incidents } => {
        let services = filter::filter_services(services, &view.search_term, view.filter_category);
        let alert = filter::should_alert(&services);
        // Only the first record with the expanded id is marked, even if ids repeat.
        let mut expanded_marked = false;
        let incidents = incidents
          .iter()
          .map(|i| {
            let expanded = !expanded_marked && view.is_expanded(i.id);
            expanded_marked |= expanded;
            IncidentView {
              incident: i.clone(),
              expanded,
            }
          })
          .collect();
        DataView::Ready {
          alert,
          services,
          incidents,
        }
      }
      DataState::Unavailable { reason } => DataView::Unavailable {
        reason: reason.clone(),
      },
    };

    DashboardSnapshot {
      theme: view.theme,
      search_term: view.search_term.clone(),
      filter_category: view.filter_category,
      last_refreshed: view.last_refreshed,
      data,
    }
  }
}

impl Drop for Dashboard {
  fn drop(&mut self) {
    self.deactivate();
  }
}

// A panic inside a transition leaves plain data behind; keep serving it.
fn lock(view: &Mutex<ViewState>) -> MutexGuard<'_, ViewState> {
  view.lock().unwrap_or_else(PoisonError::into_inner)
}
