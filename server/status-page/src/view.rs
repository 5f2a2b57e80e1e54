//! UI-only view state and its transitions.
//!
//! Every field is independent; no transition touches the underlying data.

use chrono::{DateTime, Utc};

use crate::types::{CategoryFilter, Theme};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
  pub theme: Theme,
  pub search_term: String,
  pub filter_category: CategoryFilter,
  /// At most one incident is expanded at a time.
  pub expanded_incident: Option<u32>,
  /// Cosmetic; moved forward by the refresh tick.
  pub last_refreshed: DateTime<Utc>,
}

impl ViewState {
  pub fn new(now: DateTime<Utc>) -> Self {
    Self {
      theme: Theme::default(),
      search_term: String::new(),
      filter_category: CategoryFilter::All,
      expanded_incident: None,
      last_refreshed: now,
    }
  }

  pub fn toggle_theme(&mut self) {
    self.theme = self.theme.toggled();
  }

  pub fn set_search_term(&mut self, text: impl Into<String>) {
    self.search_term = text.into();
  }

  pub fn set_filter_category(&mut self, category: CategoryFilter) {
    self.filter_category = category;
  }

  /// Expand `id`, or collapse it if it is already the expanded incident.
  /// Expanding a second incident replaces the first.
  pub fn toggle_incident_expansion(&mut self, id: u32) {
    self.expanded_incident = match self.expanded_incident {
      Some(current) if current == id => None,
      _ => Some(id),
    };
  }

  pub fn is_expanded(&self, id: u32) -> bool {
    self.expanded_incident == Some(id)
  }

  pub fn tick(&mut self, now: DateTime<Utc>) {
    self.last_refreshed = now;
  }
}

impl Default for ViewState {
  fn default() -> Self {
    Self::new(Utc::now())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Category;
  use chrono::TimeZone;

  fn state() -> ViewState {
    ViewState::new(Utc.with_ymd_and_hms(2024, 12, 8, 12, 0, 0).unwrap())
  }

  #[test]
  fn defaults() {
    let s = state();
    assert_eq!(s.theme, Theme::Dark);
    assert_eq!(s.search_term, "");
    assert_eq!(s.filter_category, CategoryFilter::All);
    assert_eq!(s.expanded_incident, None);
  }

  #[test]
  fn theme_toggle_flips_and_returns() {
    let mut s = state();
    s.toggle_theme();
    assert_eq!(s.theme, Theme::Light);
    s.toggle_theme();
    assert_eq!(s.theme, Theme::Dark);
  }

  #[test]
  fn search_term_is_replaced_verbatim() {
    let mut s = state();
    s.set_search_term("  Data ");
    assert_eq!(s.search_term, "  Data ");
    s.set_search_term("");
    assert_eq!(s.search_term, "");
  }

  #[test]
  fn category_is_replaced() {
    let mut s = state();
    s.set_filter_category(CategoryFilter::Only(Category::Backend));
    assert_eq!(s.filter_category, CategoryFilter::Only(Category::Backend));
    s.set_filter_category(CategoryFilter::All);
    assert_eq!(s.filter_category, CategoryFilter::All);
  }

  #[test]
  fn toggling_same_incident_twice_clears_it() {
    let mut s = state();
    s.toggle_incident_expansion(1);
    assert!(s.is_expanded(1));
    s.toggle_incident_expansion(1);
    assert_eq!(s.expanded_incident, None);
  }

  #[test]
  fn expanding_another_incident_replaces() {
    let mut s = state();
    s.toggle_incident_expansion(1);
    s.toggle_incident_expansion(2);
    assert_eq!(s.expanded_incident, Some(2));
    assert!(!s.is_expanded(1));
  }

  #[test]
  fn tick_only_moves_last_refreshed() {
    let mut s = state();
    s.set_search_term("api");
    let before = s.clone();
    let later = Utc.with_ymd_and_hms(2024, 12, 8, 12, 1, 0).unwrap();
    s.tick(later);
    assert_eq!(s.last_refreshed, later);
    assert_eq!(s.search_term, before.search_term);
    assert_eq!(s.theme, before.theme);
  }
}
