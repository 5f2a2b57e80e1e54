//! Core types for the status page (JSON contracts + view models).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Closed classifications
// ---------------------------------------------------------------------------

/// Current health of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  Operational,
  Degraded,
  Outage,
}

impl Status {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Operational => "operational",
      Self::Degraded => "degraded",
      Self::Outage => "outage",
    }
  }

  /// Label shown on the service card badge.
  pub fn label(self) -> &'static str {
    match self {
      Self::Operational => "Operational",
      Self::Degraded => "Degraded Performance",
      Self::Outage => "Outage",
    }
  }
}

/// Service classification used as the exact-match filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
  Frontend,
  Backend,
  Infrastructure,
  Security,
}

impl Category {
  pub const ALL: [Category; 4] = [
    Category::Frontend,
    Category::Backend,
    Category::Infrastructure,
    Category::Security,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Frontend => "Frontend",
      Self::Backend => "Backend",
      Self::Infrastructure => "Infrastructure",
      Self::Security => "Security",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Severity of a past incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
  Low,
  Medium,
  High,
}

impl Severity {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "Low",
      Self::Medium => "Medium",
      Self::High => "High",
    }
  }

  /// Badge color class: Low is green, Medium yellow, everything else red.
  pub fn badge_class(self) -> &'static str {
    match self {
      Self::Low => "badge-green",
      Self::Medium => "badge-yellow",
      Self::High => "badge-red",
    }
  }
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Category filter (categories plus "All")
// ---------------------------------------------------------------------------

/// Selected category in the filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
  #[default]
  All,
  Only(Category),
}

impl CategoryFilter {
  /// Options in the order the select control lists them.
  pub fn options() -> impl Iterator<Item = CategoryFilter> {
    std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
  }

  pub fn matches(self, category: Category) -> bool {
    match self {
      Self::All => true,
      Self::Only(c) => c == category,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::All => "All",
      Self::Only(c) => c.as_str(),
    }
  }
}

impl FromStr for CategoryFilter {
  type Err = DashboardError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s == "All" {
      return Ok(Self::All);
    }
    Category::ALL
      .into_iter()
      .find(|c| c.as_str() == s)
      .map(Self::Only)
      .ok_or_else(|| DashboardError::InvalidCategory(s.to_string()))
  }
}

impl TryFrom<String> for CategoryFilter {
  type Error = DashboardError;

  fn try_from(s: String) -> Result<Self, Self::Error> {
    s.parse()
  }
}

impl From<CategoryFilter> for String {
  fn from(f: CategoryFilter) -> Self {
    f.as_str().to_string()
  }
}

impl fmt::Display for CategoryFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Dark,
  Light,
}

impl Theme {
  pub fn toggled(self) -> Self {
    match self {
      Self::Dark => Self::Light,
      Self::Light => Self::Dark,
    }
  }
}

// ---------------------------------------------------------------------------
// Records (immutable, loaded once)
// ---------------------------------------------------------------------------

/// One monitored service. Unknown fields are silently ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
  pub id: u32,
  pub name: String,
  pub status: Status,
  pub description: String,
  pub category: Category,
  pub last_updated: DateTime<Utc>,
  /// Display-only; "N/A" when not applicable.
  pub response_time: String,
}

/// One past disruption. `service` is a free-text name, not a link to a ServiceRecord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
  pub id: u32,
  pub date: NaiveDate,
  pub service: String,
  pub description: String,
  pub duration: String,
  pub severity: Severity,
  pub resolution: String,
}

/// On-disk / embedded shape of the whole data set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusData {
  #[serde(default)]
  pub services: Vec<ServiceRecord>,
  #[serde(default)]
  pub incidents: Vec<IncidentRecord>,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what the API emits)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct IncidentView {
  #[serde(flatten)]
  pub incident: IncidentRecord,
  pub expanded: bool,
}

/// Data portion of a snapshot: either the filtered view or an explicit outage of the source.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DataView {
  Ready {
    alert: bool,
    services: Vec<ServiceRecord>,
    incidents: Vec<IncidentView>,
  },
  Unavailable {
    reason: String,
  },
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
  pub theme: Theme,
  pub search_term: String,
  pub filter_category: CategoryFilter,
  pub last_refreshed: DateTime<Utc>,
  pub data: DataView,
}

impl DashboardSnapshot {
  pub fn alert(&self) -> bool {
    matches!(self.data, DataView::Ready { alert: true, .. })
  }
}

/// Structured error body for failed API calls.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
