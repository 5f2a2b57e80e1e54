//! Read interface over the service catalog and incident log.
//!
//! The dashboard never writes back; a source is read once at startup.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DashboardError;
use crate::types::{IncidentRecord, ServiceRecord, StatusData};

const EMBEDDED_STATUS: &str = include_str!("../data/status.json");

/// Supplier of the two data collections the dashboard renders.
pub trait StatusSource {
  /// Short name used in logs and error messages.
  fn name(&self) -> &str;

  fn services(&self) -> Result<Vec<ServiceRecord>, DashboardError>;

  fn incidents(&self) -> Result<Vec<IncidentRecord>, DashboardError>;

  /// Both collections from one read of the source.
  fn load(&self) -> Result<StatusData, DashboardError> {
    Ok(StatusData {
      services: self.services()?,
      incidents: self.incidents()?,
    })
  }
}

/// Snapshot compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
  fn data(&self) -> Result<StatusData, DashboardError> {
    parse(self.name(), EMBEDDED_STATUS)
  }
}

impl StatusSource for EmbeddedSource {
  fn name(&self) -> &str {
    "embedded"
  }

  fn services(&self) -> Result<Vec<ServiceRecord>, DashboardError> {
    Ok(self.data()?.services)
  }

  fn incidents(&self) -> Result<Vec<IncidentRecord>, DashboardError> {
    Ok(self.data()?.incidents)
  }

  fn load(&self) -> Result<StatusData, DashboardError> {
    self.data()
  }
}

/// JSON file with the same shape as the embedded snapshot.
#[derive(Debug, Clone)]
pub struct FileSource {
  path: PathBuf,
  name: String,
}

impl FileSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    let path = path.into();
    let name = path.display().to_string();
    Self { path, name }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn data(&self) -> Result<StatusData, DashboardError> {
    let raw = fs::read_to_string(&self.path).map_err(|e| DashboardError::unavailable(&self.name, e))?;
    parse(&self.name, &raw)
  }
}

impl StatusSource for FileSource {
  fn name(&self) -> &str {
    &self.name
  }

  fn services(&self) -> Result<Vec<ServiceRecord>, DashboardError> {
    Ok(self.data()?.services)
  }

  fn incidents(&self) -> Result<Vec<IncidentRecord>, DashboardError> {
    Ok(self.data()?.incidents)
  }

  fn load(&self) -> Result<StatusData, DashboardError> {
    self.data()
  }
}

fn parse(source_name: &str, raw: &str) -> Result<StatusData, DashboardError> {
  let data: StatusData =
    serde_json::from_str(raw).map_err(|e| DashboardError::unavailable(source_name, format!("json: {}", e)))?;
  check_unique_ids(source_name, &data)?;
  Ok(data)
}

/// Service and incident ids must each be unique; a duplicate makes the whole source unusable.
fn check_unique_ids(source_name: &str, data: &StatusData) -> Result<(), DashboardError> {
  let mut seen = HashSet::new();
  for service in &data.services {
    if !seen.insert(service.id) {
      return Err(DashboardError::unavailable(
        source_name,
        format!("duplicate service id {}", service.id),
      ));
    }
  }

  seen.clear();
  for incident in &data.incidents {
    if !seen.insert(incident.id) {
      return Err(DashboardError::unavailable(
        source_name,
        format!("duplicate incident id {}", incident.id),
      ));
    }
  }
  Ok(())
}
