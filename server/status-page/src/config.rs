//! Server configuration with sane defaults, overridable from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::DashboardError;

/// Runtime settings for the dashboard server.
#[derive(Debug, Clone)]
pub struct Config {
  /// Interface to bind (internal only by default).
  pub bind: IpAddr,
  pub port: u16,
  /// Period of the cosmetic "last refreshed" tick.
  pub refresh_interval: Duration,
  /// JSON file to read services/incidents from instead of the embedded snapshot.
  pub data_path: Option<PathBuf>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
      port: 5005,
      refresh_interval: Duration::from_secs(60),
      data_path: None,
    }
  }
}

impl Config {
  /// Defaults overridden by `PORT`, `STATUS_PAGE_BIND`, `STATUS_PAGE_REFRESH_SECS`
  /// and `STATUS_PAGE_DATA`.
  pub fn from_env() -> Result<Self, DashboardError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, DashboardError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(port) = lookup("PORT") {
      config.port = port
        .parse()
        .map_err(|e| DashboardError::config("PORT", e))?;
    }
    if let Some(bind) = lookup("STATUS_PAGE_BIND") {
      config.bind = bind
        .parse()
        .map_err(|e| DashboardError::config("STATUS_PAGE_BIND", e))?;
    }
    if let Some(secs) = lookup("STATUS_PAGE_REFRESH_SECS") {
      let secs: u64 = secs
        .parse()
        .map_err(|e| DashboardError::config("STATUS_PAGE_REFRESH_SECS", e))?;
      if secs == 0 {
        return Err(DashboardError::config(
          "STATUS_PAGE_REFRESH_SECS",
          "must be greater than zero",
        ));
      }
      config.refresh_interval = Duration::from_secs(secs);
    }
    if let Some(path) = lookup("STATUS_PAGE_DATA").filter(|p| !p.is_empty()) {
      config.data_path = Some(PathBuf::from(path));
    }

    Ok(config)
  }

  pub fn addr(&self) -> SocketAddr {
    SocketAddr::new(self.bind, self.port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |key: &str| map.get(key).cloned()
  }

  #[test]
  fn defaults_without_env() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.addr().to_string(), "127.0.0.1:5005");
    assert_eq!(config.refresh_interval, Duration::from_secs(60));
    assert!(config.data_path.is_none());
  }

  #[test]
  fn env_overrides_apply() {
    let config = Config::from_lookup(lookup(&[
      ("PORT", "8080"),
      ("STATUS_PAGE_BIND", "0.0.0.0"),
      ("STATUS_PAGE_REFRESH_SECS", "5"),
      ("STATUS_PAGE_DATA", "/tmp/status.json"),
    ]))
    .unwrap();
    assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
    assert_eq!(config.refresh_interval, Duration::from_secs(5));
    assert_eq!(config.data_path, Some(PathBuf::from("/tmp/status.json")));
  }

  #[test]
  fn bad_port_names_the_key() {
    let err = Config::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(err.to_string().contains("PORT"));
  }

  #[test]
  fn zero_refresh_interval_is_rejected() {
    let err = Config::from_lookup(lookup(&[("STATUS_PAGE_REFRESH_SECS", "0")])).unwrap_err();
    assert!(err.to_string().contains("greater than zero"));
  }
}
