//! Search/category filtering over the service catalog and the outage banner trigger.

use crate::types::{CategoryFilter, ServiceRecord, Status};

/// Services in `catalog` whose category passes `category` and whose name contains
/// `search_term`, in catalog order.
///
/// Matching compares the Unicode-lowercased forms; an empty term matches every name.
pub fn filter_services(
  catalog: &[ServiceRecord],
  search_term: &str,
  category: CategoryFilter,
) -> Vec<ServiceRecord> {
  let needle = search_term.to_lowercase();
  catalog
    .iter()
    .filter(|s| category.matches(s.category) && s.name.to_lowercase().contains(&needle))
    .cloned()
    .collect()
}

/// True iff any visible service is in outage.
pub fn should_alert(filtered: &[ServiceRecord]) -> bool {
  filtered.iter().any(|s| s.status == Status::Outage)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Category;
  use chrono::{TimeZone, Utc};

  fn svc(id: u32, name: &str, status: Status, category: Category) -> ServiceRecord {
    ServiceRecord {
      id,
      name: name.into(),
      status,
      description: String::new(),
      category,
      last_updated: Utc.with_ymd_and_hms(2024, 12, 8, 10, 30, 0).unwrap(),
      response_time: "1ms".into(),
    }
  }

  fn catalog() -> Vec<ServiceRecord> {
    vec![
      svc(1, "Web Application", Status::Operational, Category::Frontend),
      svc(2, "Database Cluster", Status::Degraded, Category::Backend),
      svc(3, "API Services", Status::Operational, Category::Infrastructure),
      svc(4, "Authentication", Status::Outage, Category::Security),
    ]
  }

  fn ids(list: &[ServiceRecord]) -> Vec<u32> {
    list.iter().map(|s| s.id).collect()
  }

  #[test]
  fn empty_search_with_all_is_identity() {
    let c = catalog();
    assert_eq!(filter_services(&c, "", CategoryFilter::All), c);
  }

  #[test]
  fn search_is_case_insensitive_substring() {
    let c = catalog();
    assert_eq!(ids(&filter_services(&c, "DATA", CategoryFilter::All)), [2]);
    assert_eq!(ids(&filter_services(&c, "ti", CategoryFilter::All)), [1, 4]);
    assert_eq!(ids(&filter_services(&c, "i", CategoryFilter::All)), [1, 3, 4]);
    assert_eq!(ids(&filter_services(&c, "E", CategoryFilter::All)), [1, 2, 3, 4]);
  }

  #[test]
  fn search_is_not_trimmed() {
    let c = catalog();
    assert!(filter_services(&c, " web", CategoryFilter::All).is_empty());
    assert_eq!(ids(&filter_services(&c, "web ", CategoryFilter::All)), [1]);
  }

  #[test]
  fn category_filter_is_exact() {
    let c = catalog();
    for category in Category::ALL {
      let out = filter_services(&c, "", CategoryFilter::Only(category));
      assert_eq!(out.len(), 1);
      assert!(out.iter().all(|s| s.category == category));
    }
  }

  #[test]
  fn search_and_category_combine() {
    let c = catalog();
    assert!(filter_services(&c, "data", CategoryFilter::Only(Category::Frontend)).is_empty());
    assert_eq!(
      ids(&filter_services(&c, "data", CategoryFilter::Only(Category::Backend))),
      [2]
    );
  }

  #[test]
  fn unicode_lowercasing_applies() {
    let c = vec![svc(7, "ÜBERSICHT Dienst", Status::Operational, Category::Frontend)];
    assert_eq!(ids(&filter_services(&c, "übersicht", CategoryFilter::All)), [7]);
    // Lowercasing is not case folding: "SS" does not match "ß".
    let c = vec![svc(8, "Straße", Status::Operational, Category::Frontend)];
    assert!(filter_services(&c, "STRASSE", CategoryFilter::All).is_empty());
  }

  #[test]
  fn empty_catalog_yields_empty() {
    assert!(filter_services(&[], "x", CategoryFilter::All).is_empty());
  }

  #[test]
  fn alert_tracks_outage_in_filtered_list() {
    let c = catalog();
    assert!(should_alert(&c));
    assert!(!should_alert(&filter_services(&c, "data", CategoryFilter::All)));
    assert!(!should_alert(&[]));
  }
}
