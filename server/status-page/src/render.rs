//! Minimal server-side HTML for a dashboard snapshot.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::types::*;

const BANNER: &str = "Critical Services Experiencing Disruption";

/// Time of day shown in the header.
pub fn format_time(ts: &DateTime<Utc>) -> String {
  ts.format("%H:%M:%S").to_string()
}

/// Full date and time for cards and the footer.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
  ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

pub fn page(snap: &DashboardSnapshot) -> String {
  let mut html = String::new();
  let theme = match snap.theme {
    Theme::Dark => "dark",
    Theme::Light => "light",
  };

  // Writing into a String cannot fail.
  let _ = writeln!(
    html,
    "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>System Status</title></head>\n<body class=\"{theme}\">"
  );
  let _ = writeln!(
    html,
    "<header><h1>System Status</h1><span class=\"last-updated\">Last Updated: {}</span> <a class=\"theme-toggle\" href=\"/theme\">Toggle Dark/Light Mode</a></header>",
    format_time(&snap.last_refreshed)
  );

  match &snap.data {
    DataView::Unavailable { reason } => {
      let _ = writeln!(
        html,
        "<div class=\"unavailable\"><p>Status data unavailable</p><p class=\"reason\">{}</p></div>",
        escape(reason)
      );
    }
    DataView::Ready {
      alert,
      services,
      incidents,
    } => {
      if *alert {
        let _ = writeln!(html, "<div class=\"alert\"><p>{BANNER}</p></div>");
      }
      controls(&mut html, snap);
      service_grid(&mut html, services);
      incident_history(&mut html, incidents);
    }
  }

  let _ = writeln!(
    html,
    "<footer><p>&copy; System Status Dashboard. All rights reserved.</p><p class=\"last-sync\">Last Sync: {}</p></footer>\n</body>\n</html>",
    format_timestamp(&snap.last_refreshed)
  );
  html
}

fn controls(html: &mut String, snap: &DashboardSnapshot) {
  let _ = write!(
    html,
    "<form class=\"controls\" method=\"get\" action=\"/\"><input type=\"text\" name=\"search\" placeholder=\"Search services...\" value=\"{}\"><select name=\"category\">",
    escape(&snap.search_term)
  );
  for option in CategoryFilter::options() {
    let selected = if option == snap.filter_category { " selected" } else { "" };
    let _ = write!(html, "<option value=\"{0}\"{selected}>{0}</option>", option.as_str());
  }
  html.push_str("</select><button type=\"submit\">Filter</button></form>\n");
}

fn service_grid(html: &mut String, services: &[ServiceRecord]) {
  html.push_str("<div class=\"services\">\n");
  for service in services {
    let _ = writeln!(
      html,
      "<div class=\"service\" id=\"service-{id}\"><h2>{name}</h2><span class=\"status status-{status}\">{label}</span><p>{description}</p><span>Category: {category}</span> <span>Response: {response}</span><p class=\"updated\">Last Updated: {updated}</p></div>",
      id = service.id,
      name = escape(&service.name),
      status = service.status.as_str(),
      label = service.status.label(),
      description = escape(&service.description),
      category = service.category,
      response = escape(&service.response_time),
      updated = format_timestamp(&service.last_updated),
    );
  }
  html.push_str("</div>\n");
}

fn incident_history(html: &mut String, incidents: &[IncidentView]) {
  html.push_str("<section class=\"incidents\"><h2>Incident History</h2>\n");
  for view in incidents {
    let i = &view.incident;
    let _ = write!(
      html,
      "<div class=\"incident\" id=\"incident-{id}\"><a href=\"/incidents/{id}\">{service}</a> <span class=\"badge {badge}\">{severity}</span><p>{description}</p>",
      id = i.id,
      service = escape(&i.service),
      badge = i.severity.badge_class(),
      severity = i.severity,
      description = escape(&i.description),
    );
    if view.expanded {
      let _ = write!(
        html,
        "<div class=\"details\"><div><strong>Date:</strong> {}</div><div><strong>Duration:</strong> {}</div><div><strong>Status:</strong> {}</div></div>",
        i.date,
        escape(&i.duration),
        escape(&i.resolution)
      );
    }
    html.push_str("</div>\n");
  }
  html.push_str("</section>\n");
}
