//! Plain-text rendering of records for the terminal.

use std::fmt::Write as _;

use crm_core::{
  customer::{Customer, CustomerType},
  dashboard::{Activity, DashboardStats},
  visit::Visit,
};

pub fn customer_line(c: &Customer) -> String {
  let detail = match c.kind {
    CustomerType::Doctor => [c.specialization.as_deref(), c.hospital.as_deref()]
      .into_iter()
      .flatten()
      .collect::<Vec<_>>()
      .join(", "),
    CustomerType::Pharmacy => c.owner.clone().unwrap_or_default(),
  };
  format!(
    "{:<14} {:<24} {:<9} {:<8} {}, {}  {}",
    c.id, c.name, c.kind, c.status, c.district, c.city, detail
  )
}

pub fn customer_detail(c: &Customer) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{} ({}, {})", c.name, c.kind, c.status);
  let _ = writeln!(out, "  id:       {}", c.id);
  for (label, value) in [
    ("specialization", &c.specialization),
    ("hospital", &c.hospital),
    ("owner", &c.owner),
  ] {
    if let Some(value) = value {
      let _ = writeln!(out, "  {label}: {value}");
    }
  }
  let _ = writeln!(out, "  address:  {}, {}", c.district, c.city);
  let _ = writeln!(out, "  phone:    {}", c.phone);
  let _ = writeln!(out, "  email:    {}", c.email);
  if let Some(notes) = &c.notes {
    let _ = writeln!(out, "  notes:    {notes}");
  }
  out
}

pub fn visit_line(v: &Visit) -> String {
  let priority = v.priority.map(|p| p.as_str()).unwrap_or("-");
  let duration = v
    .estimated_duration
    .map(|m| format!("{m} min"))
    .unwrap_or_default();
  format!(
    "{:<14} {} {}  {:<24} {:<9} {:<10} {:<6} {}  {}",
    v.id, v.date, v.time, v.customer_name, v.customer_type, v.status, priority,
    v.location, duration
  )
}

pub fn dashboard(stats: &DashboardStats, activities: &[Activity]) -> String {
  let mut out = String::new();
  let _ = writeln!(
    out,
    "Customers: {} total, {} active",
    stats.total_customers, stats.active_customers
  );
  let _ = writeln!(
    out,
    "Visits:    {} total, {} completed",
    stats.total_visits, stats.completed_visits
  );
  let _ = writeln!(out, "\nMonthly visits");
  for m in &stats.monthly_visits {
    let bar = "#".repeat(m.visits as usize);
    let _ = writeln!(out, "  {:<8} {:>3} {bar}", m.month, m.visits);
  }
  let _ = writeln!(out, "\nRecent activity");
  for a in activities {
    let _ = writeln!(out, "  {} · {} ({})", a.action, a.user, a.time);
  }
  out
}
