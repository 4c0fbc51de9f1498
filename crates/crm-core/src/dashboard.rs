//! Dashboard payloads.
//!
//! The three queries return fixed summary figures. They are not computed from
//! the customer or visit stores.

use serde::{Deserialize, Serialize};

// ─── Types ───────────────────────────────────────────────────────────────────

/// Visit count for one month of the chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyVisits {
  pub month:  String,
  pub visits: u32,
}

/// Headline counts plus the monthly series (`GET /dashboard/stats`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
  pub total_customers:  u32,
  pub active_customers: u32,
  pub total_visits:     u32,
  pub completed_visits: u32,
  pub monthly_visits:   Vec<MonthlyVisits>,
}

/// One slice of the completion breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryValue {
  pub category: String,
  pub value:    u32,
}

/// One slice of the per-region breakdown, with its chart colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionValue {
  pub name:  String,
  pub value: u32,
  pub color: String,
}

/// Chart data for `GET /dashboard/visits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitBreakdown {
  pub monthly:     Vec<MonthlyVisits>,
  pub performance: Vec<CategoryValue>,
  pub regions:     Vec<RegionValue>,
}

/// A line in the recent-activity feed. `time` is already human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
  pub id:     u32,
  pub user:   String,
  pub action: String,
  pub time:   String,
}

// ─── Queries ─────────────────────────────────────────────────────────────────

fn monthly_series() -> Vec<MonthlyVisits> {
  [
    ("Ocak", 15),
    ("Şubat", 22),
    ("Mart", 18),
    ("Nisan", 25),
    ("Mayıs", 30),
    ("Haziran", 28),
  ]
  .into_iter()
  .map(|(month, visits)| MonthlyVisits { month: month.to_owned(), visits })
  .collect()
}

pub fn stats() -> DashboardStats {
  DashboardStats {
    total_customers:  45,
    active_customers: 42,
    total_visits:     128,
    completed_visits: 95,
    monthly_visits:   monthly_series(),
  }
}

pub fn visit_breakdown() -> VisitBreakdown {
  let performance = [("Tamamlanan", 95), ("Planlanan", 33), ("İptal Edilen", 5)]
    .into_iter()
    .map(|(category, value)| CategoryValue { category: category.to_owned(), value })
    .collect();

  let regions = [
    ("Ankara", 45, "#8884d8"),
    ("İstanbul", 32, "#82ca9d"),
    ("İzmir", 28, "#ffc658"),
    ("Diğer", 23, "#ff7300"),
  ]
  .into_iter()
  .map(|(name, value, color)| RegionValue {
    name: name.to_owned(),
    value,
    color: color.to_owned(),
  })
  .collect();

  VisitBreakdown { monthly: monthly_series(), performance, regions }
}

pub fn recent_activities() -> Vec<Activity> {
  [
    "Yeni müşteri eklendi: Dr. Ahmet Yılmaz",
    "Ziyaret tamamlandı: Merkez Eczanesi",
    "Yeni ziyaret planlandı: Dr. Fatma Demir",
    "Müşteri güncellendi: Sağlık Eczanesi",
    "Ziyaret iptal edildi: Dr. Mehmet Kaya",
  ]
  .into_iter()
  .zip(["2 saat önce", "4 saat önce", "1 gün önce", "2 gün önce", "3 gün önce"])
  .zip(1..)
  .map(|((action, time), id)| Activity {
    id,
    user: "Demo User".to_owned(),
    action: action.to_owned(),
    time: time.to_owned(),
  })
  .collect()
}
