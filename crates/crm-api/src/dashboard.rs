//! Handlers for `/dashboard/*`. Stateless; the figures are fixed.

use axum::Json;
use crm_core::dashboard::{self, Activity, DashboardStats, VisitBreakdown};

/// `GET /dashboard/stats`
pub async fn stats() -> Json<DashboardStats> { Json(dashboard::stats()) }

/// `GET /dashboard/visits`
pub async fn visits() -> Json<VisitBreakdown> { Json(dashboard::visit_breakdown()) }

/// `GET /dashboard/activities`
pub async fn activities() -> Json<Vec<Activity>> {
  Json(dashboard::recent_activities())
}
