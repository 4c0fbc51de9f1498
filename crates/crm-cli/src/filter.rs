//! Client-side views over fetched records: the customer search/filter and
//! the planned/completed visit board.

use crm_core::{
  customer::{Customer, CustomerStatus, CustomerType},
  visit::{Visit, VisitStatus},
};

// ─── Customers ────────────────────────────────────────────────────────────────

/// Search text plus optional type and status filters. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
  pub query:  String,
  pub kind:   Option<CustomerType>,
  pub status: Option<CustomerStatus>,
}

impl CustomerFilter {
  /// Case-insensitive substring match of the query against name, district or
  /// city, combined with the type and status filters.
  pub fn matches(&self, customer: &Customer) -> bool {
    let query = self.query.to_lowercase();
    let matches_search = [&customer.name, &customer.district, &customer.city]
      .iter()
      .any(|field| field.to_lowercase().contains(&query));
    let matches_kind = self.kind.is_none_or(|k| k == customer.kind);
    let matches_status = self.status.is_none_or(|s| s == customer.status);

    matches_search && matches_kind && matches_status
  }

  pub fn apply<'a>(&self, customers: &'a [Customer]) -> Vec<&'a Customer> {
    customers.iter().filter(|c| self.matches(c)).collect()
  }
}

// ─── Visits ───────────────────────────────────────────────────────────────────

/// Visits split by status for the summary header. Cancelled visits appear in
/// neither list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitBoard<'a> {
  pub planned:   Vec<&'a Visit>,
  pub completed: Vec<&'a Visit>,
}

impl<'a> VisitBoard<'a> {
  pub fn new(visits: &'a [Visit]) -> Self {
    let with_status = move |status: VisitStatus| {
      visits.iter().filter(|v| v.status == status).collect::<Vec<_>>()
    };
    Self {
      planned:   with_status(VisitStatus::Planned),
      completed: with_status(VisitStatus::Completed),
    }
  }
}
