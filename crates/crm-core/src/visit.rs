//! Visits: scheduled or completed calls on a customer.
//!
//! A visit names its customer by string only; there is no reference to a
//! [`Customer`](crate::customer::Customer) record.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
  Error, Resource,
  customer::CustomerType,
  patch::{nullable, overwrite},
};

// ─── Enums ───────────────────────────────────────────────────────────────────

/// Lifecycle of a visit. Any transition is allowed, including leaving
/// `completed` again.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
  #[default]
  Planned,
  Completed,
  Cancelled,
}

impl VisitStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Planned => "planned",
      Self::Completed => "completed",
      Self::Cancelled => "cancelled",
    }
  }
}

impl fmt::Display for VisitStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

impl FromStr for VisitStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "planned" => Ok(Self::Planned),
      "completed" => Ok(Self::Completed),
      "cancelled" => Ok(Self::Cancelled),
      other => Err(Error::UnknownVariant {
        kind:  "visit status",
        value: other.to_owned(),
      }),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Low,
  Medium,
  High,
}

impl Priority {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "low",
      Self::Medium => "medium",
      Self::High => "high",
    }
  }
}

impl fmt::Display for Priority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

impl FromStr for Priority {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "low" => Ok(Self::Low),
      "medium" => Ok(Self::Medium),
      "high" => Ok(Self::High),
      other => Err(Error::UnknownVariant {
        kind:  "priority",
        value: other.to_owned(),
      }),
    }
  }
}

// ─── Visit ───────────────────────────────────────────────────────────────────

/// A visit. `date` and `time` are free-form strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
  pub id:                 String,
  pub customer_name:      String,
  pub customer_type:      CustomerType,
  pub location:           String,
  pub date:               String,
  pub time:               String,
  #[serde(default)]
  pub status:             VisitStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes:              Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub priority:           Option<Priority>,
  /// Expected length of the visit in minutes.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub estimated_duration: Option<u32>,
}

// ─── NewVisit ────────────────────────────────────────────────────────────────

/// Body of a create request. Only `customerType` is required; `status`
/// defaults to `planned`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVisit {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:                 Option<String>,
  #[serde(default)]
  pub customer_name:      String,
  pub customer_type:      CustomerType,
  #[serde(default)]
  pub location:           String,
  #[serde(default)]
  pub date:               String,
  #[serde(default)]
  pub time:               String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:             Option<VisitStatus>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes:              Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub priority:           Option<Priority>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub estimated_duration: Option<u32>,
}

impl NewVisit {
  /// Convenience constructor with every optional field left out.
  pub fn new(customer_name: impl Into<String>, customer_type: CustomerType) -> Self {
    Self {
      id: None,
      customer_name: customer_name.into(),
      customer_type,
      location: String::new(),
      date: String::new(),
      time: String::new(),
      status: None,
      notes: None,
      priority: None,
      estimated_duration: None,
    }
  }
}

// ─── VisitPatch ──────────────────────────────────────────────────────────────

/// Body of an update request. An `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub customer_name:      Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub customer_type:      Option<CustomerType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub location:           Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date:               Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time:               Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:             Option<VisitStatus>,
  #[serde(
    default,
    deserialize_with = "nullable",
    skip_serializing_if = "Option::is_none"
  )]
  pub notes:              Option<Option<String>>,
  #[serde(
    default,
    deserialize_with = "nullable",
    skip_serializing_if = "Option::is_none"
  )]
  pub priority:           Option<Option<Priority>>,
  #[serde(
    default,
    deserialize_with = "nullable",
    skip_serializing_if = "Option::is_none"
  )]
  pub estimated_duration: Option<Option<u32>>,
}

impl VisitPatch {
  /// A patch that only moves the visit to `status`.
  pub fn status(status: VisitStatus) -> Self {
    Self { status: Some(status), ..Self::default() }
  }
}

// ─── Resource ────────────────────────────────────────────────────────────────

impl Resource for Visit {
  type Draft = NewVisit;
  type Patch = VisitPatch;

  const NOUN: &'static str = "Visit";
  const COLLECTION: &'static str = "visits";

  fn id(&self) -> &str { &self.id }

  fn requested_id(draft: &NewVisit) -> Option<&str> { draft.id.as_deref() }

  fn from_draft(id: String, draft: NewVisit) -> Self {
    Self {
      id,
      customer_name: draft.customer_name,
      customer_type: draft.customer_type,
      location: draft.location,
      date: draft.date,
      time: draft.time,
      status: draft.status.unwrap_or_default(),
      notes: draft.notes,
      priority: draft.priority,
      estimated_duration: draft.estimated_duration,
    }
  }

  fn apply(&mut self, patch: VisitPatch) {
    overwrite(&mut self.customer_name, patch.customer_name);
    overwrite(&mut self.customer_type, patch.customer_type);
    overwrite(&mut self.location, patch.location);
    overwrite(&mut self.date, patch.date);
    overwrite(&mut self.time, patch.time);
    overwrite(&mut self.status, patch.status);
    overwrite(&mut self.notes, patch.notes);
    overwrite(&mut self.priority, patch.priority);
    overwrite(&mut self.estimated_duration, patch.estimated_duration);
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::demo;

  #[test]
  fn draft_defaults_status_to_planned() {
    let draft: NewVisit = serde_json::from_value(json!({
      "customerName": "Merkez Eczanesi",
      "customerType": "pharmacy",
      "date": "2024-02-01",
      "time": "11:00",
      "estimatedDuration": 20
    }))
    .unwrap();
    let visit = Visit::from_draft("9".to_owned(), draft);
    assert_eq!(visit.status, VisitStatus::Planned);
    assert_eq!(visit.estimated_duration, Some(20));
    assert_eq!(visit.priority, None);
  }

  #[test]
  fn completed_visit_can_return_to_planned() {
    let mut visit = demo::visits().remove(1);
    assert_eq!(visit.status, VisitStatus::Completed);
    visit.apply(VisitPatch::status(VisitStatus::Planned));
    assert_eq!(visit.status, VisitStatus::Planned);
  }

  #[test]
  fn status_patch_keeps_every_other_field() {
    let original = demo::visits().remove(0);
    let mut visit = original.clone();
    visit.apply(VisitPatch::status(VisitStatus::Completed));
    assert_eq!(visit, Visit { status: VisitStatus::Completed, ..original });
  }

  #[test]
  fn null_clears_optional_fields() {
    let mut visit = demo::visits().remove(0);
    let patch: VisitPatch =
      serde_json::from_value(json!({ "priority": null, "estimatedDuration": null }))
        .unwrap();
    visit.apply(patch);
    assert_eq!(visit.priority, None);
    assert_eq!(visit.estimated_duration, None);
    assert!(visit.notes.is_some());
  }

  #[test]
  fn status_patch_serialises_only_status() {
    let value = serde_json::to_value(VisitPatch::status(VisitStatus::Cancelled)).unwrap();
    assert_eq!(value, json!({ "status": "cancelled" }));
  }
}
