//! Customers: the doctors and pharmacies a sales representative calls on.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
  Error, Resource,
  patch::{nullable, overwrite},
};

// ─── Enums ───────────────────────────────────────────────────────────────────

/// Discriminator between the two kinds of customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
  Doctor,
  Pharmacy,
}

impl CustomerType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Doctor => "doctor",
      Self::Pharmacy => "pharmacy",
    }
  }
}

impl fmt::Display for CustomerType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

impl FromStr for CustomerType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "doctor" => Ok(Self::Doctor),
      "pharmacy" => Ok(Self::Pharmacy),
      other => Err(Error::UnknownVariant {
        kind:  "customer type",
        value: other.to_owned(),
      }),
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
  #[default]
  Active,
  Inactive,
}

impl CustomerStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Active => "active",
      Self::Inactive => "inactive",
    }
  }
}

impl fmt::Display for CustomerStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

impl FromStr for CustomerStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "active" => Ok(Self::Active),
      "inactive" => Ok(Self::Inactive),
      other => Err(Error::UnknownVariant {
        kind:  "customer status",
        value: other.to_owned(),
      }),
    }
  }
}

// ─── Customer ────────────────────────────────────────────────────────────────

/// A doctor or pharmacy. `specialization` and `hospital` are meaningful for
/// doctors, `owner` for pharmacies; neither pairing is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
  pub id:             String,
  pub name:           String,
  #[serde(rename = "type")]
  pub kind:           CustomerType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub specialization: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hospital:       Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub owner:          Option<String>,
  pub district:       String,
  pub city:           String,
  pub phone:          String,
  pub email:          String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes:          Option<String>,
  #[serde(default)]
  pub status:         CustomerStatus,
}

// ─── NewCustomer ─────────────────────────────────────────────────────────────

/// Body of a create request. Only `type` is required; missing text fields
/// are stored as empty strings and `status` defaults to `active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:             Option<String>,
  #[serde(default)]
  pub name:           String,
  #[serde(rename = "type")]
  pub kind:           CustomerType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub specialization: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hospital:       Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub owner:          Option<String>,
  #[serde(default)]
  pub district:       String,
  #[serde(default)]
  pub city:           String,
  #[serde(default)]
  pub phone:          String,
  #[serde(default)]
  pub email:          String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes:          Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:         Option<CustomerStatus>,
}

impl NewCustomer {
  /// Convenience constructor with every optional field left out.
  pub fn new(name: impl Into<String>, kind: CustomerType) -> Self {
    Self {
      id: None,
      name: name.into(),
      kind,
      specialization: None,
      hospital: None,
      owner: None,
      district: String::new(),
      city: String::new(),
      phone: String::new(),
      email: String::new(),
      notes: None,
      status: None,
    }
  }
}

// ─── CustomerPatch ───────────────────────────────────────────────────────────

/// Body of an update request. An `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name:           Option<String>,
  #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
  pub kind:           Option<CustomerType>,
  #[serde(
    default,
    deserialize_with = "nullable",
    skip_serializing_if = "Option::is_none"
  )]
  pub specialization: Option<Option<String>>,
  #[serde(
    default,
    deserialize_with = "nullable",
    skip_serializing_if = "Option::is_none"
  )]
  pub hospital:       Option<Option<String>>,
  #[serde(
    default,
    deserialize_with = "nullable",
    skip_serializing_if = "Option::is_none"
  )]
  pub owner:          Option<Option<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub district:       Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub city:           Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone:          Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email:          Option<String>,
  #[serde(
    default,
    deserialize_with = "nullable",
    skip_serializing_if = "Option::is_none"
  )]
  pub notes:          Option<Option<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:         Option<CustomerStatus>,
}

// ─── Resource ────────────────────────────────────────────────────────────────

impl Resource for Customer {
  type Draft = NewCustomer;
  type Patch = CustomerPatch;

  const NOUN: &'static str = "Customer";
  const COLLECTION: &'static str = "customers";

  fn id(&self) -> &str { &self.id }

  fn requested_id(draft: &NewCustomer) -> Option<&str> { draft.id.as_deref() }

  fn from_draft(id: String, draft: NewCustomer) -> Self {
    Self {
      id,
      name: draft.name,
      kind: draft.kind,
      specialization: draft.specialization,
      hospital: draft.hospital,
      owner: draft.owner,
      district: draft.district,
      city: draft.city,
      phone: draft.phone,
      email: draft.email,
      notes: draft.notes,
      status: draft.status.unwrap_or_default(),
    }
  }

  fn apply(&mut self, patch: CustomerPatch) {
    overwrite(&mut self.name, patch.name);
    overwrite(&mut self.kind, patch.kind);
    overwrite(&mut self.specialization, patch.specialization);
    overwrite(&mut self.hospital, patch.hospital);
    overwrite(&mut self.owner, patch.owner);
    overwrite(&mut self.district, patch.district);
    overwrite(&mut self.city, patch.city);
    overwrite(&mut self.phone, patch.phone);
    overwrite(&mut self.email, patch.email);
    overwrite(&mut self.notes, patch.notes);
    overwrite(&mut self.status, patch.status);
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn doctor() -> Customer {
    Customer::from_draft(
      "7".to_owned(),
      serde_json::from_value(json!({
        "name": "Dr. X",
        "type": "doctor",
        "hospital": "General",
        "district": "A",
        "city": "B",
        "phone": "555",
        "email": "x@y.z",
        "notes": "call first"
      }))
      .unwrap(),
    )
  }

  #[test]
  fn draft_defaults_status_to_active() {
    let customer = doctor();
    assert_eq!(customer.id, "7");
    assert_eq!(customer.status, CustomerStatus::Active);
    assert_eq!(customer.hospital.as_deref(), Some("General"));
    assert_eq!(customer.owner, None);
  }

  #[test]
  fn draft_accepts_missing_text_fields() {
    let draft: NewCustomer =
      serde_json::from_value(json!({ "type": "pharmacy" })).unwrap();
    let customer = Customer::from_draft("1".to_owned(), draft);
    assert_eq!(customer.name, "");
    assert_eq!(customer.email, "");
    assert_eq!(customer.kind, CustomerType::Pharmacy);
  }

  #[test]
  fn draft_rejects_unknown_type() {
    let draft = serde_json::from_value::<NewCustomer>(json!({ "type": "hospital" }));
    assert!(draft.is_err());
  }

  #[test]
  fn patch_overwrites_present_fields_only() {
    let mut customer = doctor();
    let patch: CustomerPatch = serde_json::from_value(json!({
      "city": "C",
      "status": "inactive",
      "notes": null,
      "id": "ignored"
    }))
    .unwrap();
    customer.apply(patch);

    assert_eq!(customer.id, "7");
    assert_eq!(customer.city, "C");
    assert_eq!(customer.status, CustomerStatus::Inactive);
    assert_eq!(customer.notes, None);
    assert_eq!(customer.name, "Dr. X");
    assert_eq!(customer.hospital.as_deref(), Some("General"));
  }

  #[test]
  fn null_for_a_required_field_keeps_the_value() {
    let mut customer = doctor();
    let patch: CustomerPatch =
      serde_json::from_value(json!({ "name": null, "city": "X" })).unwrap();
    assert_eq!(patch.name, None);
    customer.apply(patch);

    assert_eq!(customer.name, "Dr. X");
    assert_eq!(customer.city, "X");
  }

  #[test]
  fn serialises_with_type_key_and_skips_absent_optionals() {
    let value = serde_json::to_value(doctor()).unwrap();
    assert_eq!(value["type"], "doctor");
    assert_eq!(value["status"], "active");
    assert!(value.get("owner").is_none());
    assert!(value.get("kind").is_none());
  }

  #[test]
  fn parses_enums_from_cli_strings() {
    assert_eq!("pharmacy".parse::<CustomerType>(), Ok(CustomerType::Pharmacy));
    assert_eq!("inactive".parse::<CustomerStatus>(), Ok(CustomerStatus::Inactive));
    assert!("clinic".parse::<CustomerType>().is_err());
  }
}
