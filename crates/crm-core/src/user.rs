//! The signed-in user shown by clients.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Admin,
  User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:    String,
  pub name:  String,
  pub email: String,
  pub role:  Role,
}

impl User {
  /// The fixed demo account every login resolves to; only the email varies.
  pub fn demo(email: impl Into<String>) -> Self {
    Self {
      id:    "1".to_owned(),
      name:  "Demo User".to_owned(),
      email: email.into(),
      role:  Role::Admin,
    }
  }
}
