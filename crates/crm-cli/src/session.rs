//! The demo login gate.
//!
//! Any non-empty email and password pair logs in. The only record of a
//! session is a token in the session file; nothing is verified against the
//! server, and a restored session always carries the fixed demo user.

use std::{
  fs, io,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use crm_core::user::User;
use uuid::Uuid;

/// Email shown for a session restored from the token file.
pub const RESTORED_EMAIL: &str = "demo@example.com";

/// A logged-in user and their token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
  pub token: String,
  pub user:  User,
}

/// Reads and writes the session token file.
#[derive(Debug, Clone)]
pub struct SessionStore {
  path: PathBuf,
}

impl SessionStore {
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  pub fn path(&self) -> &Path { &self.path }

  /// Accept any non-empty credentials, mint a fresh token and persist it.
  pub fn login(&self, email: &str, password: &str) -> Result<Session> {
    if email.is_empty() || password.is_empty() {
      bail!("email and password are required");
    }

    let token = format!(
      "demo-token-{}-{}",
      Utc::now().timestamp_millis(),
      Uuid::new_v4().simple()
    );
    fs::write(&self.path, &token)
      .with_context(|| format!("writing session file {}", self.path.display()))?;
    tracing::debug!(path = %self.path.display(), "session stored");

    Ok(Session { token, user: User::demo(email) })
  }

  /// A session exists whenever the file holds a non-empty token.
  pub fn restore(&self) -> Result<Option<Session>> {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
      Err(e) => {
        return Err(e)
          .with_context(|| format!("reading session file {}", self.path.display()));
      }
    };

    let token = raw.trim();
    if token.is_empty() {
      return Ok(None);
    }
    Ok(Some(Session {
      token: token.to_owned(),
      user:  User::demo(RESTORED_EMAIL),
    }))
  }

  /// Forget the token. Logging out twice is not an error.
  pub fn logout(&self) -> Result<()> {
    match fs::remove_file(&self.path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
      Err(e) => Err(e)
        .with_context(|| format!("removing session file {}", self.path.display())),
    }
  }
}

#[cfg(test)]
mod tests {
  use crm_core::user::Role;

  use super::*;

  fn store(dir: &tempfile::TempDir) -> SessionStore {
    SessionStore::new(dir.path().join("session"))
  }

  #[test]
  fn login_accepts_any_non_empty_pair() {
    let dir = tempfile::tempdir().unwrap();
    let s = store(&dir);
    let session = s.login("rep@example.com", "x").unwrap();

    assert!(session.token.starts_with("demo-token-"));
    assert_eq!(session.user.email, "rep@example.com");
    assert_eq!(session.user.name, "Demo User");
    assert_eq!(session.user.role, Role::Admin);
  }

  #[test]
  fn login_rejects_empty_fields_and_stores_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let s = store(&dir);
    assert!(s.login("", "secret").is_err());
    assert!(s.login("rep@example.com", "").is_err());
    assert!(s.restore().unwrap().is_none());
  }

  #[test]
  fn tokens_are_unique_per_login() {
    let dir = tempfile::tempdir().unwrap();
    let s = store(&dir);
    let a = s.login("a@example.com", "p").unwrap();
    let b = s.login("a@example.com", "p").unwrap();
    assert_ne!(a.token, b.token);
  }

  #[test]
  fn restore_trusts_any_token_and_uses_demo_user() {
    let dir = tempfile::tempdir().unwrap();
    let s = store(&dir);
    let session = s.login("rep@example.com", "x").unwrap();

    let restored = s.restore().unwrap().unwrap();
    assert_eq!(restored.token, session.token);
    assert_eq!(restored.user.email, RESTORED_EMAIL);

    fs::write(s.path(), "anything at all\n").unwrap();
    assert_eq!(s.restore().unwrap().unwrap().token, "anything at all");
  }

  #[test]
  fn logout_forgets_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let s = store(&dir);
    s.login("rep@example.com", "x").unwrap();
    s.logout().unwrap();
    assert!(s.restore().unwrap().is_none());
    s.logout().unwrap();
  }
}
