//! The page-store contract the compiler consumes (spec §6.1).

use crate::generator::errors::StoreError;

/// A `(namespace, text)` page identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title {
  pub namespace: String,
  pub text: String,
}

impl std::fmt::Display for Title {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if self.namespace.is_empty() {
      write!(f, "{}", self.text)
    } else {
      write!(f, "{}:{}", self.namespace, self.text)
    }
  }
}

/// Outcome of a write, carrying the first error rather than aborting the
/// whole run (spec §7: "captured per write ... generation continues for
/// unrelated artifacts").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
  pub ok: bool,
  pub last_error: Option<StoreError>,
}

impl WriteOutcome {
  #[must_use]
  pub fn ok() -> Self {
    Self { ok: true, last_error: None }
  }

  #[must_use]
  pub fn failed(error: StoreError) -> Self {
    Self {
      ok: false,
      last_error: Some(error),
    }
  }
}

/// The host-provided wiki page store (spec §6.1).
pub trait PageStore {
  fn make_title(&self, name: &str, namespace: &str) -> Option<Title>;
  fn exists(&self, title: &Title) -> bool;
  fn read(&self, title: &Title) -> Option<String>;
  fn create_or_update(&mut self, title: &Title, content: &str, summary: &str) -> WriteOutcome;
  fn delete(&mut self, title: &Title, reason: &str) -> WriteOutcome;
  fn purge(&mut self, title: &Title);
}
