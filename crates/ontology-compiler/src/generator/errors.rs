//! Structured error taxonomy (spec §7).
//!
//! Every contract boundary in this crate returns a `Result` with one of
//! these enums rather than panicking — panics are reserved for internal
//! invariant violations (a merge producing a duplicate, a resolver
//! returning an empty linearization), which indicate a bug in the compiler
//! itself rather than a problem with caller input.

use thiserror::Error;

/// A single structural problem found while constructing a schema entity or
/// validating a loaded schema document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
  #[error("{kind} name must not be empty")]
  EmptyName { kind: &'static str },

  #[error("{kind} name '{name}' contains the wiki-forbidden character '{character}'")]
  ForbiddenCharacter {
    kind: &'static str,
    name: String,
    character: char,
  },

  #[error("property '{name}' declares allowedValues but the list is empty")]
  EmptyAllowedValues { name: String },

  #[error("property '{name}' declares duplicate allowedValues entries: {duplicates:?}")]
  DuplicateAllowedValues { name: String, duplicates: Vec<String> },
}

/// Errors raised while resolving inheritance (spec §4.2) or a multi-category
/// selection (spec §4.3 / §6.4).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolverError {
  #[error("cyclic inheritance detected: {}", chain.join(" -> "))]
  Cycle { chain: Vec<String> },

  #[error("category '{name}' was requested but is not defined")]
  UnknownCategory { name: String },

  #[error("unknown categories requested: {}", names.join(", "))]
  UnknownCategories { names: Vec<String> },

  #[error("at least one category name must be supplied")]
  EmptyCategoryList,
}

/// Errors raised while loading and validating a schema document (spec §6.3 /
/// §7).
#[derive(Debug, Error)]
pub enum LoadError {
  #[error("could not read schema file '{path}': {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error(transparent)]
  Parse(#[from] ontology_compiler_support::SchemaDiagnosticsError),

  #[error("schema document is structurally invalid")]
  Invalid { errors: Vec<ValidationIssue> },
}

/// One validation finding: an error aborts the import, a warning does not
/// (spec §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
  pub severity: Severity,
  pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Error,
  Warning,
}

impl ValidationIssue {
  #[must_use]
  pub fn error(message: impl Into<String>) -> Self {
    Self {
      severity: Severity::Error,
      message: message.into(),
    }
  }

  #[must_use]
  pub fn warning(message: impl Into<String>) -> Self {
    Self {
      severity: Severity::Warning,
      message: message.into(),
    }
  }

  #[must_use]
  pub fn is_error(&self) -> bool {
    matches!(self.severity, Severity::Error)
  }
}

/// Errors raised while writing through a [`crate::generator::stores::PageStore`]
/// (spec §7: "captured per write; the operation returns a `Result` with
/// `ok=false` ... generation continues for unrelated artifacts").
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
  #[error("write to '{title}' failed: {reason}")]
  WriteFailed { title: String, reason: String },

  #[error("delete of '{title}' failed: {reason}")]
  DeleteFailed { title: String, reason: String },

  #[error("'{name}' does not resolve to a valid page title in namespace '{namespace}'")]
  InvalidTitle { name: String, namespace: String },
}

/// Errors raised by the layered installer (spec §4.10).
#[derive(Debug, Error)]
pub enum InstallError {
  #[error(transparent)]
  Store(#[from] StoreError),

  #[error("semantic backend did not reach quiescence within {timeout_secs}s while installing layer '{layer}'")]
  QuiescenceTimeout { layer: &'static str, timeout_secs: u64 },
}
