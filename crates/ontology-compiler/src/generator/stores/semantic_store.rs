//! The semantic backend contract the compiler consumes (spec §6.2).

use std::future::Future;

use super::page_store::Title;

/// The host-provided semantic backend: a read API for previously-stored
/// annotations, plus a flush the installer uses to establish quiescence
/// between layers (spec §4.10, §6.2).
pub trait SemanticStore {
  fn list_subjects_in_namespace(&self, namespace: &str) -> Vec<Title>;
  fn read_property(&self, subject: &Title, property: &str) -> Vec<String>;

  /// Waits until the backend's pending annotation-processing queue is empty
  /// (spec §4.10: "advancing before quiescence leads to late-bound
  /// annotations being dropped"). `async` because a real backend's queue
  /// drains over wall-clock time; the installer wraps this in
  /// `tokio::time::timeout` (spec §5).
  fn flush_pending(&mut self) -> impl Future<Output = ()> + Send;
}
