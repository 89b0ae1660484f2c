//! In-memory [`PageStore`] and [`SemanticStore`] implementations.
//!
//! Used by this crate's own tests, and exported for any downstream embedder
//! that wants to exercise the compiler without wiring up a live wiki backend
//! (spec §6.1/§6.2 name the traits; a real host supplies its own production
//! implementations).

use std::collections::HashMap;

use super::page_store::{PageStore, Title, WriteOutcome};
use super::semantic_store::SemanticStore;

#[derive(Debug, Default)]
pub struct InMemoryPageStore {
  pages: HashMap<(String, String), String>,
  deleted: Vec<(String, String)>,
}

impl InMemoryPageStore {
  pub fn seed(&mut self, namespace: &str, text: &str, content: &str) {
    self.pages.insert((namespace.to_string(), text.to_string()), content.to_string());
  }

  #[must_use]
  pub fn contains_title(&self, namespace: &str, text: &str) -> bool {
    self.pages.contains_key(&(namespace.to_string(), text.to_string()))
  }

  #[must_use]
  pub fn read_title(&self, namespace: &str, text: &str) -> Option<&str> {
    self.pages.get(&(namespace.to_string(), text.to_string())).map(String::as_str)
  }
}

impl PageStore for InMemoryPageStore {
  fn make_title(&self, name: &str, namespace: &str) -> Option<Title> {
    if name.is_empty() {
      return None;
    }
    Some(Title {
      namespace: namespace.to_string(),
      text: name.to_string(),
    })
  }

  fn exists(&self, title: &Title) -> bool {
    self.pages.contains_key(&(title.namespace.clone(), title.text.clone()))
  }

  fn read(&self, title: &Title) -> Option<String> {
    self.pages.get(&(title.namespace.clone(), title.text.clone())).cloned()
  }

  fn create_or_update(&mut self, title: &Title, content: &str, _summary: &str) -> WriteOutcome {
    self.pages.insert((title.namespace.clone(), title.text.clone()), content.to_string());
    WriteOutcome::ok()
  }

  fn delete(&mut self, title: &Title, _reason: &str) -> WriteOutcome {
    self.pages.remove(&(title.namespace.clone(), title.text.clone()));
    self.deleted.push((title.namespace.clone(), title.text.clone()));
    WriteOutcome::ok()
  }

  fn purge(&mut self, _title: &Title) {}
}

#[derive(Debug, Default)]
pub struct InMemorySemanticStore {
  pub properties: HashMap<(String, String), Vec<String>>,
  pub flushes: u32,
}

impl SemanticStore for InMemorySemanticStore {
  fn list_subjects_in_namespace(&self, namespace: &str) -> Vec<Title> {
    self
      .properties
      .keys()
      .filter(|(subject_ns, _)| subject_ns == namespace)
      .map(|(subject_ns, text)| Title {
        namespace: subject_ns.clone(),
        text: text.clone(),
      })
      .collect()
  }

  fn read_property(&self, subject: &Title, property: &str) -> Vec<String> {
    self
      .properties
      .get(&(format!("{}:{}", subject.namespace, subject.text), property.to_string()))
      .cloned()
      .unwrap_or_default()
  }

  async fn flush_pending(&mut self) {
    self.flushes += 1;
  }
}
