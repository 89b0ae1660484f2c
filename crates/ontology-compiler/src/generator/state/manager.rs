//! The state document and the manager that reads, merges, and diffs it
//! (spec §4.9).

use std::collections::HashMap;

use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::hasher::hash_content;

/// One template's attribution: either a single owning category or the
/// sorted list of categories behind a composite page (spec §4.9).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateOwner {
  Category { category: String },
  Categories { categories: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateHash {
  pub generated: String,
  #[serde(flatten)]
  pub owner: TemplateOwner,
}

/// The single well-known state document (spec §3 `ArtifactState`, §4.9, §6.5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDocument {
  pub version: u32,
  pub page_hashes: IndexMap<String, String>,
  pub template_hashes: IndexMap<String, TemplateHash>,
  pub last_updated: String,
}

impl StateDocument {
  #[must_use]
  pub fn empty() -> Self {
    Self {
      version: 1,
      page_hashes: IndexMap::new(),
      template_hashes: IndexMap::new(),
      last_updated: Utc::now().to_rfc3339(),
    }
  }
}

/// Result of [`StateManager::compare_pages`] (spec §4.9).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageComparison {
  pub changed: Vec<String>,
  pub new: Vec<String>,
  pub removed: Vec<String>,
}

/// Reads, merges, and diffs a [`StateDocument`].
///
/// Every mutating operation is read-modify-write over the whole document
/// (spec §4.9: "merge into current state — never partial-write"); this type
/// holds the in-memory document and a caller persists it atomically after
/// each call.
pub struct StateManager {
  document: StateDocument,
}

impl StateManager {
  #[must_use]
  pub fn new(document: StateDocument) -> Self {
    Self { document }
  }

  #[must_use]
  pub fn document(&self) -> &StateDocument {
    &self.document
  }

  /// Merges `hashes` (title -> raw content) into `pageHashes`, hashing each
  /// value, and bumps `lastUpdated`.
  pub fn record_pages(&mut self, hashes: impl IntoIterator<Item = (String, String)>) {
    for (title, content) in hashes {
      self.document.page_hashes.insert(title, hash_content(&content));
    }
    self.touch();
  }

  /// Merges `templates` (name -> raw content, owner) into `templateHashes`.
  pub fn record_templates(&mut self, templates: impl IntoIterator<Item = (String, String, TemplateOwner)>) {
    for (name, content, owner) in templates {
      self.document.template_hashes.insert(
        name,
        TemplateHash {
          generated: hash_content(&content),
          owner,
        },
      );
    }
    self.touch();
  }

  /// Names whose current hash differs from the stored one, or whose entry
  /// is missing entirely (spec §4.9).
  #[must_use]
  pub fn stale_templates(&self, current: &HashMap<String, String>) -> Vec<String> {
    current
      .iter()
      .filter(|(name, content)| {
        self
          .document
          .template_hashes
          .get(*name)
          .is_none_or(|stored| stored.generated != hash_content(content))
      })
      .map(|(name, _)| name.clone())
      .collect()
  }

  /// Diffs `current` (title -> raw content) against the stored page hashes:
  /// pages whose hash changed, pages with no stored entry, and stored pages
  /// absent from `current` (spec §4.9).
  ///
  /// This is the mechanism that keeps multi-category pages from false
  /// positives: a page only lands in `changed` when *its own* content hash
  /// differs, never merely because a template it transcludes was
  /// regenerated (spec §4.9, closing paragraph).
  #[must_use]
  pub fn compare_pages(&self, current: &HashMap<String, String>) -> PageComparison {
    let mut comparison = PageComparison::default();
    for (title, content) in current {
      match self.document.page_hashes.get(title) {
        Some(stored) if *stored == hash_content(content) => {}
        Some(_) => comparison.changed.push(title.clone()),
        None => comparison.new.push(title.clone()),
      }
    }
    for title in self.document.page_hashes.keys() {
      if !current.contains_key(title) {
        comparison.removed.push(title.clone());
      }
    }
    comparison.changed.sort();
    comparison.new.sort();
    comparison.removed.sort();
    comparison
  }

  fn touch(&mut self) {
    self.document.last_updated = Utc::now().to_rfc3339();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn record_pages_hashes_and_merges() {
    let mut manager = StateManager::new(StateDocument::empty());
    manager.record_pages([("Property:Has name".to_string(), "content".to_string())]);
    assert!(manager.document().page_hashes.contains_key("Property:Has name"));
  }

  #[test]
  fn compare_pages_reports_new_changed_and_removed() {
    let mut manager = StateManager::new(StateDocument::empty());
    manager.record_pages([
      ("A".to_string(), "one".to_string()),
      ("B".to_string(), "two".to_string()),
    ]);

    let mut current = HashMap::new();
    current.insert("A".to_string(), "one".to_string());
    current.insert("B".to_string(), "CHANGED".to_string());
    current.insert("C".to_string(), "three".to_string());

    let comparison = manager.compare_pages(&current);
    assert_eq!(comparison.changed, vec!["B".to_string()]);
    assert_eq!(comparison.new, vec!["C".to_string()]);
    assert!(comparison.removed.is_empty());
  }

  #[test]
  fn compare_pages_reports_removed_pages() {
    let mut manager = StateManager::new(StateDocument::empty());
    manager.record_pages([("A".to_string(), "one".to_string())]);
    let comparison = manager.compare_pages(&HashMap::new());
    assert_eq!(comparison.removed, vec!["A".to_string()]);
  }

  #[test]
  fn stale_templates_reports_changed_and_missing() {
    let mut manager = StateManager::new(StateDocument::empty());
    manager.record_templates([(
      "Semantic Employee".to_string(),
      "body".to_string(),
      TemplateOwner::Category {
        category: "Employee".to_string(),
      },
    )]);

    let mut current = HashMap::new();
    current.insert("Semantic Employee".to_string(), "body".to_string());
    current.insert("Dispatcher Employee".to_string(), "new body".to_string());

    let stale = manager.stale_templates(&current);
    assert_eq!(stale, vec!["Dispatcher Employee".to_string()]);
  }

  #[test]
  fn page_drift_is_unaffected_by_unrelated_template_regeneration() {
    let mut manager = StateManager::new(StateDocument::empty());
    manager.record_pages([("Employee/Acme".to_string(), "page body".to_string())]);
    manager.record_templates([(
      "Semantic Employee".to_string(),
      "template v1".to_string(),
      TemplateOwner::Category {
        category: "Employee".to_string(),
      },
    )]);

    // Regenerating the template with new content must not mark the page dirty.
    manager.record_templates([(
      "Semantic Employee".to_string(),
      "template v2".to_string(),
      TemplateOwner::Category {
        category: "Employee".to_string(),
      },
    )]);

    let mut current = HashMap::new();
    current.insert("Employee/Acme".to_string(), "page body".to_string());
    let comparison = manager.compare_pages(&current);
    assert!(comparison.changed.is_empty());
  }
}
