//! Shared machinery behind `CategoryStore`, `PropertyStore`, and
//! `SubobjectStore` (spec §4.8: "Each `*Store` encapsulates the
//! marker-delimited region format for its entity type ... Subobjects are
//! handled identically" to properties and categories).

use super::page_creator::PageCreator;
use super::page_store::{PageStore, Title, WriteOutcome};

const SCHEMA_START: &str = "<!-- Schema Start -->";
const SCHEMA_END: &str = "<!-- Schema End -->";

/// One entity-kind store: a namespace prefix plus the marker-delimited
/// region writer shared by all three entity kinds.
pub struct EntityStore<'s, S: PageStore> {
  creator: PageCreator<'s, S>,
  namespace: &'static str,
}

impl<'s, S: PageStore> EntityStore<'s, S> {
  fn new(store: &'s mut S, namespace: &'static str) -> Self {
    Self {
      creator: PageCreator::new(store),
      namespace,
    }
  }

  /// Writes `name`'s serialized schema region, preserving any user content
  /// outside the markers (spec §3: "The page outside those markers is user
  /// territory and must be preserved byte-for-byte").
  pub fn write(&mut self, name: &str, serialized: &str, summary: &str) -> WriteOutcome {
    let title = Title {
      namespace: self.namespace.to_string(),
      text: name.to_string(),
    };
    self.creator.write_managed_region(&title, serialized, SCHEMA_START, SCHEMA_END, summary)
  }
}

/// Serializes and writes `Category:` pages (spec §3, §4.8).
pub struct CategoryStore<'s, S: PageStore>(EntityStore<'s, S>);

impl<'s, S: PageStore> CategoryStore<'s, S> {
  #[must_use]
  pub fn new(store: &'s mut S) -> Self {
    Self(EntityStore::new(store, "Category"))
  }

  pub fn write(&mut self, name: &str, serialized: &str, summary: &str) -> WriteOutcome {
    self.0.write(name, serialized, summary)
  }
}

/// Serializes and writes `Property:` pages.
pub struct PropertyStore<'s, S: PageStore>(EntityStore<'s, S>);

impl<'s, S: PageStore> PropertyStore<'s, S> {
  #[must_use]
  pub fn new(store: &'s mut S) -> Self {
    Self(EntityStore::new(store, "Property"))
  }

  pub fn write(&mut self, name: &str, serialized: &str, summary: &str) -> WriteOutcome {
    self.0.write(name, serialized, summary)
  }
}

/// Serializes and writes `Subobject:` pages.
pub struct SubobjectStore<'s, S: PageStore>(EntityStore<'s, S>);

impl<'s, S: PageStore> SubobjectStore<'s, S> {
  #[must_use]
  pub fn new(store: &'s mut S) -> Self {
    Self(EntityStore::new(store, "Subobject"))
  }

  pub fn write(&mut self, name: &str, serialized: &str, summary: &str) -> WriteOutcome {
    self.0.write(name, serialized, summary)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::stores::testing::InMemoryPageStore;

  #[test]
  fn category_store_writes_into_category_namespace() {
    let mut store = InMemoryPageStore::default();
    let mut categories = CategoryStore::new(&mut store);
    let _ = categories.write("Employee", "schema body", "import");
    assert!(store.contains_title("Category", "Employee"));
  }

  #[test]
  fn property_store_preserves_user_content_on_rewrite() {
    let mut store = InMemoryPageStore::default();
    store.seed("Property", "Has name", "user notes\n<!-- Schema Start -->\nold\n<!-- Schema End -->\nmore notes");
    let mut properties = PropertyStore::new(&mut store);
    let _ = properties.write("Has name", "new schema", "regen");
    let content = store.read_title("Property", "Has name").unwrap();
    assert!(content.contains("user notes"));
    assert!(content.contains("more notes"));
    assert!(content.contains("new schema"));
  }
}
