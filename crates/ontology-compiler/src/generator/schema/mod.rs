//! Immutable schema value objects (spec §3) and the universe that resolves
//! references between them by name.

mod category;
mod datatype;
mod property;
mod subobject;

pub use category::{Category, Section};
pub use datatype::Datatype;
pub use property::Property;
pub use subobject::Subobject;

use std::collections::HashMap;

use crate::generator::errors::ResolverError;

/// A name-keyed view over a fully-loaded schema.
///
/// Entities reference each other — a category's `parents`, a property's
/// `subpropertyOf`, a category's required subobjects — by name only; no
/// entity ever stores a pointer or reference to another (spec §9: "resolve
/// by name through an enclosing universe map; never store parent pointers
/// in the record"). `CategoryUniverse` is the enclosing map the resolver
/// consults to turn those names back into values.
#[derive(Debug, Clone, Default)]
pub struct CategoryUniverse {
  categories: HashMap<String, Category>,
  properties: HashMap<String, Property>,
  subobjects: HashMap<String, Subobject>,
}

impl CategoryUniverse {
  #[must_use]
  pub fn new(
    categories: impl IntoIterator<Item = Category>,
    properties: impl IntoIterator<Item = Property>,
    subobjects: impl IntoIterator<Item = Subobject>,
  ) -> Self {
    Self {
      categories: categories.into_iter().map(|c| (c.name.clone(), c)).collect(),
      properties: properties.into_iter().map(|p| (p.name.clone(), p)).collect(),
      subobjects: subobjects.into_iter().map(|s| (s.name.clone(), s)).collect(),
    }
  }

  #[must_use]
  pub fn category(&self, name: &str) -> Option<&Category> {
    self.categories.get(name)
  }

  #[must_use]
  pub fn property(&self, name: &str) -> Option<&Property> {
    self.properties.get(name)
  }

  #[must_use]
  pub fn subobject(&self, name: &str) -> Option<&Subobject> {
    self.subobjects.get(name)
  }

  pub fn categories(&self) -> impl Iterator<Item = &Category> {
    self.categories.values()
  }

  pub fn properties(&self) -> impl Iterator<Item = &Property> {
    self.properties.values()
  }

  pub fn subobjects(&self) -> impl Iterator<Item = &Subobject> {
    self.subobjects.values()
  }

  /// Looks up every name in `names`, collecting the first unknown name(s)
  /// into a single [`ResolverError::UnknownCategories`] rather than failing
  /// on the first miss, so a caller can report every typo in one pass.
  ///
  /// # Errors
  ///
  /// Returns [`ResolverError::EmptyCategoryList`] if `names` is empty, or
  /// [`ResolverError::UnknownCategories`] if any name does not resolve.
  pub fn require_categories<'a>(&'a self, names: &[String]) -> Result<Vec<&'a Category>, ResolverError> {
    if names.is_empty() {
      return Err(ResolverError::EmptyCategoryList);
    }
    let mut found = Vec::with_capacity(names.len());
    let mut unknown = Vec::new();
    for name in names {
      match self.category(name) {
        Some(category) => found.push(category),
        None => unknown.push(name.clone()),
      }
    }
    if !unknown.is_empty() {
      return Err(ResolverError::UnknownCategories { names: unknown });
    }
    Ok(found)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn employee() -> Category {
    Category::builder().name("Employee".to_string()).build().unwrap()
  }

  #[test]
  fn resolves_known_categories() {
    let universe = CategoryUniverse::new([employee()], [], []);
    let found = universe.require_categories(&["Employee".to_string()]).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Employee");
  }

  #[test]
  fn rejects_empty_request() {
    let universe = CategoryUniverse::new([employee()], [], []);
    assert_eq!(universe.require_categories(&[]).unwrap_err(), ResolverError::EmptyCategoryList);
  }

  #[test]
  fn collects_every_unknown_name() {
    let universe = CategoryUniverse::new([employee()], [], []);
    let err = universe
      .require_categories(&["Ghost".to_string(), "Employee".to_string(), "Phantom".to_string()])
      .unwrap_err();
    assert_eq!(
      err,
      ResolverError::UnknownCategories {
        names: vec!["Ghost".to_string(), "Phantom".to_string()],
      }
    );
  }
}
