//! Cross-category resolution (spec §4.3): merges the effective property and
//! subobject sets of one or more categories into a single, deduplicated,
//! source-attributed [`ResolvedPropertySet`].

use indexmap::{IndexMap, IndexSet};

use super::c3::Linearizer;
use crate::generator::errors::ResolverError;
use crate::generator::schema::{Category, CategoryUniverse};

/// One entry in a resolved required/optional list: the name plus the
/// ordered list of input categories whose effective set contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributed {
  pub name: String,
  pub sources: Vec<String>,
}

impl Attributed {
  /// `true` when `sources.len() >= 2` (spec §4.3: "Shared flag").
  #[must_use]
  pub fn is_shared(&self) -> bool {
    self.sources.len() >= 2
  }
}

/// The result of resolving one or more categories together (spec §3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPropertySet {
  pub category_names: Vec<String>,
  pub required_properties: Vec<Attributed>,
  pub optional_properties: Vec<Attributed>,
  pub required_subobjects: Vec<Attributed>,
  pub optional_subobjects: Vec<Attributed>,
}

impl ResolvedPropertySet {
  #[must_use]
  pub fn is_property_shared(&self, name: &str) -> bool {
    self
      .required_properties
      .iter()
      .chain(&self.optional_properties)
      .find(|attributed| attributed.name == name)
      .is_some_and(Attributed::is_shared)
  }

  /// Properties specific to `category` — attributed to it and not shared
  /// with any other input category (spec §4.7: composite form sections
  /// "filtered by `!shared`").
  pub fn category_specific_properties(&self, category: &str) -> impl Iterator<Item = &Attributed> {
    self
      .required_properties
      .iter()
      .chain(&self.optional_properties)
      .filter(move |attributed| !attributed.is_shared() && attributed.sources.iter().any(|s| s == category))
  }

  /// Every property attributed to two or more input categories.
  pub fn shared_properties(&self) -> impl Iterator<Item = &Attributed> {
    self
      .required_properties
      .iter()
      .chain(&self.optional_properties)
      .filter(|attributed| attributed.is_shared())
  }
}

/// Resolves one or more categories together against a [`CategoryUniverse`].
pub struct MultiCategoryResolver<'u> {
  linearizer: Linearizer<'u>,
}

impl<'u> MultiCategoryResolver<'u> {
  #[must_use]
  pub fn new(universe: &'u CategoryUniverse) -> Self {
    Self {
      linearizer: Linearizer::new(universe),
    }
  }

  /// Resolves `category_names` in the given order (spec §4.3).
  ///
  /// # Errors
  ///
  /// Returns [`ResolverError::EmptyCategoryList`] if `category_names` is
  /// empty, or propagates [`ResolverError::UnknownCategory`] /
  /// [`ResolverError::Cycle`] from the underlying linearizer.
  pub fn resolve(&self, category_names: &[String]) -> Result<ResolvedPropertySet, ResolverError> {
    if category_names.is_empty() {
      return Err(ResolverError::EmptyCategoryList);
    }

    let mut effective = Vec::with_capacity(category_names.len());
    for category_name in category_names {
      effective.push(self.linearizer.effective_category(category_name)?);
    }

    let (required_properties, optional_properties) = merge_group(
      category_names,
      &effective,
      Category::required_properties,
      Category::optional_properties,
    );
    let (required_subobjects, optional_subobjects) = merge_group(
      category_names,
      &effective,
      Category::required_subobjects,
      Category::optional_subobjects,
    );

    Ok(ResolvedPropertySet {
      category_names: category_names.to_vec(),
      required_properties,
      optional_properties,
      required_subobjects,
      optional_subobjects,
    })
  }
}

/// Merges one required/optional pair of effective sets (properties or
/// subobjects, per `required_of`/`optional_of`) across `effective` — one
/// entry per `category_names` — into `(required, optional)` output lists
/// (spec §4.3).
///
/// A name's `sources` is the union of every category whose effective set
/// contains it, whether required or optional there, in input order — so a
/// property required in one category and optional in another still carries
/// both sources and counts as shared. "Required wins": a name required
/// anywhere ends up in `required`, never `optional`. Within each output
/// list, entries are ordered by first appearance across the input
/// categories.
fn merge_group(
  category_names: &[String],
  effective: &[Category],
  required_of: impl Fn(&Category) -> &IndexSet<String>,
  optional_of: impl Fn(&Category) -> &IndexSet<String>,
) -> (Vec<Attributed>, Vec<Attributed>) {
  let mut required_order: IndexSet<String> = IndexSet::new();
  let mut optional_order: IndexSet<String> = IndexSet::new();
  let mut sources: IndexMap<String, Vec<String>> = IndexMap::new();

  for (category_name, category) in category_names.iter().zip(effective) {
    let required = required_of(category);
    let optional = optional_of(category);

    required_order.extend(required.iter().cloned());
    optional_order.extend(optional.iter().cloned());

    let mut seen_this_category: IndexSet<&String> = IndexSet::new();
    for name in required.iter().chain(optional.iter()) {
      if seen_this_category.insert(name) {
        sources.entry(name.clone()).or_default().push(category_name.clone());
      }
    }
  }

  // Required wins: drop anything required anywhere from the optional
  // ordering, but its sources (accumulated above) already include every
  // category that contributed it, required or optional.
  optional_order.retain(|name| !required_order.contains(name));

  let attribute = |names: &IndexSet<String>| -> Vec<Attributed> {
    names
      .iter()
      .map(|name| Attributed {
        name: name.clone(),
        sources: sources.get(name).cloned().unwrap_or_default(),
      })
      .collect()
  };

  (attribute(&required_order), attribute(&optional_order))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::schema::Category;

  fn cat_with(name: &str, required: &[&str], optional: &[&str]) -> Category {
    Category::builder()
      .name(name.to_string())
      .required_properties(required.iter().map(|p| (*p).to_string()).collect())
      .optional_properties(optional.iter().map(|p| (*p).to_string()).collect())
      .build()
      .unwrap()
  }

  #[test]
  fn single_category_attributes_to_itself() {
    let universe = CategoryUniverse::new([cat_with("Person", &["Has name"], &[])], [], []);
    let resolver = MultiCategoryResolver::new(&universe);
    let resolved = resolver.resolve(&["Person".to_string()]).unwrap();
    assert_eq!(resolved.required_properties.len(), 1);
    assert_eq!(resolved.required_properties[0].sources, vec!["Person".to_string()]);
    assert!(!resolved.required_properties[0].is_shared());
  }

  #[test]
  fn shared_property_across_categories_is_required_and_flagged_shared() {
    let universe = CategoryUniverse::new(
      [
        cat_with("Person", &["Has name"], &[]),
        cat_with("Employee", &["Has id"], &["Has name"]),
      ],
      [],
      [],
    );
    let resolver = MultiCategoryResolver::new(&universe);
    let resolved = resolver.resolve(&["Person".to_string(), "Employee".to_string()]).unwrap();

    let names: Vec<&str> = resolved.required_properties.iter().map(|a| a.name.as_str()).collect();
    assert!(names.contains(&"Has name"));
    assert!(names.contains(&"Has id"));
    assert!(resolved.optional_properties.is_empty());
    assert!(resolved.is_property_shared("Has name"));
    assert!(!resolved.is_property_shared("Has id"));
  }

  #[test]
  fn category_specific_properties_excludes_shared_ones() {
    let universe = CategoryUniverse::new(
      [
        cat_with("Person", &["Has name"], &[]),
        cat_with("Employee", &["Has id"], &["Has name"]),
      ],
      [],
      [],
    );
    let resolver = MultiCategoryResolver::new(&universe);
    let resolved = resolver.resolve(&["Employee".to_string(), "Person".to_string()]).unwrap();

    let employee_only: Vec<&str> = resolved
      .category_specific_properties("Employee")
      .map(|a| a.name.as_str())
      .collect();
    assert_eq!(employee_only, vec!["Has id"]);
  }

  #[test]
  fn rejects_empty_category_list() {
    let universe = CategoryUniverse::new([], [], []);
    let resolver = MultiCategoryResolver::new(&universe);
    assert_eq!(resolver.resolve(&[]).unwrap_err(), ResolverError::EmptyCategoryList);
  }
}
