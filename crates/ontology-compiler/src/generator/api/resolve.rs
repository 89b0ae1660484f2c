//! The `resolveMultiCategory` query API (spec §6.4).
//!
//! A thin, serializable wrapper around [`MultiCategoryResolver`]: the
//! resolver's own types (`Attributed`, booleans) are Rust-native, but a
//! caller across a wire boundary needs the exact contract spec §6.4 names —
//! `0`/`1` integers instead of booleans, `Property:`/`Subobject:`-prefixed
//! titles, and a `datatype` that defaults to `"Page"` rather than failing
//! when a property name cannot be resolved in the store.

use serde::Serialize;

use crate::generator::errors::ResolverError;
use crate::generator::resolver::{Attributed, MultiCategoryResolver};
use crate::generator::schema::{CategoryUniverse, Datatype};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProperty {
  pub name: String,
  pub title: String,
  pub datatype: Datatype,
  pub required: u8,
  pub shared: u8,
  pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSubobject {
  pub name: String,
  pub title: String,
  pub required: u8,
  pub shared: u8,
  pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCategory {
  pub name: String,
  pub target_namespace: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveResponse {
  pub properties: Vec<ResolvedProperty>,
  pub subobjects: Vec<ResolvedSubobject>,
  pub categories: Vec<ResolvedCategory>,
}

/// Strips an optional, case-insensitive `Category:` prefix and surrounding
/// whitespace from a requested category name (spec §6.4).
#[must_use]
fn normalize_category_name(raw: &str) -> String {
  let trimmed = raw.trim();
  trimmed
    .strip_prefix("Category:")
    .or_else(|| trimmed.strip_prefix("category:"))
    .map_or(trimmed, str::trim)
    .to_string()
}

/// Resolves `categories` against `universe`, returning the wire-ready
/// [`ResolveResponse`] (spec §6.4).
///
/// # Errors
///
/// Returns [`ResolverError::EmptyCategoryList`] if `categories` is empty
/// (after prefix-stripping an empty list is still empty), or
/// [`ResolverError::Cycle`] / a resolver error if resolution fails. Per
/// spec §6.4, any unknown category fails the *entire* request — there is no
/// partial resolution.
pub fn resolve_multi_category(universe: &CategoryUniverse, categories: &[String]) -> Result<ResolveResponse, ResolverError> {
  let normalized: Vec<String> = categories.iter().map(|name| normalize_category_name(name)).collect();
  if normalized.is_empty() {
    return Err(ResolverError::EmptyCategoryList);
  }

  universe.require_categories(&normalized)?;

  let resolver = MultiCategoryResolver::new(universe);
  let resolved = resolver.resolve(&normalized)?;

  let properties = resolved
    .required_properties
    .iter()
    .map(|a| (a, true))
    .chain(resolved.optional_properties.iter().map(|a| (a, false)))
    .map(|(attributed, required)| resolved_property(universe, attributed, required))
    .collect();

  let subobjects = resolved
    .required_subobjects
    .iter()
    .map(|a| (a, true))
    .chain(resolved.optional_subobjects.iter().map(|a| (a, false)))
    .map(|(attributed, required)| resolved_subobject(attributed, required))
    .collect();

  let categories = normalized
    .iter()
    .map(|name| ResolvedCategory {
      name: name.clone(),
      target_namespace: universe.category(name).and_then(|c| c.target_namespace.clone()),
    })
    .collect();

  Ok(ResolveResponse {
    properties,
    subobjects,
    categories,
  })
}

fn resolved_property(universe: &CategoryUniverse, attributed: &Attributed, required: bool) -> ResolvedProperty {
  let datatype = universe.property(&attributed.name).map_or(Datatype::default(), |p| p.datatype);
  ResolvedProperty {
    name: attributed.name.clone(),
    title: format!("Property:{}", attributed.name),
    datatype,
    required: u8::from(required),
    shared: u8::from(attributed.is_shared()),
    sources: attributed.sources.clone(),
  }
}

fn resolved_subobject(attributed: &Attributed, required: bool) -> ResolvedSubobject {
  ResolvedSubobject {
    name: attributed.name.clone(),
    title: format!("Subobject:{}", attributed.name),
    required: u8::from(required),
    shared: u8::from(attributed.is_shared()),
    sources: attributed.sources.clone(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::schema::{Category, Property};

  fn universe() -> CategoryUniverse {
    let name = Property::new("Has name", Datatype::Text, None, None, None, None, None, false, None, None).unwrap();
    let person = Category::builder()
      .name("Person".to_string())
      .required_properties(["Has name".to_string()].into_iter().collect())
      .target_namespace("Contact".to_string())
      .build()
      .unwrap();
    CategoryUniverse::new([person], [name], [])
  }

  #[test]
  fn strips_category_prefix_and_whitespace() {
    assert_eq!(normalize_category_name("  Category:Person  "), "Person");
    assert_eq!(normalize_category_name("Person"), "Person");
  }

  #[test]
  fn resolves_a_single_category() {
    let universe = universe();
    let response = resolve_multi_category(&universe, &["Category:Person".to_string()]).unwrap();
    assert_eq!(response.properties.len(), 1);
    assert_eq!(response.properties[0].title, "Property:Has name");
    assert_eq!(response.properties[0].required, 1);
    assert_eq!(response.properties[0].shared, 0);
    assert_eq!(response.categories[0].target_namespace.as_deref(), Some("Contact"));
  }

  #[test]
  fn defaults_datatype_to_page_for_unresolved_property() {
    let person = Category::builder()
      .name("Ghostly".to_string())
      .required_properties(["Has mystery".to_string()].into_iter().collect())
      .build()
      .unwrap();
    let universe = CategoryUniverse::new([person], [], []);
    let response = resolve_multi_category(&universe, &["Ghostly".to_string()]).unwrap();
    assert_eq!(response.properties[0].datatype, Datatype::Page);
  }

  #[test]
  fn rejects_empty_category_list() {
    let universe = universe();
    assert_eq!(
      resolve_multi_category(&universe, &[]).unwrap_err(),
      ResolverError::EmptyCategoryList
    );
  }

  #[test]
  fn fails_entirely_on_any_unknown_category() {
    let universe = universe();
    let err = resolve_multi_category(&universe, &["Person".to_string(), "Ghost".to_string()]).unwrap_err();
    assert_eq!(
      err,
      ResolverError::UnknownCategories {
        names: vec!["Ghost".to_string()],
      }
    );
  }
}
