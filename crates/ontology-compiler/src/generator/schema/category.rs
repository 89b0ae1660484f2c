//! The category value object and merge algebra (spec §3 / §4.1).

use bon::Builder;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::generator::errors::SchemaError;
use crate::reserved;

/// A named, ordered group of properties shown together on a display stub or
/// form (spec §3: `displaySections` / `formSections`, both `{name,
/// properties}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
  pub name: String,
  pub properties: IndexSet<String>,
}

impl Section {
  #[must_use]
  pub fn new(name: impl Into<String>, properties: impl IntoIterator<Item = String>) -> Self {
    Self {
      name: name.into(),
      properties: properties.into_iter().collect(),
    }
  }

  /// Merges `other` into `self`, appending properties from `other` that are
  /// not already present, preserving first-seen order (spec §4.1: "Sections
  /// with the same name are merged by appending novel properties preserving
  /// first-seen order").
  #[must_use]
  fn merged_with(&self, other: &Section) -> Section {
    let mut properties = self.properties.clone();
    for prop in &other.properties {
      properties.insert(prop.clone());
    }
    Section {
      name: self.name.clone(),
      properties,
    }
  }
}

/// An immutable, fully-normalized category declaration.
///
/// Construction normalizes `required`/`optional` property and subobject
/// lists the same way [`super::subobject::Subobject`] does (spec §4.1:
/// "any name appearing in both `required` and `optional` is promoted to
/// required"). Detecting *that* an overlap occurred — to surface the
/// validator warning spec §4.1 mandates — is the caller's job: inspect the
/// raw lists before calling [`Category::builder`] and compare against the
/// intersection, since the constructor itself only normalizes silently and
/// never fails on an overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(finish_fn = build_unchecked)]
pub struct Category {
  pub name: String,
  #[builder(default)]
  pub parents: Vec<String>,
  #[builder(default)]
  pub label: Option<String>,
  #[builder(default)]
  pub description: Option<String>,
  #[builder(default)]
  required_properties: IndexSet<String>,
  #[builder(default)]
  optional_properties: IndexSet<String>,
  #[builder(default)]
  required_subobjects: IndexSet<String>,
  #[builder(default)]
  optional_subobjects: IndexSet<String>,
  #[builder(default)]
  pub display_sections: Vec<Section>,
  #[builder(default)]
  pub display_header_properties: IndexSet<String>,
  #[builder(default)]
  pub form_sections: Vec<Section>,
  #[builder(default)]
  pub target_namespace: Option<String>,
}

impl<S: category_builder::IsComplete> CategoryBuilder<S> {
  /// Validates the name, promotes required/optional overlaps, and returns
  /// the finished [`Category`].
  ///
  /// # Errors
  ///
  /// Returns [`SchemaError::EmptyName`] or [`SchemaError::ForbiddenCharacter`]
  /// if the category name is invalid.
  pub fn build(self) -> Result<Category, SchemaError> {
    let mut category = self.build_unchecked();

    if category.name.is_empty() {
      return Err(SchemaError::EmptyName { kind: "category" });
    }
    if let Some(character) = reserved::first_forbidden_char(&category.name) {
      return Err(SchemaError::ForbiddenCharacter {
        kind: "category",
        name: category.name,
        character,
      });
    }

    category.optional_properties = category
      .optional_properties
      .into_iter()
      .filter(|p| !category.required_properties.contains(p))
      .collect();
    category.optional_subobjects = category
      .optional_subobjects
      .into_iter()
      .filter(|s| !category.required_subobjects.contains(s))
      .collect();

    Ok(category)
  }
}

impl Category {
  #[must_use]
  pub fn required_properties(&self) -> &IndexSet<String> {
    &self.required_properties
  }

  #[must_use]
  pub fn optional_properties(&self) -> &IndexSet<String> {
    &self.optional_properties
  }

  #[must_use]
  pub fn required_subobjects(&self) -> &IndexSet<String> {
    &self.required_subobjects
  }

  #[must_use]
  pub fn optional_subobjects(&self) -> &IndexSet<String> {
    &self.optional_subobjects
  }

  /// Produces a new `Category` representing `self` merged on top of
  /// `parent` (spec §4.1). Pure: neither operand is mutated, and the result
  /// shares no mutable state with either.
  #[must_use]
  pub fn merge_with_parent(&self, parent: &Category) -> Category {
    let required_properties = union(&parent.required_properties, &self.required_properties);
    let optional_properties = union(&parent.optional_properties, &self.optional_properties)
      .into_iter()
      .filter(|p| !required_properties.contains(p))
      .collect();

    let required_subobjects = union(&parent.required_subobjects, &self.required_subobjects);
    let optional_subobjects = union(&parent.optional_subobjects, &self.optional_subobjects)
      .into_iter()
      .filter(|s| !required_subobjects.contains(s))
      .collect();

    Category {
      name: self.name.clone(),
      parents: self.parents.clone(),
      label: first_non_empty(&self.label, &parent.label),
      description: first_non_empty(&self.description, &parent.description),
      required_properties,
      optional_properties,
      required_subobjects,
      optional_subobjects,
      display_sections: merge_sections(&parent.display_sections, &self.display_sections),
      display_header_properties: union(&parent.display_header_properties, &self.display_header_properties),
      form_sections: merge_sections(&parent.form_sections, &self.form_sections),
      target_namespace: self.target_namespace.clone().or_else(|| parent.target_namespace.clone()),
    }
  }
}

fn union(parent: &IndexSet<String>, child: &IndexSet<String>) -> IndexSet<String> {
  parent.iter().chain(child.iter()).cloned().collect()
}

fn first_non_empty(child: &Option<String>, parent: &Option<String>) -> Option<String> {
  match child {
    Some(value) if !value.is_empty() => Some(value.clone()),
    _ => parent.clone(),
  }
}

fn merge_sections(parent: &[Section], child: &[Section]) -> Vec<Section> {
  let mut by_name: IndexMap<String, Section> = IndexMap::new();
  for section in parent.iter().chain(child.iter()) {
    by_name
      .entry(section.name.clone())
      .and_modify(|existing| *existing = existing.merged_with(section))
      .or_insert_with(|| section.clone());
  }
  by_name.into_values().collect()
}
