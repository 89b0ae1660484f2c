//! The property value object (spec §3).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::datatype::Datatype;
use crate::generator::errors::SchemaError;
use crate::reserved;

/// An immutable, fully-validated property declaration.
///
/// `Property` values are constructed once via [`Property::new`] and never
/// mutated afterwards; the resolver produces new, merged `Property` values
/// rather than editing existing ones in place (spec §9: "resolution never
/// mutates a stored category or property").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
  pub name: String,
  pub datatype: Datatype,
  #[serde(default)]
  pub label: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub allowed_values: Option<Vec<String>>,
  #[serde(default)]
  pub allowed_namespace: Option<String>,
  #[serde(default)]
  pub allowed_category: Option<String>,
  #[serde(default)]
  pub allows_multiple_values: bool,
  #[serde(default)]
  pub has_template: Option<String>,
  #[serde(default)]
  pub subproperty_of: Option<String>,
}

impl Property {
  /// Validates and constructs a `Property`.
  ///
  /// # Errors
  ///
  /// Returns [`SchemaError::EmptyName`] if `name` is empty,
  /// [`SchemaError::ForbiddenCharacter`] if `name` contains a wiki-forbidden
  /// character, [`SchemaError::EmptyAllowedValues`] if `allowed_values` is
  /// `Some` but empty, or [`SchemaError::DuplicateAllowedValues`] if
  /// `allowed_values` contains a repeated entry.
  pub fn new(
    name: impl Into<String>,
    datatype: Datatype,
    label: Option<String>,
    description: Option<String>,
    allowed_values: Option<Vec<String>>,
    allowed_namespace: Option<String>,
    allowed_category: Option<String>,
    allows_multiple_values: bool,
    has_template: Option<String>,
    subproperty_of: Option<String>,
  ) -> Result<Self, SchemaError> {
    let name = name.into();
    if name.is_empty() {
      return Err(SchemaError::EmptyName { kind: "property" });
    }
    if let Some(character) = reserved::first_forbidden_char(&name) {
      return Err(SchemaError::ForbiddenCharacter {
        kind: "property",
        name,
        character,
      });
    }
    if let Some(values) = &allowed_values {
      if values.is_empty() {
        return Err(SchemaError::EmptyAllowedValues { name });
      }
      let mut seen = HashSet::with_capacity(values.len());
      let duplicates: Vec<String> = values.iter().filter(|v| !seen.insert(v.as_str())).cloned().collect();
      if !duplicates.is_empty() {
        return Err(SchemaError::DuplicateAllowedValues { name, duplicates });
      }
    }

    Ok(Self {
      name,
      datatype,
      label,
      description,
      allowed_values,
      allowed_namespace,
      allowed_category,
      allows_multiple_values,
      has_template,
      subproperty_of,
    })
  }

  /// The label to render in generated wikitext: the explicit `label` if
  /// present, otherwise the property name itself (spec §4.4).
  #[must_use]
  pub fn display_label(&self) -> &str {
    self.label.as_deref().unwrap_or(&self.name)
  }
}
