//! The subobject value object (spec §3): a named group of properties that a
//! category can require or offer optionally.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::generator::errors::SchemaError;
use crate::reserved;

/// An immutable, fully-validated subobject declaration.
///
/// `required` and `optional` are disjoint by construction: any name present
/// in both is silently promoted into `required` (spec §4.1), mirroring the
/// same rule [`super::category::Category`] applies to its own property and
/// subobject lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subobject {
  pub name: String,
  pub required_properties: IndexSet<String>,
  pub optional_properties: IndexSet<String>,
}

impl Subobject {
  /// Validates and constructs a `Subobject`, promoting any name present in
  /// both `required` and `optional` into `required`.
  ///
  /// # Errors
  ///
  /// Returns [`SchemaError::EmptyName`] if `name` is empty, or
  /// [`SchemaError::ForbiddenCharacter`] if `name` contains a wiki-forbidden
  /// character.
  pub fn new<I, J>(name: impl Into<String>, required: I, optional: J) -> Result<Self, SchemaError>
  where
    I: IntoIterator<Item = String>,
    J: IntoIterator<Item = String>,
  {
    let name = name.into();
    if name.is_empty() {
      return Err(SchemaError::EmptyName { kind: "subobject" });
    }
    if let Some(character) = reserved::first_forbidden_char(&name) {
      return Err(SchemaError::ForbiddenCharacter {
        kind: "subobject",
        name,
        character,
      });
    }

    let required_properties: IndexSet<String> = required.into_iter().collect();
    let optional_properties: IndexSet<String> = optional
      .into_iter()
      .filter(|prop| !required_properties.contains(prop))
      .collect();

    Ok(Self {
      name,
      required_properties,
      optional_properties,
    })
  }

  /// `true` if `property` is named by this subobject, required or optional.
  #[must_use]
  pub fn declares(&self, property: &str) -> bool {
    self.required_properties.contains(property) || self.optional_properties.contains(property)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn promotes_overlap_into_required() {
    let sub = Subobject::new(
      "Contact info",
      ["Has email address".to_string()],
      ["Has email address".to_string(), "Has phone number".to_string()],
    )
    .unwrap();
    assert!(sub.required_properties.contains("Has email address"));
    assert!(!sub.optional_properties.contains("Has email address"));
    assert!(sub.optional_properties.contains("Has phone number"));
  }

  #[test]
  fn rejects_empty_name() {
    let err = Subobject::new("", [], []).unwrap_err();
    assert_eq!(err, SchemaError::EmptyName { kind: "subobject" });
  }

  #[test]
  fn rejects_forbidden_character() {
    let err = Subobject::new("Bad|Name", [], []).unwrap_err();
    assert_eq!(
      err,
      SchemaError::ForbiddenCharacter {
        kind: "subobject",
        name: "Bad|Name".to_string(),
        character: '|',
      }
    );
  }

  #[test]
  fn declares_reports_membership_in_either_list() {
    let sub = Subobject::new("Contact info", ["A".to_string()], ["B".to_string()]).unwrap();
    assert!(sub.declares("A"));
    assert!(sub.declares("B"));
    assert!(!sub.declares("C"));
  }
}
