//! Structural validation and reference-integrity checking (spec §6.3, §7).
//!
//! Construction of [`crate::generator::schema::Category`] and
//! [`crate::generator::schema::Subobject`] silently promotes a
//! required/optional overlap (spec §4.1); this module is where that
//! overlap gets *reported*, since the validator operates on the raw DTOs
//! before normalization happens. It is also where cross-entity reference
//! checks live, since those need the whole loaded universe and a
//! constructor can only ever see one entity at a time.

use std::collections::HashSet;

use super::dto::SchemaDocument;
use crate::generator::errors::ValidationIssue;
use crate::generator::resolver::detect_inheritance_cycles;
use crate::generator::schema::{Category, CategoryUniverse, Property, Subobject};

/// The outcome of validating a loaded [`SchemaDocument`]: the constructed
/// universe (if every entity built successfully) plus every warning and
/// error found along the way.
pub struct ValidationReport {
  pub universe: Option<CategoryUniverse>,
  pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
  #[must_use]
  pub fn has_errors(&self) -> bool {
    self.issues.iter().any(ValidationIssue::is_error)
  }
}

/// Validates `document`: constructs every entity, reports promotion
/// overlaps as warnings, checks reference integrity, and detects
/// inheritance cycles.
#[must_use]
pub fn validate(document: &SchemaDocument) -> ValidationReport {
  let mut issues = Vec::new();

  let properties = build_properties(document, &mut issues);
  let subobjects = build_subobjects(document, &mut issues);
  let categories = build_categories(document, &mut issues);

  let universe = CategoryUniverse::new(categories, properties, subobjects);

  check_category_references(document, &universe, &mut issues);
  check_cycles(&universe, &mut issues);

  let has_errors = issues.iter().any(ValidationIssue::is_error);
  ValidationReport {
    universe: (!has_errors).then_some(universe),
    issues,
  }
}

fn build_properties(document: &SchemaDocument, issues: &mut Vec<ValidationIssue>) -> Vec<Property> {
  document
    .properties
    .iter()
    .filter_map(|(name, dto)| {
      Property::new(
        name.clone(),
        dto.datatype,
        dto.label.clone(),
        dto.description.clone(),
        dto.allowed_values.clone(),
        dto.allowed_namespace.clone(),
        dto.allowed_category.clone(),
        dto.allows_multiple_values,
        dto.has_template.clone(),
        dto.subproperty_of.clone(),
      )
      .map_err(|err| issues.push(ValidationIssue::error(err.to_string())))
      .ok()
    })
    .collect()
}

fn build_subobjects(document: &SchemaDocument, issues: &mut Vec<ValidationIssue>) -> Vec<Subobject> {
  document
    .subobjects
    .iter()
    .filter_map(|(name, dto)| {
      warn_on_overlap(
        name,
        "subobject",
        &dto.properties.required,
        &dto.properties.optional,
        issues,
      );
      Subobject::new(name.clone(), dto.properties.required.clone(), dto.properties.optional.clone())
        .map_err(|err| issues.push(ValidationIssue::error(err.to_string())))
        .ok()
    })
    .collect()
}

fn build_categories(document: &SchemaDocument, issues: &mut Vec<ValidationIssue>) -> Vec<Category> {
  document
    .categories
    .iter()
    .filter_map(|(name, dto)| {
      warn_on_overlap(name, "category property", &dto.properties.required, &dto.properties.optional, issues);
      warn_on_overlap(
        name,
        "category subobject",
        &dto.subobjects.required,
        &dto.subobjects.optional,
        issues,
      );

      Category::builder()
        .name(name.clone())
        .maybe_label(dto.label.clone())
        .maybe_description(dto.description.clone())
        .parents(dto.parents.clone())
        .required_properties(dto.properties.required.iter().cloned().collect())
        .optional_properties(dto.properties.optional.iter().cloned().collect())
        .required_subobjects(dto.subobjects.required.iter().cloned().collect())
        .optional_subobjects(dto.subobjects.optional.iter().cloned().collect())
        .display_sections(
          dto
            .display
            .sections
            .iter()
            .map(|s| crate::generator::schema::Section::new(s.name.clone(), s.properties.clone()))
            .collect(),
        )
        .display_header_properties(dto.display.header.iter().cloned().collect())
        .form_sections(
          dto
            .forms
            .sections
            .iter()
            .map(|s| crate::generator::schema::Section::new(s.name.clone(), s.properties.clone()))
            .collect(),
        )
        .maybe_target_namespace(dto.target_namespace.clone())
        .build()
        .map_err(|err| issues.push(ValidationIssue::error(err.to_string())))
        .ok()
    })
    .collect()
}

fn warn_on_overlap(entity: &str, kind: &str, required: &[String], optional: &[String], issues: &mut Vec<ValidationIssue>) {
  let required_set: HashSet<&str> = required.iter().map(String::as_str).collect();
  let overlap: Vec<&str> = optional.iter().map(String::as_str).filter(|o| required_set.contains(o)).collect();
  if !overlap.is_empty() {
    issues.push(ValidationIssue::warning(format!(
      "{entity}: {kind} name(s) {overlap:?} declared both required and optional; promoted to required"
    )));
  }
}

fn check_category_references(document: &SchemaDocument, universe: &CategoryUniverse, issues: &mut Vec<ValidationIssue>) {
  for (name, dto) in &document.categories {
    for parent in &dto.parents {
      if universe.category(parent).is_none() {
        issues.push(ValidationIssue::error(format!("category '{name}' references unknown parent '{parent}'")));
      }
    }
    for property in dto.properties.required.iter().chain(&dto.properties.optional) {
      if universe.property(property).is_none() {
        issues.push(ValidationIssue::error(format!(
          "category '{name}' references unknown property '{property}'"
        )));
      }
    }
    for subobject in dto.subobjects.required.iter().chain(&dto.subobjects.optional) {
      if universe.subobject(subobject).is_none() {
        issues.push(ValidationIssue::error(format!(
          "category '{name}' references unknown subobject '{subobject}'"
        )));
      }
    }
  }

  for (name, dto) in &document.subobjects {
    for property in dto.properties.required.iter().chain(&dto.properties.optional) {
      if universe.property(property).is_none() {
        issues.push(ValidationIssue::error(format!(
          "subobject '{name}' references unknown property '{property}'"
        )));
      }
    }
  }
}

fn check_cycles(universe: &CategoryUniverse, issues: &mut Vec<ValidationIssue>) {
  for cycle in detect_inheritance_cycles(universe) {
    issues.push(ValidationIssue::error(format!("cyclic inheritance: {}", cycle.join(", "))));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::loader::parse::parse_schema_document;

  #[test]
  fn valid_document_produces_a_universe_with_no_errors() {
    let doc = parse_schema_document(
      r#"{
        "schemaVersion": "1.0",
        "properties": { "Has name": { "datatype": "Text" } },
        "categories": {
          "Person": { "properties": { "required": ["Has name"], "optional": [] } }
        }
      }"#,
    )
    .unwrap();
    let report = validate(&doc);
    assert!(report.universe.is_some());
    assert!(!report.has_errors());
  }

  #[test]
  fn overlapping_required_and_optional_emits_a_warning_not_an_error() {
    let doc = parse_schema_document(
      r#"{
        "schemaVersion": "1.0",
        "properties": { "Has name": { "datatype": "Text" } },
        "categories": {
          "Person": { "properties": { "required": ["Has name"], "optional": ["Has name"] } }
        }
      }"#,
    )
    .unwrap();
    let report = validate(&doc);
    assert!(report.universe.is_some());
    assert!(!report.has_errors());
    assert!(report.issues.iter().any(|i| !i.is_error()));
  }

  #[test]
  fn unknown_parent_reference_is_an_error_and_suppresses_the_universe() {
    let doc = parse_schema_document(
      r#"{
        "schemaVersion": "1.0",
        "categories": { "Employee": { "parents": ["Ghost"] } }
      }"#,
    )
    .unwrap();
    let report = validate(&doc);
    assert!(report.universe.is_none());
    assert!(report.has_errors());
  }

  #[test]
  fn cyclic_inheritance_is_reported() {
    let doc = parse_schema_document(
      r#"{
        "schemaVersion": "1.0",
        "categories": {
          "A": { "parents": ["B"] },
          "B": { "parents": ["A"] }
        }
      }"#,
    )
    .unwrap();
    let report = validate(&doc);
    assert!(report.has_errors());
    assert!(report.issues.iter().any(|i| i.message.contains("cyclic")));
  }
}
