//! Wire-format DTOs for the schema file (spec §6.3).
//!
//! These mirror the file format field-for-field and are deliberately
//! unvalidated: [`super::validate`] turns a [`SchemaDocument`] into
//! constructed, invariant-checked [`crate::generator::schema`] values (or a
//! list of [`crate::generator::errors::ValidationIssue`]s).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::generator::schema::Datatype;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDocument {
  pub schema_version: String,
  #[serde(default)]
  pub categories: IndexMap<String, CategoryDto>,
  #[serde(default)]
  pub properties: IndexMap<String, PropertyDto>,
  #[serde(default)]
  pub subobjects: IndexMap<String, SubobjectDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequiredOptionalDto {
  #[serde(default)]
  pub required: Vec<String>,
  #[serde(default)]
  pub optional: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionDto {
  pub name: String,
  #[serde(default)]
  pub properties: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayDto {
  #[serde(default)]
  pub header: Vec<String>,
  #[serde(default)]
  pub sections: Vec<SectionDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormsDto {
  #[serde(default)]
  pub sections: Vec<SectionDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDto {
  #[serde(default)]
  pub label: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub parents: Vec<String>,
  #[serde(default)]
  pub properties: RequiredOptionalDto,
  #[serde(default)]
  pub subobjects: RequiredOptionalDto,
  #[serde(default)]
  pub display: DisplayDto,
  #[serde(default)]
  pub forms: FormsDto,
  #[serde(default)]
  pub target_namespace: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDto {
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

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubobjectDto {
  #[serde(default)]
  pub properties: RequiredOptionalDto,
}
