//! Schema file loading, parsing, and structural validation (spec §6.3, §7).

mod dto;
mod parse;
mod validate;

pub use dto::{CategoryDto, PropertyDto, RequiredOptionalDto, SchemaDocument, SubobjectDto};
pub use parse::{load_schema_document, parse_schema_document};
pub use validate::{ValidationReport, validate};

use std::path::Path;

use crate::generator::errors::LoadError;
use crate::generator::schema::CategoryUniverse;

/// Loads the schema file at `path`, parses it, and validates it, returning
/// the constructed [`CategoryUniverse`] if validation found no errors.
///
/// Warnings (e.g. a required/optional overlap promoted silently) do not fail
/// the import; only [`crate::generator::errors::Severity::Error`] findings
/// do (spec §7).
///
/// # Errors
///
/// Returns [`LoadError::Io`] or [`LoadError::Parse`] if the file cannot be
/// read or deserialized, or [`LoadError::Invalid`] if validation found
/// structural errors.
pub async fn load_and_validate(path: &Path) -> Result<(CategoryUniverse, Vec<crate::generator::errors::ValidationIssue>), LoadError> {
  let document = load_schema_document(path).await?;
  let report = validate(&document);
  match report.universe {
    Some(universe) => Ok((universe, report.issues)),
    None => Err(LoadError::Invalid { errors: report.issues }),
  }
}
