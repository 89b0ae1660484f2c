//! Schema file loading (spec §6.3): JSON and YAML are both accepted, and
//! the format is auto-detected from the first non-whitespace character
//! rather than the file extension, since a schema file can arrive from
//! anywhere (a pasted textarea, a page revision) with no reliable name.

use std::path::Path;

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use ontology_compiler_support::{deserialize_json_with_diagnostics, deserialize_yaml_with_diagnostics};

use super::dto::SchemaDocument;
use crate::generator::errors::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchemaFormat {
  Json,
  Yaml,
}

fn detect_format(content: &str) -> SchemaFormat {
  match content.trim_start().chars().next() {
    Some('{' | '[') => SchemaFormat::Json,
    _ => SchemaFormat::Yaml,
  }
}

/// Loads and deserializes the schema document at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if `path` cannot be opened, or
/// [`LoadError::Parse`] if the content is not valid JSON/YAML for
/// [`SchemaDocument`].
pub async fn load_schema_document(path: &Path) -> Result<SchemaDocument, LoadError> {
  let file = AsyncMmapFile::open(path).await.map_err(|source| LoadError::Io {
    path: path.display().to_string(),
    source,
  })?;
  let content = String::from_utf8_lossy(file.as_slice()).into_owned();
  parse_schema_document(&content)
}

/// Deserializes `content` as a [`SchemaDocument`], auto-detecting JSON vs.
/// YAML from its first non-whitespace character (spec §6.3).
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if `content` is not valid for the detected
/// format.
pub fn parse_schema_document(content: &str) -> Result<SchemaDocument, LoadError> {
  match detect_format(content) {
    SchemaFormat::Json => Ok(deserialize_json_with_diagnostics(content)?),
    SchemaFormat::Yaml => Ok(deserialize_yaml_with_diagnostics(content)?),
  }
}
