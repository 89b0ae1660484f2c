use serde::de::DeserializeOwned;

/// Error produced while deserializing a schema file, with the failing path
/// preserved so the caller can report "categories.Employee.parents[0]" rather
/// than a bare line/column number.
#[derive(Debug, thiserror::Error)]
pub enum SchemaDiagnosticsError {
  #[error("JSON deserialization error at path '{path}': {inner}")]
  Json { path: String, inner: serde_json::Error },

  #[error("YAML deserialization error at path '{path}': {inner}")]
  Yaml { path: String, inner: serde_yaml::Error },
}

/// Deserializes `raw` as JSON, reporting the field path on failure.
///
/// # Errors
///
/// Returns [`SchemaDiagnosticsError::Json`] if `raw` is not valid JSON for
/// `T`.
pub fn deserialize_json_with_diagnostics<T>(raw: &str) -> Result<T, SchemaDiagnosticsError>
where
  T: DeserializeOwned,
{
  let mut de = serde_json::Deserializer::from_str(raw);
  serde_path_to_error::deserialize(&mut de).map_err(|err| SchemaDiagnosticsError::Json {
    path: err.path().to_string(),
    inner: err.into_inner(),
  })
}

/// Deserializes `raw` as YAML, reporting the field path on failure.
///
/// # Errors
///
/// Returns [`SchemaDiagnosticsError::Yaml`] if `raw` is not valid YAML for
/// `T`.
pub fn deserialize_yaml_with_diagnostics<T>(raw: &str) -> Result<T, SchemaDiagnosticsError>
where
  T: DeserializeOwned,
{
  let de = serde_yaml::Deserializer::from_str(raw);
  serde_path_to_error::deserialize(de).map_err(|err| SchemaDiagnosticsError::Yaml {
    path: err.path().to_string(),
    inner: err.into_inner(),
  })
}

#[cfg(test)]
mod tests {
  use serde::Deserialize;

  use super::*;

  #[derive(Debug, Deserialize)]
  struct Inner {
    #[allow(dead_code)]
    count: u32,
  }

  #[derive(Debug, Deserialize)]
  struct Outer {
    #[allow(dead_code)]
    inner: Inner,
  }

  #[test]
  fn json_error_reports_nested_path() {
    let raw = r#"{"inner": {"count": "not-a-number"}}"#;
    let err = deserialize_json_with_diagnostics::<Outer>(raw).unwrap_err();
    match err {
      SchemaDiagnosticsError::Json { path, .. } => assert_eq!(path, "inner.count"),
      SchemaDiagnosticsError::Yaml { .. } => panic!("expected Json variant"),
    }
  }

  #[test]
  fn yaml_error_reports_nested_path() {
    let raw = "inner:\n  count: not-a-number\n";
    let err = deserialize_yaml_with_diagnostics::<Outer>(raw).unwrap_err();
    match err {
      SchemaDiagnosticsError::Yaml { path, .. } => assert_eq!(path, "inner.count"),
      SchemaDiagnosticsError::Json { .. } => panic!("expected Yaml variant"),
    }
  }
}
