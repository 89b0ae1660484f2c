//! Small, dependency-light helpers shared between the compiler library and
//! its CLI front end: canonical content hashing and diagnostic-friendly
//! schema deserialization.

mod diagnostics;
mod hashing;

pub use diagnostics::{SchemaDiagnosticsError, deserialize_json_with_diagnostics, deserialize_yaml_with_diagnostics};
pub use hashing::{SHA256_PREFIX, canonicalize, hash_content};
pub use serde_with::{StringWithSeparator, formats::CommaSeparator};

/// De/serialize a comma-delimited collection using `Display`/`FromStr`.
///
/// Used for the wire form of `Property::allowed_values` and other
/// multi-valued schema fields that round-trip through JSON/YAML as a single
/// delimited string in some host-wiki dialects.
pub type StringWithCommaSeparator = StringWithSeparator<CommaSeparator, String>;
