//! Re-exports the content-addressing primitives from
//! `ontology-compiler-support` under the name the rest of the state module
//! expects (spec §4.9: `hashContent(s) = SHA-256(canonical(s))`).

pub use ontology_compiler_support::{canonicalize, hash_content};
