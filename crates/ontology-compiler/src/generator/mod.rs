//! The ontology compiler core: schema model, inheritance/multi-category
//! resolution, wikitext artifact generators, the content-addressed state
//! manager, the wiki stores, the layered installer, and the query API.

pub mod api;
pub mod errors;
pub mod generators;
pub mod installer;
pub mod loader;
pub mod naming;
pub mod resolver;
pub mod schema;
pub mod state;
pub mod stores;
