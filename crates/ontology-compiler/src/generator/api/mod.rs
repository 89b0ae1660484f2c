//! The resolution/query API (spec §6.4).

mod resolve;

pub use resolve::{ResolveResponse, ResolvedCategory, ResolvedProperty, ResolvedSubobject, resolve_multi_category};
