//! Inheritance and multi-category resolution (spec §4.2 / §4.3).

mod c3;
mod multi_category;

pub use c3::{Linearizer, detect_inheritance_cycles};
pub use multi_category::{Attributed, MultiCategoryResolver, ResolvedPropertySet};
