//! Single-category form generator (spec §4.7): one form with one template
//! section for the selected category.

use super::input_mapper::emit_field;
use crate::generator::errors::ResolverError;
use crate::generator::resolver::MultiCategoryResolver;
use crate::generator::schema::CategoryUniverse;

/// Emits the single-category form document for `category_name`.
///
/// # Errors
///
/// Propagates [`ResolverError`] from the underlying category resolution.
pub fn emit(universe: &CategoryUniverse, category_name: &str) -> Result<String, ResolverError> {
  let resolved = MultiCategoryResolver::new(universe).resolve(&[category_name.to_string()])?;

  let mut body = format!("{{| class=\"formtable\"\n!{category_name}\n");
  for attributed in resolved.required_properties.iter().chain(&resolved.optional_properties) {
    let Some(property) = universe.property(&attributed.name) else {
      continue;
    };
    let required = resolved.required_properties.iter().any(|a| a.name == attributed.name);
    body.push_str(&emit_field(property, required));
    body.push('\n');
  }
  body.push_str("|}\n");
  body.push_str(&format!("[[Category:{category_name}]]"));

  Ok(body)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::schema::{Category, Datatype, Property};

  #[test]
  fn emits_one_section_with_required_and_optional_fields() {
    let category = Category::builder()
      .name("Employee".to_string())
      .required_properties(["Has id".to_string()].into_iter().collect())
      .optional_properties(["Has nickname".to_string()].into_iter().collect())
      .build()
      .unwrap();
    let id = Property::new("Has id", Datatype::Text, None, None, None, None, None, false, None, None).unwrap();
    let nickname = Property::new("Has nickname", Datatype::Text, None, None, None, None, None, false, None, None).unwrap();
    let universe = CategoryUniverse::new([category], [id, nickname], []);

    let body = emit(&universe, "Employee").unwrap();
    assert!(body.contains("!Employee"));
    assert!(body.contains("mandatory=true"));
    assert!(body.contains("[[Category:Employee]]"));
  }
}
