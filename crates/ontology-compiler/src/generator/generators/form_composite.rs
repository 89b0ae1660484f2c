//! Composite form generator (spec §4.7): a single form document covering
//! 2+ selected categories as separate template sections.

use super::input_mapper::emit_field;
use crate::generator::errors::ResolverError;
use crate::generator::resolver::{Attributed, MultiCategoryResolver};
use crate::generator::schema::CategoryUniverse;

/// The form name for a set of categories: alphabetically sorted and
/// `+`-joined, so `A+B` and `B+A` name the same form (spec §4.7).
#[must_use]
pub fn form_name(category_names: &[String]) -> String {
  let mut sorted = category_names.to_vec();
  sorted.sort();
  sorted.join("+")
}

/// Emits the composite form document for `category_names` (spec §4.7).
///
/// Categories are sorted alphabetically before anything else happens, so
/// the sections, the shared-property distribution, and the resulting
/// content are identical regardless of the order the caller supplied.
///
/// # Errors
///
/// Propagates [`ResolverError`] from the underlying multi-category
/// resolution.
pub fn emit(universe: &CategoryUniverse, category_names: &[String]) -> Result<String, ResolverError> {
  let mut sorted_names = category_names.to_vec();
  sorted_names.sort();

  let resolved = MultiCategoryResolver::new(universe).resolve(&sorted_names)?;

  let required_names: std::collections::HashSet<&str> =
    resolved.required_properties.iter().map(|a| a.name.as_str()).collect();

  let mut body = String::new();
  for (index, category_name) in sorted_names.iter().enumerate() {
    body.push_str(&format!("{{| class=\"formtable\"\n!{category_name}\n"));

    let fields: Vec<&Attributed> = if index == 0 {
      resolved
        .shared_properties()
        .chain(resolved.category_specific_properties(category_name))
        .collect()
    } else {
      resolved.category_specific_properties(category_name).collect()
    };

    for attributed in fields {
      let Some(property) = universe.property(&attributed.name) else {
        continue;
      };
      body.push_str(&emit_field(property, required_names.contains(attributed.name.as_str())));
      body.push('\n');
    }
    body.push_str("|}\n");
  }

  for category_name in &sorted_names {
    body.push_str(&format!("[[Category:{category_name}]]\n"));
  }

  Ok(body.trim_end().to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::schema::{Category, Datatype, Property};

  fn universe() -> CategoryUniverse {
    let person = Category::builder()
      .name("Person".to_string())
      .required_properties(["Has name".to_string()].into_iter().collect())
      .build()
      .unwrap();
    let employee = Category::builder()
      .name("Employee".to_string())
      .required_properties(["Has id".to_string()].into_iter().collect())
      .optional_properties(["Has name".to_string()].into_iter().collect())
      .build()
      .unwrap();
    let name = Property::new("Has name", Datatype::Text, None, None, None, None, None, false, None, None).unwrap();
    let id = Property::new("Has id", Datatype::Text, None, None, None, None, None, false, None, None).unwrap();
    CategoryUniverse::new([person, employee], [name, id], [])
  }

  #[test]
  fn form_name_is_alphabetically_sorted_regardless_of_input_order() {
    assert_eq!(
      form_name(&["Employee".to_string(), "Person".to_string()]),
      "Employee+Person"
    );
    assert_eq!(
      form_name(&["Person".to_string(), "Employee".to_string()]),
      "Employee+Person"
    );
  }

  #[test]
  fn composite_form_is_identical_regardless_of_input_order() {
    let u = universe();
    let a = emit(&u, &["Person".to_string(), "Employee".to_string()]).unwrap();
    let b = emit(&u, &["Employee".to_string(), "Person".to_string()]).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn first_section_carries_shared_property_second_section_omits_it() {
    let u = universe();
    let body = emit(&u, &["Employee".to_string(), "Person".to_string()]).unwrap();
    let employee_section_end = body.find("!Person").unwrap();
    let (employee_section, person_section) = body.split_at(employee_section_end);
    assert!(employee_section.contains("name"));
    assert!(!person_section.contains("name"));
  }

  #[test]
  fn every_category_gets_a_category_wikilink() {
    let u = universe();
    let body = emit(&u, &["Employee".to_string(), "Person".to_string()]).unwrap();
    assert!(body.contains("[[Category:Employee]]"));
    assert!(body.contains("[[Category:Person]]"));
  }

  #[test]
  fn single_category_input_degenerates_correctly() {
    let u = universe();
    let body = emit(&u, &["Person".to_string()]).unwrap();
    assert!(body.contains("!Person"));
    assert!(body.contains("[[Category:Person]]"));
  }
}
