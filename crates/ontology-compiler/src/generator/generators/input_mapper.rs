//! Property-input mapper (spec §4.7): selects the form input widget from a
//! property's datatype and constraints, shared by both form generators.

use crate::generator::naming::NamingHelper;
use crate::generator::schema::{Datatype, Property};

/// Renders one form-field declaration line for `property`.
///
/// Required fields carry the `mandatory=true` marker; optional fields omit
/// it (spec §4.7).
#[must_use]
pub fn emit_field(property: &Property, required: bool) -> String {
  let param = NamingHelper::template_parameter(&property.name);
  let mandatory = if required { "|mandatory=true" } else { "" };
  let input_type = input_type_for(property);
  format!("{{{{field}}}}\n{{{{{param}|{input_type}{mandatory}}}}}", field = param)
}

/// Picks the input widget in spec §4.7's priority order: enumerated
/// `allowedValues` beats everything else, then a namespace/category
/// autocomplete restriction, then `Page` constrained to a range category,
/// then the datatype-specific widgets, falling back to plain text.
fn input_type_for(property: &Property) -> &'static str {
  if property.allowed_values.is_some() {
    return "input type=dropdown";
  }
  if property.allowed_namespace.is_some() || property.allowed_category.is_some() {
    return "input type=combobox|autocomplete on category";
  }
  if property.datatype == Datatype::Page {
    return "input type=combobox";
  }
  match property.datatype {
    Datatype::Code => "input type=textarea",
    Datatype::Date => "input type=datepicker",
    Datatype::Boolean => "input type=checkbox",
    _ => "input type=text",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn text(name: &str) -> Property {
    Property::new(name, Datatype::Text, None, None, None, None, None, false, None, None).unwrap()
  }

  #[test]
  fn required_field_carries_mandatory_marker() {
    let field = emit_field(&text("Has full name"), true);
    assert!(field.contains("mandatory=true"));
  }

  #[test]
  fn optional_field_omits_mandatory_marker() {
    let field = emit_field(&text("Has nickname"), false);
    assert!(!field.contains("mandatory"));
  }

  #[test]
  fn enumerated_allowed_values_wins_over_datatype() {
    let p = Property::new(
      "Has status",
      Datatype::Page,
      None,
      None,
      Some(vec!["Active".to_string()]),
      None,
      None,
      false,
      None,
      None,
    )
    .unwrap();
    assert_eq!(input_type_for(&p), "input type=dropdown");
  }

  #[test]
  fn namespace_restriction_wins_over_plain_page_combobox() {
    let p = Property::new(
      "Has manager",
      Datatype::Page,
      None,
      None,
      None,
      Some("Employee".to_string()),
      None,
      false,
      None,
      None,
    )
    .unwrap();
    assert_eq!(input_type_for(&p), "input type=combobox|autocomplete on category");
  }

  #[test]
  fn plain_page_property_uses_combobox() {
    let p = text("Has manager");
    let p = Property::new(
      p.name, Datatype::Page, None, None, None, None, None, false, None, None,
    )
    .unwrap();
    assert_eq!(input_type_for(&p), "input type=combobox");
  }

  #[test]
  fn code_property_uses_textarea() {
    let p = Property::new("Has script", Datatype::Code, None, None, None, None, None, false, None, None).unwrap();
    assert_eq!(input_type_for(&p), "input type=textarea");
  }

  #[test]
  fn date_property_uses_datepicker() {
    let p = Property::new("Has start date", Datatype::Date, None, None, None, None, None, false, None, None).unwrap();
    assert_eq!(input_type_for(&p), "input type=datepicker");
  }

  #[test]
  fn boolean_property_uses_checkbox() {
    let p = Property::new("Is active", Datatype::Boolean, None, None, None, None, None, false, None, None).unwrap();
    assert_eq!(input_type_for(&p), "input type=checkbox");
  }

  #[test]
  fn text_property_uses_plain_text_input() {
    assert_eq!(input_type_for(&text("Has full name")), "input type=text");
  }
}
