//! Semantic template generator (spec §4.4).
//!
//! Emits the wikitext template whose expansion stores semantic annotations
//! for one entity instance, one `#if`-guarded line per property so that
//! expanding the template with every parameter empty produces no
//! annotations, and so two templates composed on the same page never zero
//! out a value the other one set (spec §4.4's idempotence and composition
//! properties).

use crate::generator::naming::NamingHelper;
use crate::generator::schema::{Datatype, Property};

/// Builds the semantic template body for a category or a subobject type.
pub struct SemanticTemplateGenerator<'a> {
  properties: &'a [&'a Property],
}

impl<'a> SemanticTemplateGenerator<'a> {
  #[must_use]
  pub fn new(properties: &'a [&'a Property]) -> Self {
    Self { properties }
  }

  /// Emits the body for a category's top-level semantic storage, wrapped in
  /// `{{#set: ... }}`.
  #[must_use]
  pub fn emit_for_category(&self) -> String {
    self.emit_with_wrapper("#set", None)
  }

  /// Emits the body for a subobject's semantic storage, wrapped in
  /// `{{#subobject: ... }}` with the constant, unguarded
  /// `Has subobject type = Subobject:<name>` annotation (spec §4.4).
  #[must_use]
  pub fn emit_for_subobject(&self, subobject_name: &str) -> String {
    self.emit_with_wrapper("#subobject", Some(subobject_name))
  }

  fn emit_with_wrapper(&self, function: &str, subobject_name: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str(&format!("{{{{{function}:\n"));
    if let Some(name) = subobject_name {
      body.push_str(&format!("| Has subobject type = Subobject:{name}\n"));
    }
    for property in self.properties {
      body.push_str(&emit_property_line(property));
      body.push('\n');
    }
    body.push_str("}}");
    body
  }
}

/// Emits one conditional annotation line for a single property (spec
/// §4.4).
#[must_use]
fn emit_property_line(property: &Property) -> String {
  let param = NamingHelper::template_parameter(&property.name);
  let name = &property.name;

  if property.allows_multiple_values && property.datatype == Datatype::Page && property.allowed_namespace.is_some() {
    let ns = property.allowed_namespace.as_deref().unwrap_or_default();
    let token = NamingHelper::arraymap_item_token();
    return format!(
      "{{{{#if:{{{{{{{param}}}}}}}}|{{{{#arraymap:{{{{{{{param}}}}}}}}|,|{token}|[[{name}::{ns}:{token}]]|}}}}|}}}}"
    );
  }

  let value_expr = match &property.allowed_namespace {
    Some(ns) => format!("{ns}:{{{{{{{param}}}}}}}"),
    None => format!("{{{{{{{param}}}}}}}"),
  };
  let sep = if property.allows_multiple_values { "|+sep=," } else { "" };
  format!("| {name} = {{{{#if:{{{{{{{param}}}}}}}|{value_expr}|}}}}{sep}")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn prop(name: &str, datatype: Datatype, multi: bool, ns: Option<&str>) -> Property {
    Property::new(name, datatype, None, None, None, ns.map(String::from), None, multi, None, None).unwrap()
  }

  #[test]
  fn single_valued_unrestricted_property_uses_plain_if_guard() {
    let p = prop("Has full name", Datatype::Text, false, None);
    let line = emit_property_line(&p);
    assert_eq!(line, "| Has full name = {{#if:{{{full_name|}}}|{{{full_name|}}}|}}");
  }

  #[test]
  fn namespace_restricted_single_valued_property_prefixes_namespace() {
    let p = prop("Has manager", Datatype::Page, false, Some("Employee"));
    let line = emit_property_line(&p);
    assert_eq!(
      line,
      "| Has manager = {{#if:{{{manager|}}}|Employee:{{{manager|}}}|}}"
    );
  }

  #[test]
  fn multi_valued_unrestricted_property_appends_sep() {
    let p = prop("Has tag", Datatype::Text, true, None);
    let line = emit_property_line(&p);
    assert_eq!(line, "| Has tag = {{#if:{{{tag|}}}|{{{tag|}}}|}}|+sep=,");
  }

  #[test]
  fn multi_valued_namespaced_page_property_uses_arraymap() {
    let p = prop("Has team member", Datatype::Page, true, Some("Employee"));
    let line = emit_property_line(&p);
    assert!(line.contains("{{#arraymap:"));
    assert!(line.contains("@@item@@"));
    assert!(line.contains("[[Has team member::Employee:@@item@@]]"));
  }

  #[test]
  fn emitting_with_no_properties_produces_no_annotation_lines() {
    let generator = SemanticTemplateGenerator::new(&[]);
    let body = generator.emit_for_category();
    assert!(!body.contains('|'));
  }

  #[test]
  fn subobject_wrapper_includes_unguarded_type_line() {
    let p = prop("Has start date", Datatype::Date, false, None);
    let refs = [&p];
    let generator = SemanticTemplateGenerator::new(&refs);
    let body = generator.emit_for_subobject("Contact info");
    assert!(body.starts_with("{{#subobject:\n"));
    assert!(body.contains("| Has subobject type = Subobject:Contact info\n"));
  }
}
