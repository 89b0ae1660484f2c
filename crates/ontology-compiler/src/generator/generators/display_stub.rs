//! Display stub generator (spec §4.6): a human-editable visual layout
//! template, created once and never regenerated (spec §3: "Display stubs
//! are the one exception — created once, never overwritten").

use crate::generator::naming::NamingHelper;
use crate::generator::schema::{Category, Datatype, Property};

/// Selects and renders the per-property display markup.
pub struct DisplayStubGenerator<'a> {
  category: &'a Category,
  properties: &'a [&'a Property],
}

impl<'a> DisplayStubGenerator<'a> {
  #[must_use]
  pub fn new(category: &'a Category, properties: &'a [&'a Property]) -> Self {
    Self { category, properties }
  }

  #[must_use]
  pub fn emit(&self) -> String {
    let mut body = String::new();
    if self.category.display_sections.is_empty() {
      for property in self.properties {
        body.push_str(&self.emit_property_row(property));
        body.push('\n');
      }
      return body.trim_end().to_string();
    }

    for section in &self.category.display_sections {
      body.push_str(&format!("== {} ==\n", section.name));
      for property_name in &section.properties {
        if let Some(property) = self.properties.iter().find(|p| &p.name == property_name) {
          body.push_str(&self.emit_property_row(property));
          body.push('\n');
        }
      }
    }
    body.trim_end().to_string()
  }

  fn emit_property_row(&self, property: &Property) -> String {
    let param = NamingHelper::template_parameter(&property.name);
    let render = Self::render_expression(property, &param);
    format!("{label}: {render}", label = property.display_label())
  }

  /// Picks the per-property render template (spec §4.6):
  /// 1. An explicit `hasTemplate` override, if present.
  /// 2. The built-in `Page` template (`[[:value]]`, leading colon so
  ///    MediaWiki treats the value as a page name rather than a namespace
  ///    directive) for `datatype = Page`.
  /// 3. The default text template otherwise.
  ///
  /// Multi-valued, namespace-restricted `Page` properties are rendered as a
  /// comma-joined list of namespace-prefixed links, computed here at
  /// generation time rather than at render time (spec §4.6).
  fn render_expression(property: &Property, param: &str) -> String {
    if let Some(template) = &property.has_template {
      return format!("{{{{{template}|{{{{{{{param}}}}}}}}}}}}");
    }

    if property.datatype == Datatype::Page {
      if property.allows_multiple_values
        && let Some(ns) = &property.allowed_namespace
      {
        let token = NamingHelper::arraymap_item_token();
        return format!("{{{{#arraymap:{{{{{{{param}}}}}}}}|,|{token}|[[:{ns}:{token}|{token}]]|, }}}}");
      }
      return format!("[[:{{{{{{{param}}}}}}}}]]");
    }

    format!("{{{{{{{param}}}}}}}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::schema::Section;

  fn page_prop(name: &str, multi: bool, ns: Option<&str>) -> Property {
    Property::new(name, Datatype::Page, None, None, None, ns.map(String::from), None, multi, None, None).unwrap()
  }

  #[test]
  fn page_property_renders_with_leading_colon() {
    let p = page_prop("Has manager", false, None);
    let refs = [&p];
    let category = Category::builder().name("Employee".to_string()).build().unwrap();
    let generator = DisplayStubGenerator::new(&category, &refs);
    let body = generator.emit();
    assert!(body.contains("[[:{{{manager}}}]]"));
  }

  #[test]
  fn text_property_renders_plain_parameter() {
    let p = Property::new("Has full name", Datatype::Text, None, None, None, None, None, false, None, None).unwrap();
    let refs = [&p];
    let category = Category::builder().name("Employee".to_string()).build().unwrap();
    let generator = DisplayStubGenerator::new(&category, &refs);
    assert!(generator.emit().contains("{{{full_name}}}"));
  }

  #[test]
  fn multi_valued_namespaced_page_property_uses_arraymap_at_generation_time() {
    let p = page_prop("Has team member", true, Some("Employee"));
    let refs = [&p];
    let category = Category::builder().name("Team".to_string()).build().unwrap();
    let generator = DisplayStubGenerator::new(&category, &refs);
    let body = generator.emit();
    assert!(body.contains("{{#arraymap:"));
    assert!(body.contains("Employee:@@item@@"));
  }

  #[test]
  fn sections_are_rendered_in_order_with_headings() {
    let p = Property::new("Has full name", Datatype::Text, None, None, None, None, None, false, None, None).unwrap();
    let refs = [&p];
    let category = Category::builder()
      .name("Employee".to_string())
      .display_sections(vec![Section::new("Basics", ["Has full name".to_string()])])
      .build()
      .unwrap();
    let generator = DisplayStubGenerator::new(&category, &refs);
    let body = generator.emit();
    assert!(body.starts_with("== Basics =="));
  }
}
