//! Dispatcher template generator (spec §4.5): a thin, always-overwritten
//! indirection that transcludes the semantic template and the display stub
//! for a category, forwarding the entity's own parameters to both.

use crate::generator::naming::NamingHelper;
use crate::generator::schema::Property;

pub struct DispatcherGenerator<'a> {
  category_name: &'a str,
  properties: &'a [&'a Property],
}

impl<'a> DispatcherGenerator<'a> {
  #[must_use]
  pub fn new(category_name: &'a str, properties: &'a [&'a Property]) -> Self {
    Self { category_name, properties }
  }

  #[must_use]
  pub fn emit(&self) -> String {
    let params = self.forwarded_params();
    let name = self.category_name;
    format!("{{{{Semantic {name}{params}}}}}\n{{{{Display {name}{params}}}}}")
  }

  fn forwarded_params(&self) -> String {
    self
      .properties
      .iter()
      .map(|p| {
        let param = NamingHelper::template_parameter(&p.name);
        format!("|{param}={{{{{{{param}}}}}}}")
      })
      .collect()
  }
}
