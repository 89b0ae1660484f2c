//! The layered base-ontology installer (spec §4.10).
//!
//! Installs every category/property/subobject in a loaded
//! [`CategoryUniverse`] against a live [`PageStore`]/[`SemanticStore`] pair
//! in five ordered layers, flushing the semantic backend to quiescence
//! between each (spec §4.10: "advancing before quiescence leads to
//! late-bound annotations being dropped"). Idempotent: a layer skips any
//! write whose content hash already matches the recorded state, so
//! re-running the same installation is a no-op (spec §4.10's "achieved by
//! keying writes on content hashes").

use std::time::Duration;

use tokio::time::timeout;

use super::errors::InstallError;
use super::generators::{DispatcherGenerator, DisplayStubGenerator, SemanticTemplateGenerator, forms};
use super::resolver::Linearizer;
use super::schema::{Category, CategoryUniverse, Property};
use super::state::{StateManager, TemplateOwner};
use super::stores::{CategoryStore, PageStore, PropertyStore, SemanticStore, SubobjectStore, Title};

const TEMPLATE_NAMESPACE: &str = "Template";
const FORM_NAMESPACE: &str = "Form";

/// The five ordered layers (spec §4.10), in installation order.
const LAYERS: [&str; 5] = [
  "render templates",
  "property types",
  "property annotations",
  "subobjects",
  "categories",
];

/// Tally of one [`Installer::install`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
  pub layers_completed: Vec<&'static str>,
  pub pages_written: usize,
  pub pages_skipped_unchanged: usize,
}

/// Drives a full base-ontology installation against a [`PageStore`]/
/// [`SemanticStore`] pair, owning the [`StateManager`] that makes repeat
/// installs idempotent.
pub struct Installer<'s, P: PageStore, S: SemanticStore> {
  pages: &'s mut P,
  semantic: &'s mut S,
  state: StateManager,
  quiescence_timeout: Duration,
}

impl<'s, P: PageStore, S: SemanticStore> Installer<'s, P, S> {
  #[must_use]
  pub fn new(pages: &'s mut P, semantic: &'s mut S, state: StateManager, quiescence_timeout: Duration) -> Self {
    Self {
      pages,
      semantic,
      state,
      quiescence_timeout,
    }
  }

  #[must_use]
  pub fn state(&self) -> &StateManager {
    &self.state
  }

  /// Installs every entity in `universe`, layer by layer.
  ///
  /// # Errors
  ///
  /// Returns [`InstallError::QuiescenceTimeout`] if a layer's flush does not
  /// complete within the configured timeout. Per-write failures are
  /// captured on the returned [`super::stores::WriteOutcome`] values rather
  /// than aborting the whole run (spec §7) — only a flush timeout stops the
  /// installer outright.
  pub async fn install(&mut self, universe: &CategoryUniverse) -> Result<InstallReport, InstallError> {
    let mut report = InstallReport::default();

    self.install_templates(universe, &mut report);
    self.flush(LAYERS[0]).await?;

    self.install_property_types(universe, &mut report);
    self.flush(LAYERS[1]).await?;

    self.install_property_annotations(universe, &mut report);
    self.flush(LAYERS[2]).await?;

    self.install_subobjects(universe, &mut report);
    self.flush(LAYERS[3]).await?;

    self.install_categories(universe, &mut report);
    self.flush(LAYERS[4]).await?;

    Ok(report)
  }

  async fn flush(&mut self, layer: &'static str) -> Result<(), InstallError> {
    timeout(self.quiescence_timeout, self.semantic.flush_pending())
      .await
      .map_err(|_| InstallError::QuiescenceTimeout {
        layer,
        timeout_secs: self.quiescence_timeout.as_secs(),
      })
  }

  fn install_templates(&mut self, universe: &CategoryUniverse, report: &mut InstallReport) {
    for category in universe.categories() {
      let properties: Vec<&Property> = effective_properties(universe, category);

      let dispatcher = DispatcherGenerator::new(&category.name, &properties).emit();
      self.write_template(&category.name, &dispatcher, report);

      let semantic = SemanticTemplateGenerator::new(&properties).emit_for_category();
      self.write_template(&format!("Semantic {}", category.name), &semantic, report);

      let display = DisplayStubGenerator::new(category, &properties).emit();
      self.write_display_stub(&format!("Display {}", category.name), &display, report);

      if let Ok(form) = forms::single(universe, &category.name) {
        self.write_form(&category.name, &form, report);
      }
    }
  }

  fn write_template(&mut self, name: &str, content: &str, report: &mut InstallReport) {
    if self.skip_unchanged(name, content) {
      report.pages_skipped_unchanged += 1;
      return;
    }
    let title = Title {
      namespace: TEMPLATE_NAMESPACE.to_string(),
      text: name.to_string(),
    };
    let _ = self.pages.create_or_update(&title, content, "install: render template");
    self.state.record_templates([(
      name.to_string(),
      content.to_string(),
      TemplateOwner::Category { category: name.to_string() },
    )]);
    report.pages_written += 1;
  }

  fn write_display_stub(&mut self, name: &str, content: &str, report: &mut InstallReport) {
    let title = Title {
      namespace: TEMPLATE_NAMESPACE.to_string(),
      text: name.to_string(),
    };
    // Display stubs are created once and never overwritten (spec §4.6):
    // existence is checked via the store, not by content comparison.
    if self.pages.exists(&title) {
      report.pages_skipped_unchanged += 1;
      return;
    }
    let _ = self.pages.create_or_update(&title, content, "install: display stub (created once)");
    report.pages_written += 1;
  }

  fn write_form(&mut self, name: &str, content: &str, report: &mut InstallReport) {
    if self.skip_unchanged(&format!("Form:{name}"), content) {
      report.pages_skipped_unchanged += 1;
      return;
    }
    let title = Title {
      namespace: FORM_NAMESPACE.to_string(),
      text: name.to_string(),
    };
    let _ = self.pages.create_or_update(&title, content, "install: form");
    self.state.record_pages([(format!("Form:{name}"), content.to_string())]);
    report.pages_written += 1;
  }

  fn install_property_types(&mut self, universe: &CategoryUniverse, report: &mut InstallReport) {
    let mut store = PropertyStore::new(self.pages);
    for property in universe.properties() {
      let content = render_property_type(property);
      store.write(&property.name, &content, "install: property type");
      report.pages_written += 1;
    }
  }

  fn install_property_annotations(&mut self, universe: &CategoryUniverse, report: &mut InstallReport) {
    let mut store = PropertyStore::new(self.pages);
    for property in universe.properties().filter(|p| p.subproperty_of.is_some()) {
      let content = render_property_with_annotations(property);
      store.write(&property.name, &content, "install: property annotations");
      report.pages_written += 1;
    }
  }

  fn install_subobjects(&mut self, universe: &CategoryUniverse, report: &mut InstallReport) {
    let mut store = SubobjectStore::new(self.pages);
    for subobject in universe.subobjects() {
      let content = render_subobject(subobject.name.as_str(), &subobject.required_properties, &subobject.optional_properties);
      store.write(&subobject.name, &content, "install: subobject");
      report.pages_written += 1;
    }
  }

  fn install_categories(&mut self, universe: &CategoryUniverse, report: &mut InstallReport) {
    let linearizer = Linearizer::new(universe);
    let mut store = CategoryStore::new(self.pages);
    for category in universe.categories() {
      let Ok(effective) = linearizer.effective_category(&category.name) else {
        continue;
      };
      let content = render_category(&effective);
      store.write(&category.name, &content, "install: category");
      report.pages_written += 1;
    }
  }

  /// `true` when `name`'s stored template hash already matches `content`
  /// (spec §4.10: idempotence via content hash).
  fn skip_unchanged(&self, name: &str, content: &str) -> bool {
    let current = [(name.to_string(), content.to_string())].into_iter().collect();
    !self.state.stale_templates(&current).contains(&name.to_string())
  }
}

fn effective_properties<'u>(universe: &'u CategoryUniverse, category: &Category) -> Vec<&'u Property> {
  category
    .required_properties()
    .iter()
    .chain(category.optional_properties())
    .filter_map(|name| universe.property(name))
    .collect()
}

fn render_property_type(property: &Property) -> String {
  format!("{{{{#set:\nHas type={}\n}}}}", property.datatype)
}

fn render_property_with_annotations(property: &Property) -> String {
  let mut content = render_property_type(property);
  if let Some(parent) = &property.subproperty_of {
    content.push_str(&format!("\n{{{{#set:\nSubproperty of={parent}\n}}}}"));
  }
  content
}

fn render_subobject(name: &str, required: &indexmap::IndexSet<String>, optional: &indexmap::IndexSet<String>) -> String {
  let mut lines = vec![format!("Subobject: {name}")];
  for property in required {
    lines.push(format!("  required: {property}"));
  }
  for property in optional {
    lines.push(format!("  optional: {property}"));
  }
  lines.join("\n")
}

fn render_category(category: &Category) -> String {
  let mut lines = vec![format!("Category: {}", category.name)];
  for property in category.required_properties() {
    lines.push(format!("  required property: {property}"));
  }
  for property in category.optional_properties() {
    lines.push(format!("  optional property: {property}"));
  }
  for subobject in category.required_subobjects() {
    lines.push(format!("  required subobject: {subobject}"));
  }
  for subobject in category.optional_subobjects() {
    lines.push(format!("  optional subobject: {subobject}"));
  }
  lines.join("\n")
}
