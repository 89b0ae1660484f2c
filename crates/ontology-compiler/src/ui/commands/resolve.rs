use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::generator::api::resolve_multi_category;
use crate::generator::loader::load_and_validate;
use crate::ui::cli::ResolveCommand;
use crate::ui::colors::IntoComfyColor;
use crate::ui::{Colors, term_width};

/// Live multi-category resolution with no persistence (spec.md §2.2's
/// "live preview" use case).
pub async fn resolve(command: ResolveCommand, colors: &Colors) -> anyhow::Result<()> {
  let (universe, _issues) = load_and_validate(&command.input).await?;
  let response = resolve_multi_category(&universe, &command.category)?;

  let mut properties = Table::new();
  properties
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());
  let mut header = Row::new();
  for label in ["PROPERTY", "TYPE", "REQUIRED", "SHARED", "SOURCES"] {
    header.add_cell(Cell::new(label).fg(IntoComfyColor::into(colors.label())));
  }
  properties.set_header(header);
  for property in &response.properties {
    let mut row = Row::new();
    row.add_cell(Cell::new(&property.title).fg(IntoComfyColor::into(colors.value())).add_attribute(Attribute::Bold));
    row.add_cell(Cell::new(property.datatype.to_string()).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(
      Cell::new(if property.required == 1 { "yes" } else { "no" })
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(if property.shared == 1 { "yes" } else { "no" })
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(property.sources.join(", ")).fg(IntoComfyColor::into(colors.info())));
    properties.add_row(row);
  }
  println!("{properties}");

  let mut subobjects = Table::new();
  subobjects
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());
  let mut header = Row::new();
  for label in ["SUBOBJECT", "REQUIRED", "SHARED", "SOURCES"] {
    header.add_cell(Cell::new(label).fg(IntoComfyColor::into(colors.label())));
  }
  subobjects.set_header(header);
  for subobject in &response.subobjects {
    let mut row = Row::new();
    row.add_cell(Cell::new(&subobject.title).fg(IntoComfyColor::into(colors.value())).add_attribute(Attribute::Bold));
    row.add_cell(
      Cell::new(if subobject.required == 1 { "yes" } else { "no" })
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(if subobject.shared == 1 { "yes" } else { "no" })
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(subobject.sources.join(", ")).fg(IntoComfyColor::into(colors.info())));
    subobjects.add_row(row);
  }
  println!("{subobjects}");

  Ok(())
}
