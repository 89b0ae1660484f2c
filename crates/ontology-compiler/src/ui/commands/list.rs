use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::generator::loader::load_and_validate;
use crate::ui::cli::{ListCommand, ListWhat};
use crate::ui::colors::IntoComfyColor;
use crate::ui::{Colors, term_width};

/// Lists categories, properties, or subobjects present in a loaded schema
/// file (spec.md §2's administrative browsing use case).
pub async fn list(command: ListCommand, colors: &Colors) -> anyhow::Result<()> {
  let (universe, _issues) = load_and_validate(&command.input).await?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  match command.what {
    ListWhat::Categories => {
      let mut header = Row::new();
      for label in ["CATEGORY", "PARENTS", "REQUIRED PROPERTIES", "OPTIONAL PROPERTIES"] {
        header.add_cell(Cell::new(label).fg(IntoComfyColor::into(colors.label())));
      }
      table.set_header(header);

      let mut categories: Vec<_> = universe.categories().collect();
      categories.sort_by(|a, b| a.name.cmp(&b.name));
      for category in categories {
        let mut row = Row::new();
        row.add_cell(Cell::new(&category.name).fg(IntoComfyColor::into(colors.value())).add_attribute(Attribute::Bold));
        row.add_cell(Cell::new(category.parents.iter().cloned().collect::<Vec<_>>().join(", ")).fg(IntoComfyColor::into(colors.primary())));
        row.add_cell(
          Cell::new(category.required_properties().iter().cloned().collect::<Vec<_>>().join(", "))
            .fg(IntoComfyColor::into(colors.accent())),
        );
        row.add_cell(
          Cell::new(category.optional_properties().iter().cloned().collect::<Vec<_>>().join(", "))
            .fg(IntoComfyColor::into(colors.info())),
        );
        table.add_row(row);
      }
    }
    ListWhat::Properties => {
      let mut header = Row::new();
      for label in ["PROPERTY", "TYPE", "SUBPROPERTY OF"] {
        header.add_cell(Cell::new(label).fg(IntoComfyColor::into(colors.label())));
      }
      table.set_header(header);

      let mut properties: Vec<_> = universe.properties().collect();
      properties.sort_by(|a, b| a.name.cmp(&b.name));
      for property in properties {
        let mut row = Row::new();
        row.add_cell(Cell::new(&property.name).fg(IntoComfyColor::into(colors.value())).add_attribute(Attribute::Bold));
        row.add_cell(
          Cell::new(property.datatype.to_string())
            .fg(IntoComfyColor::into(colors.primary()))
            .set_alignment(CellAlignment::Right),
        );
        row.add_cell(Cell::new(property.subproperty_of.clone().unwrap_or_default()).fg(IntoComfyColor::into(colors.info())));
        table.add_row(row);
      }
    }
    ListWhat::Subobjects => {
      let mut header = Row::new();
      for label in ["SUBOBJECT", "REQUIRED PROPERTIES", "OPTIONAL PROPERTIES"] {
        header.add_cell(Cell::new(label).fg(IntoComfyColor::into(colors.label())));
      }
      table.set_header(header);

      let mut subobjects: Vec<_> = universe.subobjects().collect();
      subobjects.sort_by(|a, b| a.name.cmp(&b.name));
      for subobject in subobjects {
        let mut row = Row::new();
        row.add_cell(Cell::new(&subobject.name).fg(IntoComfyColor::into(colors.value())).add_attribute(Attribute::Bold));
        row.add_cell(
          Cell::new(subobject.required_properties.iter().cloned().collect::<Vec<_>>().join(", "))
            .fg(IntoComfyColor::into(colors.accent())),
        );
        row.add_cell(
          Cell::new(subobject.optional_properties.iter().cloned().collect::<Vec<_>>().join(", "))
            .fg(IntoComfyColor::into(colors.info())),
        );
        table.add_row(row);
      }
    }
  }

  println!("{table}");
  Ok(())
}
