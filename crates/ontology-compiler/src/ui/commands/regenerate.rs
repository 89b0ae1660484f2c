use std::collections::HashSet;
use std::time::Duration;

use crossterm::style::Stylize;

use super::{load_state_document, progress, save_state_document, success};
use crate::generator::installer::Installer;
use crate::generator::loader::load_and_validate;
use crate::generator::schema::CategoryUniverse;
use crate::generator::state::StateManager;
use crate::generator::stores::testing::{InMemoryPageStore, InMemorySemanticStore};
use crate::ui::Colors;
use crate::ui::cli::RegenerateCommand;

/// Recomputes artifacts for one or more categories, or every category with
/// `--all` (spec.md §2). Unselected categories keep whatever was written by
/// a previous import/install — their content hashes are simply absent from
/// this run's write set, so [`StateManager::stale_templates`] never flags
/// them.
pub async fn regenerate(command: RegenerateCommand, colors: &Colors, quiet: bool) -> anyhow::Result<()> {
  progress(colors, quiet, &format!("Loading schema from: {}", command.input.display()));
  let (universe, _issues) = load_and_validate(&command.input).await?;

  let scoped = if command.all {
    universe
  } else {
    let wanted: HashSet<&str> = command.category.iter().map(String::as_str).collect();
    let categories = universe.categories().filter(|c| wanted.contains(c.name.as_str())).cloned();
    CategoryUniverse::new(categories, universe.properties().cloned(), universe.subobjects().cloned())
  };

  progress(colors, quiet, "Regenerating artifacts...");

  let document = load_state_document(&command.state).await?;
  let state = StateManager::new(document);
  let mut pages = InMemoryPageStore::default();
  let mut semantic = InMemorySemanticStore::default();
  let mut installer = Installer::new(&mut pages, &mut semantic, state, Duration::from_secs(30));

  let report = installer.install(&scoped).await?;
  save_state_document(&command.state, installer.state().document()).await?;

  if !quiet {
    println!("            {:<25} {}", "Pages written:".with(colors.label()), report.pages_written.to_string().with(colors.value()));
    println!(
      "            {:<25} {}",
      "Pages unchanged:".with(colors.label()),
      report.pages_skipped_unchanged.to_string().with(colors.value())
    );
  }

  success(colors, quiet, "Regeneration complete");
  Ok(())
}
