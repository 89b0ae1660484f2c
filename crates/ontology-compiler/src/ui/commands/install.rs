use std::time::Duration;

use crossterm::style::Stylize;

use super::{load_state_document, progress, save_state_document, success};
use crate::generator::installer::Installer;
use crate::generator::loader::load_and_validate;
use crate::generator::state::StateManager;
use crate::generator::stores::testing::{InMemoryPageStore, InMemorySemanticStore};
use crate::ui::Colors;
use crate::ui::cli::InstallCommand;

/// Runs the five-layer base-ontology installation (spec §4.10), flushing
/// the semantic backend to quiescence between each layer.
pub async fn install(command: InstallCommand, colors: &Colors, verbose: bool, quiet: bool) -> anyhow::Result<()> {
  progress(colors, quiet, &format!("Loading schema from: {}", command.input.display()));
  let (universe, _issues) = load_and_validate(&command.input).await?;

  let document = load_state_document(&command.state).await?;
  let state = StateManager::new(document);
  let mut pages = InMemoryPageStore::default();
  let mut semantic = InMemorySemanticStore::default();
  let timeout = Duration::from_secs(command.quiescence_timeout_secs);
  let mut installer = Installer::new(&mut pages, &mut semantic, state, timeout);

  if verbose {
    progress(colors, quiet, "Installing in five ordered layers, flushing to quiescence between each...");
  }

  let report = installer.install(&universe).await.map_err(|err| {
    eprintln!("{} {}", "Error:".with(colors.accent()), err.to_string().with(colors.primary()));
    err
  })?;
  save_state_document(&command.state, installer.state().document()).await?;

  if !quiet {
    println!("            {:<25} {}", "Pages written:".with(colors.label()), report.pages_written.to_string().with(colors.value()));
    println!(
      "            {:<25} {}",
      "Pages unchanged:".with(colors.label()),
      report.pages_skipped_unchanged.to_string().with(colors.value())
    );
  }

  success(colors, quiet, "Installation complete");
  Ok(())
}
