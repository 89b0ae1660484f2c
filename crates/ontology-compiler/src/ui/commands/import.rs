use crossterm::style::Stylize;

use super::{load_state_document, progress, save_state_document, success};
use crate::generator::errors::Severity;
use crate::generator::installer::Installer;
use crate::generator::loader::load_and_validate;
use crate::generator::state::StateManager;
use crate::generator::stores::testing::{InMemoryPageStore, InMemorySemanticStore};
use crate::ui::cli::ImportCommand;
use crate::ui::Colors;

/// Loads and validates a schema document, then installs its canonical
/// category/property/subobject declarations and templates, persisting the
/// resulting state document to `--state` (spec.md §2: "persists canonical
/// representations onto wiki pages").
pub async fn import(command: ImportCommand, colors: &Colors, verbose: bool, quiet: bool) -> anyhow::Result<()> {
  progress(colors, quiet, &format!("Loading schema from: {}", command.input.display()));

  let (universe, issues) = match load_and_validate(&command.input).await {
    Ok(result) => result,
    Err(err) => {
      eprintln!("{} {}", "Error:".with(colors.accent()), err.to_string().with(colors.primary()));
      return Err(err.into());
    }
  };

  if !quiet {
    let errors = issues.iter().filter(|issue| issue.severity == Severity::Error).count();
    let warnings = issues.len() - errors;
    if warnings > 0 {
      println!("            {:<25} {}", "Warnings:".with(colors.label()), warnings.to_string().with(colors.value()));
      if verbose {
        for issue in issues.iter().filter(|issue| issue.severity != Severity::Error) {
          eprintln!("{} {}", "Warning:".with(colors.accent()), issue.message.as_str().with(colors.primary()));
        }
      }
    }
  }

  progress(colors, quiet, "Persisting canonical declarations...");

  let document = load_state_document(&command.state).await?;
  let state = StateManager::new(document);
  let mut pages = InMemoryPageStore::default();
  let mut semantic = InMemorySemanticStore::default();
  let mut installer = Installer::new(&mut pages, &mut semantic, state, std::time::Duration::from_secs(30));

  let report = installer.install(&universe).await?;
  save_state_document(&command.state, installer.state().document()).await?;

  if !quiet {
    println!("            {:<25} {}", "Pages written:".with(colors.label()), report.pages_written.to_string().with(colors.value()));
    println!(
      "            {:<25} {}",
      "Pages unchanged:".with(colors.label()),
      report.pages_skipped_unchanged.to_string().with(colors.value())
    );
  }

  success(colors, quiet, "Import complete");
  Ok(())
}
