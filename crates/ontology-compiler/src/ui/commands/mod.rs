mod install;
mod import;
mod list;
mod regenerate;
mod resolve;

pub use install::install;
pub use import::import;
pub use list::list;
pub use regenerate::regenerate;
pub use resolve::resolve;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use super::Colors;

pub(super) fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

pub(super) fn progress(colors: &Colors, quiet: bool, message: &str) {
  if quiet {
    return;
  }
  let timestamp = format_timestamp();
  println!("{} {}", timestamp.with(colors.timestamp()), message.with(colors.primary()));
}

pub(super) fn success(colors: &Colors, quiet: bool, message: &str) {
  if quiet {
    return;
  }
  println!("{} {}", format_timestamp().with(colors.timestamp()), message.with(colors.success()));
}

use std::path::Path;

use crate::generator::state::StateDocument;

/// Reads the state document at `path`, or a fresh empty one if the file
/// does not exist yet (spec §4.9: a first import starts from nothing).
pub(super) async fn load_state_document(path: &Path) -> anyhow::Result<StateDocument> {
  match tokio::fs::read_to_string(path).await {
    Ok(raw) => Ok(serde_json::from_str(&raw)?),
    Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(StateDocument::empty()),
    Err(err) => Err(err.into()),
  }
}

pub(super) async fn save_state_document(path: &Path, document: &StateDocument) -> anyhow::Result<()> {
  let rendered = serde_json::to_string_pretty(document)?;
  if let Some(parent) = path.parent() {
    tokio::fs::create_dir_all(parent).await?;
  }
  tokio::fs::write(path, rendered).await?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn loading_a_missing_state_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let document = load_state_document(&path).await.unwrap();
    assert!(document.page_hashes.is_empty());
  }

  #[tokio::test]
  async fn round_trips_a_state_document_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");

    let mut document = StateDocument::empty();
    document.page_hashes.insert("Property:Has name".to_string(), "sha256:abc".to_string());
    save_state_document(&path, &document).await.unwrap();

    let reloaded = load_state_document(&path).await.unwrap();
    assert_eq!(reloaded.page_hashes.get("Property:Has name"), Some(&"sha256:abc".to_string()));
  }
}
