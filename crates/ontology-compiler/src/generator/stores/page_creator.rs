//! `PageCreator`: the marker-delimited, invariant-preserving update
//! operation shared by every `*Store` (spec §4.8).

use super::page_store::{PageStore, Title, WriteOutcome};

/// Replaces the content between `start_marker` and `end_marker` in
/// `existing_content` with `new_region`, preserving everything outside the
/// markers byte-for-byte. If the markers are absent, or out of order,
/// appends a fresh marker block instead (spec §4.8).
#[must_use]
pub fn update_within_markers(existing_content: &str, new_region: &str, start_marker: &str, end_marker: &str) -> String {
  if let Some(start) = existing_content.find(start_marker) {
    let after_start = start + start_marker.len();
    if let Some(end_rel) = existing_content[after_start..].find(end_marker) {
      let end = after_start + end_rel;
      let mut result = String::with_capacity(existing_content.len() + new_region.len());
      result.push_str(&existing_content[..after_start]);
      result.push('\n');
      result.push_str(new_region);
      result.push('\n');
      result.push_str(&existing_content[end..]);
      return result;
    }
  }

  let mut result = existing_content.to_string();
  if !result.is_empty() && !result.ends_with('\n') {
    result.push('\n');
  }
  result.push_str(start_marker);
  result.push('\n');
  result.push_str(new_region);
  result.push('\n');
  result.push_str(end_marker);
  result
}

/// Reads the current page (if any), computes the marker-delimited update,
/// and writes it back through the store (spec §4.8).
pub struct PageCreator<'s, S: PageStore> {
  store: &'s mut S,
}

impl<'s, S: PageStore> PageCreator<'s, S> {
  #[must_use]
  pub fn new(store: &'s mut S) -> Self {
    Self { store }
  }

  /// Writes `new_region` into the marker-delimited section of `title`,
  /// preserving any user content outside the markers.
  pub fn write_managed_region(
    &mut self,
    title: &Title,
    new_region: &str,
    start_marker: &str,
    end_marker: &str,
    summary: &str,
  ) -> WriteOutcome {
    let existing = self.store.read(title).unwrap_or_default();
    let updated = update_within_markers(&existing, new_region, start_marker, end_marker);
    self.store.create_or_update(title, &updated, summary)
  }

  /// Overwrites `title` entirely with `content` — the contract generated
  /// artifacts (templates, forms) use, since their whole page is
  /// compiler-owned (spec §3).
  pub fn overwrite(&mut self, title: &Title, content: &str, summary: &str) -> WriteOutcome {
    self.store.create_or_update(title, content, summary)
  }

  /// Creates `title` with `content` only if it does not already exist —
  /// the contract display stubs use, since they are created once and never
  /// overwritten (spec §4.6).
  pub fn create_if_absent(&mut self, title: &Title, content: &str, summary: &str) -> WriteOutcome {
    if self.store.exists(title) {
      return WriteOutcome::ok();
    }
    self.store.create_or_update(title, content, summary)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const START: &str = "<!-- Schema Start -->";
  const END: &str = "<!-- Schema End -->";

  #[test]
  fn replaces_content_between_existing_markers() {
    let existing = format!("user text above\n{START}\nold region\n{END}\nuser text below");
    let updated = update_within_markers(&existing, "new region", START, END);
    assert!(updated.contains("user text above"));
    assert!(updated.contains("user text below"));
    assert!(updated.contains("new region"));
    assert!(!updated.contains("old region"));
  }

  #[test]
  fn appends_marker_block_when_absent() {
    let existing = "user text only";
    let updated = update_within_markers(existing, "new region", START, END);
    assert!(updated.starts_with("user text only"));
    assert!(updated.contains(START));
    assert!(updated.contains("new region"));
    assert!(updated.contains(END));
  }

  #[test]
  fn appends_marker_block_on_empty_page() {
    let updated = update_within_markers("", "new region", START, END);
    assert_eq!(updated, format!("{START}\nnew region\n{END}"));
  }
}
