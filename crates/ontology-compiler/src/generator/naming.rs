//! Centralized property-name normalization (spec §4.4): "Normalization is
//! centralized in a `NamingHelper` so every generator/parser agrees."

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Turns a property name into its template-parameter form.
///
/// `"Has full name"` -> `full_name`: strip a leading `"Has "`, replace
/// whitespace runs with `_`, lowercase, and map `:` to `_` (spec §4.4). This
/// is the single place every wikitext generator and the form-submission
/// parser normalizes a property name, so they stay in agreement.
pub struct NamingHelper;

impl NamingHelper {
  #[must_use]
  pub fn template_parameter(property_name: &str) -> String {
    let stripped = property_name.strip_prefix("Has ").unwrap_or(property_name);
    let collapsed = WHITESPACE_RE.replace_all(stripped, "_");
    collapsed.to_lowercase().replace(':', "_")
  }

  /// The `@@item@@`-style arraymap iterator token (spec §4.4: "the iterator
  /// variable must not be a single letter that can collide with substrings
  /// of other identifiers — use a multi-character delimiter-safe token").
  #[must_use]
  pub fn arraymap_item_token() -> &'static str {
    "@@item@@"
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_has_prefix_and_lowercases() {
    assert_eq!(NamingHelper::template_parameter("Has full name"), "full_name");
  }

  #[test]
  fn replaces_whitespace_runs_with_underscore() {
    assert_eq!(NamingHelper::template_parameter("Has   start   date"), "start_date");
  }

  #[test]
  fn maps_colon_to_underscore() {
    assert_eq!(NamingHelper::template_parameter("Has foo:bar"), "foo_bar");
  }

  #[test]
  fn leaves_names_without_has_prefix_alone_besides_casing() {
    assert_eq!(NamingHelper::template_parameter("Email"), "email");
  }

  #[test]
  fn arraymap_token_is_multi_character() {
    assert!(NamingHelper::arraymap_item_token().len() > 1);
  }
}
