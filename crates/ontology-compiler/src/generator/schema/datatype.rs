use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The closed set of property datatypes (spec §3 / §9: "a closed
/// enumeration; model it as a tagged variant with an exhaustive match
/// rather than open polymorphism").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum Datatype {
  Text,
  Page,
  Date,
  Number,
  Email,
  #[strum(serialize = "URL")]
  #[serde(rename = "URL")]
  Url,
  Boolean,
  Code,
  Quantity,
  Temperature,
  Phone,
  Geo,
}

impl Default for Datatype {
  /// The resolution API response (spec §6.4) defaults `datatype` to
  /// `"Page"` when the backing property cannot be resolved in the store.
  fn default() -> Self {
    Self::Page
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use super::*;

  #[test]
  fn round_trips_through_display_and_from_str() {
    for dt in [
      Datatype::Text,
      Datatype::Page,
      Datatype::Date,
      Datatype::Number,
      Datatype::Email,
      Datatype::Url,
      Datatype::Boolean,
      Datatype::Code,
      Datatype::Quantity,
      Datatype::Temperature,
      Datatype::Phone,
      Datatype::Geo,
    ] {
      let rendered = dt.to_string();
      assert_eq!(Datatype::from_str(&rendered).unwrap(), dt);
    }
  }

  #[test]
  fn url_renders_uppercase() {
    assert_eq!(Datatype::Url.to_string(), "URL");
  }

  #[test]
  fn default_is_page() {
    assert_eq!(Datatype::default(), Datatype::Page);
  }

  #[test]
  fn serializes_url_as_uppercase_json() {
    let json = serde_json::to_string(&Datatype::Url).unwrap();
    assert_eq!(json, "\"URL\"");
  }
}
