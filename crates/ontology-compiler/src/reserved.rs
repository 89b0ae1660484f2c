//! Wiki-forbidden characters and reserved names.
//!
//! MediaWiki-style wikitext reserves a handful of characters for markup
//! (`{{templates}}`, `[[links]]`, `{{{parameters}}}`, `#parser functions`,
//! `|` as a field separator). A schema name that contains one of them would
//! corrupt any wikitext it gets embedded into, so construction of a
//! [`crate::generator::schema::Property`] rejects them up front (spec §3:
//! "name free of wiki-forbidden characters").

use std::{collections::HashSet, sync::LazyLock};

const FORBIDDEN_CHARS: [char; 5] = ['<', '>', '{', '}', '|'];

static RESERVED_SUBOBJECT_NAMES: LazyLock<HashSet<&str>> = LazyLock::new(|| ["", "Schema", "State"].into_iter().collect());

/// Returns the first wiki-forbidden character present in `name`, if any.
///
/// The forbidden set is `< > { } | #`, per spec §3. `#` is checked
/// separately from the others because it is only forbidden when it could be
/// mistaken for the start of a parser-function call (i.e. anywhere in the
/// name — we reject it unconditionally, matching the stricter reading of
/// the invariant).
#[must_use]
pub(crate) fn first_forbidden_char(name: &str) -> Option<char> {
  name.chars().find(|c| FORBIDDEN_CHARS.contains(c) || *c == '#')
}

/// Returns `true` when `name` is non-empty and free of wiki-forbidden
/// characters.
#[must_use]
pub(crate) fn is_valid_entity_name(name: &str) -> bool {
  !name.is_empty() && first_forbidden_char(name).is_none()
}

/// Returns `true` when `name` collides with a name the compiler reserves
/// for its own bookkeeping pages (the state document, schema marker
/// regions).
#[must_use]
pub(crate) fn is_reserved_subobject_name(name: &str) -> bool {
  RESERVED_SUBOBJECT_NAMES.contains(name)
}
