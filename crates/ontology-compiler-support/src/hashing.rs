use sha2::{Digest, Sha256};

/// Prefix the state document uses for every stored digest (see spec §4.9 /
/// §6.5: `pageHashes: { <title> -> "sha256:..." }`).
pub const SHA256_PREFIX: &str = "sha256:";

/// Canonicalizes wikitext content before hashing.
///
/// The canonical form: `\r\n` and bare `\r` normalize to `\n`, trailing
/// whitespace is stripped from every line, and the content ends in exactly
/// one trailing newline. This choice (spec §9 leaves it to the
/// implementation) makes two pages that differ only in line-ending style or
/// an editor's auto-appended trailing newline hash identically.
#[must_use]
pub fn canonicalize(content: &str) -> String {
  let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
  let mut lines: Vec<&str> = normalized.lines().map(str::trim_end).collect();
  while lines.last().is_some_and(|line| line.is_empty()) {
    lines.pop();
  }
  let mut out = lines.join("\n");
  out.push('\n');
  out
}

/// Computes `sha256:<hex>` over the canonical form of `content`.
///
/// This is the `hashContent` operation from spec §4.9: `SHA-256(canonical(s))`.
#[must_use]
pub fn hash_content(content: &str) -> String {
  let canonical = canonicalize(content);
  let mut hasher = Sha256::new();
  hasher.update(canonical.as_bytes());
  format!("{SHA256_PREFIX}{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identical_content_hashes_identically() {
    assert_eq!(hash_content("Hello"), hash_content("Hello"));
  }

  #[test]
  fn crlf_and_lf_hash_identically() {
    assert_eq!(hash_content("a\r\nb\r\n"), hash_content("a\nb\n"));
  }

  #[test]
  fn trailing_whitespace_is_insignificant() {
    assert_eq!(hash_content("a   \nb\t\n"), hash_content("a\nb\n"));
  }

  #[test]
  fn trailing_newline_count_is_insignificant() {
    assert_eq!(hash_content("a\nb"), hash_content("a\nb\n\n\n"));
  }

  #[test]
  fn different_content_hashes_differently() {
    assert_ne!(hash_content("a"), hash_content("b"));
  }

  #[test]
  fn hash_carries_the_sha256_prefix() {
    assert!(hash_content("anything").starts_with(SHA256_PREFIX));
  }
}
