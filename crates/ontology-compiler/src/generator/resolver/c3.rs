//! C3 linearization and effective-category computation (spec §4.2).

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use petgraph::algo::kosaraju_scc;
use petgraph::graphmap::DiGraphMap;

use crate::generator::errors::ResolverError;
use crate::generator::schema::{Category, CategoryUniverse};

/// Computes linearizations and effective categories against one
/// [`CategoryUniverse`], memoizing both by category name.
///
/// A `Linearizer` is cheap to construct and is meant to live for the
/// duration of one compilation; memoization is per-instance, matching
/// spec §4.2 ("Ancestors are memoized by category name (per resolver
/// instance)").
pub struct Linearizer<'u> {
  universe: &'u CategoryUniverse,
  linearization_cache: RefCell<HashMap<String, Vec<String>>>,
  effective_cache: RefCell<HashMap<String, Category>>,
}

impl<'u> Linearizer<'u> {
  #[must_use]
  pub fn new(universe: &'u CategoryUniverse) -> Self {
    Self {
      universe,
      linearization_cache: RefCell::new(HashMap::new()),
      effective_cache: RefCell::new(HashMap::new()),
    }
  }

  /// Returns `L(C)`, the C3 linearization of `name` (spec §4.2), including
  /// `name` itself as the first element.
  ///
  /// # Errors
  ///
  /// Returns [`ResolverError::UnknownCategory`] if `name` is not defined, or
  /// [`ResolverError::Cycle`] if the ancestry contains a cycle.
  pub fn linearize(&self, name: &str) -> Result<Vec<String>, ResolverError> {
    if let Some(cached) = self.linearization_cache.borrow().get(name) {
      return Ok(cached.clone());
    }
    let mut visiting = Vec::new();
    let result = self.linearize_inner(name, &mut visiting)?;
    self.linearization_cache.borrow_mut().insert(name.to_string(), result.clone());
    Ok(result)
  }

  fn linearize_inner(&self, name: &str, visiting: &mut Vec<String>) -> Result<Vec<String>, ResolverError> {
    if let Some(cached) = self.linearization_cache.borrow().get(name) {
      return Ok(cached.clone());
    }
    if visiting.iter().any(|v| v == name) {
      let mut chain = visiting.clone();
      chain.push(name.to_string());
      return Err(ResolverError::Cycle { chain });
    }

    let category = self
      .universe
      .category(name)
      .ok_or_else(|| ResolverError::UnknownCategory { name: name.to_string() })?;

    visiting.push(name.to_string());
    let mut parent_lines = Vec::with_capacity(category.parents.len());
    for parent in &category.parents {
      parent_lines.push(self.linearize_inner(parent, visiting)?);
    }
    visiting.pop();

    let merged = c3_merge(parent_lines, category.parents.clone());
    let mut linearization = Vec::with_capacity(merged.len() + 1);
    linearization.push(name.to_string());
    linearization.extend(merged);
    Ok(linearization)
  }

  /// Returns the effective [`Category`] for `name`: `mergeWithParent` folded
  /// left-to-right over `reverse(L(name))`, excluding `name` itself, so the
  /// closest ancestor wins over farther ones and `name` wins over all (spec
  /// §4.2).
  ///
  /// # Errors
  ///
  /// Propagates errors from [`Linearizer::linearize`].
  pub fn effective_category(&self, name: &str) -> Result<Category, ResolverError> {
    if let Some(cached) = self.effective_cache.borrow().get(name) {
      return Ok(cached.clone());
    }

    let linearization = self.linearize(name)?;
    let own = self
      .universe
      .category(name)
      .ok_or_else(|| ResolverError::UnknownCategory { name: name.to_string() })?;

    let mut effective = own.clone();
    for ancestor_name in linearization.iter().skip(1).rev() {
      let ancestor = self
        .universe
        .category(ancestor_name)
        .ok_or_else(|| ResolverError::UnknownCategory {
          name: ancestor_name.clone(),
        })?;
      effective = effective.merge_with_parent(ancestor);
    }

    self.effective_cache.borrow_mut().insert(name.to_string(), effective.clone());
    Ok(effective)
  }
}

/// Runs the C3 merge step over `lists` (the parents' linearizations) plus
/// `tail` (the parent list itself), per spec §4.2: at each step, pick a
/// "good head" — the head of some list that does not appear in the tail of
/// any list — remove it everywhere, append it to the result, and repeat
/// until every list is empty.
///
/// Falls back to the first non-empty list's head when no good head exists,
/// recording the fallback by simply proceeding (an inconsistent hierarchy is
/// not an error per spec §4.2; callers that want to report it should compare
/// the result against a from-scratch good-head pass). The fallback is
/// deterministic: it always takes the first non-empty list's head.
fn c3_merge(parent_lines: Vec<Vec<String>>, tail: Vec<String>) -> Vec<String> {
  let mut lists: Vec<Vec<String>> = parent_lines.into_iter().filter(|l| !l.is_empty()).collect();
  if !tail.is_empty() {
    lists.push(tail);
  }

  let mut result = Vec::new();
  loop {
    lists.retain(|l| !l.is_empty());
    if lists.is_empty() {
      break;
    }

    let good_head = lists.iter().map(|l| l[0].clone()).find(|candidate| {
      !lists.iter().any(|l| l.iter().skip(1).any(|item| item == candidate))
    });

    let chosen = good_head.unwrap_or_else(|| lists[0][0].clone());
    result.push(chosen.clone());
    for list in &mut lists {
      if list.first() == Some(&chosen) {
        list.remove(0);
      } else {
        list.retain(|item| item != &chosen);
      }
    }
  }
  result
}

/// Batch cycle diagnostics over the entire universe's `parents` graph,
/// independent of any single linearization request — used by the validator
/// (spec §7) to report every cyclic category in one pass rather than only
/// the first one a caller happens to linearize.
#[must_use]
pub fn detect_inheritance_cycles(universe: &CategoryUniverse) -> Vec<Vec<String>> {
  let mut graph = DiGraphMap::<&str, ()>::new();
  for category in universe.categories() {
    graph.add_node(category.name.as_str());
    for parent in &category.parents {
      graph.add_edge(category.name.as_str(), parent.as_str(), ());
    }
  }

  kosaraju_scc(&graph)
    .into_iter()
    .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
    .map(|scc| scc.into_iter().map(String::from).collect())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cat(name: &str, parents: &[&str]) -> Category {
    Category::builder()
      .name(name.to_string())
      .parents(parents.iter().map(|p| (*p).to_string()).collect())
      .build()
      .unwrap()
  }

  #[test]
  fn single_category_linearizes_to_itself() {
    let universe = CategoryUniverse::new([cat("Employee", &[])], [], []);
    let linearizer = Linearizer::new(&universe);
    assert_eq!(linearizer.linearize("Employee").unwrap(), vec!["Employee".to_string()]);
  }

  #[test]
  fn diamond_inheritance_is_linearized_depth_first_left_to_right() {
    let universe = CategoryUniverse::new(
      [
        cat("Base", &[]),
        cat("Left", &["Base"]),
        cat("Right", &["Base"]),
        cat("Child", &["Left", "Right"]),
      ],
      [],
      [],
    );
    let linearizer = Linearizer::new(&universe);
    assert_eq!(
      linearizer.linearize("Child").unwrap(),
      vec![
        "Child".to_string(),
        "Left".to_string(),
        "Right".to_string(),
        "Base".to_string(),
      ]
    );
  }

  #[test]
  fn direct_cycle_is_detected_with_full_chain() {
    let universe = CategoryUniverse::new([cat("A", &["B"]), cat("B", &["A"])], [], []);
    let linearizer = Linearizer::new(&universe);
    let err = linearizer.linearize("A").unwrap_err();
    match err {
      ResolverError::Cycle { chain } => assert_eq!(chain, vec!["A".to_string(), "B".to_string(), "A".to_string()]),
      other => panic!("expected Cycle, got {other:?}"),
    }
  }

  #[test]
  fn unknown_parent_reports_unknown_category() {
    let universe = CategoryUniverse::new([cat("Child", &["Ghost"])], [], []);
    let linearizer = Linearizer::new(&universe);
    assert_eq!(
      linearizer.linearize("Child").unwrap_err(),
      ResolverError::UnknownCategory { name: "Ghost".to_string() }
    );
  }

  #[test]
  fn effective_category_lets_child_win_over_all_ancestors() {
    let universe = CategoryUniverse::new(
      [
        Category::builder()
          .name("Base".to_string())
          .required_properties(["Has id".to_string()].into_iter().collect())
          .build()
          .unwrap(),
        Category::builder()
          .name("Employee".to_string())
          .parents(vec!["Base".to_string()])
          .required_properties(["Has salary".to_string()].into_iter().collect())
          .build()
          .unwrap(),
      ],
      [],
      [],
    );
    let linearizer = Linearizer::new(&universe);
    let effective = linearizer.effective_category("Employee").unwrap();
    assert!(effective.required_properties().contains("Has id"));
    assert!(effective.required_properties().contains("Has salary"));
  }

  #[test]
  fn batch_cycle_detection_finds_cycles_anywhere_in_the_universe() {
    let universe = CategoryUniverse::new([cat("A", &["B"]), cat("B", &["A"]), cat("Standalone", &[])], [], []);
    let cycles = detect_inheritance_cycles(&universe);
    assert_eq!(cycles.len(), 1);
    let mut members = cycles[0].clone();
    members.sort();
    assert_eq!(members, vec!["A".to_string(), "B".to_string()]);
  }
}
