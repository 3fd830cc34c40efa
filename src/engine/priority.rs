// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use crate::errors::{ConcatWarning, Diagnostics};

/// Move the `priority` files to the front of `order`.
///
/// A stable partition: promoted files keep their relative position from
/// `order`, as do the rest. The position of a name inside `priority` itself
/// does not matter. Entries naming no file in `order` are reported and
/// otherwise ignored.
///
/// This runs after sorting and may put a file ahead of its dependencies.
pub fn apply_priority(
    order: Vec<String>,
    priority: Option<&[String]>,
    diagnostics: &mut Diagnostics,
) -> Vec<String> {
    let Some(priority) = priority.filter(|p| !p.is_empty()) else {
        return order;
    };

    let wanted: HashSet<&str> = priority.iter().map(String::as_str).collect();
    let present: HashSet<&str> = order.iter().map(String::as_str).collect();

    let mut reported = HashSet::new();
    for name in priority {
        if !present.contains(name.as_str()) && reported.insert(name.as_str()) {
            diagnostics.warn(ConcatWarning::UnknownPriorityEntry {
                filename: name.clone(),
            });
        }
    }

    let (mut promoted, rest): (Vec<String>, Vec<String>) = order
        .into_iter()
        .partition(|name| wanted.contains(name.as_str()));
    promoted.extend(rest);
    promoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn apply(order: &[&str], priority: Option<&[&str]>) -> (Vec<String>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let priority = priority.map(names);
        let out = apply_priority(names(order), priority.as_deref(), &mut diagnostics);
        (out, diagnostics)
    }

    #[test]
    fn no_priority_passes_through() {
        let (out, diagnostics) = apply(&["b", "a", "c"], None);
        assert_eq!(out, names(&["b", "a", "c"]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn empty_priority_passes_through() {
        let (out, _) = apply(&["b", "a", "c"], Some(&[]));
        assert_eq!(out, names(&["b", "a", "c"]));
    }

    #[test]
    fn priority_naming_every_file_keeps_order() {
        let (out, _) = apply(&["b", "a", "c"], Some(&["c", "a", "b"]));
        assert_eq!(out, names(&["b", "a", "c"]));
    }

    #[test]
    fn promoted_files_keep_sorted_relative_order() {
        let (out, _) = apply(&["file1", "file2", "file3", "file4"], Some(&["file4", "file2"]));
        assert_eq!(out, names(&["file2", "file4", "file1", "file3"]));
    }

    #[test]
    fn unknown_entries_are_reported_once() {
        let (out, diagnostics) = apply(&["a", "b"], Some(&["ghost", "b", "ghost"]));

        assert_eq!(out, names(&["b", "a"]));
        assert_eq!(
            diagnostics.warnings(),
            &[ConcatWarning::UnknownPriorityEntry {
                filename: "ghost".to_string()
            }]
        );
    }
}
