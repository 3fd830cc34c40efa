// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for dependency resolution.
//!
//! This module contains message types for logging events related to:
//! * Dangling dependencies (fatal or ignored under force)
//! * Cycles broken in degraded mode
//! * The resolved output order
//! * Priority entries that match no file

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A file depends on a name outside the concatenation set.
///
/// # Log Level
/// `error!` when fatal, `warn!` when ignored under force
///
/// # Example
/// ```
/// use concat_depends::observability::messages::sort::DanglingDependency;
///
/// let msg = DanglingDependency {
///     file: "app.js",
///     dependency: "vendor.js",
///     ignored: true,
/// };
///
/// assert!(msg.to_string().contains("'app.js' depends on 'vendor.js'"));
/// ```
pub struct DanglingDependency<'a> {
    pub file: &'a str,
    pub dependency: &'a str,
    pub ignored: bool,
}

impl Display for DanglingDependency<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Missing dependency. '{}' depends on '{}' but the dependency was not included in the concatenation list.",
            self.file, self.dependency
        )?;
        if self.ignored {
            write!(f, " Ignoring it.")?;
        }
        Ok(())
    }
}

impl StructuredLog for DanglingDependency<'_> {
    fn log(&self) {
        if self.ignored {
            tracing::warn!(
                file = self.file,
                dependency = self.dependency,
                "{}", self
            );
        } else {
            tracing::error!(
                file = self.file,
                dependency = self.dependency,
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "dangling_dependency",
            span_name = name,
            file = self.file,
            dependency = self.dependency,
            ignored = self.ignored,
        )
    }
}

/// No file was eligible while some remained unsorted; one is forced out.
///
/// # Log Level
/// `warn!` - Output is still produced, but some edges are not honored
///
/// # Example
/// ```
/// use concat_depends::observability::messages::sort::CycleBroken;
///
/// let unresolved = vec!["a.js".to_string(), "b.js".to_string()];
/// let cycle = vec!["a.js".to_string(), "b.js".to_string(), "a.js".to_string()];
/// let msg = CycleBroken {
///     unresolved: &unresolved,
///     cycle: &cycle,
///     forced: "a.js",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Circular dependency among [a.js, b.js] (a.js -> b.js -> a.js); emitting 'a.js' first"
/// );
/// ```
pub struct CycleBroken<'a> {
    pub unresolved: &'a [String],
    pub cycle: &'a [String],
    pub forced: &'a str,
}

impl Display for CycleBroken<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Circular dependency among [{}]", self.unresolved.join(", "))?;
        if !self.cycle.is_empty() {
            write!(f, " ({})", self.cycle.join(" -> "))?;
        }
        write!(f, "; emitting '{}' first", self.forced)
    }
}

impl StructuredLog for CycleBroken<'_> {
    fn log(&self) {
        tracing::warn!(
            unresolved = self.unresolved.join(", "),
            unresolved_count = self.unresolved.len(),
            cycle = self.cycle.join(" -> "),
            forced = self.forced,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "cycle_broken",
            span_name = name,
            cycle = self.cycle.join(" -> "),
            forced = self.forced,
        )
    }
}

/// Output order resolved.
///
/// # Log Level
/// `debug!`
pub struct OrderResolved<'a> {
    pub order: &'a [String],
    pub edge_count: usize,
}

impl Display for OrderResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved order of {} files from {} dependency edges",
            self.order.len(),
            self.edge_count
        )
    }
}

impl StructuredLog for OrderResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            order = ?self.order,
            edge_count = self.edge_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "order_resolved",
            span_name = name,
            file_count = self.order.len(),
            edge_count = self.edge_count,
        )
    }
}

/// A priority entry names no file in the sorted order.
///
/// # Log Level
/// `warn!`
pub struct UnknownPriorityEntry<'a> {
    pub filename: &'a str,
}

impl Display for UnknownPriorityEntry<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Priority entry '{}' does not match any file in this concatenation",
            self.filename
        )
    }
}

impl StructuredLog for UnknownPriorityEntry<'_> {
    fn log(&self) {
        tracing::warn!(filename = self.filename, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "unknown_priority_entry",
            span_name = name,
            filename = self.filename,
        )
    }
}
