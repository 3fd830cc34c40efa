// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the lifecycle of a concatenation target.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;
use tracing::Span;

/// Target processing started.
///
/// # Log Level
/// `info!`
pub struct TargetStarted<'a> {
    pub target: &'a str,
    pub dest: &'a Path,
    pub source_count: usize,
}

impl Display for TargetStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Concatenating {} sources for target '{}' into \"{}\"",
            self.source_count,
            self.target,
            self.dest.display()
        )
    }
}

impl StructuredLog for TargetStarted<'_> {
    fn log(&self) {
        tracing::info!(
            target_name = self.target,
            dest = %self.dest.display(),
            source_count = self.source_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "target",
            span_name = name,
            target_name = self.target,
            dest = %self.dest.display(),
        )
    }
}

/// Destination written.
///
/// # Log Level
/// `info!`
///
/// # Example
/// ```
/// use concat_depends::observability::messages::target::TargetWritten;
/// use std::path::Path;
/// use std::time::Duration;
///
/// let msg = TargetWritten {
///     target: "bundle",
///     dest: Path::new("dist/bundle.js"),
///     bytes: 2048,
///     file_count: 4,
///     duration: Duration::from_millis(3),
/// };
///
/// assert_eq!(msg.to_string(), "File dist/bundle.js created.");
/// ```
pub struct TargetWritten<'a> {
    pub target: &'a str,
    pub dest: &'a Path,
    pub bytes: usize,
    pub file_count: usize,
    pub duration: Duration,
}

impl Display for TargetWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "File {} created.", self.dest.display())
    }
}

impl StructuredLog for TargetWritten<'_> {
    fn log(&self) {
        tracing::info!(
            target_name = self.target,
            dest = %self.dest.display(),
            bytes = self.bytes,
            file_count = self.file_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "target_written",
            span_name = name,
            target_name = self.target,
            dest = %self.dest.display(),
            duration = ?self.duration,
        )
    }
}

/// Target aborted; nothing was written.
///
/// # Log Level
/// `error!`
pub struct TargetFailed<'a> {
    pub target: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for TargetFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Target '{}' failed: {}", self.target, self.error)
    }
}

impl StructuredLog for TargetFailed<'_> {
    fn log(&self) {
        tracing::error!(
            target_name = self.target,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "target_failed",
            span_name = name,
            target_name = self.target,
            error = %self.error,
        )
    }
}

/// Target not started because an earlier target failed under fail-fast.
///
/// # Log Level
/// `warn!`
pub struct TargetSkipped<'a> {
    pub target: &'a str,
}

impl Display for TargetSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Target '{}' skipped after an earlier failure",
            self.target
        )
    }
}

impl StructuredLog for TargetSkipped<'_> {
    fn log(&self) {
        tracing::warn!(target_name = self.target, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "target_skipped",
            span_name = name,
            target_name = self.target,
        )
    }
}
