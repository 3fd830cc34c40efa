// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for source file loading.
//!
//! This module contains message types for logging events related to:
//! * Missing source files
//! * Directories listed as sources
//! * Basename collisions between two sources
//! * Successful loads and their declared dependencies

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Listed source file does not exist.
///
/// # Log Level
/// `warn!` - The file is dropped (or replaced by an empty placeholder)
///
/// # Example
/// ```
/// use concat_depends::observability::messages::registry::SourceFileMissing;
/// use std::path::Path;
///
/// let msg = SourceFileMissing {
///     path: Path::new("src/missing.js"),
///     placeholder: false,
/// };
///
/// assert_eq!(msg.to_string(), "Source file \"src/missing.js\" not found.");
/// ```
pub struct SourceFileMissing<'a> {
    pub path: &'a Path,
    pub placeholder: bool,
}

impl Display for SourceFileMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Source file \"{}\" not found.", self.path.display())?;
        if self.placeholder {
            write!(f, " Using an empty placeholder.")?;
        }
        Ok(())
    }
}

impl StructuredLog for SourceFileMissing<'_> {
    fn log(&self) {
        tracing::warn!(
            path = %self.path.display(),
            placeholder = self.placeholder,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "source_file_missing",
            span_name = name,
            path = %self.path.display(),
            placeholder = self.placeholder,
        )
    }
}

/// Listed source is a directory and was skipped.
///
/// # Log Level
/// `warn!`
pub struct DirectorySkipped<'a> {
    pub path: &'a Path,
}

impl Display for DirectorySkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Source \"{}\" is a directory, skipping.", self.path.display())
    }
}

impl StructuredLog for DirectorySkipped<'_> {
    fn log(&self) {
        tracing::warn!(path = %self.path.display(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "directory_skipped",
            span_name = name,
            path = %self.path.display(),
        )
    }
}

/// Two sources share a basename; the later one replaces the earlier one.
///
/// # Log Level
/// `warn!`
pub struct BasenameCollision<'a> {
    pub filename: &'a str,
    pub replaced: &'a Path,
    pub replacement: &'a Path,
}

impl Display for BasenameCollision<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Basename '{}' is used by both \"{}\" and \"{}\"; keeping the later one",
            self.filename,
            self.replaced.display(),
            self.replacement.display()
        )
    }
}

impl StructuredLog for BasenameCollision<'_> {
    fn log(&self) {
        tracing::warn!(
            filename = self.filename,
            replaced = %self.replaced.display(),
            replacement = %self.replacement.display(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "basename_collision",
            span_name = name,
            filename = self.filename,
            replaced = %self.replaced.display(),
            replacement = %self.replacement.display(),
        )
    }
}

/// Source file read and its dependency declarations parsed.
///
/// # Log Level
/// `debug!` - Per-file detail
pub struct SourceFileLoaded<'a> {
    pub filename: &'a str,
    pub path: &'a Path,
    pub size: usize,
    pub dependencies: &'a [String],
}

impl Display for SourceFileLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded '{}' ({} bytes) with {} declared dependencies",
            self.filename,
            self.size,
            self.dependencies.len()
        )
    }
}

impl StructuredLog for SourceFileLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            filename = self.filename,
            path = %self.path.display(),
            size = self.size,
            dependencies = ?self.dependencies,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "source_file_loaded",
            span_name = name,
            filename = self.filename,
            path = %self.path.display(),
        )
    }
}
