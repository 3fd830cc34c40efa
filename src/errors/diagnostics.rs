// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Non-fatal conditions collected while a target is processed.
//!
//! Warnings never stop a target. They are logged the moment they are recorded
//! and kept in a [`Diagnostics`] collector that travels with the target through
//! the pipeline and is handed back to the caller together with the result.

use std::fmt;
use std::path::PathBuf;

use crate::observability::messages::registry::{BasenameCollision, DirectorySkipped, SourceFileMissing};
use crate::observability::messages::sort::{CycleBroken, DanglingDependency, UnknownPriorityEntry};
use crate::observability::messages::StructuredLog;

#[derive(Debug, Clone, PartialEq)]
pub enum ConcatWarning {
    /// A listed source does not exist.
    MissingSourceFile { path: PathBuf, placeholder: bool },
    /// A listed source is a directory.
    DirectorySkipped { path: PathBuf },
    /// Two sources share a basename; the later one won.
    BasenameCollision {
        filename: String,
        replaced: PathBuf,
        replacement: PathBuf,
    },
    /// A dangling dependency ignored because force mode is on.
    DanglingDependency { file: String, dependency: String },
    /// A cycle was broken by forcing `forced` out ahead of its dependencies.
    CyclicDependency {
        unresolved: Vec<String>,
        cycle: Vec<String>,
        forced: String,
    },
    /// A priority entry that matched no file.
    UnknownPriorityEntry { filename: String },
}

impl ConcatWarning {
    /// Emit this warning through its structured log message.
    pub fn log(&self) {
        match self {
            ConcatWarning::MissingSourceFile { path, placeholder } => SourceFileMissing {
                path,
                placeholder: *placeholder,
            }
            .log(),
            ConcatWarning::DirectorySkipped { path } => DirectorySkipped { path }.log(),
            ConcatWarning::BasenameCollision {
                filename,
                replaced,
                replacement,
            } => BasenameCollision {
                filename,
                replaced,
                replacement,
            }
            .log(),
            ConcatWarning::DanglingDependency { file, dependency } => DanglingDependency {
                file,
                dependency,
                ignored: true,
            }
            .log(),
            ConcatWarning::CyclicDependency {
                unresolved,
                cycle,
                forced,
            } => CycleBroken {
                unresolved,
                cycle,
                forced,
            }
            .log(),
            ConcatWarning::UnknownPriorityEntry { filename } => {
                UnknownPriorityEntry { filename }.log()
            }
        }
    }
}

impl fmt::Display for ConcatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcatWarning::MissingSourceFile { path, placeholder } => write!(f, "{}", SourceFileMissing {
                path,
                placeholder: *placeholder,
            }),
            ConcatWarning::DirectorySkipped { path } => write!(f, "{}", DirectorySkipped { path }),
            ConcatWarning::BasenameCollision {
                filename,
                replaced,
                replacement,
            } => write!(f, "{}", BasenameCollision {
                filename,
                replaced,
                replacement,
            }),
            ConcatWarning::DanglingDependency { file, dependency } => write!(f, "{}", DanglingDependency {
                file,
                dependency,
                ignored: true,
            }),
            ConcatWarning::CyclicDependency {
                unresolved,
                cycle,
                forced,
            } => write!(f, "{}", CycleBroken {
                unresolved,
                cycle,
                forced,
            }),
            ConcatWarning::UnknownPriorityEntry { filename } => {
                write!(f, "{}", UnknownPriorityEntry { filename })
            }
        }
    }
}

/// Ordered collection of the warnings raised for one target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    warnings: Vec<ConcatWarning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the warning and keep it.
    pub fn warn(&mut self, warning: ConcatWarning) {
        warning.log();
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[ConcatWarning] {
        &self.warnings
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConcatWarning> {
        self.warnings.iter()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Warnings produced by cycle breaking, in the order they happened.
    pub fn cycles(&self) -> impl Iterator<Item = &ConcatWarning> {
        self.warnings
            .iter()
            .filter(|w| matches!(w, ConcatWarning::CyclicDependency { .. }))
    }
}

impl From<Diagnostics> for Vec<ConcatWarning> {
    fn from(diagnostics: Diagnostics) -> Self {
        diagnostics.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_keep_insertion_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn(ConcatWarning::MissingSourceFile {
            path: PathBuf::from("a.js"),
            placeholder: false,
        });
        diagnostics.warn(ConcatWarning::UnknownPriorityEntry {
            filename: "b.js".to_string(),
        });

        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(
            diagnostics.warnings()[0],
            ConcatWarning::MissingSourceFile { .. }
        ));
        assert!(matches!(
            diagnostics.warnings()[1],
            ConcatWarning::UnknownPriorityEntry { .. }
        ));
        assert_eq!(diagnostics.cycles().count(), 0);
    }

    #[test]
    fn display_matches_log_message() {
        let warning = ConcatWarning::MissingSourceFile {
            path: PathBuf::from("invalid_file/should_warn/but_not_fail"),
            placeholder: false,
        };

        assert_eq!(
            warning.to_string(),
            "Source file \"invalid_file/should_warn/but_not_fail\" not found."
        );
    }

    #[test]
    fn cycles_filters_cycle_warnings() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn(ConcatWarning::CyclicDependency {
            unresolved: vec!["a".into(), "b".into()],
            cycle: vec!["a".into(), "b".into(), "a".into()],
            forced: "a".into(),
        });
        diagnostics.warn(ConcatWarning::DirectorySkipped {
            path: PathBuf::from("lib"),
        });

        assert_eq!(diagnostics.cycles().count(), 1);
    }
}
