// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Source file registry for one concatenation target.
//!
//! Files are identified by basename. When two listed paths share a basename the
//! later one replaces the earlier one but keeps its slot in registration order,
//! so the output position of that name is decided by where it was first listed.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::engine::parser::parse_dependencies;
use crate::errors::{ConcatError, ConcatWarning, Diagnostics};
use crate::observability::messages::registry::SourceFileLoaded;
use crate::observability::messages::StructuredLog;
use crate::traits::SourceProvider;

/// One loaded source file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// Basename; the file's identity in the dependency graph.
    pub filename: String,
    pub filepath: PathBuf,
    pub source_text: Arc<str>,
    /// Declared dependency names, in declaration order.
    pub dependencies: Vec<String>,
}

impl FileRecord {
    /// Build a record from text, parsing its declarations.
    pub fn new(filepath: impl Into<PathBuf>, source_text: Arc<str>) -> Self {
        let filepath = filepath.into();
        let dependencies = parse_dependencies(&source_text);
        Self {
            filename: basename(&filepath),
            filepath,
            source_text,
            dependencies,
        }
    }

    /// Empty stand-in for a listed file that does not exist.
    pub fn placeholder(filepath: impl Into<PathBuf>) -> Self {
        let filepath = filepath.into();
        Self {
            filename: basename(&filepath),
            filepath,
            source_text: Arc::from(""),
            dependencies: Vec::new(),
        }
    }
}

/// Final path component, or the whole path when there is none (`..`, `/`).
pub fn basename(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Basename-keyed records in registration order.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    records: Vec<FileRecord>,
    index: HashMap<String, usize>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every listed path through `provider`.
    ///
    /// Missing paths and directories are reported in `diagnostics` and left
    /// out; with `nonull`, a missing path is registered as an empty placeholder
    /// instead. A read failure on a path that does exist aborts the load.
    pub fn load(
        paths: &[PathBuf],
        provider: &dyn SourceProvider,
        nonull: bool,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self, ConcatError> {
        let mut registry = Self::new();

        for path in paths {
            if !provider.exists(path) {
                diagnostics.warn(ConcatWarning::MissingSourceFile {
                    path: path.clone(),
                    placeholder: nonull,
                });
                if nonull {
                    registry.register(FileRecord::placeholder(path.clone()), diagnostics);
                }
                continue;
            }

            if provider.is_dir(path) {
                diagnostics.warn(ConcatWarning::DirectorySkipped { path: path.clone() });
                continue;
            }

            let text = provider.read(path).map_err(|source| ConcatError::Io {
                path: path.clone(),
                source,
            })?;
            let record = FileRecord::new(path.clone(), text);

            SourceFileLoaded {
                filename: &record.filename,
                path: &record.filepath,
                size: record.source_text.len(),
                dependencies: &record.dependencies,
            }
            .log();

            registry.register(record, diagnostics);
        }

        Ok(registry)
    }

    /// Add a record, reporting when it replaces one with the same basename.
    pub fn register(&mut self, record: FileRecord, diagnostics: &mut Diagnostics) {
        if let Some(replaced) = self.insert(record) {
            if let Some(current) = self.get(&replaced.filename) {
                diagnostics.warn(ConcatWarning::BasenameCollision {
                    filename: replaced.filename.clone(),
                    replaced: replaced.filepath.clone(),
                    replacement: current.filepath.clone(),
                });
            }
        }
    }

    /// Add a record; last write wins. Returns the record it replaced, if any.
    pub fn insert(&mut self, record: FileRecord) -> Option<FileRecord> {
        match self.index.get(&record.filename) {
            Some(&slot) => Some(std::mem::replace(&mut self.records[slot], record)),
            None => {
                self.index.insert(record.filename.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, filename: &str) -> Option<&FileRecord> {
        self.index.get(filename).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.index.contains_key(filename)
    }

    /// Records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter()
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.filename.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::MemoryBackend;

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn loads_in_listed_order_with_dependencies() {
        let backend = MemoryBackend::new()
            .with_file("fixtures/file3", "/// <depends path=\"file5\" />\nfile3\n")
            .with_file("fixtures/file4", "file4\n")
            .with_file("fixtures/file5", "file5\n");
        let mut diagnostics = Diagnostics::new();

        let registry = FileRegistry::load(
            &paths(&["fixtures/file3", "fixtures/file4", "fixtures/file5"]),
            &backend,
            false,
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(registry.filenames().collect::<Vec<_>>(), vec!["file3", "file4", "file5"]);
        assert_eq!(registry.get("file3").unwrap().dependencies, vec!["file5"]);
        assert_eq!(
            registry.get("file4").unwrap().filepath,
            PathBuf::from("fixtures/file4")
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn missing_files_warn_and_are_dropped() {
        let backend = MemoryBackend::new()
            .with_file("file1", "one")
            .with_file("file2", "two");
        let mut diagnostics = Diagnostics::new();

        let registry = FileRegistry::load(
            &paths(&["file1", "invalid_file/should_warn/but_not_fail", "file2"]),
            &backend,
            false,
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            &diagnostics.warnings()[0],
            ConcatWarning::MissingSourceFile { placeholder: false, .. }
        ));
    }

    #[test]
    fn nonull_registers_placeholder_for_missing_file() {
        let backend = MemoryBackend::new().with_file("file1", "one");
        let mut diagnostics = Diagnostics::new();

        let registry = FileRegistry::load(
            &paths(&["missing/ghost.js", "file1"]),
            &backend,
            true,
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(registry.filenames().collect::<Vec<_>>(), vec!["ghost.js", "file1"]);
        let ghost = registry.get("ghost.js").unwrap();
        assert_eq!(&*ghost.source_text, "");
        assert!(ghost.dependencies.is_empty());
        assert!(matches!(
            &diagnostics.warnings()[0],
            ConcatWarning::MissingSourceFile { placeholder: true, .. }
        ));
    }

    #[test]
    fn directories_are_skipped_with_warning() {
        let backend = MemoryBackend::new().with_dir("fixtures");
        let mut diagnostics = Diagnostics::new();

        let registry =
            FileRegistry::load(&paths(&["fixtures"]), &backend, true, &mut diagnostics).unwrap();

        assert!(registry.is_empty());
        assert!(matches!(
            &diagnostics.warnings()[0],
            ConcatWarning::DirectorySkipped { .. }
        ));
    }

    #[test]
    fn basename_collision_is_last_write_wins_in_first_slot() {
        let backend = MemoryBackend::new()
            .with_file("a/util.js", "first")
            .with_file("main.js", "main")
            .with_file("b/util.js", "second");
        let mut diagnostics = Diagnostics::new();

        let registry = FileRegistry::load(
            &paths(&["a/util.js", "main.js", "b/util.js"]),
            &backend,
            false,
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(registry.filenames().collect::<Vec<_>>(), vec!["util.js", "main.js"]);
        assert_eq!(&*registry.get("util.js").unwrap().source_text, "second");
        assert_eq!(
            diagnostics.warnings()[0],
            ConcatWarning::BasenameCollision {
                filename: "util.js".to_string(),
                replaced: PathBuf::from("a/util.js"),
                replacement: PathBuf::from("b/util.js"),
            }
        );
    }

    #[test]
    fn read_failure_is_fatal() {
        let backend = MemoryBackend::new()
            .with_file("file1", "one")
            .with_unreadable("locked.js");
        let mut diagnostics = Diagnostics::new();

        let err = FileRegistry::load(
            &paths(&["file1", "locked.js"]),
            &backend,
            true,
            &mut diagnostics,
        )
        .unwrap_err();

        match err {
            ConcatError::Io { path, .. } => assert_eq!(path, PathBuf::from("locked.js")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn basename_of_path_without_file_name() {
        assert_eq!(basename(Path::new("lib/a.js")), "a.js");
        assert_eq!(basename(Path::new("..")), "..");
    }
}
