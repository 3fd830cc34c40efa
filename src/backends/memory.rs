// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{OutputSink, SourceProvider};

/// In-memory source tree and output sink.
///
/// Used for dry runs and tests. Paths are compared exactly as given; there is
/// no normalization of `.` or `..` segments.
///
/// ```
/// use concat_depends::backends::MemoryBackend;
/// use concat_depends::traits::SourceProvider;
/// use std::path::Path;
///
/// let backend = MemoryBackend::new()
///     .with_file("src/a.js", "var a;")
///     .with_dir("src");
///
/// assert!(backend.exists(Path::new("src/a.js")));
/// assert!(backend.is_dir(Path::new("src")));
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    files: BTreeMap<PathBuf, Arc<str>>,
    dirs: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
    written: Mutex<BTreeMap<PathBuf, String>>,
    reads: Mutex<Vec<PathBuf>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files.insert(path.into(), Arc::from(contents));
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    /// A path that exists but fails every read.
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    /// Contents last written to `dest`, if any.
    pub fn written(&self, dest: impl AsRef<Path>) -> Option<String> {
        lock(&self.written).get(dest.as_ref()).cloned()
    }

    pub fn written_count(&self) -> usize {
        lock(&self.written).len()
    }

    /// Every successful read, in order.
    pub fn reads(&self) -> Vec<PathBuf> {
        lock(&self.reads).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl SourceProvider for MemoryBackend {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains(path) || self.unreadable.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn read(&self, path: &Path) -> io::Result<Arc<str>> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        match self.files.get(path) {
            Some(contents) => {
                lock(&self.reads).push(path.to_path_buf());
                Ok(contents.clone())
            }
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        }
    }
}

impl OutputSink for MemoryBackend {
    fn write(&self, dest: &Path, contents: &str) -> io::Result<()> {
        lock(&self.written).insert(dest.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_paths_exist_but_fail_to_read() {
        let backend = MemoryBackend::new().with_unreadable("locked.js");

        assert!(backend.exists(Path::new("locked.js")));
        let err = backend.read(Path::new("locked.js")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn writes_are_recorded_per_destination() {
        let backend = MemoryBackend::new();
        backend.write(Path::new("out"), "one").unwrap();
        backend.write(Path::new("out"), "two").unwrap();

        assert_eq!(backend.written("out").as_deref(), Some("two"));
        assert_eq!(backend.written_count(), 1);
    }

    #[test]
    fn reads_are_counted() {
        let backend = MemoryBackend::new().with_file("a", "A");
        backend.read(Path::new("a")).unwrap();
        backend.read(Path::new("a")).unwrap();

        assert_eq!(backend.reads().len(), 2);
    }
}
