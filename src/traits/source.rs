// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;
use std::path::Path;
use std::sync::Arc;

/// Where source text comes from.
///
/// The engine never touches the filesystem directly: existence checks,
/// directory checks and reads all go through a provider so the same pipeline
/// runs against disk, an in-memory tree, or a cache in front of either.
pub trait SourceProvider: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Full text of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Arc<str>>;
}

impl<T: SourceProvider + ?Sized> SourceProvider for Arc<T> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn read(&self, path: &Path) -> io::Result<Arc<str>> {
        (**self).read(path)
    }
}
