// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::traits::{OutputSink, SourceProvider};

/// Filesystem-backed source provider and output sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsBackend;

impl FsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl SourceProvider for FsBackend {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> io::Result<Arc<str>> {
        fs::read_to_string(path).map(Arc::from)
    }
}

impl OutputSink for FsBackend {
    /// Creates missing parent directories before writing.
    fn write(&self, dest: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(dest, contents)
    }
}
