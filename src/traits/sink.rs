// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;
use std::path::Path;

/// Where finished output goes.
pub trait OutputSink: Send + Sync {
    /// Replace the contents of `dest` with `contents`.
    fn write(&self, dest: &Path, contents: &str) -> io::Result<()>;
}
