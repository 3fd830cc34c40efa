// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;

use crate::errors::ConcatError;

/// Per-file text rewrite applied before a body is joined into the output.
///
/// Plain closures of the shape `Fn(&str, &Path) -> String` are transforms too,
/// which covers one-off rewrites such as prefixing each body with its path:
///
/// ```
/// use concat_depends::traits::Transform;
/// use std::path::Path;
///
/// let annotate = |src: &str, path: &Path| format!("// Source: {}\n{}", path.display(), src);
/// let out = annotate.apply("var a;", Path::new("lib/a.js")).unwrap();
///
/// assert_eq!(out, "// Source: lib/a.js\nvar a;");
/// ```
pub trait Transform: Send + Sync {
    fn apply(&self, source: &str, path: &Path) -> Result<String, ConcatError>;

    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> Transform for F
where
    F: Fn(&str, &Path) -> String + Send + Sync,
{
    fn apply(&self, source: &str, path: &Path) -> Result<String, ConcatError> {
        Ok(self(source, path))
    }
}
