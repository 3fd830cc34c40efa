// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fatal errors for a single concatenation target.
//!
//! Any of these aborts the target it occurred in before anything is written to
//! its destination. Other targets in the same run are unaffected unless the
//! runner was configured with [`FailureStrategy::FailFast`](super::FailureStrategy).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConcatError {
    /// A file declares a dependency on a name that is not part of the target's file set.
    #[error(
        "Missing dependency. '{file}' depends on '{dependency}' but the dependency was not included in the concatenation list."
    )]
    DanglingDependency { file: String, dependency: String },

    /// A source passed the existence check but could not be read.
    #[error("Failed to read source file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The assembled output could not be written to its destination.
    #[error("Failed to write destination '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template expansion failed for a banner, footer or file body.
    #[error("Template error in {context}: {message}")]
    Template { context: String, message: String },

    /// The worker running the target went away before reporting.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_dependency_names_both_files() {
        let err = ConcatError::DanglingDependency {
            file: "file3".to_string(),
            dependency: "file9".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("'file3' depends on 'file9'"));
        assert!(msg.contains("not included in the concatenation list"));
    }

    #[test]
    fn io_error_keeps_source() {
        let err = ConcatError::Io {
            path: PathBuf::from("src/a.js"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(err.to_string(), "Failed to read source file 'src/a.js': denied");
        assert!(std::error::Error::source(&err).is_some());
    }
}
