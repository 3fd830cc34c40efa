// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The configuration declares no targets at all
    NoTargets,
    /// A target has an empty or whitespace-only name
    EmptyTargetName {
        /// Position of the target in the `targets` list
        index: usize,
    },
    /// Two targets share the same name
    DuplicateTargetName {
        /// The duplicated target name
        name: String,
    },
    /// A target has no destination path
    MissingDestination {
        /// The target without a destination
        target: String,
    },
    /// `executor_options.max_concurrency` is zero
    InvalidConcurrency {
        /// The rejected value
        value: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoTargets => write!(f, "Configuration declares no targets"),
            ValidationError::EmptyTargetName { index } => {
                write!(f, "Target at position {} has an empty name", index)
            }
            ValidationError::DuplicateTargetName { name } => {
                write!(f, "Duplicate target name: '{}'", name)
            }
            ValidationError::MissingDestination { target } => {
                write!(f, "Target '{}' has no destination", target)
            }
            ValidationError::InvalidConcurrency { value } => {
                write!(f, "max_concurrency must be at least 1, got {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported config format for '{}': expected .yaml, .yml or .toml", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_listed_one_per_line() {
        let err = ConfigError::Validation(vec![
            ValidationError::NoTargets,
            ValidationError::InvalidConcurrency { value: 0 },
        ]);

        assert_eq!(
            err.to_string(),
            "Configuration validation failed:\nConfiguration declares no targets\nmax_concurrency must be at least 1, got 0"
        );
    }
}
