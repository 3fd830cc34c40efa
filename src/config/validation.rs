// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Checks are independent and their errors accumulate, so one pass reports
//! every problem in a config file:
//!
//! 1. **Targets present**: at least one target is declared
//! 2. **Names**: every target has a non-empty name, and no two share one
//! 3. **Destinations**: every target has a destination
//! 4. **Concurrency**: `max_concurrency`, when given, is at least 1
//!
//! Source lists are not checked here. Missing or unreadable sources are a
//! per-target concern handled while the target runs.
//!
//! # Example
//! ```rust
//! use concat_depends::config::{load_config_str, validate_config, ConfigFormat};
//! use concat_depends::errors::ValidationError;
//!
//! let config = load_config_str("targets: []", ConfigFormat::Yaml).unwrap();
//!
//! match validate_config(&config) {
//!     Ok(()) => println!("Configuration is valid"),
//!     Err(errors) => assert_eq!(errors, vec![ValidationError::NoTargets]),
//! }
//! ```

use std::collections::HashSet;

use crate::config::Config;
use crate::errors::ValidationError;

pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.targets.is_empty() {
        errors.push(ValidationError::NoTargets);
    }

    if let Err(name_errors) = validate_target_names(config) {
        errors.extend(name_errors);
    }

    if let Err(dest_errors) = validate_destinations(config) {
        errors.extend(dest_errors);
    }

    if let Some(value) = config.executor_options.max_concurrency {
        if value == 0 {
            errors.push(ValidationError::InvalidConcurrency { value });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// **Time Complexity**: O(n) where n = number of targets
fn validate_target_names(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for (index, target) in config.targets.iter().enumerate() {
        if target.name.trim().is_empty() {
            errors.push(ValidationError::EmptyTargetName { index });
        } else if !seen.insert(target.name.as_str()) {
            errors.push(ValidationError::DuplicateTargetName {
                name: target.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_destinations(config: &Config) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<_> = config
        .targets
        .iter()
        .enumerate()
        .filter(|(_, target)| target.dest.as_os_str().is_empty())
        .map(|(index, target)| ValidationError::MissingDestination {
            target: if target.name.is_empty() {
                format!("#{}", index)
            } else {
                target.name.clone()
            },
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config_str, ConfigFormat};

    fn config(yaml: &str) -> Config {
        load_config_str(yaml, ConfigFormat::Yaml).unwrap()
    }

    #[test]
    fn test_valid_config() {
        let cfg = config(
            r#"
targets:
  - name: one
    dest: out/one.js
    src: [a.js]
  - name: two
    dest: out/one.js
"#,
        );
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_no_targets() {
        let cfg = config("options: { separator: ',' }");
        assert_eq!(validate_config(&cfg), Err(vec![ValidationError::NoTargets]));
    }

    #[test]
    fn test_duplicate_names() {
        let cfg = config(
            r#"
targets:
  - { name: x, dest: a }
  - { name: x, dest: b }
  - { name: x, dest: c }
"#,
        );
        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ValidationError::DuplicateTargetName { name } if name == "x")));
    }

    #[test]
    fn test_empty_name_and_missing_dest() {
        let cfg = config(
            r#"
targets:
  - { name: "  ", dest: a }
  - { src: [a.js] }
"#,
        );
        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyTargetName { index: 0 },
                ValidationError::EmptyTargetName { index: 1 },
                ValidationError::MissingDestination {
                    target: "#1".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_zero_concurrency() {
        let cfg = config(
            r#"
executor_options: { max_concurrency: 0 }
targets:
  - { name: x, dest: a }
"#,
        );
        assert_eq!(
            validate_config(&cfg),
            Err(vec![ValidationError::InvalidConcurrency { value: 0 }])
        );
    }
}
