// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::validation::validate_config;
use crate::config::Config;
use crate::engine::pipeline::ConcatTarget;
use crate::engine::runner::TargetRunner;
use crate::errors::ConfigError;

/// Turns a configuration into runnable targets and the runner that executes them.
///
/// # Examples
///
/// ```
/// use concat_depends::config::{load_config_str, ConfigFormat, RuntimeBuilder};
/// use concat_depends::errors::FailureStrategy;
///
/// let config = load_config_str(
///     "failure_strategy: fail_fast\ntargets:\n  - { name: bundle, dest: out.js, src: [a.js] }\n",
///     ConfigFormat::Yaml,
/// )
/// .unwrap();
///
/// let (targets, runner) = RuntimeBuilder::from_config(&config).unwrap();
///
/// assert_eq!(targets[0].name, "bundle");
/// assert_eq!(runner.failure_strategy(), FailureStrategy::FailFast);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Validate `cfg`, then build:
    /// - one `ConcatTarget` per configured target, with task-level options
    ///   overlaid by the target's own
    /// - a `TargetRunner` honoring `executor_options` and `failure_strategy`
    pub fn from_config(cfg: &Config) -> Result<(Vec<ConcatTarget>, TargetRunner), ConfigError> {
        validate_config(cfg).map_err(ConfigError::Validation)?;

        let targets = cfg
            .targets
            .iter()
            .map(|target| ConcatTarget {
                name: target.name.clone(),
                dest: target.dest.clone(),
                src: target.src.clone(),
                options: cfg.options.merge(&target.options).resolve(&cfg.data),
            })
            .collect();

        let runner = TargetRunner::new(
            cfg.executor_options.get_max_concurrency(),
            cfg.failure_strategy,
        );

        Ok((targets, runner))
    }
}
