// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_MAX_CONCURRENCY;
use crate::config::options::OptionsConfig;
use crate::config::validation::validate_config;
use crate::errors::{ConfigError, FailureStrategy};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration: every target of one run plus shared settings.
///
/// # Fields
/// * `failure_strategy` - What happens to remaining targets after a failure (defaults to ContinueOnError)
/// * `executor_options` - How targets are scheduled (optional)
/// * `data` - Template data for banners, footers and `process: true`
/// * `options` - Defaults applied to every target
/// * `targets` - The destinations to build, in order
///
/// # Example
/// ```yaml
/// failure_strategy: fail_fast
/// executor_options:
///   max_concurrency: 2
/// data:
///   banner_property: AWESOME
/// options:
///   separator: "\n"
/// targets:
///   - name: bundle
///     dest: dist/bundle.js
///     src: [src/app.js, src/util.js]
///     options:
///       banner: "/* <%= banner_property %> */\n"
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    #[serde(default)]
    pub executor_options: ExecutorOptions,
    #[serde(default = "empty_data")]
    pub data: Value,
    #[serde(default)]
    pub options: OptionsConfig,
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

fn empty_data() -> Value {
    Value::Mapping(Mapping::new())
}

/// Scheduling options for a run.
#[derive(Debug, Default, Deserialize)]
pub struct ExecutorOptions {
    /// Targets processed at once
    pub max_concurrency: Option<usize>,
}

impl ExecutorOptions {
    pub fn get_max_concurrency(&self) -> usize {
        self.max_concurrency.unwrap_or(DEFAULT_MAX_CONCURRENCY)
    }
}

/// One destination and the sources concatenated into it.
#[derive(Debug, Deserialize)]
pub struct TargetConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dest: PathBuf,
    #[serde(default)]
    pub src: Vec<PathBuf>,
    /// Overrides for the top-level `options`, field by field.
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Config file syntax, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

pub fn load_config_str(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_str(&content, format)
}

pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    validate_config(&cfg).map_err(ConfigError::Validation)?;
    Ok(cfg)
}
