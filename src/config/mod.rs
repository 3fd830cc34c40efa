// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod options;
mod runtime;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_config, load_config, load_config_str, Config, ConfigFormat, ExecutorOptions,
    TargetConfig,
};
pub use options::{OptionsConfig, ProcessConfig, StripBannersConfig};
pub use runtime::RuntimeBuilder;
pub use validation::validate_config;
