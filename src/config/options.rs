// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use serde_yaml::Value;

use crate::backends::TemplateTransform;
use crate::config::consts::DEFAULT_SEPARATOR;
use crate::engine::banner::StripBanners;
use crate::engine::pipeline::ConcatOptions;

/// Concatenation options as written in a config file.
///
/// Every field is optional so the same shape serves as task-level defaults and
/// as per-target overrides; see [`OptionsConfig::merge`].
///
/// # Example
/// ```yaml
/// separator: "\n;\n"
/// banner: "/* <%= pkg.name %> */\n"
/// strip_banners: { block: true }
/// process: true
/// priority: [polyfills.js]
/// force: true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OptionsConfig {
    pub separator: Option<String>,
    pub banner: Option<String>,
    pub footer: Option<String>,
    pub strip_banners: Option<StripBannersConfig>,
    pub process: Option<ProcessConfig>,
    pub priority: Option<Vec<String>>,
    pub force: Option<bool>,
    pub nonull: Option<bool>,
}

/// `strip_banners: true` or `strip_banners: { block: .., line: .. }`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StripBannersConfig {
    Enabled(bool),
    Rules(StripBanners),
}

impl StripBannersConfig {
    pub fn resolve(&self) -> Option<StripBanners> {
        match self {
            StripBannersConfig::Enabled(true) => Some(StripBanners::default()),
            StripBannersConfig::Enabled(false) => None,
            StripBannersConfig::Rules(rules) => Some(*rules),
        }
    }
}

/// `process: true` expands bodies with the config's `data`;
/// `process: { data: {...} }` expands them with the given data instead.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProcessConfig {
    Enabled(bool),
    Template { data: Value },
}

impl OptionsConfig {
    /// Field-by-field overlay: values set in `overrides` win.
    pub fn merge(&self, overrides: &OptionsConfig) -> OptionsConfig {
        OptionsConfig {
            separator: overrides.separator.clone().or_else(|| self.separator.clone()),
            banner: overrides.banner.clone().or_else(|| self.banner.clone()),
            footer: overrides.footer.clone().or_else(|| self.footer.clone()),
            strip_banners: overrides.strip_banners.or(self.strip_banners),
            process: overrides.process.clone().or_else(|| self.process.clone()),
            priority: overrides.priority.clone().or_else(|| self.priority.clone()),
            force: overrides.force.or(self.force),
            nonull: overrides.nonull.or(self.nonull),
        }
    }

    /// Engine options, with defaults for anything left unset.
    ///
    /// `data` feeds the banner and footer, and the bodies under `process: true`.
    pub fn resolve(&self, data: &Value) -> ConcatOptions {
        let process = match &self.process {
            Some(ProcessConfig::Enabled(true)) => Some(TemplateTransform::new(data.clone())),
            Some(ProcessConfig::Template { data }) => Some(TemplateTransform::new(data.clone())),
            Some(ProcessConfig::Enabled(false)) | None => None,
        };

        let mut options = ConcatOptions::new()
            .with_separator(self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR))
            .with_banner(self.banner.clone().unwrap_or_default())
            .with_footer(self.footer.clone().unwrap_or_default())
            .with_force(self.force.unwrap_or(false))
            .with_nonull(self.nonull.unwrap_or(false))
            .with_template_data(data.clone());

        if let Some(mode) = self.strip_banners.and_then(|s| s.resolve()) {
            options = options.with_strip_banners(mode);
        }
        if let Some(transform) = process {
            options = options.with_process(transform);
        }
        if let Some(priority) = &self.priority {
            options = options.with_priority(priority.iter().cloned());
        }
        options
    }
}
