// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One concatenation target, end to end.
//!
//! ```text
//! sources ─► FileRegistry ─► DependencyGraph ─► topological order
//!                                                      │
//!        destination ◄── assemble ◄── apply_priority ◄─┘
//! ```
//!
//! Every stage is local to the target. Warnings from all stages land in one
//! [`Diagnostics`] collector; the first fatal error stops the target before
//! anything is written.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use serde_yaml::{Mapping, Value};

use crate::backends::template::render;
use crate::config::consts::DEFAULT_SEPARATOR;
use crate::engine::assembler::{assemble, AssemblyOptions};
use crate::engine::banner::StripBanners;
use crate::engine::dependency_graph::DependencyGraph;
use crate::engine::priority::apply_priority;
use crate::engine::registry::FileRegistry;
use crate::engine::sorter::topological_order;
use crate::errors::{ConcatError, Diagnostics};
use crate::observability::messages::target::{TargetFailed, TargetStarted, TargetWritten};
use crate::observability::messages::StructuredLog;
use crate::traits::{OutputSink, SourceProvider, Transform};

/// Everything that shapes a target's output apart from its file list.
#[derive(Clone)]
pub struct ConcatOptions {
    pub separator: String,
    /// Template, expanded with `template_data`.
    pub banner: String,
    /// Template, expanded with `template_data`.
    pub footer: String,
    pub strip_banners: Option<StripBanners>,
    /// Per-file transform.
    pub process: Option<Arc<dyn Transform>>,
    pub priority: Option<Vec<String>>,
    /// Ignore dangling dependencies instead of failing.
    pub force: bool,
    /// Keep missing files as empty placeholders.
    pub nonull: bool,
    pub template_data: Value,
}

impl Default for ConcatOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            banner: String::new(),
            footer: String::new(),
            strip_banners: None,
            process: None,
            priority: None,
            force: false,
            nonull: false,
            template_data: Value::Mapping(Mapping::new()),
        }
    }
}

impl fmt::Debug for ConcatOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcatOptions")
            .field("separator", &self.separator)
            .field("banner", &self.banner)
            .field("footer", &self.footer)
            .field("strip_banners", &self.strip_banners)
            .field("process", &self.process.as_ref().map(|t| t.name()))
            .field("priority", &self.priority)
            .field("force", &self.force)
            .field("nonull", &self.nonull)
            .field("template_data", &self.template_data)
            .finish()
    }
}

impl ConcatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn with_strip_banners(mut self, mode: StripBanners) -> Self {
        self.strip_banners = Some(mode);
        self
    }

    pub fn with_process(mut self, transform: impl Transform + 'static) -> Self {
        self.process = Some(Arc::new(transform));
        self
    }

    pub fn with_priority<I, S>(mut self, priority: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority = Some(priority.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_nonull(mut self, nonull: bool) -> Self {
        self.nonull = nonull;
        self
    }

    pub fn with_template_data(mut self, data: Value) -> Self {
        self.template_data = data;
        self
    }
}

/// A named destination and the sources concatenated into it.
#[derive(Debug, Clone)]
pub struct ConcatTarget {
    pub name: String,
    pub dest: PathBuf,
    pub src: Vec<PathBuf>,
    pub options: ConcatOptions,
}

impl ConcatTarget {
    pub fn new<I, P>(name: impl Into<String>, dest: impl Into<PathBuf>, src: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            name: name.into(),
            dest: dest.into(),
            src: src.into_iter().map(Into::into).collect(),
            options: ConcatOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConcatOptions) -> Self {
        self.options = options;
        self
    }
}

/// Assembled text plus the order its files were emitted in.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatOutput {
    pub contents: String,
    pub order: Vec<String>,
}

/// How a target ended.
#[derive(Debug)]
pub enum TargetStatus {
    Written(ConcatOutput),
    Failed(ConcatError),
    /// Never started because an earlier target failed under fail-fast.
    Skipped,
}

/// Outcome of one target together with its warnings.
#[derive(Debug)]
pub struct TargetReport {
    pub name: String,
    pub dest: PathBuf,
    pub diagnostics: Diagnostics,
    pub status: TargetStatus,
}

impl TargetReport {
    pub fn skipped(target: &ConcatTarget) -> Self {
        Self {
            name: target.name.clone(),
            dest: target.dest.clone(),
            diagnostics: Diagnostics::new(),
            status: TargetStatus::Skipped,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, TargetStatus::Failed(_))
    }

    pub fn output(&self) -> Option<&ConcatOutput> {
        match &self.status {
            TargetStatus::Written(output) => Some(output),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ConcatError> {
        match &self.status {
            TargetStatus::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Concatenate `sources` in dependency order. Nothing is written.
///
/// ```
/// use concat_depends::backends::MemoryBackend;
/// use concat_depends::engine::pipeline::{concat_sources, ConcatOptions};
/// use concat_depends::errors::Diagnostics;
/// use std::path::PathBuf;
///
/// let backend = MemoryBackend::new()
///     .with_file("file3", "// depends \"file5\"\nthree")
///     .with_file("file4", "four")
///     .with_file("file5", "five");
/// let sources: Vec<PathBuf> = ["file3", "file4", "file5"].iter().map(PathBuf::from).collect();
/// let options = ConcatOptions::new().with_separator(",");
///
/// let mut diagnostics = Diagnostics::new();
/// let output = concat_sources(&sources, &backend, &options, &mut diagnostics).unwrap();
///
/// assert_eq!(output.order, vec!["file4", "file5", "file3"]);
/// assert_eq!(output.contents, "four,five,// depends \"file5\"\nthree");
/// ```
pub fn concat_sources(
    sources: &[PathBuf],
    provider: &dyn SourceProvider,
    options: &ConcatOptions,
    diagnostics: &mut Diagnostics,
) -> Result<ConcatOutput, ConcatError> {
    let registry = FileRegistry::load(sources, provider, options.nonull, diagnostics)?;
    let graph = DependencyGraph::from_registry(&registry);
    let order = topological_order(&graph, options.force, diagnostics)?;
    let order = apply_priority(order, options.priority.as_deref(), diagnostics);

    let banner = render(&options.banner, &options.template_data, "banner")?;
    let footer = render(&options.footer, &options.template_data, "footer")?;

    let contents = assemble(
        &order,
        &registry,
        &AssemblyOptions {
            separator: &options.separator,
            banner: &banner,
            footer: &footer,
            strip_banners: options.strip_banners,
            transform: options.process.as_deref(),
        },
    )?;

    Ok(ConcatOutput { contents, order })
}

/// Run one target and write its output through `sink` if it succeeds.
pub fn execute_target(
    target: &ConcatTarget,
    source: &dyn SourceProvider,
    sink: &dyn OutputSink,
) -> TargetReport {
    let started_at = Instant::now();
    let started = TargetStarted {
        target: &target.name,
        dest: &target.dest,
        source_count: target.src.len(),
    };
    let span = started.span("execute_target");
    let _guard = span.enter();
    started.log();

    let mut diagnostics = Diagnostics::new();
    let result = concat_sources(&target.src, source, &target.options, &mut diagnostics).and_then(
        |output| {
            sink.write(&target.dest, &output.contents)
                .map_err(|source| ConcatError::Write {
                    path: target.dest.clone(),
                    source,
                })?;
            Ok(output)
        },
    );

    let status = match result {
        Ok(output) => {
            TargetWritten {
                target: &target.name,
                dest: &target.dest,
                bytes: output.contents.len(),
                file_count: output.order.len(),
                duration: started_at.elapsed(),
            }
            .log();
            TargetStatus::Written(output)
        }
        Err(error) => {
            TargetFailed {
                target: &target.name,
                error: &error,
            }
            .log();
            TargetStatus::Failed(error)
        }
    };

    TargetReport {
        name: target.name.clone(),
        dest: target.dest.clone(),
        diagnostics,
        status,
    }
}
