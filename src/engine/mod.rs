// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The dependency-ordering concatenation engine.
//!
//! Bottom-up: [`parser`] finds declarations, [`registry`] loads the files,
//! [`dependency_graph`] links them, [`sorter`] orders them, [`priority`]
//! applies overrides and [`assembler`] builds the text. [`pipeline`] runs one
//! target through all of that and [`runner`] runs many targets.

pub mod assembler;
pub mod banner;
pub mod cycles;
pub mod dependency_graph;
pub mod parser;
pub mod pipeline;
pub mod priority;
pub mod registry;
pub mod runner;
pub mod sorter;

pub use dependency_graph::DependencyGraph;
pub use pipeline::{concat_sources, execute_target, ConcatOptions, ConcatOutput, ConcatTarget, TargetReport, TargetStatus};
pub use registry::{FileRecord, FileRegistry};
pub use runner::TargetRunner;
