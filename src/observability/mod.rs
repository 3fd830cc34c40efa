// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic and operational event the engine emits is a small message
//! struct with a `Display` implementation, so log text lives in one place
//! instead of being scattered through the pipeline as format strings.
//!
//! # Architecture
//!
//! Messages are organized by pipeline stage:
//! * `messages::registry` - source file loading and filtering
//! * `messages::sort` - dependency resolution, cycles and priority
//! * `messages::target` - per-target lifecycle (start, write, failure)
//!
//! # Usage
//!
//! ```rust
//! use concat_depends::observability::messages::target::TargetStarted;
//! use concat_depends::observability::messages::StructuredLog;
//! use std::path::Path;
//!
//! let msg = TargetStarted {
//!     target: "bundle",
//!     dest: Path::new("dist/bundle.js"),
//!     source_count: 3,
//! };
//!
//! let span = msg.span("target");
//! let _guard = span.enter();
//! msg.log();
//! ```

pub mod messages;
