// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself through `tracing` with its fields attached.
//!
//! # Organization
//!
//! * `registry` - source file loading and filtering
//! * `sort` - dependency resolution, cycles and priority
//! * `target` - per-target lifecycle

use tracing::Span;

pub mod registry;
pub mod sort;
pub mod target;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a single `tracing` event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
