// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Collaborator implementations the engine runs against.
//!
//! # Available Backends
//!
//! - [`FsBackend`]: reads sources from and writes destinations to disk.
//! - [`MemoryBackend`]: an in-memory tree for dry runs and tests.
//! - [`CachedSource`]: wraps any provider so each path is read once per run;
//!   [`EvictingSink`] keeps it in step with what targets write.
//! - [`TemplateTransform`]: the built-in `process` transform.
//!
//! # Examples
//!
//! ```rust
//! use concat_depends::backends::{CachedSource, FsBackend};
//! use concat_depends::traits::SourceProvider;
//! use std::sync::Arc;
//!
//! let source: Arc<dyn SourceProvider> = Arc::new(CachedSource::new(FsBackend::new()));
//! assert!(!source.exists(std::path::Path::new("definitely/not/here.js")));
//! ```

pub mod cached;
pub mod fs;
pub mod memory;
pub mod template;

pub use cached::{CachedSource, EvictingSink};
pub use fs::FsBackend;
pub use memory::MemoryBackend;
pub use template::TemplateTransform;
