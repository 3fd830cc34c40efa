// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // filesystem, in-memory, cache, templates
pub mod config;     // targets + options from YAML/TOML
pub mod engine;     // dependency-ordered concatenation
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // collaborator seams
