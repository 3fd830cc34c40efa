// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod concat;
mod config;
mod diagnostics;
mod execution;

pub use concat::ConcatError;
pub use config::{ConfigError, ValidationError};
pub use diagnostics::{ConcatWarning, Diagnostics};
pub use execution::FailureStrategy;
