// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

/// How a run reacts when one of its targets fails.
///
/// A failed target never writes its destination. The strategy only decides
/// whether the remaining targets still get a chance to run.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    /// Targets that have not started yet are skipped after the first failure.
    FailFast,
    /// Every target runs regardless of failures elsewhere.
    #[default]
    ContinueOnError,
}
