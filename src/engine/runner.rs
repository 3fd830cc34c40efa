// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Runs many concatenation targets.
//!
//! Each target is an independent pipeline executed on the blocking thread pool.
//! A semaphore bounds how many run at once; targets are started in the order
//! given and their reports come back in that same order regardless of which
//! finished first. The source provider is shared, so a [`CachedSource`] lets
//! targets reuse each other's reads; pair it with its [`EvictingSink`] when a
//! target may read what an earlier target wrote.
//!
//! [`CachedSource`]: crate::backends::CachedSource
//! [`EvictingSink`]: crate::backends::EvictingSink

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::config::consts::DEFAULT_MAX_CONCURRENCY;
use crate::engine::pipeline::{execute_target, ConcatTarget, TargetReport, TargetStatus};
use crate::errors::{ConcatError, Diagnostics, FailureStrategy};
use crate::observability::messages::target::TargetSkipped;
use crate::observability::messages::StructuredLog;
use crate::traits::{OutputSink, SourceProvider};

#[derive(Debug, Clone, Copy)]
pub struct TargetRunner {
    max_concurrency: usize,
    failure_strategy: FailureStrategy,
}

impl Default for TargetRunner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONCURRENCY, FailureStrategy::default())
    }
}

enum Slot {
    Running {
        name: String,
        dest: PathBuf,
        handle: JoinHandle<TargetReport>,
    },
    Done(TargetReport),
}

impl TargetRunner {
    /// A `max_concurrency` of zero is treated as one.
    pub fn new(max_concurrency: usize, failure_strategy: FailureStrategy) -> Self {
        Self {
            max_concurrency: max_concurrency.max(1),
            failure_strategy,
        }
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    pub fn failure_strategy(&self) -> FailureStrategy {
        self.failure_strategy
    }

    /// Run every target, returning one report per target in input order.
    pub async fn run(
        &self,
        targets: Vec<ConcatTarget>,
        source: Arc<dyn SourceProvider>,
        sink: Arc<dyn OutputSink>,
    ) -> Vec<TargetReport> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let failed = Arc::new(AtomicBool::new(false));
        let fail_fast = self.failure_strategy == FailureStrategy::FailFast;
        let mut slots = Vec::with_capacity(targets.len());

        for target in targets {
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    let report = internal_failure(&target.name, &target.dest, e.to_string());
                    slots.push(Slot::Done(report));
                    continue;
                }
            };

            if fail_fast && failed.load(Ordering::SeqCst) {
                TargetSkipped {
                    target: &target.name,
                }
                .log();
                slots.push(Slot::Done(TargetReport::skipped(&target)));
                continue;
            }

            let name = target.name.clone();
            let dest = target.dest.clone();
            let source = Arc::clone(&source);
            let sink = Arc::clone(&sink);
            let failed = Arc::clone(&failed);

            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                let report = execute_target(&target, source.as_ref(), sink.as_ref());
                if report.is_failure() {
                    failed.store(true, Ordering::SeqCst);
                }
                report
            });

            slots.push(Slot::Running { name, dest, handle });
        }

        let mut reports = Vec::with_capacity(slots.len());
        for slot in slots {
            let report = match slot {
                Slot::Done(report) => report,
                Slot::Running { name, dest, handle } => match handle.await {
                    Ok(report) => report,
                    Err(e) => internal_failure(&name, &dest, e.to_string()),
                },
            };
            reports.push(report);
        }
        reports
    }
}

fn internal_failure(name: &str, dest: &Path, message: String) -> TargetReport {
    TargetReport {
        name: name.to_string(),
        dest: dest.to_path_buf(),
        diagnostics: Diagnostics::new(),
        status: TargetStatus::Failed(ConcatError::Internal { message }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{CachedSource, FsBackend, MemoryBackend};
    use crate::config::consts::DEFAULT_SEPARATOR;
    use std::fs;
    use tempfile::TempDir;

    fn backend() -> Arc<MemoryBackend> {
        Arc::new(
            MemoryBackend::new()
                .with_file("src/a.js", "A")
                .with_file("src/b.js", "// depends \"a.js\"\nB")
                .with_file("src/bad.js", "// depends \"nowhere.js\"\nBAD"),
        )
    }

    fn target(name: &str, src: &[&str]) -> ConcatTarget {
        ConcatTarget::new(name, format!("dist/{name}.js"), src.iter().copied())
    }

    #[tokio::test]
    async fn reports_follow_target_order() {
        let backend = backend();
        let runner = TargetRunner::new(4, FailureStrategy::ContinueOnError);
        let targets = vec![
            target("first", &["src/b.js", "src/a.js"]),
            target("second", &["src/a.js"]),
            target("third", &["src/b.js", "src/a.js"]),
        ];

        let reports = runner.run(targets, backend.clone(), backend.clone()).await;

        let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(reports.iter().all(|r| !r.is_failure()));
    }

    #[tokio::test]
    async fn continue_on_error_runs_everything() {
        let backend = backend();
        let runner = TargetRunner::new(1, FailureStrategy::ContinueOnError);
        let targets = vec![
            target("one", &["src/a.js"]),
            target("broken", &["src/bad.js"]),
            target("three", &["src/a.js", "src/b.js"]),
        ];

        let reports = runner.run(targets, backend.clone(), backend.clone()).await;

        assert!(!reports[0].is_failure());
        assert!(matches!(
            reports[1].error(),
            Some(ConcatError::DanglingDependency { .. })
        ));
        assert!(!reports[2].is_failure());
        assert_eq!(backend.written("dist/one.js").as_deref(), Some("A"));
        assert_eq!(backend.written("dist/broken.js"), None);
        assert_eq!(
            backend.written("dist/three.js"),
            Some(format!("A{DEFAULT_SEPARATOR}// depends \"a.js\"\nB"))
        );
    }

    #[tokio::test]
    async fn fail_fast_skips_targets_not_yet_started() {
        let backend = backend();
        let runner = TargetRunner::new(1, FailureStrategy::FailFast);
        let targets = vec![
            target("one", &["src/a.js"]),
            target("broken", &["src/bad.js"]),
            target("three", &["src/a.js"]),
        ];

        let reports = runner.run(targets, backend.clone(), backend.clone()).await;

        assert!(!reports[0].is_failure());
        assert!(reports[1].is_failure());
        assert!(matches!(reports[2].status, TargetStatus::Skipped));
        assert_eq!(backend.written_count(), 1);
    }

    #[tokio::test]
    async fn shared_cache_reads_each_source_once() {
        let backend = backend();
        let cached = Arc::new(CachedSource::new(backend.clone()));
        let runner = TargetRunner::new(1, FailureStrategy::ContinueOnError);
        let targets = vec![
            target("one", &["src/a.js", "src/b.js"]),
            target("two", &["src/a.js"]),
        ];

        let reports = runner.run(targets, cached.clone(), backend.clone()).await;

        assert!(reports.iter().all(|r| !r.is_failure()));
        assert_eq!(cached.cached_len(), 2);
        assert_eq!(backend.reads().len(), 2);
    }

    #[tokio::test]
    async fn later_targets_read_what_earlier_targets_wrote() {
        let temp = TempDir::new().unwrap();
        let generated = temp.path().join("gen.js");
        let fresh = temp.path().join("fresh.js");
        fs::write(&generated, "OLD").unwrap();
        fs::write(&fresh, "NEW").unwrap();

        let cached = Arc::new(CachedSource::new(FsBackend::new()));
        let sink = Arc::new(cached.evicting(FsBackend::new()));
        let targets = vec![
            ConcatTarget::new("read_first", temp.path().join("first.js"), [generated.clone()]),
            ConcatTarget::new("regenerate", &generated, [fresh.clone()]),
            ConcatTarget::new("consume", temp.path().join("consumed.js"), [generated.clone()]),
        ];

        let reports = TargetRunner::new(1, FailureStrategy::ContinueOnError)
            .run(targets, cached, sink)
            .await;

        let contents: Vec<_> = reports
            .iter()
            .map(|r| r.output().map(|o| o.contents.as_str()))
            .collect();
        assert_eq!(contents, vec![Some("OLD"), Some("NEW"), Some("NEW")]);
        assert_eq!(fs::read_to_string(temp.path().join("consumed.js")).unwrap(), "NEW");
    }

    #[tokio::test]
    async fn no_targets_no_reports() {
        let backend = backend();
        let reports = TargetRunner::default()
            .run(Vec::new(), backend.clone(), backend.clone())
            .await;
        assert!(reports.is_empty());
    }

    #[test]
    fn zero_concurrency_is_clamped() {
        assert_eq!(TargetRunner::new(0, FailureStrategy::FailFast).max_concurrency(), 1);
    }
}
