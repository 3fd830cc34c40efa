// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use crate::traits::{OutputSink, SourceProvider};

type TextCache = Arc<RwLock<HashMap<PathBuf, Arc<str>>>>;

/// Raw-text cache in front of another provider.
///
/// Several targets often list the same sources; each path is read from the
/// inner provider once and shared afterwards. A destination written through
/// [`CachedSource::evicting`] is dropped from the cache, so a target that reads
/// another target's output sees the new text. Existence and directory checks
/// always go to the inner provider.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    cache: TextCache,
}

/// Output sink that evicts every destination it writes from a [`CachedSource`].
#[derive(Debug)]
pub struct EvictingSink<K> {
    inner: K,
    cache: TextCache,
}

impl<S: SourceProvider> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Wrap `sink` so its writes invalidate this cache.
    pub fn evicting<K: OutputSink>(&self, sink: K) -> EvictingSink<K> {
        EvictingSink {
            inner: sink,
            cache: Arc::clone(&self.cache),
        }
    }

    /// Forget the cached text for `path`, if any.
    pub fn invalidate(&self, path: &Path) {
        write_lock(&self.cache).remove(&cache_key(path));
    }

    /// Number of distinct paths cached so far.
    pub fn cached_len(&self) -> usize {
        match self.cache.read() {
            Ok(cache) => cache.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: SourceProvider> SourceProvider for CachedSource<S> {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn read(&self, path: &Path) -> io::Result<Arc<str>> {
        let key = cache_key(path);
        let hit = match self.cache.read() {
            Ok(cache) => cache.get(&key).cloned(),
            Err(poisoned) => poisoned.into_inner().get(&key).cloned(),
        };
        if let Some(text) = hit {
            return Ok(text);
        }

        let text = self.inner.read(path)?;
        let mut cache = write_lock(&self.cache);
        // A concurrent reader may have filled the slot first; keep that copy.
        let entry = cache.entry(key).or_insert(text);
        Ok(entry.clone())
    }
}

impl<K: OutputSink> OutputSink for EvictingSink<K> {
    fn write(&self, dest: &Path, contents: &str) -> io::Result<()> {
        let result = self.inner.write(dest, contents);
        // Evict even on failure: a partial write may have changed the file.
        write_lock(&self.cache).remove(&cache_key(dest));
        result
    }
}

/// `./a.js` and `a.js` share one entry.
fn cache_key(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn write_lock(cache: &TextCache) -> RwLockWriteGuard<'_, HashMap<PathBuf, Arc<str>>> {
    match cache.write() {
        Ok(cache) => cache,
        Err(poisoned) => poisoned.into_inner(),
    }
}
