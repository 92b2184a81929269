use crate::error::Result;
use crate::snapshot::Snapshot;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Explicit time-boxed cache for parsed snapshots.
///
/// Parsing is a pure function of document content, so serving a snapshot a
/// little stale is always safe. The cache is plain owned state: callers
/// decide where it lives and how it is shared (the server keeps one behind
/// a mutex). A zero TTL disables caching.
#[derive(Debug)]
pub struct SnapshotCache {
    ttl: Duration,
    entry: Option<(Instant, Arc<Snapshot>)>,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached snapshot if it is still fresh, otherwise rebuild it
    /// with `refresh` and cache the result. A failed refresh leaves any
    /// previous entry in place.
    pub fn get_or_refresh<F>(&mut self, refresh: F) -> Result<Arc<Snapshot>>
    where
        F: FnOnce() -> Result<Snapshot>,
    {
        if let Some((cached_at, snapshot)) = &self.entry {
            if cached_at.elapsed() < self.ttl {
                return Ok(Arc::clone(snapshot));
            }
        }

        let snapshot = Arc::new(refresh()?);
        self.entry = Some((Instant::now(), Arc::clone(&snapshot)));
        tracing::debug!(tools = snapshot.tools.len(), "snapshot cache refreshed");
        Ok(snapshot)
    }

    /// Drop the cached entry so the next read reparses.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
