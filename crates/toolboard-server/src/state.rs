use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use toolboard_core::cache::SnapshotCache;
use toolboard_core::config::Config;
use toolboard_core::snapshot::Snapshot;
use toolboard_core::Result;

/// Shared application state passed to all route handlers.
///
/// The snapshot cache lives here, behind a mutex, so concurrent requests
/// within the TTL share one parse of the documents.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub config: Config,
    cache: Arc<Mutex<SnapshotCache>>,
}

impl AppState {
    pub fn new(root: PathBuf) -> Result<Self> {
        let config = Config::load(&root)?;
        let cache = SnapshotCache::new(Duration::from_secs(config.cache_ttl_secs));
        Ok(Self {
            root,
            config,
            cache: Arc::new(Mutex::new(cache)),
        })
    }

    /// Current snapshot, served from the cache when fresh. Blocking: call
    /// from `spawn_blocking` in handlers.
    pub fn snapshot(&self) -> Result<Arc<Snapshot>> {
        let mut cache = self.cache.lock().expect("snapshot cache poisoned");
        cache.get_or_refresh(|| Snapshot::load(&self.root, &self.config))
    }
}
