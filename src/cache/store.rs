//! Expiring in-memory store for raw API response bodies
//!
//! Provides a `ResponseCache` that memoizes response bytes by request URL and
//! sweeps out stale entries from a background task. Lookups and inserts are
//! safe to call concurrently with the sweeper; neither can fail.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Tuning knobs for the cache, both caller-supplied
///
/// The sweep cadence and the staleness threshold are independent: an entry
/// becomes eligible for eviction once its age reaches `stale_after`, and is
/// actually removed by the next sweep after that.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// How often the background sweeper scans the entry set
    pub sweep_interval: Duration,
    /// Age at which an entry becomes eligible for eviction
    pub stale_after: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_interval: Duration::from_secs(5),
            stale_after: Duration::from_secs(30),
        }
    }
}

/// A single cached response body
///
/// Never mutated after insertion; overwriting a key replaces the entry
/// wholesale, timestamp included.
#[derive(Debug, Clone)]
struct CacheEntry {
    /// Raw bytes of a completed response
    payload: Vec<u8>,
    /// Insertion time, used only to compute age
    created_at: Instant,
}

type EntryMap = HashMap<String, CacheEntry>;

/// In-memory response cache with background expiry
///
/// Owns its entry map outright; callers only exchange keys and byte vectors
/// with it and never hold references into the map. The sweeper task is owned
/// too: [`ResponseCache::close`] signals it and waits for it to finish, and
/// simply dropping the cache stops it as well (the shutdown channel closes),
/// so no task outlives the value.
#[derive(Debug)]
pub struct ResponseCache {
    /// Entries keyed by request URL, guarded for shared reads
    entries: Arc<RwLock<EntryMap>>,
    /// Stop signal for the sweeper; channel closure works the same way
    shutdown_tx: mpsc::Sender<()>,
    /// The sweeper task, awaited by `close`
    sweeper: JoinHandle<()>,
}

impl ResponseCache {
    /// Creates an empty cache and starts its sweeper.
    ///
    /// Returns immediately; the sweeper's first scan happens one full
    /// `sweep_interval` after construction.
    pub fn new(config: CacheConfig) -> Self {
        let entries = Arc::new(RwLock::new(EntryMap::new()));
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let sweeper = spawn_sweeper(Arc::clone(&entries), config, shutdown_rx);

        Self {
            entries,
            shutdown_tx,
            sweeper,
        }
    }

    /// Looks up the payload cached under `key`.
    ///
    /// Returns `None` both for keys never inserted and for keys the sweeper
    /// has evicted; callers cannot tell the two apart. Entries are inserted
    /// as whole values, so a hit is always a fully-formed payload.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        read_entries(&self.entries)
            .get(key)
            .map(|entry| entry.payload.clone())
    }

    /// Inserts `payload` under `key`, replacing any prior entry.
    ///
    /// The new entry's age starts at zero regardless of what it replaced.
    /// Empty payloads are stored like any other and come back as hits.
    pub fn add(&self, key: impl Into<String>, payload: Vec<u8>) {
        let entry = CacheEntry {
            payload,
            created_at: Instant::now(),
        };
        write_entries(&self.entries).insert(key.into(), entry);
    }

    /// Number of entries currently stored
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        read_entries(&self.entries).len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stops the sweeper and waits for it to finish.
    pub async fn close(self) {
        let _ = self.shutdown_tx.send(()).await;
        let _ = self.sweeper.await;
    }
}

// A poisoned guard still wraps a usable map: entries are only ever inserted
// or removed as whole values, so recover the inner data instead of failing.
fn read_entries(entries: &RwLock<EntryMap>) -> RwLockReadGuard<'_, EntryMap> {
    entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_entries(entries: &RwLock<EntryMap>) -> RwLockWriteGuard<'_, EntryMap> {
    entries.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Spawns the background sweeper for a cache's entry map.
fn spawn_sweeper(
    entries: Arc<RwLock<EntryMap>>,
    config: CacheConfig,
    mut shutdown_rx: mpsc::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticks = tokio::time::interval(config.sweep_interval);
        // The first tick of an interval completes immediately; skip it so a
        // freshly built cache is not scanned at age zero.
        ticks.tick().await;

        loop {
            tokio::select! {
                _ = ticks.tick() => sweep(&entries, config.stale_after),
                _ = shutdown_rx.recv() => break,
            }
        }
    })
}

/// Removes every entry whose age has reached `stale_after`.
fn sweep(entries: &RwLock<EntryMap>, stale_after: Duration) {
    let now = Instant::now();
    let mut entries = write_entries(entries);
    let before = entries.len();
    entries.retain(|_, entry| now.duration_since(entry.created_at) < stale_after);

    let evicted = before - entries.len();
    if evicted > 0 {
        tracing::debug!(evicted, remaining = entries.len(), "swept stale cache entries");
    }
}
