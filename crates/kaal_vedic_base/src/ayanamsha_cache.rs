//! Memoized ayanamsha lookups keyed by exact (jd, system).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};

/// Default number of entries kept before the map is cleared.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Read-heavy, write-on-miss ayanamsha cache.
///
/// Keys use the bit pattern of the TT Julian Date, so only identical
/// instants share an entry. When `capacity` is reached the map is cleared
/// wholesale; entries are cheap to recompute.
#[derive(Debug)]
pub struct AyanamshaCache {
    map: RwLock<HashMap<(u64, AyanamshaSystem), f64>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AyanamshaCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            map: RwLock::new(HashMap::with_capacity(capacity.min(1024))),
            capacity: capacity.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Ayanamsha in degrees, computed once per distinct key.
    pub fn get(&self, system: AyanamshaSystem, jd_tt: f64) -> f64 {
        let key = (jd_tt.to_bits(), system);
        if let Some(&v) = self.map.read().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return v;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = ayanamsha_deg(system, jd_tt);
        let mut map = self.map.write();
        if map.len() >= self.capacity {
            debug!(entries = map.len(), "ayanamsha cache full, clearing");
            map.clear();
        }
        map.insert(key, value);
        value
    }

    pub fn clear(&self) {
        self.map.write().clear();
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl Default for AyanamshaCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
