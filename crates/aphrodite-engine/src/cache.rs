//! Memoization around [`ChartEngine`].
//!
//! Analysis is a deterministic function of its input, so results can be
//! reused for identical inputs. The cache owns all mutable state; the engine
//! it wraps stays pure.

use crate::chart::{ChartAnalysis, ChartEngine, ChartInput};
use crate::error::Result;
use crate::western::Body;
use log::debug;
use std::collections::HashMap;
use std::sync::Mutex;

const DEFAULT_CAPACITY: usize = 1024;

/// Exact identity of a chart input: bodies in order plus float bit patterns
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartKey {
    positions: Vec<(Body, u64, u64)>,
    cusps: [u64; 12],
}

impl ChartKey {
    pub fn from_input(input: &ChartInput) -> Self {
        let mut positions: Vec<(Body, u64, u64)> = input
            .positions
            .iter()
            .map(|p| (p.body, canonical_bits(p.longitude), canonical_bits(p.speed)))
            .collect();
        positions.sort();

        let mut cusps = [0u64; 12];
        for (slot, cusp) in cusps.iter_mut().zip(input.cusps.cusps()) {
            *slot = canonical_bits(*cusp);
        }
        Self { positions, cusps }
    }
}

// -0.0 and 0.0 describe the same position
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Thread-safe result cache. When full, it starts over empty.
#[derive(Debug)]
pub struct ChartCache {
    engine: ChartEngine,
    capacity: usize,
    entries: Mutex<HashMap<ChartKey, ChartAnalysis>>,
}

impl ChartCache {
    pub fn new(engine: ChartEngine) -> Self {
        Self::with_capacity(engine, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(engine: ChartEngine, capacity: usize) -> Self {
        Self {
            engine,
            capacity: capacity.max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn engine(&self) -> &ChartEngine {
        &self.engine
    }

    /// Cached analysis for `input`, computing it on a miss.
    ///
    /// Errors are not cached.
    pub fn analyze(&self, input: &ChartInput) -> Result<ChartAnalysis> {
        let key = ChartKey::from_input(input);
        if let Some(hit) = self.lock().get(&key) {
            return Ok(hit.clone());
        }

        // computed outside the lock; concurrent misses on one key just race to insert
        let analysis = self.engine.analyze(input)?;

        let mut entries = self.lock();
        if entries.len() >= self.capacity {
            debug!("chart cache full ({} entries), clearing", entries.len());
            entries.clear();
        }
        entries.insert(key, analysis.clone());
        Ok(analysis)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ChartKey, ChartAnalysis>> {
        // entries are only ever whole values, so a poisoned map is still usable
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
