//! Single-slot, time-bounded cost-matrix cache.
//!
//! Keys are `(hash(from), hash(to), mode)`.  Position lists are hashed with
//! `FxHasher` over the IEEE bit patterns of every coordinate in order, so a
//! permutation of the same points is a different key.  Each miss
//! overwrites the slot; entries older than `CACHE_LIFETIME_SECS` are misses.
//!
//! Time is supplied by the caller (the driver's `TransitionClock`), never
//! read from the wall clock.

use std::hash::Hasher;

use fm_core::AssignmentMode;
use fm_core::tuning::CACHE_LIFETIME_SECS;
use glam::Vec3;
use rustc_hash::FxHasher;

use crate::cost::CostMatrix;

/// Order-sensitive hash of a position list.
pub fn hash_positions(points: &[Vec3]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write_usize(points.len());
    for p in points {
        hasher.write_u32(p.x.to_bits());
        hasher.write_u32(p.y.to_bits());
        hasher.write_u32(p.z.to_bits());
    }
    hasher.finish()
}

/// Cache key for one `(from, to, mode)` triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub from: u64,
    pub to: u64,
    pub mode: AssignmentMode,
}

impl CacheKey {
    pub fn new(from: &[Vec3], to: &[Vec3], mode: AssignmentMode) -> Self {
        Self { from: hash_positions(from), to: hash_positions(to), mode }
    }
}

struct CacheEntry {
    key: CacheKey,
    matrix: CostMatrix,
    stamp: f64,
}

/// One cached matrix plus hit/miss counters.
#[derive(Default)]
pub struct CostMatrixCache {
    entry: Option<CacheEntry>,
    hits: u64,
    misses: u64,
}

impl CostMatrixCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached matrix for `key`, if it was stored less than
    /// `CACHE_LIFETIME_SECS` before `now`.
    pub fn lookup(&self, key: &CacheKey, now: f64) -> Option<&CostMatrix> {
        self.entry
            .as_ref()
            .filter(|e| e.key == *key && now - e.stamp < CACHE_LIFETIME_SECS)
            .map(|e| &e.matrix)
    }

    /// Replace the cached entry.
    pub fn store(&mut self, key: CacheKey, matrix: CostMatrix, now: f64) {
        self.entry = Some(CacheEntry { key, matrix, stamp: now });
    }

    /// Cached matrix for `key`, computing and storing it on a miss.
    pub fn get_or_compute<F>(&mut self, key: CacheKey, now: f64, compute: F) -> &CostMatrix
    where
        F: FnOnce() -> CostMatrix,
    {
        if self.lookup(&key, now).is_some() {
            self.hits += 1;
            log::debug!("cost matrix cache hit ({})", key.mode);
        } else {
            self.misses += 1;
            log::debug!("cost matrix cache miss ({}), computing", key.mode);
            self.entry = None;
        }
        let entry = self.entry.get_or_insert_with(|| CacheEntry { key, matrix: compute(), stamp: now });
        &entry.matrix
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
