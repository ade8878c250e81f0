// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter usage counting.
//!
//! [`split`](crate::split) reports every filter it builds to a
//! [`FilterMetrics`] implementation. Exporting the counts is up to the
//! caller; [`FilterUsage`] keeps them in memory.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::key::Key;

/// Receives one increment per successfully built filter.
pub trait FilterMetrics: Send + Sync {
    fn increment(&self, key: Key);
}

/// Discards all increments.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl FilterMetrics for NoopMetrics {
    fn increment(&self, _key: Key) {}
}

/// Lock-free per-key counters.
#[derive(Debug, Default)]
pub struct FilterUsage {
    counts: [AtomicU64; Key::COUNT],
}

impl FilterUsage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, key: Key) -> u64 {
        self.counts[key.index()].load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    /// Current counts for every key, in [`Key::ALL`] order.
    pub fn snapshot(&self) -> Vec<(Key, u64)> {
        Key::ALL.iter().map(|&key| (key, self.count(key))).collect()
    }
}

impl FilterMetrics for FilterUsage {
    fn increment(&self, key: Key) {
        self.counts[key.index()].fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
