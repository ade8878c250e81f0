// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::sync::Arc;
use std::thread;

#[test]
fn new_usage_is_zero() {
    let usage = FilterUsage::new();
    assert_eq!(usage.total(), 0);
    assert!(usage.snapshot().iter().all(|(_, count)| *count == 0));
}

#[test]
fn increment_counts_per_key() {
    let usage = FilterUsage::new();
    usage.increment(Key::Stars);
    usage.increment(Key::Stars);
    usage.increment(Key::ProductType);

    assert_eq!(usage.count(Key::Stars), 2);
    assert_eq!(usage.count(Key::ProductType), 1);
    assert_eq!(usage.count(Key::Author), 0);
    assert_eq!(usage.total(), 3);
}

#[test]
fn snapshot_is_in_key_order() {
    let usage = FilterUsage::new();
    usage.increment(Key::License);
    let snapshot = usage.snapshot();
    let keys: Vec<Key> = snapshot.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, Key::ALL.to_vec());
    assert_eq!(snapshot[Key::License.index()], (Key::License, 1));
}

#[test]
fn concurrent_increments_are_not_lost() {
    let usage = Arc::new(FilterUsage::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let usage = Arc::clone(&usage);
            thread::spawn(move || {
                for _ in 0..1000 {
                    usage.increment(Key::Platform);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(usage.count(Key::Platform), 8000);
}

#[test]
fn noop_metrics_accepts_increments() {
    NoopMetrics.increment(Key::Author);
}
