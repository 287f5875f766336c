//! Cleaning and display ordering of decoded items
//!
//! Both functions are pure: no I/O, no shared state, new sequences out. The
//! display order is fully deterministic — grouping goes through a `BTreeMap`
//! so category order never depends on the iteration order of an unordered
//! map, and the per-bucket sort is stable so equal ids keep their input
//! order.

use crate::types::Item;

use std::collections::BTreeMap;
use tracing::debug;

/// Drop items with a blank display name
///
/// This is the defined cleaning step, not an error condition; dropped items
/// are not reported. The filter is stable — surviving items keep their
/// relative order.
pub fn retain_named(items: Vec<Item>) -> Vec<Item> {
    let before = items.len();
    let kept: Vec<Item> = items.into_iter().filter(|item| !item.name.is_empty()).collect();
    debug!(kept = kept.len(), dropped = before - kept.len(), "filtered blank names");
    kept
}

/// Order items for display: categories ascending, ids ascending within each
///
/// The input is partitioned into buckets keyed by `list_id` (insertion order
/// preserved within a bucket), buckets are visited in ascending key order,
/// each bucket is stable-sorted by `id`, and the sorted buckets are
/// concatenated. Items sharing both `list_id` and `id` keep their input
/// order — the tie-break when ids collide.
///
/// Runs in O(n log n); identical input always produces identical output.
pub fn order_for_display(items: Vec<Item>) -> Vec<Item> {
    let count = items.len();

    // BTreeMap keeps category keys ascending; Vec push keeps insertion order.
    let mut buckets: BTreeMap<i64, Vec<Item>> = BTreeMap::new();
    for item in items {
        buckets.entry(item.list_id).or_default().push(item);
    }

    let categories = buckets.len();
    let mut ordered = Vec::with_capacity(count);
    for (_, mut bucket) in buckets {
        // sort_by_key is stable, preserving input order for duplicate ids
        bucket.sort_by_key(|item| item.id);
        ordered.extend(bucket);
    }

    debug!(items = count, categories, "ordered items for display");
    ordered
}
