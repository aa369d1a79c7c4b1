//! In-memory list filtering and grouping used by the listing screens.
//!
//! Every listing fetches a page of rows and narrows it locally; nothing
//! here goes back to the backend.

use std::collections::HashMap;
use std::hash::Hash;

/// Case-insensitive substring match of `query` against any of the given
/// display fields. A blank query matches everything.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Groups rows by a key, preserving the order in which keys are first
/// encountered. Used to section tables (attendance rows per grade,
/// prefects per rank).
pub fn group_by_key<T, K, F>(items: Vec<T>, key_of: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut order: Vec<K> = Vec::new();
    let mut buckets: HashMap<K, Vec<T>> = HashMap::new();

    for item in items {
        let key = key_of(&item);
        if !buckets.contains_key(&key) {
            order.push(key.clone());
        }
        buckets.entry(key).or_default().push(item);
    }

    order
        .into_iter()
        .map(|key| {
            let rows = buckets.remove(&key).unwrap_or_default();
            (key, rows)
        })
        .collect()
}
