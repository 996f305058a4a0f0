use std::collections::HashSet;
use std::hash::Hash;

/// Maximum number of values bound into a single `= ANY(...)` filter.
///
/// Mirrors the 30-value cap of the original document store's "in" queries:
/// callers split larger id sets into chunks and merge the partial results.
pub const MAX_IN_FILTER: usize = 30;

/// Splits an id set into filter-sized chunks. Empty input yields no chunks.
pub fn chunks<T>(ids: &[T]) -> std::slice::Chunks<'_, T> {
    ids.chunks(MAX_IN_FILTER)
}

/// Merges per-chunk result batches, dropping rows whose key was already seen.
pub fn merge_unique<T, K, F>(batches: Vec<Vec<T>>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for batch in batches {
        for row in batch {
            if seen.insert(key(&row)) {
                merged.push(row);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_splits_at_filter_cap() {
        let ids: Vec<u32> = (0..45).collect();
        let parts: Vec<&[u32]> = chunks(&ids).collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 30);
        assert_eq!(parts[1].len(), 15);
    }

    #[test]
    fn test_chunks_empty_input() {
        let ids: Vec<u32> = Vec::new();
        assert_eq!(chunks(&ids).count(), 0);
    }

    #[test]
    fn test_chunks_exact_multiple() {
        let ids: Vec<u32> = (0..60).collect();
        let parts: Vec<&[u32]> = chunks(&ids).collect();
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| p.len() == 30));
    }

    #[test]
    fn test_merge_unique_deduplicates_by_key() {
        let batches = vec![vec![(1, "a"), (2, "b")], vec![(2, "dup"), (3, "c")]];
        let merged = merge_unique(batches, |row| row.0);
        assert_eq!(merged, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn test_merge_unique_preserves_batch_order() {
        let batches = vec![vec![3, 1], vec![2, 1]];
        let merged = merge_unique(batches, |&n| n);
        assert_eq!(merged, vec![3, 1, 2]);
    }
}
