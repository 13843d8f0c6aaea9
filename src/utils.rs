//! Utility functions and traits for `ChainedHashMap`

use crate::ChainedHashMap;

/// Extension trait providing owned snapshots of a map's contents.
///
/// Each method walks every bucket and every chain node once and returns
/// an owned `Vec`, so a snapshot taken before a mutation is unaffected
/// by it. There is no ordering guarantee across buckets; within a
/// bucket, entries appear in insertion order.
pub trait MapExtensions<V> {
    /// Returns the keys of the hash map as a Vec
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the hash map as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns the key-value pairs of the hash map as a Vec
    fn entries(&self) -> Vec<(String, V)>;
}

impl<V> MapExtensions<V> for ChainedHashMap<V>
where
    V: Clone,
{
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn entries(&self) -> Vec<(String, V)> {
        self.iter()
            .map(|(key, value)| (key.to_owned(), value.clone()))
            .collect()
    }
}

/// Creates a `ChainedHashMap` from an iterator of key-value pairs
pub fn from_iter<V, I>(iter: I) -> ChainedHashMap<V>
where
    I: IntoIterator<Item = (String, V)>,
{
    let mut map = ChainedHashMap::new();

    for (key, value) in iter {
        map.insert(key, value);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChainedHashMap;

    #[test]
    fn test_from_iter() {
        let data = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];

        let map = from_iter(data);

        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.get("c"), Some(&3));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_keys_and_values() {
        let mut map = ChainedHashMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        map.insert("c".to_string(), 3);

        let mut keys = map.keys();
        keys.sort(); // Sort for predictable comparison

        let mut values = map.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_entries_symmetry() {
        let mut map = ChainedHashMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        map.insert("c".to_string(), 3);

        let entries = map.entries();
        assert_eq!(entries.len(), map.keys().len());
        assert_eq!(entries.len(), map.values().len());
        assert_eq!(entries.len(), map.len());

        for (key, value) in &entries {
            assert_eq!(map.get(key), Some(value));
        }
    }

    #[test]
    fn test_snapshots_are_unaffected_by_later_mutation() {
        let mut map = ChainedHashMap::new();
        map.insert("a".to_string(), 1);

        let keys = map.keys();
        let entries = map.entries();
        map.insert("b".to_string(), 2);
        map.remove("a");

        assert_eq!(keys, vec!["a".to_string()]);
        assert_eq!(entries, vec![("a".to_string(), 1)]);
    }

    #[test]
    fn test_empty_map_snapshots() {
        let map: ChainedHashMap<u32> = ChainedHashMap::new();

        assert!(map.keys().is_empty());
        assert!(map.values().is_empty());
        assert!(map.entries().is_empty());
    }
}
