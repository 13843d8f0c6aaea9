use crate::linked_list::{Iter as ListIter, LinkedList};
use std::mem;

/// Number of bucket slots a map created with `new` starts with
const DEFAULT_CAPACITY: usize = 16;

/// Growth threshold used when none is supplied
const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// DJB2 hash of a key, folded over its UTF-8 bytes with unsigned 32-bit
/// wraparound arithmetic. Depends on the key alone, never on the current
/// capacity of any map.
fn djb2(key: &str) -> u32 {
    key.bytes()
        .fold(5381_u32, |hash, byte| hash.wrapping_mul(33) ^ u32::from(byte))
}

/// A key/value pair stored as the value of a chain node
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// Event handed to the optional trace hook when the map changes shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// The bucket array was rebuilt at a larger capacity
    Resized {
        /// Capacity before the rebuild
        old_capacity: usize,
        /// Capacity after the rebuild
        new_capacity: usize,
        /// Number of keys migrated
        len: usize,
    },
    /// Every entry was dropped at an unchanged capacity
    Cleared {
        /// Capacity retained by the cleared map
        capacity: usize,
    },
}

/// A hash map that resolves collisions by chaining entries through a
/// singly linked list per bucket.
///
/// Keys are strings hashed with the DJB2 function over their UTF-8
/// bytes; values are opaque to the map. A bucket slot stays empty until
/// the first key lands in it, and the whole bucket array is rebuilt at
/// double the capacity once the number of stored keys pushes the
/// occupancy ratio past the configured load factor. Within a bucket,
/// entries keep their insertion order.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<V> {
    /// The bucket slots, each either empty or owning one chain
    buckets: Vec<Option<LinkedList<Entry<V>>>>,
    /// Current number of distinct keys in the map
    size: usize,
    /// Growth threshold for the `size / capacity` ratio
    load_factor_threshold: f64,
    /// Optional observer invoked on rehash and clear
    trace: Option<fn(&TraceEvent)>,
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(String, V)> for ChainedHashMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> ChainedHashMap<V> {
    /// Creates a new `ChainedHashMap` with the default capacity and
    /// load factor
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new `ChainedHashMap` with the specified initial
    /// capacity and the default load factor
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates a new `ChainedHashMap` with the specified initial
    /// capacity and growth threshold
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `load_factor` is not positive.
    #[must_use]
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1");
        assert!(load_factor > 0.0, "load factor must be positive");

        Self {
            buckets: Self::empty_buckets(capacity),
            size: 0,
            load_factor_threshold: load_factor,
            trace: None,
        }
    }

    /// Allocates `capacity` empty bucket slots
    fn empty_buckets(capacity: usize) -> Vec<Option<LinkedList<Entry<V>>>> {
        (0..capacity).map(|_| None).collect()
    }

    /// Derives the bucket slot for `key` under the current capacity.
    /// An index outside the table would mean the hashing or capacity
    /// logic is broken, which is unrecoverable.
    #[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
    fn bucket_index(&self, key: &str) -> usize {
        // capacity >= 1 is a constructor invariant
        let index = djb2(key) as usize % self.buckets.len();
        assert!(
            index < self.buckets.len(),
            "bucket index {index} out of range for capacity {}",
            self.buckets.len()
        );
        index
    }

    /// Whether the occupancy ratio has been pushed past the growth
    /// threshold
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn past_threshold(&self) -> bool {
        self.size as f64 / self.buckets.len() as f64 > self.load_factor_threshold
    }

    /// Insert a key-value pair into the hash map, returning the value
    /// previously stored under the key.
    ///
    /// An existing entry is overwritten in place without changing the
    /// key count. A fresh key is appended to its bucket chain, creating
    /// the chain on first use, and may trigger a rebuild of the table
    /// at double the capacity.
    #[allow(clippy::indexing_slicing)]
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let chain = self.buckets[index].get_or_insert_with(LinkedList::new);

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        chain.push_back(Entry { key, value });
        self.size = self.size.saturating_add(1);

        if self.past_threshold() {
            self.resize();
        }

        None
    }

    /// Rebuilds the table at double the capacity, moving every entry to
    /// the bucket its key hashes to under the new capacity. The key
    /// count is unchanged; no caller can observe a half-migrated table.
    #[allow(clippy::indexing_slicing)]
    fn resize(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity.saturating_mul(2);
        let old_buckets = mem::replace(&mut self.buckets, Self::empty_buckets(new_capacity));

        for chain in old_buckets.into_iter().flatten() {
            for entry in chain {
                let index = self.bucket_index(&entry.key);
                self.buckets[index]
                    .get_or_insert_with(LinkedList::new)
                    .push_back(entry);
            }
        }

        if let Some(trace) = self.trace {
            trace(&TraceEvent::Resized { old_capacity, new_capacity, len: self.size });
        }
    }

    /// Retrieve the value stored under `key`. A missing key is a normal
    /// outcome signalled by `None`, never a fault.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .as_ref()?
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Retrieve a mutable reference to the value stored under `key`
    #[allow(clippy::indexing_slicing)]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .as_mut()?
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if the map stores a value under `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove the entry stored under `key`, returning its value. The
    /// matching node is unlinked from its bucket chain and a chain left
    /// empty returns its slot to the lazy state. An absent key leaves
    /// the map untouched.
    #[allow(clippy::indexing_slicing)]
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let chain = self.buckets[index].as_mut()?;
        let position = chain.iter().position(|entry| entry.key == key)?;
        let entry = chain.remove_at(position).ok()?;
        let emptied = chain.is_empty();

        if emptied {
            self.buckets[index] = None;
        }
        self.size = self.size.saturating_sub(1);

        Some(entry.value)
    }

    /// Returns the number of distinct keys in the map. The count is
    /// tracked incrementally, so this never walks the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Clears the map, removing all key-value pairs. Every bucket slot
    /// returns to the empty state; capacity is retained.
    pub fn clear(&mut self) {
        for slot in &mut self.buckets {
            *slot = None;
        }
        self.size = 0;

        if let Some(trace) = self.trace {
            trace(&TraceEvent::Cleared { capacity: self.buckets.len() });
        }
    }

    /// Returns the number of bucket slots in the map
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current occupancy ratio of the map
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns the configured growth threshold
    #[must_use]
    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    /// Installs an observer invoked when the map rebuilds its table or
    /// is cleared. The map behaves the same with no hook installed.
    pub fn set_trace_hook(&mut self, hook: fn(&TraceEvent)) {
        self.trace = Some(hook);
    }

    /// Returns an iterator over the key-value pairs. Entries within a
    /// bucket appear in insertion order; there is no order across
    /// buckets.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: &self.buckets, index: 0, chain: None }
    }
}

/// Iterator over the key-value pairs of the hash map
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// The bucket slots being walked
    buckets: &'a [Option<LinkedList<Entry<V>>>],
    /// Position of the next bucket slot to open
    index: usize,
    /// Iterator over the chain currently being walked
    chain: Option<ListIter<'a, Entry<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = self.chain.as_mut() {
                if let Some(entry) = chain.next() {
                    return Some((entry.key.as_str(), &entry.value));
                }
            }

            let slot = self.buckets.get(self.index)?;
            self.index = self.index.saturating_add(1);
            self.chain = slot.as_ref().map(LinkedList::iter);
        }
    }
}
