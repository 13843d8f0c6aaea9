//! # Chainmap
//!
//! A hash map with separate-chaining collision resolution, built on a
//! hand-rolled singly linked list.
//!
//! This crate provides two containers:
//!
//! - [`ChainedHashMap`]: a string-keyed hash map that hashes with the
//!   DJB2 function, stores colliding entries in per-bucket chains, and
//!   doubles its capacity once occupancy crosses a configurable load
//!   factor
//! - [`LinkedList`]: the singly linked list the buckets are made of,
//!   usable on its own
//!
//! Both are single-threaded, in-memory containers with no dependency on
//! the standard library's map types for their storage.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.insert("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Growth
//!
//! A map created with [`ChainedHashMap::new`] starts with 16 bucket
//! slots and a load factor of 0.75. The insert that pushes the
//! occupancy ratio past the threshold rebuilds the table at double the
//! capacity, rehashing every stored key:
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new();
//! for i in 0..13 {
//!     map.insert(format!("key-{i}"), i);
//! }
//!
//! // The 13th insert pushed 13/16 past 0.75
//! assert_eq!(map.capacity(), 32);
//! assert_eq!(map.len(), 13);
//! ```
//!
//! ## The list underneath
//!
//! ```rust
//! use chainmap::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back(1);
//! list.push_back(3);
//! list.insert_at(1, 2).unwrap();
//! list.push_front(0);
//!
//! assert_eq!(list.to_string(), "( 0 ) -> ( 1 ) -> ( 2 ) -> ( 3 ) -> null");
//! ```

/// Module implementing the separate-chaining hash map
mod chained_hashmap;
/// Module implementing the singly linked list the buckets chain into
mod linked_list;
/// Utility functions and traits for the hash map
mod utils;

pub use chained_hashmap::{ChainedHashMap, Iter, TraceEvent};
pub use linked_list::{IntoIter, Iter as ListIter, IterMut, LinkedList, ListError};
pub use utils::{MapExtensions, from_iter};
