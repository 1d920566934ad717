//! # memlru
//!
//! Fixed-capacity, thread-safe LRU cache with O(1) `get` and `put`.
//!
//! ## Architecture
//! - **Key index**: AHash-backed `HashMap` for O(1) exact-key lookup
//! - **Recency list**: arena-backed doubly linked list for O(1) promotion
//!   and eviction, linked by stable indices instead of pointers
//! - **Facade**: a single `parking_lot::RwLock` guards both structures, so
//!   no caller ever observes them out of sync
//!
//! Reads count as touches: a successful `get` promotes the entry to
//! most-recently-used, which is why the cache holds the hottest working set
//! rather than the most recently written one.
//!
//! ```
//! use memlru::LruCache;
//!
//! let cache = LruCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3); // evicts "b", the least recently touched entry
//!
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.get(&"a"), Some(1));
//! assert_eq!(cache.get(&"c"), Some(3));
//! ```

#![warn(missing_docs)]

mod cache;
mod error;
mod list;
mod stats;
mod traits;

pub use cache::LruCache;
pub use error::{Error, Result};
pub use stats::CacheStats;
pub use traits::Cache;
