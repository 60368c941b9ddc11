//! Cache module for memoizing raw API responses in memory
//!
//! This module provides an expiring response cache keyed by request URL. The
//! command layer consults it before performing network I/O and inserts raw
//! response bodies after a miss; a background sweeper evicts entries once
//! they pass a staleness threshold. Nothing here interprets keys or payloads.

mod store;

pub use store::{CacheConfig, ResponseCache};
