// Cache module for process-local caching.
// Stores the aggregated story list behind a TTL so repeat requests skip
// the upstream API.

pub mod store;

pub use store::{MemoryCache, StoryCache};
