pub mod cache_store;
pub mod content_source;

pub use cache_store::{CacheStore, FileCacheStore, InMemoryCacheStore};
pub use content_source::{ContentSource, HttpContentSource};
