pub mod catalog_filter;
pub mod kv_store;
pub mod pagination;
pub mod request_generation;

pub use catalog_filter::{filter_listings, CategoryFilter, FilterCriteria, LocationFilter};
pub use kv_store::{KeyValueStore, MemoryStore, StoreError};
pub use pagination::{paginate, PageResult};
pub use request_generation::{RequestGeneration, Ticket};
