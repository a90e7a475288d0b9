//! The query pipeline: sanitize, debounce, fetch.

pub mod debounce;
pub mod fetcher;
pub mod sanitize;
pub mod types;

pub use debounce::Debouncer;
pub use fetcher::{Fetcher, SearchBackend, SearchClient, parse_response};
pub use sanitize::sanitize;
pub use types::{Query, QuerySeq, ResultSet, SearchResult};
