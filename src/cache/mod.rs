mod store;

pub use store::{ResponseCache, cache_key};
