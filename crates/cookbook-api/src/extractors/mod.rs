//! Axum extractors for request handling
//!
//! Custom extractors for body validation and query paging.

mod query;
mod validated;

pub use query::{ListQuery, SearchQuery};
pub use validated::ValidatedJson;
