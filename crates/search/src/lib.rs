//! # Docsite Search
//!
//! Fuzzy search over the document registry, and resolution of a hit back to
//! a navigable route.
//!
//! ```text
//! DocStore ──> SearchIndex::build (title / description / body-if-loaded)
//!                  │
//!     query ──────>│ search ──> Vec<SearchMatch>   (top 5, typo tolerant)
//!                  │
//!       hit ──────>│ resolve ──> Route             (home on unknown ids)
//! ```
//!
//! Nothing here is fallible: short and gibberish queries come back empty,
//! and resolution degrades to the home route.

mod index;
mod resolver;

pub use index::{MatchField, SearchIndex, SearchMatch, MAX_RESULTS, MIN_QUERY_CHARS};
pub use resolver::resolve;
