//! # Docsite Registry
//!
//! The document registry backing the documentation site: three named,
//! ordered collections of article records plus a merged view for search.
//!
//! ## Layout
//!
//! ```text
//! DocStore
//!     │
//!     ├──> modes         (ask-mode, edit-mode, agent-mode, plan-mode)
//!     ├──> instructions  (prompt-engineering, slash-commands)
//!     └──> agents        (creating-agents)
//! ```
//!
//! Collections are immutable after construction. Id uniqueness across the
//! union is a best-effort invariant: duplicates are logged as warnings and
//! the first-registered record wins for lookup, construction never fails.
//! Article bodies are not embedded; they are loaded lazily and attached via
//! [`DocRecord::with_body`], which copies the record.
//!
//! ## Example
//!
//! ```
//! use docsite_registry::DocStore;
//!
//! let store = DocStore::builtin();
//! let doc = store.lookup("ask-mode").expect("shipped article");
//! assert_eq!(doc.title, "Ask Mode");
//! ```

mod data;
mod error;
mod store;
mod types;

pub use error::{RegistryError, Result};
pub use store::DocStore;
pub use types::{CodeExample, DocCategory, DocRecord, RelatedLink};
