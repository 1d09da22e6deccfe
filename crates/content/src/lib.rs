//! # Docsite Content
//!
//! Lazy loading of article bodies. The registry ships metadata only; each
//! body is fetched on demand through a [`ContentProvider`] and attached to a
//! copy of the record.
//!
//! ```text
//! DocRecord (no body)
//!     │
//!     ├──> ContentProvider::fetch(category, id)
//!     │        └─> {base}/{category}/{id}.md
//!     │
//!     └──> hydrate ──> DocRecord (body loaded)
//! ```
//!
//! A missing resource is a [`ContentError::NotFound`], logged as a warning;
//! callers surface it as an empty content area rather than failing the page.
//!
//! ## Example
//!
//! ```no_run
//! use docsite_content::{hydrate, FsContentProvider};
//! use docsite_registry::{DocCategory, DocStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = DocStore::builtin();
//!     let provider = FsContentProvider::new("content");
//!
//!     let doc = store.lookup("ask-mode").expect("shipped article");
//!     let loaded = hydrate(&provider, DocCategory::Modes, doc).await?;
//!     println!("{}", loaded.body.expect("hydrated body"));
//!     Ok(())
//! }
//! ```

mod error;
mod fs;
mod provider;

pub use error::{ContentError, Result};
pub use fs::FsContentProvider;
pub use provider::{hydrate, ContentProvider, StaticContentProvider};
