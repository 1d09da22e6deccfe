use crate::error::{ContentError, Result};
use async_trait::async_trait;
use docsite_registry::{DocCategory, DocRecord};
use std::collections::HashMap;
use std::path::PathBuf;

/// Source of full article bodies, addressed by category and document id
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch the body text for one document
    async fn fetch(&self, category: DocCategory, id: &str) -> Result<String>;
}

/// Fetch a record's body and return a copy carrying it.
///
/// The record handed in is untouched, so a caller whose view went away
/// before the fetch resolved can simply drop the returned copy; there is
/// nothing to cancel or roll back.
pub async fn hydrate<P>(provider: &P, category: DocCategory, record: &DocRecord) -> Result<DocRecord>
where
    P: ContentProvider + ?Sized,
{
    let body = provider.fetch(category, &record.id).await?;
    Ok(record.with_body(body))
}

/// In-memory provider serving canned bodies
#[derive(Debug, Default)]
pub struct StaticContentProvider {
    entries: HashMap<(DocCategory, String), String>,
}

impl StaticContentProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register a body
    #[must_use]
    pub fn with(
        mut self,
        category: DocCategory,
        id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        self.entries.insert((category, id.into()), body.into());
        self
    }
}

#[async_trait]
impl ContentProvider for StaticContentProvider {
    async fn fetch(&self, category: DocCategory, id: &str) -> Result<String> {
        self.entries
            .get(&(category, id.to_string()))
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                path: PathBuf::from(format!("{}/{id}.md", category.as_str())),
            })
    }
}
