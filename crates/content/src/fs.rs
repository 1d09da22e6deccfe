use crate::error::{ContentError, Result};
use crate::provider::ContentProvider;
use async_trait::async_trait;
use docsite_registry::DocCategory;
use std::path::{Path, PathBuf};

/// Provider reading article bodies from `{base}/{category}/{id}.md`
pub struct FsContentProvider {
    base: PathBuf,
}

impl FsContentProvider {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// Resource address for one document
    #[must_use]
    pub fn path_for(&self, category: DocCategory, id: &str) -> PathBuf {
        self.base.join(category.as_str()).join(format!("{id}.md"))
    }
}

#[async_trait]
impl ContentProvider for FsContentProvider {
    async fn fetch(&self, category: DocCategory, id: &str) -> Result<String> {
        let path = self.path_for(category, id);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("Missing content resource {}", path.display());
                Err(ContentError::NotFound { path })
            }
            Err(e) => Err(e.into()),
        }
    }
}
