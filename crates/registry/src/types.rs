use serde::{Deserialize, Serialize};

/// One documentation article: metadata plus optionally loaded content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocRecord {
    /// Stable identifier, unique across all collections
    pub id: String,

    /// Display title
    pub title: String,

    /// Short summary shown in navigation and search results
    pub description: String,

    /// Full article body, absent until lazily loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Code samples attached to the article
    #[serde(default)]
    pub examples: Vec<CodeExample>,

    /// Short practical hints
    #[serde(default)]
    pub tips: Vec<String>,

    /// Links to related articles
    #[serde(default)]
    pub related_links: Vec<RelatedLink>,
}

impl DocRecord {
    /// Create a record with the mandatory fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            body: None,
            examples: Vec::new(),
            tips: Vec::new(),
            related_links: Vec::new(),
        }
    }

    /// Builder: attach a code example
    #[must_use]
    pub fn example(mut self, example: CodeExample) -> Self {
        self.examples.push(example);
        self
    }

    /// Builder: add a tip
    #[must_use]
    pub fn tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }

    /// Builder: add a related link
    #[must_use]
    pub fn related(mut self, title: impl Into<String>, path: impl Into<String>) -> Self {
        self.related_links.push(RelatedLink {
            title: title.into(),
            path: path.into(),
        });
        self
    }

    /// Copy of this record carrying the given body.
    /// Records are never mutated in place after construction; loading a body
    /// produces a fresh record.
    #[must_use]
    pub fn with_body(&self, body: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.body = Some(body.into());
        copy
    }

    /// Check whether the body has been loaded
    #[must_use]
    pub const fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

/// A code sample with its display metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeExample {
    pub title: String,

    /// Sample text, shown verbatim
    pub code: String,

    /// Syntax-highlighting language tag
    pub language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CodeExample {
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            language: language.into(),
            description: None,
        }
    }

    /// Builder: set the optional caption
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Link from one article to another
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelatedLink {
    pub title: String,
    pub path: String,
}

impl RelatedLink {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// The three named collections a document can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocCategory {
    Modes,
    Instructions,
    Agents,
}

impl DocCategory {
    /// All categories in the fixed lookup/resolution order
    pub const ALL: [Self; 3] = [Self::Modes, Self::Instructions, Self::Agents];

    /// Name of the category, also the content subdirectory it is served from
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modes => "modes",
            Self::Instructions => "instructions",
            Self::Agents => "agents",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_builder() {
        let record = DocRecord::new("ask-mode", "Ask Mode", "Ask questions about code")
            .example(CodeExample::new("Sample", "fn main() {}", "rust"))
            .tip("Be specific")
            .related("Edit Mode", "/modes/edit-mode");

        assert_eq!(record.id, "ask-mode");
        assert_eq!(record.examples.len(), 1);
        assert_eq!(record.tips, vec!["Be specific".to_string()]);
        assert_eq!(record.related_links[0].path, "/modes/edit-mode");
        assert!(record.body.is_none());
    }

    #[test]
    fn test_with_body_leaves_original_untouched() {
        let record = DocRecord::new("ask-mode", "Ask Mode", "desc");
        let loaded = record.with_body("# Ask Mode\n\nBody text");

        assert!(!record.has_body());
        assert!(loaded.has_body());
        assert_eq!(loaded.id, record.id);
    }

    #[test]
    fn test_example_description_builder() {
        let example = CodeExample::new("Sample", "code", "plaintext").description("What it shows");
        assert_eq!(example.description.as_deref(), Some("What it shows"));
    }

    #[test]
    fn test_category_names() {
        assert_eq!(DocCategory::Modes.as_str(), "modes");
        assert_eq!(DocCategory::Instructions.as_str(), "instructions");
        assert_eq!(DocCategory::Agents.as_str(), "agents");
        assert_eq!(DocCategory::ALL.len(), 3);
    }
}
