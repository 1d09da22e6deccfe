use crate::error::Result;
use crate::types::{DocCategory, DocRecord};
use serde::Deserialize;
use std::collections::HashSet;

/// Immutable registry of the three document collections.
///
/// Constructed once at startup and passed by reference to consumers;
/// only the built-in dataset is process-wide.
#[derive(Debug, Clone, Default)]
pub struct DocStore {
    modes: Vec<DocRecord>,
    instructions: Vec<DocRecord>,
    agents: Vec<DocRecord>,
}

#[derive(Deserialize)]
struct RegistryDoc {
    #[serde(default)]
    modes: Vec<DocRecord>,
    #[serde(default)]
    instructions: Vec<DocRecord>,
    #[serde(default)]
    agents: Vec<DocRecord>,
}

impl DocStore {
    /// Build a store from the three collections.
    ///
    /// Id uniqueness across the union is best-effort: duplicates are logged
    /// and the first-registered record wins for lookup. Construction never
    /// fails.
    pub fn new(
        modes: Vec<DocRecord>,
        instructions: Vec<DocRecord>,
        agents: Vec<DocRecord>,
    ) -> Self {
        let store = Self {
            modes,
            instructions,
            agents,
        };
        for id in store.duplicate_ids() {
            log::warn!("Duplicate document id \"{id}\": first registration wins");
        }
        log::debug!("Document registry holds {} records", store.len());
        store
    }

    /// The dataset shipped with the site
    #[must_use]
    pub fn builtin() -> &'static Self {
        &crate::data::BUILTIN
    }

    /// Deserialize a registry from a JSON document carrying the three
    /// collections. Duplicate-id validation runs as in [`DocStore::new`].
    pub fn from_json(raw: &str) -> Result<Self> {
        let doc: RegistryDoc = serde_json::from_str(raw)?;
        Ok(Self::new(doc.modes, doc.instructions, doc.agents))
    }

    /// One named collection
    #[must_use]
    pub fn collection(&self, category: DocCategory) -> &[DocRecord] {
        match category {
            DocCategory::Modes => &self.modes,
            DocCategory::Instructions => &self.instructions,
            DocCategory::Agents => &self.agents,
        }
    }

    /// All records in the fixed modes, instructions, agents order
    pub fn merged(&self) -> impl Iterator<Item = &DocRecord> {
        self.modes
            .iter()
            .chain(self.instructions.iter())
            .chain(self.agents.iter())
    }

    /// Find a record by id. Linear scan, first match wins; unknown ids are
    /// `None`, never an error.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&DocRecord> {
        self.merged().find(|doc| doc.id == id)
    }

    /// Which collection holds this id, checked in the fixed order
    #[must_use]
    pub fn category_of(&self, id: &str) -> Option<DocCategory> {
        DocCategory::ALL
            .into_iter()
            .find(|category| self.collection(*category).iter().any(|doc| doc.id == id))
    }

    /// Ids registered more than once, in first-occurrence order
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for doc in self.merged() {
            if !seen.insert(doc.id.as_str()) && !duplicates.contains(&doc.id) {
                duplicates.push(doc.id.clone());
            }
        }
        duplicates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modes.len() + self.instructions.len() + self.agents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(id: &str, title: &str) -> DocRecord {
        DocRecord::new(id, title, format!("{title} description"))
    }

    fn sample_store() -> DocStore {
        DocStore::new(
            vec![doc("ask-mode", "Ask Mode"), doc("edit-mode", "Edit Mode")],
            vec![doc("prompt-engineering", "Prompt Engineering")],
            vec![doc("creating-agents", "Creating Agents")],
        )
    }

    #[test]
    fn test_lookup_returns_matching_record() {
        let store = sample_store();
        for id in ["ask-mode", "edit-mode", "prompt-engineering", "creating-agents"] {
            assert_eq!(store.lookup(id).map(|d| d.id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_lookup_unknown_id_is_none() {
        let store = sample_store();
        assert!(store.lookup("no-such-doc").is_none());
    }

    #[test]
    fn test_merged_order_is_modes_instructions_agents() {
        let store = sample_store();
        let ids: Vec<&str> = store.merged().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["ask-mode", "edit-mode", "prompt-engineering", "creating-agents"]
        );
    }

    #[test]
    fn test_category_of_checks_collections_in_order() {
        let store = sample_store();
        assert_eq!(store.category_of("ask-mode"), Some(DocCategory::Modes));
        assert_eq!(
            store.category_of("prompt-engineering"),
            Some(DocCategory::Instructions)
        );
        assert_eq!(store.category_of("creating-agents"), Some(DocCategory::Agents));
        assert_eq!(store.category_of("missing"), None);
    }

    #[test]
    fn test_duplicate_id_warns_and_first_wins() {
        let _ = env_logger::builder().is_test(true).try_init();
        let store = DocStore::new(
            vec![doc("ask-mode", "First")],
            vec![doc("ask-mode", "Second")],
            Vec::new(),
        );

        assert_eq!(store.duplicate_ids(), vec!["ask-mode".to_string()]);
        // Lookup still returns a usable record: the first-registered one.
        assert_eq!(store.lookup("ask-mode").map(|d| d.title.as_str()), Some("First"));
        assert_eq!(store.category_of("ask-mode"), Some(DocCategory::Modes));
    }

    #[test]
    fn test_from_json_minimal_records() {
        let raw = r#"{
            "modes": [{"id": "ask-mode", "title": "Ask Mode", "description": "desc"}],
            "agents": [{"id": "creating-agents", "title": "Creating Agents", "description": "desc"}]
        }"#;

        let store = DocStore::from_json(raw).expect("parse registry");
        assert_eq!(store.len(), 2);
        assert_eq!(store.category_of("creating-agents"), Some(DocCategory::Agents));
        assert!(store.lookup("ask-mode").expect("ask-mode").examples.is_empty());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(DocStore::from_json("{\"modes\": 42}").is_err());
    }
}
