use docsite_registry::{DocCategory, DocStore};
use nucleo_matcher::{pattern::Pattern, Matcher, Utf32String};
use serde::{Deserialize, Serialize};

/// Queries shorter than this return no results (single characters match
/// almost everything)
pub const MIN_QUERY_CHARS: usize = 2;

/// Result set cap
pub const MAX_RESULTS: usize = 5;

// Weighted scores below this floor are dropped; trades recall for precision.
const SCORE_THRESHOLD: f32 = 32.0;

const TITLE_WEIGHT: f32 = 1.0;
const DESCRIPTION_WEIGHT: f32 = 0.8;
const BODY_WEIGHT: f32 = 0.5;

/// Which field produced a match's best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Title,
    Description,
    Body,
}

/// One ranked search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Matched document id
    pub id: String,

    pub title: String,

    pub description: String,

    /// Collection the document was indexed from
    pub category: DocCategory,

    /// Relevance normalized against the best hit, in `0.0..=1.0`
    pub score: f32,

    /// Field the best score came from
    pub field: MatchField,
}

struct IndexedDoc {
    id: String,
    title: String,
    description: String,
    category: DocCategory,
    title_hay: Utf32String,
    description_hay: Utf32String,
    body_hay: Option<Utf32String>,
}

/// Fuzzy index over the merged document collections.
///
/// The index snapshots the store at build time; rebuild it wholesale
/// whenever the store is considered changed (in practice: after hydrating
/// bodies that should become searchable).
pub struct SearchIndex {
    docs: Vec<IndexedDoc>,
    matcher: Matcher,
}

impl SearchIndex {
    #[must_use]
    pub fn build(store: &DocStore) -> Self {
        let docs: Vec<IndexedDoc> = DocCategory::ALL
            .into_iter()
            .flat_map(|category| {
                store.collection(category).iter().map(move |doc| IndexedDoc {
                    id: doc.id.clone(),
                    title: doc.title.clone(),
                    description: doc.description.clone(),
                    category,
                    title_hay: Utf32String::from(doc.title.as_str()),
                    description_hay: Utf32String::from(doc.description.as_str()),
                    body_hay: doc.body.as_deref().map(Utf32String::from),
                })
            })
            .collect();
        log::debug!("Search index built over {} documents", docs.len());

        Self {
            docs,
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Top matches for a free-text query, best first.
    ///
    /// Deterministic for a fixed store and query: ties keep the merged-store
    /// order. Never fails; noise queries come back empty.
    pub fn search(&mut self, query: &str) -> Vec<SearchMatch> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let pattern = Pattern::parse(
            query,
            nucleo_matcher::pattern::CaseMatching::Smart,
            nucleo_matcher::pattern::Normalization::Smart,
        );

        let Self { docs, matcher } = self;
        let mut scored: Vec<(usize, f32, MatchField)> = docs
            .iter()
            .enumerate()
            .filter_map(|(idx, doc)| {
                let fields = [
                    (
                        pattern.score(doc.title_hay.slice(..), matcher),
                        TITLE_WEIGHT,
                        MatchField::Title,
                    ),
                    (
                        pattern.score(doc.description_hay.slice(..), matcher),
                        DESCRIPTION_WEIGHT,
                        MatchField::Description,
                    ),
                    (
                        doc.body_hay
                            .as_ref()
                            .and_then(|hay| pattern.score(hay.slice(..), matcher)),
                        BODY_WEIGHT,
                        MatchField::Body,
                    ),
                ];

                let (score, field) = fields
                    .into_iter()
                    .filter_map(|(raw, weight, field)| raw.map(|s| (s as f32 * weight, field)))
                    .max_by(|a, b| a.0.total_cmp(&b.0))?;

                (score >= SCORE_THRESHOLD).then_some((idx, score, field))
            })
            .collect();

        // Sort by weighted score descending; the stable sort keeps
        // merged-store order for equal scores.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(MAX_RESULTS);

        let max_score = scored.first().map(|(_, s, _)| *s).unwrap_or(1.0);

        scored
            .into_iter()
            .map(|(idx, score, field)| {
                let doc = &self.docs[idx];
                SearchMatch {
                    id: doc.id.clone(),
                    title: doc.title.clone(),
                    description: doc.description.clone(),
                    category: doc.category,
                    score: if max_score > 0.0 { score / max_score } else { 0.0 },
                    field,
                }
            })
            .collect()
    }

    /// Number of indexed documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
