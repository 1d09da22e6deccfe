use crate::index::SearchMatch;
use docsite_registry::{DocCategory, DocStore};
use docsite_router::Route;

/// Map a search hit back to a navigable route.
///
/// Collections are checked in the fixed modes, instructions, agents order
/// and the first one holding the id wins. Mode and instruction hits route to
/// their article page; every agent-guide hit collapses to the fixed
/// `/custom-agents` route. An id absent from all collections (possible only
/// if the index outlived the store it was built from) falls back to home.
#[must_use]
pub fn resolve(store: &DocStore, hit: &SearchMatch) -> Route {
    match store.category_of(&hit.id) {
        Some(DocCategory::Modes) => Route::Mode(hit.id.clone()),
        Some(DocCategory::Instructions) => Route::Instruction(hit.id.clone()),
        Some(DocCategory::Agents) => Route::CustomAgents,
        None => Route::Home,
    }
}
