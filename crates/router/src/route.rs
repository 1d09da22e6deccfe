use serde::{Deserialize, Serialize};

/// Child shown when `/modes` is opened without an article segment
pub const DEFAULT_MODE: &str = "ask-mode";

/// Child shown when `/instructions` is opened without an article segment
pub const DEFAULT_INSTRUCTION: &str = "prompt-engineering";

/// A navigable location in the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", content = "id", rename_all = "snake_case")]
pub enum Route {
    Home,
    Mode(String),
    Instruction(String),
    CustomAgents,
}

impl Route {
    /// Parse a path into a route.
    ///
    /// Section roots redirect to their default child; unknown or malformed
    /// paths fall back to [`Route::Home`]. Parsing never fails. The article
    /// segment is not validated here: an unknown id parses into a route whose
    /// page renders a not-found state.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (None, ..) => Self::Home,
            (Some("modes"), None, _) => Self::Mode(DEFAULT_MODE.to_string()),
            (Some("modes"), Some(id), None) => Self::Mode(id.to_string()),
            (Some("instructions"), None, _) => Self::Instruction(DEFAULT_INSTRUCTION.to_string()),
            (Some("instructions"), Some(id), None) => Self::Instruction(id.to_string()),
            (Some("custom-agents"), None, _) => Self::CustomAgents,
            _ => Self::Home,
        }
    }

    /// Canonical path for this route
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Mode(id) => format!("/modes/{id}"),
            Self::Instruction(id) => format!("/instructions/{id}"),
            Self::CustomAgents => "/custom-agents".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_root() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn test_parse_article_routes() {
        assert_eq!(
            Route::parse("/modes/ask-mode"),
            Route::Mode("ask-mode".to_string())
        );
        assert_eq!(
            Route::parse("/instructions/slash-commands"),
            Route::Instruction("slash-commands".to_string())
        );
        assert_eq!(Route::parse("/custom-agents"), Route::CustomAgents);
    }

    #[test]
    fn test_section_roots_redirect_to_default_child() {
        assert_eq!(Route::parse("/modes"), Route::Mode(DEFAULT_MODE.to_string()));
        assert_eq!(
            Route::parse("/instructions/"),
            Route::Instruction(DEFAULT_INSTRUCTION.to_string())
        );
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(Route::parse("/settings"), Route::Home);
        assert_eq!(Route::parse("/modes/ask-mode/extra"), Route::Home);
        assert_eq!(Route::parse("/custom-agents/creating-agents"), Route::Home);
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(
            Route::parse("/modes/ask-mode/"),
            Route::Mode("ask-mode".to_string())
        );
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::Mode("plan-mode".to_string()),
            Route::Instruction("prompt-engineering".to_string()),
            Route::CustomAgents,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
