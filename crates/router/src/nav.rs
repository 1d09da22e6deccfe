use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One entry in the static site navigation hierarchy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavNode {
    /// Route path, unique across the tree
    pub path: String,

    pub title: String,

    /// Icon tag rendered next to the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default)]
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    /// Builder: set the icon tag
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder: append a child node
    #[must_use]
    pub fn child(mut self, child: NavNode) -> Self {
        self.children.push(child);
        self
    }

    /// Active iff the current route equals this node's path, or sits below
    /// it (path followed by a separator).
    #[must_use]
    pub fn is_active(&self, current: &str) -> bool {
        current == self.path
            || current
                .strip_prefix(self.path.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

static NAVIGATION: Lazy<Vec<NavNode>> = Lazy::new(|| {
    vec![
        NavNode::new("/", "Home").icon("Home"),
        NavNode::new("/modes", "Copilot Modes")
            .icon("Layers")
            .child(NavNode::new("/modes/ask-mode", "Ask Mode"))
            .child(NavNode::new("/modes/edit-mode", "Edit Mode"))
            .child(NavNode::new("/modes/agent-mode", "Agent Mode"))
            .child(NavNode::new("/modes/plan-mode", "Plan Mode")),
        NavNode::new("/instructions", "Instructions & Prompts")
            .icon("FileText")
            .child(NavNode::new("/instructions/prompt-engineering", "Prompt Engineering"))
            .child(NavNode::new("/instructions/slash-commands", "Slash Commands")),
        NavNode::new("/custom-agents", "Custom Agents").icon("Bot"),
    ]
});

/// The site navigation tree, constructed once
#[must_use]
pub fn navigation() -> &'static [NavNode] {
    &NAVIGATION
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect_paths<'a>(nodes: &'a [NavNode], out: &mut Vec<&'a str>) {
        for node in nodes {
            out.push(node.path.as_str());
            collect_paths(&node.children, out);
        }
    }

    #[test]
    fn test_navigation_paths_are_unique() {
        let mut paths = Vec::new();
        collect_paths(navigation(), &mut paths);
        let count = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), count);
    }

    #[test]
    fn test_section_is_active_for_child_routes() {
        let modes = NavNode::new("/modes", "Copilot Modes");
        assert!(modes.is_active("/modes"));
        assert!(modes.is_active("/modes/ask-mode"));
        assert!(!modes.is_active("/modes-of-operation"));
        assert!(!modes.is_active("/instructions"));
    }

    #[test]
    fn test_home_is_active_only_at_root() {
        let home = NavNode::new("/", "Home");
        assert!(home.is_active("/"));
        assert!(!home.is_active("/modes"));
    }

    #[test]
    fn test_nav_serializes_without_empty_fields() {
        let node = NavNode::new("/custom-agents", "Custom Agents");
        let json = serde_json::to_value(&node).expect("serialize nav node");
        assert!(json.get("icon").is_none());
    }
}
