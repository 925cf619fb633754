//! Mind map tree.
//!
//! Nodes are immutable and shared through `Arc`. An update locates the target
//! by id and rebuilds only the path from the root to it; every branch off that
//! path is carried over by pointer, so callers can detect unchanged subtrees
//! with `Arc::ptr_eq`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Role of a node in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Main,
    SubTopic,
    Idea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapNode {
    pub id: String,
    pub text: String,
    pub parent_id: Option<String>,
    pub children: Vec<Arc<MindMapNode>>,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub is_loading: bool,
}

impl MindMapNode {
    fn leaf(text: impl Into<String>, parent_id: &str, kind: NodeKind) -> Arc<Self> {
        Arc::new(Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            parent_id: Some(parent_id.to_string()),
            children: Vec::new(),
            kind,
            is_loading: false,
        })
    }

    /// Builds a fresh map: a `main` root with one `sub-topic` child per entry.
    pub fn root<I, S>(main_topic: impl Into<String>, sub_topics: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = uuid::Uuid::new_v4().to_string();
        let children = sub_topics
            .into_iter()
            .map(|text| Self::leaf(text, &id, NodeKind::SubTopic))
            .collect();
        Arc::new(Self {
            id,
            text: main_topic.into(),
            parent_id: None,
            children,
            kind: NodeKind::Main,
            is_loading: false,
        })
    }

    /// Only childless, idle sub-topics may be expanded.
    pub fn is_expandable(&self) -> bool {
        self.kind == NodeKind::SubTopic && self.children.is_empty() && !self.is_loading
    }

    /// Depth-first lookup by id.
    pub fn find(&self, id: &str) -> Option<&MindMapNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|child| child.node_count()).sum::<usize>()
    }

    /// Returns a new tree where the node `id` is replaced by `f(node)`.
    ///
    /// Returns `None` when `id` is not in this tree.
    pub fn update<F>(self: &Arc<Self>, id: &str, f: F) -> Option<Arc<Self>>
    where
        F: FnOnce(&MindMapNode) -> MindMapNode,
    {
        if self.id == id {
            return Some(Arc::new(f(self.as_ref())));
        }
        let index = self.children.iter().position(|child| child.contains(id))?;
        let replaced = self.children[index].update(id, f)?;
        let mut children = self.children.clone();
        children[index] = replaced;
        Some(Arc::new(Self {
            children,
            ..self.without_children()
        }))
    }

    /// Sets the per-node loading flag.
    pub fn with_loading(self: &Arc<Self>, id: &str, is_loading: bool) -> Option<Arc<Self>> {
        self.update(id, |node| Self {
            is_loading,
            ..node.clone()
        })
    }

    /// Attaches `idea` leaves to the node and clears its loading flag.
    pub fn with_ideas<I, S>(self: &Arc<Self>, id: &str, ideas: I) -> Option<Arc<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.update(id, |node| Self {
            children: ideas
                .into_iter()
                .map(|text| Self::leaf(text, &node.id, NodeKind::Idea))
                .collect(),
            is_loading: false,
            ..node.without_children()
        })
    }

    fn without_children(&self) -> Self {
        Self {
            id: self.id.clone(),
            text: self.text.clone(),
            parent_id: self.parent_id.clone(),
            children: Vec::new(),
            kind: self.kind,
            is_loading: self.is_loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Arc<MindMapNode> {
        MindMapNode::root("قهوة", ["a", "b", "c"])
    }

    #[test]
    fn test_root_shape() {
        let root = sample();
        assert_eq!(root.kind, NodeKind::Main);
        assert!(root.parent_id.is_none());
        assert_eq!(root.children.len(), 3);
        for child in &root.children {
            assert_eq!(child.kind, NodeKind::SubTopic);
            assert_eq!(child.parent_id.as_deref(), Some(root.id.as_str()));
            assert!(child.is_expandable());
        }
        assert_eq!(root.node_count(), 4);
    }

    #[test]
    fn test_update_preserves_untouched_siblings() {
        let root = sample();
        let target = root.children[1].id.clone();

        let updated = root.with_loading(&target, true).unwrap();

        assert!(!Arc::ptr_eq(&root, &updated));
        assert!(Arc::ptr_eq(&root.children[0], &updated.children[0]));
        assert!(Arc::ptr_eq(&root.children[2], &updated.children[2]));
        assert!(updated.children[1].is_loading);
        assert!(!root.children[1].is_loading);
    }

    #[test]
    fn test_with_ideas_creates_idea_leaves() {
        let root = sample();
        let target = root.children[0].id.clone();
        let loading = root.with_loading(&target, true).unwrap();

        let expanded = loading.with_ideas(&target, ["x", "y", "z"]).unwrap();
        let node = expanded.find(&target).unwrap();

        assert!(!node.is_loading);
        assert_eq!(node.children.len(), 3);
        assert!(node
            .children
            .iter()
            .all(|c| c.kind == NodeKind::Idea && c.parent_id.as_deref() == Some(target.as_str())));
        assert!(!node.is_expandable());
        assert!(Arc::ptr_eq(&loading.children[1], &expanded.children[1]));
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        assert!(sample().with_loading("missing", true).is_none());
    }

    #[test]
    fn test_only_subtopics_are_expandable() {
        let root = sample();
        assert!(!root.is_expandable());
        let loading = root.with_loading(&root.children[0].id, true).unwrap();
        assert!(!loading.children[0].is_expandable());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(sample().as_ref()).unwrap();
        assert_eq!(json["type"], "main");
        assert_eq!(json["children"][0]["type"], "sub-topic");
        assert!(json["parentId"].is_null());
        assert_eq!(json["isLoading"], false);
    }
}
