//! The set of loaded dialogue trees.

use std::collections::HashMap;

use crate::choice::{DialogueNode, DialogueTree};

/// Owns every registered [`DialogueTree`].
///
/// Trees keep their registration order; node ids resolve globally to the
/// first tree, in that order, that defines them. Re-registering an id
/// replaces the tree in place without changing its position.
#[derive(Debug, Clone, Default)]
pub struct TreeRegistry {
    trees: Vec<DialogueTree>,
    index: HashMap<String, usize>,
}

impl TreeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tree, replacing any tree with the same id.
    ///
    /// Returns the tree that was replaced.
    pub fn register(&mut self, tree: DialogueTree) -> Option<DialogueTree> {
        match self.index.get(&tree.id) {
            Some(&slot) => Some(std::mem::replace(&mut self.trees[slot], tree)),
            None => {
                self.index.insert(tree.id.clone(), self.trees.len());
                self.trees.push(tree);
                None
            }
        }
    }

    /// Look up a tree by id.
    pub fn lookup(&self, tree_id: &str) -> Option<&DialogueTree> {
        self.index.get(tree_id).map(|&slot| &self.trees[slot])
    }

    /// Find a node by id in any registered tree. First match wins.
    pub fn resolve_node(&self, node_id: &str) -> Option<&DialogueNode> {
        self.trees.iter().find_map(|tree| tree.node(node_id))
    }

    /// Find a node by id within one tree only.
    pub fn resolve_in(&self, tree_id: &str, node_id: &str) -> Option<&DialogueNode> {
        self.lookup(tree_id).and_then(|tree| tree.node(node_id))
    }

    /// Registered trees, in registration order.
    pub fn trees(&self) -> impl Iterator<Item = &DialogueTree> {
        self.trees.iter()
    }

    /// Number of registered trees.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(id: &str, nodes: &[&str]) -> DialogueTree {
        nodes.iter().fold(
            DialogueTree::new(id, id, nodes.first().copied().unwrap_or("start")),
            |tree, node| tree.with_node(DialogueNode::new(*node).with_line(format!("{id}:{node}"))),
        )
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = TreeRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.register(tree("guard", &["hail"])).is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("guard").is_some());
        assert!(registry.lookup("bard").is_none());
    }

    #[test]
    fn replacement_keeps_position() {
        let mut registry = TreeRegistry::new();
        registry.register(tree("a", &["x"]));
        registry.register(tree("b", &["y"]));
        let old = registry.register(tree("a", &["z"]));

        assert!(old.is_some_and(|t| t.node("x").is_some()));
        let ids: Vec<_> = registry.trees().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert!(registry.resolve_node("x").is_none());
        assert!(registry.resolve_node("z").is_some());
    }

    #[test]
    fn global_resolution_first_match_wins() {
        let mut registry = TreeRegistry::new();
        registry.register(tree("first", &["shared"]));
        registry.register(tree("second", &["shared", "own"]));

        let node = registry.resolve_node("shared");
        assert_eq!(node.map(|n| n.text[0].as_str()), Some("first:shared"));
        assert!(registry.resolve_node("own").is_some());
        assert!(registry.resolve_node("ghost").is_none());
    }

    #[test]
    fn scoped_resolution() {
        let mut registry = TreeRegistry::new();
        registry.register(tree("first", &["shared"]));
        registry.register(tree("second", &["shared"]));

        let node = registry.resolve_in("second", "shared");
        assert_eq!(node.map(|n| n.text[0].as_str()), Some("second:shared"));
        assert!(registry.resolve_in("first", "missing").is_none());
        assert!(registry.resolve_in("third", "shared").is_none());
    }
}
