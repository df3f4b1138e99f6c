//! Offline checks over registered content.
//!
//! The engine never consults these; broken links are still handled at
//! runtime by ending the traversal in place.

use std::collections::BTreeMap;

use crate::config::NodeScope;
use crate::registry::TreeRegistry;

/// A successor id that resolves to no node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Tree holding the reference.
    pub tree_id: String,
    /// Node holding the reference.
    pub node_id: String,
    /// The id that does not resolve.
    pub target: String,
}

/// A node id defined by more than one tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCollision {
    /// The shared node id.
    pub node_id: String,
    /// Trees defining it, in registration order. Global lookup picks the first.
    pub trees: Vec<String>,
}

/// A non-terminal node carrying effects, which only run on end nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredEffects {
    /// Tree holding the node.
    pub tree_id: String,
    /// Node whose effects never run.
    pub node_id: String,
}

/// Problems found in registered content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentReport {
    /// Trees whose root names no node of their own.
    pub missing_roots: Vec<String>,
    /// Successors that would end a traversal in place.
    pub dangling: Vec<DanglingReference>,
    /// Node ids shared between trees.
    pub collisions: Vec<NodeCollision>,
    /// Node effects the engine will skip.
    pub ignored_effects: Vec<IgnoredEffects>,
}

impl ContentReport {
    /// Check every registered tree, resolving successors under `scope`.
    pub fn check(registry: &TreeRegistry, scope: NodeScope) -> Self {
        let mut report = Self::default();
        let mut owners: BTreeMap<&str, Vec<String>> = BTreeMap::new();

        for tree in registry.trees() {
            if tree.root_node().is_none() {
                report.missing_roots.push(tree.id.clone());
            }

            let mut node_ids: Vec<&String> = tree.nodes.keys().collect();
            node_ids.sort();

            for node_id in node_ids {
                owners
                    .entry(node_id.as_str())
                    .or_default()
                    .push(tree.id.clone());

                let Some(node) = tree.node(node_id) else {
                    continue;
                };
                if node.is_end {
                    continue;
                }
                if !node.effects.is_empty() {
                    report.ignored_effects.push(IgnoredEffects {
                        tree_id: tree.id.clone(),
                        node_id: node_id.clone(),
                    });
                }

                let targets = node
                    .next
                    .iter()
                    .chain(node.choices.iter().map(|choice| &choice.next));
                for target in targets {
                    let resolved = match scope {
                        NodeScope::Global => registry.resolve_node(target).is_some(),
                        NodeScope::Tree => tree.node(target).is_some(),
                    };
                    if !resolved {
                        report.dangling.push(DanglingReference {
                            tree_id: tree.id.clone(),
                            node_id: node_id.clone(),
                            target: target.clone(),
                        });
                    }
                }
            }
        }

        report.collisions = owners
            .into_iter()
            .filter(|(_, trees)| trees.len() > 1)
            .map(|(node_id, trees)| NodeCollision {
                node_id: node_id.to_string(),
                trees,
            })
            .collect();

        report
    }

    /// Whether nothing was found.
    pub fn is_clean(&self) -> bool {
        self.missing_roots.is_empty()
            && self.dangling.is_empty()
            && self.collisions.is_empty()
            && self.ignored_effects.is_empty()
    }

    /// Findings that do not break a traversal.
    pub fn warning_count(&self) -> usize {
        self.collisions.len() + self.ignored_effects.len()
    }
}
