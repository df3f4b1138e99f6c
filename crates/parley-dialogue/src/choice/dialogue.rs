//! Dialogue trees, nodes and choices.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::effect::Effect;
use crate::console::Color;

/// One complete branching dialogue.
///
/// `root` names an entry of `nodes`; the node map is the only lookup surface.
/// Serialized with nodes as a list, so authors write each id once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TreeRepr", into = "TreeRepr")]
pub struct DialogueTree {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Id of the first node shown.
    pub root: String,
    /// Every node of the tree, keyed by node id.
    pub nodes: HashMap<String, DialogueNode>,
}

#[derive(Clone, Serialize, Deserialize)]
struct TreeRepr {
    id: String,
    #[serde(default)]
    name: String,
    root: String,
    #[serde(default)]
    nodes: Vec<DialogueNode>,
}

impl From<TreeRepr> for DialogueTree {
    fn from(repr: TreeRepr) -> Self {
        let nodes = repr
            .nodes
            .into_iter()
            .map(|node| (node.id.clone(), node))
            .collect();
        Self {
            id: repr.id,
            name: repr.name,
            root: repr.root,
            nodes,
        }
    }
}

impl From<DialogueTree> for TreeRepr {
    fn from(tree: DialogueTree) -> Self {
        let mut nodes: Vec<DialogueNode> = tree.nodes.into_values().collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            id: tree.id,
            name: tree.name,
            root: tree.root,
            nodes,
        }
    }
}

impl DialogueTree {
    /// Create an empty tree whose root will be `root`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            root: root.into(),
            nodes: HashMap::new(),
        }
    }

    /// Add a node, replacing any node with the same id.
    pub fn with_node(mut self, node: DialogueNode) -> Self {
        self.nodes.insert(node.id.clone(), node);
        self
    }

    /// Point the root at another node id.
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// The root node, if it exists in the node map.
    pub fn root_node(&self) -> Option<&DialogueNode> {
        self.nodes.get(&self.root)
    }

    /// Look up a node of this tree.
    pub fn node(&self, id: &str) -> Option<&DialogueNode> {
        self.nodes.get(id)
    }
}

/// One beat of dialogue plus its way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueNode {
    /// Identifier, unique within the tree (and in practice process-wide).
    pub id: String,
    /// Who is talking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    /// Lines shown in order, one display beat each.
    #[serde(default)]
    pub text: Vec<String>,
    /// Color of the text lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// Choices offered, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<DialogueChoice>,
    /// Successor used when no choice is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Terminal node: ends the dialogue, ignoring `choices` and `next`.
    #[serde(default)]
    pub is_end: bool,
    /// Effects applied when a terminal node is reached.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
}

impl DialogueNode {
    /// Create a node with no text and no way out.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            speaker: None,
            text: Vec::new(),
            text_color: None,
            choices: Vec::new(),
            next: None,
            is_end: false,
            effects: Vec::new(),
        }
    }

    /// Set the speaker.
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Append a line of text.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.text.push(line.into());
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: DialogueChoice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Set the successor used when no choice is available.
    pub fn with_next(mut self, node_id: impl Into<String>) -> Self {
        self.next = Some(node_id.into());
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Mark the node terminal.
    pub fn end(mut self) -> Self {
        self.is_end = true;
        self
    }
}

/// Presentation tone of a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// No particular tone.
    #[default]
    Neutral,
    /// Warm.
    Friendly,
    /// Hostile.
    Aggressive,
    /// Wary.
    Suspicious,
    /// Deferential.
    Humble,
    /// Standing firm.
    Defiant,
    /// Thoughtful.
    Wise,
    /// After the money.
    Greedy,
    /// Flirting.
    Romantic,
}

impl Tone {
    /// Display color for choices of this tone.
    pub fn color(self) -> Color {
        match self {
            Tone::Aggressive => Color::Red,
            Tone::Friendly => Color::Green,
            Tone::Suspicious => Color::Yellow,
            Tone::Humble => Color::Cyan,
            Tone::Defiant => Color::BrightRed,
            Tone::Wise => Color::BrightCyan,
            Tone::Greedy => Color::DarkYellow,
            Tone::Neutral | Tone::Romantic => Color::White,
        }
    }
}

/// A player-selectable option on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueChoice {
    /// Text shown to the player.
    pub text: String,
    /// Node this choice leads to.
    pub next: String,
    /// Presentation tone.
    #[serde(default)]
    pub tone: Tone,
    /// Visibility gate; absent means always visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    /// Effects applied when the choice is taken.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    /// Taken without asking when it is the only legal choice.
    #[serde(default)]
    pub auto_select: bool,
}

impl DialogueChoice {
    /// Create a choice leading to `next`.
    pub fn new(text: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next: next.into(),
            tone: Tone::Neutral,
            condition: None,
            effects: Vec::new(),
            auto_select: false,
        }
    }

    /// Set the tone.
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Gate the choice behind a condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Take this choice automatically when it is the only one available.
    pub fn auto_select(mut self) -> Self {
        self.auto_select = true;
        self
    }

    /// Display color: alignment gains win over tone.
    pub fn color(&self) -> Color {
        for effect in &self.effects {
            match effect {
                Effect::AddChivalry { .. } => return Color::BrightCyan,
                Effect::AddDarkness { .. } => return Color::DarkRed,
                _ => {}
            }
        }
        self.tone.color()
    }
}

/// Outcome of one traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueResult {
    /// The traversal ran to an end rather than being aborted.
    pub completed: bool,
    /// The node the traversal stopped on; `None` when aborted.
    pub end_node: Option<DialogueNode>,
}

impl DialogueResult {
    /// A traversal that stopped on `node`.
    pub fn completed(node: DialogueNode) -> Self {
        Self {
            completed: true,
            end_node: Some(node),
        }
    }

    /// A traversal that never reached an end.
    pub fn aborted() -> Self {
        Self {
            completed: false,
            end_node: None,
        }
    }

    /// Id of the end node, if any.
    pub fn end_node_id(&self) -> Option<&str> {
        self.end_node.as_ref().map(|n| n.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_builder() {
        let tree = DialogueTree::new("innkeeper", "The Innkeeper", "greeting")
            .with_node(
                DialogueNode::new("greeting")
                    .with_speaker("Innkeeper")
                    .with_line("Welcome, {PlayerName}!")
                    .with_choice(DialogueChoice::new("Hello!", "farewell")),
            )
            .with_node(DialogueNode::new("farewell").end());

        assert_eq!(tree.root_node().map(|n| n.id.as_str()), Some("greeting"));
        assert_eq!(tree.nodes.len(), 2);
        assert!(tree.node("farewell").is_some_and(|n| n.is_end));
    }

    #[test]
    fn root_outside_node_map() {
        let tree = DialogueTree::new("broken", "Broken", "missing");
        assert!(tree.root_node().is_none());
    }

    #[test]
    fn choice_color_prefers_alignment() {
        let choice = DialogueChoice::new("Spare him", "next")
            .with_tone(Tone::Aggressive)
            .with_effect(Effect::AddChivalry { amount: 5 });
        assert_eq!(choice.color(), Color::BrightCyan);

        let choice = DialogueChoice::new("Rob him", "next").with_effect(Effect::AddDarkness {
            amount: 5,
        });
        assert_eq!(choice.color(), Color::DarkRed);

        let choice = DialogueChoice::new("Threaten", "next").with_tone(Tone::Aggressive);
        assert_eq!(choice.color(), Color::Red);
    }

    #[test]
    fn tree_from_json_lists_nodes() {
        let json = r#"{
            "id": "t",
            "name": "Test",
            "root": "a",
            "nodes": [
                {"id": "a", "text": ["Hi"], "next": "b"},
                {"id": "b", "is_end": true}
            ]
        }"#;
        let tree: DialogueTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.nodes.len(), 2);
        assert_eq!(tree.node("a").and_then(|n| n.next.as_deref()), Some("b"));
        assert_eq!(tree.node("a").map(|n| n.choices.len()), Some(0));
    }

    #[test]
    fn choice_requires_target() {
        let json = r#"{"text": "Leave"}"#;
        assert!(serde_json::from_str::<DialogueChoice>(json).is_err());
    }

    #[test]
    fn result_constructors() {
        let done = DialogueResult::completed(DialogueNode::new("end").end());
        assert!(done.completed);
        assert_eq!(done.end_node_id(), Some("end"));

        let aborted = DialogueResult::aborted();
        assert!(!aborted.completed);
        assert_eq!(aborted.end_node_id(), None);
    }
}
