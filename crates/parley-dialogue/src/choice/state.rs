//! State tracking for finished dialogues and choices taken.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

/// One traversal that reached `Ended`.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedDialogue {
    /// Tree that was traversed.
    pub tree_id: String,
    /// Whether it reached an end rather than being aborted.
    pub completed: bool,
    /// Node it stopped on, if any.
    pub end_node: Option<String>,
    /// When it finished.
    pub finished_at: DateTime<Utc>,
}

/// Tracks which dialogues the player has been through this session.
///
/// Lives only in memory; nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct DialogueHistory {
    /// Finished traversals, oldest first.
    finished: Vec<FinishedDialogue>,
    /// Choices taken at a prompt: node id to declared choice positions.
    selected_choices: HashMap<String, HashSet<usize>>,
}

impl DialogueHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished traversal.
    pub fn record_finished(
        &mut self,
        tree_id: impl Into<String>,
        completed: bool,
        end_node: Option<String>,
    ) {
        self.finished.push(FinishedDialogue {
            tree_id: tree_id.into(),
            completed,
            end_node,
            finished_at: Utc::now(),
        });
    }

    /// Whether any traversal of a tree has finished, aborted or not.
    pub fn has_seen(&self, tree_id: &str) -> bool {
        self.finished.iter().any(|f| f.tree_id == tree_id)
    }

    /// Whether a traversal of a tree reached an end node.
    pub fn has_completed(&self, tree_id: &str) -> bool {
        self.finished
            .iter()
            .any(|f| f.tree_id == tree_id && f.completed)
    }

    /// Every finished traversal, oldest first.
    pub fn finished(&self) -> &[FinishedDialogue] {
        &self.finished
    }

    /// Remember that the player picked the choice declared at `choice_index`
    /// on `node_id`.
    pub fn mark_choice(&mut self, node_id: impl Into<String>, choice_index: usize) {
        self.selected_choices
            .entry(node_id.into())
            .or_default()
            .insert(choice_index);
    }

    /// Whether the player ever picked the choice declared at `choice_index`.
    ///
    /// Positions count hidden choices too, so they stay stable when gates
    /// open or close between visits.
    pub fn has_selected_choice(&self, node_id: &str, choice_index: usize) -> bool {
        self.selected_choices
            .get(node_id)
            .is_some_and(|choices| choices.contains(&choice_index))
    }

    /// Forget every finished traversal and every picked choice.
    pub fn reset(&mut self) {
        self.finished.clear();
        self.selected_choices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seen_versus_completed() {
        let mut history = DialogueHistory::new();
        assert!(!history.has_seen("stranger"));

        history.record_finished("stranger", false, None);
        assert!(history.has_seen("stranger"));
        assert!(!history.has_completed("stranger"));

        history.record_finished("stranger", true, Some("farewell".into()));
        assert!(history.has_completed("stranger"));
        assert_eq!(history.finished().len(), 2);
        assert_eq!(history.finished()[1].end_node.as_deref(), Some("farewell"));
    }

    #[test]
    fn track_selected_choices() {
        let mut history = DialogueHistory::new();
        assert!(!history.has_selected_choice("greeting", 0));

        history.mark_choice("greeting", 0);
        assert!(history.has_selected_choice("greeting", 0));
        assert!(!history.has_selected_choice("greeting", 1));
    }

    #[test]
    fn reset_state() {
        let mut history = DialogueHistory::new();
        history.record_finished("greeting", true, None);
        history.mark_choice("greeting", 0);

        history.reset();

        assert!(!history.has_seen("greeting"));
        assert!(!history.has_selected_choice("greeting", 0));
    }
}
