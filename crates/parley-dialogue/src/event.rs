//! Notifications emitted while dialogues run.

/// Something observers may react to without being called by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueEvent {
    /// The player picked a choice at a prompt.
    ChoiceMade {
        /// Node the choice was offered on.
        node_id: String,
        /// 0-based position of the choice in the node's declared list,
        /// counting choices hidden by their condition.
        choice_index: usize,
        /// Text of the choice taken.
        choice_text: String,
    },
    /// A traversal ended.
    Completed {
        /// Tree that was traversed.
        tree_id: String,
        /// Whether it reached an end rather than being aborted.
        completed: bool,
    },
}
