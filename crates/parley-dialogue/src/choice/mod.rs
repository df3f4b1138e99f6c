//! Choice engine for branching dialogue.
//!
//! This module provides dialogue trees, conditions, effects and the
//! per-session record of what the player has been through.

mod condition;
mod dialogue;
mod effect;
mod state;

pub use condition::{Condition, evaluate};
pub use dialogue::{DialogueChoice, DialogueNode, DialogueResult, DialogueTree, Tone};
pub use effect::{Effect, Notice};
pub use state::{DialogueHistory, FinishedDialogue};
