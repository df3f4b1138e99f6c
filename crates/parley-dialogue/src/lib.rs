//! Branching dialogue interpreter.
//!
//! Walks dialogue trees one node at a time, filters choices through
//! declarative [`Condition`]s evaluated against live game state, applies
//! [`Effect`]s as nodes and choices are taken, and substitutes placeholders
//! into displayed text. Game state is reached only through the capability
//! traits of `parley-core`; presentation goes through a [`Console`].
//!
//! ```
//! use parley_core::InMemoryState;
//! use parley_core::domain::Player;
//! use parley_dialogue::{
//!     DialogueChoice, DialogueEngine, DialogueNode, DialogueTree, EngineConfig, PacingConfig,
//!     ScriptedConsole,
//! };
//!
//! let mut engine =
//!     DialogueEngine::with_config(EngineConfig::new().with_pacing(PacingConfig::disabled()));
//! engine.register(
//!     DialogueTree::new("inn", "The Inn", "greet")
//!         .with_node(
//!             DialogueNode::new("greet")
//!                 .with_line("Welcome, {PlayerName}!")
//!                 .with_choice(DialogueChoice::new("Goodbye", "bye")),
//!         )
//!         .with_node(DialogueNode::new("bye").end()),
//! );
//!
//! let mut state = InMemoryState::new(Player::new("Rowan"));
//! let mut console = ScriptedConsole::new(["1"]);
//! let result = engine.start_dialogue(&mut state, "inn", &mut console);
//!
//! assert!(result.completed);
//! assert!(console.printed("Welcome, Rowan!"));
//! ```

/// Dialogue data model, conditions, effects and session history.
pub mod choice;
/// Engine configuration.
pub mod config;
/// The presentation port.
pub mod console;
/// The traversal engine.
pub mod engine;
/// Error types for content loading.
pub mod error;
/// Dialogue notifications.
pub mod event;
/// Placeholder substitution.
pub mod interpolate;
/// Offline content checks.
pub mod lint;
/// JSON content loading.
pub mod loader;
/// The tree registry.
pub mod registry;

pub use choice::{
    Condition, DialogueChoice, DialogueHistory, DialogueNode, DialogueResult, DialogueTree,
    Effect, FinishedDialogue, Notice, Tone,
};
pub use config::{EngineConfig, NodeScope, PacingConfig};
pub use console::{Color, Console, ScriptedConsole};
pub use engine::{DialogueEngine, available_choices};
pub use error::{ContentError, ContentResult};
pub use event::DialogueEvent;
pub use interpolate::interpolate;
pub use lint::{ContentReport, DanglingReference, IgnoredEffects, NodeCollision};
pub use loader::{ContentFile, load_dir};
pub use registry::TreeRegistry;
