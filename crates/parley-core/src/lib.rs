//! Game-state capabilities for the parley dialogue interpreter.
//!
//! The interpreter never owns player, companion or story state. Every
//! condition it evaluates and every effect it applies goes through one of the
//! narrow per-domain traits defined here, reached via [`GameState`]. This
//! crate also ships [`InMemoryState`], a plain in-memory implementation of
//! every domain that doubles as the on-disk player profile format.

/// Per-domain capability traits and their in-memory implementations.
pub mod domain;
/// Error types used throughout the crate.
pub mod error;
/// The aggregate game state handed to the interpreter.
pub mod state;

/// Re-export the domain capability traits.
pub use domain::{
    Alignment, AwakeningTracker, BetrayalLedger, CompanionRoster, GriefStage, GriefTracker,
    MemoryTracker, StoryLedger, StrangerTracker, Subject,
};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the game state types.
pub use state::{GameState, InMemoryState};
