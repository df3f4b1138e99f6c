//! One capability trait per external domain.
//!
//! Read methods are pure queries. Write methods are the only way the
//! interpreter mutates anything, and each performs exactly one change.

mod awakening;
mod betrayal;
mod companion;
mod grief;
mod memory;
mod story;
mod stranger;
mod subject;

pub use awakening::{Awakening, AwakeningTracker};
pub use betrayal::{BetrayalLedger, Betrayals, PENDING_BETRAYAL_POINTS};
pub use companion::{Companion, CompanionRoster, Companions};
pub use grief::{Grief, GriefStage, GriefTracker};
pub use memory::{Memory, MemoryTracker};
pub use story::{Story, StoryEvent, StoryLedger};
pub use stranger::{Stranger, StrangerTracker};
pub use subject::{Alignment, Player, Subject};
