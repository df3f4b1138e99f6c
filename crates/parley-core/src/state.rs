use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Awakening, AwakeningTracker, BetrayalLedger, Betrayals, CompanionRoster, Companions, Grief,
    GriefTracker, Memory, MemoryTracker, Player, Story, StoryLedger, Stranger, StrangerTracker,
    Subject,
};
use crate::error::{CoreError, CoreResult};

/// Everything the interpreter may read or mutate, one domain at a time.
///
/// Implementors resolve each domain for the active subject. The interpreter
/// only ever holds a `&dyn GameState` while evaluating conditions and a
/// `&mut dyn GameState` while applying effects.
pub trait GameState {
    /// The active subject.
    fn subject(&self) -> &dyn Subject;
    /// The active subject, mutably.
    fn subject_mut(&mut self) -> &mut dyn Subject;
    /// The story ledger.
    fn story(&self) -> &dyn StoryLedger;
    /// The story ledger, mutably.
    fn story_mut(&mut self) -> &mut dyn StoryLedger;
    /// The companion roster.
    fn companions(&self) -> &dyn CompanionRoster;
    /// The companion roster, mutably.
    fn companions_mut(&mut self) -> &mut dyn CompanionRoster;
    /// The grief cycle.
    fn grief(&self) -> &dyn GriefTracker;
    /// The betrayal ledger.
    fn betrayals(&self) -> &dyn BetrayalLedger;
    /// The betrayal ledger, mutably.
    fn betrayals_mut(&mut self) -> &mut dyn BetrayalLedger;
    /// Awakening progress.
    fn awakening(&self) -> &dyn AwakeningTracker;
    /// Awakening progress, mutably.
    fn awakening_mut(&mut self) -> &mut dyn AwakeningTracker;
    /// Memory recovery.
    fn memory(&self) -> &dyn MemoryTracker;
    /// Memory recovery, mutably.
    fn memory_mut(&mut self) -> &mut dyn MemoryTracker;
    /// The recurring stranger.
    fn stranger(&self) -> &dyn StrangerTracker;
}

/// A complete game state held in memory.
///
/// Serializes to the JSON player profile format. Missing sections fall back
/// to their defaults, so a profile may be as small as `{"player": {"name": "Rowan"}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InMemoryState {
    /// The player character.
    pub player: Player,
    /// Story ledger.
    pub story: Story,
    /// Companion roster.
    pub companions: Companions,
    /// Grief cycle.
    pub grief: Grief,
    /// Betrayal ledger.
    pub betrayals: Betrayals,
    /// Awakening progress.
    pub awakening: Awakening,
    /// Memory recovery.
    pub memory: Memory,
    /// The recurring stranger.
    pub stranger: Stranger,
}

impl InMemoryState {
    /// Create a state around the given player with every other domain empty.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            ..Self::default()
        }
    }

    /// Parse a profile from JSON text.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the state as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a profile file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Write the state to a profile file.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl GameState for InMemoryState {
    fn subject(&self) -> &dyn Subject {
        &self.player
    }

    fn subject_mut(&mut self) -> &mut dyn Subject {
        &mut self.player
    }

    fn story(&self) -> &dyn StoryLedger {
        &self.story
    }

    fn story_mut(&mut self) -> &mut dyn StoryLedger {
        &mut self.story
    }

    fn companions(&self) -> &dyn CompanionRoster {
        &self.companions
    }

    fn companions_mut(&mut self) -> &mut dyn CompanionRoster {
        &mut self.companions
    }

    fn grief(&self) -> &dyn GriefTracker {
        &self.grief
    }

    fn betrayals(&self) -> &dyn BetrayalLedger {
        &self.betrayals
    }

    fn betrayals_mut(&mut self) -> &mut dyn BetrayalLedger {
        &mut self.betrayals
    }

    fn awakening(&self) -> &dyn AwakeningTracker {
        &self.awakening
    }

    fn awakening_mut(&mut self) -> &mut dyn AwakeningTracker {
        &mut self.awakening
    }

    fn memory(&self) -> &dyn MemoryTracker {
        &self.memory
    }

    fn memory_mut(&mut self) -> &mut dyn MemoryTracker {
        &mut self.memory
    }

    fn stranger(&self) -> &dyn StrangerTracker {
        &self.stranger
    }
}
