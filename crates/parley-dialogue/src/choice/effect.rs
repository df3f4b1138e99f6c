//! Effects that modify game state when a node or choice is taken.

use parley_core::{Alignment, GameState};
use serde::{Deserialize, Serialize};

use crate::console::Color;

/// A single declarative state mutation.
///
/// Serialized internally tagged like [`Condition`](super::Condition).
/// Kinds this build does not know deserialize to [`Effect::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Set a story flag.
    SetStoryFlag {
        /// Flag key.
        flag: String,
    },
    /// Clear a story flag.
    ClearStoryFlag {
        /// Flag key.
        flag: String,
    },
    /// Add chivalry and count a chivalrous deed.
    AddChivalry {
        /// Points added.
        amount: i64,
    },
    /// Add darkness and count a dark deed.
    AddDarkness {
        /// Points added.
        amount: i64,
    },
    /// Give (or take, when negative) gold.
    AddGold {
        /// Gold delta.
        amount: i64,
    },
    /// Grant experience.
    AddExperience {
        /// Experience gained.
        amount: i64,
    },
    /// Restore hit points, up to the maximum.
    Heal {
        /// Hit points restored.
        amount: i64,
    },
    /// Remove hit points, down to zero.
    Damage {
        /// Hit points lost.
        amount: i64,
    },
    /// Put an item into the subject's inventory.
    GiveItem {
        /// Item name.
        item: String,
    },
    /// Record that a choice resolved to an outcome.
    RecordChoice {
        /// Choice key.
        choice: String,
        /// Outcome value.
        outcome: String,
    },
    /// Move the story forward to a chapter.
    AdvanceChapter {
        /// Chapter ordinal.
        chapter: u32,
    },
    /// Collect an artifact.
    UnlockArtifact {
        /// Artifact key.
        artifact: String,
    },
    /// Fire a named world event.
    TriggerEvent {
        /// Event name.
        event: String,
        /// Optional detail passed along with the event.
        #[serde(default)]
        detail: Option<String>,
    },
    /// Change a companion's loyalty.
    ModifyCompanionLoyalty {
        /// Companion id.
        companion: String,
        /// Loyalty delta.
        amount: i64,
    },
    /// Change a companion's trust.
    ModifyCompanionTrust {
        /// Companion id.
        companion: String,
        /// Trust delta.
        amount: i64,
    },
    /// Deepen a romance by one step.
    AdvanceRomance {
        /// Companion id.
        companion: String,
    },
    /// Run a companion's scripted death.
    TriggerCompanionDeath {
        /// Companion id.
        companion: String,
    },
    /// Push an NPC towards betrayal.
    AddBetrayalPoints {
        /// NPC id.
        npc: String,
        /// Points added.
        amount: i64,
    },
    /// Pull an NPC back from betrayal.
    ReduceBetrayalPoints {
        /// NPC id.
        npc: String,
        /// Points removed.
        amount: i64,
    },
    /// Mark an NPC's betrayal as triggered.
    TriggerBetrayal {
        /// NPC id.
        npc: String,
    },
    /// Gain one insight.
    GainInsight {
        /// Insight points.
        amount: i64,
    },
    /// Collect a wave fragment.
    CollectWaveFragment {
        /// Fragment key.
        fragment: String,
    },
    /// Experience a named awakening moment.
    TriggerAwakeningMoment {
        /// Moment key.
        moment: String,
    },
    /// Recover a memory.
    RevealMemory {
        /// Memory key.
        memory: String,
    },
    /// Schedule a dream sequence.
    TriggerDream {
        /// Dream key.
        dream: String,
    },
    /// A kind this build does not recognize. Does nothing.
    #[serde(other)]
    Unknown,
}

/// A short status line describing a player-visible effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text, e.g. `(+5 Chivalry)`.
    pub text: String,
    /// Display color.
    pub color: Color,
}

impl Notice {
    fn show(text: impl Into<String>, color: Color) -> Option<Self> {
        Some(Self {
            text: text.into(),
            color,
        })
    }
}

impl Effect {
    /// Apply the effect: exactly one state mutation.
    ///
    /// Returns the status line to show for player-visible effects.
    pub fn apply(&self, state: &mut dyn GameState) -> Option<Notice> {
        match self {
            Effect::SetStoryFlag { flag } => {
                state.story_mut().set_flag(flag, true);
                None
            }
            Effect::ClearStoryFlag { flag } => {
                state.story_mut().set_flag(flag, false);
                None
            }
            Effect::AddChivalry { amount } => {
                adjust_alignment(state, Alignment::Chivalry, *amount);
                Notice::show(format!("(+{amount} Chivalry)"), Color::BrightGreen)
            }
            Effect::AddDarkness { amount } => {
                adjust_alignment(state, Alignment::Darkness, *amount);
                Notice::show(format!("(+{amount} Darkness)"), Color::DarkRed)
            }
            Effect::AddGold { amount } => {
                state.subject_mut().adjust_gold(*amount);
                if *amount > 0 {
                    Notice::show(format!("(Received {amount} gold)"), Color::Yellow)
                } else {
                    Notice::show(format!("(Lost {} gold)", amount.unsigned_abs()), Color::Red)
                }
            }
            Effect::AddExperience { amount } => {
                state.subject_mut().adjust_experience(*amount);
                Notice::show(format!("(+{amount} Experience)"), Color::Cyan)
            }
            Effect::Heal { amount } => {
                adjust_hp(state, *amount);
                Notice::show(format!("(Healed {amount} HP)"), Color::Green)
            }
            Effect::Damage { amount } => {
                adjust_hp(state, amount.saturating_neg());
                Notice::show(format!("(Took {amount} damage)"), Color::Red)
            }
            Effect::GiveItem { item } => {
                state.subject_mut().give_item(item);
                Notice::show(format!("(Received: {item})"), Color::BrightYellow)
            }
            Effect::RecordChoice { choice, outcome } => {
                state.story_mut().record_choice(choice, outcome);
                None
            }
            Effect::AdvanceChapter { chapter } => {
                state.story_mut().advance_chapter(*chapter);
                None
            }
            Effect::UnlockArtifact { artifact } => {
                state.story_mut().collect_artifact(artifact);
                None
            }
            Effect::TriggerEvent { event, detail } => {
                state
                    .story_mut()
                    .trigger_event(event, detail.as_deref().unwrap_or(""));
                None
            }
            Effect::ModifyCompanionLoyalty { companion, amount } => {
                if !state.companions().is_recruited(companion) {
                    return None;
                }
                state
                    .companions_mut()
                    .modify_loyalty(companion, *amount, "dialogue choice");
                let direction = if *amount > 0 { "increased" } else { "decreased" };
                Notice::show(format!("({companion}'s loyalty {direction})"), Color::Cyan)
            }
            Effect::ModifyCompanionTrust { companion, amount } => {
                if !state.companions().is_recruited(companion) {
                    return None;
                }
                state.companions_mut().modify_trust(companion, *amount);
                let direction = if *amount > 0 { "increased" } else { "decreased" };
                Notice::show(format!("({companion}'s trust {direction})"), Color::Cyan)
            }
            Effect::AdvanceRomance { companion } => {
                if !state.companions().is_recruited(companion) {
                    return None;
                }
                state.companions_mut().advance_romance(companion);
                Notice::show(
                    format!("(Your relationship with {companion} deepens)"),
                    Color::Magenta,
                )
            }
            Effect::TriggerCompanionDeath { companion } => {
                state.companions_mut().trigger_death(companion);
                None
            }
            Effect::AddBetrayalPoints { npc, amount } => {
                state
                    .betrayals_mut()
                    .add_points(npc, *amount, "dialogue interaction");
                None
            }
            Effect::ReduceBetrayalPoints { npc, amount } => {
                state
                    .betrayals_mut()
                    .reduce_points(npc, *amount, "act of kindness");
                None
            }
            Effect::TriggerBetrayal { npc } => {
                state
                    .story_mut()
                    .set_flag(&format!("betrayal_triggered_{npc}"), true);
                None
            }
            Effect::GainInsight { amount } => {
                state.awakening_mut().gain_insight(*amount);
                Notice::show("(A deeper understanding settles within you)", Color::BrightCyan)
            }
            Effect::CollectWaveFragment { fragment } => {
                state.awakening_mut().collect_fragment(fragment);
                Notice::show("(You have collected a Wave Fragment)", Color::Cyan)
            }
            Effect::TriggerAwakeningMoment { moment } => {
                state.awakening_mut().experience_moment(moment);
                Notice::show(
                    "(Something profound shifts in your understanding)",
                    Color::BrightCyan,
                )
            }
            Effect::RevealMemory { memory } => {
                state.memory_mut().reveal_memory(memory);
                Notice::show("(A memory surfaces from the depths...)", Color::Cyan)
            }
            Effect::TriggerDream { dream } => {
                state
                    .story_mut()
                    .set_flag(&format!("dream_pending_{dream}"), true);
                None
            }
            Effect::Unknown => None,
        }
    }
}

fn adjust_alignment(state: &mut dyn GameState, side: Alignment, amount: i64) {
    let subject = state.subject_mut();
    subject.adjust_alignment(side, amount);
    subject.record_deed(side);
}

fn adjust_hp(state: &mut dyn GameState, delta: i64) {
    let subject = state.subject_mut();
    let max = subject.max_hp().max(0);
    let hp = subject.hp().saturating_add(delta).clamp(0, max);
    subject.set_hp(hp);
}
