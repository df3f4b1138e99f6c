//! Condition evaluation for dialogue choices.

use parley_core::GameState;
use serde::{Deserialize, Serialize};

/// A predicate over game state gating a choice.
///
/// Serialized internally tagged: `{"kind": "level_above", "value": 10}`.
/// Comparisons named `above`/`below` are strict; `at_least` is inclusive.
/// Kinds this build does not know deserialize to [`Condition::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// A story flag is set.
    HasStoryFlag {
        /// Flag key.
        flag: String,
    },
    /// A story flag is not set.
    NotHasStoryFlag {
        /// Flag key.
        flag: String,
    },
    /// Net alignment (chivalry minus darkness) is above a threshold.
    AlignmentAbove {
        /// Threshold.
        value: i64,
    },
    /// Net alignment is below a threshold.
    AlignmentBelow {
        /// Threshold.
        value: i64,
    },
    /// Level is above a threshold.
    LevelAbove {
        /// Threshold.
        value: i64,
    },
    /// Level is below a threshold.
    LevelBelow {
        /// Threshold.
        value: i64,
    },
    /// The subject has a class (case-insensitive).
    HasClass {
        /// Class name.
        class: String,
    },
    /// The subject has a race (case-insensitive).
    HasRace {
        /// Race name.
        race: String,
    },
    /// Gold carried is above a threshold.
    GoldAbove {
        /// Threshold.
        value: i64,
    },
    /// An artifact has been collected.
    HasArtifact {
        /// Artifact key.
        artifact: String,
    },
    /// The story has reached a chapter.
    ChapterAtLeast {
        /// Chapter ordinal.
        chapter: u32,
    },
    /// The story cycle is above a threshold.
    CycleAbove {
        /// Threshold.
        value: u32,
    },
    /// A choice outcome has been recorded.
    HasMadeChoice {
        /// Choice key.
        choice: String,
    },
    /// A companion has been recruited.
    HasCompanion {
        /// Companion id.
        companion: String,
    },
    /// A companion is recruited and alive.
    CompanionAlive {
        /// Companion id.
        companion: String,
    },
    /// A companion was recruited and has died.
    CompanionDead {
        /// Companion id.
        companion: String,
    },
    /// A companion's loyalty is above a threshold.
    CompanionLoyaltyAbove {
        /// Companion id.
        companion: String,
        /// Threshold.
        value: i64,
    },
    /// A companion's trust is above a threshold.
    CompanionTrustAbove {
        /// Companion id.
        companion: String,
        /// Threshold.
        value: i64,
    },
    /// A companion's romance level is above a threshold.
    RomanceLevelAbove {
        /// Companion id.
        companion: String,
        /// Threshold.
        value: i64,
    },
    /// Any companion is in the active party.
    HasActiveCompanion,
    /// The subject is grieving.
    IsGrieving,
    /// The grief cycle is at a stage (case-insensitive name).
    GriefStageIs {
        /// Stage name, e.g. `anger`.
        stage: String,
    },
    /// A grief cycle has reached acceptance.
    CompletedGriefCycle,
    /// An NPC has betrayed the subject.
    BetrayedBy {
        /// NPC id.
        npc: String,
    },
    /// The subject forgave a betrayer.
    ForgaveBetrayer {
        /// NPC id.
        npc: String,
    },
    /// An NPC's betrayal is pending.
    HasPendingBetrayal {
        /// NPC id.
        npc: String,
    },
    /// Awakening level is above a threshold.
    AwakeningAbove {
        /// Threshold.
        value: i64,
    },
    /// A wave fragment has been collected.
    HasWaveFragment {
        /// Fragment key.
        fragment: String,
    },
    /// At least this many insights have been gained.
    InsightAtLeast {
        /// Minimum count.
        value: usize,
    },
    /// A named awakening moment has been experienced.
    ExperiencedMoment {
        /// Moment key.
        moment: String,
    },
    /// A memory fragment has been recovered.
    HasMemoryFragment {
        /// Fragment key.
        fragment: String,
    },
    /// Memory recovery percentage is above a threshold.
    MemoryRecoveryAbove {
        /// Threshold, 0 to 100.
        value: i64,
    },
    /// The final truth has been revealed.
    TruthRevealed,
    /// The stranger's receptivity is above a threshold.
    StrangerReceptivityAbove {
        /// Threshold, -100 to 100.
        value: i64,
    },
    /// The stranger's receptivity is below a threshold.
    StrangerReceptivityBelow {
        /// Threshold, -100 to 100.
        value: i64,
    },
    /// More than this many stranger encounters have happened.
    StrangerEncountersAbove {
        /// Threshold.
        value: u32,
    },
    /// The subject knows who the stranger is.
    StrangerKnowsTruth,
    /// Every inner condition holds.
    All {
        /// Inner conditions.
        conditions: Vec<Condition>,
    },
    /// At least one inner condition holds.
    Any {
        /// Inner conditions.
        conditions: Vec<Condition>,
    },
    /// The inner condition does not hold.
    Not {
        /// Inner condition.
        condition: Box<Condition>,
    },
    /// A kind this build does not recognize. Always true.
    #[serde(other)]
    Unknown,
}

impl Condition {
    /// Evaluate the condition against the current state.
    ///
    /// Pure read: nothing in `state` changes.
    pub fn evaluate(&self, state: &dyn GameState) -> bool {
        let subject = state.subject();
        let story = state.story();
        let companions = state.companions();

        match self {
            Condition::HasStoryFlag { flag } => story.has_flag(flag),
            Condition::NotHasStoryFlag { flag } => !story.has_flag(flag),
            Condition::AlignmentAbove { value } => subject.net_alignment() > *value,
            Condition::AlignmentBelow { value } => subject.net_alignment() < *value,
            Condition::LevelAbove { value } => subject.level() > *value,
            Condition::LevelBelow { value } => subject.level() < *value,
            Condition::HasClass { class } => subject.class().eq_ignore_ascii_case(class),
            Condition::HasRace { race } => subject.race().eq_ignore_ascii_case(race),
            Condition::GoldAbove { value } => subject.gold() > *value,
            Condition::HasArtifact { artifact } => story.has_artifact(artifact),
            Condition::ChapterAtLeast { chapter } => story.chapter() >= *chapter,
            Condition::CycleAbove { value } => story.cycle() > *value,
            Condition::HasMadeChoice { choice } => story.has_made_choice(choice),

            Condition::HasCompanion { companion } => companions.is_recruited(companion),
            Condition::CompanionAlive { companion } => companions.is_alive(companion),
            Condition::CompanionDead { companion } => {
                companions.is_recruited(companion) && !companions.is_alive(companion)
            }
            Condition::CompanionLoyaltyAbove { companion, value } => {
                companions.loyalty(companion).is_some_and(|l| l > *value)
            }
            Condition::CompanionTrustAbove { companion, value } => {
                companions.trust(companion).is_some_and(|t| t > *value)
            }
            Condition::RomanceLevelAbove { companion, value } => {
                companions.romance(companion).is_some_and(|r| r > *value)
            }
            Condition::HasActiveCompanion => companions.has_active_companion(),

            Condition::IsGrieving => state.grief().is_grieving(),
            Condition::GriefStageIs { stage } => state
                .grief()
                .stage()
                .is_some_and(|s| s.to_string().eq_ignore_ascii_case(stage)),
            Condition::CompletedGriefCycle => state.grief().has_completed_cycle(),

            Condition::BetrayedBy { npc } => state.betrayals().has_betrayed(npc),
            Condition::ForgaveBetrayer { npc } => story.has_flag(&format!("forgave_{npc}")),
            Condition::HasPendingBetrayal { npc } => state.betrayals().has_pending_betrayal(npc),

            Condition::AwakeningAbove { value } => state.awakening().level() > *value,
            Condition::HasWaveFragment { fragment } => state.awakening().has_fragment(fragment),
            Condition::InsightAtLeast { value } => state.awakening().insight_count() >= *value,
            Condition::ExperiencedMoment { moment } => state.awakening().has_experienced(moment),

            Condition::HasMemoryFragment { fragment } => state.memory().has_fragment(fragment),
            Condition::MemoryRecoveryAbove { value } => state.memory().recovery_percent() > *value,
            Condition::TruthRevealed => state.memory().truth_revealed(),

            Condition::StrangerReceptivityAbove { value } => {
                state.stranger().receptivity() > *value
            }
            Condition::StrangerReceptivityBelow { value } => {
                state.stranger().receptivity() < *value
            }
            Condition::StrangerEncountersAbove { value } => state.stranger().encounters() > *value,
            Condition::StrangerKnowsTruth => state.stranger().knows_truth(),

            Condition::All { conditions } => conditions.iter().all(|c| c.evaluate(state)),
            Condition::Any { conditions } => conditions.iter().any(|c| c.evaluate(state)),
            Condition::Not { condition } => !condition.evaluate(state),
            Condition::Unknown => true,
        }
    }
}

/// Evaluate an optional gate. A missing condition always holds.
pub fn evaluate(condition: Option<&Condition>, state: &dyn GameState) -> bool {
    condition.is_none_or(|c| c.evaluate(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::domain::{GriefStage, Player};
    use parley_core::{InMemoryState, StoryLedger};

    fn rowan() -> InMemoryState {
        InMemoryState::new(
            Player::new("Rowan")
                .with_level(12)
                .with_class("Paladin")
                .with_race("Elf")
                .with_gold(100),
        )
    }

    #[test]
    fn missing_condition_holds() {
        assert!(evaluate(None, &rowan()));
    }

    #[test]
    fn story_flags() {
        let mut state = rowan();
        let has = Condition::HasStoryFlag {
            flag: "met_king".into(),
        };
        let lacks = Condition::NotHasStoryFlag {
            flag: "met_king".into(),
        };
        assert!(!has.evaluate(&state));
        assert!(lacks.evaluate(&state));

        state.story.set_flag("met_king", true);
        assert!(has.evaluate(&state));
        assert!(!lacks.evaluate(&state));
    }

    #[test]
    fn alignment_uses_net_value() {
        let mut state = rowan();
        state.player.chivalry = 250;
        state.player.darkness = 100;

        assert!(!Condition::AlignmentAbove { value: 200 }.evaluate(&state));
        assert!(Condition::AlignmentAbove { value: 149 }.evaluate(&state));
        assert!(Condition::AlignmentBelow { value: 151 }.evaluate(&state));
    }

    #[test]
    fn thresholds_are_strict() {
        let state = rowan();
        assert!(!Condition::LevelAbove { value: 12 }.evaluate(&state));
        assert!(Condition::LevelAbove { value: 11 }.evaluate(&state));
        assert!(!Condition::LevelBelow { value: 12 }.evaluate(&state));
        assert!(!Condition::GoldAbove { value: 100 }.evaluate(&state));
    }

    #[test]
    fn class_and_race_ignore_case() {
        let state = rowan();
        assert!(Condition::HasClass {
            class: "paladin".into()
        }
        .evaluate(&state));
        assert!(!Condition::HasRace {
            race: "dwarf".into()
        }
        .evaluate(&state));
    }

    #[test]
    fn chapter_is_inclusive() {
        let mut state = rowan();
        state.story.chapter = 3;
        assert!(Condition::ChapterAtLeast { chapter: 3 }.evaluate(&state));
        assert!(!Condition::ChapterAtLeast { chapter: 4 }.evaluate(&state));
    }

    #[test]
    fn companion_conditions() {
        let mut state = rowan();
        let dead = Condition::CompanionDead {
            companion: "Lyra".into(),
        };
        // never recruited is not dead
        assert!(!dead.evaluate(&state));

        state.companions.recruit("Lyra").loyalty = 80;
        assert!(
            Condition::CompanionLoyaltyAbove {
                companion: "Lyra".into(),
                value: 70
            }
            .evaluate(&state)
        );
        assert!(
            !Condition::CompanionLoyaltyAbove {
                companion: "Aldric".into(),
                value: -1
            }
            .evaluate(&state)
        );
        assert!(Condition::HasActiveCompanion.evaluate(&state));

        state.companions.recruit("Lyra").alive = false;
        assert!(dead.evaluate(&state));
    }

    #[test]
    fn grief_stage_by_name() {
        let mut state = rowan();
        let cond = Condition::GriefStageIs {
            stage: "anger".into(),
        };
        assert!(!cond.evaluate(&state));
        state.grief.stage = Some(GriefStage::Anger);
        assert!(cond.evaluate(&state));
        assert!(Condition::IsGrieving.evaluate(&state));
    }

    #[test]
    fn forgiveness_reads_story_flag() {
        let mut state = rowan();
        let cond = Condition::ForgaveBetrayer { npc: "vex".into() };
        assert!(!cond.evaluate(&state));
        state.story.set_flag("forgave_vex", true);
        assert!(cond.evaluate(&state));
    }

    #[test]
    fn stranger_conditions() {
        let mut state = rowan();
        state.stranger.receptivity = 40;
        state.stranger.encounters = 3;
        assert!(Condition::StrangerReceptivityAbove { value: 30 }.evaluate(&state));
        assert!(!Condition::StrangerReceptivityBelow { value: 30 }.evaluate(&state));
        assert!(Condition::StrangerEncountersAbove { value: 2 }.evaluate(&state));
        assert!(!Condition::StrangerKnowsTruth.evaluate(&state));
    }

    #[test]
    fn logical_combinators() {
        let mut state = rowan();
        state.story.set_flag("a", true);
        let a = Condition::HasStoryFlag { flag: "a".into() };
        let b = Condition::HasStoryFlag { flag: "b".into() };

        assert!(
            !Condition::All {
                conditions: vec![a.clone(), b.clone()]
            }
            .evaluate(&state)
        );
        assert!(
            Condition::Any {
                conditions: vec![a, b.clone()]
            }
            .evaluate(&state)
        );
        assert!(
            Condition::Not {
                condition: Box::new(b)
            }
            .evaluate(&state)
        );
    }

    #[test]
    fn unknown_kind_fails_open() {
        let cond: Condition =
            serde_json::from_str(r#"{"kind": "reputation_above", "value": 3}"#).unwrap();
        assert_eq!(cond, Condition::Unknown);
        assert!(cond.evaluate(&rowan()));
    }

    #[test]
    fn json_shape() {
        let cond: Condition = serde_json::from_str(
            r#"{"kind": "companion_trust_above", "companion": "Lyra", "value": 20}"#,
        )
        .unwrap();
        assert_eq!(
            cond,
            Condition::CompanionTrustAbove {
                companion: "Lyra".into(),
                value: 20
            }
        );
    }
}
