//! Integration tests for dialogue content loading and validation.

use parley_core::domain::Player;
use parley_core::{InMemoryState, StoryLedger};
use parley_dialogue::{
    Color, ContentFile, ContentReport, DialogueEngine, EngineConfig, NodeScope, PacingConfig,
    ScriptedConsole,
};

const DEMO: &str = include_str!("../../../demos/stranger.json");

fn demo_engine() -> DialogueEngine {
    let mut engine =
        DialogueEngine::with_config(EngineConfig::new().with_pacing(PacingConfig::disabled()));
    let content = ContentFile::from_json(DEMO).unwrap();
    assert_eq!(engine.install(content), 2);
    engine
}

#[test]
fn demo_content_is_clean() {
    let engine = demo_engine();
    for scope in [NodeScope::Global, NodeScope::Tree] {
        let report = ContentReport::check(engine.registry(), scope);
        assert!(report.is_clean(), "{report:?}");
    }
}

#[test]
fn demo_speakers_are_colored() {
    let engine = demo_engine();
    assert_eq!(
        engine.config().speaker_color("the stranger"),
        Color::BrightMagenta
    );
    assert_eq!(engine.config().speaker_color("Innkeeper"), Color::Yellow);
}

#[test]
fn demo_listening_path_unlocks_the_innkeeper_question() {
    let mut engine = demo_engine();
    let mut state = InMemoryState::new(Player::new("Rowan").with_level(4));

    let mut console = ScriptedConsole::new(["2"]);
    let result = engine.start_dialogue(&mut state, "stranger_first_meeting", &mut console);

    assert_eq!(result.end_node_id(), Some("parting"));
    assert_eq!(console.prompt_count(), 1);
    assert_eq!(state.player.chivalry, 5);
    assert_eq!(state.player.gold, 5);
    assert_eq!(state.awakening.points, 10);
    assert_eq!(state.story.choice_outcome("stranger_first"), Some("listened"));
    assert!(state.story.has_flag("met_stranger"));

    // 5 gold is not enough for a room, but the stranger question is open
    let mut console = ScriptedConsole::new(["1"]);
    let result = engine.start_dialogue(&mut state, "innkeeper", &mut console);

    assert!(console.printed("Welcome back. You have 5 gold, I see."));
    assert!(console.printed("[1] Who was that in the corner?"));
    assert_eq!(result.end_node_id(), Some("inn_stranger"));
    assert!(engine.history().has_completed("stranger_first_meeting"));
    assert!(engine.history().has_completed("innkeeper"));
}
