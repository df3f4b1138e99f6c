//! The traversal engine: walks a dialogue tree from its root to an end.

use std::fmt;
use std::time::Duration;

use parley_core::GameState;
use tracing::{debug, info, warn};

use crate::choice::{
    DialogueChoice, DialogueHistory, DialogueNode, DialogueResult, DialogueTree, Effect, evaluate,
};
use crate::config::{EngineConfig, NodeScope};
use crate::console::{Color, Console};
use crate::event::DialogueEvent;
use crate::interpolate::interpolate;
use crate::loader::ContentFile;
use crate::registry::TreeRegistry;

/// Choices on `node` whose condition currently holds, in declared order.
///
/// Evaluated fresh on every call.
pub fn available_choices<'n>(
    node: &'n DialogueNode,
    state: &dyn GameState,
) -> Vec<&'n DialogueChoice> {
    offered(node, state)
        .into_iter()
        .map(|(_, choice)| choice)
        .collect()
}

/// Legal choices paired with their position in `node.choices`.
fn offered<'n>(
    node: &'n DialogueNode,
    state: &dyn GameState,
) -> Vec<(usize, &'n DialogueChoice)> {
    node.choices
        .iter()
        .enumerate()
        .filter(|(_, choice)| evaluate(choice.condition.as_ref(), state))
        .collect()
}

type Listener = Box<dyn FnMut(&DialogueEvent)>;

#[derive(Default)]
struct EventSink {
    listeners: Vec<Listener>,
    buffer: Vec<DialogueEvent>,
}

impl EventSink {
    fn emit(&mut self, event: DialogueEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
        self.buffer.push(event);
    }
}

/// Runs dialogues registered with it, one traversal at a time.
#[derive(Default)]
pub struct DialogueEngine {
    registry: TreeRegistry,
    config: EngineConfig,
    history: DialogueHistory,
    events: EventSink,
}

impl fmt::Debug for DialogueEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogueEngine")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .field("history", &self.history)
            .field("listeners", &self.events.listeners.len())
            .finish_non_exhaustive()
    }
}

impl DialogueEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Register a tree, replacing any tree with the same id.
    pub fn register(&mut self, tree: DialogueTree) -> Option<DialogueTree> {
        debug!(tree = %tree.id, nodes = tree.nodes.len(), "registering dialogue tree");
        self.registry.register(tree)
    }

    /// Register every tree of a content file and adopt its speaker colors.
    ///
    /// Returns the number of trees registered.
    pub fn install(&mut self, content: ContentFile) -> usize {
        for (speaker, color) in content.speakers {
            self.config
                .speaker_colors
                .insert(speaker.to_lowercase(), color);
        }
        let count = content.trees.len();
        for tree in content.trees {
            self.register(tree);
        }
        count
    }

    /// The registered trees.
    pub fn registry(&self) -> &TreeRegistry {
        &self.registry
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Dialogues finished this session.
    pub fn history(&self) -> &DialogueHistory {
        &self.history
    }

    /// Dialogues finished this session, mutably.
    pub fn history_mut(&mut self) -> &mut DialogueHistory {
        &mut self.history
    }

    /// Call `listener` for every event as it happens.
    pub fn subscribe(&mut self, listener: impl FnMut(&DialogueEvent) + 'static) {
        self.events.listeners.push(Box::new(listener));
    }

    /// Take every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<DialogueEvent> {
        std::mem::take(&mut self.events.buffer)
    }

    /// Run the tree `tree_id` against `state`, talking through `console`.
    ///
    /// Never fails: an unregistered tree (or one whose root is missing) yields
    /// [`DialogueResult::aborted`] without touching `state`.
    pub fn start_dialogue(
        &mut self,
        state: &mut dyn GameState,
        tree_id: &str,
        console: &mut dyn Console,
    ) -> DialogueResult {
        let Some(tree) = self.registry.lookup(tree_id) else {
            warn!(tree = tree_id, "dialogue tree not found");
            return DialogueResult::aborted();
        };
        let Some(root) = tree.root_node() else {
            warn!(tree = tree_id, root = %tree.root, "dialogue root not found");
            return DialogueResult::aborted();
        };

        debug!(tree = tree_id, root = %root.id, "starting dialogue");
        let mut traversal = Traversal {
            registry: &self.registry,
            config: &self.config,
            tree_id,
            state,
            console,
            history: &mut self.history,
            events: &mut self.events,
        };
        let result = traversal.run(root);

        info!(
            tree = tree_id,
            completed = result.completed,
            end_node = result.end_node_id().unwrap_or("-"),
            "dialogue finished"
        );
        self.history.record_finished(
            tree_id,
            result.completed,
            result.end_node_id().map(str::to_string),
        );
        self.events.emit(DialogueEvent::Completed {
            tree_id: tree_id.to_string(),
            completed: result.completed,
        });
        result
    }
}

enum Selection {
    Abort,
    Pick(usize),
}

fn parse_selection(input: &str, count: usize) -> Option<Selection> {
    let input = input.trim();
    if input == "0" {
        return Some(Selection::Abort);
    }
    match input.parse::<usize>() {
        Ok(k) if (1..=count).contains(&k) => Some(Selection::Pick(k - 1)),
        _ => None,
    }
}

/// One run of the state machine. Lives only for the duration of a traversal.
struct Traversal<'a> {
    registry: &'a TreeRegistry,
    config: &'a EngineConfig,
    tree_id: &'a str,
    state: &'a mut dyn GameState,
    console: &'a mut dyn Console,
    history: &'a mut DialogueHistory,
    events: &'a mut EventSink,
}

impl<'a> Traversal<'a> {
    fn run(&mut self, root: &'a DialogueNode) -> DialogueResult {
        let mut current = root;
        loop {
            self.display(current);

            if current.is_end {
                self.apply_all(&current.effects);
                return DialogueResult::completed(current.clone());
            }

            let choices = offered(current, &*self.state);
            let next_id = match choices.as_slice() {
                [] => match current.next.as_deref() {
                    Some(next) => {
                        self.pause(self.config.pacing.transition);
                        next
                    }
                    None => {
                        debug!(node = %current.id, "no choices and no successor");
                        return DialogueResult::completed(current.clone());
                    }
                },
                [(_, only)] if only.auto_select => {
                    debug!(node = %current.id, next = %only.next, "auto-selecting choice");
                    self.apply_all(&only.effects);
                    self.pause(self.config.pacing.auto_select);
                    only.next.as_str()
                }
                _ => match self.prompt(&choices) {
                    Selection::Pick(index) => {
                        let (declared, choice) = choices[index];
                        self.apply_all(&choice.effects);
                        self.history.mark_choice(&current.id, declared);
                        self.events.emit(DialogueEvent::ChoiceMade {
                            node_id: current.id.clone(),
                            choice_index: declared,
                            choice_text: choice.text.clone(),
                        });
                        choice.next.as_str()
                    }
                    Selection::Abort => {
                        debug!(node = %current.id, "player said nothing");
                        return DialogueResult::aborted();
                    }
                },
            };

            match self.resolve(next_id) {
                Some(next) => {
                    debug!(from = %current.id, to = %next.id, "transition");
                    current = next;
                }
                None => {
                    warn!(
                        tree = self.tree_id,
                        from = %current.id,
                        target = next_id,
                        "dangling node reference, ending in place"
                    );
                    return DialogueResult::completed(current.clone());
                }
            }
        }
    }

    fn resolve(&self, node_id: &str) -> Option<&'a DialogueNode> {
        match self.config.node_scope {
            NodeScope::Global => self.registry.resolve_node(node_id),
            NodeScope::Tree => self.registry.resolve_in(self.tree_id, node_id),
        }
    }

    fn display(&mut self, node: &DialogueNode) {
        debug!(node = %node.id, "displaying node");
        self.console.write_line("", Color::White);

        if let Some(speaker) = &node.speaker {
            let color = self.config.speaker_color(speaker);
            self.console.write_line(&format!("[{speaker}]"), color);
        }

        let color = node.text_color.unwrap_or_default();
        for line in &node.text {
            let rendered = interpolate(line, &*self.state);
            self.console.write_line(&rendered, color);
            self.pause(self.config.pacing.line_delay(rendered.chars().count()));
        }

        self.console.write_line("", Color::White);
    }

    fn prompt(&mut self, choices: &[(usize, &DialogueChoice)]) -> Selection {
        self.console.write_line("What do you say?", Color::Cyan);
        self.console.write_line("", Color::White);
        for (i, (_, choice)) in choices.iter().enumerate() {
            self.console
                .write_line(&format!("[{}] {}", i + 1, choice.text), choice.color());
        }
        self.console.write_line("[0] (Say nothing)", Color::DarkGray);
        self.console.write_line("", Color::White);

        loop {
            let Some(input) = self.console.read_choice("Your choice: ") else {
                debug!("input closed at prompt");
                return Selection::Abort;
            };
            match parse_selection(&input, choices.len()) {
                Some(selection) => return selection,
                None => self
                    .console
                    .write_line("Please enter a valid choice.", Color::Red),
            }
        }
    }

    fn apply_all(&mut self, effects: &[Effect]) {
        for effect in effects {
            debug!(?effect, "applying effect");
            if let Some(notice) = effect.apply(&mut *self.state) {
                self.console.write_line(&notice.text, notice.color);
            }
        }
    }

    fn pause(&mut self, duration: Duration) {
        if self.config.pacing.enabled && !duration.is_zero() {
            self.console.pause(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::Condition;
    use parley_core::InMemoryState;
    use parley_core::domain::Player;

    #[test]
    fn selection_parsing() {
        assert!(matches!(parse_selection("0", 2), Some(Selection::Abort)));
        assert!(matches!(parse_selection(" 2 ", 2), Some(Selection::Pick(1))));
        assert!(parse_selection("3", 2).is_none());
        assert!(parse_selection("two", 2).is_none());
        assert!(parse_selection("", 2).is_none());
        assert!(parse_selection("-1", 2).is_none());
    }

    #[test]
    fn choices_are_filtered_fresh() {
        let node = DialogueNode::new("gate")
            .with_choice(DialogueChoice::new("Open sesame", "inside").with_condition(
                Condition::HasStoryFlag {
                    flag: "password".into(),
                },
            ))
            .with_choice(DialogueChoice::new("Knock", "door"));

        let mut state = InMemoryState::new(Player::new("Rowan"));
        let texts: Vec<_> = available_choices(&node, &state)
            .iter()
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(texts, ["Knock"]);

        state.story.flags.insert("password".into());
        assert_eq!(available_choices(&node, &state).len(), 2);
    }

    #[test]
    fn offered_choices_keep_declared_positions() {
        let node = DialogueNode::new("gate")
            .with_choice(DialogueChoice::new("Open sesame", "inside").with_condition(
                Condition::HasStoryFlag {
                    flag: "password".into(),
                },
            ))
            .with_choice(DialogueChoice::new("Knock", "door"));

        let state = InMemoryState::new(Player::new("Rowan"));
        let positions: Vec<_> = offered(&node, &state).iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, [1]);
    }

    #[test]
    fn engine_debug_hides_listeners() {
        let mut engine = DialogueEngine::new();
        engine.subscribe(|_| {});
        let text = format!("{engine:?}");
        assert!(text.contains("listeners: 1"));
    }
}
