//! Story flags, recorded choices, chapters and collected artifacts.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Read/write access to the narrative ledger.
pub trait StoryLedger {
    /// Whether a story flag is set.
    fn has_flag(&self, flag: &str) -> bool;
    /// Whether a choice outcome has been recorded under `choice`.
    fn has_made_choice(&self, choice: &str) -> bool;
    /// The current chapter ordinal.
    fn chapter(&self) -> u32;
    /// The current cycle (number of times the story has looped).
    fn cycle(&self) -> u32;
    /// Whether an artifact has been collected.
    fn has_artifact(&self, artifact: &str) -> bool;

    /// Set or clear a story flag.
    fn set_flag(&mut self, flag: &str, value: bool);
    /// Record that `choice` resolved to `outcome`.
    fn record_choice(&mut self, choice: &str, outcome: &str);
    /// Move the story to `chapter` if it is later than the current one.
    fn advance_chapter(&mut self, chapter: u32);
    /// Add an artifact to the collection.
    fn collect_artifact(&mut self, artifact: &str);
    /// Fire a named world event.
    fn trigger_event(&mut self, event: &str, detail: &str);
}

/// A world event fired from dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryEvent {
    /// Event name.
    pub name: String,
    /// Free-form detail, often empty.
    pub detail: String,
}

/// In-memory story ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Story {
    /// Flags currently set.
    pub flags: BTreeSet<String>,
    /// Recorded choice outcomes, keyed by choice.
    pub choices: BTreeMap<String, String>,
    /// Current chapter ordinal.
    pub chapter: u32,
    /// Current cycle.
    pub cycle: u32,
    /// Collected artifacts.
    pub artifacts: BTreeSet<String>,
    /// Events fired so far, oldest first.
    pub events: Vec<StoryEvent>,
}

impl Story {
    /// Look up the outcome recorded for a choice.
    pub fn choice_outcome(&self, choice: &str) -> Option<&str> {
        self.choices.get(choice).map(String::as_str)
    }
}

impl StoryLedger for Story {
    fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    fn has_made_choice(&self, choice: &str) -> bool {
        self.choices.contains_key(choice)
    }

    fn chapter(&self) -> u32 {
        self.chapter
    }

    fn cycle(&self) -> u32 {
        self.cycle
    }

    fn has_artifact(&self, artifact: &str) -> bool {
        self.artifacts.contains(artifact)
    }

    fn set_flag(&mut self, flag: &str, value: bool) {
        if value {
            self.flags.insert(flag.to_string());
        } else {
            self.flags.remove(flag);
        }
    }

    fn record_choice(&mut self, choice: &str, outcome: &str) {
        self.choices.insert(choice.to_string(), outcome.to_string());
    }

    fn advance_chapter(&mut self, chapter: u32) {
        self.chapter = self.chapter.max(chapter);
    }

    fn collect_artifact(&mut self, artifact: &str) {
        self.artifacts.insert(artifact.to_string());
    }

    fn trigger_event(&mut self, event: &str, detail: &str) {
        self.events.push(StoryEvent {
            name: event.to_string(),
            detail: detail.to_string(),
        });
    }
}
