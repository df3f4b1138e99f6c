//! Configuration for the dialogue engine.

use std::collections::HashMap;
use std::time::Duration;

use crate::console::Color;

/// Presentation timing. Cosmetic only: nothing depends on it for ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingConfig {
    /// Whether pauses are requested at all.
    pub enabled: bool,
    /// Delay per character of a rendered line.
    pub per_char: Duration,
    /// Lines longer than this are paced as if they had this many characters.
    pub max_chars: usize,
    /// Delay before following a node's successor.
    pub transition: Duration,
    /// Delay after an auto-selected choice.
    pub auto_select: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            per_char: Duration::from_millis(50),
            max_chars: 80,
            transition: Duration::from_millis(1500),
            auto_select: Duration::from_millis(1000),
        }
    }
}

impl PacingConfig {
    /// Pacing that never pauses.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set the per-character delay.
    pub fn with_per_char(mut self, per_char: Duration) -> Self {
        self.per_char = per_char;
        self
    }

    /// Delay for revealing a line of `len` characters.
    pub fn line_delay(&self, len: usize) -> Duration {
        let chars = u32::try_from(len.min(self.max_chars)).unwrap_or(u32::MAX);
        self.per_char.saturating_mul(chars)
    }
}

/// How successor node ids are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeScope {
    /// Search every registered tree, first match wins.
    #[default]
    Global,
    /// Search only the tree being traversed.
    Tree,
}

/// Configuration for a [`DialogueEngine`](crate::DialogueEngine).
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Presentation timing.
    pub pacing: PacingConfig,
    /// Successor resolution scope.
    pub node_scope: NodeScope,
    /// Speaker label colors, keyed by lowercase speaker.
    pub speaker_colors: HashMap<String, Color>,
}

impl EngineConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pacing.
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    /// Set the node resolution scope.
    pub fn with_node_scope(mut self, scope: NodeScope) -> Self {
        self.node_scope = scope;
        self
    }

    /// Color a speaker's label. Matching ignores case.
    pub fn with_speaker_color(mut self, speaker: &str, color: Color) -> Self {
        self.speaker_colors.insert(speaker.to_lowercase(), color);
        self
    }

    /// Color for a speaker label; white when unconfigured.
    pub fn speaker_color(&self, speaker: &str) -> Color {
        self.speaker_colors
            .get(&speaker.to_lowercase())
            .copied()
            .unwrap_or_default()
    }
}
