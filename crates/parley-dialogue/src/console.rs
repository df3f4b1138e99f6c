//! The presentation port: where dialogue text goes and choices come from.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Display colors available to dialogue content.
///
/// Unrecognized names in content fall back to [`Color::White`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Gray.
    Gray,
    /// Dark gray.
    DarkGray,
    /// Red.
    Red,
    /// Bright red.
    BrightRed,
    /// Dark red.
    DarkRed,
    /// Green.
    Green,
    /// Bright green.
    BrightGreen,
    /// Dark green.
    DarkGreen,
    /// Yellow.
    Yellow,
    /// Bright yellow.
    BrightYellow,
    /// Dark yellow.
    DarkYellow,
    /// Cyan.
    Cyan,
    /// Bright cyan.
    BrightCyan,
    /// Magenta.
    Magenta,
    /// Bright magenta.
    BrightMagenta,
    /// Dark magenta.
    DarkMagenta,
    /// White, the default.
    #[default]
    #[serde(other)]
    White,
}

/// Where a traversal renders text and reads the player's selection.
///
/// A traversal only ever suspends inside [`read_choice`](Console::read_choice)
/// and [`pause`](Console::pause).
pub trait Console {
    /// Write one line of text.
    fn write_line(&mut self, text: &str, color: Color);

    /// Prompt for a selection. `None` means input is closed.
    fn read_choice(&mut self, prompt: &str) -> Option<String>;

    /// Wait for pacing. Purely cosmetic.
    fn pause(&mut self, duration: Duration);
}

/// A console fed from a script of inputs that records everything written.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    lines: Vec<(String, Color)>,
    prompts: usize,
    pauses: Vec<Duration>,
}

impl ScriptedConsole {
    /// Create a console that answers prompts with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every line written, with its color.
    pub fn lines(&self) -> &[(String, Color)] {
        &self.lines
    }

    /// Every line written, text only.
    pub fn transcript(&self) -> Vec<&str> {
        self.lines.iter().map(|(text, _)| text.as_str()).collect()
    }

    /// Whether any written line equals `text`.
    pub fn printed(&self, text: &str) -> bool {
        self.lines.iter().any(|(line, _)| line == text)
    }

    /// How many times a selection was requested.
    pub fn prompt_count(&self) -> usize {
        self.prompts
    }

    /// Every pause requested, in order.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Inputs not consumed yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, text: &str, color: Color) {
        self.lines.push((text.to_string(), color));
    }

    fn read_choice(&mut self, _prompt: &str) -> Option<String> {
        self.prompts += 1;
        self.inputs.pop_front()
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
