//! A [`Console`] on stdin/stdout.

use std::io::{self, BufRead, StdinLock, Write};
use std::time::Duration;

use colored::{ColoredString, Colorize};
use parley_dialogue::{Color, Console};

pub struct TerminalConsole {
    reader: StdinLock<'static>,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl Console for TerminalConsole {
    fn write_line(&mut self, text: &str, color: Color) {
        println!("{}", paint(text, color));
    }

    fn read_choice(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        if let Err(e) = io::stdout().flush() {
            tracing::warn!(error = %e, "cannot flush stdout");
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None, // EOF
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "cannot read input");
                None
            }
        }
    }

    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

fn paint(text: &str, color: Color) -> ColoredString {
    match color {
        Color::White => text.bright_white(),
        Color::Gray => text.white(),
        Color::DarkGray => text.bright_black(),
        Color::Red => text.red(),
        Color::BrightRed => text.bright_red(),
        Color::DarkRed => text.red().dimmed(),
        Color::Green => text.green(),
        Color::BrightGreen => text.bright_green(),
        Color::DarkGreen => text.green().dimmed(),
        Color::Yellow => text.yellow(),
        Color::BrightYellow => text.bright_yellow(),
        Color::DarkYellow => text.yellow().dimmed(),
        Color::Cyan => text.cyan(),
        Color::BrightCyan => text.bright_cyan(),
        Color::Magenta => text.magenta(),
        Color::BrightMagenta => text.bright_magenta(),
        Color::DarkMagenta => text.magenta().dimmed(),
    }
}
