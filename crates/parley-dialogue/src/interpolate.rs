//! Placeholder substitution for displayed text.

use parley_core::{Alignment, GameState};

/// Replace every known `{Placeholder}` in `text` with the subject's values.
///
/// Supported: `{PlayerName}`, `{RealName}`, `{Level}`, `{Class}`, `{Race}`,
/// `{Gold}`, `{Chivalry}`, `{Darkness}`, `{Cycle}`, `{Chapter}`. Unknown
/// braces are left untouched.
pub fn interpolate(text: &str, state: &dyn GameState) -> String {
    if !text.contains('{') {
        return text.to_string();
    }

    let subject = state.subject();
    let story = state.story();
    let values = [
        ("{PlayerName}", subject.display_name().to_string()),
        ("{RealName}", subject.real_name().to_string()),
        ("{Level}", subject.level().to_string()),
        ("{Class}", subject.class().to_string()),
        ("{Race}", subject.race().to_string()),
        ("{Gold}", subject.gold().to_string()),
        ("{Chivalry}", subject.alignment(Alignment::Chivalry).to_string()),
        ("{Darkness}", subject.alignment(Alignment::Darkness).to_string()),
        ("{Cycle}", story.cycle().to_string()),
        ("{Chapter}", story.chapter().to_string()),
    ];

    values
        .iter()
        .fold(text.to_string(), |acc, (token, value)| acc.replace(token, value))
}
