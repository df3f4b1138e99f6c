use std::path::Path;

use colored::Colorize;
use parley_core::InMemoryState;
use parley_dialogue::{EngineConfig, NodeScope, PacingConfig};

use crate::terminal::TerminalConsole;

pub struct PlayArgs<'a> {
    pub dir: &'a Path,
    pub tree: &'a str,
    pub profile: Option<&'a Path>,
    pub save: Option<&'a Path>,
    pub pacing: bool,
    pub scope: NodeScope,
}

pub fn run(args: &PlayArgs<'_>) -> Result<(), String> {
    let pacing = if args.pacing {
        PacingConfig::default()
    } else {
        PacingConfig::disabled()
    };
    let config = EngineConfig::new()
        .with_pacing(pacing)
        .with_node_scope(args.scope);
    let mut engine = super::load_engine(args.dir, config)?;

    if engine.registry().lookup(args.tree).is_none() {
        return Err(format!("no dialogue tree named '{}'", args.tree));
    }

    let mut state = match args.profile {
        Some(path) => InMemoryState::load(path).map_err(|e| e.to_string())?,
        None => InMemoryState::default(),
    };

    let mut console = TerminalConsole::new();
    let result = engine.start_dialogue(&mut state, args.tree, &mut console);

    match result.end_node_id() {
        Some(node) if result.completed => {
            println!("  {} at '{node}'.", "Dialogue complete".bold());
        }
        _ => println!("  {}", "You walk away without a word.".dimmed()),
    }

    if let Some(path) = args.save {
        state.save(path).map_err(|e| e.to_string())?;
        println!("  Profile saved to {}", path.display());
    }

    Ok(())
}
