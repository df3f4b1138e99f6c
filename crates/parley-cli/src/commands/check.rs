use std::path::Path;

use colored::Colorize;
use parley_dialogue::{ContentReport, EngineConfig, NodeScope};

pub fn run(dir: &Path, scope: NodeScope) -> Result<(), String> {
    let engine = super::load_engine(dir, EngineConfig::new().with_node_scope(scope))?;
    let report = ContentReport::check(engine.registry(), scope);

    for tree in &report.missing_roots {
        println!("  {} tree '{tree}' has no root node", "error:".red());
    }
    for link in &report.dangling {
        println!(
            "  {} {}/{} leads to missing node '{}'",
            "error:".red(),
            link.tree_id,
            link.node_id,
            link.target
        );
    }
    for collision in &report.collisions {
        println!(
            "  {} node '{}' is defined by {}",
            "warning:".yellow(),
            collision.node_id,
            collision.trees.join(", ")
        );
    }
    for node in &report.ignored_effects {
        println!(
            "  {} {}/{} has effects but is not an end node; they never run",
            "warning:".yellow(),
            node.tree_id,
            node.node_id
        );
    }

    let errors = report.missing_roots.len() + report.dangling.len();
    if errors > 0 {
        let plural = if errors == 1 { "" } else { "s" };
        return Err(format!("{errors} error{plural} in dialogue content"));
    }

    let warnings = report.warning_count();
    println!(
        "  All checks passed: {} trees, {warnings} warning{}",
        engine.registry().len(),
        if warnings == 1 { "" } else { "s" }
    );
    Ok(())
}
