use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use parley_dialogue::EngineConfig;

pub fn run(dir: &Path) -> Result<(), String> {
    let engine = super::load_engine(dir, EngineConfig::new())?;
    let registry = engine.registry();

    if registry.is_empty() {
        println!("  No dialogue trees found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Root", "Nodes"]);

    for tree in registry.trees() {
        let name = if tree.name.is_empty() {
            "—".to_string()
        } else {
            tree.name.clone()
        };
        table.add_row(vec![
            tree.id.clone(),
            name,
            tree.root.clone(),
            tree.nodes.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} trees", registry.len());

    Ok(())
}
