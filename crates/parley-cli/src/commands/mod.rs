pub mod check;
pub mod list;
pub mod play;

use std::path::Path;

use parley_dialogue::{DialogueEngine, EngineConfig, load_dir};

/// Load every content file in `dir` into a new engine.
fn load_engine(dir: &Path, config: EngineConfig) -> Result<DialogueEngine, String> {
    let files = load_dir(dir).map_err(|e| e.to_string())?;
    if files.is_empty() {
        return Err(format!("no .json content files in {}", dir.display()));
    }

    let mut engine = DialogueEngine::with_config(config);
    for (path, content) in files {
        let count = engine.install(content);
        tracing::debug!(path = %path.display(), trees = count, "installed content");
    }
    Ok(engine)
}
