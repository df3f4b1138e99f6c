//! JSON dialogue content.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::choice::DialogueTree;
use crate::console::Color;
use crate::error::{ContentError, ContentResult};

/// One file of authored dialogue content.
///
/// ```json
/// {
///   "speakers": { "The Stranger": "bright_magenta" },
///   "trees": [ { "id": "...", "name": "...", "root": "...", "nodes": [ ... ] } ]
/// }
/// ```
///
/// Nothing is checked beyond the JSON shape; see
/// [`ContentReport`](crate::ContentReport) for offline checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentFile {
    /// Speaker label colors.
    #[serde(default)]
    pub speakers: BTreeMap<String, Color>,
    /// Dialogue trees.
    #[serde(default)]
    pub trees: Vec<DialogueTree>,
}

impl ContentFile {
    /// Parse content from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read a content file.
    pub fn load(path: &Path) -> ContentResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_json(&json).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), trees = content.trees.len(), "loaded content file");
        Ok(content)
    }
}

/// Read every `*.json` file directly inside `dir`, in filename order.
pub fn load_dir(dir: &Path) -> ContentResult<Vec<(PathBuf, ContentFile)>> {
    let io_error = |source| ContentError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .into_iter()
        .map(|path| {
            let content = ContentFile::load(&path)?;
            Ok((path, content))
        })
        .collect()
}
