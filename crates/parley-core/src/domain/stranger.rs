//! The recurring stranger's view of the subject.

use serde::{Deserialize, Serialize};

/// Read access to the recurring stranger's receptivity tracking.
pub trait StrangerTracker {
    /// How open the subject has been, -100 to 100.
    fn receptivity(&self) -> i64;
    /// Number of encounters so far.
    fn encounters(&self) -> u32;
    /// Whether the subject knows who the stranger really is.
    fn knows_truth(&self) -> bool;
}

/// In-memory stranger state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stranger {
    /// Receptivity, -100 to 100.
    pub receptivity: i64,
    /// Encounters so far.
    pub encounters: u32,
    /// The truth is known.
    pub knows_truth: bool,
}

impl StrangerTracker for Stranger {
    fn receptivity(&self) -> i64 {
        self.receptivity.clamp(-100, 100)
    }

    fn encounters(&self) -> u32 {
        self.encounters
    }

    fn knows_truth(&self) -> bool {
        self.knows_truth
    }
}
