//! Recovery of the subject's lost memories.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Read/write access to memory recovery.
pub trait MemoryTracker {
    /// Whether a memory fragment has been recovered.
    fn has_fragment(&self, fragment: &str) -> bool;
    /// Recovery progress as a whole percentage, 0 to 100.
    fn recovery_percent(&self) -> i64;
    /// Whether the final truth has been revealed.
    fn truth_revealed(&self) -> bool;

    /// Recover a memory.
    fn reveal_memory(&mut self, memory: &str);
}

/// In-memory recovery state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Memory {
    /// Recovered fragments.
    pub recovered: BTreeSet<String>,
    /// How many fragments exist in total.
    pub total: usize,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            recovered: BTreeSet::new(),
            total: 10,
        }
    }
}

impl MemoryTracker for Memory {
    fn has_fragment(&self, fragment: &str) -> bool {
        self.recovered.contains(fragment)
    }

    fn recovery_percent(&self) -> i64 {
        if self.total == 0 {
            return 100;
        }
        let percent = self.recovered.len().saturating_mul(100) / self.total;
        i64::try_from(percent.min(100)).unwrap_or(100)
    }

    fn truth_revealed(&self) -> bool {
        self.recovered.len() >= self.total
    }

    fn reveal_memory(&mut self, memory: &str) {
        self.recovered.insert(memory.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovery_progress() {
        let mut memory = Memory {
            total: 4,
            ..Memory::default()
        };
        assert_eq!(memory.recovery_percent(), 0);
        memory.reveal_memory("childhood");
        assert_eq!(memory.recovery_percent(), 25);
        assert!(!memory.truth_revealed());

        for key in ["war", "oath", "fall"] {
            memory.reveal_memory(key);
        }
        assert_eq!(memory.recovery_percent(), 100);
        assert!(memory.truth_revealed());
    }

    #[test]
    fn revealing_twice_counts_once() {
        let mut memory = Memory::default();
        memory.reveal_memory("war");
        memory.reveal_memory("war");
        assert_eq!(memory.recovery_percent(), 10);
    }
}
