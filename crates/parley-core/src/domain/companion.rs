//! Companion roster: recruitment, life, loyalty, trust and romance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Highest loyalty or trust value a companion can hold.
const MAX_BOND: i64 = 100;
/// Highest romance level a companion can reach.
const MAX_ROMANCE: i64 = 10;

/// Read/write access to the companion roster.
pub trait CompanionRoster {
    /// Whether the companion has ever been recruited.
    fn is_recruited(&self, companion: &str) -> bool;
    /// Whether the companion is recruited and still alive.
    fn is_alive(&self, companion: &str) -> bool;
    /// Loyalty level, if the companion is on the roster.
    fn loyalty(&self, companion: &str) -> Option<i64>;
    /// Trust level, if the companion is on the roster.
    fn trust(&self, companion: &str) -> Option<i64>;
    /// Romance level, if the companion is on the roster.
    fn romance(&self, companion: &str) -> Option<i64>;
    /// Whether any companion currently travels with the subject.
    fn has_active_companion(&self) -> bool;

    /// Change loyalty by `amount`, noting why.
    fn modify_loyalty(&mut self, companion: &str, amount: i64, reason: &str);
    /// Change trust by `amount`.
    fn modify_trust(&mut self, companion: &str, amount: i64);
    /// Deepen the romance by one step.
    fn advance_romance(&mut self, companion: &str);
    /// Run the scripted death of a companion.
    fn trigger_death(&mut self, companion: &str);
}

/// One recruited companion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Companion {
    /// Still alive.
    pub alive: bool,
    /// Currently in the active party.
    pub active: bool,
    /// Loyalty, 0 to 100.
    pub loyalty: i64,
    /// Trust, 0 to 100.
    pub trust: i64,
    /// Romance, 0 to 10.
    pub romance: i64,
    /// Reasons given for loyalty changes, oldest first.
    pub history: Vec<String>,
}

impl Default for Companion {
    fn default() -> Self {
        Self {
            alive: true,
            active: true,
            loyalty: 50,
            trust: 50,
            romance: 0,
            history: Vec::new(),
        }
    }
}

/// In-memory roster keyed by companion id. Presence means recruited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Companions {
    /// Recruited companions.
    pub roster: BTreeMap<String, Companion>,
}

impl Companions {
    /// Recruit a companion with default bonds.
    pub fn recruit(&mut self, companion: impl Into<String>) -> &mut Companion {
        self.roster.entry(companion.into()).or_default()
    }

    /// Look up a companion.
    pub fn get(&self, companion: &str) -> Option<&Companion> {
        self.roster.get(companion)
    }
}

impl CompanionRoster for Companions {
    fn is_recruited(&self, companion: &str) -> bool {
        self.roster.contains_key(companion)
    }

    fn is_alive(&self, companion: &str) -> bool {
        self.roster.get(companion).is_some_and(|c| c.alive)
    }

    fn loyalty(&self, companion: &str) -> Option<i64> {
        self.roster.get(companion).map(|c| c.loyalty)
    }

    fn trust(&self, companion: &str) -> Option<i64> {
        self.roster.get(companion).map(|c| c.trust)
    }

    fn romance(&self, companion: &str) -> Option<i64> {
        self.roster.get(companion).map(|c| c.romance)
    }

    fn has_active_companion(&self) -> bool {
        self.roster.values().any(|c| c.alive && c.active)
    }

    fn modify_loyalty(&mut self, companion: &str, amount: i64, reason: &str) {
        if let Some(c) = self.roster.get_mut(companion) {
            c.loyalty = c.loyalty.saturating_add(amount).clamp(0, MAX_BOND);
            c.history.push(reason.to_string());
        }
    }

    fn modify_trust(&mut self, companion: &str, amount: i64) {
        if let Some(c) = self.roster.get_mut(companion) {
            c.trust = c.trust.saturating_add(amount).clamp(0, MAX_BOND);
        }
    }

    fn advance_romance(&mut self, companion: &str) {
        if let Some(c) = self.roster.get_mut(companion) {
            c.romance = c.romance.saturating_add(1).min(MAX_ROMANCE);
        }
    }

    fn trigger_death(&mut self, companion: &str) {
        if let Some(c) = self.roster.get_mut(companion) {
            c.alive = false;
            c.active = false;
        }
    }
}
