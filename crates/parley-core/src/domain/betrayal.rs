//! Betrayal points accumulated against NPCs.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Points at which an NPC's betrayal becomes pending.
pub const PENDING_BETRAYAL_POINTS: i64 = 100;

/// Read/write access to the betrayal ledger.
pub trait BetrayalLedger {
    /// Whether `npc` has already betrayed the subject.
    fn has_betrayed(&self, npc: &str) -> bool;
    /// Whether `npc` is about to betray the subject.
    fn has_pending_betrayal(&self, npc: &str) -> bool;

    /// Push `npc` towards betrayal.
    fn add_points(&mut self, npc: &str, amount: i64, reason: &str);
    /// Pull `npc` back from betrayal.
    fn reduce_points(&mut self, npc: &str, amount: i64, reason: &str);
}

/// In-memory betrayal ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Betrayals {
    /// Points per NPC, never negative.
    pub points: BTreeMap<String, i64>,
    /// NPCs whose betrayal has happened.
    pub betrayed: BTreeSet<String>,
    /// Reasons given for every change, oldest first.
    pub log: Vec<String>,
}

impl BetrayalLedger for Betrayals {
    fn has_betrayed(&self, npc: &str) -> bool {
        self.betrayed.contains(npc)
    }

    fn has_pending_betrayal(&self, npc: &str) -> bool {
        !self.has_betrayed(npc)
            && self
                .points
                .get(npc)
                .is_some_and(|&p| p >= PENDING_BETRAYAL_POINTS)
    }

    fn add_points(&mut self, npc: &str, amount: i64, reason: &str) {
        let points = self.points.entry(npc.to_string()).or_default();
        *points = points.saturating_add(amount).max(0);
        self.log.push(format!("{npc} +{amount}: {reason}"));
    }

    fn reduce_points(&mut self, npc: &str, amount: i64, reason: &str) {
        let points = self.points.entry(npc.to_string()).or_default();
        *points = points.saturating_sub(amount).max(0);
        self.log.push(format!("{npc} -{amount}: {reason}"));
    }
}
