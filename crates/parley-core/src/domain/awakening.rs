//! Spiritual awakening: insight, wave fragments and profound moments.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Insight points needed per awakening level.
const INSIGHT_PER_LEVEL: i64 = 10;
/// Highest awakening level.
const MAX_LEVEL: i64 = 7;

/// Read/write access to awakening progress.
pub trait AwakeningTracker {
    /// Current awakening level.
    fn level(&self) -> i64;
    /// Whether a wave fragment has been collected.
    fn has_fragment(&self, fragment: &str) -> bool;
    /// Number of insights gained.
    fn insight_count(&self) -> usize;
    /// Whether a named moment has been experienced.
    fn has_experienced(&self, moment: &str) -> bool;

    /// Gain one insight worth `points`.
    fn gain_insight(&mut self, points: i64);
    /// Collect a wave fragment.
    fn collect_fragment(&mut self, fragment: &str);
    /// Mark a moment as experienced.
    fn experience_moment(&mut self, moment: &str);
}

/// In-memory awakening progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Awakening {
    /// Total insight points.
    pub points: i64,
    /// Points of every insight gained, oldest first.
    pub insights: Vec<i64>,
    /// Collected wave fragments.
    pub fragments: BTreeSet<String>,
    /// Experienced moments.
    pub moments: BTreeSet<String>,
}

impl AwakeningTracker for Awakening {
    fn level(&self) -> i64 {
        (self.points / INSIGHT_PER_LEVEL).clamp(0, MAX_LEVEL)
    }

    fn has_fragment(&self, fragment: &str) -> bool {
        self.fragments.contains(fragment)
    }

    fn insight_count(&self) -> usize {
        self.insights.len()
    }

    fn has_experienced(&self, moment: &str) -> bool {
        self.moments.contains(moment)
    }

    fn gain_insight(&mut self, points: i64) {
        self.points = self.points.saturating_add(points);
        self.insights.push(points);
    }

    fn collect_fragment(&mut self, fragment: &str) {
        self.fragments.insert(fragment.to_string());
    }

    fn experience_moment(&mut self, moment: &str) {
        self.moments.insert(moment.to_string());
    }
}
