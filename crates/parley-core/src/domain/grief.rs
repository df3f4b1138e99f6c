//! Grief over a fallen companion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stages of the grief cycle, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GriefStage {
    /// Refusing to accept the loss.
    Denial,
    /// Lashing out.
    Anger,
    /// Looking for a way to undo it.
    Bargaining,
    /// Withdrawn.
    Depression,
    /// At peace with the loss.
    Acceptance,
}

impl fmt::Display for GriefStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Denial => "Denial",
            Self::Anger => "Anger",
            Self::Bargaining => "Bargaining",
            Self::Depression => "Depression",
            Self::Acceptance => "Acceptance",
        };
        write!(f, "{name}")
    }
}

/// Read access to the grief cycle.
pub trait GriefTracker {
    /// Whether the subject is grieving right now.
    fn is_grieving(&self) -> bool;
    /// Current stage, if grieving.
    fn stage(&self) -> Option<GriefStage>;
    /// Whether a grief cycle has ever run to acceptance.
    fn has_completed_cycle(&self) -> bool;
}

/// In-memory grief state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grief {
    /// Current stage; `None` when not grieving.
    pub stage: Option<GriefStage>,
    /// A cycle reached acceptance at least once.
    pub completed_cycle: bool,
}

impl GriefTracker for Grief {
    fn is_grieving(&self) -> bool {
        self.stage.is_some()
    }

    fn stage(&self) -> Option<GriefStage> {
        self.stage
    }

    fn has_completed_cycle(&self) -> bool {
        self.completed_cycle
    }
}
