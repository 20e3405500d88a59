use std::fmt;

use crate::motion::ChannelMask;

/// Why a source joint produced no (or only some) curves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No remap entry, or the entry's target is empty.
    Unmapped,
    /// The mapped target bone does not exist in the skeleton.
    TargetNotFound(String),
    /// Only some of the three rotation channels are enabled; no rotation
    /// curves were produced. Carries the enabled rotation channels.
    IncompleteRotation(ChannelMask),
    /// Mapped, but neither a full position nor any rotation channel set.
    NoChannels,
}

impl SkipReason {
    /// Whether strict mode treats this reason as an error.
    #[must_use]
    pub fn is_misconfiguration(&self) -> bool {
        matches!(
            self,
            SkipReason::TargetNotFound(_) | SkipReason::IncompleteRotation(_)
        )
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unmapped => f.write_str("no remap target"),
            SkipReason::TargetNotFound(target) => {
                write!(f, "target bone '{target}' not found")
            }
            SkipReason::IncompleteRotation(mask) => {
                write!(f, "incomplete rotation channels {mask:?}")
            }
            SkipReason::NoChannels => f.write_str("no convertible channels"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedJoint {
    pub joint: String,
    pub reason: SkipReason,
}

/// Outcome of a retarget run.
#[derive(Debug, Clone, Default)]
pub struct RetargetReport {
    /// Binding paths that received curves, in source pre-order.
    pub produced: Vec<String>,
    /// Joints that were skipped entirely or in part.
    pub skipped: Vec<SkippedJoint>,
    pub curve_count: usize,
}

impl RetargetReport {
    /// True when no joint was skipped for a reason other than being unmapped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped
            .iter()
            .all(|s| s.reason == SkipReason::Unmapped)
    }

    #[must_use]
    pub fn reason_for(&self, joint: &str) -> Option<&SkipReason> {
        self.skipped
            .iter()
            .find(|s| s.joint == joint)
            .map(|s| &s.reason)
    }
}
