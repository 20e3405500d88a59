use serde::{Deserialize, Serialize};

use crate::errors::{Result, RetargetError};
use crate::motion::channel::Channel;
use crate::motion::joint::{JointIter, SourceJoint};

/// A fully parsed source motion clip.
///
/// The root joint's offset is the clip's origin reference. Every enabled
/// channel must carry exactly `frame_count` samples; see [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceClip {
    pub root: SourceJoint,
    pub frame_count: usize,
    /// Frames per second.
    pub frame_rate: f32,
}

impl SourceClip {
    #[must_use]
    pub fn new(root: SourceJoint, frame_count: usize, frame_rate: f32) -> Self {
        Self {
            root,
            frame_count,
            frame_rate,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let clip: Self = serde_json::from_str(json)?;
        Ok(clip)
    }

    /// Checks frame rate, frame count and every enabled channel's length.
    pub fn validate(&self) -> Result<()> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(RetargetError::InvalidFrameRate(self.frame_rate));
        }
        if self.frame_count == 0 {
            return Err(RetargetError::EmptyClip);
        }

        for joint in self.joints() {
            for channel in Channel::ALL {
                let data = joint.channel(channel);
                if data.enabled && data.samples.len() != self.frame_count {
                    return Err(RetargetError::ChannelLengthMismatch {
                        joint: joint.name.clone(),
                        channel,
                        expected: self.frame_count,
                        actual: data.samples.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// All joints in pre-order, root first.
    pub fn joints(&self) -> JointIter<'_> {
        self.root.iter()
    }

    #[must_use]
    pub fn joint_names(&self) -> Vec<&str> {
        self.joints().map(|j| j.name.as_str()).collect()
    }

    #[must_use]
    pub fn find_joint(&self, name: &str) -> Option<&SourceJoint> {
        self.joints().find(|j| j.name == name)
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.frame_count as f32 / self.frame_rate
    }

    /// Key time of frame `index`. Frames are keyed one period after the
    /// start, so frame 0 lands on `1 / frame_rate`.
    #[inline]
    #[must_use]
    pub fn frame_time(&self, index: usize) -> f32 {
        (index + 1) as f32 / self.frame_rate
    }

    /// Removes every non-root joint matching `predicate` together with its
    /// subtree. Returns the number of joints removed.
    pub fn prune<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&SourceJoint) -> bool,
    {
        let mut removed = 0;
        let mut stack: Vec<&mut SourceJoint> = vec![&mut self.root];

        while let Some(joint) = stack.pop() {
            joint.children.retain(|child| {
                if predicate(child) {
                    removed += child.iter().count();
                    false
                } else {
                    true
                }
            });
            stack.extend(joint.children.iter_mut());
        }

        if removed > 0 {
            log::debug!("Pruned {removed} joints from source clip");
        }
        removed
    }
}
