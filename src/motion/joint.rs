use glam::{EulerRot, Vec3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::motion::channel::{Channel, ChannelData, ChannelMask};

/// A joint of the source motion hierarchy.
///
/// `channels` is indexed by [`Channel::index`]; `channel_order` records the
/// order the channels were authored in, which defines the Euler composition
/// of the rotation channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceJoint {
    pub name: String,
    /// Position relative to the parent at bind time.
    pub offset: Vec3,
    pub channels: [ChannelData; 6],
    #[serde(default)]
    pub channel_order: SmallVec<[Channel; 6]>,
    #[serde(default)]
    pub children: Vec<SourceJoint>,
}

impl SourceJoint {
    #[must_use]
    pub fn new(name: impl Into<String>, offset: Vec3) -> Self {
        Self {
            name: name.into(),
            offset,
            ..Self::default()
        }
    }

    /// Enables `channel` with the given samples and appends it to the
    /// authored order.
    #[must_use]
    pub fn with_channel(mut self, channel: Channel, samples: Vec<f32>) -> Self {
        self.set_channel(channel, samples);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: SourceJoint) -> Self {
        self.children.push(child);
        self
    }

    pub fn set_channel(&mut self, channel: Channel, samples: Vec<f32>) {
        self.channels[channel.index()] = ChannelData::new(samples);
        if !self.channel_order.contains(&channel) {
            self.channel_order.push(channel);
        }
    }

    #[inline]
    #[must_use]
    pub fn channel(&self, channel: Channel) -> &ChannelData {
        &self.channels[channel.index()]
    }

    /// Samples of an enabled channel.
    #[must_use]
    pub fn samples(&self, channel: Channel) -> Option<&[f32]> {
        let data = self.channel(channel);
        data.enabled.then_some(data.samples.as_slice())
    }

    #[must_use]
    pub fn enabled_mask(&self) -> ChannelMask {
        Channel::ALL
            .into_iter()
            .filter(|&c| self.channel(c).enabled)
            .fold(ChannelMask::empty(), |mask, c| mask | c.mask())
    }

    /// Euler composition matching the authored order of the rotation
    /// channels. Falls back to `YXZ` when the order does not name all three
    /// rotation axes exactly once.
    #[must_use]
    pub fn rotation_order(&self) -> EulerRot {
        use Channel::{RotX as X, RotY as Y, RotZ as Z};

        let rotations: SmallVec<[Channel; 3]> = self
            .channel_order
            .iter()
            .copied()
            .filter(|c| c.is_rotation())
            .collect();

        match rotations.as_slice() {
            [X, Y, Z] => EulerRot::XYZ,
            [X, Z, Y] => EulerRot::XZY,
            [Y, X, Z] => EulerRot::YXZ,
            [Y, Z, X] => EulerRot::YZX,
            [Z, X, Y] => EulerRot::ZXY,
            [Z, Y, X] => EulerRot::ZYX,
            _ => EulerRot::YXZ,
        }
    }

    /// Pre-order iterator over this joint and all of its descendants.
    pub fn iter(&self) -> JointIter<'_> {
        JointIter { stack: vec![self] }
    }
}

pub struct JointIter<'a> {
    stack: Vec<&'a SourceJoint>,
}

impl<'a> Iterator for JointIter<'a> {
    type Item = &'a SourceJoint;

    fn next(&mut self) -> Option<Self::Item> {
        let joint = self.stack.pop()?;
        self.stack.extend(joint.children.iter().rev());
        Some(joint)
    }
}
