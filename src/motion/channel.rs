use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// One authored degree of freedom of a source joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    PosX,
    PosY,
    PosZ,
    RotX,
    RotY,
    RotZ,
}

impl Channel {
    /// Canonical storage order.
    pub const ALL: [Channel; 6] = [
        Channel::PosX,
        Channel::PosY,
        Channel::PosZ,
        Channel::RotX,
        Channel::RotY,
        Channel::RotZ,
    ];

    /// Slot of this channel in [`Channel::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_rotation(self) -> bool {
        matches!(self, Channel::RotX | Channel::RotY | Channel::RotZ)
    }

    #[must_use]
    pub const fn mask(self) -> ChannelMask {
        match self {
            Channel::PosX => ChannelMask::POS_X,
            Channel::PosY => ChannelMask::POS_Y,
            Channel::PosZ => ChannelMask::POS_Z,
            Channel::RotX => ChannelMask::ROT_X,
            Channel::RotY => ChannelMask::ROT_Y,
            Channel::RotZ => ChannelMask::ROT_Z,
        }
    }

    /// Keyword used by hierarchical motion files (`Xposition`, `Zrotation`, ...).
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Channel::PosX => "Xposition",
            Channel::PosY => "Yposition",
            Channel::PosZ => "Zposition",
            Channel::RotX => "Xrotation",
            Channel::RotY => "Yrotation",
            Channel::RotZ => "Zrotation",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChannel(pub String);

impl fmt::Display for UnknownChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown channel keyword '{}'", self.0)
    }
}

impl std::error::Error for UnknownChannel {}

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.keyword().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownChannel(s.to_owned()))
    }
}

bitflags! {
    /// Set of enabled channels of a joint.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ChannelMask: u8 {
        const POS_X = 1 << 0;
        const POS_Y = 1 << 1;
        const POS_Z = 1 << 2;
        const ROT_X = 1 << 3;
        const ROT_Y = 1 << 4;
        const ROT_Z = 1 << 5;

        const POSITION = Self::POS_X.bits() | Self::POS_Y.bits() | Self::POS_Z.bits();
        const ROTATION = Self::ROT_X.bits() | Self::ROT_Y.bits() | Self::ROT_Z.bits();
    }
}

impl ChannelMask {
    #[inline]
    #[must_use]
    pub fn has_full_position(self) -> bool {
        self.contains(ChannelMask::POSITION)
    }

    #[inline]
    #[must_use]
    pub fn has_full_rotation(self) -> bool {
        self.contains(ChannelMask::ROTATION)
    }
}

/// Sample storage of one channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelData {
    pub enabled: bool,
    #[serde(default)]
    pub samples: Vec<f32>,
}

impl ChannelData {
    #[must_use]
    pub fn new(samples: Vec<f32>) -> Self {
        Self {
            enabled: true,
            samples,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }
}
