//! Source motion data
//!
//! In-memory form of a parsed hierarchical motion file:
//! - Channel / ChannelMask / ChannelData: per-axis sample storage
//! - SourceJoint: named joint with bind offset, channels and children
//! - SourceClip: root joint plus frame count and frame rate

pub mod channel;
pub mod clip;
pub mod joint;

pub use channel::{Channel, ChannelData, ChannelMask, UnknownChannel};
pub use clip::SourceClip;
pub use joint::{JointIter, SourceJoint};
