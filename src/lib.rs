//! Motion-capture retargeting for the Myth engine.
//!
//! Converts hierarchical joint+channel motion data onto an arbitrary target
//! skeleton whose joint names differ from the source:
//!
//! 1. [`Skeleton`] is extracted once from the target [`Scene`].
//! 2. A [`RemapTable`] maps source joint names to target bone names.
//! 3. The [`Retargeter`] converts every mapped joint of a [`SourceClip`] into
//!    local-space curves and hands them to a [`CurveSink`].
//!
//! ```rust,ignore
//! use myth_retarget::prelude::*;
//!
//! let skeleton = Skeleton::extract(&scene, root);
//! let mut clip = AnimationClip::new("Walk");
//! let report = Retargeter::new(RetargetSettings::default())
//!     .retarget(&mut scene, &skeleton, &remap, &source, &mut clip)?;
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod errors;
pub mod motion;
pub mod remap;
pub mod retarget;
pub mod scene;

pub use animation::{AnimationClip, AnimationCurve, CurveName, CurveSink, Keyframe, RetargetedCurveSet};
pub use errors::{Result, RetargetError};
pub use motion::{Channel, ChannelData, ChannelMask, SourceClip, SourceJoint};
pub use remap::{RemapEntry, RemapTable};
pub use retarget::{RetargetReport, RetargetSettings, Retargeter, SkipReason, SkippedJoint};
pub use scene::{Bone, Node, NodeHandle, Scene, Skeleton, Transform};

/// Commonly used types in one import.
pub mod prelude {
    pub use crate::animation::{AnimationClip, CurveName, CurveSink, Keyframe};
    pub use crate::motion::{Channel, ChannelData, SourceClip, SourceJoint};
    pub use crate::remap::RemapTable;
    pub use crate::retarget::{RetargetReport, RetargetSettings, Retargeter};
    pub use crate::scene::{NodeHandle, Scene, Skeleton};
}
