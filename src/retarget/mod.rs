//! Motion Retargeting Engine
//!
//! For every source joint with a remap target:
//! 1. resolve the target bone by name and its binding path,
//! 2. convert full position triplets into root-relative, unit-scaled
//!    `localPosition.*` curves,
//! 3. convert full rotation triplets into `localRotation.*` curves by applying
//!    each sample as a world rotation and reading back the local rotation,
//! 4. enforce quaternion continuity over the produced rotation samples.
//!
//! Joints that cannot be resolved are skipped and listed in the
//! [`RetargetReport`]; [`RetargetSettings::strict`] turns misconfigurations
//! into errors.

mod engine;
mod report;
pub mod rotation;
mod settings;

pub use engine::Retargeter;
pub use report::{RetargetReport, SkipReason, SkippedJoint};
pub use settings::RetargetSettings;
