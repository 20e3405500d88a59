//! Retargeted curve model and the sink it is delivered to.

pub mod binding;
pub mod clip;
pub mod curve;
pub mod sink;

pub use binding::CurveName;
pub use clip::{AnimationClip, RetargetedCurveSet};
pub use curve::{AnimationCurve, Keyframe};
pub use sink::CurveSink;
