//! Error Types
//!
//! This module defines the error types used throughout the retargeting crate.
//!
//! # Overview
//!
//! The main error type [`RetargetError`] covers every fatal failure mode:
//! - Invalid source clips (frame rate, frame count, channel lengths)
//! - Invalid settings
//! - Structural violations in the target hierarchy
//! - Unresolved mappings when running in strict mode
//! - JSON (de)serialization of remap tables, settings and clips
//!
//! Unresolved mappings are *not* errors by default; they are reported through
//! [`RetargetReport`](crate::retarget::RetargetReport) instead.
//!
//! # Usage
//!
//! ```rust,ignore
//! use myth_retarget::errors::{RetargetError, Result};
//!
//! fn build() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::motion::Channel;
use crate::retarget::SkipReason;

/// The main error type for the retargeting crate.
#[derive(Error, Debug)]
pub enum RetargetError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// The clip's frame rate is zero, negative or not finite.
    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(f32),

    /// The clip has no frames.
    #[error("Clip has no frames")]
    EmptyClip,

    /// An enabled channel does not carry exactly `frame_count` samples.
    #[error(
        "Channel {channel:?} of joint '{joint}' has {actual} samples, expected {expected}"
    )]
    ChannelLengthMismatch {
        joint: String,
        channel: Channel,
        expected: usize,
        actual: usize,
    },

    /// Retarget settings are unusable.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ========================================================================
    // Structural Errors
    // ========================================================================
    /// `target` is not a descendant of `root`.
    #[error("No path between root '{root}' and target '{target}'")]
    NoPath { root: String, target: String },

    /// A bone refers to a node that no longer exists in the scene.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    // ========================================================================
    // Mapping Errors (strict mode only)
    // ========================================================================
    /// A joint could not be retargeted and strict mode is enabled.
    #[error("Joint '{joint}' could not be retargeted: {reason}")]
    UnresolvedMapping { joint: String, reason: SkipReason },

    // ========================================================================
    // Format Errors
    // ========================================================================
    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, RetargetError>`.
pub type Result<T> = std::result::Result<T, RetargetError>;
