//! Retarget configuration
//!
//! ```rust,ignore
//! use myth_retarget::RetargetSettings;
//!
//! // Source already authored in the target's handedness, in meters
//! let settings = RetargetSettings {
//!     unit_scale: 1.0,
//!     mirror_x: false,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RetargetError};

/// Conversion parameters of a [`Retargeter`](crate::retarget::Retargeter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetargetSettings {
    /// Source units per target unit. Positions are divided by this value.
    pub unit_scale: f32,
    /// Mirror the source's horizontal axis (positions and rotations) to
    /// switch handedness.
    pub mirror_x: bool,
    /// Flip consecutive rotation samples onto the shorter arc.
    pub enforce_continuity: bool,
    /// Turn unresolved mappings (missing target bone, incomplete rotation
    /// triplet) into errors instead of skips.
    pub strict: bool,
}

impl Default for RetargetSettings {
    fn default() -> Self {
        Self {
            unit_scale: 100.0,
            mirror_x: true,
            enforce_continuity: true,
            strict: false,
        }
    }
}

impl RetargetSettings {
    pub fn validate(&self) -> Result<()> {
        if !self.unit_scale.is_finite() || self.unit_scale <= 0.0 {
            return Err(RetargetError::InvalidSettings(format!(
                "unit_scale must be a positive finite number, got {}",
                self.unit_scale
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}
