use std::fmt;

use serde::{Deserialize, Serialize};

/// Target property of a scalar curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveName {
    LocalPositionX,
    LocalPositionY,
    LocalPositionZ,
    LocalRotationX,
    LocalRotationY,
    LocalRotationZ,
    LocalRotationW,
}

impl CurveName {
    pub const POSITION: [CurveName; 3] = [
        CurveName::LocalPositionX,
        CurveName::LocalPositionY,
        CurveName::LocalPositionZ,
    ];

    pub const ROTATION: [CurveName; 4] = [
        CurveName::LocalRotationX,
        CurveName::LocalRotationY,
        CurveName::LocalRotationZ,
        CurveName::LocalRotationW,
    ];

    pub const ALL: [CurveName; 7] = [
        CurveName::LocalPositionX,
        CurveName::LocalPositionY,
        CurveName::LocalPositionZ,
        CurveName::LocalRotationX,
        CurveName::LocalRotationY,
        CurveName::LocalRotationZ,
        CurveName::LocalRotationW,
    ];

    /// Property string the playback side binds against.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CurveName::LocalPositionX => "localPosition.x",
            CurveName::LocalPositionY => "localPosition.y",
            CurveName::LocalPositionZ => "localPosition.z",
            CurveName::LocalRotationX => "localRotation.x",
            CurveName::LocalRotationY => "localRotation.y",
            CurveName::LocalRotationZ => "localRotation.z",
            CurveName::LocalRotationW => "localRotation.w",
        }
    }

    #[must_use]
    pub fn from_property(property: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == property)
    }

    #[inline]
    #[must_use]
    pub const fn is_rotation(self) -> bool {
        matches!(
            self,
            CurveName::LocalRotationX
                | CurveName::LocalRotationY
                | CurveName::LocalRotationZ
                | CurveName::LocalRotationW
        )
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
