//! Color-free skeleton vocabulary shared by the config file and the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four skeleton presentations a container can be asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkeletonKind {
    #[default]
    Solid,
    SolidAnimated,
    Gradient,
    GradientAnimated,
}

impl SkeletonKind {
    pub const ALL: [SkeletonKind; 4] = [
        SkeletonKind::Solid,
        SkeletonKind::SolidAnimated,
        SkeletonKind::Gradient,
        SkeletonKind::GradientAnimated,
    ];

    /// Human readable title, as shown in the demo picker
    pub fn title(&self) -> &'static str {
        match self {
            SkeletonKind::Solid => "Solid",
            SkeletonKind::SolidAnimated => "Solid Animated",
            SkeletonKind::Gradient => "Gradient",
            SkeletonKind::GradientAnimated => "Gradient Animated",
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self, SkeletonKind::SolidAnimated | SkeletonKind::GradientAnimated)
    }
}

impl fmt::Display for SkeletonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkeletonKind::Solid => "solid",
            SkeletonKind::SolidAnimated => "solid-animated",
            SkeletonKind::Gradient => "gradient",
            SkeletonKind::GradientAnimated => "gradient-animated",
        };
        f.write_str(s)
    }
}

impl FromStr for SkeletonKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "solid" => Ok(SkeletonKind::Solid),
            "solid-animated" => Ok(SkeletonKind::SolidAnimated),
            "gradient" => Ok(SkeletonKind::Gradient),
            "gradient-animated" => Ok(SkeletonKind::GradientAnimated),
            other => Err(crate::Error::Config(format!("unknown skeleton kind: {}", other))),
        }
    }
}

/// Direction a sliding gradient travels in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    #[default]
    LeftRight,
    RightLeft,
    TopBottom,
    BottomTop,
    TopLeftBottomRight,
    BottomRightTopLeft,
}

impl GradientDirection {
    /// Unit travel vector in cell space (x grows right, y grows down)
    pub fn vector(&self) -> (f64, f64) {
        match self {
            GradientDirection::LeftRight => (1.0, 0.0),
            GradientDirection::RightLeft => (-1.0, 0.0),
            GradientDirection::TopBottom => (0.0, 1.0),
            GradientDirection::BottomTop => (0.0, -1.0),
            GradientDirection::TopLeftBottomRight => (1.0, 1.0),
            GradientDirection::BottomRightTopLeft => (-1.0, -1.0),
        }
    }
}

/// Transition used when swapping between skeleton and real content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionKind {
    #[default]
    None,
    CrossDissolve,
}

/// Easing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    Linear,
    /// Smooth acceleration and deceleration, used by the pulse animation
    #[default]
    EaseInOut,
    Cubic,
    Quintic,
    EaseOut,
}
