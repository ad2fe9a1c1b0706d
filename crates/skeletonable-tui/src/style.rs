//! Skeleton style values passed from the container down to items

use std::time::Duration;

use ratatui::style::Color;
use skeletonable_core::{
    EasingType, GradientDirection, Result, SkeletonConfig, SkeletonKind, TransitionKind,
};

use crate::color::{complementary, try_parse_color};

/// Duration of one sliding gradient sweep when none is given
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(1500);

/// Period of the default pulse animation
pub const DEFAULT_PULSE_DURATION: Duration = Duration::from_millis(1000);

/// Two-stop gradient. A missing secondary stop is derived from the base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonGradient {
    pub base: Color,
    pub secondary: Option<Color>,
}

impl SkeletonGradient {
    pub fn new(base: Color, secondary: Option<Color>) -> Self {
        Self { base, secondary }
    }

    /// The secondary stop as painted
    pub fn secondary_color(&self) -> Color {
        self.secondary.unwrap_or_else(|| complementary(self.base))
    }
}

/// Animation applied to a shown skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonAnimation {
    /// Autoreversing fade between the base color and its second stop
    Pulse { duration: Duration, easing: EasingType },
    /// A highlight band travelling across the item
    Sliding {
        direction: GradientDirection,
        duration: Duration,
    },
}

impl SkeletonAnimation {
    /// Standard pulse used when an animated solid skeleton has no animation set
    pub fn pulse() -> Self {
        SkeletonAnimation::Pulse {
            duration: DEFAULT_PULSE_DURATION,
            easing: EasingType::EaseInOut,
        }
    }

    pub fn sliding(direction: GradientDirection, duration: Duration) -> Self {
        SkeletonAnimation::Sliding { direction, duration }
    }

    pub fn duration(&self) -> Duration {
        match self {
            SkeletonAnimation::Pulse { duration, .. } => *duration,
            SkeletonAnimation::Sliding { duration, .. } => *duration,
        }
    }
}

/// Visual effect used when switching between skeleton and real content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionStyle {
    #[default]
    None,
    CrossDissolve(Duration),
}

impl TransitionStyle {
    pub fn from_config(config: &SkeletonConfig) -> Self {
        match config.transition {
            TransitionKind::None => TransitionStyle::None,
            TransitionKind::CrossDissolve => {
                TransitionStyle::CrossDissolve(config.transition_duration())
            }
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            TransitionStyle::None => Duration::ZERO,
            TransitionStyle::CrossDissolve(duration) => *duration,
        }
    }
}

/// One show request. Determines which rendering path every item takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonStyle {
    Solid,
    SolidAnimated {
        animation: Option<SkeletonAnimation>,
    },
    Gradient {
        secondary: Option<Color>,
    },
    GradientAnimated {
        secondary: Option<Color>,
        direction: GradientDirection,
        duration: Duration,
    },
}

impl SkeletonStyle {
    pub fn kind(&self) -> SkeletonKind {
        match self {
            SkeletonStyle::Solid => SkeletonKind::Solid,
            SkeletonStyle::SolidAnimated { .. } => SkeletonKind::SolidAnimated,
            SkeletonStyle::Gradient { .. } => SkeletonKind::Gradient,
            SkeletonStyle::GradientAnimated { .. } => SkeletonKind::GradientAnimated,
        }
    }

    /// Build the configured style
    pub fn from_config(config: &SkeletonConfig) -> Result<Self> {
        Self::for_kind(config.kind, config)
    }

    /// Build a style of `kind`, taking the remaining parameters from `config`
    pub fn for_kind(kind: SkeletonKind, config: &SkeletonConfig) -> Result<Self> {
        let secondary = config
            .secondary_color
            .as_deref()
            .map(try_parse_color)
            .transpose()?;

        Ok(match kind {
            SkeletonKind::Solid => SkeletonStyle::Solid,
            SkeletonKind::SolidAnimated => SkeletonStyle::SolidAnimated { animation: None },
            SkeletonKind::Gradient => SkeletonStyle::Gradient { secondary },
            SkeletonKind::GradientAnimated => SkeletonStyle::GradientAnimated {
                secondary,
                direction: config.gradient_direction,
                duration: config.animation_duration(),
            },
        })
    }
}
