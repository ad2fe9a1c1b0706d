//! Appearance resolver: the default style any item falls back to
//!
//! One [`Appearance`] is owned by each [`SkeletonCoordinator`] and handed to
//! items by reference on every call, so items always read the values that are
//! current at call time. A skeleton already on screen keeps the colors it was
//! resolved with.
//!
//! [`SkeletonCoordinator`]: crate::coordinator::SkeletonCoordinator

use ratatui::style::Color;
use skeletonable_core::{Result, SkeletonConfig};

use crate::color::{try_parse_color, LIGHT_GRAY};
use crate::style::SkeletonGradient;

/// Corner radius applied to skeleton blocks when nothing else is configured
pub const DEFAULT_CORNER_RADIUS: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppearanceDefaults {
    pub tint_color: Color,
    pub multiline_corner_radius: u16,
    pub gradient: SkeletonGradient,
}

impl Default for AppearanceDefaults {
    fn default() -> Self {
        Self {
            tint_color: LIGHT_GRAY,
            multiline_corner_radius: DEFAULT_CORNER_RADIUS,
            gradient: SkeletonGradient::new(LIGHT_GRAY, None),
        }
    }
}

/// Mutable holder of the active [`AppearanceDefaults`]. Last writer wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Appearance {
    defaults: AppearanceDefaults,
}

impl Appearance {
    pub fn new(defaults: AppearanceDefaults) -> Self {
        Self { defaults }
    }

    /// Build from the `[skeleton]` config section
    pub fn from_config(config: &SkeletonConfig) -> Result<Self> {
        let tint = try_parse_color(&config.tint_color)?;
        let secondary = config
            .secondary_color
            .as_deref()
            .map(try_parse_color)
            .transpose()?;

        Ok(Self::new(AppearanceDefaults {
            tint_color: tint,
            multiline_corner_radius: config.corner_radius,
            gradient: SkeletonGradient::new(tint, secondary),
        }))
    }

    pub fn defaults(&self) -> &AppearanceDefaults {
        &self.defaults
    }

    pub fn tint_color(&self) -> Color {
        self.defaults.tint_color
    }

    pub fn corner_radius(&self) -> u16 {
        self.defaults.multiline_corner_radius
    }

    /// Takes effect for every later read; rendered skeletons are not restyled
    pub fn set_tint_color(&mut self, color: Color) {
        self.defaults.tint_color = color;
    }

    pub fn set_corner_radius(&mut self, radius: u16) {
        self.defaults.multiline_corner_radius = radius;
    }

    pub fn set_gradient(&mut self, gradient: SkeletonGradient) {
        self.defaults.gradient = gradient;
    }
}
