//! Skeleton animation support
//!
//! ## Atoms
//! - `easing` - Pulse easing curves
//! - `timing` - Progress, cycle and interpolation helpers
//!
//! ## Molecules
//! - `sampler` - Per-cell color of a skeleton layer at a point in time
//!
//! The animation "engine" is nothing more than sampling: painting asks the
//! sampler for a color given the time since the layer was shown, and the UI
//! loop redraws at `animation_fps` while any visible item is animating.

// Atoms
pub mod easing;
pub mod timing;

// Molecules
pub mod sampler;

pub use easing::{ease, EasingType};
pub use sampler::sample;
