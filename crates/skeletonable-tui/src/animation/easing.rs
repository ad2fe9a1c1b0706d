//! Easing curves that shape a pulse between its two colors

use std::f64::consts::PI;

pub use skeletonable_core::EasingType;

/// Eased value of `t`, both in [0, 1]. Out of range input is clamped
#[inline]
pub fn ease(easing: EasingType, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    match easing {
        // Hold the base color, jump at the very end
        EasingType::None => (t >= 1.0) as u8 as f64,
        EasingType::Linear => t,
        EasingType::EaseInOut => (1.0 - (PI * t).cos()) / 2.0,
        EasingType::Cubic => 1.0 - inv.powi(3),
        EasingType::Quintic => 1.0 - inv.powi(5),
        EasingType::EaseOut if t >= 1.0 => 1.0,
        EasingType::EaseOut => 1.0 - 2.0_f64.powf(-10.0 * t),
    }
}
