//! Per-cell color sampling for skeleton layers
//!
//! Combines the easing and timing atoms: given a layer, the cell position
//! inside the item and the time since the layer was shown, produce the color
//! the cell is painted with.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::Color;
use skeletonable_core::GradientDirection;

use super::easing::ease;
use super::timing::{cycle_progress, ping_pong};
use crate::color::{blend, complementary};
use crate::style::SkeletonAnimation;
use crate::surface::{SkeletonFill, SkeletonLayer};

/// Half width of the travelling highlight band, in normalised item units
const BAND_HALF_WIDTH: f64 = 0.5;

/// Normalised position (0..=1) of a cell along `direction` inside `bounds`
pub fn position_along(direction: GradientDirection, bounds: Rect, x: u16, y: u16) -> f64 {
    let u = normalise(x, bounds.x, bounds.width);
    let v = normalise(y, bounds.y, bounds.height);
    let (dx, dy) = direction.vector();

    let projection = u * dx + v * dy;
    let corners = [0.0, dx, dy, dx + dy];
    let min = corners.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = corners.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        return 0.0;
    }
    ((projection - min) / (max - min)).clamp(0.0, 1.0)
}

fn normalise(value: u16, origin: u16, extent: u16) -> f64 {
    if extent <= 1 {
        return 0.5;
    }
    (value.saturating_sub(origin) as f64 / (extent - 1) as f64).clamp(0.0, 1.0)
}

/// Weight of the secondary stop in a static three-stop gradient
/// (base, secondary, base)
pub fn static_gradient_weight(position: f64) -> f64 {
    1.0 - (2.0 * position - 1.0).abs()
}

/// Weight of the secondary stop under a travelling band. The band centre
/// moves from just before the start edge to just past the end edge once per
/// `duration`.
pub fn sliding_weight(position: f64, elapsed: Duration, duration: Duration) -> f64 {
    let t = cycle_progress(elapsed, duration);
    let centre = -BAND_HALF_WIDTH + t * (1.0 + 2.0 * BAND_HALF_WIDTH);
    (1.0 - (position - centre).abs() / BAND_HALF_WIDTH).max(0.0)
}

fn stops(fill: &SkeletonFill) -> (Color, Color) {
    match fill {
        SkeletonFill::Solid(color) => (*color, complementary(*color)),
        SkeletonFill::Gradient(gradient) => (gradient.base, gradient.secondary_color()),
    }
}

/// Color of the cell at (`x`, `y`) for `layer`, `bounds` being the item area
pub fn sample(layer: &SkeletonLayer, bounds: Rect, x: u16, y: u16, elapsed: Duration) -> Color {
    let (base, secondary) = stops(&layer.fill);

    let weight = match (layer.fill, layer.animation) {
        (SkeletonFill::Solid(_), None) => 0.0,
        (SkeletonFill::Gradient(_), None) => {
            static_gradient_weight(position_along(GradientDirection::LeftRight, bounds, x, y))
        }
        (_, Some(SkeletonAnimation::Pulse { duration, easing })) => {
            ease(easing, ping_pong(elapsed, duration))
        }
        (_, Some(SkeletonAnimation::Sliding { direction, duration })) => {
            sliding_weight(position_along(direction, bounds, x, y), elapsed, duration)
        }
    };

    blend(base, secondary, weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{SkeletonGradient, TransitionStyle};

    fn bounds() -> Rect {
        Rect::new(10, 5, 11, 3)
    }

    #[test]
    fn test_position_along_horizontal() {
        let b = bounds();
        assert!((position_along(GradientDirection::LeftRight, b, 10, 5) - 0.0).abs() < 1e-9);
        assert!((position_along(GradientDirection::LeftRight, b, 20, 5) - 1.0).abs() < 1e-9);
        assert!((position_along(GradientDirection::RightLeft, b, 20, 5) - 0.0).abs() < 1e-9);
        assert!((position_along(GradientDirection::LeftRight, b, 15, 7) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_position_along_diagonal() {
        let b = bounds();
        assert!((position_along(GradientDirection::TopLeftBottomRight, b, 10, 5)).abs() < 1e-9);
        assert!((position_along(GradientDirection::TopLeftBottomRight, b, 20, 7) - 1.0).abs() < 1e-9);
        assert!((position_along(GradientDirection::BottomRightTopLeft, b, 20, 7)).abs() < 1e-9);
        assert!((position_along(GradientDirection::BottomTop, b, 10, 7)).abs() < 1e-9);
    }

    #[test]
    fn test_static_gradient_peaks_in_middle() {
        assert!(static_gradient_weight(0.0).abs() < 1e-9);
        assert!((static_gradient_weight(0.5) - 1.0).abs() < 1e-9);
        assert!(static_gradient_weight(1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sliding_band_moves() {
        let duration = Duration::from_millis(1000);
        // At the start the band sits before the leading edge
        assert!(sliding_weight(1.0, Duration::ZERO, duration) < 1e-9);
        // Half way through, the band is centred on the middle of the item
        assert!((sliding_weight(0.5, Duration::from_millis(500), duration) - 1.0).abs() < 1e-9);
        // Weights never leave [0, 1]
        for ms in (0..1000).step_by(50) {
            for p in 0..=10 {
                let w = sliding_weight(p as f64 / 10.0, Duration::from_millis(ms), duration);
                assert!((0.0..=1.0).contains(&w));
            }
        }
    }

    #[test]
    fn test_solid_without_animation_is_flat() {
        let layer = SkeletonLayer::new(SkeletonFill::Solid(Color::Rgb(100, 100, 100)), None, TransitionStyle::None);
        for x in 10..=20 {
            assert_eq!(sample(&layer, bounds(), x, 6, Duration::from_millis(x as u64 * 37)), Color::Rgb(100, 100, 100));
        }
    }

    #[test]
    fn test_samples_stay_between_stops() {
        let base = Color::Rgb(100, 100, 100);
        let secondary = Color::Rgb(200, 200, 200);
        let layer = SkeletonLayer::new(
            SkeletonFill::Gradient(SkeletonGradient::new(base, Some(secondary))),
            Some(SkeletonAnimation::sliding(GradientDirection::LeftRight, Duration::from_millis(800))),
            TransitionStyle::None,
        );
        for ms in (0..1600).step_by(100) {
            for x in 10..=20 {
                match sample(&layer, bounds(), x, 5, Duration::from_millis(ms)) {
                    Color::Rgb(r, g, b) => {
                        assert!((100..=200).contains(&r) && r == g && g == b);
                    }
                    other => panic!("unexpected color {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_pulse_returns_to_base() {
        let base = Color::Rgb(100, 100, 100);
        let layer = SkeletonLayer::new(
            SkeletonFill::Solid(base),
            Some(SkeletonAnimation::pulse()),
            TransitionStyle::None,
        );
        assert_eq!(sample(&layer, bounds(), 12, 6, Duration::ZERO), base);
        assert_eq!(sample(&layer, bounds(), 12, 6, Duration::from_millis(1000)), base);
        assert_eq!(
            sample(&layer, bounds(), 12, 6, Duration::from_millis(500)),
            complementary(base)
        );
    }
}
