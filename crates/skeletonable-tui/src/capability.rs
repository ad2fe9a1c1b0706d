//! Item contracts consumed by the coordinator
//!
//! [`RecyclableItem`] is what every row or header/footer provides.
//! [`Skeletonable`] is the optional capability on top of it; an item opts in
//! by returning itself from [`RecyclableItem::as_skeletonable`]. Items that
//! do not are opaque and receive the coordinator's generic fallback.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use skeletonable_core::GradientDirection;

use crate::appearance::AppearanceDefaults;
use crate::style::{
    SkeletonAnimation, SkeletonGradient, TransitionStyle, DEFAULT_SLIDE_DURATION,
};
use crate::surface::{SkeletonFill, SkeletonLayer, SkeletonSurface};
use crate::theme::Theme;

/// Content pushed into an item by the data source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemContent {
    pub title: String,
    pub detail: String,
}

impl ItemContent {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// A row or header/footer view managed by a reuse pool
pub trait RecyclableItem {
    /// Identifier of the template this item was instantiated from
    fn reuse_identifier(&self) -> &str;

    fn surface(&self) -> &SkeletonSurface;

    fn surface_mut(&mut self) -> &mut SkeletonSurface;

    /// Capability lookup. Opaque items keep the default `None`
    fn as_skeletonable(&mut self) -> Option<&mut dyn Skeletonable> {
        None
    }

    /// First materialisation from its template
    fn awake(&mut self, appearance: &AppearanceDefaults) {
        if let Some(skeletonable) = self.as_skeletonable() {
            skeletonable.setup_skeletonable_surface(appearance);
        }
    }

    /// About to be handed out again for new content. Never keeps a skeleton
    /// or the interaction lock that came with it
    fn prepare_for_reuse(&mut self) {
        if let Some(skeletonable) = self.as_skeletonable() {
            skeletonable.hide_skeleton(TransitionStyle::None);
        } else {
            self.surface_mut().hide(TransitionStyle::None);
        }
        self.set_interaction_enabled(true);
    }

    fn configure(&mut self, _content: &ItemContent) {}

    /// Recompute element areas for an item of the given size
    fn layout(&mut self, _width: u16, _height: u16) {}

    /// Draw real content into `area`
    fn render_content(&self, area: Rect, buf: &mut Buffer, theme: &Theme);

    fn is_interaction_enabled(&self) -> bool {
        self.surface().interaction_enabled()
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        self.surface_mut().set_interaction_enabled(enabled);
    }
}

/// Skeleton capability. Every operation has a working default; concrete
/// items override whichever they need (a fixed color, a different
/// direction, a wider or narrower eligible set).
///
/// `None` parameters resolve against `appearance` at call time:
/// colors default to the tint, the animation to a pulse, the direction to
/// left-to-right and the duration to 1.5 s.
pub trait Skeletonable: RecyclableItem {
    fn show_solid_skeleton(
        &mut self,
        appearance: &AppearanceDefaults,
        color: Option<Color>,
        transition: TransitionStyle,
    ) {
        let fill = SkeletonFill::Solid(color.unwrap_or(appearance.tint_color));
        self.surface_mut()
            .show(SkeletonLayer::new(fill, None, transition));
    }

    fn show_solid_skeleton_animating(
        &mut self,
        appearance: &AppearanceDefaults,
        color: Option<Color>,
        animation: Option<SkeletonAnimation>,
        transition: TransitionStyle,
    ) {
        let fill = SkeletonFill::Solid(color.unwrap_or(appearance.tint_color));
        let animation = animation.unwrap_or_else(SkeletonAnimation::pulse);
        self.surface_mut()
            .show(SkeletonLayer::new(fill, Some(animation), transition));
    }

    fn show_gradient_skeleton(
        &mut self,
        appearance: &AppearanceDefaults,
        base: Option<Color>,
        secondary: Option<Color>,
        transition: TransitionStyle,
    ) {
        let gradient = SkeletonGradient::new(
            base.unwrap_or(appearance.tint_color),
            secondary.or(appearance.gradient.secondary),
        );
        self.surface_mut().show(SkeletonLayer::new(
            SkeletonFill::Gradient(gradient),
            None,
            transition,
        ));
    }

    fn show_gradient_skeleton_animating(
        &mut self,
        appearance: &AppearanceDefaults,
        base: Option<Color>,
        secondary: Option<Color>,
        direction: Option<GradientDirection>,
        duration: Option<Duration>,
        transition: TransitionStyle,
    ) {
        let gradient = SkeletonGradient::new(
            base.unwrap_or(appearance.tint_color),
            secondary.or(appearance.gradient.secondary),
        );
        let animation = SkeletonAnimation::sliding(
            direction.unwrap_or_default(),
            duration.unwrap_or(DEFAULT_SLIDE_DURATION),
        );
        self.surface_mut().show(SkeletonLayer::new(
            SkeletonFill::Gradient(gradient),
            Some(animation),
            transition,
        ));
    }

    fn hide_skeleton(&mut self, transition: TransitionStyle) {
        self.surface_mut().hide(transition);
    }

    /// Mark the sub-elements that take part in the skeleton
    fn setup_skeletonable_surface(&mut self, appearance: &AppearanceDefaults) {
        self.surface_mut().mark_default(appearance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::LIGHT_GRAY;
    use crate::surface::{SkeletonState, SurfaceElement};
    use pretty_assertions::assert_eq;

    struct PlainRow {
        surface: SkeletonSurface,
    }

    impl PlainRow {
        fn new() -> Self {
            Self {
                surface: SkeletonSurface::new(vec![
                    SurfaceElement::new("label"),
                    SurfaceElement::new("value"),
                ]),
            }
        }
    }

    impl RecyclableItem for PlainRow {
        fn reuse_identifier(&self) -> &str {
            "PlainRow"
        }

        fn surface(&self) -> &SkeletonSurface {
            &self.surface
        }

        fn surface_mut(&mut self) -> &mut SkeletonSurface {
            &mut self.surface
        }

        fn as_skeletonable(&mut self) -> Option<&mut dyn Skeletonable> {
            Some(self)
        }

        fn render_content(&self, _area: Rect, _buf: &mut Buffer, _theme: &Theme) {}
    }

    impl Skeletonable for PlainRow {}

    struct OpaqueRow {
        surface: SkeletonSurface,
    }

    impl RecyclableItem for OpaqueRow {
        fn reuse_identifier(&self) -> &str {
            "OpaqueRow"
        }

        fn surface(&self) -> &SkeletonSurface {
            &self.surface
        }

        fn surface_mut(&mut self) -> &mut SkeletonSurface {
            &mut self.surface
        }

        fn render_content(&self, _area: Rect, _buf: &mut Buffer, _theme: &Theme) {}
    }

    #[test]
    fn test_awake_marks_default_surface() {
        let mut row = PlainRow::new();
        row.awake(&AppearanceDefaults::default());
        assert!(row.surface().root().skeletonable);
        assert!(row.surface().element("label").unwrap().skeletonable);
    }

    #[test]
    fn test_awake_leaves_opaque_items_alone() {
        let mut row = OpaqueRow {
            surface: SkeletonSurface::new(vec![SurfaceElement::new("label")]),
        };
        row.awake(&AppearanceDefaults::default());
        assert!(!row.surface().root().skeletonable);
    }

    #[test]
    fn test_defaults_resolve_from_appearance() {
        let mut row = PlainRow::new();
        let appearance = AppearanceDefaults::default();

        row.show_solid_skeleton(&appearance, None, TransitionStyle::None);
        assert_eq!(row.surface().layer().unwrap().fill, SkeletonFill::Solid(LIGHT_GRAY));

        row.show_solid_skeleton_animating(&appearance, None, None, TransitionStyle::None);
        assert_eq!(
            row.surface().layer().unwrap().animation,
            Some(SkeletonAnimation::pulse())
        );

        row.show_gradient_skeleton_animating(
            &appearance,
            None,
            None,
            None,
            None,
            TransitionStyle::None,
        );
        assert_eq!(
            row.surface().layer().unwrap().animation,
            Some(SkeletonAnimation::sliding(
                GradientDirection::LeftRight,
                Duration::from_millis(1500)
            ))
        );
    }

    #[test]
    fn test_explicit_parameters_win() {
        let mut row = PlainRow::new();
        let appearance = AppearanceDefaults::default();
        row.show_gradient_skeleton(
            &appearance,
            Some(Color::Blue),
            Some(Color::Cyan),
            TransitionStyle::None,
        );
        assert_eq!(
            row.surface().layer().unwrap().fill,
            SkeletonFill::Gradient(SkeletonGradient::new(Color::Blue, Some(Color::Cyan)))
        );
    }

    #[test]
    fn test_reuse_hides_skeleton() {
        let mut row = PlainRow::new();
        row.show_solid_skeleton(&AppearanceDefaults::default(), None, TransitionStyle::None);
        row.hide_skeleton(TransitionStyle::None);
        row.prepare_for_reuse();
        assert_eq!(row.surface().state(), &SkeletonState::Idle);

        row.show_solid_skeleton(&AppearanceDefaults::default(), None, TransitionStyle::None);
        row.prepare_for_reuse();
        assert!(!row.surface().is_shown());

        let mut opaque = OpaqueRow {
            surface: SkeletonSurface::new(Vec::new()),
        };
        opaque.surface_mut().show(SkeletonLayer::new(
            SkeletonFill::Solid(Color::Gray),
            None,
            TransitionStyle::None,
        ));
        opaque.prepare_for_reuse();
        assert!(!opaque.surface().is_shown());
    }
}
