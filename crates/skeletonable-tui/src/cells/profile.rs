use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use skeletonable_core::GradientDirection;

use super::fit;
use crate::appearance::AppearanceDefaults;
use crate::capability::{ItemContent, RecyclableItem, Skeletonable};
use crate::color::with_alpha;
use crate::style::{
    SkeletonAnimation, SkeletonGradient, TransitionStyle, DEFAULT_SLIDE_DURATION,
};
use crate::surface::{SkeletonFill, SkeletonLayer, SkeletonSurface, SurfaceElement};
use crate::theme::Theme;

/// Placeholder color of the profile card, independent of the table tint
pub const PROFILE_SKELETON_COLOR: Color = Color::Rgb(0x5a, 0x52, 0x4c);

const AVATAR_WIDTH: u16 = 6;

/// Large card at the top of the table. Ignores the requested colors and
/// always uses its own, sweeping right to left when animated.
pub struct ProfileRow {
    surface: SkeletonSurface,
    content: ItemContent,
}

impl ProfileRow {
    pub const IDENTIFIER: &'static str = "ProfileRow";
    pub const HEIGHT: u16 = 4;

    pub fn new() -> Self {
        Self {
            surface: SkeletonSurface::new(vec![
                SurfaceElement::new("avatar"),
                SurfaceElement::new("name"),
                SurfaceElement::new("subtitle"),
            ]),
            content: ItemContent::default(),
        }
    }

    fn gradient() -> SkeletonGradient {
        SkeletonGradient::new(
            PROFILE_SKELETON_COLOR,
            Some(with_alpha(PROFILE_SKELETON_COLOR, 0.7, Color::Black)),
        )
    }
}

impl Default for ProfileRow {
    fn default() -> Self {
        Self::new()
    }
}

impl RecyclableItem for ProfileRow {
    fn reuse_identifier(&self) -> &str {
        Self::IDENTIFIER
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

    fn configure(&mut self, content: &ItemContent) {
        self.content = content.clone();
    }

    fn layout(&mut self, width: u16, height: u16) {
        let text_x = AVATAR_WIDTH + 3;
        let text_width = width.saturating_sub(text_x + 2);
        self.surface
            .set_area("avatar", Rect::new(1, 0, AVATAR_WIDTH, height.min(3)));
        self.surface
            .set_area("name", Rect::new(text_x, 0, text_width.min(24), 1));
        self.surface
            .set_area("subtitle", Rect::new(text_x, 2, text_width.min(16), 1));
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        buf.set_style(area, Style::default().bg(theme.highlight));

        let avatar_style = Style::default().fg(theme.accent);
        for (dy, glyph) in [" ▄▄▄▄ ", "▐ ◉◉ ▌", " ▀▀▀▀ "].into_iter().enumerate() {
            let dy = dy as u16;
            if dy < area.height {
                buf.set_string(area.x + 1, area.y + dy, glyph, avatar_style);
            }
        }

        let text_x = area.x + AVATAR_WIDTH + 3;
        let text_width = area.width.saturating_sub(AVATAR_WIDTH + 5);
        buf.set_string(
            text_x,
            area.y,
            fit(&self.content.title, text_width),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        );
        if area.height > 2 {
            buf.set_string(
                text_x,
                area.y + 2,
                fit(&self.content.detail, text_width),
                Style::default().fg(theme.grey),
            );
        }
    }
}

impl Skeletonable for ProfileRow {
    fn show_solid_skeleton(
        &mut self,
        _appearance: &AppearanceDefaults,
        _color: Option<Color>,
        transition: TransitionStyle,
    ) {
        self.surface.show(SkeletonLayer::new(
            SkeletonFill::Solid(PROFILE_SKELETON_COLOR),
            None,
            transition,
        ));
    }

    fn show_solid_skeleton_animating(
        &mut self,
        _appearance: &AppearanceDefaults,
        _color: Option<Color>,
        animation: Option<SkeletonAnimation>,
        transition: TransitionStyle,
    ) {
        self.surface.show(SkeletonLayer::new(
            SkeletonFill::Solid(PROFILE_SKELETON_COLOR),
            Some(animation.unwrap_or_else(SkeletonAnimation::pulse)),
            transition,
        ));
    }

    fn show_gradient_skeleton(
        &mut self,
        _appearance: &AppearanceDefaults,
        _base: Option<Color>,
        _secondary: Option<Color>,
        transition: TransitionStyle,
    ) {
        self.surface.show(SkeletonLayer::new(
            SkeletonFill::Gradient(Self::gradient()),
            None,
            transition,
        ));
    }

    fn show_gradient_skeleton_animating(
        &mut self,
        _appearance: &AppearanceDefaults,
        _base: Option<Color>,
        _secondary: Option<Color>,
        _direction: Option<GradientDirection>,
        duration: Option<Duration>,
        transition: TransitionStyle,
    ) {
        let animation = SkeletonAnimation::sliding(
            GradientDirection::RightLeft,
            duration.unwrap_or(DEFAULT_SLIDE_DURATION),
        );
        self.surface.show(SkeletonLayer::new(
            SkeletonFill::Gradient(Self::gradient()),
            Some(animation),
            transition,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ignores_requested_colors() {
        let mut row = ProfileRow::new();
        let appearance = AppearanceDefaults::default();
        row.show_solid_skeleton(&appearance, Some(Color::Red), TransitionStyle::None);
        assert_eq!(
            row.surface().layer().unwrap().fill,
            SkeletonFill::Solid(PROFILE_SKELETON_COLOR)
        );

        row.show_gradient_skeleton(&appearance, Some(Color::Red), Some(Color::Blue), TransitionStyle::None);
        assert_eq!(
            row.surface().layer().unwrap().fill.base_color(),
            PROFILE_SKELETON_COLOR
        );
    }

    #[test]
    fn test_animated_gradient_sweeps_right_to_left() {
        let mut row = ProfileRow::new();
        row.show_gradient_skeleton_animating(
            &AppearanceDefaults::default(),
            None,
            None,
            Some(GradientDirection::LeftRight),
            Some(Duration::from_secs(2)),
            TransitionStyle::None,
        );
        assert_eq!(
            row.surface().layer().unwrap().animation,
            Some(SkeletonAnimation::sliding(
                GradientDirection::RightLeft,
                Duration::from_secs(2)
            ))
        );
    }

    #[test]
    fn test_given_animation_is_kept() {
        let mut row = ProfileRow::new();
        let slide = SkeletonAnimation::sliding(GradientDirection::TopBottom, Duration::from_secs(1));
        row.show_solid_skeleton_animating(
            &AppearanceDefaults::default(),
            None,
            Some(slide),
            TransitionStyle::None,
        );
        assert_eq!(row.surface().layer().unwrap().animation, Some(slide));
    }
}
