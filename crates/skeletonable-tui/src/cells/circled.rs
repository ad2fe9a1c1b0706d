use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use super::fit;
use crate::appearance::AppearanceDefaults;
use crate::capability::{ItemContent, RecyclableItem, Skeletonable};
use crate::surface::{SkeletonSurface, SurfaceElement};
use crate::theme::Theme;

/// Row with a circled badge and a stack of lines. The skeleton reaches into
/// the nested container and stack; the divider line stays visible.
pub struct CircledRow {
    surface: SkeletonSurface,
    content: ItemContent,
}

impl CircledRow {
    pub const IDENTIFIER: &'static str = "CircledRow";
    pub const HEIGHT: u16 = 4;

    pub fn new() -> Self {
        Self {
            surface: SkeletonSurface::new(vec![
                SurfaceElement::new("title"),
                SurfaceElement::new("container").with_children(vec![
                    SurfaceElement::new("circle"),
                    SurfaceElement::new("stack").with_children(vec![
                        SurfaceElement::new("line1"),
                        SurfaceElement::new("line2"),
                    ]),
                ]),
                SurfaceElement::new("divider"),
            ]),
            content: ItemContent::default(),
        }
    }
}

impl Default for CircledRow {
    fn default() -> Self {
        Self::new()
    }
}

impl RecyclableItem for CircledRow {
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
        let inner = width.saturating_sub(4);
        self.surface.set_area("title", Rect::new(2, 0, inner.min(20), 1));
        self.surface
            .set_area("container", Rect::new(2, 1, inner, 2u16.min(height.saturating_sub(1))));
        self.surface.set_area("circle", Rect::new(2, 1, 4, 2));
        self.surface
            .set_area("stack", Rect::new(8, 1, inner.saturating_sub(6), 2));
        self.surface
            .set_area("line1", Rect::new(8, 1, inner.saturating_sub(6).min(18), 1));
        self.surface
            .set_area("line2", Rect::new(8, 2, inner.saturating_sub(6).min(12), 1));
        self.surface
            .set_area("divider", Rect::new(0, height.saturating_sub(1), width, 1));
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let text_width = area.width.saturating_sub(4);
        buf.set_string(
            area.x + 2,
            area.y,
            fit(&self.content.title, text_width),
            Style::default().fg(theme.fg0),
        );
        if area.height >= 3 {
            let accent = Style::default().fg(theme.accent);
            buf.set_string(area.x + 2, area.y + 1, "╭──╮", accent);
            buf.set_string(area.x + 2, area.y + 2, "╰──╯", accent);
            let stack_width = text_width.saturating_sub(6);
            buf.set_string(
                area.x + 8,
                area.y + 1,
                fit(&self.content.detail, stack_width),
                Style::default().fg(theme.grey),
            );
            buf.set_string(
                area.x + 8,
                area.y + 2,
                fit("tap to expand", stack_width),
                Style::default().fg(theme.grey),
            );
        }
        if area.height > 0 {
            let line = "─".repeat(area.width as usize);
            buf.set_string(
                area.x,
                area.y + area.height - 1,
                line,
                Style::default().fg(theme.divider),
            );
        }
    }
}

impl Skeletonable for CircledRow {
    fn setup_skeletonable_surface(&mut self, appearance: &AppearanceDefaults) {
        self.surface.mark_default(appearance);
        let radius = appearance.multiline_corner_radius;
        for id in ["container", "circle", "stack", "line1", "line2"] {
            if let Some(element) = self.surface.element_mut(id) {
                element.mark(radius);
            }
        }
        if let Some(divider) = self.surface.element_mut("divider") {
            divider.skeletonable = false;
        }
    }
}
