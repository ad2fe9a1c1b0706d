use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::fit;
use crate::capability::{ItemContent, RecyclableItem, Skeletonable};
use crate::surface::{SkeletonSurface, SurfaceElement};
use crate::theme::Theme;

/// Bold section title. Uses the default skeleton behaviour
pub struct RegularHeader {
    surface: SkeletonSurface,
    title: String,
}

impl RegularHeader {
    pub const IDENTIFIER: &'static str = "RegularHeader";
    pub const HEIGHT: u16 = 2;

    pub fn new() -> Self {
        Self {
            surface: SkeletonSurface::new(vec![SurfaceElement::new("title")]),
            title: String::new(),
        }
    }
}

impl Default for RegularHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl RecyclableItem for RegularHeader {
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
        self.title = content.title.clone();
    }

    fn layout(&mut self, width: u16, height: u16) {
        let title_width = (self.title.chars().count() as u16)
            .max(8)
            .min(width.saturating_sub(4));
        self.surface.set_area(
            "title",
            Rect::new(2, height.saturating_sub(1), title_width, 1),
        );
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        buf.set_style(area, Style::default().bg(theme.bg1));
        if area.height == 0 {
            return;
        }
        buf.set_string(
            area.x + 2,
            area.y + area.height - 1,
            fit(&self.title, area.width.saturating_sub(4)),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        );
    }
}

impl Skeletonable for RegularHeader {}
