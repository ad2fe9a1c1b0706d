use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use super::fit;
use crate::capability::{ItemContent, RecyclableItem};
use crate::surface::SkeletonSurface;
use crate::theme::Theme;

/// Plain settings row. Has no skeleton capability, so a skeleton covers it
/// as one block.
pub struct OptionRow {
    surface: SkeletonSurface,
    content: ItemContent,
}

impl OptionRow {
    pub const IDENTIFIER: &'static str = "OptionRow";
    pub const HEIGHT: u16 = 2;

    pub fn new() -> Self {
        Self {
            surface: SkeletonSurface::new(Vec::new()),
            content: ItemContent::default(),
        }
    }
}

impl Default for OptionRow {
    fn default() -> Self {
        Self::new()
    }
}

impl RecyclableItem for OptionRow {
    fn reuse_identifier(&self) -> &str {
        Self::IDENTIFIER
    }

    fn surface(&self) -> &SkeletonSurface {
        &self.surface
    }

    fn surface_mut(&mut self) -> &mut SkeletonSurface {
        &mut self.surface
    }

    fn configure(&mut self, content: &ItemContent) {
        self.content = content.clone();
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let title = fit(&self.content.title, area.width.saturating_sub(4));
        buf.set_string(area.x + 2, area.y, &title, Style::default().fg(theme.fg0));

        let detail = fit(&self.content.detail, area.width.saturating_sub(6 + title.width() as u16));
        let detail_x = area.right().saturating_sub(detail.width() as u16 + 4);
        buf.set_string(detail_x, area.y, &detail, Style::default().fg(theme.grey));
        buf.set_string(area.right().saturating_sub(3), area.y, "›", Style::default().fg(theme.grey));
    }
}
