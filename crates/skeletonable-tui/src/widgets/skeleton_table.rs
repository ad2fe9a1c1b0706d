use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;
use crate::coordinator::CoordinatorPhase;

pub struct SkeletonTableWidget;

impl SkeletonTableWidget {
    pub(crate) fn block(loading: bool) -> Block<'static> {
        let title = if loading { " Loading… " } else { " Profile " };
        Block::default().title(title).borders(Borders::ALL)
    }

    /// Draw the table into `area`. The table must already be laid out for
    /// the block's inner area
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let border_color = match app.phase() {
            CoordinatorPhase::Idle => app.theme.grey,
            CoordinatorPhase::Pending | CoordinatorPhase::Shown => app.theme.accent,
        };

        let block = Self::block(app.loading)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(app.theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        app.table.draw(inner, frame.buffer_mut(), &app.theme, now);
    }
}
