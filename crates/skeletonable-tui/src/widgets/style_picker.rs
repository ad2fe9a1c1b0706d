use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};
use skeletonable_core::SkeletonKind;

use crate::app::App;

pub struct StylePickerWidget;

impl StylePickerWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let titles: Vec<Line> = SkeletonKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| Line::from(format!("{} {}", i + 1, kind.title())))
            .collect();

        let selected = SkeletonKind::ALL
            .iter()
            .position(|kind| *kind == app.style_kind)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .title(" Skeleton ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.grey)),
            )
            .style(Style::default().fg(app.theme.fg0).bg(app.theme.bg0))
            .highlight_style(
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .select(selected);

        frame.render_widget(tabs, area);
    }
}
