mod skeleton_table;
mod status_bar;
mod style_picker;

pub use skeleton_table::SkeletonTableWidget;
pub use status_bar::StatusBarWidget;
pub use style_picker::StylePickerWidget;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen split: style tabs on top, the table, a one-line status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub picker: Rect,
    pub table: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            picker: chunks[0],
            table: chunks[1],
            status: chunks[2],
        }
    }

    /// Area the table's rows are laid out in
    pub fn table_viewport(&self) -> Rect {
        SkeletonTableWidget::block(false).inner(self.table)
    }
}
