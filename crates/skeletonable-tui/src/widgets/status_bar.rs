use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::coordinator::CoordinatorPhase;
use crate::style::TransitionStyle;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let phase_str = match app.phase() {
            CoordinatorPhase::Idle => "IDLE",
            CoordinatorPhase::Pending => "PENDING",
            CoordinatorPhase::Shown => "SKELETON",
        };

        let transition_str = match app.transition {
            TransitionStyle::None => "none".to_string(),
            TransitionStyle::CrossDissolve(duration) => {
                format!("fade {}ms", duration.as_millis())
            }
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", phase_str, msg)
        } else {
            format!(
                " {} | {} | Transition: {}",
                phase_str,
                app.style_kind.title(),
                transition_str
            )
        };

        let help_hint = " q:quit 1-4:style s/h:show/hide r:reload t:fade j/k:scroll ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let bar = Style::default().bg(app.theme.bg1);
        let line = Line::from(vec![
            Span::styled(status_text, bar.fg(app.theme.fg0)),
            Span::styled(" ".repeat(padding_len), bar),
            Span::styled(help_hint, bar.fg(app.theme.grey)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
