use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use skeletonable_core::AppConfig;
use skeletonable_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    load_theme,
    loader::LoadResult,
    widgets::{ScreenLayout, SkeletonTableWidget, StatusBarWidget, StylePickerWidget},
    App,
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(config.clone(), theme)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Skeletonable"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &config).await;

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &AppConfig,
) -> Result<()> {
    let event_handler = EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    let (load_tx, mut load_rx) = mpsc::unbounded_channel::<LoadResult>();

    info!(style = %app.style_kind, "demo started");
    app.start_load(&load_tx)?;

    loop {
        // Finished loads (non-blocking)
        while let Ok(result) = load_rx.try_recv() {
            app.handle_load_result(result);
        }

        let size = terminal.size()?;
        let layout = ScreenLayout::new(Rect::new(0, 0, size.width, size.height));

        // Pending skeletons are committed only once rows exist
        app.prepare_frame(layout.table_viewport())?;

        let now = Instant::now();
        terminal.draw(|frame| {
            StylePickerWidget::render(frame, layout.picker, app);
            SkeletonTableWidget::render(frame, layout.table, app, now);
            StatusBarWidget::render(frame, layout.status, app);
        })?;

        if let Some(event) = event_handler.next(app.is_animating(Instant::now()))? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    app.apply(action, &load_tx)?;
                }
                // Next iteration lays the table out for the new size
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!("demo finished");
    Ok(())
}
