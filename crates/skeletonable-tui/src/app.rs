use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::layout::Rect;
use skeletonable_core::{AppConfig, SkeletonKind};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cells::register_templates;
use crate::color::with_alpha;
use crate::coordinator::{CoordinatorPhase, SkeletonCoordinator};
use crate::demo::DemoDataSource;
use crate::input::Action;
use crate::loader::{spawn_content_load, LoadResult};
use crate::style::{SkeletonStyle, TransitionStyle};
use crate::table::SkeletonTable;
use crate::theme::Theme;

/// Opacity of the demo's derived secondary stop, per gradient style
const GRADIENT_SECONDARY_ALPHA: f64 = 0.8;
const ANIMATED_GRADIENT_SECONDARY_ALPHA: f64 = 0.5;

/// Default cross-dissolve duration when toggled on from the keyboard
const TOGGLED_TRANSITION: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub table: SkeletonTable,
    pub coordinator: SkeletonCoordinator,
    pub source: DemoDataSource,
    /// Style used by the next show
    pub style_kind: SkeletonKind,
    pub transition: TransitionStyle,
    /// A content load is in flight
    pub loading: bool,
    load_generation: u64,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Result<Self> {
        let coordinator = SkeletonCoordinator::from_config(&config.skeleton)?;
        let mut table = SkeletonTable::default();
        register_templates(&mut table);

        Ok(Self {
            style_kind: config.skeleton.kind,
            transition: TransitionStyle::from_config(&config.skeleton),
            config,
            theme,
            table,
            coordinator,
            source: DemoDataSource::new(),
            loading: false,
            load_generation: 0,
            should_quit: false,
            status_message: None,
        })
    }

    /// Style for `style_kind`. Gradients without a configured secondary
    /// color get a translucent version of the tint
    pub fn current_style(&self) -> Result<SkeletonStyle> {
        let mut style = SkeletonStyle::for_kind(self.style_kind, &self.config.skeleton)?;
        let tint = self.coordinator.skeleton_tint_color();
        match &mut style {
            SkeletonStyle::Gradient { secondary } if secondary.is_none() => {
                *secondary = Some(with_alpha(tint, GRADIENT_SECONDARY_ALPHA, self.theme.bg0));
            }
            SkeletonStyle::GradientAnimated { secondary, .. } if secondary.is_none() => {
                *secondary = Some(with_alpha(
                    tint,
                    ANIMATED_GRADIENT_SECONDARY_ALPHA,
                    self.theme.bg0,
                ));
            }
            _ => {}
        }
        Ok(style)
    }

    pub fn show_skeleton(&mut self) -> Result<()> {
        let style = self.current_style()?;
        self.coordinator
            .show_skeleton(&mut self.table, style, self.transition);
        self.status_message = Some(format!("Showing {}", self.style_kind.title()));
        Ok(())
    }

    pub fn hide_skeleton(&mut self) {
        self.coordinator.hide_skeleton(&mut self.table, self.transition);
        self.status_message = None;
    }

    /// Drop loaded content, show the skeleton and fetch again
    pub fn start_load(&mut self, tx: &mpsc::UnboundedSender<LoadResult>) -> Result<()> {
        self.load_generation += 1;
        self.loading = true;
        self.source.clear_content();
        self.show_skeleton()?;

        let delay = Duration::from_millis(self.config.demo.load_delay_ms);
        info!(generation = self.load_generation, ?delay, "loading content");
        spawn_content_load(delay, self.load_generation, tx.clone());
        Ok(())
    }

    pub fn handle_load_result(&mut self, result: LoadResult) {
        if result.generation != self.load_generation {
            debug!(
                generation = result.generation,
                current = self.load_generation,
                "ignoring stale load result"
            );
            return;
        }
        self.loading = false;
        self.source.set_content(result.content);
        self.hide_skeleton();
    }

    /// Apply an input action. Loads go through `tx`
    pub fn apply(&mut self, action: Action, tx: &mpsc::UnboundedSender<LoadResult>) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SelectStyle(kind) => {
                self.style_kind = kind;
                self.show_skeleton()?;
            }
            Action::ShowSkeleton => self.show_skeleton()?,
            Action::HideSkeleton => self.hide_skeleton(),
            Action::Reload => self.start_load(tx)?,
            Action::ScrollDown => {
                self.table.scroll_by(1);
            }
            Action::ScrollUp => {
                self.table.scroll_by(-1);
            }
            Action::ToggleTransition => {
                self.transition = match self.transition {
                    TransitionStyle::None => TransitionStyle::CrossDissolve(TOGGLED_TRANSITION),
                    TransitionStyle::CrossDissolve(_) => TransitionStyle::None,
                };
            }
            Action::None => {}
        }
        Ok(())
    }

    /// Lay the table out for `viewport` and commit a pending show. Must run
    /// before every draw
    pub fn prepare_frame(&mut self, viewport: Rect) -> Result<()> {
        self.table
            .layout(viewport, &self.source, self.coordinator.appearance().defaults())?;
        if let Some(summary) = self.coordinator.run_pending(&mut self.table) {
            debug!(?summary, "skeleton dispatched");
        }
        Ok(())
    }

    pub fn phase(&self) -> CoordinatorPhase {
        self.coordinator.phase()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.table.is_animating(now)
    }
}
