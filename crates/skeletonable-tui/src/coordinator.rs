//! Container skeleton coordinator
//!
//! Owns the show/hide lifecycle across everything a [`SkeletonHost`]
//! currently displays. Showing is a two-phase operation:
//!
//! 1. **request** (`show_*`): reload the host so every visible position is
//!    freshly populated, and park the style in a single pending slot;
//! 2. **commit** ([`SkeletonCoordinator::run_pending`]): called by the UI loop
//!    once the host has laid out again. Locks scrolling, then dispatches to
//!    every visible row and section header.
//!
//! Visible items must not be queried between the two phases: the host only
//! knows what is on screen after its next layout pass.
//!
//! A newer request replaces a pending one, and hiding drops it, so two
//! requests can never interleave their dispatch passes.

use std::collections::BTreeSet;
use std::time::Duration;

use ratatui::style::Color;
use skeletonable_core::{GradientDirection, Result, SkeletonConfig};
use tracing::{debug, trace, warn};

use crate::appearance::{Appearance, AppearanceDefaults};
use crate::capability::RecyclableItem;
use crate::style::{SkeletonAnimation, SkeletonStyle, TransitionStyle};
use crate::surface::{LayerScope, SkeletonLayer};

/// Position of a row inside a sectioned container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// The recyclable-item container as seen by the coordinator
pub trait SkeletonHost {
    /// Discard every materialised item and repopulate on the next layout pass
    fn reload_all_data(&mut self);

    /// Positions of the rows currently on screen, top to bottom
    fn visible_index_paths(&self) -> Vec<IndexPath>;

    /// The rows currently on screen, borrowed for one pass
    fn visible_rows_mut(&mut self) -> Vec<&mut dyn RecyclableItem>;

    /// Header/footer item of `section`, if one is materialised
    fn header_footer_mut(&mut self, section: usize) -> Option<&mut dyn RecyclableItem>;

    /// Sections covering the visible rows, each once
    fn visible_section_indices(&self) -> BTreeSet<usize> {
        self.visible_index_paths()
            .into_iter()
            .map(|path| path.section)
            .collect()
    }

    fn set_scroll_enabled(&mut self, enabled: bool);

    fn is_scroll_enabled(&self) -> bool;

    fn set_hidden(&mut self, hidden: bool);

    fn is_hidden(&self) -> bool;
}

/// Where the coordinator is in its show/hide lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorPhase {
    Idle,
    /// A show was requested and waits for the next commit
    Pending,
    Shown,
}

#[derive(Debug, Clone, Copy)]
struct PendingShow {
    style: SkeletonStyle,
    transition: TransitionStyle,
    generation: u64,
}

/// Counts of one dispatch pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub rows: usize,
    pub headers: usize,
    /// Items that went through the generic fallback
    pub fallbacks: usize,
}

#[derive(Debug, Default)]
pub struct SkeletonCoordinator {
    appearance: Appearance,
    pending: Option<PendingShow>,
    shown: Option<SkeletonStyle>,
    generation: u64,
    hide_during_reload: bool,
}

impl SkeletonCoordinator {
    pub fn new(appearance: Appearance) -> Self {
        Self {
            appearance,
            ..Default::default()
        }
    }

    pub fn from_config(config: &SkeletonConfig) -> Result<Self> {
        let mut coordinator = Self::new(Appearance::from_config(config)?);
        coordinator.hide_during_reload = config.hide_during_reload;
        Ok(coordinator)
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn skeleton_tint_color(&self) -> Color {
        self.appearance.tint_color()
    }

    /// Applies to the next show; skeletons on screen keep their color
    pub fn set_skeleton_tint_color(&mut self, color: Color) {
        self.appearance.set_tint_color(color);
    }

    pub fn corner_radius(&self) -> u16 {
        self.appearance.corner_radius()
    }

    pub fn set_corner_radius(&mut self, radius: u16) {
        self.appearance.set_corner_radius(radius);
    }

    /// Hide the container while the reload preceding a show settles
    pub fn set_hide_during_reload(&mut self, hide: bool) {
        self.hide_during_reload = hide;
    }

    pub fn phase(&self) -> CoordinatorPhase {
        if self.pending.is_some() {
            CoordinatorPhase::Pending
        } else if self.shown.is_some() {
            CoordinatorPhase::Shown
        } else {
            CoordinatorPhase::Idle
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Style currently on screen
    pub fn shown_style(&self) -> Option<&SkeletonStyle> {
        self.shown.as_ref()
    }

    pub fn show_solid_skeleton<H: SkeletonHost + ?Sized>(
        &mut self,
        host: &mut H,
        transition: TransitionStyle,
    ) {
        self.show_skeleton(host, SkeletonStyle::Solid, transition);
    }

    /// `None` animates with the standard pulse
    pub fn show_solid_skeleton_animating<H: SkeletonHost + ?Sized>(
        &mut self,
        host: &mut H,
        animation: Option<SkeletonAnimation>,
        transition: TransitionStyle,
    ) {
        self.show_skeleton(host, SkeletonStyle::SolidAnimated { animation }, transition);
    }

    pub fn show_gradient_skeleton<H: SkeletonHost + ?Sized>(
        &mut self,
        host: &mut H,
        secondary: Option<Color>,
        transition: TransitionStyle,
    ) {
        self.show_skeleton(host, SkeletonStyle::Gradient { secondary }, transition);
    }

    pub fn show_gradient_skeleton_animating<H: SkeletonHost + ?Sized>(
        &mut self,
        host: &mut H,
        secondary: Option<Color>,
        direction: GradientDirection,
        duration: Duration,
        transition: TransitionStyle,
    ) {
        self.show_skeleton(
            host,
            SkeletonStyle::GradientAnimated {
                secondary,
                direction,
                duration,
            },
            transition,
        );
    }

    /// Request the style and transition described by `config`
    pub fn show_configured<H: SkeletonHost + ?Sized>(
        &mut self,
        host: &mut H,
        config: &SkeletonConfig,
    ) -> Result<()> {
        let style = SkeletonStyle::from_config(config)?;
        self.show_skeleton(host, style, TransitionStyle::from_config(config));
        Ok(())
    }

    /// Request phase shared by every style
    pub fn show_skeleton<H: SkeletonHost + ?Sized>(
        &mut self,
        host: &mut H,
        style: SkeletonStyle,
        transition: TransitionStyle,
    ) {
        self.generation += 1;
        if let Some(previous) = self.pending.take() {
            warn!(
                superseded = previous.generation,
                by = self.generation,
                "replacing pending skeleton request"
            );
        }

        if self.hide_during_reload {
            host.set_hidden(true);
        }
        host.reload_all_data();

        debug!(kind = %style.kind(), generation = self.generation, "skeleton requested");
        self.pending = Some(PendingShow {
            style,
            transition,
            generation: self.generation,
        });
    }

    /// Commit phase. Returns the dispatch counts, or `None` when nothing was
    /// pending
    pub fn run_pending<H: SkeletonHost + ?Sized>(&mut self, host: &mut H) -> Option<DispatchSummary> {
        let pending = self.pending.take()?;

        host.set_hidden(false);
        host.set_scroll_enabled(false);

        let tint = self.appearance.tint_color();
        let defaults = *self.appearance.defaults();
        let mut summary = DispatchSummary::default();

        for item in host.visible_rows_mut() {
            item.set_interaction_enabled(false);
            if !dispatch_show(item, &pending.style, tint, &defaults, pending.transition) {
                summary.fallbacks += 1;
            }
            summary.rows += 1;
        }

        for section in host.visible_section_indices() {
            if let Some(item) = host.header_footer_mut(section) {
                item.set_interaction_enabled(false);
                if !dispatch_show(item, &pending.style, tint, &defaults, pending.transition) {
                    summary.fallbacks += 1;
                }
                summary.headers += 1;
            }
        }

        debug!(
            generation = pending.generation,
            rows = summary.rows,
            headers = summary.headers,
            fallbacks = summary.fallbacks,
            "skeleton committed"
        );
        self.shown = Some(pending.style);
        Some(summary)
    }

    /// Restore scrolling and interaction, hide every visible skeleton and
    /// reload so real content is drawn again. Drops a pending show.
    pub fn hide_skeleton<H: SkeletonHost + ?Sized>(
        &mut self,
        host: &mut H,
        transition: TransitionStyle,
    ) -> DispatchSummary {
        if let Some(pending) = self.pending.take() {
            debug!(generation = pending.generation, "dropping pending skeleton request");
        }

        host.set_hidden(false);
        host.set_scroll_enabled(true);

        let mut summary = DispatchSummary::default();
        for item in host.visible_rows_mut() {
            item.set_interaction_enabled(true);
            if !dispatch_hide(item, transition) {
                summary.fallbacks += 1;
            }
            summary.rows += 1;
        }

        for section in host.visible_section_indices() {
            if let Some(item) = host.header_footer_mut(section) {
                item.set_interaction_enabled(true);
                if !dispatch_hide(item, transition) {
                    summary.fallbacks += 1;
                }
                summary.headers += 1;
            }
        }

        host.reload_all_data();
        if self.shown.take().is_some() {
            debug!(rows = summary.rows, headers = summary.headers, "skeleton hidden");
        }
        summary
    }
}

/// Show `style` on one item. Returns `false` when the generic fallback was used
fn dispatch_show(
    item: &mut dyn RecyclableItem,
    style: &SkeletonStyle,
    tint: Color,
    appearance: &AppearanceDefaults,
    transition: TransitionStyle,
) -> bool {
    if let Some(skeletonable) = item.as_skeletonable() {
        trace!(item = skeletonable.reuse_identifier(), "typed skeleton dispatch");
        match *style {
            SkeletonStyle::Solid => {
                skeletonable.show_solid_skeleton(appearance, Some(tint), transition)
            }
            SkeletonStyle::SolidAnimated { animation } => skeletonable
                .show_solid_skeleton_animating(appearance, Some(tint), animation, transition),
            SkeletonStyle::Gradient { secondary } => {
                skeletonable.show_gradient_skeleton(appearance, Some(tint), secondary, transition)
            }
            SkeletonStyle::GradientAnimated {
                secondary,
                direction,
                duration,
            } => skeletonable.show_gradient_skeleton_animating(
                appearance,
                Some(tint),
                secondary,
                Some(direction),
                Some(duration),
                transition,
            ),
        }
        return true;
    }

    trace!(item = item.reuse_identifier(), "fallback skeleton dispatch");
    let layer = SkeletonLayer::from_style(style, tint, appearance, transition)
        .with_scope(LayerScope::WholeItem);
    item.surface_mut().show(layer);
    false
}

/// Returns `false` when the generic fallback was used
fn dispatch_hide(item: &mut dyn RecyclableItem, transition: TransitionStyle) -> bool {
    if let Some(skeletonable) = item.as_skeletonable() {
        skeletonable.hide_skeleton(transition);
        return true;
    }
    item.surface_mut().hide(transition);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use crate::capability::Skeletonable;
    use crate::style::SkeletonGradient;
    use crate::surface::{SkeletonFill, SkeletonSurface, SurfaceElement};
    use crate::theme::Theme;

    /// Calls observed on capable items, shared between items of one test
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Solid(Option<Color>),
        SolidAnimating(Option<Color>, Option<SkeletonAnimation>),
        Gradient(Option<Color>, Option<Color>),
        GradientAnimating(Option<Color>, Option<Color>, Option<GradientDirection>, Option<Duration>),
        Hide,
    }

    type Log = Rc<RefCell<Vec<(String, Call)>>>;

    struct CapableItem {
        name: String,
        surface: SkeletonSurface,
        log: Log,
    }

    impl CapableItem {
        fn new(name: &str, log: &Log) -> Box<dyn RecyclableItem> {
            Box::new(Self {
                name: name.to_string(),
                surface: SkeletonSurface::new(vec![SurfaceElement::new("label")]),
                log: log.clone(),
            })
        }

        fn record(&self, call: Call) {
            self.log.borrow_mut().push((self.name.clone(), call));
        }
    }

    impl RecyclableItem for CapableItem {
        fn reuse_identifier(&self) -> &str {
            "Capable"
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

        fn render_content(&self, _area: Rect, _buf: &mut Buffer, _theme: &Theme) {}
    }

    // Records the arguments, then runs the default behaviour
    impl Skeletonable for CapableItem {
        fn show_solid_skeleton(
            &mut self,
            appearance: &AppearanceDefaults,
            color: Option<Color>,
            transition: TransitionStyle,
        ) {
            self.record(Call::Solid(color));
            let fill = SkeletonFill::Solid(color.unwrap_or(appearance.tint_color));
            self.surface.show(SkeletonLayer::new(fill, None, transition));
        }

        fn show_solid_skeleton_animating(
            &mut self,
            _appearance: &AppearanceDefaults,
            color: Option<Color>,
            animation: Option<SkeletonAnimation>,
            transition: TransitionStyle,
        ) {
            self.record(Call::SolidAnimating(color, animation));
            let fill = SkeletonFill::Solid(color.unwrap_or(Color::Gray));
            self.surface.show(SkeletonLayer::new(fill, animation, transition));
        }

        fn show_gradient_skeleton(
            &mut self,
            _appearance: &AppearanceDefaults,
            base: Option<Color>,
            secondary: Option<Color>,
            transition: TransitionStyle,
        ) {
            self.record(Call::Gradient(base, secondary));
            let fill = SkeletonFill::Gradient(SkeletonGradient::new(base.unwrap_or(Color::Gray), secondary));
            self.surface.show(SkeletonLayer::new(fill, None, transition));
        }

        fn show_gradient_skeleton_animating(
            &mut self,
            _appearance: &AppearanceDefaults,
            base: Option<Color>,
            secondary: Option<Color>,
            direction: Option<GradientDirection>,
            duration: Option<Duration>,
            transition: TransitionStyle,
        ) {
            self.record(Call::GradientAnimating(base, secondary, direction, duration));
            let fill = SkeletonFill::Gradient(SkeletonGradient::new(base.unwrap_or(Color::Gray), secondary));
            self.surface.show(SkeletonLayer::new(fill, None, transition));
        }

        fn hide_skeleton(&mut self, transition: TransitionStyle) {
            self.record(Call::Hide);
            self.surface.hide(transition);
        }
    }

    struct OpaqueItem {
        surface: SkeletonSurface,
    }

    impl OpaqueItem {
        fn new() -> Box<dyn RecyclableItem> {
            Box::new(Self {
                surface: SkeletonSurface::new(Vec::new()),
            })
        }
    }

    impl RecyclableItem for OpaqueItem {
        fn reuse_identifier(&self) -> &str {
            "Opaque"
        }

        fn surface(&self) -> &SkeletonSurface {
            &self.surface
        }

        fn surface_mut(&mut self) -> &mut SkeletonSurface {
            &mut self.surface
        }

        fn render_content(&self, _area: Rect, _buf: &mut Buffer, _theme: &Theme) {}
    }

    /// Host whose visible set is only valid after `layout()`, like a real table
    struct FakeHost {
        rows: Vec<(IndexPath, Box<dyn RecyclableItem>)>,
        headers: Vec<(usize, Box<dyn RecyclableItem>)>,
        laid_out: bool,
        reloads: usize,
        scroll_enabled: bool,
        hidden: bool,
    }

    impl FakeHost {
        fn new() -> Self {
            Self {
                rows: Vec::new(),
                headers: Vec::new(),
                laid_out: true,
                reloads: 0,
                scroll_enabled: true,
                hidden: false,
            }
        }

        fn with_row(mut self, section: usize, row: usize, item: Box<dyn RecyclableItem>) -> Self {
            self.rows.push((IndexPath::new(section, row), item));
            self
        }

        fn with_header(mut self, section: usize, item: Box<dyn RecyclableItem>) -> Self {
            self.headers.push((section, item));
            self
        }

        fn layout(&mut self) {
            self.laid_out = true;
        }

        fn shown_rows(&self) -> usize {
            self.rows.iter().filter(|(_, item)| item.surface().is_shown()).count()
        }
    }

    impl SkeletonHost for FakeHost {
        fn reload_all_data(&mut self) {
            self.reloads += 1;
            self.laid_out = false;
        }

        fn visible_index_paths(&self) -> Vec<IndexPath> {
            if !self.laid_out {
                return Vec::new();
            }
            self.rows.iter().map(|(path, _)| *path).collect()
        }

        fn visible_rows_mut(&mut self) -> Vec<&mut dyn RecyclableItem> {
            let mut out: Vec<&mut dyn RecyclableItem> = Vec::new();
            if !self.laid_out {
                return out;
            }
            for (_, item) in &mut self.rows {
                out.push(item.as_mut());
            }
            out
        }

        fn header_footer_mut(&mut self, section: usize) -> Option<&mut dyn RecyclableItem> {
            for (s, item) in &mut self.headers {
                if *s == section {
                    return Some(item.as_mut());
                }
            }
            None
        }

        fn set_scroll_enabled(&mut self, enabled: bool) {
            self.scroll_enabled = enabled;
        }

        fn is_scroll_enabled(&self) -> bool {
            self.scroll_enabled
        }

        fn set_hidden(&mut self, hidden: bool) {
            self.hidden = hidden;
        }

        fn is_hidden(&self) -> bool {
            self.hidden
        }
    }

    fn show_and_commit(coordinator: &mut SkeletonCoordinator, host: &mut FakeHost, style: SkeletonStyle) -> DispatchSummary {
        coordinator.show_skeleton(host, style, TransitionStyle::None);
        host.layout();
        coordinator.run_pending(host).expect("pending show")
    }

    #[test]
    fn test_three_rows_solid_gray() {
        let log = Log::default();
        let mut host = FakeHost::new()
            .with_row(0, 0, CapableItem::new("a", &log))
            .with_row(0, 1, CapableItem::new("b", &log))
            .with_row(0, 2, CapableItem::new("c", &log));
        let mut coordinator = SkeletonCoordinator::default();
        coordinator.set_skeleton_tint_color(Color::Gray);

        coordinator.show_solid_skeleton(&mut host, TransitionStyle::None);
        assert_eq!(coordinator.phase(), CoordinatorPhase::Pending);
        assert_eq!(host.shown_rows(), 0);

        host.layout();
        let summary = coordinator.run_pending(&mut host).unwrap();

        assert_eq!(summary, DispatchSummary { rows: 3, headers: 0, fallbacks: 0 });
        assert_eq!(host.shown_rows(), 3);
        for (_, item) in &host.rows {
            assert_eq!(item.surface().layer().unwrap().fill, SkeletonFill::Solid(Color::Gray));
            assert!(!item.is_interaction_enabled());
        }
        assert!(!host.is_scroll_enabled());
        assert_eq!(coordinator.phase(), CoordinatorPhase::Shown);
        assert_eq!(host.reloads, 1);
    }

    #[test]
    fn test_commit_before_layout_sees_nothing() {
        let log = Log::default();
        let mut host = FakeHost::new().with_row(0, 0, CapableItem::new("a", &log));
        let mut coordinator = SkeletonCoordinator::default();

        coordinator.show_solid_skeleton(&mut host, TransitionStyle::None);
        // Visible set is stale until the host lays out again
        assert!(host.visible_rows_mut().is_empty());
        let summary = coordinator.run_pending(&mut host).unwrap();
        assert_eq!(summary.rows, 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_gradient_animated_arguments() {
        let log = Log::default();
        let mut host = FakeHost::new().with_row(0, 0, CapableItem::new("a", &log));
        let mut coordinator = SkeletonCoordinator::default();
        let tint = coordinator.skeleton_tint_color();

        coordinator.show_gradient_skeleton_animating(
            &mut host,
            None,
            GradientDirection::LeftRight,
            Duration::from_millis(1500),
            TransitionStyle::None,
        );
        host.layout();
        coordinator.run_pending(&mut host);

        assert_eq!(
            log.borrow().as_slice(),
            &[(
                "a".to_string(),
                Call::GradientAnimating(
                    Some(tint),
                    None,
                    Some(GradientDirection::LeftRight),
                    Some(Duration::from_millis(1500))
                )
            )]
        );
    }

    #[test]
    fn test_each_style_reaches_its_typed_method() {
        let log = Log::default();
        let mut host = FakeHost::new().with_row(0, 0, CapableItem::new("a", &log));
        let mut coordinator = SkeletonCoordinator::default();
        let tint = coordinator.skeleton_tint_color();
        let pulse = SkeletonAnimation::pulse();

        for style in [
            SkeletonStyle::Solid,
            SkeletonStyle::SolidAnimated { animation: Some(pulse) },
            SkeletonStyle::Gradient { secondary: Some(Color::White) },
        ] {
            show_and_commit(&mut coordinator, &mut host, style);
        }

        let calls: Vec<Call> = log.borrow().iter().map(|(_, c)| c.clone()).collect();
        assert_eq!(
            calls,
            vec![
                Call::Solid(Some(tint)),
                Call::SolidAnimating(Some(tint), Some(pulse)),
                Call::Gradient(Some(tint), Some(Color::White)),
            ]
        );
    }

    #[test]
    fn test_fallback_only_for_opaque_items() {
        let log = Log::default();
        let mut host = FakeHost::new()
            .with_row(0, 0, CapableItem::new("capable", &log))
            .with_row(0, 1, OpaqueItem::new());
        let mut coordinator = SkeletonCoordinator::default();

        let summary = show_and_commit(&mut coordinator, &mut host, SkeletonStyle::Solid);

        assert_eq!(summary.fallbacks, 1);
        assert_eq!(log.borrow().len(), 1);
        let capable = host.rows[0].1.surface().layer().unwrap();
        let opaque = host.rows[1].1.surface().layer().unwrap();
        assert_eq!(capable.scope, LayerScope::Elements);
        assert_eq!(opaque.scope, LayerScope::WholeItem);
        assert_eq!(opaque.fill, SkeletonFill::Solid(coordinator.skeleton_tint_color()));
    }

    #[test]
    fn test_headers_are_deduplicated() {
        let log = Log::default();
        let mut host = FakeHost::new();
        for (row, section) in [0, 0, 1, 2, 2].into_iter().enumerate() {
            host = host.with_row(section, row, OpaqueItem::new());
        }
        for section in 0..3 {
            host = host.with_header(section, CapableItem::new(&format!("header{}", section), &log));
        }
        host = host.with_header(7, CapableItem::new("offscreen", &log));

        assert_eq!(host.visible_section_indices(), BTreeSet::from([0, 1, 2]));

        let mut coordinator = SkeletonCoordinator::default();
        let summary = show_and_commit(&mut coordinator, &mut host, SkeletonStyle::Solid);

        assert_eq!(summary.headers, 3);
        let names: Vec<String> = log.borrow().iter().map(|(n, _)| n.clone()).collect();
        assert_eq!(names, vec!["header0", "header1", "header2"]);
        assert!(host.headers.iter().take(3).all(|(_, h)| !h.is_interaction_enabled()));
        assert!(host.headers[3].1.is_interaction_enabled());
    }

    #[test]
    fn test_opaque_header_takes_fallback_both_ways() {
        let log = Log::default();
        let mut host = FakeHost::new()
            .with_row(0, 0, CapableItem::new("row", &log))
            .with_row(1, 0, CapableItem::new("row", &log))
            .with_header(0, OpaqueItem::new())
            .with_header(1, CapableItem::new("header", &log));
        let mut coordinator = SkeletonCoordinator::default();

        let shown = show_and_commit(&mut coordinator, &mut host, SkeletonStyle::Solid);
        assert_eq!(shown, DispatchSummary { rows: 2, headers: 2, fallbacks: 1 });
        let opaque = host.headers[0].1.surface().layer().unwrap();
        assert_eq!(opaque.scope, LayerScope::WholeItem);
        assert!(!host.headers[0].1.is_interaction_enabled());

        let hidden = coordinator.hide_skeleton(&mut host, TransitionStyle::None);
        assert_eq!(hidden, DispatchSummary { rows: 2, headers: 2, fallbacks: 1 });
        assert!(!host.headers[0].1.surface().is_shown());
        assert!(host.headers[0].1.is_interaction_enabled());
        // Typed calls only ever reached the capable items
        assert_eq!(log.borrow().len(), 6);
    }

    #[test]
    fn test_hide_restores_scroll_and_interaction() {
        let log = Log::default();
        let mut host = FakeHost::new()
            .with_row(0, 0, CapableItem::new("a", &log))
            .with_row(0, 1, OpaqueItem::new())
            .with_header(0, CapableItem::new("h", &log));
        let mut coordinator = SkeletonCoordinator::default();
        show_and_commit(&mut coordinator, &mut host, SkeletonStyle::Gradient { secondary: None });

        let summary = coordinator.hide_skeleton(&mut host, TransitionStyle::None);

        assert_eq!(summary, DispatchSummary { rows: 2, headers: 1, fallbacks: 1 });
        assert!(host.is_scroll_enabled());
        assert_eq!(host.shown_rows(), 0);
        assert!(host.rows.iter().all(|(_, item)| item.is_interaction_enabled()));
        assert!(host.headers[0].1.is_interaction_enabled());
        assert_eq!(coordinator.phase(), CoordinatorPhase::Idle);
        assert_eq!(host.reloads, 2);
    }

    #[test]
    fn test_hide_without_show_is_noop() {
        let mut host = FakeHost::new();
        host.set_scroll_enabled(false);
        let mut coordinator = SkeletonCoordinator::default();

        let summary = coordinator.hide_skeleton(&mut host, TransitionStyle::None);

        assert_eq!(summary, DispatchSummary::default());
        assert!(host.is_scroll_enabled());
        assert_eq!(coordinator.phase(), CoordinatorPhase::Idle);
    }

    #[test]
    fn test_empty_container_is_not_an_error() {
        let mut host = FakeHost::new();
        let mut coordinator = SkeletonCoordinator::default();
        let summary = show_and_commit(&mut coordinator, &mut host, SkeletonStyle::Solid);
        assert_eq!(summary, DispatchSummary::default());
        assert_eq!(host.reloads, 1);
    }

    #[test]
    fn test_tint_change_does_not_restyle_shown_skeleton() {
        let log = Log::default();
        let mut host = FakeHost::new().with_row(0, 0, CapableItem::new("a", &log));
        let mut coordinator = SkeletonCoordinator::default();
        coordinator.set_skeleton_tint_color(Color::Gray);
        show_and_commit(&mut coordinator, &mut host, SkeletonStyle::Solid);

        coordinator.set_skeleton_tint_color(Color::Red);
        coordinator.set_corner_radius(0);
        assert_eq!(
            host.rows[0].1.surface().layer().unwrap().fill,
            SkeletonFill::Solid(Color::Gray)
        );

        show_and_commit(&mut coordinator, &mut host, SkeletonStyle::Solid);
        assert_eq!(
            host.rows[0].1.surface().layer().unwrap().fill,
            SkeletonFill::Solid(Color::Red)
        );
    }

    #[test]
    fn test_second_request_supersedes_pending() {
        let log = Log::default();
        let mut host = FakeHost::new().with_row(0, 0, CapableItem::new("a", &log));
        let mut coordinator = SkeletonCoordinator::default();

        coordinator.show_solid_skeleton(&mut host, TransitionStyle::None);
        coordinator.show_gradient_skeleton(&mut host, None, TransitionStyle::None);
        host.layout();
        coordinator.run_pending(&mut host);
        assert!(coordinator.run_pending(&mut host).is_none());

        let calls: Vec<Call> = log.borrow().iter().map(|(_, c)| c.clone()).collect();
        assert_eq!(calls.len(), 1);
        assert!(matches!(calls[0], Call::Gradient(..)));
        assert!(matches!(coordinator.shown_style(), Some(SkeletonStyle::Gradient { .. })));
    }

    #[test]
    fn test_hide_cancels_pending_show() {
        let log = Log::default();
        let mut host = FakeHost::new().with_row(0, 0, CapableItem::new("a", &log));
        let mut coordinator = SkeletonCoordinator::default();

        coordinator.show_solid_skeleton(&mut host, TransitionStyle::None);
        coordinator.hide_skeleton(&mut host, TransitionStyle::None);
        host.layout();

        assert!(coordinator.run_pending(&mut host).is_none());
        assert_eq!(host.shown_rows(), 0);
        assert!(host.is_scroll_enabled());
    }

    #[test]
    fn test_hide_during_reload_toggles_hidden() {
        let mut host = FakeHost::new();
        let mut coordinator = SkeletonCoordinator::default();
        coordinator.set_hide_during_reload(true);

        coordinator.show_solid_skeleton(&mut host, TransitionStyle::None);
        assert!(host.is_hidden());
        host.layout();
        coordinator.run_pending(&mut host);
        assert!(!host.is_hidden());
    }

    #[test]
    fn test_show_configured_uses_config_style() {
        let log = Log::default();
        let mut host = FakeHost::new().with_row(0, 0, CapableItem::new("a", &log));
        let config = SkeletonConfig {
            kind: skeletonable_core::SkeletonKind::SolidAnimated,
            ..Default::default()
        };
        let mut coordinator = SkeletonCoordinator::from_config(&config).unwrap();

        coordinator.show_configured(&mut host, &config).unwrap();
        host.layout();
        coordinator.run_pending(&mut host);

        let calls: Vec<Call> = log.borrow().iter().map(|(_, c)| c.clone()).collect();
        assert_eq!(calls, vec![Call::SolidAnimating(Some(coordinator.skeleton_tint_color()), None)]);
    }
}
