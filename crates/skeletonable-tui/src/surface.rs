//! Item-level skeleton controller
//!
//! Every recyclable item owns a [`SkeletonSurface`]: a tree of sub-elements
//! with a per-element "skeletonable" flag, plus the item's skeleton state.
//! The state machine is deliberately tiny:
//!
//! ```text
//!   Idle ──show──▶ Shown ──hide / reuse──▶ Idle
//!                   │ ▲
//!                   └─┘ show (restyle)
//! ```
//!
//! Transitions happen synchronously; animation and cross dissolve only
//! influence painting.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::animation::timing::is_complete;
use crate::appearance::AppearanceDefaults;
use crate::style::{SkeletonAnimation, SkeletonGradient, SkeletonStyle, TransitionStyle};

/// Identifier of a sub-element inside one item
pub type ElementId = &'static str;

/// Identifier of the element representing the item itself
pub const ROOT_ELEMENT: ElementId = "root";

/// One node of an item's skeleton surface. `area` is relative to the item origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceElement {
    pub id: ElementId,
    pub area: Rect,
    pub skeletonable: bool,
    pub corner_radius: u16,
    pub children: Vec<SurfaceElement>,
}

impl SurfaceElement {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            area: Rect::default(),
            skeletonable: false,
            corner_radius: 0,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SurfaceElement>) -> Self {
        self.children = children;
        self
    }

    pub fn find(&self, id: ElementId) -> Option<&SurfaceElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: ElementId) -> Option<&mut SurfaceElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Mark eligible with the given radius
    pub fn mark(&mut self, corner_radius: u16) {
        self.skeletonable = true;
        self.corner_radius = corner_radius;
    }

    /// Elements that receive a placeholder block: skeletonable elements with no
    /// skeletonable children. Non-skeletonable subtrees are skipped entirely.
    pub fn covered_elements(&self) -> Vec<&SurfaceElement> {
        let mut out = Vec::new();
        self.collect_covered(&mut out);
        out
    }

    fn collect_covered<'a>(&'a self, out: &mut Vec<&'a SurfaceElement>) {
        if !self.skeletonable {
            return;
        }
        let has_eligible_child = self.children.iter().any(|c| c.skeletonable);
        if has_eligible_child {
            for child in &self.children {
                child.collect_covered(out);
            }
        } else {
            out.push(self);
        }
    }
}

/// What a skeleton is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonFill {
    Solid(Color),
    Gradient(SkeletonGradient),
}

impl SkeletonFill {
    pub fn base_color(&self) -> Color {
        match self {
            SkeletonFill::Solid(color) => *color,
            SkeletonFill::Gradient(gradient) => gradient.base,
        }
    }
}

/// Which parts of the item a layer covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerScope {
    /// The eligible elements of the surface tree
    Elements,
    /// The whole item as one block, used for items without the capability
    WholeItem,
}

/// A resolved skeleton. Captured when shown, never restyled afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonLayer {
    pub fill: SkeletonFill,
    pub animation: Option<SkeletonAnimation>,
    pub transition: TransitionStyle,
    pub scope: LayerScope,
    pub shown_at: Instant,
}

impl SkeletonLayer {
    pub fn new(
        fill: SkeletonFill,
        animation: Option<SkeletonAnimation>,
        transition: TransitionStyle,
    ) -> Self {
        Self {
            fill,
            animation,
            transition,
            scope: LayerScope::Elements,
            shown_at: Instant::now(),
        }
    }

    /// Resolve a container style into a layer, reading unset parameters
    /// from `appearance`
    pub fn from_style(
        style: &SkeletonStyle,
        tint: Color,
        appearance: &AppearanceDefaults,
        transition: TransitionStyle,
    ) -> Self {
        match *style {
            SkeletonStyle::Solid => Self::new(SkeletonFill::Solid(tint), None, transition),
            SkeletonStyle::SolidAnimated { animation } => Self::new(
                SkeletonFill::Solid(tint),
                Some(animation.unwrap_or_else(SkeletonAnimation::pulse)),
                transition,
            ),
            SkeletonStyle::Gradient { secondary } => Self::new(
                SkeletonFill::Gradient(SkeletonGradient::new(
                    tint,
                    secondary.or(appearance.gradient.secondary),
                )),
                None,
                transition,
            ),
            SkeletonStyle::GradientAnimated {
                secondary,
                direction,
                duration,
            } => Self::new(
                SkeletonFill::Gradient(SkeletonGradient::new(
                    tint,
                    secondary.or(appearance.gradient.secondary),
                )),
                Some(SkeletonAnimation::sliding(direction, duration)),
                transition,
            ),
        }
    }

    pub fn with_scope(mut self, scope: LayerScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.shown_at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonState {
    Idle,
    Shown(SkeletonLayer),
}

/// A hidden layer still dissolving out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadingLayer {
    pub layer: SkeletonLayer,
    pub hidden_at: Instant,
    pub duration: Duration,
}

impl FadingLayer {
    pub fn is_done(&self, now: Instant) -> bool {
        is_complete(now.saturating_duration_since(self.hidden_at), self.duration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonSurface {
    root: SurfaceElement,
    state: SkeletonState,
    fading: Option<FadingLayer>,
    interaction_enabled: bool,
}

impl SkeletonSurface {
    /// `content` are the direct children of the item's content region
    pub fn new(content: Vec<SurfaceElement>) -> Self {
        Self {
            root: SurfaceElement::new(ROOT_ELEMENT).with_children(content),
            state: SkeletonState::Idle,
            fading: None,
            interaction_enabled: true,
        }
    }

    pub fn root(&self) -> &SurfaceElement {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut SurfaceElement {
        &mut self.root
    }

    pub fn element(&self, id: ElementId) -> Option<&SurfaceElement> {
        self.root.find(id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut SurfaceElement> {
        self.root.find_mut(id)
    }

    /// Set an element's area, ignoring unknown ids
    pub fn set_area(&mut self, id: ElementId, area: Rect) {
        if let Some(element) = self.root.find_mut(id) {
            element.area = area;
        }
    }

    /// Default eligibility: the item itself and the direct children of its
    /// content region, each with the default corner radius
    pub fn mark_default(&mut self, appearance: &AppearanceDefaults) {
        let radius = appearance.multiline_corner_radius;
        self.root.mark(radius);
        for child in &mut self.root.children {
            child.mark(radius);
        }
    }

    pub fn state(&self) -> &SkeletonState {
        &self.state
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.state, SkeletonState::Shown(_))
    }

    pub fn layer(&self) -> Option<&SkeletonLayer> {
        match &self.state {
            SkeletonState::Shown(layer) => Some(layer),
            SkeletonState::Idle => None,
        }
    }

    pub fn show(&mut self, layer: SkeletonLayer) {
        self.fading = None;
        self.state = SkeletonState::Shown(layer);
    }

    /// Back to Idle. With a cross dissolve the old layer keeps fading out;
    /// hiding without a transition leaves an earlier fade running.
    pub fn hide(&mut self, transition: TransitionStyle) {
        let previous = std::mem::replace(&mut self.state, SkeletonState::Idle);
        if let (SkeletonState::Shown(layer), TransitionStyle::CrossDissolve(duration)) =
            (previous, transition)
        {
            self.fading = Some(FadingLayer {
                layer,
                hidden_at: Instant::now(),
                duration,
            });
        }
    }

    /// Fade-out still in progress at `now`
    pub fn fading(&self, now: Instant) -> Option<&FadingLayer> {
        self.fading.as_ref().filter(|f| !f.is_done(now))
    }

    pub fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
    }

    /// Whether painting this surface at `now` changes over time
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.fading(now).is_some() {
            return true;
        }
        match self.layer() {
            Some(layer) => {
                layer.animation.is_some()
                    || !is_complete(layer.elapsed(now), layer.transition.duration())
            }
            None => false,
        }
    }
}
