//! Painting of skeleton layers over already-rendered item content

use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::animation::sample;
use crate::animation::timing::progress;
use crate::color::blend;
use crate::surface::{LayerScope, SkeletonLayer, SkeletonSurface};
use crate::theme::Theme;

/// Left edge glyph of a block with rounded corners
const ROUNDED_LEFT: &str = "▐";
/// Right edge glyph of a block with rounded corners
const ROUNDED_RIGHT: &str = "▌";

/// One block to paint, in buffer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Region {
    rect: Rect,
    corner_radius: u16,
}

pub struct SkeletonPainter<'a> {
    theme: &'a Theme,
    now: Instant,
}

impl<'a> SkeletonPainter<'a> {
    pub fn new(theme: &'a Theme, now: Instant) -> Self {
        Self { theme, now }
    }

    /// Paint the skeleton state of `surface` for an item drawn at `area`.
    /// Content must already be in `buf`.
    pub fn paint(&self, surface: &SkeletonSurface, area: Rect, buf: &mut Buffer) {
        if let Some(layer) = surface.layer() {
            let elapsed = layer.elapsed(self.now);
            let opacity = progress(elapsed, layer.transition.duration());
            self.paint_layer(surface, layer, area, buf, opacity, elapsed);
            return;
        }

        if let Some(fading) = surface.fading(self.now) {
            let since_hide = self.now.saturating_duration_since(fading.hidden_at);
            let opacity = 1.0 - progress(since_hide, fading.duration);
            let elapsed = fading.layer.elapsed(self.now);
            self.paint_layer(surface, &fading.layer, area, buf, opacity, elapsed);
        }
    }

    fn paint_layer(
        &self,
        surface: &SkeletonSurface,
        layer: &SkeletonLayer,
        area: Rect,
        buf: &mut Buffer,
        opacity: f64,
        elapsed: Duration,
    ) {
        if opacity <= 0.0 {
            return;
        }

        for region in regions(surface, layer.scope, area) {
            let rect = region.rect.intersection(buf.area);
            if rect.is_empty() {
                continue;
            }
            let rounded = region.corner_radius > 0 && rect.width >= 2;

            for y in rect.top()..rect.bottom() {
                for x in rect.left()..rect.right() {
                    let color = sample(layer, area, x, y, elapsed);
                    let edge = if !rounded {
                        None
                    } else if x == rect.left() {
                        Some(ROUNDED_LEFT)
                    } else if x == rect.right() - 1 {
                        Some(ROUNDED_RIGHT)
                    } else {
                        None
                    };
                    self.paint_cell(buf, x, y, color, opacity, edge);
                }
            }
        }
    }

    fn paint_cell(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        color: Color,
        opacity: f64,
        edge: Option<&str>,
    ) {
        let Some(cell) = buf.cell_mut((x, y)) else {
            return;
        };
        let background = resolve(cell.bg, self.theme.bg0);

        if opacity < 1.0 {
            // Mid-dissolve: the content underneath stays legible
            let foreground = resolve(cell.fg, self.theme.fg0);
            cell.set_fg(blend(foreground, color, opacity));
            if edge.is_none() {
                cell.set_bg(blend(background, color, opacity));
            }
            return;
        }

        match edge {
            Some(glyph) => {
                cell.set_symbol(glyph);
                cell.set_fg(color);
                cell.set_bg(background);
            }
            None => {
                cell.set_symbol(" ");
                cell.set_bg(color);
            }
        }
    }
}

fn resolve(color: Color, fallback: Color) -> Color {
    match color {
        Color::Reset => fallback,
        other => other,
    }
}

/// Blocks covered by a layer. Element areas are relative to the item origin
fn regions(surface: &SkeletonSurface, scope: LayerScope, area: Rect) -> Vec<Region> {
    match scope {
        LayerScope::WholeItem => vec![Region {
            rect: area,
            corner_radius: 0,
        }],
        LayerScope::Elements => surface
            .root()
            .covered_elements()
            .into_iter()
            .map(|element| Region {
                rect: Rect::new(
                    area.x.saturating_add(element.area.x),
                    area.y.saturating_add(element.area.y),
                    element.area.width,
                    element.area.height,
                )
                .intersection(area),
                corner_radius: element.corner_radius,
            })
            .filter(|region| !region.rect.is_empty())
            .collect(),
    }
}
