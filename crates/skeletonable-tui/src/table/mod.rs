//! Sectioned table of recyclable items
//!
//! Only items intersecting the viewport are materialised. They are
//! dequeued from a [`ReusePool`] during [`SkeletonTable::layout`] and go back
//! to the pool when they scroll out of view or the table is reloaded.
//! Items that stay visible across a layout pass are kept as they are, so a
//! resize does not drop the skeleton they show.

mod data_source;
mod pool;

pub use data_source::TableDataSource;
pub use pool::{ItemFactory, ReusePool};

use std::collections::HashMap;
use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use skeletonable_core::{Error, Result};
use tracing::{debug, trace};

use crate::appearance::AppearanceDefaults;
use crate::capability::RecyclableItem;
use crate::coordinator::{IndexPath, SkeletonHost};
use crate::render::SkeletonPainter;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SlotKind {
    Header(usize),
    Row(IndexPath),
}

/// Position of one header or row in content coordinates
#[derive(Debug, Clone, Copy)]
struct Slot {
    kind: SlotKind,
    top: u16,
    height: u16,
}

impl Slot {
    fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

struct PlacedItem {
    slot: Slot,
    item: Box<dyn RecyclableItem>,
}

pub struct SkeletonTable {
    pool: ReusePool,
    placed: Vec<PlacedItem>,
    viewport: Rect,
    scroll_offset: u16,
    content_height: u16,
    last_layout: Option<(Rect, u16)>,
    needs_reload: bool,
    scroll_enabled: bool,
    hidden: bool,
}

impl Default for SkeletonTable {
    fn default() -> Self {
        Self::new(ReusePool::new())
    }
}

impl SkeletonTable {
    pub fn new(pool: ReusePool) -> Self {
        Self {
            pool,
            placed: Vec::new(),
            viewport: Rect::default(),
            scroll_offset: 0,
            content_height: 0,
            last_layout: None,
            needs_reload: true,
            scroll_enabled: true,
            hidden: false,
        }
    }

    pub fn register<F>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn RecyclableItem> + 'static,
    {
        self.pool.register(identifier, factory);
    }

    pub fn pool(&self) -> &ReusePool {
        &self.pool
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport.height)
    }

    /// Scroll by `delta` lines. Returns whether the offset changed; always
    /// `false` while scrolling is disabled
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        if !self.scroll_enabled {
            trace!(delta, "scroll ignored while disabled");
            return false;
        }
        let target = (self.scroll_offset as i32)
            .saturating_add(delta)
            .clamp(0, self.max_scroll() as i32) as u16;
        let changed = target != self.scroll_offset;
        self.scroll_offset = target;
        changed
    }

    pub fn needs_layout(&self, viewport: Rect) -> bool {
        self.needs_reload || self.last_layout != Some((viewport, self.scroll_offset))
    }

    /// Materialise the items visible in `viewport`. Does nothing when neither
    /// the viewport nor the scroll offset changed since the last pass and no
    /// reload is pending. Returns whether a pass ran.
    pub fn layout<D: TableDataSource + ?Sized>(
        &mut self,
        viewport: Rect,
        source: &D,
        appearance: &AppearanceDefaults,
    ) -> Result<bool> {
        if !self.needs_layout(viewport) {
            return Ok(false);
        }

        let slots = content_slots(source);
        self.content_height = slots.last().map_or(0, Slot::bottom);
        self.viewport = viewport;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());

        let top = self.scroll_offset;
        let bottom = top.saturating_add(viewport.height);

        let mut previous: HashMap<SlotKind, Box<dyn RecyclableItem>> = self
            .placed
            .drain(..)
            .map(|placed| (placed.slot.kind, placed.item))
            .collect();

        let mut placed = Vec::new();
        for slot in slots
            .into_iter()
            .filter(|slot| slot.height > 0 && slot.top < bottom && slot.bottom() > top)
        {
            let mut item = match previous.remove(&slot.kind) {
                Some(item) => item,
                None => self.dequeue_for(slot.kind, source, appearance)?,
            };
            item.layout(viewport.width, slot.height);
            placed.push(PlacedItem { slot, item });
        }

        for (_, item) in previous {
            self.pool.recycle(item);
        }

        trace!(
            visible = placed.len(),
            offset = self.scroll_offset,
            "table laid out"
        );
        self.placed = placed;
        self.needs_reload = false;
        self.last_layout = Some((viewport, self.scroll_offset));
        Ok(true)
    }

    fn dequeue_for<D: TableDataSource + ?Sized>(
        &mut self,
        kind: SlotKind,
        source: &D,
        appearance: &AppearanceDefaults,
    ) -> Result<Box<dyn RecyclableItem>> {
        match kind {
            SlotKind::Row(path) => {
                let mut item = self.pool.dequeue(source.reuse_identifier(path), appearance)?;
                source.configure_row(path, item.as_mut());
                Ok(item)
            }
            SlotKind::Header(section) => {
                let identifier = source.header_identifier(section).ok_or_else(|| {
                    Error::Other(format!("section {} has no header template", section))
                })?;
                let mut item = self.pool.dequeue(identifier, appearance)?;
                source.configure_header(section, item.as_mut());
                Ok(item)
            }
        }
    }

    /// Whether any materialised item paints differently over time
    pub fn is_animating(&self, now: Instant) -> bool {
        self.placed
            .iter()
            .any(|placed| placed.item.surface().is_animating(now))
    }

    /// Draw every materialised item into `area`, skeletons on top
    pub fn draw(&self, area: Rect, buf: &mut Buffer, theme: &Theme, now: Instant) {
        buf.set_style(area, Style::default().bg(theme.bg0).fg(theme.fg0));
        if self.hidden {
            return;
        }

        let painter = SkeletonPainter::new(theme, now);
        for placed in &self.placed {
            // Rendered off-screen first so partly scrolled items clip cleanly
            let item_area = Rect::new(area.x, 0, area.width, placed.slot.height);
            let mut scratch = Buffer::empty(item_area);
            scratch.set_style(item_area, Style::default().bg(theme.bg0).fg(theme.fg0));
            placed.item.render_content(item_area, &mut scratch, theme);
            painter.paint(placed.item.surface(), item_area, &mut scratch);

            for local_y in 0..placed.slot.height {
                let row = placed.slot.top as i32 + local_y as i32 - self.scroll_offset as i32;
                if row < 0 || row >= area.height as i32 {
                    continue;
                }
                let screen_y = area.y + row as u16;
                for x in area.left()..area.right() {
                    if let (Some(src), Some(dst)) =
                        (scratch.cell((x, local_y)), buf.cell_mut((x, screen_y)))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

/// Every header and row in content order
fn content_slots<D: TableDataSource + ?Sized>(source: &D) -> Vec<Slot> {
    let mut slots = Vec::new();
    let mut y = 0u16;
    for section in 0..source.number_of_sections() {
        if source.header_identifier(section).is_some() {
            let height = source.header_height(section);
            slots.push(Slot {
                kind: SlotKind::Header(section),
                top: y,
                height,
            });
            y = y.saturating_add(height);
        }
        for row in 0..source.rows_in_section(section) {
            let path = IndexPath::new(section, row);
            let height = source.row_height(path);
            slots.push(Slot {
                kind: SlotKind::Row(path),
                top: y,
                height,
            });
            y = y.saturating_add(height);
        }
    }
    slots
}

impl SkeletonHost for SkeletonTable {
    /// Recycles every live item; they are repopulated by the next layout pass
    fn reload_all_data(&mut self) {
        for placed in self.placed.drain(..) {
            self.pool.recycle(placed.item);
        }
        self.needs_reload = true;
        debug!("table reload requested");
    }

    fn visible_index_paths(&self) -> Vec<IndexPath> {
        self.placed
            .iter()
            .filter_map(|placed| match placed.slot.kind {
                SlotKind::Row(path) => Some(path),
                SlotKind::Header(_) => None,
            })
            .collect()
    }

    fn visible_rows_mut(&mut self) -> Vec<&mut dyn RecyclableItem> {
        let mut rows: Vec<&mut dyn RecyclableItem> = Vec::new();
        for placed in &mut self.placed {
            if let SlotKind::Row(_) = placed.slot.kind {
                rows.push(placed.item.as_mut());
            }
        }
        rows
    }

    fn header_footer_mut(&mut self, section: usize) -> Option<&mut dyn RecyclableItem> {
        for placed in &mut self.placed {
            if placed.slot.kind == SlotKind::Header(section) {
                return Some(placed.item.as_mut());
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
