// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider container.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size, Vec2};
use understory_dirty::{Channel, CycleHandling, DirtyTracker};

use crate::card::{CardCell, CardStyle, CellId, CellPool, Dequeued};
use crate::color::Color;
use crate::dirty;
use crate::error::{SliderError, check_dimension, check_range};
use crate::layout::{CardAttributes, CardsLayout};
use crate::time::{HostTime, Timebase};
#[cfg(feature = "trace-rich")]
use crate::trace::CellVisual;
use crate::trace::{
    CellEvent, EvaluateEvent, PageChangeEvent, PageChangeSource, ReloadEvent, ScrollEvent,
    ScrollRequestEvent, SelectionEvent, TraceSink, Tracer,
};

use super::capability::{CardDataSource, CardSliderDelegate};
use super::changes::{ScrollRequest, SliderChanges};
use super::config::{DEFAULT_ITEM_HEIGHT, ItemWidth};
use super::indicator::PageIndicator;

/// Opacity spread across the faded stack, in whole percent.
const FADE_SPAN_PERCENT: usize = 80;

/// Tolerance when comparing an index to a fractional page position.
const PAGE_EPSILON: f64 = 1e-9;

/// A horizontally paging stack of cards.
///
/// The host reports scroll offsets with [`did_scroll`](Self::did_scroll);
/// the slider keeps the materialized cells, the page indicator and the alpha
/// fade consistent with that offset, and records what changed for the next
/// [`evaluate`](Self::evaluate).
///
/// `V` is the host's item content, produced by a [`CardDataSource`].
pub struct CardSlider<V> {
    // -- Geometry --
    bounds: Rect,
    layout: CardsLayout,
    item_width: ItemWidth,
    item_height: f64,
    offset: f64,

    // -- Paging --
    current_index: usize,
    use_alpha_for_visible_cells: bool,
    indicator: PageIndicator,
    scroll_request: Option<ScrollRequest>,

    // -- Cells --
    pool: CellPool<V>,
    cells: HashMap<usize, CellId>,

    // -- Capabilities --
    data_source: Option<Box<dyn CardDataSource<V>>>,
    delegate: Option<Box<dyn CardSliderDelegate>>,

    // -- Change tracking --
    dirty: DirtyTracker<u32>,
    pending_materialized: Vec<u32>,
    pending_evicted: Vec<u32>,
    indicator_dirty: bool,

    tracer: Tracer,
}

impl<V> fmt::Debug for CardSlider<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardSlider")
            .field("bounds", &self.bounds)
            .field("layout", &self.layout)
            .field("item_width", &self.item_width)
            .field("offset", &self.offset)
            .field("current_index", &self.current_index)
            .field("materialized", &self.cells.len())
            .field("has_data_source", &self.data_source.is_some())
            .field("has_delegate", &self.delegate.is_some())
            .finish_non_exhaustive()
    }
}

impl<V> CardSlider<V> {
    /// Creates a slider of the given size with default configuration and a
    /// nanosecond timebase.
    ///
    /// Negative or non-finite dimensions are treated as 0.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self::with_timebase(size, Timebase::NANOS)
    }

    /// Creates a slider whose highlight fades run in `timebase` ticks.
    #[must_use]
    pub fn with_timebase(size: Size, timebase: Timebase) -> Self {
        let size = Size::new(sanitize(size.width), sanitize(size.height));
        let bounds = size.to_rect();
        let mut slider = Self {
            bounds,
            layout: CardsLayout::new(size),
            item_width: ItemWidth::default(),
            item_height: DEFAULT_ITEM_HEIGHT,
            offset: 0.0,
            current_index: 0,
            use_alpha_for_visible_cells: true,
            indicator: PageIndicator::new(bounds),
            scroll_request: None,
            pool: CellPool::new(CardStyle::default(), timebase),
            cells: HashMap::new(),
            data_source: None,
            delegate: None,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pending_materialized: Vec::new(),
            pending_evicted: Vec::new(),
            indicator_dirty: true,
            tracer: Tracer::none(),
        };
        slider.update_item_size();
        slider
    }

    /// Restoring a slider from an archived representation is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`SliderError::UnsupportedConstruction`].
    pub fn from_archive(archive: &[u8]) -> Result<Self, SliderError> {
        _ = archive;
        Err(SliderError::UnsupportedConstruction)
    }

    // -- Capabilities --

    /// Installs or removes the data source.
    ///
    /// Takes effect at the next [`reload_data`](Self::reload_data).
    pub fn set_data_source(&mut self, data_source: Option<Box<dyn CardDataSource<V>>>) {
        self.data_source = data_source;
    }

    /// Installs or removes the delegate. Without one, notifications are
    /// dropped.
    pub fn set_delegate(&mut self, delegate: Option<Box<dyn CardSliderDelegate>>) {
        self.delegate = delegate;
    }

    /// Installs or removes the trace sink.
    ///
    /// Without the `trace` feature the sink is dropped immediately.
    pub fn set_trace_sink(&mut self, sink: Option<Box<dyn TraceSink>>) {
        self.tracer.set_sink(sink);
    }

    // -- Data --

    /// Re-queries the data source and rebuilds every materialized cell.
    ///
    /// Without a data source this is a no-op.
    pub fn reload_data(&mut self) {
        let Some(data_source) = &self.data_source else {
            return;
        };
        let item_count = data_source.number_of_items();
        self.layout.set_item_count(item_count);
        self.indicator.set_number_of_pages(item_count);
        self.indicator_dirty = true;

        let clamped = self.current_index.min(item_count.saturating_sub(1));
        if clamped != self.current_index {
            self.change_page(clamped, PageChangeSource::Reload);
        }

        self.evict_all();
        self.relayout();

        let seq = self.tracer.next_seq();
        self.tracer.reload(&ReloadEvent {
            seq,
            item_count,
            current_index: self.current_index,
        });
    }

    // -- Scrolling --

    /// Reports the host scroll view's horizontal content offset.
    ///
    /// Updates the current page (notifying
    /// [`item_displayed`](CardSliderDelegate::item_displayed) when it
    /// changes) and brings the materialized cells in line with the offset.
    /// Non-finite offsets are ignored.
    pub fn did_scroll(&mut self, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        self.offset = offset;

        let nearest = self.layout.nearest_index(offset);
        if nearest != self.current_index {
            self.change_page(nearest, PageChangeSource::Scroll);
            if let Some(delegate) = &mut self.delegate {
                delegate.item_displayed(nearest);
            }
        }

        self.relayout();

        if self.tracer.is_enabled() {
            let range = self.layout.visible_range(offset);
            let seq = self.tracer.next_seq();
            self.tracer.scroll(&ScrollEvent {
                seq,
                offset,
                nearest_index: nearest,
                visible_start: range.start,
                visible_end: range.end,
            });
        }
    }

    /// Takes the pending programmatic scroll, if any.
    ///
    /// Selection and indicator taps leave one here for the host scroll view.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.scroll_request.take()
    }

    /// The pending programmatic scroll, if any, without taking it.
    #[must_use]
    pub fn scroll_request(&self) -> Option<&ScrollRequest> {
        self.scroll_request.as_ref()
    }

    // -- Input --

    /// Selects the item at `index`.
    ///
    /// Clears the item's highlight, notifies
    /// [`item_selected`](CardSliderDelegate::item_selected) and, unless the
    /// item is already at the front, requests a scroll to it. Out-of-range
    /// indices are ignored.
    pub fn select_item(&mut self, index: usize) {
        if index >= self.layout.item_count() {
            return;
        }

        if let Some(&id) = self.cells.get(&index) {
            let cell = self.pool.get_mut(id);
            if cell.is_highlighted() {
                cell.clear_highlight();
                self.dirty.mark(id.idx, dirty::HIGHLIGHT);
            }
        }

        if let Some(delegate) = &mut self.delegate {
            delegate.item_selected(index);
        }

        let w = self.layout.page_width();
        let at_front = w <= 0.0 || (index as f64 - self.offset / w).abs() < PAGE_EPSILON;
        if !at_front {
            self.request_scroll(index);
        }

        let seq = self.tracer.next_seq();
        self.tracer.selection(&SelectionEvent {
            seq,
            index,
            scrolls: !at_front,
        });
    }

    /// Handles a tap at `point` in slider coordinates.
    ///
    /// Taps on the page indicator step one page back (left half) or forward
    /// (right half), staying within the page range, and request a scroll to
    /// the resulting page. Returns whether the indicator consumed the tap.
    pub fn handle_tap(&mut self, point: Point) -> bool {
        let Some(step) = self.indicator.hit(point) else {
            return false;
        };
        let target = self.indicator.step(self.current_index, step);
        if target != self.current_index {
            self.change_page(target, PageChangeSource::Indicator);
            self.apply_alpha_fade();
        }
        if self.layout.item_count() > 0 {
            self.request_scroll(target);
        }
        true
    }

    /// Presses or releases the card at `index` at host time `now`.
    ///
    /// Returns whether a materialized cell received it.
    pub fn set_highlighted(&mut self, index: usize, pressed: bool, now: HostTime) -> bool {
        let Some(&id) = self.cells.get(&index) else {
            return false;
        };
        self.pool.get_mut(id).set_highlighted(pressed, now);
        self.dirty.mark(id.idx, dirty::HIGHLIGHT);
        true
    }

    // -- Configuration --

    /// Sets the item width class or explicit width.
    ///
    /// # Errors
    ///
    /// [`SliderError::InvalidDimension`] for a negative or non-finite
    /// [`ItemWidth::Fixed`] width.
    pub fn set_item_width(&mut self, item_width: ItemWidth) -> Result<(), SliderError> {
        if let ItemWidth::Fixed(w) = item_width {
            check_dimension("item width", w)?;
        }
        self.item_width = item_width;
        self.update_item_size();
        self.relayout();
        Ok(())
    }

    /// Sets the item height.
    ///
    /// # Errors
    ///
    /// [`SliderError::InvalidDimension`] for a negative or non-finite height.
    pub fn set_item_height(&mut self, height: f64) -> Result<(), SliderError> {
        self.item_height = check_dimension("item height", height)?;
        self.update_item_size();
        self.relayout();
        Ok(())
    }

    /// Sets the horizontal step between stacked cards. Relative item widths
    /// are re-derived.
    ///
    /// # Errors
    ///
    /// [`SliderError::InvalidDimension`] for a negative or non-finite spacing.
    pub fn set_spacing(&mut self, spacing: f64) -> Result<(), SliderError> {
        let spacing = check_dimension("spacing", spacing)?;
        self.layout.set_spacing(spacing);
        self.update_item_size();
        self.relayout();
        Ok(())
    }

    /// Sets how many cards are stacked at once.
    ///
    /// # Errors
    ///
    /// [`SliderError::ZeroVisibleItems`] for a count of 0.
    pub fn set_visible_items_count(&mut self, count: usize) -> Result<(), SliderError> {
        if count == 0 {
            return Err(SliderError::ZeroVisibleItems);
        }
        self.layout.set_visible_items_count(count);
        self.relayout();
        Ok(())
    }

    /// Sets the tint of the inactive indicator dots.
    pub fn set_page_indicator_tint_color(&mut self, color: Color) {
        self.indicator.set_tint_color(color);
        self.indicator_dirty = true;
    }

    /// Sets the tint of the current page's indicator dot.
    pub fn set_current_page_indicator_tint_color(&mut self, color: Color) {
        self.indicator.set_current_tint_color(color);
        self.indicator_dirty = true;
    }

    /// Offsets the page indicator: `x` shifts it horizontally (0 is
    /// centered), `y` lifts it from the bottom edge.
    ///
    /// # Errors
    ///
    /// [`SliderError::InvalidDimension`] for a non-finite coordinate.
    pub fn set_page_indicator_position(&mut self, x: f64, y: f64) -> Result<(), SliderError> {
        for (what, value) in [("indicator x position", x), ("indicator y position", y)] {
            if !value.is_finite() {
                return Err(SliderError::InvalidDimension { what, value });
            }
        }
        self.indicator.set_position(Vec2::new(x, y), self.bounds);
        self.indicator_dirty = true;
        Ok(())
    }

    /// Turns the alpha fade of the cards behind the current one on or off.
    pub fn set_use_alpha_for_visible_cells(&mut self, enabled: bool) {
        self.use_alpha_for_visible_cells = enabled;
        self.apply_alpha_fade();
    }

    /// Replaces the card style on every cell.
    ///
    /// # Errors
    ///
    /// [`SliderError::InvalidDimension`] for a negative or non-finite corner
    /// or shadow radius, a maximum zoom below 1, or a shadow opacity outside
    /// `[0, 1]`.
    pub fn set_card_style(&mut self, style: CardStyle) -> Result<(), SliderError> {
        check_dimension("corner radius", style.corner_radius)?;
        check_dimension("shadow radius", style.shadow.radius)?;
        check_range("max zoom", style.max_zoom, 1.0..=f64::MAX)?;
        check_range("shadow opacity", style.shadow.opacity, 0.0..=1.0)?;
        self.pool.set_style(style);
        for &id in self.cells.values() {
            self.dirty.mark(id.idx, dirty::MASK);
            self.dirty.mark(id.idx, dirty::VISUAL);
        }
        Ok(())
    }

    /// Resizes the slider (for example on rotation).
    ///
    /// The page width follows the new width and relative item widths are
    /// re-derived. The host is expected to report the rescaled offset via
    /// [`did_scroll`](Self::did_scroll).
    ///
    /// # Errors
    ///
    /// [`SliderError::InvalidDimension`] for a negative or non-finite
    /// dimension.
    pub fn set_size(&mut self, size: Size) -> Result<(), SliderError> {
        let width = check_dimension("width", size.width)?;
        let height = check_dimension("height", size.height)?;
        let size = Size::new(width, height);
        self.bounds = size.to_rect();
        self.layout.set_viewport(size);
        self.indicator.layout(self.bounds);
        self.indicator_dirty = true;
        self.update_item_size();
        self.relayout();
        Ok(())
    }

    // -- Accessors --

    /// Slider size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// Slider bounds (origin at zero).
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The layout engine.
    #[must_use]
    pub fn layout(&self) -> &CardsLayout {
        &self.layout
    }

    /// The last reported scroll offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Index of the front page.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of items from the last reload.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.layout.item_count()
    }

    /// Configured item width.
    #[must_use]
    pub fn item_width(&self) -> ItemWidth {
        self.item_width
    }

    /// Configured item height.
    #[must_use]
    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    /// Whether the alpha fade is on.
    #[must_use]
    pub fn use_alpha_for_visible_cells(&self) -> bool {
        self.use_alpha_for_visible_cells
    }

    /// The card style.
    #[must_use]
    pub fn card_style(&self) -> &CardStyle {
        self.pool.style()
    }

    /// The page indicator.
    #[must_use]
    pub fn indicator(&self) -> &PageIndicator {
        &self.indicator
    }

    /// The cell pool.
    #[must_use]
    pub fn pool(&self) -> &CellPool<V> {
        &self.pool
    }

    /// Handle of the cell showing `index`, if materialized.
    #[must_use]
    pub fn cell_id_for_index(&self, index: usize) -> Option<CellId> {
        self.cells.get(&index).copied()
    }

    /// The cell showing `index`, if materialized.
    #[must_use]
    pub fn cell_for_index(&self, index: usize) -> Option<&CardCell<V>> {
        self.cells.get(&index).map(|&id| self.pool.get(id))
    }

    /// The cell in pool slot `slot`, as reported by [`SliderChanges`].
    #[must_use]
    pub fn cell_at(&self, slot: u32) -> Option<&CardCell<V>> {
        self.pool.cell_at(slot)
    }

    /// Materialized indices in ascending order.
    #[must_use]
    pub fn materialized_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.cells.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Alpha-fade value for `index` at the current page.
    ///
    /// With the fade on, the `visible_items_count - 1` indices before the
    /// current one ramp up from 0 in steps of `80 / visible_items_count`
    /// percent, truncated to a whole percent; every other index is at 1.
    #[must_use]
    pub fn fade_alpha(&self, index: usize) -> f64 {
        if !self.use_alpha_for_visible_cells {
            return 1.0;
        }
        let visible = self.layout.visible_items_count();
        let start = (self.current_index + 1).saturating_sub(visible);
        if (start..self.current_index).contains(&index) {
            let step = FADE_SPAN_PERCENT / visible;
            (step * (index - start)) as f64 / 100.0
        } else {
            1.0
        }
    }

    // -- Evaluation --

    /// Drains dirty channels and returns what changed since the last call.
    pub fn evaluate(&mut self) -> SliderChanges {
        let mut changes = SliderChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer
    /// to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut SliderChanges) {
        changes.clear();

        changes.geometry = self.drain_live(dirty::GEOMETRY);
        changes.visuals = self.drain_live(dirty::VISUAL);
        changes.masks = self.drain_live(dirty::MASK);
        changes.content = self.drain_live(dirty::CONTENT);
        changes.highlights = self.drain_live(dirty::HIGHLIGHT);

        core::mem::swap(&mut self.pending_materialized, &mut changes.materialized);
        core::mem::swap(&mut self.pending_evicted, &mut changes.evicted);
        changes.indicator_changed = core::mem::take(&mut self.indicator_dirty);

        if self.tracer.is_enabled() {
            let seq = self.tracer.next_seq();
            self.tracer.evaluate(&EvaluateEvent {
                seq,
                materialized: count(&changes.materialized),
                evicted: count(&changes.evicted),
                geometry: count(&changes.geometry),
                visuals: count(&changes.visuals),
            });
            #[cfg(feature = "trace-rich")]
            self.trace_visuals(seq, &changes.visuals);
        }
    }

    // -- Internal helpers --

    fn drain_live(&mut self, channel: Channel) -> Vec<u32> {
        let drained: Vec<u32> = self.dirty.drain(channel).deterministic().run().collect();
        let mut live: Vec<u32> = drained
            .into_iter()
            .filter(|&slot| self.pool.is_live_slot(slot))
            .collect();
        live.sort_unstable();
        live
    }

    fn update_item_size(&mut self) {
        let spacing = self.layout.spacing();
        let width = self.item_width.resolve(self.bounds.width(), spacing);
        self.layout.set_item_size(Size::new(width, self.item_height));
    }

    fn change_page(&mut self, to: usize, source: PageChangeSource) {
        let from = self.current_index;
        self.current_index = to;
        self.indicator.set_current_page(to);
        self.indicator_dirty = true;
        let seq = self.tracer.next_seq();
        self.tracer.page_change(&PageChangeEvent {
            seq,
            from,
            to,
            source,
        });
    }

    fn request_scroll(&mut self, index: usize) {
        let request = ScrollRequest {
            index,
            offset: self.layout.offset_for_index(index),
            animated: true,
        };
        self.scroll_request = Some(request);
        let seq = self.tracer.next_seq();
        self.tracer.scroll_request(&ScrollRequestEvent {
            seq,
            index: request.index,
            offset: request.offset,
            animated: request.animated,
        });
    }

    /// Re-applies the fade to every materialized cell.
    fn apply_alpha_fade(&mut self) {
        let fades: Vec<(CellId, f64)> = self
            .cells
            .iter()
            .map(|(&index, &id)| (id, self.fade_alpha(index)))
            .collect();
        for (id, alpha) in fades {
            let cell = self.pool.get_mut(id);
            if cell.content_alpha() != alpha {
                cell.set_content_alpha(alpha);
                self.dirty.mark(id.idx, dirty::VISUAL);
            }
        }
    }

    fn evict(&mut self, index: usize) {
        let Some(id) = self.cells.remove(&index) else {
            return;
        };
        self.pool.release(id);
        self.dirty.remove_key(id.idx);
        self.pending_evicted.push(id.idx);
        let seq = self.tracer.next_seq();
        self.tracer.cell_evicted(&CellEvent {
            seq,
            slot: id.idx,
            index,
        });
    }

    fn evict_all(&mut self) {
        for index in self.materialized_indices() {
            self.evict(index);
        }
        self.pool.clear();
    }

    /// Binds a cell to `index`, or returns `None` without a data source.
    fn materialize(&mut self, index: usize) -> Option<CellId> {
        let data_source = self.data_source.as_mut()?;
        let content = data_source.item(index);
        let (id, kind) = self.pool.dequeue();
        drop(self.pool.get_mut(id).set_content(index, content));
        self.cells.insert(index, id);

        for channel in [dirty::GEOMETRY, dirty::VISUAL, dirty::MASK, dirty::CONTENT] {
            self.dirty.mark(id.idx, channel);
        }
        self.pending_materialized.push(id.idx);

        let seq = self.tracer.next_seq();
        let event = CellEvent {
            seq,
            slot: id.idx,
            index,
        };
        match kind {
            Dequeued::Fresh => self.tracer.cell_materialized(&event),
            Dequeued::Reused => self.tracer.cell_reused(&event),
        }
        Some(id)
    }

    /// Evicts cells that left the visible range, binds cells for indices
    /// that entered it, and applies layout attributes and fade to all.
    fn relayout(&mut self) {
        let range = self.layout.visible_range(self.offset);

        let leaving: Vec<usize> = {
            let mut leaving: Vec<usize> = self
                .cells
                .keys()
                .copied()
                .filter(|index| !range.contains(index))
                .collect();
            leaving.sort_unstable();
            leaving
        };
        for index in leaving {
            self.evict(index);
        }

        for index in range {
            let id = match self.cells.get(&index) {
                Some(&id) => id,
                None => match self.materialize(index) {
                    Some(id) => id,
                    None => continue,
                },
            };
            let Some(attributes) = self.layout.attributes(index, self.offset) else {
                continue;
            };
            let alpha = self.fade_alpha(index);
            self.apply_to_cell(id, &attributes, alpha);
        }
    }

    fn apply_to_cell(&mut self, id: CellId, attributes: &CardAttributes, alpha: f64) {
        let cell = self.pool.get_mut(id);
        let previous = cell.placement().copied();
        let previous_bounds = cell.bounds();
        let previous_alpha = cell.content_alpha();

        cell.apply_attributes(attributes);
        cell.set_content_alpha(alpha);

        let geometry_changed = previous.is_none_or(|p| {
            p.frame != attributes.frame || p.z_index != attributes.z_index
        });
        let visual_changed = previous_alpha != alpha
            || previous.is_none_or(|p| {
                p.zoom_progress != attributes.zoom_progress
                    || p.shade_progress != attributes.shade_progress
                    || p.alpha != attributes.alpha
            });
        let mask_changed = previous_bounds != cell.bounds();

        if geometry_changed {
            self.dirty.mark(id.idx, dirty::GEOMETRY);
        }
        if visual_changed {
            self.dirty.mark(id.idx, dirty::VISUAL);
        }
        if mask_changed {
            self.dirty.mark(id.idx, dirty::MASK);
        }
    }

    #[cfg(feature = "trace-rich")]
    fn trace_visuals(&mut self, seq: u64, slots: &[u32]) {
        let visuals: Vec<CellVisual> = slots
            .iter()
            .filter_map(|&slot| {
                let cell = self.pool.cell_at(slot)?;
                let placement = cell.placement()?;
                Some(CellVisual {
                    slot,
                    index: placement.index,
                    depth: placement.depth,
                    zoom: cell.zoom(),
                    shade: cell.shade_alpha(),
                    alpha: cell.content_alpha(),
                })
            })
            .collect();
        self.tracer.cell_visuals(seq, &visuals);
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "change counts capped at u32::MAX for tracing"
)]
fn count(slots: &[u32]) -> u32 {
    slots.len().min(u32::MAX as usize) as u32
}
