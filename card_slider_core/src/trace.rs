// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the slider.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! slider calls as it scrolls, pages, recycles cells and handles input. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing and installed sinks are
//! dropped. When **on**, each method performs a single `Option` branch before
//! dispatching.
//!
//! Every event carries a `seq` number, monotonically increasing per tracer,
//! so recordings keep their order without a clock.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates [`CellVisual`] snapshots and the
//!   corresponding `TraceSink` method.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What moved the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageChangeSource {
    /// The scroll offset crossed a page midpoint.
    Scroll,
    /// A tap on the page indicator.
    Indicator,
    /// A reload clamped the current page to the new item count.
    Reload,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted for every scroll offset the host reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    /// Event sequence number.
    pub seq: u64,
    /// Horizontal content offset.
    pub offset: f64,
    /// Page nearest to `offset`.
    pub nearest_index: usize,
    /// First materialized index.
    pub visible_start: usize,
    /// One past the last materialized index.
    pub visible_end: usize,
}

/// Emitted when the current page changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageChangeEvent {
    /// Event sequence number.
    pub seq: u64,
    /// Previous current index.
    pub from: usize,
    /// New current index.
    pub to: usize,
    /// What caused the change.
    pub source: PageChangeSource,
}

/// Emitted when a cell is bound to, or unbound from, an item index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellEvent {
    /// Event sequence number.
    pub seq: u64,
    /// Pool slot of the cell.
    pub slot: u32,
    /// Item index the cell shows (or showed, for evictions).
    pub index: usize,
}

/// Emitted when an item is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionEvent {
    /// Event sequence number.
    pub seq: u64,
    /// Selected item index.
    pub index: usize,
    /// Whether the selection also requested a scroll to the item.
    pub scrolls: bool,
}

/// Emitted when the slider asks the host to scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequestEvent {
    /// Event sequence number.
    pub seq: u64,
    /// Target item index.
    pub index: usize,
    /// Target content offset.
    pub offset: f64,
    /// Whether the host should animate the scroll.
    pub animated: bool,
}

/// Emitted after the data source is re-queried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReloadEvent {
    /// Event sequence number.
    pub seq: u64,
    /// Number of items reported by the data source.
    pub item_count: usize,
    /// Current index after clamping.
    pub current_index: usize,
}

/// Emitted by each [`evaluate`](crate::slider::CardSlider::evaluate) call
/// with the size of the change set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvaluateEvent {
    /// Event sequence number.
    pub seq: u64,
    /// Cells bound since the last evaluate.
    pub materialized: u32,
    /// Cells released since the last evaluate.
    pub evicted: u32,
    /// Cells whose geometry changed.
    pub geometry: u32,
    /// Cells whose zoom, shade or alpha changed.
    pub visuals: u32,
}

/// A per-cell visual state snapshot.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellVisual {
    /// Pool slot of the cell.
    pub slot: u32,
    /// Item index shown by the cell.
    pub index: usize,
    /// Depth behind the front card.
    pub depth: f64,
    /// Content zoom factor.
    pub zoom: f64,
    /// Shade overlay alpha.
    pub shade: f64,
    /// Content alpha from the alpha fade.
    pub alpha: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the slider.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the host reports a scroll offset.
    fn on_scroll(&mut self, e: &ScrollEvent) {
        _ = e;
    }

    /// Called when the current page changes.
    fn on_page_change(&mut self, e: &PageChangeEvent) {
        _ = e;
    }

    /// Called when a fresh cell is bound to an index.
    fn on_cell_materialized(&mut self, e: &CellEvent) {
        _ = e;
    }

    /// Called when a recycled cell is bound to an index.
    fn on_cell_reused(&mut self, e: &CellEvent) {
        _ = e;
    }

    /// Called when a cell is released back to the pool.
    fn on_cell_evicted(&mut self, e: &CellEvent) {
        _ = e;
    }

    /// Called when an item is selected.
    fn on_selection(&mut self, e: &SelectionEvent) {
        _ = e;
    }

    /// Called when a programmatic scroll is requested.
    fn on_scroll_request(&mut self, e: &ScrollRequestEvent) {
        _ = e;
    }

    /// Called after the data source is re-queried.
    fn on_reload(&mut self, e: &ReloadEvent) {
        _ = e;
    }

    /// Called at the end of each evaluate.
    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        _ = e;
    }

    /// Called with per-cell visual snapshots (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_cell_visuals(&mut self, seq: u64, visuals: &[CellVisual]) {
        _ = (seq, visuals);
    }
}

/// Shares one sink between the slider and the code that reads it back.
impl<S: TraceSink + ?Sized> TraceSink for Rc<RefCell<S>> {
    fn on_scroll(&mut self, e: &ScrollEvent) {
        self.borrow_mut().on_scroll(e);
    }

    fn on_page_change(&mut self, e: &PageChangeEvent) {
        self.borrow_mut().on_page_change(e);
    }

    fn on_cell_materialized(&mut self, e: &CellEvent) {
        self.borrow_mut().on_cell_materialized(e);
    }

    fn on_cell_reused(&mut self, e: &CellEvent) {
        self.borrow_mut().on_cell_reused(e);
    }

    fn on_cell_evicted(&mut self, e: &CellEvent) {
        self.borrow_mut().on_cell_evicted(e);
    }

    fn on_selection(&mut self, e: &SelectionEvent) {
        self.borrow_mut().on_selection(e);
    }

    fn on_scroll_request(&mut self, e: &ScrollRequestEvent) {
        self.borrow_mut().on_scroll_request(e);
    }

    fn on_reload(&mut self, e: &ReloadEvent) {
        self.borrow_mut().on_reload(e);
    }

    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        self.borrow_mut().on_evaluate(e);
    }

    #[cfg(feature = "trace-rich")]
    fn on_cell_visuals(&mut self, seq: u64, visuals: &[CellVisual]) {
        self.borrow_mut().on_cell_visuals(seq, visuals);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin owner of an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
    #[cfg(feature = "trace")]
    seq: u64,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        let mut tracer = Self::none();
        tracer.set_sink(Some(sink));
        tracer
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Installs or removes the sink.
    #[inline]
    pub fn set_sink(&mut self, sink: Option<Box<dyn TraceSink>>) {
        #[cfg(feature = "trace")]
        {
            self.sink = sink;
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
        }
    }

    /// Whether events reach a sink.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Allocates the next event sequence number.
    #[inline]
    pub fn next_seq(&mut self) -> u64 {
        #[cfg(feature = "trace")]
        {
            let seq = self.seq;
            self.seq += 1;
            seq
        }
        #[cfg(not(feature = "trace"))]
        {
            0
        }
    }

    /// Emits a [`ScrollEvent`].
    #[inline]
    pub fn scroll(&mut self, e: &ScrollEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scroll(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PageChangeEvent`].
    #[inline]
    pub fn page_change(&mut self, e: &PageChangeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_page_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a materialization [`CellEvent`].
    #[inline]
    pub fn cell_materialized(&mut self, e: &CellEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cell_materialized(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a reuse [`CellEvent`].
    #[inline]
    pub fn cell_reused(&mut self, e: &CellEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cell_reused(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an eviction [`CellEvent`].
    #[inline]
    pub fn cell_evicted(&mut self, e: &CellEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_cell_evicted(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SelectionEvent`].
    #[inline]
    pub fn selection(&mut self, e: &SelectionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_selection(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ScrollRequestEvent`].
    #[inline]
    pub fn scroll_request(&mut self, e: &ScrollRequestEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scroll_request(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ReloadEvent`].
    #[inline]
    pub fn reload(&mut self, e: &ReloadEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reload(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`EvaluateEvent`].
    #[inline]
    pub fn evaluate(&mut self, e: &EvaluateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_evaluate(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits per-cell visual snapshots (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn cell_visuals(&mut self, seq: u64, visuals: &[CellVisual]) {
        if let Some(s) = &mut self.sink {
            s.on_cell_visuals(seq, visuals);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scroll() -> ScrollEvent {
        ScrollEvent {
            seq: 3,
            offset: 480.0,
            nearest_index: 2,
            visible_start: 2,
            visible_end: 5,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_scroll(&sample_scroll());
        sink.on_page_change(&PageChangeEvent {
            seq: 0,
            from: 0,
            to: 1,
            source: PageChangeSource::Scroll,
        });
        sink.on_reload(&ReloadEvent {
            seq: 1,
            item_count: 10,
            current_index: 0,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        assert!(!tracer.is_enabled());
        tracer.scroll(&sample_scroll());
        tracer.selection(&SelectionEvent {
            seq: 0,
            index: 1,
            scrolls: false,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_shared_sink() {
        use alloc::vec::Vec;

        #[derive(Default)]
        struct RecordingSink {
            offsets: Vec<f64>,
            pages: Vec<(usize, usize)>,
        }
        impl TraceSink for RecordingSink {
            fn on_scroll(&mut self, e: &ScrollEvent) {
                self.offsets.push(e.offset);
            }
            fn on_page_change(&mut self, e: &PageChangeEvent) {
                self.pages.push((e.from, e.to));
            }
        }

        let sink = Rc::new(RefCell::new(RecordingSink::default()));
        let mut tracer = Tracer::new(Box::new(sink.clone()));
        assert!(tracer.is_enabled());
        tracer.scroll(&sample_scroll());
        tracer.page_change(&PageChangeEvent {
            seq: 4,
            from: 1,
            to: 2,
            source: PageChangeSource::Indicator,
        });
        assert_eq!(sink.borrow().offsets, &[480.0]);
        assert_eq!(sink.borrow().pages, &[(1, 2)]);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn sequence_numbers_increase() {
        let mut tracer = Tracer::none();
        assert_eq!(tracer.next_seq(), 0);
        assert_eq!(tracer.next_seq(), 1);
        assert_eq!(tracer.next_seq(), 2);
    }
}
