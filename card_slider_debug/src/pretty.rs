// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use card_slider_core::trace::{
    CellEvent, CellVisual, EvaluateEvent, PageChangeEvent, PageChangeSource, ReloadEvent,
    ScrollEvent, ScrollRequestEvent, SelectionEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the destination.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn source_name(source: PageChangeSource) -> &'static str {
    match source {
        PageChangeSource::Scroll => "scroll",
        PageChangeSource::Indicator => "indicator",
        PageChangeSource::Reload => "reload",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_scroll(&mut self, e: &ScrollEvent) {
        let _ = writeln!(
            self.writer,
            "[scroll] #{} offset={:.1} nearest={} visible={}..{}",
            e.seq, e.offset, e.nearest_index, e.visible_start, e.visible_end,
        );
    }

    fn on_page_change(&mut self, e: &PageChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[page] #{} {} -> {} via {}",
            e.seq,
            e.from,
            e.to,
            source_name(e.source),
        );
    }

    fn on_cell_materialized(&mut self, e: &CellEvent) {
        let _ = writeln!(
            self.writer,
            "[cell:new] #{} slot={} index={}",
            e.seq, e.slot, e.index,
        );
    }

    fn on_cell_reused(&mut self, e: &CellEvent) {
        let _ = writeln!(
            self.writer,
            "[cell:reuse] #{} slot={} index={}",
            e.seq, e.slot, e.index,
        );
    }

    fn on_cell_evicted(&mut self, e: &CellEvent) {
        let _ = writeln!(
            self.writer,
            "[cell:evict] #{} slot={} index={}",
            e.seq, e.slot, e.index,
        );
    }

    fn on_selection(&mut self, e: &SelectionEvent) {
        let _ = writeln!(
            self.writer,
            "[select] #{} index={} scrolls={}",
            e.seq, e.index, e.scrolls,
        );
    }

    fn on_scroll_request(&mut self, e: &ScrollRequestEvent) {
        let _ = writeln!(
            self.writer,
            "[scroll:request] #{} index={} offset={:.1} animated={}",
            e.seq, e.index, e.offset, e.animated,
        );
    }

    fn on_reload(&mut self, e: &ReloadEvent) {
        let _ = writeln!(
            self.writer,
            "[reload] #{} items={} current={}",
            e.seq, e.item_count, e.current_index,
        );
    }

    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        let _ = writeln!(
            self.writer,
            "[evaluate] #{} new={} evicted={} geometry={} visuals={}",
            e.seq, e.materialized, e.evicted, e.geometry, e.visuals,
        );
    }

    fn on_cell_visuals(&mut self, seq: u64, visuals: &[CellVisual]) {
        for v in visuals {
            let _ = writeln!(
                self.writer,
                "[visual] #{seq} slot={} index={} depth={:.3} zoom={:.3} shade={:.3} alpha={:.3}",
                v.slot, v.index, v.depth, v.zoom, v.shade, v.alpha,
            );
        }
    }
}
