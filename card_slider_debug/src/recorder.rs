// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Indices are stored as `u64` and offsets as raw `f64` bits. Rich events
//! ([`on_cell_visuals`](TraceSink::on_cell_visuals)) store only the count.

use card_slider_core::trace::{
    CellEvent, CellVisual, EvaluateEvent, PageChangeEvent, PageChangeSource, ReloadEvent,
    ScrollEvent, ScrollRequestEvent, SelectionEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_SCROLL: u8 = 1;
const TAG_PAGE_CHANGE: u8 = 2;
const TAG_CELL_MATERIALIZED: u8 = 3;
const TAG_CELL_REUSED: u8 = 4;
const TAG_CELL_EVICTED: u8 = 5;
const TAG_SELECTION: u8 = 6;
const TAG_SCROLL_REQUEST: u8 = 7;
const TAG_RELOAD: u8 = 8;
const TAG_EVALUATE: u8 = 9;
const TAG_CELL_VISUALS_COUNT: u8 = 10;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_index(&mut self, v: usize) {
        self.write_u64(u64::try_from(v).unwrap_or(u64::MAX));
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_source(&mut self, source: PageChangeSource) {
        self.write_u8(match source {
            PageChangeSource::Scroll => 0,
            PageChangeSource::Indicator => 1,
            PageChangeSource::Reload => 2,
        });
    }

    fn write_cell(&mut self, tag: u8, e: &CellEvent) {
        self.write_u8(tag);
        self.write_u64(e.seq);
        self.write_u32(e.slot);
        self.write_index(e.index);
    }
}

impl TraceSink for RecorderSink {
    fn on_scroll(&mut self, e: &ScrollEvent) {
        self.write_u8(TAG_SCROLL);
        self.write_u64(e.seq);
        self.write_f64(e.offset);
        self.write_index(e.nearest_index);
        self.write_index(e.visible_start);
        self.write_index(e.visible_end);
    }

    fn on_page_change(&mut self, e: &PageChangeEvent) {
        self.write_u8(TAG_PAGE_CHANGE);
        self.write_u64(e.seq);
        self.write_index(e.from);
        self.write_index(e.to);
        self.write_source(e.source);
    }

    fn on_cell_materialized(&mut self, e: &CellEvent) {
        self.write_cell(TAG_CELL_MATERIALIZED, e);
    }

    fn on_cell_reused(&mut self, e: &CellEvent) {
        self.write_cell(TAG_CELL_REUSED, e);
    }

    fn on_cell_evicted(&mut self, e: &CellEvent) {
        self.write_cell(TAG_CELL_EVICTED, e);
    }

    fn on_selection(&mut self, e: &SelectionEvent) {
        self.write_u8(TAG_SELECTION);
        self.write_u64(e.seq);
        self.write_index(e.index);
        self.write_bool(e.scrolls);
    }

    fn on_scroll_request(&mut self, e: &ScrollRequestEvent) {
        self.write_u8(TAG_SCROLL_REQUEST);
        self.write_u64(e.seq);
        self.write_index(e.index);
        self.write_f64(e.offset);
        self.write_bool(e.animated);
    }

    fn on_reload(&mut self, e: &ReloadEvent) {
        self.write_u8(TAG_RELOAD);
        self.write_u64(e.seq);
        self.write_index(e.item_count);
        self.write_index(e.current_index);
    }

    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        self.write_u8(TAG_EVALUATE);
        self.write_u64(e.seq);
        self.write_u32(e.materialized);
        self.write_u32(e.evicted);
        self.write_u32(e.geometry);
        self.write_u32(e.visuals);
    }

    fn on_cell_visuals(&mut self, seq: u64, visuals: &[CellVisual]) {
        self.write_u8(TAG_CELL_VISUALS_COUNT);
        self.write_u64(seq);
        self.write_u32(u32::try_from(visuals.len()).unwrap_or(u32::MAX));
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`ScrollEvent`].
    Scroll(ScrollEvent),
    /// A [`PageChangeEvent`].
    PageChange(PageChangeEvent),
    /// A fresh cell bound to an index.
    CellMaterialized(CellEvent),
    /// A recycled cell bound to an index.
    CellReused(CellEvent),
    /// A cell released back to the pool.
    CellEvicted(CellEvent),
    /// A [`SelectionEvent`].
    Selection(SelectionEvent),
    /// A [`ScrollRequestEvent`].
    ScrollRequest(ScrollRequestEvent),
    /// A [`ReloadEvent`].
    Reload(ReloadEvent),
    /// An [`EvaluateEvent`].
    Evaluate(EvaluateEvent),
    /// Visual snapshot count for an evaluate.
    CellVisualsCount {
        /// Event sequence number.
        seq: u64,
        /// Number of snapshots.
        count: u32,
    },
}

impl RecordedEvent {
    /// Sequence number of the event.
    #[must_use]
    pub fn seq(&self) -> u64 {
        match self {
            Self::Scroll(e) => e.seq,
            Self::PageChange(e) => e.seq,
            Self::CellMaterialized(e) | Self::CellReused(e) | Self::CellEvicted(e) => e.seq,
            Self::Selection(e) => e.seq,
            Self::ScrollRequest(e) => e.seq,
            Self::Reload(e) => e.seq,
            Self::Evaluate(e) => e.seq,
            Self::CellVisualsCount { seq, .. } => *seq,
        }
    }
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_index(&mut self) -> Option<usize> {
        usize::try_from(self.read_u64()?).ok()
    }

    fn read_f64(&mut self) -> Option<f64> {
        Some(f64::from_bits(self.read_u64()?))
    }

    fn read_bool(&mut self) -> Option<bool> {
        Some(self.read_u8()? != 0)
    }

    fn read_source(&mut self) -> Option<PageChangeSource> {
        Some(match self.read_u8()? {
            0 => PageChangeSource::Scroll,
            1 => PageChangeSource::Indicator,
            _ => PageChangeSource::Reload,
        })
    }

    fn read_cell(&mut self) -> Option<CellEvent> {
        Some(CellEvent {
            seq: self.read_u64()?,
            slot: self.read_u32()?,
            index: self.read_index()?,
        })
    }

    fn decode_scroll(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Scroll(ScrollEvent {
            seq: self.read_u64()?,
            offset: self.read_f64()?,
            nearest_index: self.read_index()?,
            visible_start: self.read_index()?,
            visible_end: self.read_index()?,
        }))
    }

    fn decode_page_change(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PageChange(PageChangeEvent {
            seq: self.read_u64()?,
            from: self.read_index()?,
            to: self.read_index()?,
            source: self.read_source()?,
        }))
    }

    fn decode_selection(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Selection(SelectionEvent {
            seq: self.read_u64()?,
            index: self.read_index()?,
            scrolls: self.read_bool()?,
        }))
    }

    fn decode_scroll_request(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ScrollRequest(ScrollRequestEvent {
            seq: self.read_u64()?,
            index: self.read_index()?,
            offset: self.read_f64()?,
            animated: self.read_bool()?,
        }))
    }

    fn decode_reload(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Reload(ReloadEvent {
            seq: self.read_u64()?,
            item_count: self.read_index()?,
            current_index: self.read_index()?,
        }))
    }

    fn decode_evaluate(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Evaluate(EvaluateEvent {
            seq: self.read_u64()?,
            materialized: self.read_u32()?,
            evicted: self.read_u32()?,
            geometry: self.read_u32()?,
            visuals: self.read_u32()?,
        }))
    }

    fn decode_cell_visuals_count(&mut self) -> Option<RecordedEvent> {
        let seq = self.read_u64()?;
        let count = self.read_u32()?;
        Some(RecordedEvent::CellVisualsCount { seq, count })
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_SCROLL => self.decode_scroll(),
            TAG_PAGE_CHANGE => self.decode_page_change(),
            TAG_CELL_MATERIALIZED => self.read_cell().map(RecordedEvent::CellMaterialized),
            TAG_CELL_REUSED => self.read_cell().map(RecordedEvent::CellReused),
            TAG_CELL_EVICTED => self.read_cell().map(RecordedEvent::CellEvicted),
            TAG_SELECTION => self.decode_selection(),
            TAG_SCROLL_REQUEST => self.decode_scroll_request(),
            TAG_RELOAD => self.decode_reload(),
            TAG_EVALUATE => self.decode_evaluate(),
            TAG_CELL_VISUALS_COUNT => self.decode_cell_visuals_count(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
