// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluation output and host requests.
//!
//! [`SliderChanges`] uses raw pool slot indices (`u32`) rather than
//! [`CellId`](crate::card::CellId) handles so that presenters can look cells
//! up with [`CardSlider::cell_at`](super::CardSlider::cell_at) and key their
//! own native views by slot.

use alloc::vec::Vec;

/// The set of changes produced by a single
/// [`CardSlider::evaluate`](super::CardSlider::evaluate) call.
///
/// Each list holds the slot indices of cells that changed in the
/// corresponding category, in ascending order. Presenters use these to apply
/// incremental updates.
///
/// A slot released and reused within one cycle appears in both
/// [`evicted`](Self::evicted) and [`materialized`](Self::materialized).
/// Presenters must apply evictions before materializations, so the slot's
/// native view ends up bound to its new index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SliderChanges {
    /// Cells whose frame, scale or z-order changed.
    pub geometry: Vec<u32>,
    /// Cells whose zoom, shade, shadow opacity or alpha changed.
    pub visuals: Vec<u32>,
    /// Cells whose clip mask or shadow path changed.
    pub masks: Vec<u32>,
    /// Cells that were handed new item content.
    pub content: Vec<u32>,
    /// Cells whose highlight started or stopped.
    pub highlights: Vec<u32>,
    /// Cells bound to an index since the last evaluate.
    pub materialized: Vec<u32>,
    /// Cells released since the last evaluate. Apply these before
    /// [`materialized`](Self::materialized).
    pub evicted: Vec<u32>,
    /// Whether the page indicator changed (page count, current page, tints
    /// or frame).
    pub indicator_changed: bool,
}

impl SliderChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.geometry.clear();
        self.visuals.clear();
        self.masks.clear();
        self.content.clear();
        self.highlights.clear();
        self.materialized.clear();
        self.evicted.clear();
        self.indicator_changed = false;
    }

    /// Whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
            && self.visuals.is_empty()
            && self.masks.is_empty()
            && self.content.is_empty()
            && self.highlights.is_empty()
            && self.materialized.is_empty()
            && self.evicted.is_empty()
            && !self.indicator_changed
    }
}

/// A programmatic scroll the host's scroll view should perform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Item the scroll brings to the front.
    pub index: usize,
    /// Target horizontal content offset.
    pub offset: f64,
    /// Whether to animate.
    pub animated: bool,
}
