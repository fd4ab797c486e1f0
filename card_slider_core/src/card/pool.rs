// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable cell storage.

use alloc::vec::Vec;

use crate::time::Timebase;

use super::cell::CardCell;
use super::id::CellId;
use super::style::CardStyle;

/// Whether [`CellPool::dequeue`] handed out a fresh or a recycled cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dequeued {
    /// A newly allocated slot.
    Fresh,
    /// A previously released slot, already reset for reuse.
    Reused,
}

/// Pool of [`CardCell`]s addressed by generational [`CellId`] handles.
///
/// Released cells keep their last content until the slot is handed out
/// again, at which point [`CardCell::prepare_for_reuse`] runs and the next
/// [`CardCell::set_content`] evicts the stale content. Generation counters
/// make handles from before a release fail validation.
#[derive(Debug)]
pub struct CellPool<C> {
    cells: Vec<CardCell<C>>,
    generation: Vec<u32>,
    live: Vec<bool>,
    free_list: Vec<u32>,
    style: CardStyle,
    timebase: Timebase,
}

impl<C> CellPool<C> {
    /// Creates an empty pool whose cells use `style` and `timebase`.
    #[must_use]
    pub fn new(style: CardStyle, timebase: Timebase) -> Self {
        Self {
            cells: Vec::new(),
            generation: Vec::new(),
            live: Vec::new(),
            free_list: Vec::new(),
            style,
            timebase,
        }
    }

    // -- Allocation --

    /// Hands out a cell, recycling a released slot when one is available.
    pub fn dequeue(&mut self) -> (CellId, Dequeued) {
        if let Some(idx) = self.free_list.pop() {
            let slot = idx as usize;
            self.generation[slot] += 1;
            self.live[slot] = true;
            self.cells[slot].prepare_for_reuse();
            let id = CellId {
                idx,
                generation: self.generation[slot],
            };
            (id, Dequeued::Reused)
        } else {
            let idx = u32::try_from(self.cells.len()).unwrap_or(u32::MAX);
            self.cells.push(CardCell::new(self.style, self.timebase));
            self.generation.push(0);
            self.live.push(true);
            (CellId { idx, generation: 0 }, Dequeued::Fresh)
        }
    }

    /// Returns a cell to the pool.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn release(&mut self, id: CellId) {
        self.validate(id);
        let slot = id.idx as usize;
        self.generation[slot] += 1;
        self.live[slot] = false;
        self.free_list.push(id.idx);
    }

    /// Releases every live cell and drops all cached content.
    pub fn clear(&mut self) {
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            drop(cell.take_content());
            if self.live[idx] {
                self.live[idx] = false;
                self.generation[idx] += 1;
                let slot = u32::try_from(idx).unwrap_or(u32::MAX);
                self.free_list.push(slot);
            }
        }
    }

    /// Returns whether the given handle refers to a live cell.
    #[must_use]
    pub fn is_alive(&self, id: CellId) -> bool {
        let slot = id.idx as usize;
        slot < self.cells.len() && self.live[slot] && self.generation[slot] == id.generation
    }

    /// Returns whether the raw slot `idx` currently holds a live cell.
    #[must_use]
    pub fn is_live_slot(&self, idx: u32) -> bool {
        self.live.get(idx as usize).copied().unwrap_or(false)
    }

    /// Number of live cells.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.iter().filter(|live| **live).count()
    }

    /// Number of allocated slots, live or free.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    // -- Access --

    /// Returns the cell for `id`.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn get(&self, id: CellId) -> &CardCell<C> {
        self.validate(id);
        &self.cells[id.idx as usize]
    }

    /// Returns the cell for `id` mutably.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn get_mut(&mut self, id: CellId) -> &mut CardCell<C> {
        self.validate(id);
        &mut self.cells[id.idx as usize]
    }

    /// Returns the cell in raw slot `idx`, live or not.
    ///
    /// Used with the slot indices reported by
    /// [`SliderChanges`](crate::slider::SliderChanges).
    #[must_use]
    pub fn cell_at(&self, idx: u32) -> Option<&CardCell<C>> {
        self.cells.get(idx as usize)
    }

    /// Iterates over live cells with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &CardCell<C>)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.live[*idx])
            .map(|(idx, cell)| {
                let id = CellId {
                    idx: u32::try_from(idx).unwrap_or(u32::MAX),
                    generation: self.generation[idx],
                };
                (id, cell)
            })
    }

    // -- Style --

    /// Style applied to every cell.
    #[must_use]
    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    /// Applies `style` to every cell, live or pooled.
    pub fn set_style(&mut self, style: CardStyle) {
        self.style = style;
        for cell in &mut self.cells {
            cell.set_style(style);
        }
    }

    fn validate(&self, id: CellId) {
        assert!(
            self.is_alive(id),
            "stale CellId: {id:?} (current gen: {})",
            self.generation
                .get(id.idx as usize)
                .copied()
                .unwrap_or(u32::MAX)
        );
    }
}
