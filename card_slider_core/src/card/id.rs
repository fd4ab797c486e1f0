// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell identity.

use core::fmt;

/// A handle to a cell in a [`CellPool`](super::CellPool).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after a cell is released and its slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl CellId {
    /// Returns the raw slot index.
    ///
    /// [`SliderChanges`](crate::slider::SliderChanges) reports slots by this
    /// index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellId({}@gen{})", self.idx, self.generation)
    }
}
