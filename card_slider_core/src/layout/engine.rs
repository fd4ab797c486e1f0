// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paging stack layout.

use alloc::vec::Vec;
use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

use super::attributes::CardAttributes;

/// Default horizontal step between stacked cards, in points.
pub const DEFAULT_SPACING: f64 = 40.0;

/// Default number of cards visible in the stack (front card included).
pub const DEFAULT_VISIBLE_ITEMS: usize = 3;

/// Scale factor applied per depth step to stacked cards.
pub const STACK_SCALE: f64 = 0.9;

/// Horizontal paging layout that stacks upcoming cards behind the front one.
///
/// Pages are one viewport wide. The card at depth 0 sits centered in the
/// viewport; cards behind it shrink by [`STACK_SCALE`] and shift right by
/// `spacing` per depth step, and the card being scrolled past moves off to
/// the left with the content. Only cards with depth in
/// `(-1, visible_items_count)` are laid out, so the number of live cells is
/// bounded by `visible_items_count + 1` whatever the item count.
///
/// Every query is a pure function of `(index, offset, configuration)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CardsLayout {
    viewport: Size,
    item_size: Size,
    spacing: f64,
    visible_items_count: usize,
    item_count: usize,
}

impl CardsLayout {
    /// Creates a layout for the given viewport with no items.
    ///
    /// The item size starts out equal to the viewport.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            item_size: viewport,
            spacing: DEFAULT_SPACING,
            visible_items_count: DEFAULT_VISIBLE_ITEMS,
            item_count: 0,
        }
    }

    // -- Configuration --

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size (and with it the page width).
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Returns the unscaled item size.
    #[must_use]
    pub fn item_size(&self) -> Size {
        self.item_size
    }

    /// Sets the unscaled item size.
    pub fn set_item_size(&mut self, item_size: Size) {
        self.item_size = item_size;
    }

    /// Returns the stacking step in points.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Sets the stacking step in points.
    pub fn set_spacing(&mut self, spacing: f64) {
        self.spacing = spacing;
    }

    /// Returns how many cards the stack shows.
    #[must_use]
    pub fn visible_items_count(&self) -> usize {
        self.visible_items_count
    }

    /// Sets how many cards the stack shows. Zero is treated as one.
    pub fn set_visible_items_count(&mut self, count: usize) {
        self.visible_items_count = count.max(1);
    }

    /// Returns the number of items being laid out.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Sets the number of items being laid out.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
    }

    // -- Paging --

    /// Width of one page (the viewport width).
    #[inline]
    #[must_use]
    pub fn page_width(&self) -> f64 {
        self.viewport.width
    }

    /// Total scrollable content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let width = self.page_width() * self.item_count as f64;
        Size::new(width, self.viewport.height)
    }

    /// Largest valid resting offset.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.page_width() * self.item_count.saturating_sub(1) as f64
    }

    /// Clamps `offset` into `[0, max_offset]`.
    #[must_use]
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Resting offset that brings `index` to the front.
    ///
    /// `index` is clamped to the last item.
    #[must_use]
    pub fn offset_for_index(&self, index: usize) -> f64 {
        let index = index.min(self.item_count.saturating_sub(1));
        index as f64 * self.page_width()
    }

    /// Page nearest to `offset`, rounding halves away from zero and clamping
    /// to the valid item range.
    #[must_use]
    pub fn nearest_index(&self, offset: f64) -> usize {
        let w = self.page_width();
        if self.item_count == 0 || w <= 0.0 {
            return 0;
        }
        self.clamp_page((offset / w).round())
    }

    /// Snaps a proposed resting offset to a page boundary.
    ///
    /// With zero velocity the nearest page wins. A positive velocity (moving
    /// toward later items) snaps to the next page boundary at or after the
    /// proposal, a negative one to the boundary at or before it.
    #[must_use]
    pub fn target_offset(&self, proposed: f64, velocity: f64) -> f64 {
        let w = self.page_width();
        if self.item_count == 0 || w <= 0.0 {
            return 0.0;
        }
        let page = proposed / w;
        let target = if velocity > 0.0 {
            page.ceil()
        } else if velocity < 0.0 {
            page.floor()
        } else {
            page.round()
        };
        self.clamp_page(target) as f64 * w
    }

    // -- Geometry --

    /// Depth of `index` at `offset`: `index - offset / page_width`.
    ///
    /// A degenerate (zero-width) page reports the index itself.
    #[must_use]
    pub fn depth(&self, index: usize, offset: f64) -> f64 {
        let w = self.page_width();
        if w <= 0.0 {
            return index as f64;
        }
        index as f64 - offset / w
    }

    /// Frame of `index` at `offset`, in content coordinates.
    ///
    /// Defined for every index and offset; use [`attributes`](Self::attributes)
    /// to apply depth clipping.
    #[must_use]
    pub fn frame(&self, index: usize, offset: f64) -> Rect {
        let depth = self.depth(index, offset);
        let (center_x, scale) = self.placement(depth, offset);
        Rect::from_center_size(
            Point::new(center_x, self.viewport.height * 0.5),
            self.item_size * scale,
        )
    }

    /// Indices materialized at `offset`: depth in `(-1, visible_items_count)`,
    /// clamped to the item range.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "page positions are clamped to the item range before use"
    )]
    pub fn visible_range(&self, offset: f64) -> Range<usize> {
        let w = self.page_width();
        if self.item_count == 0 || w <= 0.0 || !offset.is_finite() {
            return 0..0;
        }
        let position = offset / w;
        let first = position.floor();
        let last = (position + self.visible_items_count as f64).ceil();
        let start = if first <= 0.0 {
            0
        } else {
            (first as usize).min(self.item_count)
        };
        let end = if last <= 0.0 {
            0
        } else {
            (last as usize).min(self.item_count)
        };
        start..end.max(start)
    }

    /// Layout attributes for `index` at `offset`, or `None` when the card is
    /// clipped or out of the item range.
    #[must_use]
    pub fn attributes(&self, index: usize, offset: f64) -> Option<CardAttributes> {
        if !self.visible_range(offset).contains(&index) {
            return None;
        }
        let depth = self.depth(index, offset);
        let visible = self.visible_items_count as f64;
        let (center_x, scale) = self.placement(depth, offset);
        let frame = Rect::from_center_size(
            Point::new(center_x, self.viewport.height * 0.5),
            self.item_size * scale,
        );

        let (zoom_progress, shade_progress) = if depth < 0.0 {
            (1.0 + depth, 0.0)
        } else {
            (1.0 - depth / visible, depth / visible)
        };
        // The deepest card fades in over its last depth step.
        let alpha = if depth > visible - 1.0 {
            visible - depth
        } else {
            1.0
        };

        Some(CardAttributes {
            index,
            frame,
            size: self.item_size,
            scale,
            depth,
            z_index: u32::try_from(self.item_count - index).unwrap_or(u32::MAX),
            alpha: alpha.clamp(0.0, 1.0),
            zoom_progress: zoom_progress.clamp(0.0, 1.0),
            shade_progress: shade_progress.clamp(0.0, 1.0),
        })
    }

    /// Attributes for every materialized index at `offset`, front card first.
    #[must_use]
    pub fn visible_attributes(&self, offset: f64) -> Vec<CardAttributes> {
        self.visible_range(offset)
            .filter_map(|index| self.attributes(index, offset))
            .collect()
    }

    // -- Internal helpers --

    /// Horizontal center and stacking scale for a card at `depth`.
    fn placement(&self, depth: f64, offset: f64) -> (f64, f64) {
        let w = self.page_width();
        let front_center = offset + w * 0.5;
        if depth < 0.0 {
            // Scrolls away with the content: stays at its own page center.
            (front_center + depth * w, 1.0)
        } else {
            (front_center + self.spacing * depth, STACK_SCALE.powf(depth))
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "page is clamped to the item range before the cast"
    )]
    fn clamp_page(&self, page: f64) -> usize {
        let last = self.item_count.saturating_sub(1);
        if page.is_nan() || page <= 0.0 {
            0
        } else if page >= last as f64 {
            last
        } else {
            page as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(count: usize) -> CardsLayout {
        let mut layout = CardsLayout::new(Size::new(400.0, 300.0));
        layout.set_item_size(Size::new(300.0, 200.0));
        layout.set_item_count(count);
        layout
    }

    #[test]
    fn front_card_is_centered_in_viewport() {
        let layout = layout(10);
        let frame = layout.frame(2, 800.0);
        assert_eq!(frame, Rect::new(850.0, 50.0, 1150.0, 250.0));
        assert_eq!(layout.depth(2, 800.0), 0.0);
    }

    #[test]
    fn frame_is_continuous_across_depth_zero() {
        let layout = layout(10);
        let at = 800.0;
        let before = layout.frame(2, at - 1e-6);
        let after = layout.frame(2, at + 1e-6);
        assert!((before.x0 - after.x0).abs() < 1e-3, "{before:?} vs {after:?}");
        assert!((before.width() - after.width()).abs() < 1e-3);
    }

    #[test]
    fn frame_moves_monotonically_with_offset() {
        let layout = layout(10);
        let mut previous = layout.frame(3, 0.0).x0;
        let mut offset = 0.0;
        while offset <= 2000.0 {
            let x = layout.frame(3, offset).x0;
            assert!(x + 1e-9 >= previous, "x went backwards at offset {offset}");
            previous = x;
            offset += 7.5;
        }
    }

    #[test]
    fn stacked_cards_shrink_and_step_right() {
        let layout = layout(10);
        let front = layout.frame(0, 0.0);
        let behind = layout.frame(1, 0.0);
        assert!(behind.width() < front.width());
        assert_eq!(behind.center().x - front.center().x, DEFAULT_SPACING);
    }

    #[test]
    fn visible_range_is_bounded() {
        let layout = layout(100);
        assert_eq!(layout.visible_range(0.0), 0..3);
        assert_eq!(layout.visible_range(920.0), 2..6);
        for step in 0..200 {
            let range = layout.visible_range(f64::from(step) * 37.0);
            assert!(range.len() <= DEFAULT_VISIBLE_ITEMS + 1, "{range:?}");
        }
    }

    #[test]
    fn visible_range_clamps_to_items() {
        let layout = layout(4);
        assert_eq!(layout.visible_range(-250.0), 0..3);
        assert_eq!(layout.visible_range(1200.0), 3..4);
        assert_eq!(layout.visible_range(10_000.0), 4..4);
        assert_eq!(CardsLayout::new(Size::ZERO).visible_range(0.0), 0..0);
    }

    #[test]
    fn clipped_cards_have_no_attributes() {
        let layout = layout(10);
        assert!(layout.attributes(3, 0.0).is_none(), "depth 3 is clipped");
        assert!(layout.attributes(0, 400.0).is_none(), "depth -1 is gone");
        assert!(layout.attributes(42, 0.0).is_none(), "out of range");
    }

    #[test]
    fn attribute_progress_follows_depth() {
        let layout = layout(10);
        let front = layout.attributes(0, 0.0).unwrap();
        assert_eq!(front.zoom_progress, 1.0);
        assert_eq!(front.shade_progress, 0.0);
        assert_eq!(front.alpha, 1.0);

        let back = layout.attributes(2, 0.0).unwrap();
        assert!((back.shade_progress - 2.0 / 3.0).abs() < 1e-12);
        assert!((back.zoom_progress - 1.0 / 3.0).abs() < 1e-12);

        let leaving = layout.attributes(0, 100.0).unwrap();
        assert_eq!(leaving.zoom_progress, 0.75);
        assert_eq!(leaving.shade_progress, 0.0);

        let entering = layout.attributes(3, 100.0).unwrap();
        assert!((entering.alpha - 0.25).abs() < 1e-12, "{entering:?}");
    }

    #[test]
    fn front_card_draws_on_top() {
        let layout = layout(5);
        let a = layout.attributes(1, 400.0).unwrap();
        let b = layout.attributes(2, 400.0).unwrap();
        assert!(a.z_index > b.z_index);
    }

    #[test]
    fn nearest_index_rounds_half_away_from_zero() {
        let layout = layout(10);
        assert_eq!(layout.nearest_index(600.0), 2, "1.5 pages rounds up");
        assert_eq!(layout.nearest_index(599.0), 1);
        assert_eq!(layout.nearest_index(-300.0), 0, "clamped below");
        assert_eq!(layout.nearest_index(99_999.0), 9, "clamped above");
    }

    #[test]
    fn offsets_for_indices_clamp() {
        let layout = layout(3);
        assert_eq!(layout.offset_for_index(1), 400.0);
        assert_eq!(layout.offset_for_index(7), 800.0);
        assert_eq!(layout.content_size(), Size::new(1200.0, 300.0));
        assert_eq!(layout.clamp_offset(5000.0), 800.0);
    }

    #[test]
    fn target_offset_follows_velocity() {
        let layout = layout(10);
        assert_eq!(layout.target_offset(450.0, 0.0), 400.0);
        assert_eq!(layout.target_offset(450.0, 1.0), 800.0);
        assert_eq!(layout.target_offset(750.0, -1.0), 400.0);
        assert_eq!(layout.target_offset(-80.0, -3.0), 0.0);
    }
}
