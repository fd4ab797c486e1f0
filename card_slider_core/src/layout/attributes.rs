// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-card layout output.

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Geometry and depth-derived progress for one materialized card.
///
/// Produced by [`CardsLayout::attributes`](super::CardsLayout::attributes).
/// `frame` is in content coordinates and already includes the stacking
/// scale; `size` is the unscaled item size the cell uses as its bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardAttributes {
    /// Data index of the card.
    pub index: usize,
    /// Scaled frame in content coordinates.
    pub frame: Rect,
    /// Unscaled item size.
    pub size: Size,
    /// Uniform stacking scale applied to `size`.
    pub scale: f64,
    /// `index - offset / page_width`; 0 is the front card.
    pub depth: f64,
    /// Stacking order; larger draws on top.
    pub z_index: u32,
    /// Layout alpha (the last stacked card fades in as it enters).
    pub alpha: f64,
    /// Zoom progress for [`CardCell::set_zoom_progress`](crate::card::CardCell::set_zoom_progress).
    pub zoom_progress: f64,
    /// Shade progress for [`CardCell::set_shade_opacity`](crate::card::CardCell::set_shade_opacity).
    pub shade_progress: f64,
}

impl CardAttributes {
    /// Center of the card frame.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// Maps cell-local coordinates (origin at the top-left of the unscaled
    /// bounds) into content coordinates.
    #[must_use]
    pub fn transform(&self) -> Affine {
        let half = Vec2::new(self.size.width * 0.5, self.size.height * 0.5);
        Affine::translate(self.center().to_vec2())
            * Affine::scale(self.scale)
            * Affine::translate(-half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_maps_bounds_onto_frame() {
        let size = Size::new(200.0, 100.0);
        let frame = Rect::from_center_size(Point::new(500.0, 300.0), size * 0.5);
        let attrs = CardAttributes {
            index: 0,
            frame,
            size,
            scale: 0.5,
            depth: 0.0,
            z_index: 1,
            alpha: 1.0,
            zoom_progress: 1.0,
            shade_progress: 0.0,
        };
        let mapped = attrs.transform().transform_rect_bbox(size.to_rect());
        assert!((mapped.x0 - frame.x0).abs() < 1e-9, "{mapped:?} vs {frame:?}");
        assert!((mapped.y1 - frame.y1).abs() < 1e-9, "{mapped:?} vs {frame:?}");
    }
}
