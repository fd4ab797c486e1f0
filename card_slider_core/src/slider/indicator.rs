// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page indicator state.

use kurbo::{Point, Rect, Vec2};

use crate::color::Color;

/// Height of the indicator strip.
pub const INDICATOR_HEIGHT: f64 = 20.0;

/// Which way an indicator tap moves the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorStep {
    /// The left half (up to and including the center line).
    Previous,
    /// The right half.
    Next,
}

/// State of the dot-style page indicator pinned to the slider's bottom edge.
///
/// Drawing is the host's concern; this tracks page count, current page,
/// tints and the frame used for tap hit-testing.
#[derive(Clone, Debug, PartialEq)]
pub struct PageIndicator {
    number_of_pages: usize,
    current_page: usize,
    tint_color: Color,
    current_tint_color: Color,
    position: Vec2,
    frame: Rect,
}

impl Default for PageIndicator {
    fn default() -> Self {
        Self {
            number_of_pages: 0,
            current_page: 0,
            tint_color: Color::GRAY,
            current_tint_color: Color::RED,
            position: Vec2::ZERO,
            frame: Rect::ZERO,
        }
    }
}

impl PageIndicator {
    /// Creates an indicator laid out in `bounds`.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        let mut indicator = Self::default();
        indicator.layout(bounds);
        indicator
    }

    /// Number of pages (dots).
    #[must_use]
    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    /// Sets the page count, clamping the current page into range.
    pub fn set_number_of_pages(&mut self, pages: usize) {
        self.number_of_pages = pages;
        self.current_page = self.current_page.min(pages.saturating_sub(1));
    }

    /// The highlighted page.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Sets the highlighted page, clamped to the page count.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.min(self.number_of_pages.saturating_sub(1));
    }

    /// Tint of the inactive dots.
    #[must_use]
    pub fn tint_color(&self) -> Color {
        self.tint_color
    }

    /// Sets the tint of the inactive dots.
    pub fn set_tint_color(&mut self, color: Color) {
        self.tint_color = color;
    }

    /// Tint of the current page's dot.
    #[must_use]
    pub fn current_tint_color(&self) -> Color {
        self.current_tint_color
    }

    /// Sets the tint of the current page's dot.
    pub fn set_current_tint_color(&mut self, color: Color) {
        self.current_tint_color = color;
    }

    /// Offset from the default placement.
    ///
    /// `x` shifts the strip horizontally (0 is centered); `y` lifts it from
    /// the bottom edge (0 is flush with the bottom).
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Sets the offset and re-derives the frame within `bounds`.
    pub fn set_position(&mut self, position: Vec2, bounds: Rect) {
        self.position = position;
        self.layout(bounds);
    }

    /// Frame in slider coordinates.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Re-derives the frame for slider `bounds`.
    pub fn layout(&mut self, bounds: Rect) {
        let Vec2 { x, y } = self.position;
        self.frame = Rect::new(
            bounds.x0 + x,
            bounds.y1 - y - INDICATOR_HEIGHT,
            bounds.x1 + x,
            bounds.y1 - y,
        );
    }

    /// Classifies a tap, or `None` when `point` misses the indicator.
    #[must_use]
    pub fn hit(&self, point: Point) -> Option<IndicatorStep> {
        if !self.frame.contains(point) {
            return None;
        }
        if point.x <= self.frame.center().x {
            Some(IndicatorStep::Previous)
        } else {
            Some(IndicatorStep::Next)
        }
    }

    /// Page a tap step lands on from `from`, staying within the page range.
    #[must_use]
    pub fn step(&self, from: usize, step: IndicatorStep) -> usize {
        match step {
            IndicatorStep::Previous => from.saturating_sub(1),
            IndicatorStep::Next => (from + 1).min(self.number_of_pages.saturating_sub(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 320.0, 400.0)
    }

    #[test]
    fn frame_hugs_bottom_edge() {
        let indicator = PageIndicator::new(bounds());
        assert_eq!(indicator.frame(), Rect::new(0.0, 380.0, 320.0, 400.0));
    }

    #[test]
    fn position_offsets_frame() {
        let mut indicator = PageIndicator::new(bounds());
        indicator.set_position(Vec2::new(-10.0, 50.0), bounds());
        assert_eq!(indicator.frame(), Rect::new(-10.0, 330.0, 310.0, 350.0));
    }

    #[test]
    fn center_line_counts_as_left_half() {
        let indicator = PageIndicator::new(bounds());
        assert_eq!(
            indicator.hit(Point::new(160.0, 390.0)),
            Some(IndicatorStep::Previous)
        );
        assert_eq!(
            indicator.hit(Point::new(160.5, 390.0)),
            Some(IndicatorStep::Next)
        );
        assert_eq!(indicator.hit(Point::new(160.0, 100.0)), None);
    }

    #[test]
    fn steps_stay_in_range() {
        let mut indicator = PageIndicator::new(bounds());
        indicator.set_number_of_pages(10);
        assert_eq!(indicator.step(4, IndicatorStep::Previous), 3);
        assert_eq!(indicator.step(4, IndicatorStep::Next), 5);
        assert_eq!(indicator.step(0, IndicatorStep::Previous), 0);
        assert_eq!(indicator.step(9, IndicatorStep::Next), 9);
    }

    #[test]
    fn page_count_clamps_current_page() {
        let mut indicator = PageIndicator::new(bounds());
        indicator.set_number_of_pages(10);
        indicator.set_current_page(8);
        indicator.set_number_of_pages(4);
        assert_eq!(indicator.current_page(), 3);
        indicator.set_current_page(99);
        assert_eq!(indicator.current_page(), 3);
    }

    #[test]
    fn default_tints() {
        let indicator = PageIndicator::default();
        assert_eq!(indicator.tint_color(), Color::GRAY);
        assert_eq!(indicator.current_tint_color(), Color::RED);
    }
}
