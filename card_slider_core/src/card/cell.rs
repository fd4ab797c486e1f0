// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-cell visual state.

use kurbo::{Affine, BezPath, Rect, RoundedRect, Shape as _};

use crate::color::Color;
use crate::layout::CardAttributes;
use crate::time::{HostTime, Timebase};

use super::highlight::HighlightFade;
use super::style::{CardStyle, ShadowStyle};

/// Outset of the shade overlay beyond the cell bounds, so scaled edges never
/// show an unshaded sliver.
const SHADE_OUTSET: f64 = 2.0;

/// Flattening tolerance for the shadow path.
const SHADOW_PATH_TOLERANCE: f64 = 0.1;

/// Shadow path cached against the bounds and corner radius it was built for.
#[derive(Clone, Debug, Default)]
struct ShadowPathCache {
    key: Option<(Rect, f64)>,
    path: BezPath,
    builds: u32,
}

impl ShadowPathCache {
    /// Rebuilds the path if `bounds` or `radius` differ from the cached key.
    /// Returns whether a rebuild happened.
    fn ensure(&mut self, bounds: Rect, radius: f64) -> bool {
        if self.key == Some((bounds, radius)) {
            return false;
        }
        self.path = RoundedRect::from_rect(bounds, radius).to_path(SHADOW_PATH_TOLERANCE);
        self.key = Some((bounds, radius));
        self.builds += 1;
        true
    }

    fn invalidate(&mut self) {
        self.key = None;
    }
}

/// Visual controller for one pooled card cell.
///
/// A cell holds an item's content `C` and derives, from two progress
/// inputs, everything a host needs to draw the card:
///
/// - [`set_zoom_progress`](Self::set_zoom_progress) drives the content
///   scale (`max_zoom` at 0, 1 at 1), centered in the bounds.
/// - [`set_shade_opacity`](Self::set_shade_opacity) drives the white shade
///   overlay and, inversely, the drop shadow opacity.
///
/// Bounds changes recompute the rounded clip mask and shade frame; the
/// shadow path is rebuilt only when bounds or corner radius actually differ
/// from the ones it was built for.
#[derive(Debug)]
pub struct CardCell<C> {
    index: Option<usize>,
    content: Option<C>,
    style: CardStyle,
    timebase: Timebase,

    bounds: Rect,
    placement: Option<CardAttributes>,

    zoom_progress: f64,
    content_frame: Rect,
    content_alpha: f64,

    shade_progress: f64,
    shade_frame: Rect,

    mask: RoundedRect,
    shadow_path: ShadowPathCache,
    highlight: HighlightFade,
}

impl<C> CardCell<C> {
    /// Creates an empty cell with zero bounds.
    #[must_use]
    pub fn new(style: CardStyle, timebase: Timebase) -> Self {
        let mut cell = Self {
            index: None,
            content: None,
            style,
            timebase,
            bounds: Rect::ZERO,
            placement: None,
            zoom_progress: 1.0,
            content_frame: Rect::ZERO,
            content_alpha: 1.0,
            shade_progress: 0.0,
            shade_frame: Rect::ZERO,
            mask: RoundedRect::from_rect(Rect::ZERO, style.corner_radius),
            shadow_path: ShadowPathCache::default(),
            highlight: HighlightFade::IDLE,
        };
        cell.update();
        cell
    }

    // -- Content --

    /// Index of the item currently shown, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The item content currently shown, if any.
    #[must_use]
    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    /// Mutable access to the item content.
    pub fn content_mut(&mut self) -> Option<&mut C> {
        self.content.as_mut()
    }

    /// Installs `content` for `index`, returning the evicted previous content.
    ///
    /// All derived state is recomputed for the new content.
    pub fn set_content(&mut self, index: usize, content: C) -> Option<C> {
        let evicted = self.content.replace(content);
        self.index = Some(index);
        self.update();
        evicted
    }

    /// Removes and returns the content, leaving the cell empty.
    pub fn take_content(&mut self) -> Option<(usize, C)> {
        let index = self.index.take();
        let content = self.content.take();
        index.zip(content)
    }

    /// Resets transient state before the cell is handed new content.
    ///
    /// Shade progress returns to 0 and the highlight is cleared, so recycled
    /// cells never show the shading of their previous position.
    pub fn prepare_for_reuse(&mut self) {
        self.clear_highlight();
        self.placement = None;
        self.set_shade_opacity(0.0);
    }

    // -- Style --

    /// Returns the cell style.
    #[must_use]
    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    /// Replaces the style and recomputes mask, shade and shadow.
    pub fn set_style(&mut self, style: CardStyle) {
        if style.corner_radius != self.style.corner_radius {
            self.shadow_path.invalidate();
        }
        self.style = style;
        self.update();
    }

    // -- Geometry --

    /// Cell bounds (cell-local coordinates).
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Updates the bounds, returning whether they changed.
    ///
    /// Unchanged bounds are a no-op: no mask or shadow work happens.
    pub fn set_bounds(&mut self, bounds: Rect) -> bool {
        if bounds == self.bounds {
            return false;
        }
        self.bounds = bounds;
        self.update();
        true
    }

    /// Layout placement last applied with [`apply_attributes`](Self::apply_attributes).
    #[must_use]
    pub fn placement(&self) -> Option<&CardAttributes> {
        self.placement.as_ref()
    }

    /// Applies layout output: bounds from the unscaled size, then zoom and
    /// shade progress.
    pub fn apply_attributes(&mut self, attributes: &CardAttributes) {
        self.set_bounds(attributes.size.to_rect());
        self.placement = Some(*attributes);
        self.set_zoom_progress(attributes.zoom_progress);
        self.set_shade_opacity(attributes.shade_progress);
    }

    // -- Zoom --

    /// Sets zoom progress (clamped to `[0, 1]`) and re-centers the content.
    pub fn set_zoom_progress(&mut self, progress: f64) {
        self.zoom_progress = clamp_unit(progress);
        self.update_content_frame();
    }

    /// Current zoom progress.
    #[must_use]
    pub fn zoom_progress(&self) -> f64 {
        self.zoom_progress
    }

    /// Content scale: `max_zoom` at progress 0, 1 at progress 1.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        1.0 + (self.style.max_zoom - 1.0) * (1.0 - self.zoom_progress)
    }

    /// Frame of the content within the cell, scaled around the bounds center.
    #[must_use]
    pub fn content_frame(&self) -> Rect {
        self.content_frame
    }

    /// Uniform scale of the content about the bounds center.
    #[must_use]
    pub fn content_transform(&self) -> Affine {
        let center = self.bounds.center().to_vec2();
        Affine::translate(center) * Affine::scale(self.zoom()) * Affine::translate(-center)
    }

    /// Content alpha set by the slider's alpha fade.
    #[must_use]
    pub fn content_alpha(&self) -> f64 {
        self.content_alpha
    }

    /// Sets the content alpha (clamped to `[0, 1]`).
    pub fn set_content_alpha(&mut self, alpha: f64) {
        self.content_alpha = clamp_unit(alpha);
    }

    // -- Shade and shadow --

    /// Sets shade progress (clamped to `[0, 1]`).
    ///
    /// The shade overlay alpha follows `progress`; the shadow opacity is
    /// `configured * (1 - progress)`.
    pub fn set_shade_opacity(&mut self, progress: f64) {
        self.shade_progress = clamp_unit(progress);
        self.update_shade();
        self.update_shadow();
    }

    /// Current shade progress.
    #[must_use]
    pub fn shade_progress(&self) -> f64 {
        self.shade_progress
    }

    /// Alpha of the white shade overlay.
    #[must_use]
    pub fn shade_alpha(&self) -> f64 {
        self.shade_progress
    }

    /// Color of the shade overlay.
    #[must_use]
    pub fn shade_color(&self) -> Color {
        Color::WHITE
    }

    /// Frame of the shade overlay (bounds outset by two points).
    #[must_use]
    pub fn shade_frame(&self) -> Rect {
        self.shade_frame
    }

    /// Effective shadow opacity.
    #[must_use]
    pub fn shadow_opacity(&self) -> f64 {
        self.style.shadow.opacity * (1.0 - self.shade_progress)
    }

    /// Shadow color, radius and offset.
    #[must_use]
    pub fn shadow_style(&self) -> &ShadowStyle {
        &self.style.shadow
    }

    /// Cached shadow path for the current bounds.
    #[must_use]
    pub fn shadow_path(&self) -> &BezPath {
        &self.shadow_path.path
    }

    /// How many times the shadow path has been built.
    #[must_use]
    pub fn shadow_path_builds(&self) -> u32 {
        self.shadow_path.builds
    }

    /// Rounded clip for the content.
    #[must_use]
    pub fn mask(&self) -> RoundedRect {
        self.mask
    }

    // -- Highlight --

    /// Presses or releases the cell at `now`.
    pub fn set_highlighted(&mut self, highlighted: bool, now: HostTime) {
        self.highlight = if highlighted {
            self.highlight.press(now, self.timebase)
        } else {
            self.highlight.release()
        };
    }

    /// Drops the highlight without a press/release pair.
    pub fn clear_highlight(&mut self) {
        self.highlight = self.highlight.release();
    }

    /// Whether the cell is pressed.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlight.target() > 0.0
    }

    /// Black highlight overlay alpha at `now`.
    #[must_use]
    pub fn highlight_alpha(&self, now: HostTime) -> f64 {
        self.highlight.alpha_at(now)
    }

    /// Frame of the highlight overlay.
    #[must_use]
    pub fn highlight_frame(&self) -> Rect {
        self.bounds
    }

    // -- Internal helpers --

    fn update(&mut self) {
        self.update_content_frame();
        self.update_shade();
        self.update_mask();
        self.update_shadow();
    }

    fn update_content_frame(&mut self) {
        self.content_frame =
            Rect::from_center_size(self.bounds.center(), self.bounds.size() * self.zoom());
    }

    fn update_shade(&mut self) {
        self.shade_frame = self.bounds.inflate(SHADE_OUTSET, SHADE_OUTSET);
    }

    fn update_mask(&mut self) {
        self.mask = RoundedRect::from_rect(self.bounds, self.style.corner_radius);
    }

    fn update_shadow(&mut self) {
        let radius = self.style.corner_radius;
        self.shadow_path.ensure(self.bounds, radius);
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Shape as _, Size};

    use super::*;

    fn cell() -> CardCell<&'static str> {
        let mut cell = CardCell::new(CardStyle::default(), Timebase::NANOS);
        cell.set_bounds(Size::new(200.0, 100.0).to_rect());
        cell
    }

    #[test]
    fn zoom_spans_max_zoom_to_one() {
        let mut cell = cell();
        cell.set_zoom_progress(0.0);
        assert!((cell.zoom() - 1.3).abs() < 1e-12);
        cell.set_zoom_progress(1.0);
        assert_eq!(cell.zoom(), 1.0);

        let mut previous = f64::INFINITY;
        for step in 0..=10 {
            cell.set_zoom_progress(f64::from(step) / 10.0);
            assert!(cell.zoom() <= previous, "zoom must not increase");
            previous = cell.zoom();
        }
    }

    #[test]
    fn zoom_progress_is_clamped() {
        let mut cell = cell();
        cell.set_zoom_progress(4.0);
        assert_eq!(cell.zoom_progress(), 1.0);
        cell.set_zoom_progress(-1.0);
        assert_eq!(cell.zoom_progress(), 0.0);
        cell.set_zoom_progress(f64::NAN);
        assert_eq!(cell.zoom_progress(), 0.0);
    }

    #[test]
    fn zoomed_content_stays_centered() {
        let mut cell = cell();
        cell.set_zoom_progress(0.0);
        let frame = cell.content_frame();
        assert_eq!(frame.center(), cell.bounds().center());
        assert!((frame.width() - 260.0).abs() < 1e-9);
        let mapped = cell.content_transform().transform_rect_bbox(cell.bounds());
        assert!((mapped.x0 - frame.x0).abs() < 1e-9);
    }

    #[test]
    fn shadow_fades_as_shade_grows() {
        let mut cell = cell();
        cell.set_shade_opacity(0.0);
        assert_eq!(cell.shade_alpha(), 0.0);
        assert!((cell.shadow_opacity() - 0.3).abs() < 1e-12);

        cell.set_shade_opacity(0.25);
        assert!((cell.shadow_opacity() - 0.3 * 0.75).abs() < 1e-12);

        cell.set_shade_opacity(1.0);
        assert_eq!(cell.shade_alpha(), 1.0);
        assert_eq!(cell.shadow_opacity(), 0.0);
    }

    #[test]
    fn shade_frame_is_outset() {
        let cell = cell();
        assert_eq!(cell.shade_frame(), Rect::new(-2.0, -2.0, 202.0, 102.0));
    }

    #[test]
    fn shadow_path_built_once_per_bounds() {
        let mut cell = cell();
        let builds = cell.shadow_path_builds();
        for step in 0..20 {
            cell.set_shade_opacity(f64::from(step) / 20.0);
            cell.set_bounds(Size::new(200.0, 100.0).to_rect());
        }
        assert_eq!(cell.shadow_path_builds(), builds, "opacity must not rebuild");

        cell.set_bounds(Size::new(100.0, 200.0).to_rect());
        assert_eq!(cell.shadow_path_builds(), builds + 1);
        assert_eq!(cell.shadow_path().bounding_box(), Rect::new(0.0, 0.0, 100.0, 200.0));
    }

    #[test]
    fn corner_radius_change_rebuilds_mask_and_shadow() {
        let mut cell = cell();
        let builds = cell.shadow_path_builds();
        let style = CardStyle {
            corner_radius: 24.0,
            ..CardStyle::default()
        };
        cell.set_style(style);
        assert_eq!(cell.shadow_path_builds(), builds + 1);
        assert_eq!(cell.mask().radii().top_left, 24.0);
    }

    #[test]
    fn reuse_resets_shade_before_new_content() {
        let mut cell = cell();
        cell.set_content(3, "old");
        cell.set_shade_opacity(0.8);
        cell.set_highlighted(true, HostTime(0));

        cell.prepare_for_reuse();
        assert_eq!(cell.shade_progress(), 0.0, "reset before reassignment");
        assert!(!cell.is_highlighted());

        let evicted = cell.set_content(9, "new");
        assert_eq!(evicted, Some("old"));
        assert_eq!(cell.index(), Some(9));
        assert_eq!(cell.content(), Some(&"new"));
        assert_eq!(cell.shade_progress(), 0.0);
    }

    #[test]
    fn highlight_samples_over_time() {
        let mut cell = cell();
        cell.set_highlighted(true, HostTime(0));
        assert!(cell.is_highlighted());
        assert_eq!(cell.highlight_alpha(HostTime(300_000_000)), 0.2);
        cell.set_highlighted(false, HostTime(310_000_000));
        assert_eq!(cell.highlight_alpha(HostTime(310_000_000)), 0.0);
    }

    #[test]
    fn take_content_empties_cell() {
        let mut cell = cell();
        cell.set_content(1, "a");
        assert_eq!(cell.take_content(), Some((1, "a")));
        assert_eq!(cell.take_content(), None);
        assert_eq!(cell.index(), None);
    }
}
