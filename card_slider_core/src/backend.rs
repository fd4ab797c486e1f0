// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! The slider computes state; a host toolkit owns the actual views. A host
//! provides the following pieces:
//!
//! - **Scroll view**: reports content offsets through
//!   [`CardSlider::did_scroll`] and performs the programmatic scrolls the
//!   slider asks for via [`CardSlider::take_scroll_request`]. Paging snap can
//!   use [`CardsLayout::target_offset`](crate::layout::CardsLayout::target_offset).
//!
//! - **Input**: forwards taps to [`CardSlider::handle_tap`], card
//!   selections to [`CardSlider::select_item`] and touch down/up to
//!   [`CardSlider::set_highlighted`].
//!
//! - **Presenter**: implements the [`Presenter`] trait to apply slider
//!   changes to native views (frames, transforms, overlays, the indicator).
//!
//! [`CardSlider::did_scroll`]: crate::slider::CardSlider::did_scroll
//! [`CardSlider::take_scroll_request`]: crate::slider::CardSlider::take_scroll_request
//! [`CardSlider::handle_tap`]: crate::slider::CardSlider::handle_tap
//! [`CardSlider::select_item`]: crate::slider::CardSlider::select_item
//! [`CardSlider::set_highlighted`]: crate::slider::CardSlider::set_highlighted

use crate::slider::{CardSlider, SliderChanges};

/// Applies evaluated slider changes to a native view tree.
///
/// Evictions must be applied before materializations: a recycled slot is
/// listed in both within the same [`SliderChanges`].
///
/// # Event loop pseudocode
///
/// ```rust,ignore
/// fn on_scroll(offset: f64) {
///     slider.did_scroll(offset);
///
///     // Evaluate: drain dirty channels
///     let changes = slider.evaluate();
///
///     // Present: apply incremental changes to native views
///     presenter.apply(&slider, &changes);
///
///     // Indicator taps and selection may ask for a programmatic scroll
///     if let Some(request) = slider.take_scroll_request() {
///         scroll_view.set_content_offset(request.offset, request.animated);
///     }
/// }
///
/// impl Presenter<Item> for NativePresenter {
///     fn apply(&mut self, slider: &CardSlider<Item>, changes: &SliderChanges) {
///         // Detach first; a slot may be evicted and reused in one cycle.
///         for &slot in &changes.evicted {
///             self.views[slot].detach();
///         }
///         for &slot in &changes.materialized {
///             let cell = slider.cell_at(slot).unwrap();
///             self.views[slot].attach(cell.content().unwrap());
///         }
///         for &slot in &changes.geometry {
///             let cell = slider.cell_at(slot).unwrap();
///             self.views[slot].set_frame(cell.placement().unwrap().frame);
///         }
///     }
/// }
/// ```
pub trait Presenter<V> {
    /// Applies the given [`SliderChanges`] to the presentation tree, reading
    /// current cell state from `slider` as needed.
    fn apply(&mut self, slider: &CardSlider<V>, changes: &SliderChanges);
}
