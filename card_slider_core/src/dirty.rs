// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! [`CardSlider`](crate::slider::CardSlider) keys an
//! [`understory_dirty`] tracker by pool slot index. Each channel is an
//! independent category of per-cell change. Cells have no dependency edges
//! between them, so every channel is local-only: only the explicitly marked
//! slot appears in the drain output.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`CardSlider::evaluate`](crate::slider::CardSlider::evaluate) call drains
//! all channels and surfaces the results as
//! [`SliderChanges`](crate::slider::SliderChanges), which hosts
//! [consume](crate::backend::Presenter::apply) to apply incremental updates.

use understory_dirty::Channel;

/// Frame, scale or z-order changed.
pub const GEOMETRY: Channel = Channel::new(0);

/// Zoom, shade, shadow or alpha changed.
pub const VISUAL: Channel = Channel::new(1);

/// Rounded clip or shadow path changed (bounds or corner radius).
pub const MASK: Channel = Channel::new(2);

/// The cell was handed different item content.
pub const CONTENT: Channel = Channel::new(3);

/// The highlight overlay started or stopped.
pub const HIGHLIGHT: Channel = Channel::new(4);
