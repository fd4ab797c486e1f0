// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider container.
//!
//! [`CardSlider`] owns the [`CardsLayout`](crate::layout::CardsLayout), the
//! cell pool and the [`PageIndicator`], and talks to the host through two
//! capabilities:
//!
//! - [`CardDataSource`]: item count and per-index content.
//! - [`CardSliderDelegate`]: selection and display notifications.
//!
//! The host drives it with scroll offsets and input events, drains
//! [`SliderChanges`] with [`CardSlider::evaluate`], and performs the
//! [`ScrollRequest`]s it leaves behind.

mod capability;
mod changes;
mod config;
mod indicator;
mod view;

pub use capability::{CardDataSource, CardSliderDelegate};
pub use changes::{ScrollRequest, SliderChanges};
pub use config::{DEFAULT_ITEM_HEIGHT, ItemWidth};
pub use indicator::{INDICATOR_HEIGHT, IndicatorStep, PageIndicator};
pub use view::CardSlider;
