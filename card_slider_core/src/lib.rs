// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paging layout engine and card presentation model for a parallax card
//! slider.
//!
//! `card_slider_core` computes everything a horizontally paging stack of
//! cards needs to be drawn: per-card frames, zoom, shade, shadow and alpha as
//! continuous functions of the scroll offset, plus a reusable cell pool kept
//! consistent with them. It is `no_std` compatible (with `alloc`) and leaves
//! drawing and scrolling physics to the host.
//!
//! # Architecture
//!
//! The crate is organized around a scroll-driven update loop:
//!
//! ```text
//!   Host scroll view
//!       │ did_scroll(offset)
//!       ▼
//!   CardsLayout ──► CardAttributes ──► CardCell (zoom, shade, shadow)
//!                                          │
//!                 ┌────────────────────────┘
//!                 ▼
//!   CardSlider::evaluate() ──► SliderChanges ──► Presenter::apply()
//!
//!   Indicator tap / selection ──► ScrollRequest ──► Host scroll view
//! ```
//!
//! **[`layout`]**: The paging layout engine. Depth, frames, visible range and
//! snapping are pure functions of the offset and configuration.
//!
//! **[`card`]**: Per-cell visual state (zoom, shade, shadow, rounded mask,
//! highlight) and the generational [`CellPool`](card::CellPool).
//!
//! **[`slider`]**: The [`CardSlider`](slider::CardSlider) container, its page
//! indicator, alpha fade and host capabilities.
//!
//! **[`dirty`]**: Per-cell dirty channels via `understory_dirty`, drained by
//! [`CardSlider::evaluate`](slider::CardSlider::evaluate).
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait hosts
//! implement to apply slider changes to native views.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! slider instrumentation, with a zero-overhead [`Tracer`](trace::Tracer).
//!
//! **[`time`]**: Host time types driving the highlight fade.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-cell
//!   visual state snapshots.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod card;
pub mod color;
pub mod dirty;
pub mod error;
pub mod layout;
pub mod slider;
pub mod time;
pub mod trace;
