// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paging layout engine.
//!
//! [`CardsLayout`] turns a horizontal scroll offset into per-card geometry.
//! Each card's *depth* is its distance, in pages, behind the front card:
//!
//! - **depth 0**: the front card, centered in the viewport.
//! - **depth in (0, visible)**: stacked behind, scaled down and stepped right.
//! - **depth in (-1, 0)**: the departing card, moving left with the content.
//!
//! Everything else is clipped. [`CardAttributes`] carries the frame plus the
//! zoom and shade progress the [`card`](crate::card) model consumes.

mod attributes;
mod engine;

pub use attributes::CardAttributes;
pub use engine::{CardsLayout, DEFAULT_SPACING, DEFAULT_VISIBLE_ITEMS, STACK_SCALE};
