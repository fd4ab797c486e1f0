// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card presentation model.
//!
//! A *cell* is one pooled card view. Each cell has:
//!
//! - An identity ([`CellId`]): a generational handle that becomes stale when
//!   the cell is released back to the [`CellPool`], so a slider never keeps
//!   a usable reference to an evicted cell.
//! - **Inputs** from layout: bounds, zoom progress and shade progress
//!   (see [`CardCell::apply_attributes`]).
//! - **Derived state**: content scale and frame, shade overlay alpha, shadow
//!   opacity, rounded clip mask and a cached shadow path.
//! - A press [`HighlightFade`] sampled against [`HostTime`](crate::time::HostTime).
//!
//! Static appearance lives in [`CardStyle`].

mod cell;
mod highlight;
mod id;
mod pool;
mod style;

pub use cell::CardCell;
pub use highlight::{HIGHLIGHT_ALPHA, HIGHLIGHT_FADE_NANOS, HighlightFade};
pub use id::CellId;
pub use pool::{CellPool, Dequeued};
pub use style::{CardStyle, ShadowStyle};
