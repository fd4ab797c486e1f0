// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for card slider
//! diagnostics.
//!
//! This crate provides [`TraceSink`](card_slider_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from
//!   recorded bytes.
//!
//! Sinks are handed to the slider boxed. To read a recording back, share
//! the sink through `Rc<RefCell<_>>`, which also implements `TraceSink`.

pub mod chrome;
pub mod pretty;
pub mod recorder;
