// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! The slider has no clock of its own, so each event's sequence number is
//! used as its timestamp. Cell events are placed on a track per pool slot.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use card_slider_core::trace::{CellEvent, PageChangeSource};
use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Track for events that are not tied to a cell slot.
const SLIDER_TID: u32 = 0;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Scroll(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Scroll",
                    "cat": "Scroll",
                    "ts": e.seq,
                    "pid": 0,
                    "tid": SLIDER_TID,
                    "s": "t",
                    "args": {
                        "offset": e.offset,
                        "nearest_index": e.nearest_index,
                        "visible_start": e.visible_start,
                        "visible_end": e.visible_end,
                    }
                }));
            }
            RecordedEvent::PageChange(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "PageChange",
                    "cat": "Page",
                    "ts": e.seq,
                    "pid": 0,
                    "tid": SLIDER_TID,
                    "s": "g",
                    "args": {
                        "from": e.from,
                        "to": e.to,
                        "source": source_name(e.source),
                    }
                }));
            }
            RecordedEvent::CellMaterialized(e) => events.push(cell_event("Materialize", &e)),
            RecordedEvent::CellReused(e) => events.push(cell_event("Reuse", &e)),
            RecordedEvent::CellEvicted(e) => events.push(cell_event("Evict", &e)),
            RecordedEvent::Selection(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Selection",
                    "cat": "Input",
                    "ts": e.seq,
                    "pid": 0,
                    "tid": SLIDER_TID,
                    "s": "g",
                    "args": {
                        "index": e.index,
                        "scrolls": e.scrolls,
                    }
                }));
            }
            RecordedEvent::ScrollRequest(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "ScrollRequest",
                    "cat": "Scroll",
                    "ts": e.seq,
                    "pid": 0,
                    "tid": SLIDER_TID,
                    "s": "t",
                    "args": {
                        "index": e.index,
                        "offset": e.offset,
                        "animated": e.animated,
                    }
                }));
            }
            RecordedEvent::Reload(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Reload",
                    "cat": "Data",
                    "ts": e.seq,
                    "pid": 0,
                    "tid": SLIDER_TID,
                    "s": "g",
                    "args": {
                        "item_count": e.item_count,
                        "current_index": e.current_index,
                    }
                }));
            }
            RecordedEvent::Evaluate(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Evaluate",
                    "cat": "Frame",
                    "ts": e.seq,
                    "pid": 0,
                    "tid": SLIDER_TID,
                    "s": "t",
                    "args": {
                        "materialized": e.materialized,
                        "evicted": e.evicted,
                        "geometry": e.geometry,
                        "visuals": e.visuals,
                    }
                }));
            }
            RecordedEvent::CellVisualsCount { seq, count } => {
                events.push(json!({
                    "ph": "i",
                    "name": "CellVisuals",
                    "cat": "Rich",
                    "ts": seq,
                    "pid": 0,
                    "tid": SLIDER_TID,
                    "s": "p",
                    "args": {
                        "count": count,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn cell_event(name: &str, e: &CellEvent) -> Value {
    json!({
        "ph": "i",
        "name": name,
        "cat": "Cell",
        "ts": e.seq,
        "pid": 0,
        "tid": e.slot + 1,
        "s": "t",
        "args": {
            "slot": e.slot,
            "index": e.index,
        }
    })
}

fn source_name(source: PageChangeSource) -> &'static str {
    match source {
        PageChangeSource::Scroll => "scroll",
        PageChangeSource::Indicator => "indicator",
        PageChangeSource::Reload => "reload",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use card_slider_core::trace::{PageChangeEvent, ReloadEvent, TraceSink};

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_reload(&ReloadEvent {
            seq: 0,
            item_count: 10,
            current_index: 0,
        });
        rec.on_cell_materialized(&CellEvent {
            seq: 1,
            slot: 2,
            index: 2,
        });
        rec.on_page_change(&PageChangeEvent {
            seq: 2,
            from: 0,
            to: 1,
            source: PageChangeSource::Indicator,
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 3);

        assert_eq!(parsed[0]["name"], "Reload");
        assert_eq!(parsed[0]["args"]["item_count"], 10);

        // Cells get their own track.
        assert_eq!(parsed[1]["name"], "Materialize");
        assert_eq!(parsed[1]["tid"], 3);

        assert_eq!(parsed[2]["ts"], 2);
        assert_eq!(parsed[2]["args"]["source"], "indicator");
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
