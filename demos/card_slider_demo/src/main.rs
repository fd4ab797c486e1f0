// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless card slider host that exercises the tracing and diagnostics
//! pipeline.
//!
//! Drives a ten-card slider through a simulated drag, an indicator tap, and a
//! selection. Events go to both a
//! [`PrettyPrintSink`](card_slider_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](card_slider_debug::recorder::RecorderSink), and the
//! recording is exported as a Chrome trace JSON file.

use std::cell::RefCell;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::rc::Rc;

use card_slider_core::backend::Presenter;
use card_slider_core::color::Color;
use card_slider_core::slider::{
    CardDataSource, CardSlider, CardSliderDelegate, ItemWidth, SliderChanges,
};
use card_slider_core::time::HostTime;
use card_slider_core::trace::{
    CellEvent, CellVisual, EvaluateEvent, PageChangeEvent, ReloadEvent, ScrollEvent,
    ScrollRequestEvent, SelectionEvent, TraceSink,
};
use kurbo::{Point, Size};

use card_slider_debug::pretty::PrettyPrintSink;
use card_slider_debug::recorder::RecorderSink;

const ITEM_COUNT: usize = 10;
const VIEWPORT: Size = Size::new(375.0, 320.0);
/// Drag samples per page.
const STEPS_PER_PAGE: u32 = 6;

struct Titles;

impl CardDataSource<String> for Titles {
    fn number_of_items(&self) -> usize {
        ITEM_COUNT
    }

    fn item(&mut self, index: usize) -> String {
        format!("Card {}", index + 1)
    }
}

struct PrintDelegate;

impl CardSliderDelegate for PrintDelegate {
    fn item_selected(&mut self, index: usize) {
        println!("selected item {index}");
    }

    fn item_displayed(&mut self, index: usize) {
        println!("displaying item {index}");
    }
}

/// Sends every event to the console and to the recorder.
struct Fanout {
    pretty: PrettyPrintSink,
    recorder: Rc<RefCell<RecorderSink>>,
}

impl TraceSink for Fanout {
    fn on_scroll(&mut self, e: &ScrollEvent) {
        self.pretty.on_scroll(e);
        self.recorder.on_scroll(e);
    }

    fn on_page_change(&mut self, e: &PageChangeEvent) {
        self.pretty.on_page_change(e);
        self.recorder.on_page_change(e);
    }

    fn on_cell_materialized(&mut self, e: &CellEvent) {
        self.pretty.on_cell_materialized(e);
        self.recorder.on_cell_materialized(e);
    }

    fn on_cell_reused(&mut self, e: &CellEvent) {
        self.pretty.on_cell_reused(e);
        self.recorder.on_cell_reused(e);
    }

    fn on_cell_evicted(&mut self, e: &CellEvent) {
        self.pretty.on_cell_evicted(e);
        self.recorder.on_cell_evicted(e);
    }

    fn on_selection(&mut self, e: &SelectionEvent) {
        self.pretty.on_selection(e);
        self.recorder.on_selection(e);
    }

    fn on_scroll_request(&mut self, e: &ScrollRequestEvent) {
        self.pretty.on_scroll_request(e);
        self.recorder.on_scroll_request(e);
    }

    fn on_reload(&mut self, e: &ReloadEvent) {
        self.pretty.on_reload(e);
        self.recorder.on_reload(e);
    }

    fn on_evaluate(&mut self, e: &EvaluateEvent) {
        self.pretty.on_evaluate(e);
        self.recorder.on_evaluate(e);
    }

    fn on_cell_visuals(&mut self, seq: u64, visuals: &[CellVisual]) {
        self.pretty.on_cell_visuals(seq, visuals);
        self.recorder.on_cell_visuals(seq, visuals);
    }
}

/// Prints the front card after each evaluate.
#[derive(Default)]
struct ConsolePresenter {
    frames: u32,
}

impl Presenter<String> for ConsolePresenter {
    fn apply(&mut self, slider: &CardSlider<String>, changes: &SliderChanges) {
        self.frames += 1;
        if changes.geometry.is_empty() {
            return;
        }
        if let Some(cell) = slider.cell_for_index(slider.current_index()) {
            let title = cell.content().map_or("?", String::as_str);
            let frame = cell.placement().map(|p| p.frame).unwrap_or_default();
            println!(
                "frame {}: front={title} at ({:.1}, {:.1}) zoom={:.3} shade={:.2}",
                self.frames,
                frame.x0,
                frame.y0,
                cell.zoom(),
                cell.shade_alpha(),
            );
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let recorder = Rc::new(RefCell::new(RecorderSink::new()));

    let mut slider = CardSlider::new(VIEWPORT);
    slider.set_trace_sink(Some(Box::new(Fanout {
        pretty: PrettyPrintSink::new(Box::new(std::io::stdout())),
        recorder: recorder.clone(),
    })));
    slider.set_data_source(Some(Box::new(Titles)));
    slider.set_delegate(Some(Box::new(PrintDelegate)));

    slider.set_visible_items_count(3)?;
    slider.set_use_alpha_for_visible_cells(true);
    slider.set_page_indicator_tint_color(Color::GRAY);
    slider.set_current_page_indicator_tint_color(Color::RED);
    slider.set_page_indicator_position(0.0, 50.0)?;
    slider.set_item_height(200.0)?;
    slider.set_item_width(ItemWidth::Large)?;
    slider.reload_data();

    let mut presenter = ConsolePresenter::default();
    let changes = slider.evaluate();
    presenter.apply(&slider, &changes);

    // -- simulated drag across four pages -----------------------------------
    let page = slider.layout().page_width();
    for step in 1..=(4 * STEPS_PER_PAGE) {
        slider.did_scroll(f64::from(step) * page / f64::from(STEPS_PER_PAGE));
        let changes = slider.evaluate();
        presenter.apply(&slider, &changes);
    }

    // -- indicator tap on the left half steps back one page -----------------
    let indicator = slider.indicator().frame();
    let left = Point::new(indicator.x0 + indicator.width() / 4.0, indicator.center().y);
    if slider.handle_tap(left)
        && let Some(request) = slider.take_scroll_request()
    {
        slider.did_scroll(request.offset);
    }
    let changes = slider.evaluate();
    presenter.apply(&slider, &changes);

    // -- press and select a card behind the front one -----------------------
    let target = slider.current_index().saturating_sub(1);
    let pressed = slider.set_highlighted(target, true, HostTime(0));
    println!("pressed item {target}: {pressed}");
    slider.select_item(target);
    if let Some(request) = slider.take_scroll_request() {
        slider.did_scroll(request.offset);
    }
    let changes = slider.evaluate();
    presenter.apply(&slider, &changes);

    // -- export Chrome trace ------------------------------------------------
    let path = "card_slider_trace.json";
    let mut writer = BufWriter::new(File::create(path)?);
    card_slider_debug::chrome::export(recorder.borrow().as_bytes(), &mut writer)?;

    println!(
        "Wrote {path} ({} frames, front card {})",
        presenter.frames,
        slider.current_index()
    );
    Ok(())
}
