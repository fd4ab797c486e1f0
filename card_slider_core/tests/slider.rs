// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end slider behavior with a recording host.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use card_slider_core::backend::Presenter;
use card_slider_core::card::CardStyle;
use card_slider_core::error::SliderError;
use card_slider_core::slider::{
    CardDataSource, CardSlider, CardSliderDelegate, ItemWidth, ScrollRequest, SliderChanges,
};
use card_slider_core::time::HostTime;
use kurbo::{Point, Rect, Size};

const W: f64 = 400.0;

struct Items(usize);

impl CardDataSource<usize> for Items {
    fn number_of_items(&self) -> usize {
        self.0
    }

    fn item(&mut self, index: usize) -> usize {
        index * 10
    }
}

#[derive(Default)]
struct Notifications {
    selected: Vec<usize>,
    displayed: Vec<usize>,
}

impl CardSliderDelegate for Notifications {
    fn item_selected(&mut self, index: usize) {
        self.selected.push(index);
    }

    fn item_displayed(&mut self, index: usize) {
        self.displayed.push(index);
    }
}

#[derive(Default)]
struct RecordingPresenter {
    frames: Vec<(usize, Rect)>,
    evicted: usize,
}

impl Presenter<usize> for RecordingPresenter {
    fn apply(&mut self, slider: &CardSlider<usize>, changes: &SliderChanges) {
        for &slot in &changes.geometry {
            let cell = slider.cell_at(slot).expect("reported slot exists");
            let placement = cell.placement().expect("live cell is placed");
            self.frames.push((placement.index, placement.frame));
        }
        self.evicted += changes.evicted.len();
    }
}

fn slider_with(items: usize) -> (CardSlider<usize>, Rc<RefCell<Notifications>>) {
    let mut slider = CardSlider::new(Size::new(W, 300.0));
    let notifications = Rc::new(RefCell::new(Notifications::default()));
    slider.set_data_source(Some(Box::new(Items(items))));
    slider.set_delegate(Some(Box::new(notifications.clone())));
    slider.reload_data();
    (slider, notifications)
}

#[test]
fn reload_materializes_the_visible_stack() {
    let (mut slider, _) = slider_with(10);
    assert_eq!(slider.item_count(), 10);
    assert_eq!(slider.indicator().number_of_pages(), 10);
    assert_eq!(slider.materialized_indices(), vec![0, 1, 2]);
    assert_eq!(
        slider.cell_for_index(1).and_then(|cell| cell.content()),
        Some(&10)
    );

    let changes = slider.evaluate();
    assert_eq!(changes.materialized.len(), 3);
    assert_eq!(changes.content.len(), 3);
    assert!(changes.indicator_changed);

    let again = slider.evaluate();
    assert!(again.is_empty(), "nothing changed since the last evaluate");
}

#[test]
fn missing_data_source_materializes_nothing() {
    let mut slider: CardSlider<usize> = CardSlider::new(Size::new(W, 300.0));
    slider.reload_data();
    slider.did_scroll(2.0 * W);
    assert!(slider.materialized_indices().is_empty());
    assert_eq!(slider.item_count(), 0);
}

#[test]
fn half_page_offsets_round_up() {
    let (mut slider, notifications) = slider_with(10);
    slider.did_scroll(1.5 * W);
    assert_eq!(slider.current_index(), 2);
    assert_eq!(slider.indicator().current_page(), 2);
    assert_eq!(notifications.borrow().displayed, vec![2]);
}

#[test]
fn displayed_fires_once_per_page_change() {
    let (mut slider, notifications) = slider_with(10);
    for step in 0..=16 {
        slider.did_scroll(f64::from(step) * W / 4.0);
    }
    assert_eq!(notifications.borrow().displayed, vec![1, 2, 3, 4]);
}

#[test]
fn alpha_fade_dims_the_cards_behind_the_current_one() {
    let (mut slider, _) = slider_with(10);
    slider.did_scroll(5.0 * W);
    assert_eq!(slider.current_index(), 5);

    assert_eq!(slider.fade_alpha(3), 0.0);
    // 80 / 3 truncates to a 26 percent step.
    assert_eq!(slider.fade_alpha(4), 0.26);
    assert_eq!(slider.fade_alpha(5), 1.0);
    for index in [0, 1, 2, 6, 7, 8, 9] {
        assert_eq!(slider.fade_alpha(index), 1.0, "index {index}");
    }

    // The departing card picks up the fade while it is still materialized.
    slider.did_scroll(4.6 * W);
    assert_eq!(slider.current_index(), 5);
    let departing = slider.cell_for_index(4).expect("index 4 is materialized");
    assert_eq!(departing.content_alpha(), 0.26);

    slider.set_use_alpha_for_visible_cells(false);
    let departing = slider.cell_for_index(4).expect("index 4 is materialized");
    assert_eq!(departing.content_alpha(), 1.0);
    assert_eq!(slider.fade_alpha(3), 1.0);
}

#[test]
fn indicator_taps_step_pages_without_notifying() {
    let (mut slider, notifications) = slider_with(10);
    slider.did_scroll(4.0 * W);
    notifications.borrow_mut().displayed.clear();

    assert_eq!(slider.indicator().frame(), Rect::new(0.0, 280.0, W, 300.0));

    assert!(slider.handle_tap(Point::new(100.0, 290.0)));
    assert_eq!(slider.current_index(), 3);
    assert_eq!(slider.indicator().current_page(), 3);
    assert_eq!(
        slider.take_scroll_request(),
        Some(ScrollRequest {
            index: 3,
            offset: 3.0 * W,
            animated: true,
        })
    );

    slider.did_scroll(3.0 * W);
    assert!(slider.handle_tap(Point::new(300.0, 290.0)));
    assert_eq!(slider.current_index(), 4);
    assert_eq!(slider.take_scroll_request().map(|r| r.offset), Some(4.0 * W));

    assert!(!slider.handle_tap(Point::new(300.0, 100.0)), "above the indicator");
    assert_eq!(slider.take_scroll_request(), None);
    assert!(notifications.borrow().displayed.is_empty());
}

#[test]
fn indicator_taps_stop_at_the_ends() {
    let (mut slider, _) = slider_with(10);
    assert!(slider.handle_tap(Point::new(100.0, 290.0)));
    assert_eq!(slider.current_index(), 0);

    slider.did_scroll(9.0 * W);
    assert!(slider.handle_tap(Point::new(300.0, 290.0)));
    assert_eq!(slider.current_index(), 9);
}

#[test]
fn selection_scrolls_only_when_off_front() {
    let (mut slider, notifications) = slider_with(10);
    slider.did_scroll(7.0 * W);

    slider.select_item(7);
    assert_eq!(notifications.borrow().selected, vec![7]);
    assert_eq!(slider.take_scroll_request(), None);

    slider.select_item(5);
    assert_eq!(notifications.borrow().selected, vec![7, 5]);
    assert_eq!(
        slider.take_scroll_request(),
        Some(ScrollRequest {
            index: 5,
            offset: 5.0 * W,
            animated: true,
        })
    );

    slider.select_item(10);
    assert_eq!(notifications.borrow().selected, vec![7, 5]);
    assert_eq!(slider.take_scroll_request(), None);
}

#[test]
fn scrolling_recycles_cells() {
    let (mut slider, _) = slider_with(10);
    let first = slider.cell_id_for_index(0).expect("index 0 is materialized");
    let _ = slider.evaluate();

    slider.did_scroll(W);
    assert_eq!(slider.materialized_indices(), vec![1, 2, 3]);
    assert!(!slider.pool().is_alive(first), "evicted handle is stale");

    let reused = slider.cell_id_for_index(3).expect("index 3 is materialized");
    assert_eq!(reused.index(), first.index());
    let cell = slider.cell_for_index(3).expect("index 3 is materialized");
    assert_eq!(cell.content(), Some(&30));

    let changes = slider.evaluate();
    assert_eq!(changes.evicted, vec![first.index()]);
    assert!(changes.materialized.contains(&first.index()));
}

#[test]
fn pool_stays_bounded_while_scrolling() {
    let (mut slider, _) = slider_with(40);
    for step in 0..=(39 * 8) {
        slider.did_scroll(f64::from(step) * W / 8.0);
        assert!(slider.materialized_indices().len() <= 4);
    }
    assert!(slider.pool().capacity() <= 4);
}

#[test]
fn presenter_sees_monotonic_frames() {
    let (mut slider, _) = slider_with(10);
    let mut presenter = RecordingPresenter::default();
    let changes = slider.evaluate();
    presenter.apply(&slider, &changes);

    for step in 1..=8 {
        slider.did_scroll(f64::from(step) * W / 8.0);
        let changes = slider.evaluate();
        presenter.apply(&slider, &changes);
    }

    let front_xs: Vec<f64> = presenter
        .frames
        .iter()
        .filter(|(index, _)| *index == 2)
        .map(|(_, frame)| frame.center().x)
        .collect();
    assert!(front_xs.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(presenter.evicted, 1);
}

#[test]
fn unchanged_offset_reports_no_geometry() {
    let (mut slider, _) = slider_with(10);
    slider.did_scroll(W * 0.5);
    let _ = slider.evaluate();
    slider.did_scroll(W * 0.5);
    assert!(slider.evaluate().is_empty());
}

#[test]
fn highlight_follows_press_and_selection() {
    let (mut slider, _) = slider_with(10);
    let _ = slider.evaluate();

    assert!(slider.set_highlighted(0, true, HostTime(0)));
    let cell = slider.cell_for_index(0).expect("index 0 is materialized");
    assert_eq!(cell.highlight_alpha(HostTime(300_000_000)), 0.2);
    assert_eq!(slider.evaluate().highlights.len(), 1);

    slider.select_item(0);
    let cell = slider.cell_for_index(0).expect("index 0 is materialized");
    assert_eq!(cell.highlight_alpha(HostTime(300_000_000)), 0.0);

    assert!(!slider.set_highlighted(9, true, HostTime(0)), "not materialized");
}

#[test]
fn configuration_is_validated() {
    let (mut slider, _) = slider_with(10);
    assert_eq!(
        slider.set_visible_items_count(0),
        Err(SliderError::ZeroVisibleItems)
    );
    assert!(matches!(
        slider.set_item_height(-1.0),
        Err(SliderError::InvalidDimension { what: "item height", .. })
    ));
    assert!(matches!(
        slider.set_item_width(ItemWidth::Fixed(f64::NAN)),
        Err(SliderError::InvalidDimension { .. })
    ));
    assert!(CardSlider::<usize>::from_archive(&[]).is_err());

    assert_eq!(slider.set_visible_items_count(2), Ok(()));
    assert_eq!(slider.materialized_indices(), vec![0, 1]);
}

#[test]
fn resize_rederives_item_width() {
    let (mut slider, _) = slider_with(10);
    let before = slider.layout().item_size().width;
    assert!((before - (W / 1.5 - 80.0)).abs() < 1e-9);

    slider.set_size(Size::new(600.0, 300.0)).expect("valid size");
    assert!((slider.layout().item_size().width - 320.0).abs() < 1e-9);
    assert_eq!(slider.layout().page_width(), 600.0);

    slider.set_item_width(ItemWidth::Large).expect("valid width");
    assert_eq!(slider.layout().item_size().width, 520.0);
}

#[test]
fn reload_clamps_current_index() {
    let source = Rc::new(RefCell::new(Items(10)));
    let mut slider = CardSlider::new(Size::new(W, 300.0));
    slider.set_data_source(Some(Box::new(source.clone())));
    slider.reload_data();
    slider.did_scroll(8.0 * W);

    source.borrow_mut().0 = 4;
    slider.reload_data();
    assert_eq!(slider.current_index(), 3);
    assert_eq!(slider.indicator().current_page(), 3);
    assert_eq!(slider.indicator().number_of_pages(), 4);
}

#[test]
fn style_and_spacing_apply_to_live_cells() {
    let (mut slider, _) = slider_with(10);
    let _ = slider.evaluate();

    slider.set_spacing(20.0).expect("valid spacing");
    assert!((slider.layout().item_size().width - (W / 1.5 - 40.0)).abs() < 1e-9);
    let _ = slider.evaluate();

    let bad = CardStyle {
        corner_radius: -1.0,
        ..CardStyle::default()
    };
    assert!(slider.set_card_style(bad).is_err());

    let shrinking = CardStyle {
        max_zoom: 0.5,
        ..CardStyle::default()
    };
    assert!(matches!(
        slider.set_card_style(shrinking),
        Err(SliderError::InvalidDimension { what: "max zoom", .. })
    ));

    for opacity in [4.0, -0.1, f64::NAN] {
        let mut style = CardStyle::default();
        style.shadow.opacity = opacity;
        assert!(matches!(
            slider.set_card_style(style),
            Err(SliderError::InvalidDimension { what: "shadow opacity", .. })
        ));
    }
    assert_eq!(slider.card_style(), &CardStyle::default());
    assert!(slider.evaluate().masks.is_empty(), "rejected styles mark nothing");

    let rounder = CardStyle {
        corner_radius: 24.0,
        ..CardStyle::default()
    };
    slider.set_card_style(rounder).expect("valid style");
    let changes = slider.evaluate();
    assert_eq!(changes.masks.len(), 3);
    let front = slider.cell_for_index(0).expect("index 0 is materialized");
    assert_eq!(front.mask().radii().top_left, 24.0);
}

#[test]
fn recycled_slot_rebinds_when_evictions_apply_first() {
    let (mut slider, _) = slider_with(10);
    let mut bound: HashMap<u32, usize> = HashMap::new();
    let mut apply = |slider: &CardSlider<usize>, changes: &SliderChanges| {
        for slot in &changes.evicted {
            bound.remove(slot);
        }
        for &slot in &changes.materialized {
            let cell = slider.cell_at(slot).expect("materialized slot exists");
            bound.insert(slot, cell.index().expect("materialized cell has an index"));
        }
    };

    let changes = slider.evaluate();
    apply(&slider, &changes);

    slider.did_scroll(W);
    let changes = slider.evaluate();
    let recycled = changes.evicted[0];
    assert!(changes.materialized.contains(&recycled));
    apply(&slider, &changes);

    assert_eq!(bound.get(&recycled), Some(&3));
    let mut indices: Vec<usize> = bound.values().copied().collect();
    indices.sort_unstable();
    assert_eq!(indices, slider.materialized_indices());
}
