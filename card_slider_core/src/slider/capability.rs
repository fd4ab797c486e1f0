// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the host plugs into a slider.

use alloc::rc::Rc;
use core::cell::RefCell;

/// Supplies the items a slider shows.
///
/// `V` is the host's item content, typically a view handle.
pub trait CardDataSource<V> {
    /// Number of items. Re-read on every
    /// [`reload_data`](super::CardSlider::reload_data).
    fn number_of_items(&self) -> usize;

    /// Content for the item at `index`.
    ///
    /// Called whenever a cell is bound to `index`, so it may be called more
    /// than once per index while scrolling back and forth.
    fn item(&mut self, index: usize) -> V;
}

/// Receives selection and display notifications.
///
/// Both methods default to no-ops.
pub trait CardSliderDelegate {
    /// An item was selected.
    fn item_selected(&mut self, index: usize) {
        _ = index;
    }

    /// Scrolling brought a new item to the front.
    fn item_displayed(&mut self, index: usize) {
        _ = index;
    }
}

impl<V, D: CardDataSource<V> + ?Sized> CardDataSource<V> for Rc<RefCell<D>> {
    fn number_of_items(&self) -> usize {
        self.borrow().number_of_items()
    }

    fn item(&mut self, index: usize) -> V {
        self.borrow_mut().item(index)
    }
}

impl<D: CardSliderDelegate + ?Sized> CardSliderDelegate for Rc<RefCell<D>> {
    fn item_selected(&mut self, index: usize) {
        self.borrow_mut().item_selected(index);
    }

    fn item_displayed(&mut self, index: usize) {
        self.borrow_mut().item_displayed(index);
    }
}
