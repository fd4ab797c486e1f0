// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static card appearance.

use kurbo::Vec2;

use crate::color::Color;

/// Drop shadow parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    /// Shadow color.
    pub color: Color,
    /// Blur radius in points.
    pub radius: f64,
    /// Offset of the shadow from the card.
    pub offset: Vec2,
    /// Shadow opacity for a fully unshaded card.
    pub opacity: f64,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            radius: 20.0,
            offset: Vec2::new(0.0, 20.0),
            opacity: 0.3,
        }
    }
}

/// Appearance shared by every card of a slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    /// Corner radius of the rounded clip and shadow path.
    pub corner_radius: f64,
    /// Drop shadow.
    pub shadow: ShadowStyle,
    /// Content zoom at zoom progress 0.
    pub max_zoom: f64,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            corner_radius: 10.0,
            shadow: ShadowStyle::default(),
            max_zoom: 1.3,
        }
    }
}
