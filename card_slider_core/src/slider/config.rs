// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item sizing configuration.

/// Default item height in points.
pub const DEFAULT_ITEM_HEIGHT: f64 = 200.0;

/// Card width, either relative to the viewport or explicit.
///
/// Relative classes subtract twice the stack spacing so the stepped cards
/// behind the front one stay inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ItemWidth {
    /// Half the viewport, minus spacing.
    Small,
    /// Two thirds of the viewport, minus spacing.
    #[default]
    Medium,
    /// The full viewport, minus spacing.
    Large,
    /// An explicit width in points.
    Fixed(f64),
}

impl ItemWidth {
    /// Resolves to points for a viewport `width` and stack `spacing`.
    ///
    /// Never negative; a viewport too narrow for the class yields 0.
    #[must_use]
    pub fn resolve(self, width: f64, spacing: f64) -> f64 {
        let resolved = match self {
            Self::Small => width / 2.0 - spacing * 2.0,
            Self::Medium => width / 1.5 - spacing * 2.0,
            Self::Large => width - spacing * 2.0,
            Self::Fixed(w) => w,
        };
        resolved.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_scale_with_viewport() {
        assert_eq!(ItemWidth::Small.resolve(300.0, 40.0), 70.0);
        assert_eq!(ItemWidth::Medium.resolve(300.0, 40.0), 120.0);
        assert_eq!(ItemWidth::Large.resolve(300.0, 40.0), 220.0);
        assert_eq!(ItemWidth::Fixed(123.0).resolve(300.0, 40.0), 123.0);
    }

    #[test]
    fn narrow_viewport_resolves_to_zero() {
        assert_eq!(ItemWidth::Small.resolve(100.0, 40.0), 0.0);
    }

    #[test]
    fn medium_is_default() {
        assert_eq!(ItemWidth::default(), ItemWidth::Medium);
    }
}
