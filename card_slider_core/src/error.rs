// Copyright 2026 the Card Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration and construction errors.

use core::fmt;
use core::ops::RangeInclusive;

/// Errors from [`CardSlider`](crate::slider::CardSlider) construction and
/// configuration.
///
/// Runtime interaction (scrolling, selection, indicator taps) never fails;
/// out-of-range input there is clamped or ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderError {
    /// The slider cannot be restored from an archived representation.
    UnsupportedConstruction,
    /// A visible item count of zero was requested.
    ZeroVisibleItems,
    /// A dimension was negative, NaN, or infinite.
    InvalidDimension {
        /// Which configuration value was rejected.
        what: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedConstruction => {
                write!(f, "card slider cannot be constructed from an archive")
            }
            Self::ZeroVisibleItems => write!(f, "visible item count must be at least 1"),
            Self::InvalidDimension { what, value } => {
                write!(f, "invalid {what}: {value} (out of range)")
            }
        }
    }
}

impl core::error::Error for SliderError {}

/// Checks that `value` is finite and non-negative.
pub(crate) fn check_dimension(what: &'static str, value: f64) -> Result<f64, SliderError> {
    check_range(what, value, 0.0..=f64::MAX)
}

/// Checks that `value` lies in `range`. NaN is always rejected.
pub(crate) fn check_range(
    what: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
) -> Result<f64, SliderError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(SliderError::InvalidDimension { what, value })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_are_readable() {
        assert_eq!(
            SliderError::UnsupportedConstruction.to_string(),
            "card slider cannot be constructed from an archive"
        );
        let err = SliderError::InvalidDimension {
            what: "item height",
            value: -4.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid item height: -4 (out of range)"
        );
    }

    #[test]
    fn dimension_check_rejects_nan_and_negative() {
        assert_eq!(check_dimension("spacing", 12.0), Ok(12.0));
        assert!(check_dimension("spacing", -0.5).is_err());
        assert!(check_dimension("spacing", f64::NAN).is_err());
        assert!(check_dimension("spacing", f64::INFINITY).is_err());
    }

    #[test]
    fn range_check_is_inclusive() {
        assert_eq!(check_range("shadow opacity", 1.0, 0.0..=1.0), Ok(1.0));
        assert_eq!(check_range("shadow opacity", 0.0, 0.0..=1.0), Ok(0.0));
        assert!(check_range("shadow opacity", 1.5, 0.0..=1.0).is_err());
        assert!(check_range("max zoom", 0.5, 1.0..=f64::MAX).is_err());
        assert!(check_range("max zoom", f64::NAN, 1.0..=f64::MAX).is_err());
    }
}
