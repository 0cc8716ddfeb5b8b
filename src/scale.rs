// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device pixel density.

use core::fmt;

use crate::log;

/// The number of device pixels per logical unit.
///
/// A scale factor of zero is [`ScaleFactor::NONE`] and disables snapping:
/// every snapping operation returns its input unchanged.
///
/// # Examples
///
/// ```
/// use pixalign::ScaleFactor;
///
/// let scale = ScaleFactor::new(3.0).unwrap();
/// assert_eq!(scale.get(), 3.0);
/// assert!(ScaleFactor::new(-1.0).is_err());
/// assert!(ScaleFactor::NONE.is_none());
/// ```
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// No snapping.
    pub const NONE: ScaleFactor = ScaleFactor(0.0);
    /// One pixel per unit.
    pub const X1: ScaleFactor = ScaleFactor(1.0);
    /// Two pixels per unit.
    pub const X2: ScaleFactor = ScaleFactor(2.0);
    /// Three pixels per unit.
    pub const X3: ScaleFactor = ScaleFactor(3.0);

    /// Create a new scale factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is negative, NaN or infinite.
    pub fn new(scale: f64) -> Result<ScaleFactor, ScaleFactorError> {
        if !scale.is_finite() {
            log::debug!(scale, "rejected non-finite scale factor");
            return Err(ScaleFactorError::NotFinite);
        }
        if scale < 0.0 {
            log::debug!(scale, "rejected negative scale factor");
            return Err(ScaleFactorError::Negative);
        }
        // Normalize -0.0.
        Ok(ScaleFactor(scale + 0.0))
    }

    /// The raw number of pixels per unit.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Is this [`ScaleFactor::NONE`]?
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0.0
    }

    /// The logical size of one device pixel, or `0.0` when snapping is disabled.
    ///
    /// ```
    /// use pixalign::ScaleFactor;
    ///
    /// assert_eq!(ScaleFactor::X2.pixel_size(), 0.5);
    /// assert_eq!(ScaleFactor::NONE.pixel_size(), 0.0);
    /// ```
    #[inline]
    pub fn pixel_size(self) -> f64 {
        if self.is_none() {
            0.0
        } else {
            self.0.recip()
        }
    }

    /// Does `value` lie on the pixel grid?
    ///
    /// Every value is aligned when snapping is disabled.
    pub fn is_pixel_aligned(self, value: f64) -> bool {
        crate::floor_to_pixel(value, self) == value
    }
}

impl fmt::Debug for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}x", self.0)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)?;
        write!(formatter, "x")
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = ScaleFactorError;

    #[inline]
    fn try_from(scale: f64) -> Result<ScaleFactor, ScaleFactorError> {
        ScaleFactor::new(scale)
    }
}

impl From<ScaleFactor> for f64 {
    #[inline]
    fn from(scale: ScaleFactor) -> f64 {
        scale.0
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for ScaleFactor {
    fn schema_name() -> alloc::string::String {
        "ScaleFactor".into()
    }

    fn json_schema(r#gen: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        <f64 as schemars::JsonSchema>::json_schema(r#gen)
    }
}

/// Supplies the scale factor of whatever a layout is rendered on.
///
/// Snapping operations accept any provider, so a host screen or window type
/// can be passed directly instead of extracting its scale first.
///
/// # Examples
///
/// ```
/// use pixalign::{floor_to_pixel, ScaleFactor, ScaleFactorProvider};
///
/// struct Screen {
///     density: f64,
/// }
///
/// impl ScaleFactorProvider for Screen {
///     fn scale_factor(&self) -> ScaleFactor {
///         ScaleFactor::new(self.density).unwrap_or(ScaleFactor::NONE)
///     }
/// }
///
/// let screen = Screen { density: 2.0 };
/// assert_eq!(floor_to_pixel(1.75, &screen), 1.5);
/// ```
pub trait ScaleFactorProvider {
    /// The current scale factor.
    fn scale_factor(&self) -> ScaleFactor;
}

impl ScaleFactorProvider for ScaleFactor {
    #[inline]
    fn scale_factor(&self) -> ScaleFactor {
        *self
    }
}

impl<T: ScaleFactorProvider + ?Sized> ScaleFactorProvider for &T {
    #[inline]
    fn scale_factor(&self) -> ScaleFactor {
        (**self).scale_factor()
    }
}

/// The reason a value was rejected as a [`ScaleFactor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScaleFactorError {
    /// The scale was less than zero.
    Negative,
    /// The scale was NaN or infinite.
    NotFinite,
}

impl fmt::Display for ScaleFactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleFactorError::Negative => f.write_str("scale factor must not be negative"),
            ScaleFactorError::NotFinite => f.write_str("scale factor must be finite"),
        }
    }
}

impl core::error::Error for ScaleFactorError {}
