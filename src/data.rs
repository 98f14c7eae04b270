//! Data samples and data points for bar series.
//!
//! A [`Datum`] is owned by the caller and only read here. Per-datum style
//! overrides take precedence over the series-level style props during
//! rendering.

use crate::ColorU8;

/// A position key in data space, either numeric or categorical
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// Numeric position on a continuous axis
    Num(f64),
    /// Categorical position on a band axis
    Cat(String),
}

impl From<f64> for Sample {
    fn from(num: f64) -> Self {
        Sample::Num(num)
    }
}

impl From<&str> for Sample {
    fn from(cat: &str) -> Self {
        Sample::Cat(cat.to_string())
    }
}

impl From<String> for Sample {
    fn from(cat: String) -> Self {
        Sample::Cat(cat)
    }
}

/// One data point of a bar series
///
/// The `y` value is optional: a datum without a value emits no bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    x: Sample,
    y: Option<f64>,
    fill: Option<ColorU8>,
    fill_opacity: Option<f32>,
    stroke: Option<ColorU8>,
    stroke_width: Option<f32>,
}

impl Datum {
    /// Create a new datum from a position key and an optional value
    pub fn new(x: impl Into<Sample>, y: impl Into<Option<f64>>) -> Self {
        Datum {
            x: x.into(),
            y: y.into(),
            fill: None,
            fill_opacity: None,
            stroke: None,
            stroke_width: None,
        }
    }

    /// Override the fill color for this datum and return self for chaining
    pub fn with_fill(self, fill: ColorU8) -> Self {
        Self {
            fill: Some(fill),
            ..self
        }
    }

    /// Override the fill opacity for this datum and return self for chaining
    ///
    /// Opacities must be within `0.0..=1.0`; applying an out-of-range
    /// value to a paint panics.
    pub fn with_fill_opacity(self, fill_opacity: f32) -> Self {
        Self {
            fill_opacity: Some(fill_opacity),
            ..self
        }
    }

    /// Override the stroke color for this datum and return self for chaining
    pub fn with_stroke(self, stroke: ColorU8) -> Self {
        Self {
            stroke: Some(stroke),
            ..self
        }
    }

    /// Override the stroke width for this datum and return self for chaining
    pub fn with_stroke_width(self, stroke_width: f32) -> Self {
        Self {
            stroke_width: Some(stroke_width),
            ..self
        }
    }

    /// Get the position key
    pub fn x(&self) -> &Sample {
        &self.x
    }

    /// Get the value, if any
    pub fn y(&self) -> Option<f64> {
        self.y
    }

    /// Get the fill color override, if any
    pub fn fill(&self) -> Option<ColorU8> {
        self.fill
    }

    /// Get the fill opacity override, if any
    pub fn fill_opacity(&self) -> Option<f32> {
        self.fill_opacity
    }

    /// Get the stroke color override, if any
    pub fn stroke(&self) -> Option<ColorU8> {
        self.stroke
    }

    /// Get the stroke width override, if any
    pub fn stroke_width(&self) -> Option<f32> {
        self.stroke_width
    }
}
