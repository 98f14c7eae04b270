//! Bar series description.
//!
//! A [`BarSeries`] gathers the data, scales, bar width, style props and
//! pointer callbacks of one series. The parent chart container usually
//! injects `bar_width`, `x_scale` and `y_scale` once its layout is known;
//! until then the series renders nothing.

use std::fmt;
use std::rc::Rc;

use crate::ColorU8;
use crate::data::Datum;
use crate::render::PointerEvent;
use crate::scale::Scale;
use crate::style::{StyleProp, Theme, defaults};

/// Payload passed to series-level click and mouse-move callbacks
#[derive(Debug)]
pub struct SeriesEvent<'a> {
    /// The raw pointer event that triggered the callback
    pub event: &'a PointerEvent,
    /// The full series data
    pub data: &'a [Datum],
    /// The datum of the bar the event landed on
    pub datum: &'a Datum,
    /// The resolved fill color of that bar
    pub color: ColorU8,
    /// The index of the datum in the series data
    pub index: usize,
}

/// A callback receiving the enriched series event
pub type SeriesCallback = Rc<dyn Fn(&SeriesEvent)>;

/// A callback receiving the raw pointer event
pub type PointerCallback = Rc<dyn Fn(&PointerEvent)>;

/// One bar series of an XY chart
pub struct BarSeries {
    data: Vec<Datum>,
    label: String,

    bar_width: Option<f32>,
    x_scale: Option<Rc<dyn Scale>>,
    y_scale: Option<Rc<dyn Scale>>,

    fill: StyleProp<ColorU8>,
    fill_opacity: StyleProp<Option<f32>>,
    stroke: StyleProp<ColorU8>,
    stroke_width: StyleProp<f32>,

    on_click: Option<SeriesCallback>,
    on_mouse_move: Option<SeriesCallback>,
    on_mouse_leave: Option<PointerCallback>,
}

impl BarSeries {
    /// Create a new bar series with the given label and data
    ///
    /// The label doubles as the rendering key of the series group.
    /// Styles default to the theme accent fill, a white stroke of width 1
    /// and no fill opacity.
    pub fn new(label: impl Into<String>, data: Vec<Datum>) -> Self {
        BarSeries {
            data,
            label: label.into(),

            bar_width: None,
            x_scale: None,
            y_scale: None,

            fill: Theme::default().accent().into(),
            fill_opacity: StyleProp::Constant(None),
            stroke: defaults::BAR_STROKE.into(),
            stroke_width: defaults::BAR_STROKE_WIDTH.into(),

            on_click: None,
            on_mouse_move: None,
            on_mouse_leave: None,
        }
    }

    /// Set the fixed bar width in pixels and return self for chaining
    pub fn with_bar_width(self, bar_width: f32) -> Self {
        Self {
            bar_width: Some(bar_width),
            ..self
        }
    }

    /// Set the x scale and return self for chaining
    pub fn with_x_scale(self, x_scale: Rc<dyn Scale>) -> Self {
        Self {
            x_scale: Some(x_scale),
            ..self
        }
    }

    /// Set the y scale and return self for chaining
    pub fn with_y_scale(self, y_scale: Rc<dyn Scale>) -> Self {
        Self {
            y_scale: Some(y_scale),
            ..self
        }
    }

    /// Set the fill style prop and return self for chaining
    pub fn with_fill(self, fill: impl Into<StyleProp<ColorU8>>) -> Self {
        Self {
            fill: fill.into(),
            ..self
        }
    }

    /// Set the fill opacity style prop and return self for chaining
    ///
    /// Opacities must resolve within `0.0..=1.0`; applying an
    /// out-of-range value to a paint panics.
    pub fn with_fill_opacity(self, fill_opacity: impl Into<StyleProp<Option<f32>>>) -> Self {
        Self {
            fill_opacity: fill_opacity.into(),
            ..self
        }
    }

    /// Set the stroke style prop and return self for chaining
    pub fn with_stroke(self, stroke: impl Into<StyleProp<ColorU8>>) -> Self {
        Self {
            stroke: stroke.into(),
            ..self
        }
    }

    /// Set the stroke width style prop and return self for chaining
    pub fn with_stroke_width(self, stroke_width: impl Into<StyleProp<f32>>) -> Self {
        Self {
            stroke_width: stroke_width.into(),
            ..self
        }
    }

    /// Set the click callback and return self for chaining
    pub fn with_on_click(self, on_click: SeriesCallback) -> Self {
        Self {
            on_click: Some(on_click),
            ..self
        }
    }

    /// Set the mouse-move callback and return self for chaining
    pub fn with_on_mouse_move(self, on_mouse_move: SeriesCallback) -> Self {
        Self {
            on_mouse_move: Some(on_mouse_move),
            ..self
        }
    }

    /// Set the mouse-leave callback and return self for chaining
    ///
    /// Unlike click and mouse-move, this callback receives the raw
    /// pointer event without enrichment.
    pub fn with_on_mouse_leave(self, on_mouse_leave: PointerCallback) -> Self {
        Self {
            on_mouse_leave: Some(on_mouse_leave),
            ..self
        }
    }

    /// Get the series data
    pub fn data(&self) -> &[Datum] {
        &self.data
    }

    /// Get the series label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the bar width, if set
    pub fn bar_width(&self) -> Option<f32> {
        self.bar_width
    }

    /// Get the x scale, if set
    pub fn x_scale(&self) -> Option<&dyn Scale> {
        self.x_scale.as_deref()
    }

    /// Get the y scale, if set
    pub fn y_scale(&self) -> Option<&dyn Scale> {
        self.y_scale.as_deref()
    }

    /// Get the fill style prop
    pub fn fill(&self) -> &StyleProp<ColorU8> {
        &self.fill
    }

    /// Get the fill opacity style prop
    pub fn fill_opacity(&self) -> &StyleProp<Option<f32>> {
        &self.fill_opacity
    }

    /// Get the stroke style prop
    pub fn stroke(&self) -> &StyleProp<ColorU8> {
        &self.stroke
    }

    /// Get the stroke width style prop
    pub fn stroke_width(&self) -> &StyleProp<f32> {
        &self.stroke_width
    }

    /// Get the click callback, if any
    pub fn on_click(&self) -> Option<&SeriesCallback> {
        self.on_click.as_ref()
    }

    /// Get the mouse-move callback, if any
    pub fn on_mouse_move(&self) -> Option<&SeriesCallback> {
        self.on_mouse_move.as_ref()
    }

    /// Get the mouse-leave callback, if any
    pub fn on_mouse_leave(&self) -> Option<&PointerCallback> {
        self.on_mouse_leave.as_ref()
    }
}

impl fmt::Debug for BarSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn tag<T>(cb: &Option<T>) -> &'static str {
            if cb.is_some() { "Some(..)" } else { "None" }
        }
        f.debug_struct("BarSeries")
            .field("label", &self.label)
            .field("data", &self.data)
            .field("bar_width", &self.bar_width)
            .field("x_scale", &self.x_scale)
            .field("y_scale", &self.y_scale)
            .field("fill", &self.fill)
            .field("fill_opacity", &self.fill_opacity)
            .field("stroke", &self.stroke)
            .field("stroke_width", &self.stroke_width)
            .field("on_click", &tag(&self.on_click))
            .field("on_mouse_move", &tag(&self.on_mouse_move))
            .field("on_mouse_leave", &tag(&self.on_mouse_leave))
            .finish()
    }
}
