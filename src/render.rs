//! Primitives produced by a render pass.
//!
//! A render pass yields a keyed [`Group`] of [`Bar`] rectangles. The
//! primitives borrow from the series that produced them and live for one
//! render pass only; the next pass produces a fresh tree.

use std::fmt;

use crate::{ColorU8, geom};

/// Paint pattern, used for fill operations
#[derive(Debug, Clone, Copy)]
pub enum Paint {
    /// Solid color fill
    Solid(ColorU8),
}

impl From<ColorU8> for Paint {
    fn from(value: ColorU8) -> Self {
        Paint::Solid(value)
    }
}

/// Stroke style of a bar outline
#[derive(Debug, Clone, Copy)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: ColorU8,
    /// Stroke width in pixels
    pub width: f32,
}

/// A raw pointer event, as delivered by the host framework
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in the series coordinate frame
    pub pos: geom::Point,
}

impl PointerEvent {
    /// Create a pointer event at the given position
    pub fn new(x: f32, y: f32) -> Self {
        PointerEvent {
            pos: geom::Point { x, y },
        }
    }
}

pub(crate) type Handler<'a> = Box<dyn Fn(&PointerEvent) + 'a>;

/// Pointer handlers wired to a bar.
/// A handler is absent when the series supplies no matching callback.
#[derive(Default)]
pub(crate) struct Handlers<'a> {
    pub(crate) click: Option<Handler<'a>>,
    pub(crate) mouse_move: Option<Handler<'a>>,
    pub(crate) mouse_leave: Option<Handler<'a>>,
}

impl fmt::Debug for Handlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn tag(h: &Option<Handler<'_>>) -> &'static str {
            if h.is_some() { "Some(..)" } else { "None" }
        }
        f.debug_struct("Handlers")
            .field("click", &tag(&self.click))
            .field("mouse_move", &tag(&self.mouse_move))
            .field("mouse_leave", &tag(&self.mouse_leave))
            .finish()
    }
}

/// A positioned bar rectangle with resolved style and optional handlers
#[derive(Debug)]
pub struct Bar<'a> {
    key: String,
    rect: geom::Rect,
    fill: ColorU8,
    fill_opacity: Option<f32>,
    stroke: ColorU8,
    stroke_width: f32,
    handlers: Handlers<'a>,
}

impl<'a> Bar<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        key: String,
        rect: geom::Rect,
        fill: ColorU8,
        fill_opacity: Option<f32>,
        stroke: ColorU8,
        stroke_width: f32,
        handlers: Handlers<'a>,
    ) -> Self {
        Bar {
            key,
            rect,
            fill,
            fill_opacity,
            stroke,
            stroke_width,
            handlers,
        }
    }

    /// The identity key of the bar, stable across re-renders
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The bar geometry. Height is negative for values below the baseline.
    pub fn rect(&self) -> &geom::Rect {
        &self.rect
    }

    /// The resolved fill color
    pub fn fill(&self) -> ColorU8 {
        self.fill
    }

    /// The resolved fill opacity, if any was set
    pub fn fill_opacity(&self) -> Option<f32> {
        self.fill_opacity
    }

    /// The resolved stroke color
    pub fn stroke(&self) -> ColorU8 {
        self.stroke
    }

    /// The resolved stroke width
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// The fill paint with the fill opacity applied
    ///
    /// Panics if the resolved fill opacity is outside `0.0..=1.0`.
    pub fn paint(&self) -> Paint {
        match self.fill_opacity {
            Some(opacity) => Paint::Solid(self.fill.with_opacity(opacity)),
            None => Paint::Solid(self.fill),
        }
    }

    /// The outline stroke style
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.stroke,
            width: self.stroke_width,
        }
    }

    /// Build a drawable path from the bar geometry.
    /// Returns None for zero-area bars.
    pub fn to_path(&self) -> Option<geom::Path> {
        self.rect.to_path()
    }

    /// Invoke the click handler if one is wired.
    /// Returns whether a handler ran.
    pub fn dispatch_click(&self, event: &PointerEvent) -> bool {
        match &self.handlers.click {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    /// Invoke the mouse-move handler if one is wired.
    /// Returns whether a handler ran.
    pub fn dispatch_mouse_move(&self, event: &PointerEvent) -> bool {
        match &self.handlers.mouse_move {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    /// Invoke the mouse-leave handler if one is wired.
    /// Returns whether a handler ran.
    pub fn dispatch_mouse_leave(&self, event: &PointerEvent) -> bool {
        match &self.handlers.mouse_leave {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}

/// A keyed group of bars sharing one coordinate frame
#[derive(Debug)]
pub struct Group<'a> {
    key: String,
    bars: Vec<Bar<'a>>,
}

impl<'a> Group<'a> {
    pub(crate) fn new(key: String, bars: Vec<Bar<'a>>) -> Self {
        Group { key, bars }
    }

    /// The identity key of the group
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The bars of the group, in data order
    pub fn bars(&self) -> &[Bar<'a>] {
        &self.bars
    }

    /// The number of bars in the group
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the group holds no bars
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Find the topmost bar containing the given point
    pub fn hit_test(&self, point: geom::Point) -> Option<&Bar<'a>> {
        self.bars
            .iter()
            .rev()
            .find(|b| b.rect().contains_point(&point))
    }
}
