//! The pure mapping from a bar series description to primitives.
//!
//! [`BarSeries::render`] derives one rectangle per datum with a defined
//! value, from the injected scales and bar width. The mapping holds no
//! state and caches nothing: the host re-invokes it on every prop change
//! and the resulting tree is valid for that pass only.

use log::{debug, trace};

use crate::ColorU8;
use crate::data::Datum;
use crate::geom;
use crate::render::{Bar, Group, Handlers, PointerEvent};
use crate::series::{BarSeries, SeriesEvent};

impl BarSeries {
    /// Render the series into a keyed group of bar primitives.
    ///
    /// Returns `None` while any of the x scale, y scale or bar width is
    /// missing, which covers the parent container not having finished
    /// its layout yet.
    ///
    /// Bar geometry grows upward from the baseline, the first element of
    /// the y scale's pixel range (0 when the scale declares no range).
    /// Zero and negative heights are still rendered; only data without a
    /// value is skipped.
    pub fn render(&self) -> Option<Group<'_>> {
        let (Some(x_scale), Some(y_scale), Some(bar_width)) =
            (self.x_scale(), self.y_scale(), self.bar_width())
        else {
            debug!(
                "bar series {:?}: layout inputs missing, nothing to render",
                self.label()
            );
            return None;
        };

        let max_height = y_scale.range().map_or(0.0, |r| r[0]);
        let offset = x_scale.offset();

        let mut bars = Vec::with_capacity(self.data().len());
        for (i, d) in self.data().iter().enumerate() {
            let Some(y) = d.y() else { continue };

            let scaled_x = x_scale.map(d.x());
            let bar_height = max_height - y_scale.map_num(y);
            let rect = geom::Rect::from_xywh(
                scaled_x - offset,
                max_height - bar_height,
                bar_width,
                bar_height,
            );

            let fill = d.fill().unwrap_or_else(|| self.fill().resolve(d, i));
            let fill_opacity = d
                .fill_opacity()
                .or_else(|| self.fill_opacity().resolve(d, i));
            let stroke = d.stroke().unwrap_or_else(|| self.stroke().resolve(d, i));
            let stroke_width = d
                .stroke_width()
                .unwrap_or_else(|| self.stroke_width().resolve(d, i));

            bars.push(Bar::new(
                format!("bar-{}-{}", self.label(), scaled_x),
                rect,
                fill,
                fill_opacity,
                stroke,
                stroke_width,
                self.wire_handlers(d, i, fill),
            ));
        }

        trace!("bar series {:?}: {} bars rendered", self.label(), bars.len());
        Some(Group::new(self.label().to_string(), bars))
    }

    /// Wire the series callbacks to one bar.
    /// A handler is attached only when the matching callback exists.
    fn wire_handlers<'a>(&'a self, datum: &'a Datum, index: usize, color: ColorU8) -> Handlers<'a> {
        let mut handlers = Handlers::default();

        if let Some(cb) = self.on_click() {
            let cb = cb.clone();
            handlers.click = Some(Box::new(move |event: &PointerEvent| {
                (*cb)(&SeriesEvent {
                    event,
                    data: self.data(),
                    datum,
                    color,
                    index,
                });
            }));
        }

        if let Some(cb) = self.on_mouse_move() {
            let cb = cb.clone();
            handlers.mouse_move = Some(Box::new(move |event: &PointerEvent| {
                (*cb)(&SeriesEvent {
                    event,
                    data: self.data(),
                    datum,
                    color,
                    index,
                });
            }));
        }

        // forwarded raw, without enrichment
        if let Some(cb) = self.on_mouse_leave() {
            let cb = cb.clone();
            handlers.mouse_leave = Some(Box::new(move |event: &PointerEvent| (*cb)(event)));
        }

        handlers
    }
}
