#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
/*!
 * # xybar
 * Bar series rendering for XY charts.
 *
 * A [`BarSeries`] is a leaf visual component of a chart: it receives
 * already-computed data, coordinate scales and style props, and produces
 * a keyed group of positioned rectangles plus pointer-event wiring.
 * Everything around it (scale domains, axes, data loading, the chart
 * container, the drawing backend) belongs to the host.
 *
 * Rendering is a pure function of the series props: the host re-invokes
 * [`BarSeries::render`] on every prop change and gets a fresh primitive
 * tree, with no state held in between.
 *
 * ```
 * use std::rc::Rc;
 * use xybar::scale::{Band, Linear};
 * use xybar::{BarSeries, Datum};
 *
 * let data = vec![
 *     Datum::new("ham", 3.0),
 *     Datum::new("spam", 5.0),
 *     // no value, no bar
 *     Datum::new("eggs", None),
 * ];
 *
 * // the parent chart container computes layout and injects the scales
 * let series = BarSeries::new("orders", data)
 *     .with_bar_width(80.0)
 *     .with_x_scale(Rc::new(Band::new(["ham", "spam", "eggs"], [0.0, 300.0]).unwrap()))
 *     .with_y_scale(Rc::new(Linear::new((0.0, 10.0), [150.0, 0.0]).unwrap()));
 *
 * let group = series.render().unwrap();
 * assert_eq!(group.key(), "orders");
 * assert_eq!(group.len(), 2);
 *
 * for bar in group.bars() {
 *     // hand bar.rect(), bar.paint() and bar.stroke_style()
 *     // to the drawing backend of your choice
 *     let _ = (bar.rect(), bar.paint(), bar.stroke_style());
 * }
 * ```
 *
 * Pointer events are routed back through the tree: the host hit-tests
 * the group and dispatches raw events to the bar, which forwards them to
 * the series callbacks with datum context attached. See
 * [`render::Group::hit_test`] and [`series::SeriesEvent`].
 */

pub mod data;
pub mod drawing;
pub mod render;
pub mod scale;
pub mod series;
pub mod style;

pub use data::{Datum, Sample};
pub use series::BarSeries;
pub use style::{StyleProp, Theme};

/// Re-exports of [`xybar_base::color`] items
pub mod color {
    pub use xybar_base::color::*;
}
pub use color::ColorU8;

/// Re-exports of [`xybar_base::geom`] items
pub mod geom {
    pub use xybar_base::geom::*;
}

#[cfg(test)]
pub(crate) mod tests {
    pub trait Near {
        fn near_abs(&self, other: &Self, tol: f64) -> bool;
        fn near_rel(&self, other: &Self, err: f64) -> bool;
    }

    impl Near for f64 {
        fn near_abs(&self, other: &Self, tol: f64) -> bool {
            (self - other).abs() <= tol
        }

        fn near_rel(&self, other: &Self, err: f64) -> bool {
            let diff = (self - other).abs();
            let largest = self.abs().max(other.abs());
            diff <= largest * err
        }
    }

    impl Near for f32 {
        fn near_abs(&self, other: &Self, tol: f64) -> bool {
            (self - other).abs() as f64 <= tol
        }

        fn near_rel(&self, other: &Self, err: f64) -> bool {
            let diff = (self - other).abs() as f64;
            let largest = self.abs().max(other.abs()) as f64;
            diff <= largest * err
        }
    }

    macro_rules! assert_near {
        (abs, $a:expr, $b:expr, $tol:expr) => {
            assert!($a.near_abs(&$b, $tol), "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nTolerance: {}", $a, $b, $tol);
        };
        (abs, $a:expr, $b:expr) => {
            assert_near!(abs, $a, $b, 1e-5);
        };
        (rel, $a:expr, $b:expr, $err:expr) => {
            assert!($a.near_rel(&$b, $err), "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nRelative error: {}", $a, $b, $err);
        };
        (rel, $a:expr, $b:expr) => {
            assert_near!(rel, $a, $b, 1e-5);
        };
    }

    pub(crate) use assert_near;
}
