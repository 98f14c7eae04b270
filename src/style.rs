//! Style props for bar series.
//!
//! Each of the four style props (`fill`, `fill_opacity`, `stroke`,
//! `stroke_width`) is either a constant or a function of the datum and
//! its index. Per-datum overrides on the datum itself take precedence
//! over both; that precedence is applied at render time.

pub(crate) mod defaults;
pub mod theme;

use std::fmt;
use std::rc::Rc;

use crate::data::Datum;

pub use theme::Theme;

/// A style prop that is either a constant or computed per datum
#[derive(Clone)]
pub enum StyleProp<T: Clone> {
    /// The same value for every datum
    Constant(T),
    /// A value computed from the datum and its index
    PerDatum(Rc<dyn Fn(&Datum, usize) -> T>),
}

impl<T: Clone> StyleProp<T> {
    /// Create a per-datum style prop from a function
    pub fn per_datum<F>(f: F) -> Self
    where
        F: Fn(&Datum, usize) -> T + 'static,
    {
        StyleProp::PerDatum(Rc::new(f))
    }

    /// Resolve the prop for the datum at the given index
    pub fn resolve(&self, datum: &Datum, index: usize) -> T {
        match self {
            StyleProp::Constant(value) => value.clone(),
            StyleProp::PerDatum(f) => f(datum, index),
        }
    }
}

impl<T: Clone> From<T> for StyleProp<T> {
    fn from(value: T) -> Self {
        StyleProp::Constant(value)
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for StyleProp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleProp::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            StyleProp::PerDatum(_) => f.write_str("PerDatum(..)"),
        }
    }
}
