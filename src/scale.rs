//! Coordinate scales, mapping data space to pixel space.
//!
//! The parent chart container constructs the scales and injects them into
//! each series. Typically only one of `map_num` or `map_cat` is
//! implemented, depending on whether the scale is numerical or
//! categorical.

use std::fmt;

use crate::data::Sample;

/// Maps a data-domain value to a pixel coordinate
pub trait Scale: fmt::Debug {
    /// Map a numeric value to a pixel coordinate
    fn map_num(&self, _num: f64) -> f32 {
        unimplemented!("Only for numerical scales");
    }

    /// Map a category to a pixel coordinate
    fn map_cat(&self, _cat: &str) -> f32 {
        unimplemented!("Only for categorical scales");
    }

    /// Map any sample to a pixel coordinate
    fn map(&self, sample: &Sample) -> f32 {
        match sample {
            Sample::Num(n) => self.map_num(*n),
            Sample::Cat(c) => self.map_cat(c),
        }
    }

    /// The pixel extent covered by this scale, as an ordered pair,
    /// when the scale declares one
    fn range(&self) -> Option<[f32; 2]> {
        None
    }

    /// A fixed pixel adjustment applied to mapped positions,
    /// e.g. half a band width for categorical scales
    fn offset(&self) -> f32 {
        0.0
    }
}

/// Errors that can occur when constructing a scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The numeric domain has zero span
    EmptyDomain,
    /// The category list is empty
    NoCategories,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyDomain => write!(f, "Scale domain has zero span"),
            Error::NoCategories => write!(f, "Scale has no categories"),
        }
    }
}

impl std::error::Error for Error {}

/// A linear scale mapping a numeric domain to a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    domain: (f64, f64),
    range: [f32; 2],
}

impl Linear {
    /// Create a linear scale from a numeric domain and a pixel range
    pub fn new(domain: (f64, f64), range: [f32; 2]) -> Result<Self, Error> {
        if domain.0 == domain.1 {
            return Err(Error::EmptyDomain);
        }
        Ok(Linear { domain, range })
    }

    /// Get the numeric domain
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

impl Scale for Linear {
    fn map_num(&self, num: f64) -> f32 {
        let ratio = (num - self.domain.0) / (self.domain.1 - self.domain.0);
        self.range[0] + ratio as f32 * (self.range[1] - self.range[0])
    }

    fn range(&self) -> Option<[f32; 2]> {
        Some(self.range)
    }
}

/// A band scale mapping ordered categories to band centers
///
/// The pixel range is split into one band per category. Positions resolve
/// to band centers, and the declared offset is half a band width, which
/// shifts bar origins back to the band start.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    cats: Vec<String>,
    range: [f32; 2],
}

impl Band {
    /// Create a band scale from an ordered category list and a pixel range
    ///
    /// Duplicate categories collapse to their first occurrence.
    pub fn new<I, S>(cats: I, range: [f32; 2]) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dedup: Vec<String> = Vec::new();
        for cat in cats {
            let cat = cat.into();
            if !dedup.contains(&cat) {
                dedup.push(cat);
            }
        }
        if dedup.is_empty() {
            return Err(Error::NoCategories);
        }
        Ok(Band { cats: dedup, range })
    }

    /// Iterate the categories in order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.cats.iter().map(|c| c.as_str())
    }

    /// The pixel width of one category band
    pub fn band_width(&self) -> f32 {
        (self.range[1] - self.range[0]) / self.cats.len() as f32
    }
}

impl Scale for Band {
    fn map_cat(&self, cat: &str) -> f32 {
        // unknown categories resolve to the first band
        let idx = self.cats.iter().position(|c| c == cat).unwrap_or(0);
        self.range[0] + (idx as f32 + 0.5) * self.band_width()
    }

    fn range(&self) -> Option<[f32; 2]> {
        Some(self.range)
    }

    fn offset(&self) -> f32 {
        self.band_width() / 2.0
    }
}

/// A scale backed by an arbitrary mapping function
///
/// Wraps a caller-constructed mapping with an explicit pixel range and
/// offset, for scales this crate does not provide.
pub struct FnScale<F> {
    f: F,
    range: Option<[f32; 2]>,
    offset: f32,
}

impl<F> FnScale<F>
where
    F: Fn(&Sample) -> f32,
{
    /// Create a scale from a mapping function, with no declared range
    /// and a zero offset
    pub fn new(f: F) -> Self {
        FnScale {
            f,
            range: None,
            offset: 0.0,
        }
    }

    /// Declare the pixel range and return self for chaining
    pub fn with_range(self, range: [f32; 2]) -> Self {
        Self {
            range: Some(range),
            ..self
        }
    }

    /// Set the pixel offset and return self for chaining
    pub fn with_offset(self, offset: f32) -> Self {
        Self { offset, ..self }
    }
}

impl<F> fmt::Debug for FnScale<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnScale")
            .field("range", &self.range)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl<F> Scale for FnScale<F>
where
    F: Fn(&Sample) -> f32,
{
    fn map_num(&self, num: f64) -> f32 {
        (self.f)(&Sample::Num(num))
    }

    fn map_cat(&self, cat: &str) -> f32 {
        (self.f)(&Sample::Cat(cat.to_string()))
    }

    fn map(&self, sample: &Sample) -> f32 {
        (self.f)(sample)
    }

    fn range(&self) -> Option<[f32; 2]> {
        self.range
    }

    fn offset(&self) -> f32 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Near, assert_near};

    #[test]
    fn linear_maps_domain_to_range() {
        let scale = Linear::new((0.0, 10.0), [0.0, 100.0]).unwrap();
        assert_near!(abs, scale.map_num(0.0), 0.0);
        assert_near!(abs, scale.map_num(5.0), 50.0);
        assert_near!(abs, scale.map_num(10.0), 100.0);
        assert_eq!(scale.range(), Some([0.0, 100.0]));
        assert_near!(abs, scale.offset(), 0.0);
    }

    #[test]
    fn linear_inverted_range() {
        // y scales usually run from the baseline at the bottom upwards
        let scale = Linear::new((0.0, 10.0), [100.0, 0.0]).unwrap();
        assert_near!(abs, scale.map_num(0.0), 100.0);
        assert_near!(abs, scale.map_num(10.0), 0.0);
    }

    #[test]
    fn linear_rejects_empty_domain() {
        assert_eq!(
            Linear::new((3.0, 3.0), [0.0, 100.0]),
            Err(Error::EmptyDomain)
        );
    }

    #[test]
    fn band_maps_categories_to_centers() {
        let scale = Band::new(["a", "b", "c", "d"], [0.0, 100.0]).unwrap();
        assert_near!(abs, scale.band_width(), 25.0);
        assert_near!(abs, scale.map_cat("a"), 12.5);
        assert_near!(abs, scale.map_cat("d"), 87.5);
        assert_near!(abs, scale.offset(), 12.5);
    }

    #[test]
    fn band_dedups_and_rejects_empty() {
        let scale = Band::new(["a", "b", "a"], [0.0, 90.0]).unwrap();
        assert_eq!(scale.categories().count(), 2);
        assert_near!(abs, scale.band_width(), 45.0);

        let empty: [&str; 0] = [];
        assert_eq!(Band::new(empty, [0.0, 90.0]), Err(Error::NoCategories));
    }

    #[test]
    fn band_unknown_category_maps_to_first_band() {
        let scale = Band::new(["a", "b"], [0.0, 100.0]).unwrap();
        assert_near!(abs, scale.map_cat("zzz"), 25.0);
    }

    #[test]
    fn fn_scale_dispatch() {
        let scale = FnScale::new(|s: &Sample| match s {
            Sample::Num(n) => *n as f32 * 2.0,
            Sample::Cat(_) => -1.0,
        })
        .with_range([0.0, 20.0])
        .with_offset(3.0);

        assert_near!(abs, scale.map_num(4.0), 8.0);
        assert_near!(abs, scale.map_cat("x"), -1.0);
        assert_eq!(scale.range(), Some([0.0, 20.0]));
        assert_near!(abs, scale.offset(), 3.0);
    }
}
