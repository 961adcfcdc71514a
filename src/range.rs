//! Scalar domain that values are normalized against.

use crate::{Error, Result};

/// A non-degenerate interval \[min, max\] of finite reals, together
/// with the reciprocal of its width.
///
/// The reciprocal is computed once here so that mapping a batch of
/// values against the same range performs no division per value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
    inverse_delta: f64, // 1 / (max - min), finite and > 0
}

impl ValueRange {
    /// Create the range \[`min`, `max`\].
    ///
    /// Fails with [`Error::DegenerateRange`] unless `min` and `max`
    /// are finite with `max > min`.
    ///
    /// # Example
    ///
    /// ```
    /// use colormap_lut::ValueRange;
    /// let r = ValueRange::new(0., 10.).unwrap();
    /// assert_eq!(r.inverse_delta(), 0.1);
    /// assert!(ValueRange::new(1., 1.).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self> {
        // Rejects NaN as well.
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(Error::DegenerateRange { min, max })
        }
        let inverse_delta = 1. / (max - min);
        // `max - min` may overflow for huge bounds.
        if !(inverse_delta.is_finite() && inverse_delta > 0.) {
            return Err(Error::DegenerateRange { min, max })
        }
        Ok(Self { min, max, inverse_delta })
    }

    /// Derive the range spanned by `values` with a single scan.
    ///
    /// Fails with [`Error::EmptyBatch`] if there are no values,
    /// [`Error::NotANumber`] on the first NaN and
    /// [`Error::DegenerateRange`] if all values are equal or some is
    /// infinite.
    pub fn spanning(values: &[f64]) -> Result<Self> {
        if values.is_empty() { return Err(Error::EmptyBatch) }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (index, &v) in values.iter().enumerate() {
            if v.is_nan() { return Err(Error::NotANumber { index }) }
            if v < min { min = v }
            if v > max { max = v }
        }
        Self::new(min, max)
    }

    #[inline]
    pub fn min(&self) -> f64 { self.min }

    #[inline]
    pub fn max(&self) -> f64 { self.max }

    /// `1 / (max - min)`.
    #[inline]
    pub fn inverse_delta(&self) -> f64 { self.inverse_delta }

    /// Whether `value` lies in \[min, max\].
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `value` mapped to \[0, 1\], values outside the range
    /// being clamped to its bounds.  `value` must not be NaN.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        debug_assert!(!value.is_nan());
        if value >= self.max { return 1. }
        if value <= self.min { return 0. }
        ((value - self.min) * self.inverse_delta).min(1.)
    }

    /// Returns the continuous index of `value` in a table of `n`
    /// entries, that is `(n - 1) * (value - min) / (max - min)`
    /// clamped to \[0, n - 1\].
    #[inline]
    pub fn position(&self, value: f64, n: usize) -> f64 {
        debug_assert!(n >= 2);
        let last = (n - 1) as f64;
        // The bounds are tested directly: `(max - min) * inverse_delta`
        // may round to either side of 1.
        if value >= self.max { return last }
        if value <= self.min { return 0. }
        (last * (value - self.min) * self.inverse_delta).min(last)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate() {
        for (a, b) in [(0., 0.), (1., 0.), (f64::NAN, 1.), (0., f64::NAN),
                       (0., f64::INFINITY), (f64::NEG_INFINITY, 0.),
                       (f64::MIN, f64::MAX)] {
            assert!(matches!(ValueRange::new(a, b),
                             Err(Error::DegenerateRange { .. })),
                    "[{a}, {b}] accepted");
        }
    }

    #[test]
    fn spanning() {
        let r = ValueRange::spanning(&[3., -1., 7., 2.]).unwrap();
        assert_eq!((r.min(), r.max()), (-1., 7.));
        assert_eq!(r.inverse_delta(), 0.125);
        assert_eq!(ValueRange::spanning(&[]), Err(Error::EmptyBatch));
        assert_eq!(ValueRange::spanning(&[2., 2.]),
                   Err(Error::DegenerateRange { min: 2., max: 2. }));
        assert_eq!(ValueRange::spanning(&[0., 1., f64::NAN]),
                   Err(Error::NotANumber { index: 2 }));
        assert!(ValueRange::spanning(&[0., f64::INFINITY]).is_err());
    }

    #[test]
    fn position_is_clamped() {
        let r = ValueRange::new(0., 10.).unwrap();
        assert_eq!(r.position(0., 4), 0.);
        assert_eq!(r.position(10., 4), 3.);
        assert_eq!(r.position(5., 4), 1.5);
        assert_eq!(r.position(-3., 4), 0.);
        assert_eq!(r.position(42., 4), 3.);
        assert_eq!(r.position(f64::INFINITY, 4), 3.);
        assert_eq!(r.position(f64::NEG_INFINITY, 4), 0.);
        assert_eq!(r.normalize(5.), 0.5);
        assert!(r.contains(10.) && !r.contains(10.5));
    }

    #[test]
    fn bounds_map_to_ends() {
        for &(a, b) in &[(0.1, 0.7), (-3.3, 1e-7), (1e-300, 3e-300),
                         (0.3, 0.30000000000000004)] {
            let r = ValueRange::new(a, b).unwrap();
            assert_eq!(r.position(b, 100), 99.);
            assert_eq!(r.position(a, 100), 0.);
            assert_eq!(r.normalize(b), 1.);
            assert!(r.position(0.5 * (a + b), 100) <= 99.);
        }
    }
}
