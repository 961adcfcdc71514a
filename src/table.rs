//! Discrete sampling of a colormap.

use std::ops::Index;
use crate::{Color, Error, Result};

/// A fixed-size lookup table sampling a colormap at evenly spaced
/// parameters covering \[0, 1\].
///
/// Entry `i` is the color at parameter `i / (len - 1)`.  A table
/// holds at least 2 entries, so there is always a pair of neighbours
/// to interpolate between.
#[derive(Clone, Debug, PartialEq)]
pub struct ColormapTable {
    pub(crate) entries: Vec<Color>, // Invariant: length ≥ 2
}

/// Evaluate `f` at `n` evenly spaced points of \[0, 1\], bounds
/// included.  Requires `n ≥ 2`.
pub(crate) fn sample(n: usize, f: impl Fn(f64) -> Color) -> Vec<Color> {
    debug_assert!(n >= 2);
    let last = (n - 1) as f64;
    (0 .. n).map(|i| {
        // Compute the last parameter as exactly 1.
        if i == n - 1 { f(1.) } else { f(i as f64 / last) }
    }).collect()
}

impl ColormapTable {
    /// Create a table from already sampled colors.
    ///
    /// # Example
    ///
    /// ```
    /// use colormap_lut::{Color, ColormapTable};
    /// let bw = ColormapTable::new(vec![Color::new(0., 0., 0.),
    ///                                  Color::new(1., 1., 1.)]).unwrap();
    /// assert_eq!(bw.len(), 2);
    /// assert!(ColormapTable::new(vec![Color::new(0., 0., 0.)]).is_err());
    /// ```
    pub fn new(entries: Vec<Color>) -> Result<Self> {
        if entries.len() < 2 {
            return Err(Error::InvalidTableSize(entries.len()))
        }
        Ok(Self { entries })
    }

    /// Sample the continuous color function `f` at the `n` parameters
    /// `i / (n - 1)`, `i = 0, …, n - 1`, in that order.  No smoothing
    /// is applied: every entry is the exact value of `f`.
    ///
    /// Fails with [`Error::InvalidTableSize`] when `n < 2`, without
    /// calling `f`.
    pub fn from_fn(n: usize, f: impl Fn(f64) -> Color) -> Result<Self> {
        if n < 2 { return Err(Error::InvalidTableSize(n)) }
        Ok(Self { entries: sample(n, f) })
    }

    /// Number of entries (always ≥ 2).
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.entries.len() }

    /// The sampled colors, in parameter order.
    #[inline]
    pub fn entries(&self) -> &[Color] { &self.entries }

    /// Returns the `i`th entry, if any.
    #[inline]
    pub fn get(&self, i: usize) -> Option<Color> {
        self.entries.get(i).copied()
    }

    /// The color at parameter 0.
    #[inline]
    pub fn first(&self) -> Color { self.entries[0] }

    /// The color at parameter 1.
    #[inline]
    pub fn last(&self) -> Color { self.entries[self.entries.len() - 1] }

    /// The parameter in \[0, 1\] at which entry `i` was sampled.
    #[inline]
    pub fn param(&self, i: usize) -> f64 {
        i as f64 / (self.entries.len() - 1) as f64
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.entries.iter()
    }
}

impl Index<usize> for ColormapTable {
    type Output = Color;

    #[inline]
    fn index(&self, i: usize) -> &Color { &self.entries[i] }
}

impl<'a> IntoIterator for &'a ColormapTable {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

impl TryFrom<Vec<Color>> for ColormapTable {
    type Error = Error;

    fn try_from(entries: Vec<Color>) -> Result<Self> { Self::new(entries) }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn too_small() {
        assert_eq!(ColormapTable::new(vec![]), Err(Error::InvalidTableSize(0)));
        let calls = Cell::new(0);
        let t = ColormapTable::from_fn(1, |_| {
            calls.set(calls.get() + 1);
            Color::new(0., 0., 0.) });
        assert_eq!(t, Err(Error::InvalidTableSize(1)));
        assert_eq!(calls.get(), 0, "f called for an invalid size");
    }

    #[test]
    fn samples_in_order() {
        let t = ColormapTable::from_fn(5, |t| Color::new(t, 1. - t, 0.))
            .unwrap();
        assert_eq!(t.len(), 5);
        for (i, c) in t.iter().enumerate() {
            assert_eq!(c.r, t.param(i));
            assert_eq!(c.g, 1. - t.param(i));
        }
        assert_eq!(t.first(), Color::new(0., 1., 0.));
        assert_eq!(t.last(), Color::new(1., 0., 0.));
        assert_eq!(t[2], Color::new(0.5, 0.5, 0.));
        assert_eq!(t.get(5), None);
    }

    #[test]
    fn last_param_is_one() {
        for n in 2 .. 300 {
            let t = ColormapTable::from_fn(n, |t| Color::new(t, t, t))
                .unwrap();
            assert_eq!(t.last().r, 1.);
            assert_eq!(t.param(n - 1), 1.);
        }
    }
}
