//! Mapping scalar values to colors through a [`ColormapTable`].
//!
//! Values outside the range they are mapped against are clamped to
//! its bounds, by both strategies and for single values as well as
//! batches.  NaN values are rejected.

use crate::{Color, ColormapTable, Error, Result, ValueRange};

/// How a value falling between two table entries gets its color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mapping {
    /// Linear blend of the two neighbouring entries.
    #[default]
    Interpolated,
    /// The closest entry, unmodified (ties go to the upper entry).
    Nearest,
}

/// Returns `c0 * (1 - frac) + c1 * frac`.
#[inline]
fn lerp(c0: Color, c1: Color, frac: f64) -> Color {
    let w0 = 1. - frac;
    Color { r: c0.r * w0 + c1.r * frac,
            g: c0.g * w0 + c1.g * frac,
            b: c0.b * w0 + c1.b * frac }
}

#[inline]
fn check(value: f64, index: usize) -> Result<f64> {
    if value.is_nan() { Err(Error::NotANumber { index }) } else { Ok(value) }
}

/// # Value mapping
///
/// All methods borrow the table read-only; a table can be shared by
/// any number of threads mapping concurrently.
impl ColormapTable {
    #[inline]
    fn interpolated_unchecked(&self, value: f64, range: &ValueRange) -> Color {
        let n = self.entries.len();
        let t = range.position(value, n);
        // `t == n - 1` (value at max) would otherwise need entry `n`.
        let i0 = (t.floor() as usize).min(n - 2);
        let frac = t - i0 as f64;
        lerp(self.entries[i0], self.entries[i0 + 1], frac)
    }

    #[inline]
    fn nearest_unchecked(&self, value: f64, range: &ValueRange) -> Color {
        let n = self.entries.len();
        let t = range.position(value, n);
        let i = ((t + 0.5).floor() as usize).min(n - 1);
        self.entries[i]
    }

    #[inline]
    fn color_unchecked(&self, value: f64, range: &ValueRange,
                       mapping: Mapping) -> Color {
        match mapping {
            Mapping::Interpolated => self.interpolated_unchecked(value, range),
            Mapping::Nearest => self.nearest_unchecked(value, range),
        }
    }

    /// Returns the color of `value` reconstructed by linear
    /// interpolation between the two entries surrounding it.
    ///
    /// With `t` the position of `value` in the table, the entry
    /// `⌊t⌋` is weighted by `1 - frac` and the next one by `frac`,
    /// where `frac = t - ⌊t⌋`, so the entry `t` is closer to dominates.
    /// `range.min()` and `range.max()` give exactly the first and last
    /// entries.
    ///
    /// # Example
    ///
    /// ```
    /// use colormap_lut::{Color, ColormapTable, ValueRange};
    /// let t = ColormapTable::new(vec![Color::new(0., 0., 0.),
    ///                                 Color::new(1., 0., 0.),
    ///                                 Color::new(0., 1., 0.),
    ///                                 Color::new(0., 0., 1.)])?;
    /// let range = ValueRange::new(0., 10.)?;
    /// assert_eq!(t.interpolated(5., &range)?, Color::new(0.5, 0.5, 0.));
    /// # Ok::<(), colormap_lut::Error>(())
    /// ```
    pub fn interpolated(&self, value: f64, range: &ValueRange) -> Result<Color> {
        let value = check(value, 0)?;
        Ok(self.interpolated_unchecked(value, range))
    }

    /// Returns the entry closest to `value` (rounding half up), without
    /// any blending.
    ///
    /// # Example
    ///
    /// ```
    /// use colormap_lut::{Color, ColormapTable, ValueRange};
    /// let t = ColormapTable::new(vec![Color::new(0., 0., 0.),
    ///                                 Color::new(1., 0., 0.),
    ///                                 Color::new(0., 1., 0.),
    ///                                 Color::new(0., 0., 1.)])?;
    /// let range = ValueRange::new(0., 10.)?;
    /// assert_eq!(t.nearest(5., &range)?, Color::new(0., 1., 0.));
    /// # Ok::<(), colormap_lut::Error>(())
    /// ```
    pub fn nearest(&self, value: f64, range: &ValueRange) -> Result<Color> {
        let value = check(value, 0)?;
        Ok(self.nearest_unchecked(value, range))
    }

    /// Returns the color of `value` using the given strategy.
    pub fn color(&self, value: f64, range: &ValueRange,
                 mapping: Mapping) -> Result<Color> {
        let value = check(value, 0)?;
        Ok(self.color_unchecked(value, range, mapping))
    }

    /// Map every value, against the range they span.
    ///
    /// The range is derived by one scan over `values` before any
    /// value is mapped.  An empty slice gives an empty vector.  Fails
    /// if some value is NaN or if the values do not span a
    /// non-degenerate range (e.g. they are all equal).
    ///
    /// # Example
    ///
    /// ```
    /// use colormap_lut::{Colormap, Mapping};
    /// let colors = Colormap::Viridis.table()
    ///     .colors(&[0.3, 1.2, -0.5, 0.8], Mapping::Interpolated)?;
    /// assert_eq!(colors.len(), 4);
    /// assert_eq!(colors[2], Colormap::Viridis.table().first());
    /// assert_eq!(colors[1], Colormap::Viridis.table().last());
    /// # Ok::<(), colormap_lut::Error>(())
    /// ```
    pub fn colors(&self, values: &[f64], mapping: Mapping) -> Result<Vec<Color>> {
        if values.is_empty() { return Ok(vec![]) }
        let range = ValueRange::spanning(values)?;
        self.colors_with(values, &range, mapping)
    }

    /// Map every value against \[`min`, `max`\].  The reciprocal of the
    /// range width is computed once for the whole batch.
    pub fn colors_in(&self, values: &[f64], min: f64, max: f64,
                     mapping: Mapping) -> Result<Vec<Color>> {
        let range = ValueRange::new(min, max)?;
        self.colors_with(values, &range, mapping)
    }

    /// Map every value against a range built beforehand, for example
    /// a global range shared by several batches.
    pub fn colors_with(&self, values: &[f64], range: &ValueRange,
                       mapping: Mapping) -> Result<Vec<Color>> {
        values.iter().enumerate()
            .map(|(i, &v)| -> Result<Color> {
                Ok(self.color_unchecked(check(v, i)?, range, mapping))
            })
            .collect()
    }
}

#[cfg(feature = "rayon")]
mod parallel {
    use rayon::prelude::*;
    use super::*;

    /// # Parallel value mapping
    ///
    /// Same results as the sequential methods.  The range is fixed
    /// before the work is split, so every value of a batch is colored
    /// against the same scale.
    impl ColormapTable {
        /// Parallel version of [`ColormapTable::colors`].
        pub fn par_colors(&self, values: &[f64],
                          mapping: Mapping) -> Result<Vec<Color>> {
            if values.is_empty() { return Ok(vec![]) }
            let range = ValueRange::spanning(values)?;
            self.par_colors_with(values, &range, mapping)
        }

        /// Parallel version of [`ColormapTable::colors_in`].
        pub fn par_colors_in(&self, values: &[f64], min: f64, max: f64,
                             mapping: Mapping) -> Result<Vec<Color>> {
            let range = ValueRange::new(min, max)?;
            self.par_colors_with(values, &range, mapping)
        }

        /// Parallel version of [`ColormapTable::colors_with`].
        pub fn par_colors_with(&self, values: &[f64], range: &ValueRange,
                               mapping: Mapping) -> Result<Vec<Color>> {
            values.par_iter().enumerate()
                .map(|(i, &v)| -> Result<Color> {
                    Ok(self.color_unchecked(check(v, i)?, range, mapping))
                })
                .collect()
        }
    }
}

/// Returns the components of `colors` interleaved as
/// `[r0, g0, b0, r1, g1, b1, …]`, the layout expected by vertex
/// color buffers.
pub fn flatten(colors: &[Color]) -> Vec<f64> {
    let mut v = Vec::with_capacity(3 * colors.len());
    for c in colors {
        v.extend_from_slice(&[c.r, c.g, c.b]);
    }
    v
}
