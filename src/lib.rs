//! Colormap lookup tables.
//!
//! A [`ColormapTable`] samples a continuous color function
//! ([`ColorRange`]) at evenly spaced parameters of \[0, 1\].  Scalar
//! values are then mapped to colors against a [`ValueRange`], either
//! by interpolating between neighbouring entries or by picking the
//! nearest one (see [`Mapping`]), one value at a time or by batches.
//!
//! The Matplotlib [`Colormap`]s magma, inferno, plasma and viridis
//! come with ready made tables of [`NCOLORS`] entries.
//!
//! ```
//! use colormap_lut::{Colormap, Mapping};
//! let curvature = [0.12, -0.4, 0.9, 0.33];
//! let colors = Colormap::Inferno.table()
//!     .colors(&curvature, Mapping::Interpolated)?;
//! let vertex_colors = colormap_lut::flatten(&colors);
//! assert_eq!(vertex_colors.len(), 3 * curvature.len());
//! # Ok::<(), colormap_lut::Error>(())
//! ```

use rgb::{RGB, RGB8};

mod error;
mod mapper;
mod palettes;
mod range;
mod table;

pub use error::{Error, Result};
pub use mapper::{flatten, Mapping};
pub use palettes::{by_name, Colormap, NCOLORS};
pub use range::ValueRange;
pub use table::ColormapTable;

/// RGB color with real components.  Tables produced by this crate
/// have components in \[0, 1\] but mapping works with any scale.
pub type Color = RGB<f64>;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return the lookup table sampling the colors at the `n`
    /// parameters `i / (n - 1)`, `i = 0, …, n - 1`.  Fails if `n < 2`.
    ///
    /// # Example
    ///
    /// ```
    /// use colormap_lut::{ColorRange, Hue};
    /// let t = Hue.table(7)?;
    /// assert_eq!(t.first(), t.last()); // red
    /// # Ok::<(), colormap_lut::Error>(())
    /// ```
    fn table(&self, n: usize) -> Result<ColormapTable> {
        ColormapTable::from_fn(n, |t| self.rgb(t))
    }
}

/// The hue circle, from red through yellow, green, cyan, blue and
/// magenta back to red, at full saturation.  Components in \[0, 1\].
#[derive(Clone, Copy, Debug)]
pub struct Hue;

impl ColorRange for Hue {
    fn rgb(&self, t: f64) -> Color {
        let t = 6. * t;
        let f = t.fract();
        let ti = t.trunc().rem_euclid(6.);
        if ti == 0.      { Color::new(1., f, 0.) }
        else if ti == 1. { Color::new(1. - f, 1., 0.) }
        else if ti == 2. { Color::new(0., 1., f) }
        else if ti == 3. { Color::new(0., 1. - f, 1.) }
        else if ti == 4. { Color::new(f, 0., 1.) }
        else             { Color::new(1., 0., 1. - f) }
    }
}

/// Convert a color with components in \[0, 1\] to 8 bits per
/// component (components outside \[0, 1\] are clamped).
#[inline]
pub fn to_rgb8(c: Color) -> RGB8 {
    let q = |x: f64| (255. * x.clamp(0., 1.)).round() as u8;
    RGB8 { r: q(c.r), g: q(c.g), b: q(c.b) }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_table() {
        let t = Hue.table(13).unwrap();
        for (i, c) in t.iter().enumerate() {
            assert_eq!(*c, Hue.rgb(t.param(i)));
        }
        assert_eq!(t[0], Color::new(1., 0., 0.));
        assert_eq!(t[4], Color::new(0., 1., 0.));
        assert_eq!(t[8], Color::new(0., 0., 1.));
        assert_eq!(t[12], Color::new(1., 0., 0.));
        assert_eq!(Hue.table(1), Err(Error::InvalidTableSize(1)));
    }

    #[test]
    fn hue_interpolation() {
        // Between red and yellow.
        let t = Hue.table(7).unwrap();
        let range = ValueRange::new(0., 6.).unwrap();
        let c = t.interpolated(0.6, &range).unwrap();
        assert!((c.r - 1.).abs() < 1e-12 && (c.g - 0.6).abs() < 1e-12
                && c.b == 0., "{c:?}");
        assert_eq!(t.nearest(0.6, &range).unwrap(), t[1]);
        assert_eq!(t.nearest(0.4, &range).unwrap(), t[0]);
    }

    #[test]
    fn rgb8() {
        assert_eq!(to_rgb8(Color::new(0., 0.5, 1.)), RGB8::new(0, 128, 255));
        assert_eq!(to_rgb8(Color::new(-0.2, 1.7, 0.2)), RGB8::new(0, 255, 51));
    }
}
