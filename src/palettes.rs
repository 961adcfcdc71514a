use lazy_static::lazy_static;
pub(crate) mod ty;
pub use ty::Colormap;
use crate::{table, Color, ColorRange, ColormapTable, Result};

/// Number of entries of the tables returned by [`Colormap::table`].
pub const NCOLORS: usize = 100;

// Degree 6 polynomials fitted to the Matplotlib colormaps (minimizing
// the maximum error), from https://www.shadertoy.com/view/WlfXRN (CC0).
// Coefficients of t⁰, …, t⁶ for the red, green and blue components.
type Coefs = [[f64; 3]; 7];

const MAGMA_COEFS: Coefs = [
    [-0.002136485053939, -0.000749655052795, -0.005386127855323],
    [0.2516605407371642, 0.6775232436837668, 2.494026599312351],
    [8.353717279216625, -3.577719514958484, 0.3144679030132573],
    [-27.66873308576866, 14.26473078096533, -13.64921318813922],
    [52.17613981234068, -27.94360607168351, 12.94416944238394],
    [-50.76852536473588, 29.04658282127291, 4.23415299384598],
    [18.65570506591883, -11.48977351997711, -5.601961508734096],
];

const INFERNO_COEFS: Coefs = [
    [0.00021894036911922, 0.0016510046310010, -0.019480898437091],
    [0.1065134194856116, 0.5639564367884091, 3.932712388889277],
    [11.60249308247187, -3.972853965665698, -15.9423941062914],
    [-41.70399613139459, 17.43639888205313, 44.35414519872813],
    [77.162935699427, -33.40235894210092, -81.80730925738993],
    [-71.31942824499214, 32.62606426397723, 73.20951985803202],
    [25.13112622477341, -12.24266895238567, -23.07032500287172],
];

const PLASMA_COEFS: Coefs = [
    [0.05873234392399702, 0.02333670892565664, 0.5433401826748754],
    [2.176514634195958, 0.2383834171260182, 0.7539604599784036],
    [-2.689460476458034, -7.455851135738909, 3.110799939717086],
    [6.130348345893603, 42.3461881477227, -28.51885465332158],
    [-11.10743619062271, -82.66631109428045, 60.13984767418263],
    [10.02306557647065, 71.41361770095349, -54.07218655560067],
    [-3.658713842777788, -22.93153465461149, 18.19190778539828],
];

const VIRIDIS_COEFS: Coefs = [
    [0.2777273272234177, 0.005407344544966578, 0.3340998053353061],
    [0.1050930431085774, 1.404613529898575, 1.384590162594685],
    [-0.3308618287255563, 0.214847559468213, 0.09509516302823659],
    [-4.634230498983486, -5.799100973351585, -19.33244095627987],
    [6.228269936347081, 14.17993336680509, 56.69055260068105],
    [4.776384997670288, -13.74514537774601, -65.35303263337234],
    [-5.435455855934631, 4.645852612178535, 26.3124352495832],
];

/// Evaluate the polynomial at `t` (Horner scheme), clamping the
/// components to \[0, 1\].
fn horner(c: &Coefs, t: f64) -> Color {
    let mut x = [0.; 3];
    for (k, xk) in x.iter_mut().enumerate() {
        *xk = c.iter().rev().fold(0_f64, |acc, ci| acc * t + ci[k])
            .clamp(0., 1.);
    }
    Color::new(x[0], x[1], x[2])
}

impl ColorRange for Colormap {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] (`t` is
    /// clamped to that interval).
    fn rgb(&self, t: f64) -> Color {
        let t = t.clamp(0., 1.);
        match self {
            Colormap::Magma => horner(&MAGMA_COEFS, t),
            Colormap::Inferno => horner(&INFERNO_COEFS, t),
            Colormap::Plasma => horner(&PLASMA_COEFS, t),
            Colormap::Viridis => horner(&VIRIDIS_COEFS, t),
        }
    }
}

fn sampled(c: Colormap) -> ColormapTable {
    ColormapTable { entries: table::sample(NCOLORS, |t| c.rgb(t)) }
}

lazy_static! {
    static ref MAGMA: ColormapTable = sampled(Colormap::Magma);
    static ref INFERNO: ColormapTable = sampled(Colormap::Inferno);
    static ref PLASMA: ColormapTable = sampled(Colormap::Plasma);
    static ref VIRIDIS: ColormapTable = sampled(Colormap::Viridis);
}

impl Colormap {
    /// Returns the table of [`NCOLORS`] samples of the colormap,
    /// with components in \[0, 1\].  It is built on first use and
    /// shared afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use colormap_lut::{Colormap, ValueRange};
    /// let range = ValueRange::new(-1., 1.)?;
    /// let c = Colormap::Magma.table().nearest(0.25, &range)?;
    /// # Ok::<(), colormap_lut::Error>(())
    /// ```
    pub fn table(self) -> &'static ColormapTable {
        match self {
            Colormap::Magma => &*MAGMA,
            Colormap::Inferno => &*INFERNO,
            Colormap::Plasma => &*PLASMA,
            Colormap::Viridis => &*VIRIDIS,
        }
    }
}

/// Returns the table of the colormap named `name` (case insensitive).
pub fn by_name(name: &str) -> Result<&'static ColormapTable> {
    name.parse::<Colormap>().map(Colormap::table)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn tables() {
        for c in Colormap::ALL {
            let t = c.table();
            assert_eq!(t.len(), NCOLORS);
            assert!(t.iter().all(|e| [e.r, e.g, e.b].iter()
                                 .all(|x| (0. ..= 1.).contains(x))));
            assert_eq!(t.first(), c.rgb(0.));
            assert_eq!(t.last(), c.rgb(1.));
            assert!(std::ptr::eq(t, c.table()));
        }
    }

    #[test]
    fn dark_to_bright() {
        let lum = |c: Color| 0.299 * c.r + 0.587 * c.g + 0.114 * c.b;
        for c in Colormap::ALL {
            let t = c.table();
            assert!(lum(t.first()) < 0.3 && lum(t.last()) > 0.7, "{c}");
        }
    }

    #[test]
    fn names() {
        for c in Colormap::ALL {
            assert_eq!(c.to_string().parse::<Colormap>(), Ok(c));
        }
        assert_eq!("VIRIDIS".parse::<Colormap>(), Ok(Colormap::Viridis));
        assert_eq!("jet".parse::<Colormap>(),
                   Err(Error::UnknownColormap("jet".to_string())));
        assert!(std::ptr::eq(by_name("Plasma").unwrap(), Colormap::Plasma.table()));
        assert!(by_name("").is_err());
    }
}
