use std::{fmt, str::FromStr};
use crate::Error;

/// Perceptually uniform colormaps from Matplotlib.
///
/// Each colormap is both a continuous [`ColorRange`][crate::ColorRange]
/// and a lookup table of [`NCOLORS`][crate::NCOLORS] samples, see
/// [`Colormap::table`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colormap {
    /// Black, purple, orange to light yellow.
    Magma,
    /// Black, purple, orange to bright yellow.
    Inferno,
    /// Dark blue, magenta, orange to yellow.
    Plasma,
    /// Dark purple, blue, green to yellow.
    Viridis,
}

impl Colormap {
    pub const ALL: [Colormap; 4] = [Colormap::Magma, Colormap::Inferno,
                                    Colormap::Plasma, Colormap::Viridis];

    /// Lowercase name, as used by Matplotlib.
    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Magma => "magma",
            Colormap::Inferno => "inferno",
            Colormap::Plasma => "plasma",
            Colormap::Viridis => "viridis",
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = Error;

    /// Parse a colormap name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Error> {
        Colormap::ALL.into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownColormap(s.to_string()))
    }
}
