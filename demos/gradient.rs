//! Write `gradient.html` showing every colormap, sampled by both
//! mapping strategies, and a synthetic scalar field colored with it.

use std::{io::{BufWriter, Write},
          fs::File,
          error::Error};
use colormap_lut::{to_rgb8, Color, ColorRange, ColormapTable, Colormap,
                   Hue, Mapping, ValueRange};

type Err = Box<dyn Error>;

fn css_string(c: Color) -> String {
    let c = to_rgb8(c);
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[Color],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

/// Map `n` evenly spaced values of \[0, 1\] through `table`.
fn ramp(fh: &mut impl Write, table: &ColormapTable, mapping: Mapping,
        n: usize, width: u32, comment: &str) -> Result<(), Err> {
    let values: Vec<f64> = (0 .. n).map(|i| i as f64 / (n - 1) as f64)
        .collect();
    let colors = table.colors_in(&values, 0., 1., mapping)?;
    table_of_colors(fh, &colors, width, comment)
}

/// A vortex-like scalar field on a `n`×`n` grid, one row per line.
fn field(fh: &mut impl Write, table: &ColormapTable,
         n: usize) -> Result<(), Err> {
    let values: Vec<f64> = (0 .. n * n).map(|k| {
        let x = (k % n) as f64 / n as f64 - 0.5;
        let y = (k / n) as f64 / n as f64 - 0.5;
        (8. * x.hypot(y)).sin() * (-3. * (x * x + y * y)).exp()
    }).collect();
    // One range for the whole grid, shared by every row.
    let range = ValueRange::spanning(&values)?;
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\">")?;
    for row in values.chunks(n) {
        writeln!(fh, "<tr>")?;
        for c in table.colors_with(row, &range, Mapping::Interpolated)? {
            writeln!(fh, "  <td style=\"width: 4px; height: 4px; \
                          background-color: {}\"></td>", css_string(c))?;
        }
        writeln!(fh, "</tr>")?;
    }
    writeln!(fh, "</table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("gradient.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>colormap-lut: colormaps</title>\n\
                  </head>\n\
                  <body>")?;
    writeln!(fh, "<h3>Hue</h3>")?;
    let hue = Hue.table(7)?;
    table_of_colors(&mut fh, hue.entries(), 43, "7 samples")?;
    ramp(&mut fh, &hue, Mapping::Interpolated, 150, 1, "interpolated")?;

    for c in Colormap::ALL {
        writeln!(fh, "<h3>{c}</h3>")?;
        let t = c.table();
        ramp(&mut fh, t, Mapping::Nearest, 12, 25, "nearest (12 values)")?;
        ramp(&mut fh, t, Mapping::Interpolated, 12, 25,
             "interpolated (12 values)")?;
        ramp(&mut fh, t, Mapping::Interpolated, 300, 1,
             "interpolated (300 values)")?;
        field(&mut fh, t, 64)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
