//! SVG rendering of sampled fields.
//!
//! Amplitudes are drawn with a diverging blue–white–red map that is symmetric
//! about zero, so nodal lines show up white and the sign of ψ reads as colour.

use std::path::Path;
use anyhow::Result;
use boxwf::Field;
use plotters::prelude::*;
use tracing::info;
use crate::config::PlotConfig;

/// Map `t` in [0, 1] to a blue–white–red colour.
/// 0 -> blue, 0.5 -> white, 1 -> red.
pub fn diverging(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let r = (255.0 * (2.0 * t).min(1.0)) as u8;
    let b = (255.0 * (2.0 * (1.0 - t)).min(1.0)) as u8;
    let g = (255.0 * (1.0 - 2.0 * (t - 0.5).abs())) as u8;
    RGBColor(r, g, b)
}

/// Quantizes amplitudes in `[-vmax, vmax]` into a fixed number of bands.
#[derive(Copy, Clone, Debug)]
pub struct Bands {
    vmax: f64,
    levels: usize,
}

impl Bands {
    pub fn new(vmax: f64, levels: usize) -> Self {
        Self { vmax, levels: levels.max(1) }
    }

    /// Index of the band containing `v`, in `0..levels`.
    ///
    /// Values outside the range fall into the outermost bands; a zero range
    /// puts everything in the middle band.
    pub fn index(&self, v: f64) -> usize {
        if self.vmax <= 0.0 {
            return self.levels / 2;
        }
        let t = (v + self.vmax) / (2.0 * self.vmax);
        ((t * self.levels as f64).floor().max(0.0) as usize)
            .min(self.levels - 1)
    }

    /// Colour of the band containing `v`, taken at the band's center.
    pub fn color(&self, v: f64) -> RGBColor {
        let k = self.index(v);
        diverging((k as f64 + 0.5) / self.levels as f64)
    }
}

// mean of the four corners of cell (i, j)
fn cell_mean(v: &ndarray::Array2<f64>, i: usize, j: usize) -> f64 {
    (v[[i, j]] + v[[i + 1, j]] + v[[i, j + 1]] + v[[i + 1, j + 1]]) / 4.0
}

/// Draw a filled-contour plot of `field` to the SVG file at `path`.
pub fn contour(field: &Field, path: &Path, opts: &PlotConfig) -> Result<()> {
    let (x, y, v) = (field.x(), field.y(), field.values());
    let (lx, ly) = (field.domain().lx(), field.domain().ly());
    let bands = Bands::new(field.max_abs(), opts.levels);

    let root = SVGBackend::new(path, (opts.width, opts.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("ψ{}", field.mode()), ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..lx, 0.0..ly)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()?;

    let (ny, nx) = v.dim();
    chart.draw_series(
        (0..ny - 1).flat_map(|i| {
            (0..nx - 1).map(move |j| {
                let color = bands.color(cell_mean(v, i, j));
                Rectangle::new(
                    [(x[j], y[i]), (x[j + 1], y[i + 1])],
                    color.filled(),
                )
            })
        }),
    )?;

    root.present()?;
    info!("saved contour plot: {}", path.display());
    Ok(())
}

/// Draw a 3D surface plot of `field` to the SVG file at `path`.
///
/// The box lies in the horizontal plane with ψ on the vertical axis.
pub fn surface(field: &Field, path: &Path, opts: &PlotConfig) -> Result<()> {
    let (x, y, v) = (field.x(), field.y(), field.values());
    let (lx, ly) = (field.domain().lx(), field.domain().ly());
    let vmax = field.max_abs();
    let zr = if vmax > 0.0 { vmax } else { 1.0 };

    let root = SVGBackend::new(path, (opts.width, opts.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("ψ{}", field.mode()), ("sans-serif", 24))
        .margin(20)
        .build_cartesian_3d(0.0..lx, -zr..zr, 0.0..ly)?;

    chart.with_projection(|mut pb| {
        pb.yaw = opts.yaw;
        pb.pitch = opts.pitch;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    let (ny, nx) = v.dim();
    chart.draw_series(
        (0..ny - 1).flat_map(|i| {
            (0..nx - 1).map(move |j| {
                let t = (cell_mean(v, i, j) / zr + 1.0) / 2.0;
                Polygon::new(
                    vec![
                        (x[j], v[[i, j]], y[i]),
                        (x[j + 1], v[[i, j + 1]], y[i]),
                        (x[j + 1], v[[i + 1, j + 1]], y[i + 1]),
                        (x[j], v[[i + 1, j]], y[i + 1]),
                    ],
                    diverging(t).mix(0.9).filled(),
                )
            })
        }),
    )?;

    root.present()?;
    info!("saved surface plot: {}", path.display());
    Ok(())
}
