//! The mode sweep: compute each configured field once and render it.

use std::{ fs, path::PathBuf };
use anyhow::{ Context, Result };
use boxwf::{ energy::energy, Field, Grid };
use tracing::{ debug, info, warn };
use crate::{ config::Config, render };

// sampled norms further than this from 1 are reported
const NORM_TOL: f64 = 1e-6;

/// Compute and plot every mode in `config`, returning the paths of all images
/// written.
pub fn run(config: &Config) -> Result<Vec<PathBuf>> {
    config.validate()?;
    let domain = config.domain()?;
    let grid = Grid::new(domain, config.grid.npts)?;
    let modes = config.modes()?;
    let opts = &config.plot;

    fs::create_dir_all(&opts.outdir)
        .with_context(|| {
            format!("failed to create output directory '{}'",
                opts.outdir.display())
        })?;

    let mut written: Vec<PathBuf> = Vec::new();
    for mode in modes.into_iter() {
        let field = Field::compute(&grid, mode);
        let norm = field.norm();
        info!(
            "mode {}: E = {:.4}, max |ψ| = {:.4}, norm = {:.8}",
            mode,
            energy(&domain, mode),
            field.max_abs(),
            norm,
        );
        if (norm - 1.0).abs() > NORM_TOL {
            warn!("mode {} has sampled norm {:.8}; grid may be too coarse",
                mode, norm);
        }
        if opts.contour {
            let path = opts.contour_path(mode);
            render::contour(&field, &path, opts)
                .with_context(|| {
                    format!("failed to render '{}'", path.display())
                })?;
            written.push(path);
        }
        if opts.surface {
            let path = opts.surface_path(mode);
            render::surface(&field, &path, opts)
                .with_context(|| {
                    format!("failed to render '{}'", path.display())
                })?;
            written.push(path);
        }
    }
    debug!("wrote {} files", written.len());
    Ok(written)
}
