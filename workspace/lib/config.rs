//! TOML configuration for the plotting sweep.
//!
//! ```toml
//! modes = [[1, 1], [1, 2], [2, 1], [2, 2], [3, 2]]
//!
//! [domain]
//! lx = 1.0
//! ly = 1.0
//!
//! [grid]
//! npts = 101
//!
//! [plot]
//! outdir = "output"
//! levels = 20
//! ```
//!
//! Everything but `[domain]` may be omitted.

use std::{ fs, path::{ Path, PathBuf }, str::FromStr };
use anyhow::{ bail, Context, Result };
use boxwf::{ BoxDomain, Mode };
use serde::{ Deserialize, Serialize };
use tracing::info;

/// Box dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    pub lx: f64,
    pub ly: f64,
}

impl DomainConfig {
    fn validate(&self) -> Result<()> {
        BoxDomain::new(self.lx, self.ly)?;
        Ok(())
    }
}

/// Sampling grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_npts")]
    pub npts: usize,
}

fn default_npts() -> usize { 101 }

impl Default for GridConfig {
    fn default() -> Self { Self { npts: default_npts() } }
}

impl GridConfig {
    fn validate(&self) -> Result<()> {
        if self.npts < 2 {
            bail!("grid must have at least 2 points per axis, got {}", self.npts);
        }
        Ok(())
    }
}

/// Output images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub outdir: PathBuf,
    pub prefix: String,
    pub width: u32,
    pub height: u32,
    /// Number of colour bands in contour plots.
    pub levels: usize,
    pub contour: bool,
    pub surface: bool,
    /// Rotation of surface plots about the vertical axis (radians).
    pub yaw: f64,
    /// Elevation of the surface plot viewpoint (radians).
    pub pitch: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from("output"),
            prefix: "box".to_string(),
            width: 800,
            height: 700,
            levels: 20,
            contour: true,
            surface: true,
            yaw: 0.6,
            pitch: 0.35,
        }
    }
}

impl PlotConfig {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "image dimensions must be positive (width={}, height={})",
                self.width,
                self.height,
            );
        }
        if self.levels < 2 {
            bail!("contour plots need at least 2 levels, got {}", self.levels);
        }
        if !(self.contour || self.surface) {
            bail!("at least one of `contour` and `surface` must be enabled");
        }
        if self.prefix.is_empty() {
            bail!("file name prefix must not be empty");
        }
        Ok(())
    }

    /// Path of the contour image for `mode`.
    pub fn contour_path(&self, mode: Mode) -> PathBuf {
        self.outdir.join(
            format!("{}_{}-{}_contour.svg", self.prefix, mode.nx(), mode.ny()))
    }

    /// Path of the surface image for `mode`.
    pub fn surface_path(&self, mode: Mode) -> PathBuf {
        self.outdir.join(
            format!("{}_{}-{}_surface.svg", self.prefix, mode.nx(), mode.ny()))
    }
}

fn default_modes() -> Vec<[u32; 2]> {
    vec![[1, 1], [1, 2], [2, 1], [2, 2], [3, 2]]
}

/// Complete sweep configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_modes")]
    pub modes: Vec<[u32; 2]>,
    pub domain: DomainConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub plot: PlotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modes: default_modes(),
            domain: DomainConfig { lx: 1.0, ly: 1.0 },
            grid: GridConfig::default(),
            plot: PlotConfig::default(),
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)
            .context("failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Load and validate a configuration from a TOML file.
    pub fn from_file<P>(path: P) -> Result<Self>
    where P: AsRef<Path>
    {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| {
                format!("failed to read config file '{}'", path.display())
            })?;
        content.parse::<Self>()
            .with_context(|| format!("invalid config '{}'", path.display()))
    }

    /// Check every section, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.domain.validate()?;
        self.grid.validate()?;
        self.plot.validate()?;
        if self.modes.is_empty() {
            bail!("at least one mode must be given");
        }
        self.modes()?;
        Ok(())
    }

    pub fn domain(&self) -> Result<BoxDomain> {
        Ok(BoxDomain::new(self.domain.lx, self.domain.ly)?)
    }

    pub fn modes(&self) -> Result<Vec<Mode>> {
        self.modes.iter()
            .map(|&n| Mode::try_from(n).map_err(anyhow::Error::from))
            .collect()
    }

    /// Log a summary of the configuration.
    pub fn log_summary(&self) {
        info!("box: {} × {}", self.domain.lx, self.domain.ly);
        info!("grid: {} points per axis", self.grid.npts);
        info!(
            "modes: {}",
            self.modes.iter()
                .map(|n| format!("({}, {})", n[0], n[1]))
                .collect::<Vec<_>>()
                .join(" "),
        );
        info!(
            "output: {} (contour: {}, surface: {})",
            self.plot.outdir.display(),
            self.plot.contour,
            self.plot.surface,
        );
    }
}

/// Parse a mode pair written as `nx,ny`, for use on the command line.
pub fn parse_mode(s: &str) -> std::result::Result<[u32; 2], String> {
    let parse = |t: &str| {
        t.trim().parse::<u32>()
            .map_err(|e| format!("invalid mode number '{}': {}", t.trim(), e))
    };
    let (nx, ny) = s.split_once(',')
        .ok_or_else(|| format!("expected a mode as `nx,ny`, got '{}'", s))?;
    let n = [parse(nx)?, parse(ny)?];
    Mode::try_from(n).map_err(|e| e.to_string())?;
    Ok(n)
}
