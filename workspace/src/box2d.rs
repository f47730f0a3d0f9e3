use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use lib::{ config::{ self, Config }, logging, sweep };
use tracing::{ debug, info };

// render contour and surface plots of particle-in-a-box eigenstates for a
// sweep of mode pairs

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Plot stationary states of a particle in a 2D rectangular box",
)]
struct Cli {
    /// TOML configuration file; built-in defaults are used if omitted
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the number of grid points per axis
    #[arg(short, long, value_name = "N")]
    npts: Option<usize>,

    /// Override the output directory
    #[arg(short, long, value_name = "DIR")]
    outdir: Option<PathBuf>,

    /// Override the mode list; repeat for several, e.g. `-m 1,1 -m 2,1`
    #[arg(short, long = "mode", value_name = "NX,NY", value_parser = config::parse_mode)]
    modes: Vec<[u32; 2]>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Write logs to a file in addition to stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;
    debug!("parsed arguments: {:?}", cli);

    let mut config
        = match cli.config.as_ref() {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
    if let Some(npts) = cli.npts { config.grid.npts = npts; }
    if let Some(outdir) = cli.outdir { config.plot.outdir = outdir; }
    if !cli.modes.is_empty() { config.modes = cli.modes; }
    config.validate()?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    config.log_summary();
    let written = sweep::run(&config)?;
    info!("done; {} files written", written.len());
    written.iter().for_each(|path| println!("{}", path.display()));
    Ok(())
}
