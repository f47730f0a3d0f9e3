use anyhow::Result;
use boxwf::{ energy, units, BoxDomain, DEF_EPSILON };
use clap::Parser;
use lib::logging;

// list the energy levels of a box, marking degenerate ones

#[derive(Parser, Debug)]
#[command(version, about = "List energy levels of a particle in a 2D box")]
struct Cli {
    /// Box length along x
    #[arg(long, default_value_t = 1.0)]
    lx: f64,

    /// Box length along y
    #[arg(long, default_value_t = 1.0)]
    ly: f64,

    /// Largest mode number to enumerate along each axis
    #[arg(short, long, default_value_t = 6)]
    nmax: u32,

    /// Number of levels to print
    #[arg(short, long, default_value_t = 15)]
    count: usize,

    /// Also print energies for an electron with lengths in nanometers
    #[arg(long)]
    ev: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, false, None)?;

    let domain = BoxDomain::new(cli.lx, cli.ly)?;
    let levels = energy::levels(&domain, cli.nmax, DEF_EPSILON)?;
    let uu = units::Units::from_mks(units::me, 1e-9);

    println!("box: {} × {}", domain.lx(), domain.ly());
    for (k, level) in levels.iter().take(cli.count).enumerate() {
        let modes: Vec<String>
            = level.modes.iter().map(|m| m.to_string()).collect();
        let mut line = format!("{:>3}  E = {:>10.4}", k, level.energy);
        if cli.ev {
            line += &format!("  ({:.5} eV)", uu.to_ev(level.energy));
        }
        line += &format!("  {}", modes.join(" "));
        if level.is_degenerate() {
            line += &format!("  [g = {}]", level.degeneracy());
        }
        println!("{}", line);
    }
    Ok(())
}
