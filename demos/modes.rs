use boxwf::{ domain::{ BoxDomain, Mode }, energy, grid::Grid, units, Field };

// sample the lowest few states of an electron in a 2 nm × 1 nm box and report
// their energies and sampled norms

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    const LENGTH_SCALE: f64 = 1e-9; // m
    let uu = units::Units::from_mks(units::me, LENGTH_SCALE);

    let domain = BoxDomain::new(2.0, 1.0)?;
    let grid = Grid::new(domain, 201)?;
    let levels = energy::levels(&domain, 4, boxwf::DEF_EPSILON)?;

    println!("{:>10} {:>12} {:>12} {:>10}", "mode", "E (nat)", "E (eV)", "norm");
    for level in levels.iter().take(8) {
        for &mode in level.modes.iter() {
            let field = Field::compute(&grid, mode);
            println!(
                "{:>10} {:>12.4} {:>12.5} {:>10.6}",
                mode.to_string(),
                level.energy,
                uu.to_ev(level.energy),
                field.norm(),
            );
        }
    }

    // the ground state peaks at the center of the box
    let center = boxwf::wavefunction::amplitude(
        &domain, Mode::ground(), domain.lx() / 2.0, domain.ly() / 2.0);
    println!("ψ₁₁(center) = {:.6} nm⁻¹", center);
    Ok(())
}
