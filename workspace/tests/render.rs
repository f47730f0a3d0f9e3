use std::fs;
use boxwf::{ BoxDomain, Field, Grid, Mode };
use lib::{ config::{ Config, PlotConfig }, render, sweep };
use tempfile::TempDir;

fn small_plot_config(dir: &TempDir) -> PlotConfig {
    PlotConfig {
        outdir: dir.path().to_path_buf(),
        width: 320,
        height: 280,
        levels: 6,
        ..PlotConfig::default()
    }
}

fn assert_svg(path: &std::path::Path) {
    let text = fs::read_to_string(path).unwrap();
    assert!(text.contains("<svg"), "{} is not an SVG", path.display());
    assert!(text.contains("</svg>"), "{} is truncated", path.display());
}

#[test]
fn contour_and_surface_are_written() {
    let dir = TempDir::new().unwrap();
    let opts = small_plot_config(&dir);
    let grid = Grid::new(BoxDomain::new(2.0, 1.0).unwrap(), 21).unwrap();
    let field = Field::compute(&grid, Mode::new(2, 1).unwrap());

    let contour = dir.path().join("c.svg");
    let surface = dir.path().join("s.svg");
    render::contour(&field, &contour, &opts).unwrap();
    render::surface(&field, &surface, &opts).unwrap();
    assert_svg(&contour);
    assert_svg(&surface);
    // one rectangle / polygon per cell
    let rects = fs::read_to_string(&contour).unwrap().matches("<rect").count();
    assert!(rects >= 20 * 20);
    let polys = fs::read_to_string(&surface).unwrap().matches("<polygon").count();
    assert!(polys >= 20 * 20);
}

#[test]
fn sweep_writes_every_requested_plot() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        modes: vec![[1, 1], [1, 2], [2, 1]],
        grid: lib::config::GridConfig { npts: 17 },
        plot: small_plot_config(&dir),
        ..Config::default()
    };
    let written = sweep::run(&config).unwrap();
    assert_eq!(written.len(), 6);
    for mode in config.modes().unwrap() {
        assert!(written.contains(&config.plot.contour_path(mode)));
        assert!(written.contains(&config.plot.surface_path(mode)));
    }
    written.iter().for_each(|path| assert_svg(path));
}

#[test]
fn sweep_respects_disabled_outputs() {
    let dir = TempDir::new().unwrap();
    let mut plot = small_plot_config(&dir);
    plot.surface = false;
    plot.prefix = "only".to_string();
    let config = Config {
        modes: vec![[3, 2]],
        grid: lib::config::GridConfig { npts: 13 },
        plot,
        ..Config::default()
    };
    let written = sweep::run(&config).unwrap();
    assert_eq!(written, vec![dir.path().join("only_3-2_contour.svg")]);
    assert!(!dir.path().join("only_3-2_surface.svg").exists());
}

#[test]
fn sweep_creates_output_directory() {
    let dir = TempDir::new().unwrap();
    let mut plot = small_plot_config(&dir);
    plot.outdir = dir.path().join("nested").join("figs");
    plot.contour = false;
    let config = Config {
        modes: vec![[1, 1]],
        grid: lib::config::GridConfig { npts: 9 },
        plot,
        ..Config::default()
    };
    let written = sweep::run(&config).unwrap();
    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with(dir.path().join("nested")));
    assert_svg(&written[0]);
}

#[test]
fn sweep_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        modes: vec![[0, 1]],
        plot: small_plot_config(&dir),
        ..Config::default()
    };
    assert!(sweep::run(&config).is_err());
}

#[test]
fn config_file_round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("box.toml");
    fs::write(
        &path,
        "modes = [[2, 2]]\n[domain]\nlx = 1.5\nly = 0.5\n[grid]\nnpts = 31\n",
    ).unwrap();
    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.domain().unwrap(), BoxDomain::new(1.5, 0.5).unwrap());
    assert_eq!(config.modes().unwrap(), vec![Mode::new(2, 2).unwrap()]);
    assert!(Config::from_file(dir.path().join("missing.toml")).is_err());
}
