use std::path::PathBuf;
use anyhow::Context;
use log::info;
use plotly::{ Layout, Plot, Scatter, common::{ Mode, Title }, layout::Axis };
use boxwell::{
    params::{ NumericalParameters, PhysicalConstants, Shot },
    report::{ self, LevelTable, PlotLabels },
    solve::Well,
    DEF_SCALE_FACTOR,
};

// find the lowest few eigenstates of a particle in a box, in natural units
// (ħ = m = a = 1)

const HBAR: f64 = 1.0;
const MASS: f64 = 1.0;
const WIDTH: f64 = 1.0;
const POTENTIAL: f64 = 0.0;

const DX: f64 = WIDTH * 0.01;
const DE: f64 = 0.01;
const COUNT: usize = 4;
const TOLERANCE: f64 = 1e-3;
const GROWTH: f64 = 1.1;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();

    let consts = PhysicalConstants { hbar: HBAR, m: MASS, a: WIDTH, V: POTENTIAL };
    let params = NumericalParameters {
        dx: DX,
        dE: DE,
        count: COUNT,
        tolerance: TOLERANCE,
        growth: GROWTH,
        max_trials: None,
        shot: Shot::default(),
    };
    info!("solving for {COUNT} eigenstates with dx = {DX}, dE = {DE}");
    let well = Well::new(consts, params)?;
    let states = well.solve().context("eigenstate search failed")?;
    info!("done; {} grid points per eigenstate", well.len());

    println!();
    print!("{}", LevelTable(&states));
    for state in states.iter() {
        println!(
            "  n = {}: analytic E = {:.4} ({} trials)",
            state.n, well.analytic_energy(state.n), state.trials,
        );
    }

    let labels = PlotLabels::new(DEF_SCALE_FACTOR);
    let mut plot = Plot::new();
    for curve in report::shifted_curves(&states, DEF_SCALE_FACTOR) {
        let trace = Scatter::new(curve.x, curve.y)
            .mode(Mode::Lines)
            .name(&curve.label);
        plot.add_trace(trace);
    }
    let layout = Layout::new()
        .title(Title::new(&labels.title))
        .x_axis(Axis::new().title(Title::new(&labels.x)).show_grid(true))
        .y_axis(Axis::new().title(Title::new(&labels.y)).show_grid(true))
        .show_legend(true);
    plot.set_layout(layout);

    let outdir = PathBuf::from("output");
    std::fs::create_dir_all(&outdir)
        .with_context(|| format!("couldn't create {}", outdir.display()))?;
    let outfile = outdir.join("particle_in_a_box.html");
    plot.write_html(&outfile);
    info!("wrote {}", outfile.display());
    Ok(())
}
