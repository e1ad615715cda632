use signal_scheduler::input_model;
use signal_scheduler::synthetic::{generate_city, CityParams};
use std::fs;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

/// Writes a random city in the scheduler's input format
#[derive(StructOpt, Debug)]
#[structopt(name = "generate_input")]
struct Opt {
    /// Output file
    #[structopt(parse(from_os_str))]
    output: PathBuf,

    /// Random seed
    #[structopt(long = "seed", default_value = "0")]
    seed: u64,

    /// Simulation length in seconds
    #[structopt(short = "d", long = "duration", default_value = "100")]
    sim_duration: u32,

    #[structopt(short = "n", long = "intersections", default_value = "20")]
    intersections: u32,

    #[structopt(short = "s", long = "streets", default_value = "60")]
    streets: usize,

    #[structopt(short = "c", long = "cars", default_value = "50")]
    cars: usize,

    /// Longest planned route, in streets
    #[structopt(long = "max-route", default_value = "8")]
    max_route_len: usize,
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let params = CityParams {
        sim_duration: opt.sim_duration,
        intersections: opt.intersections,
        streets: opt.streets,
        cars: opt.cars,
        max_route_len: opt.max_route_len,
        ..CityParams::default()
    };
    let city = generate_city(&params, opt.seed);

    if let Some(dir) = opt.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Cannot create {}: {}", dir.display(), e);
            process::exit(1);
        }
    }
    if let Err(e) = fs::write(&opt.output, input_model::to_text(&city)) {
        eprintln!("Cannot write {}: {}", opt.output.display(), e);
        process::exit(1);
    }
    log::info!(
        "Wrote {} streets and {} routes to {}",
        city.streets.len(),
        city.routes.len(),
        opt.output.display()
    );
}
