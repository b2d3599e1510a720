use std::env;
use std::process;

use mdp_planner::{report, Model, Planner, State};

const USAGE: &str = "Please enter three parameters:
n: a non-negative integer horizon
s: starting state, fit or unfit
g: a discount factor between 0 and 1";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 3 {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let horizon: u32 = match args[0].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("invalid horizon '{}': expected a non-negative integer", args[0]);
            process::exit(1);
        }
    };
    let start: State = match args[1].parse() {
        Ok(s) => s,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    let gamma: f64 = match args[2].parse() {
        Ok(g) => g,
        Err(_) => {
            eprintln!("invalid discount factor '{}': expected a real number", args[2]);
            process::exit(1);
        }
    };

    let model = Model::fitness();
    let mut planner = match Planner::new(&model, horizon, gamma) {
        Ok(planner) => planner,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    let solution = planner.solve(start);
    println!("{}", report::render(&solution));
}
