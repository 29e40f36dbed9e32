//! Independent bisections share no state: solving many level sets of
//! `x sin(x)` on a thread pool gives the same reports as one by one.

use std::{error::Error, time::Instant};
use bisect1d::{bisect, Report};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

fn solve(c: f64) -> Option<Report<f64>> {
    bisect(|x: f64| x * x.sin() - c, 0., 2.).tol(1e-12).report().ok()
}

fn main() -> Result<(), Box<dyn Error + 'static>> {
    const N: usize = 100_000;
    let mut rng = StdRng::seed_from_u64(7);
    // Level 0 is rejected since x = 0 is then a root at an endpoint.
    let mut levels: Vec<f64> = (0..N).map(|_| rng.gen_range(0.01 .. 1.5)).collect();
    levels[0] = 0.;

    let now = Instant::now();
    let seq: Vec<_> = levels.iter().map(|&c| solve(c)).collect();
    println!("sequential: {} secs", now.elapsed().as_secs_f64());

    let now = Instant::now();
    let par: Vec<_> = levels.par_iter().map(|&c| solve(c)).collect();
    println!("parallel:   {} secs", now.elapsed().as_secs_f64());

    let rejected = par.iter().filter(|r| r.is_none()).count();
    let not_found = par.iter().flatten().filter(|r| r.root.is_none()).count();
    let max_eval = par.iter().flatten().map(|r| r.evaluations).max();
    println!("identical: {}", seq == par);
    println!("rejected: {rejected}, not found: {not_found}, max #eval: {:?}",
             max_eval);
    Ok(())
}
