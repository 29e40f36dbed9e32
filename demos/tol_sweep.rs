//! How the tolerance trades against the iteration budget.
//!
//! For random levels `c`, solve `x sin(x) = c` on [0, 2] and tally, for
//! each tolerance, which criterion stopped the bisection and how many
//! evaluations it took on average.

use std::error::Error;
use bisect1d::{bisect, Termination};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Default)]
struct Tally {
    residual: usize,
    width: usize,
    maxiter: usize,
    evaluations: usize,
}

impl Tally {
    fn add(&mut self, termination: Termination, evaluations: usize) {
        match termination {
            Termination::Residual => self.residual += 1,
            Termination::Width => self.width += 1,
            Termination::MaxIter => self.maxiter += 1,
        }
        self.evaluations += evaluations;
    }
}

fn main() -> Result<(), Box<dyn Error + 'static>> {
    const N: usize = 10_000;
    let mut rng = StdRng::seed_from_u64(2);
    let levels: Vec<f64> = (0..N).map(|_| rng.gen_range(0.01 .. 1.5)).collect();

    println!("tol\tmaxiter\tresidual\twidth\tnot found\t#eval");
    for maxiter in [30, 100] {
        for tol in [1e-4, 1e-7, 1e-10, 1e-14, 0.] {
            let mut tally = Tally::default();
            for &c in &levels {
                let r = bisect(|x: f64| x * x.sin() - c, 0., 2.)
                    .tol(tol).maxiter(maxiter).report()?;
                tally.add(r.termination, r.evaluations);
            }
            println!("{:e}\t{}\t{}\t{}\t{}\t{:.2}",
                     tol, maxiter, tally.residual, tally.width,
                     tally.maxiter, tally.evaluations as f64 / N as f64);
        }
    }
    Ok(())
}
