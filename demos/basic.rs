use std::error::Error;
use std::f64::consts::PI;
use bisect1d::{bisect, find_root};

fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let f1 = |x: f64| x.sin() - 0.5 * x;
    println!("f1: {:?}", bisect(f1, PI / 2., PI).root()?);
    println!("f1: {:?} (tol = 1e-14)", bisect(f1, PI / 2., PI).tol(1e-14).root()?);

    let f2 = |x: f64| x * x * x - 4.;
    let r = find_root(f2, 1., 3., 1e-7, 100)?;
    println!("f2: {:?} (cbrt 4 = {})", r, 4f64.cbrt());
    println!("f2: {:?} (max 10 iterations)", find_root(f2, 1., 3., 1e-7, 10)?);

    // A function which is not defined everywhere.
    let f3 = |x: f64| {
        if x < 0. { Err("negative argument") } else { Ok(x.sqrt() - 1.5) }
    };
    println!("f3: {:?}", bisect(f3, 0., 4.).root()?);
    println!("f3: {}", bisect(f3, -1., 4.).root().unwrap_err());

    for i in 1..4 {
        let c = i as f64;
        let f = |x: f64| x * x - c;
        let r = bisect(f, 0., 10.).report()?;
        println!("i = {} ⟹ root = {:?} ({} evaluations, {:?})",
                 i, r.root, r.evaluations, r.termination);
    }

    Ok(())
}
