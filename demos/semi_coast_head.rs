use saltfront::prelude::*;
use saltfront::util::plot_semi_coast;
use std::error::Error;
use std::path::Path;

const OUT_DIR: &str = "/tmp/saltfront/demos";

// Finds the gradient such that the head is 1 m at 1 km from the coast

fn main() -> Result<(), Box<dyn Error>> {
    let mut config = Config::new();
    config.set_verbose(true)?;
    for ll in [1000.0, 100.0] {
        let param = ParamSemiCoastHead {
            k: 10.0,
            hh: 10.0,
            c: 100.0,
            h: 1.0,
            x: -1000.0,
            rhof: 1000.0,
            rhos: 1025.0,
            ll,
            ztop: -10.0,
            sealevel: 0.0,
        };
        let sch = SemiCoastHead::new_with_config(&param, &config)?;
        println!("L = {} → grad = {:?} ({} stage(s))\n", ll, sch.grad(), sch.n_stage());
        let plot = plot_semi_coast(sch.model(), 100)?;
        let path = Path::new(OUT_DIR).join(format!("semi_coast_head_{}.svg", ll));
        plot.save(&path)?;
    }
    Ok(())
}
