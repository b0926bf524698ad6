use plotpy::{Curve, Plot};
use saltfront::prelude::*;
use std::error::Error;
use std::path::Path;

const OUT_DIR: &str = "/tmp/saltfront/demos";

// Computes the four regimes of the semi-confined coastal aquifer
//
// Cases 1 and 2 have an outflow zone that fits below the sea; cases 3 and 4 are
// truncated at the end of the aquifer (L = 80 m and L = 150 m).

fn main() -> Result<(), Box<dyn Error>> {
    let base = ParamSemiCoast {
        k: 10.0,
        hh: 10.0,
        c: 100.0,
        grad: 0.0005,
        rhof: 1000.0,
        rhos: 1025.0,
        ll: 1000.0,
        ztop: 0.0,
        sealevel: 0.0,
    };
    let cases = [(0.0005, 1000.0), (0.00375, 1000.0), (0.0005, 80.0), (0.00375, 150.0)];
    let mut plot = Plot::new();
    for (grad, ll) in cases {
        let param = ParamSemiCoast { grad, ll, ..base };
        let model = SemiCoast::new(&param)?;
        println!("{}\n", model);
        let (x, zeta) = model.interface(100)?;
        let mut curve = Curve::new();
        curve
            .set_label(&format!("case {}: grad = {}, L = {}", model.case(), grad, ll))
            .draw(&x, &zeta);
        plot.add(&curve);
    }
    plot.grid_labels_legend("$x$", "$\\zeta$")
        .set_figure_size_points(600.0, 300.0);
    let path = Path::new(OUT_DIR).join("semi_coast_cases.svg");
    plot.save(&path)?;
    Ok(())
}
