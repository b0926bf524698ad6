use saltfront::prelude::*;
use saltfront::util::plot_well_cross_section;
use std::error::Error;
use std::path::Path;

const OUT_DIR: &str = "/tmp/saltfront/demos";

// Interface near a well pumping close to the coastline, for two discharges

fn main() -> Result<(), Box<dyn Error>> {
    for qq in [800.0, 1200.0] {
        let param = ParamWellNearCoast {
            qq,
            ..ParamWellNearCoast::default()
        };
        let well = WellNearCoast::new(&param)?;
        println!(
            "Q = {}: xmax = {:.2}, zetamax = {:.2}, pumps fresh water = {}",
            qq,
            well.xmax(),
            well.zetamax(),
            well.pumps_fresh()
        );
        let grid = well.grid(100, 101)?;
        println!("head at the well screen: {:.3}", grid.h[50][99]);
        let plot = plot_well_cross_section(&well, 100)?;
        let path = Path::new(OUT_DIR).join(format!("well_near_coast_q{}.svg", qq));
        plot.save(&path)?;
    }
    Ok(())
}
