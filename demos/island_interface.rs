use saltfront::prelude::*;
use saltfront::util::plot_island;
use std::error::Error;
use std::path::Path;

const OUT_DIR: &str = "/tmp/saltfront/demos";

// Freshwater lens below a strip island, without and with a leaky sea floor

fn main() -> Result<(), Box<dyn Error>> {
    for c in [0.0, 100.0] {
        let param = ParamIsland {
            c,
            ..ParamIsland::default()
        };
        let island = IslandInterface::new(&param)?;
        match island.toe() {
            Some(toe) => println!("c = {}: the lens reaches the bottom for |x| ≤ {:.2}", c, toe),
            None => println!("c = {}: the lens does not reach the bottom", c),
        }
        if c > 0.0 {
            println!("c = {}: outflow zone length = {:.2}", c, island.outflow_length());
        }
        let plot = plot_island(&island, 100)?;
        let path = Path::new(OUT_DIR).join(format!("island_interface_c{}.svg", c));
        plot.save(&path)?;
    }
    Ok(())
}
