use log::{error, info, LevelFilter};
use saltfront::prelude::*;
use saltfront::util::{plot_island, plot_semi_coast, plot_well_cross_section};
use std::io::Write;
use std::path::Path;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "saltfront",
    about = "Computes the saltwater-freshwater interface of a coastal aquifer"
)]
struct Options {
    /// JSON file with the model and its parameters
    param_file: String,

    /// Directory for the output files
    #[structopt(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: String,

    /// Number of points along the interface
    #[structopt(long, default_value = "100")]
    npoint: usize,

    /// Saves a figure (SVG) with the interface
    #[structopt(long)]
    svg: bool,

    /// Log level (error, warn, info, debug, trace)
    #[structopt(long)]
    log_level: Option<String>,
}

/// Initializes the logger; the level comes from the options, then RUST_LOG, then info
fn init_logger(level: Option<&str>) {
    let log_level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();
}

fn run(options: &Options) -> Result<(), String> {
    let param = ParamModel::read_json(&options.param_file)?;
    let mut config = Config::new();
    config.set_n_point(options.npoint)?;
    info!("solving {} ({})", param.name(), options.param_file);

    // solve and collect the profile and figure
    let (profile, plot) = match param {
        ParamModel::SemiCoast(p) => {
            let model = SemiCoast::new_with_config(&p, &config).map_err(|e| e.to_string())?;
            println!("{}", model);
            let profile = model.interface_profile(config.n_point).map_err(|e| e.to_string())?;
            (profile, plot_semi_coast(&model, config.n_point).map_err(|e| e.to_string())?)
        }
        ParamModel::SemiCoastHead(p) => {
            let sch = SemiCoastHead::new_with_config(&p, &config).map_err(|e| e.to_string())?;
            println!("{}", sch);
            let profile = sch.model().interface_profile(config.n_point).map_err(|e| e.to_string())?;
            (profile, plot_semi_coast(sch.model(), config.n_point).map_err(|e| e.to_string())?)
        }
        ParamModel::Island(p) => {
            let island = IslandInterface::new(&p).map_err(|e| e.to_string())?;
            match island.toe() {
                Some(toe) => println!("Island: toes at x = ±{:?}", toe),
                None => println!("Island: the lens does not reach the bottom"),
            }
            let profile = island.profile(config.n_point).map_err(|e| e.to_string())?;
            (profile, plot_island(&island, config.n_point).map_err(|e| e.to_string())?)
        }
        ParamModel::WellNearCoast(p) => {
            let well = WellNearCoast::new_with_config(&p, &config).map_err(|e| e.to_string())?;
            println!(
                "WellNearCoast: xmax = {:?}, zetamax = {:?}, pumps fresh water = {}",
                well.xmax(),
                well.zetamax(),
                well.pumps_fresh()
            );
            let profile = well.cross_section(config.n_point).map_err(|e| e.to_string())?;
            (profile, plot_well_cross_section(&well, config.n_point).map_err(|e| e.to_string())?)
        }
    };

    // write the files
    let stem = Path::new(&options.param_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or("cannot get the stem of the parameter file")?;
    let path_json = format!("{}/{}.json", options.out_dir, stem);
    profile.write_json(&path_json)?;
    info!("profile written to {}", path_json);
    if options.svg {
        let path_svg = format!("{}/{}.svg", options.out_dir, stem);
        plot.save(&path_svg)?;
        info!("figure written to {}", path_svg);
    }
    Ok(())
}

fn main() -> Result<(), String> {
    // parse options
    let options = Options::from_args();
    init_logger(options.log_level.as_deref());

    // run
    if let Err(e) = run(&options) {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}
