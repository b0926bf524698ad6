use crate::analytical::{IslandInterface, SemiCoast, WellNearCoast};
use crate::base::InterfaceError;
use plotpy::{Curve, Plot};

const COLOR_AQUIFER: &str = "black";
const COLOR_SEA_FLOOR: &str = "#cccccc";
const COLOR_HEAD: &str = "#1f77b4";
const COLOR_INTERFACE: &str = "#d62728";

/// Draws a thick horizontal line representing a layer boundary
fn layer(x0: f64, x1: f64, z: f64, color: &str) -> Curve {
    let mut curve = Curve::new();
    curve.set_line_color(color).set_line_width(5.0);
    curve.draw(&vec![x0, x1], &vec![z, z]);
    curve
}

/// Draws a curve with a given color and label
fn line(x: &Vec<f64>, y: &Vec<f64>, color: &str, label: &str) -> Curve {
    let mut curve = Curve::new();
    curve.set_line_color(color).set_label(label);
    curve.draw(x, y);
    curve
}

/// Plots the cross-section of the semi-confined coastal aquifer with the interface
///
/// The bottom of the aquifer and the top below land are drawn in black; the leaky sea
/// floor is drawn in grey.
pub fn plot_semi_coast(model: &SemiCoast, n: usize) -> Result<Plot, InterfaceError> {
    let param = model.param();
    let (xmin, xmax) = (f64::min(model.toe(), 0.0), model.tip());
    let zbot = param.ztop - param.hh;
    let (x, zeta) = model.interface(n)?;
    let mut plot = Plot::new();
    plot.add(&layer(xmin, xmax, zbot, COLOR_AQUIFER));
    if xmin < 0.0 {
        plot.add(&layer(xmin, f64::min(xmax, 0.0), param.ztop, COLOR_AQUIFER));
    }
    plot.add(&layer(f64::max(xmin, 0.0), f64::min(xmax, param.ll), param.ztop, COLOR_SEA_FLOOR));
    plot.add(&line(&x, &zeta, COLOR_INTERFACE, "interface"));
    plot.set_title(&format!("case {}", model.case()))
        .set_range(xmin, xmax, zbot - 0.05 * param.hh, param.ztop + 0.05 * param.hh)
        .grid_labels_legend("$x$", "$z$");
    Ok(plot)
}

/// Plots the head and the interface across the island (and the outflow zones, if any)
pub fn plot_island(island: &IslandInterface, n: usize) -> Result<Plot, InterfaceError> {
    let profile = island.profile(n)?;
    let mut plot = Plot::new();
    plot.add(&line(&profile.x, &profile.h, COLOR_HEAD, "head"));
    plot.add(&line(&profile.x, &profile.zeta, COLOR_INTERFACE, "interface"));
    if island.outflow_length() > 0.0 {
        let outflow = island.outflow_profile(n)?;
        let mirrored: Vec<_> = outflow.x.iter().map(|x| -x).collect();
        plot.add(&line(&outflow.x, &outflow.h, COLOR_HEAD, ""));
        plot.add(&line(&mirrored, &outflow.h, COLOR_HEAD, ""));
        plot.add(&line(&outflow.x, &outflow.zeta, COLOR_INTERFACE, ""));
        plot.add(&line(&mirrored, &outflow.zeta, COLOR_INTERFACE, ""));
    }
    plot.set_figure_size_points(600.0, 300.0)
        .grid_labels_legend("$x$", "$z$");
    Ok(plot)
}

/// Plots the head and the interface along the cross-section through the well
pub fn plot_well_cross_section(well: &WellNearCoast, nx: usize) -> Result<Plot, InterfaceError> {
    let section = well.cross_section(nx)?;
    let (d, dd) = (well.param().d, well.param().dd);
    let mut plot = Plot::new();
    plot.add(&line(&section.x, &section.h, COLOR_HEAD, "head"));
    plot.add(&line(&section.x, &section.zeta, COLOR_INTERFACE, "interface"));
    let mut screen = Curve::new();
    screen
        .set_line_color(COLOR_SEA_FLOOR)
        .set_line_style("--")
        .set_line_width(3.0);
    screen.draw(&vec![d, d], &vec![-dd, 0.0]);
    plot.add(&screen);
    let title = if well.pumps_fresh() {
        "cross-section through the well"
    } else {
        "the well draws salt water (solution invalid)"
    };
    plot.set_title(title).grid_labels_legend("$x$", "$z$");
    Ok(plot)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
