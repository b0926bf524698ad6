use crate::base::{Config, InterfaceError, ParamWellNearCoast, WELL_STAGNATION_OFFSET};
use crate::math::{find_root, root_finder};
use crate::util::InterfaceProfile;
use log::warn;
use plotpy::linspace;
use std::f64::consts::PI;

/// Holds the heads and interface elevations over a grid around the well
///
/// The values are stored as `h[j][i]` for the point `(x[i], y[j])`.
#[derive(Clone, Debug)]
pub struct WellGrid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub h: Vec<Vec<f64>>,
    pub zeta: Vec<Vec<f64>>,
}

/// Implements the interface near a well pumping from a coastal aquifer
///
/// The coastline is the line x = 0 and the land is at x > 0. A uniform flow Q0 discharges
/// into the sea and the well at (d, 0) pumps Q. An image (recharge) well at (-d, 0) keeps
/// the coastline at zero potential. The discharge potential is:
///
/// ```text
/// Φ(x, y) = Q/(2π) ln(√((x-d)² + y²) / √((x+d)² + y²)) + Q0 x
/// ```
///
/// Along y = 0, the stagnation point `xmax` between the coastline and the well has the
/// largest potential; if the interface elevation there is above the bottom of the aquifer,
/// the interface reaches the well and the well draws salt water.
///
/// # Reference
///
/// 1. Strack ODL (1976) A single-potential solution for regional interface problems in
///    coastal aquifers. Water Resources Research, 12(6), 1165-1174
#[derive(Clone, Debug)]
pub struct WellNearCoast {
    /// Parameters of the well and the aquifer
    param: ParamWellNearCoast,

    /// Ghyben-Herzberg factor ρf / (ρs - ρf)
    alpha: f64,

    /// Discharge potential at the toe
    phitoe: f64,

    /// Head at the toe
    htoe: f64,

    /// Constant of the discharge potential in the confined zone
    cc: f64,

    /// Stagnation point along y = 0
    xmax: f64,

    /// Discharge potential at the stagnation point
    phimax: f64,

    /// Head at the stagnation point
    hmax: f64,

    /// Interface elevation at the stagnation point
    zetamax: f64,
}

impl WellNearCoast {
    /// Allocates a new instance with the default configuration
    pub fn new(param: &ParamWellNearCoast) -> Result<Self, InterfaceError> {
        WellNearCoast::new_with_config(param, &Config::new())
    }

    /// Allocates a new instance
    pub fn new_with_config(param: &ParamWellNearCoast, config: &Config) -> Result<Self, InterfaceError> {
        param.validate()?;
        let (k, dd, d) = (param.k, param.dd, param.d);
        let alpha = param.rhof / (param.rhos - param.rhof);
        let phitoe = 0.5 * k * (alpha + 1.0) / (alpha * alpha) * dd * dd;

        // stagnation point along y = 0
        let solver = root_finder(config);
        let (xmax, _) = find_root(
            &solver,
            0.0,
            d - WELL_STAGNATION_OFFSET,
            config.tol_residual,
            &mut 0,
            |x, _| Ok(discharge_x(param, x)),
        )
        .map_err(|_| InterfaceError::NonConvergence("the stagnation point was not found"))?;

        let phimax = f64::max(0.0, potential(param, xmax, 0.0));
        let hmax = f64::sqrt(2.0 * phimax / (k * (alpha + 1.0)));
        let zetamax = -alpha * hmax;
        let model = WellNearCoast {
            param: *param,
            alpha,
            phitoe,
            htoe: f64::sqrt(2.0 * phitoe / (k * (alpha + 1.0))),
            cc: -0.5 * k * (alpha + 1.0) / alpha * dd * dd,
            xmax,
            phimax,
            hmax,
            zetamax,
        };
        if !model.pumps_fresh() {
            warn!("the well draws salt water (zetamax = {:?} > -D = {:?})", zetamax, -dd);
        }
        if config.verbose {
            println!("WellNearCoast: xmax = {:?}, hmax = {:?}, zetamax = {:?}", xmax, hmax, zetamax);
        }
        Ok(model)
    }

    /// Returns the parameters
    pub fn param(&self) -> &ParamWellNearCoast {
        &self.param
    }

    /// Returns the stagnation point along y = 0
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Returns the discharge potential at the stagnation point
    pub fn phimax(&self) -> f64 {
        self.phimax
    }

    /// Returns the head at the stagnation point
    pub fn hmax(&self) -> f64 {
        self.hmax
    }

    /// Returns the elevation of the interface at the stagnation point
    pub fn zetamax(&self) -> f64 {
        self.zetamax
    }

    /// Returns the head at the toe
    pub fn htoe(&self) -> f64 {
        self.htoe
    }

    /// Returns true if the well pumps only freshwater
    pub fn pumps_fresh(&self) -> bool {
        self.zetamax <= -self.param.dd
    }

    /// Calculates the discharge potential at (x, y)
    pub fn potential(&self, x: f64, y: f64) -> f64 {
        potential(&self.param, x, y)
    }

    /// Calculates the head and the elevation of the interface at (x, y)
    ///
    /// If the well pumps only freshwater, the flow is confined (ζ = -D) from the stagnation
    /// point onward. If the aquifer is pumped dry near the well, h = -D.
    ///
    /// Returns `(h, zeta)`
    pub fn head_interface(&self, x: f64, y: f64) -> Result<(f64, f64), InterfaceError> {
        if x < 0.0 {
            return Err(InterfaceError::InvalidInput("x must be ≥ 0 (on land)"));
        }
        if f64::hypot(x - self.param.d, y) < self.param.rw * (1.0 - 1e-10) {
            return Err(InterfaceError::InvalidInput("(x, y) must be outside the well"));
        }
        let (k, dd) = (self.param.k, self.param.dd);
        let phi = self.potential(x, y);
        let confined = |phi: f64| (f64::sqrt(f64::max(0.0, 2.0 / k * (phi - self.cc))) - dd, -dd);
        if self.pumps_fresh() && x >= self.xmax {
            return Ok(confined(phi));
        }
        let phi = f64::max(0.0, phi);
        if phi <= self.phitoe {
            let h = f64::sqrt(2.0 * phi / (k * (self.alpha + 1.0)));
            Ok((h, -self.alpha * h))
        } else {
            Ok(confined(phi))
        }
    }

    /// Evaluates the head and the interface over a grid around the well
    ///
    /// The x-coordinates cover [0, d - rw] and [d + rw, 3d] with `nx` points each;
    /// the y-coordinates cover [-d, d] with `ny` points.
    pub fn grid(&self, nx: usize, ny: usize) -> Result<WellGrid, InterfaceError> {
        if nx < 2 || ny < 2 {
            return Err(InterfaceError::InvalidInput("the number of points must be ≥ 2"));
        }
        let (d, rw) = (self.param.d, self.param.rw);
        let mut x = linspace(0.0, d - rw, nx);
        x.extend(linspace(d + rw, 3.0 * d, nx));
        let y = linspace(-d, d, ny);
        let mut h = vec![vec![0.0; x.len()]; ny];
        let mut zeta = vec![vec![0.0; x.len()]; ny];
        for j in 0..ny {
            for i in 0..x.len() {
                let (hh, zz) = self.head_interface(x[i], y[j])?;
                h[j][i] = hh;
                zeta[j][i] = zz;
            }
        }
        Ok(WellGrid { x, y, h, zeta })
    }

    /// Computes `nx` points on each side of the well along the cross-section y = 0
    pub fn cross_section(&self, nx: usize) -> Result<InterfaceProfile, InterfaceError> {
        if nx < 2 {
            return Err(InterfaceError::InvalidInput("the number of points must be ≥ 2"));
        }
        let (d, rw) = (self.param.d, self.param.rw);
        let mut profile = InterfaceProfile::new("WellNearCoast", 0);
        profile.x = linspace(0.0, d - rw, nx);
        profile.x.extend(linspace(d + rw, 3.0 * d, nx));
        for i in 0..profile.x.len() {
            let (h, zeta) = self.head_interface(profile.x[i], 0.0)?;
            profile.h.push(h);
            profile.zeta.push(zeta);
            profile.qx.push(discharge_x(&self.param, profile.x[i]));
        }
        Ok(profile)
    }
}

/// Calculates the discharge potential of the well, its image, and the uniform flow
fn potential(param: &ParamWellNearCoast, x: f64, y: f64) -> f64 {
    let d = param.d;
    let r1 = f64::sqrt((x - d) * (x - d) + y * y);
    let r2 = f64::sqrt((x + d) * (x + d) + y * y);
    param.qq / (2.0 * PI) * f64::ln(r1 / r2) + param.q0 * x
}

/// Calculates the x-component of the discharge along y = 0
fn discharge_x(param: &ParamWellNearCoast, x: f64) -> f64 {
    let d = param.d;
    -param.qq / (2.0 * PI) * (1.0 / (x - d) - 1.0 / (x + d)) - param.q0
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
