use super::{fint_span, solve, RegimeSolution, Scales};
use crate::base::{Config, InterfaceError, ParamSemiCoast};
use crate::util::InterfaceProfile;
use plotpy::linspace;
use std::fmt;

/// Implements the interface in a semi-confined coastal aquifer extending below the sea
///
/// The aquifer (thickness H, top at `ztop`) continues below the sea floor for a length L and
/// is covered there by a leaky layer with resistance c. Freshwater flows toward the sea with
/// an inland head gradient `grad` and leaves through the leaky layer in an outflow zone.
///
/// ```text
///            land            │                 sea
///                            │  ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
///   ═════════════════════════╪══════════════════════════╗ leaky layer (c)
///    fresh →  → →            │ ↑ ↑ ↑ ↑ outflow zone     ║
///                  '  ,      │                          ║
///                       ' ,  │  interface               ║
///    salt                   '├ , ,                      ║
///   ─────────────────────────┼───────' toe ─────────────╜
///                           x=0                        x=L
/// ```
///
/// The regime (one of four cases) is solved at construction and the instance is
/// immutable afterwards.
///
/// # Reference
///
/// 1. Bakker M (2006) Analytic solutions for interface flow in combined confined and
///    semi-confined, coastal aquifers. Advances in Water Resources, 29(3), 417-425
#[derive(Clone, Debug)]
pub struct SemiCoast {
    param: ParamSemiCoast,
    scales: Scales,
    solution: RegimeSolution,
}

impl SemiCoast {
    /// Allocates a new instance with the default configuration
    pub fn new(param: &ParamSemiCoast) -> Result<Self, InterfaceError> {
        SemiCoast::new_with_config(param, &Config::new())
    }

    /// Allocates a new instance
    pub fn new_with_config(param: &ParamSemiCoast, config: &Config) -> Result<Self, InterfaceError> {
        let solution = solve(param, config)?;
        let model = SemiCoast {
            param: *param,
            scales: Scales::new(param),
            solution,
        };
        if config.verbose {
            println!("{}", model);
        }
        Ok(model)
    }

    /// Returns the case number (1, 2, 3, or 4)
    pub fn case(&self) -> usize {
        self.solution.case()
    }

    /// Returns the solution of the active regime
    pub fn solution(&self) -> &RegimeSolution {
        &self.solution
    }

    /// Returns the parameters
    pub fn param(&self) -> &ParamSemiCoast {
        &self.param
    }

    /// Returns the dimensionless gradient μ
    pub fn mu(&self) -> f64 {
        self.scales.mu
    }

    /// Returns the leakage factor λ
    pub fn lab(&self) -> f64 {
        self.scales.lab
    }

    /// Returns the density ratio ν
    pub fn nu(&self) -> f64 {
        self.scales.nu
    }

    /// Returns the equivalent freshwater head of the sea at the top of the aquifer
    pub fn hs(&self) -> f64 {
        self.scales.hs
    }

    /// Returns the position of the toe
    ///
    /// The toe is inland (x < 0) for cases 1 and 3 and below the sea (x > 0) for cases 2 and 4.
    pub fn toe(&self) -> f64 {
        let lab = self.scales.lab;
        match self.solution {
            RegimeSolution::Case1 { doverlab, .. } | RegimeSolution::Case3 { doverlab, .. } => -doverlab * lab,
            RegimeSolution::Case2 { doverlab, .. } | RegimeSolution::Case4 { doverlab, .. } => doverlab * lab,
        }
    }

    /// Returns the position of the tip (the seaward end of the interface)
    pub fn tip(&self) -> f64 {
        let lab = self.scales.lab;
        match self.solution {
            RegimeSolution::Case1 { loverlab, .. } => loverlab * lab,
            RegimeSolution::Case2 { doverlab, loverlab, .. } => (doverlab + loverlab) * lab,
            RegimeSolution::Case3 { lsoverlab, .. } | RegimeSolution::Case4 { lsoverlab, .. } => lsoverlab * lab,
        }
    }

    /// Computes the dimensionless head φ along the interface and the corresponding positions
    ///
    /// Returns `(x, phi)` from the toe to the tip
    fn sample(&self, n: usize) -> Result<(Vec<f64>, Vec<f64>), InterfaceError> {
        if n < 2 {
            return Err(InterfaceError::InvalidInput("the number of points must be ≥ 2"));
        }
        let Scales { lab, mu, .. } = self.scales;
        let span = |phi: f64, a: f64| fint_span(phi, a).map_err(|e| InterfaceError::InvalidInput(e));
        match self.solution {
            RegimeSolution::Case1 {
                doverlab,
                phi0,
                loverlab,
            } => {
                let u = linspace(-doverlab, loverlab, n);
                let phi = u
                    .iter()
                    .map(|&u| {
                        if u <= 0.0 {
                            f64::sqrt(f64::max(0.0, -2.0 * mu * u + phi0 * phi0))
                        } else {
                            (u - loverlab) * (u - loverlab) / 6.0
                        }
                    })
                    .collect();
                Ok((u.iter().map(|u| u * lab).collect(), phi))
            }
            RegimeSolution::Case2 { doverlab, loverlab, .. } => {
                let u = linspace(0.0, loverlab, n);
                let phi = u.iter().map(|u| (u - loverlab) * (u - loverlab) / 6.0).collect();
                Ok((u.iter().map(|u| (doverlab + u) * lab).collect(), phi))
            }
            RegimeSolution::Case3 { phi0, a, lsoverlab, .. } => {
                let phi = linspace(1.0, 0.0, n);
                let mut x = Vec::with_capacity(n);
                for &p in &phi {
                    let u = if p >= phi0 {
                        (phi0 * phi0 - p * p) / (2.0 * mu)
                    } else {
                        span(p, a)? + lsoverlab
                    };
                    x.push(u * lab);
                }
                Ok((x, phi))
            }
            RegimeSolution::Case4 {
                doverlab, a, lsoverlab, ..
            } => {
                let phi = linspace(1.0, 0.0, n);
                let mut x = Vec::with_capacity(n);
                for &p in &phi {
                    let u = span(p, a)? + lsoverlab - doverlab;
                    x.push((doverlab + u) * lab);
                }
                Ok((x, phi))
            }
        }
    }

    /// Computes `n` points along the interface, from the toe to the tip
    ///
    /// Returns `(x, zeta)` where `zeta` is the elevation of the interface
    pub fn interface(&self, n: usize) -> Result<(Vec<f64>, Vec<f64>), InterfaceError> {
        let (x, phi) = self.sample(n)?;
        let zeta = phi.iter().map(|p| self.param.ztop - self.param.hh * p).collect();
        Ok((x, zeta))
    }

    /// Computes `n` points along the interface, including the freshwater head
    pub fn interface_profile(&self, n: usize) -> Result<InterfaceProfile, InterfaceError> {
        let (x, phi) = self.sample(n)?;
        let mut profile = InterfaceProfile::new("SemiCoast", n);
        let nu_hh = self.scales.nu * self.param.hh;
        for i in 0..n {
            profile.x[i] = x[i];
            profile.h[i] = nu_hh * phi[i] + self.scales.hs;
            profile.zeta[i] = self.param.ztop - self.param.hh * phi[i];
        }
        Ok(profile)
    }

    /// Calculates the freshwater head at x
    ///
    /// **Note:** only available for case 1; x must not be beyond the tip.
    pub fn head(&self, x: f64) -> Result<f64, InterfaceError> {
        let (doverlab, phi0, loverlab) = match self.solution {
            RegimeSolution::Case1 {
                doverlab,
                phi0,
                loverlab,
            } => (doverlab, phi0, loverlab),
            _ => return Err(InterfaceError::NotImplemented("head is only available for case 1")),
        };
        let Scales { lab, nu, mu, hs } = self.scales;
        let u = x / lab;
        let phi = if u <= -doverlab {
            // confined flow inland of the toe
            1.0 + mu * (-doverlab - u)
        } else if u <= 0.0 {
            f64::sqrt(-2.0 * mu * u + phi0 * phi0)
        } else if u <= loverlab {
            (u - loverlab) * (u - loverlab) / 6.0
        } else {
            return Err(InterfaceError::InvalidInput("x must not be beyond the tip"));
        };
        Ok(nu * self.param.hh * phi + hs)
    }

    /// Calculates the (onshore) position where the freshwater head equals h
    ///
    /// Heads at or below the head at the coastline map to the coastline (x = 0).
    pub fn onshorex(&self, h: f64) -> f64 {
        let Scales { lab, nu, mu, hs } = self.scales;
        let phi = (h - hs) / (nu * self.param.hh);
        match self.solution {
            RegimeSolution::Case1 { doverlab, phi0, .. } | RegimeSolution::Case3 { doverlab, phi0, .. } => {
                let u = if phi >= 1.0 {
                    (1.0 - phi) / mu - doverlab
                } else if phi > phi0 {
                    (phi0 * phi0 - phi * phi) / (2.0 * mu)
                } else {
                    0.0
                };
                u * lab
            }
            RegimeSolution::Case2 { doverlab, phicoast, .. } | RegimeSolution::Case4 { doverlab, phicoast, .. } => {
                let u = if phi > phicoast {
                    (phicoast - phi) / mu - doverlab
                } else {
                    -doverlab
                };
                (doverlab + u) * lab
            }
        }
    }
}

impl fmt::Display for SemiCoast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SemiCoast: case {}\n", self.case())?;
        write!(f, "mu  = {:?}\n", self.scales.mu)?;
        write!(f, "lab = {:?}\n", self.scales.lab)?;
        match self.solution {
            RegimeSolution::Case1 {
                doverlab,
                phi0,
                loverlab,
            } => {
                write!(f, "doverlab = {:?}\n", doverlab)?;
                write!(f, "phi0     = {:?}\n", phi0)?;
                write!(f, "loverlab = {:?}\n", loverlab)?;
            }
            RegimeSolution::Case2 {
                doverlab,
                phicoast,
                loverlab,
            } => {
                write!(f, "doverlab = {:?}\n", doverlab)?;
                write!(f, "phicoast = {:?}\n", phicoast)?;
                write!(f, "loverlab = {:?}\n", loverlab)?;
            }
            RegimeSolution::Case3 {
                doverlab,
                phi0,
                a,
                lsoverlab,
            } => {
                write!(f, "doverlab  = {:?}\n", doverlab)?;
                write!(f, "phi0      = {:?}\n", phi0)?;
                write!(f, "a         = {:?}\n", a)?;
                write!(f, "lsoverlab = {:?}\n", lsoverlab)?;
            }
            RegimeSolution::Case4 {
                doverlab,
                phicoast,
                a,
                lsoverlab,
            } => {
                write!(f, "doverlab  = {:?}\n", doverlab)?;
                write!(f, "phicoast  = {:?}\n", phicoast)?;
                write!(f, "a         = {:?}\n", a)?;
                write!(f, "lsoverlab = {:?}\n", lsoverlab)?;
            }
        }
        write!(f, "toe = {:?}\n", self.toe())?;
        write!(f, "tip = {:?}", self.tip())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SemiCoast;
    use crate::base::{InterfaceError, ParamSemiCoast, DEFAULT_TEST_DIR};
    use plotpy::{linspace, Curve, Plot};
    use russell_lab::approx_eq;

    const SAVE_FIGURE: bool = false;

    fn param(grad: f64, ll: f64) -> ParamSemiCoast {
        ParamSemiCoast {
            k: 10.0,
            hh: 10.0,
            c: 100.0,
            grad,
            rhof: 1000.0,
            rhos: 1025.0,
            ll,
            ztop: 0.0,
            sealevel: 0.0,
        }
    }

    #[test]
    fn new_captures_errors() {
        let mut p = param(0.0005, 1000.0);
        p.grad = 0.0;
        assert_eq!(
            SemiCoast::new(&p).err(),
            Some(InterfaceError::InvalidInput("grad must be positive and finite"))
        );
    }

    #[test]
    fn toe_and_tip_work() {
        let sc = SemiCoast::new(&param(0.0005, 1000.0)).unwrap();
        assert_eq!(sc.case(), 1);
        approx_eq(sc.toe(), -211.68452838032237, 1e-10);
        approx_eq(sc.tip(), 153.26188647871062, 1e-10);

        let sc = SemiCoast::new(&param(0.00375, 1000.0)).unwrap();
        assert_eq!(sc.case(), 2);
        approx_eq(sc.toe(), 53.68364866819654, 1e-10);
        approx_eq(sc.tip(), 53.68364866819654 + 244.9489742783178, 1e-10);

        let sc = SemiCoast::new(&param(0.0005, 80.0)).unwrap();
        assert_eq!(sc.case(), 3);
        approx_eq(sc.toe(), -212.41139368968676, 1e-6);
        approx_eq(sc.tip(), 80.0, 1e-12);

        let sc = SemiCoast::new(&param(0.00375, 150.0)).unwrap();
        assert_eq!(sc.case(), 4);
        approx_eq(sc.toe(), 50.32434524587304, 1e-7);
        approx_eq(sc.tip(), 150.0, 1e-12);
    }

    #[test]
    fn interface_is_bounded_by_toe_and_tip() {
        for (grad, ll) in [(0.0005, 1000.0), (0.00375, 1000.0), (0.0005, 80.0), (0.00375, 150.0)] {
            let sc = SemiCoast::new(&param(grad, ll)).unwrap();
            let (x, zeta) = sc.interface(50).unwrap();
            assert_eq!(x.len(), 50);
            assert_eq!(zeta.len(), 50);
            approx_eq(x[0], sc.toe(), 1e-8);
            approx_eq(x[49], sc.tip(), 1e-8);
            for i in 0..50 {
                assert!(x[i] >= sc.toe() - 1e-8 && x[i] <= sc.tip() + 1e-8);
                assert!(zeta[i] >= -10.0 - 1e-12 && zeta[i] <= 1e-12);
            }
            // the interface rises from the aquifer base (toe) to the top (tip)
            approx_eq(zeta[0], -10.0, 1e-10);
            approx_eq(zeta[49], 0.0, 1e-10);
            for i in 1..50 {
                assert!(x[i] > x[i - 1]);
                assert!(zeta[i] >= zeta[i - 1] - 1e-12);
            }
        }

        // the first and last points coincide with the toe and the tip over a range of
        // gradients and lengths covering cases 2, 3 and 4
        for grad in linspace(0.0033, 0.008, 8) {
            for ll in [10.0, 50.0, 100.0, 150.0, 200.0, 300.0, 450.0, 600.0] {
                let sc = SemiCoast::new(&param(grad, ll)).unwrap();
                let (x, _) = sc.interface(30).unwrap();
                assert!(
                    f64::abs(x[0] - sc.toe()) <= 1e-6,
                    "grad = {}, L = {}: x[0] = {}, toe = {}",
                    grad,
                    ll,
                    x[0],
                    sc.toe()
                );
                assert!(f64::abs(x[29] - sc.tip()) <= 1e-9, "grad = {}, L = {}", grad, ll);
                for i in 1..30 {
                    assert!(x[i] > x[i - 1], "grad = {}, L = {}", grad, ll);
                }
            }
        }
    }

    #[test]
    fn interface_captures_errors() {
        let sc = SemiCoast::new(&param(0.0005, 1000.0)).unwrap();
        assert_eq!(
            sc.interface(1).err(),
            Some(InterfaceError::InvalidInput("the number of points must be ≥ 2"))
        );
    }

    #[test]
    fn interface_profile_works() {
        let mut p = param(0.0005, 80.0);
        p.ztop = -10.0;
        let sc = SemiCoast::new(&p).unwrap();
        approx_eq(sc.hs(), 0.25, 1e-15);
        let profile = sc.interface_profile(11).unwrap();
        let (x, zeta) = sc.interface(11).unwrap();
        assert_eq!(profile.name, "SemiCoast");
        assert_eq!(profile.x, x);
        assert_eq!(profile.zeta, zeta);
        for i in 0..11 {
            // h - hs = ν (ztop - ζ)
            approx_eq(profile.h[i] - sc.hs(), sc.nu() * (p.ztop - profile.zeta[i]), 1e-14);
        }
    }

    #[test]
    fn head_works() {
        let sc = SemiCoast::new(&param(0.0005, 1000.0)).unwrap();
        let (doverlab, phi0) = (2.1168452838032237, 0.3914867641168864);
        let nu_hh = 0.25;
        // toe
        approx_eq(sc.head(-doverlab * 100.0).unwrap(), nu_hh, 1e-12);
        // coastline
        approx_eq(sc.head(0.0).unwrap(), nu_hh * phi0, 1e-12);
        // tip
        approx_eq(sc.head(sc.tip() - 1e-9).unwrap(), 0.0, 1e-15);
        // inland, the head increases with the background gradient
        approx_eq(sc.head(-1000.0).unwrap() - sc.head(-500.0).unwrap(), 0.0005 * 500.0, 1e-12);
        assert_eq!(
            sc.head(sc.tip() + 1.0).err(),
            Some(InterfaceError::InvalidInput("x must not be beyond the tip"))
        );
        for (grad, ll) in [(0.00375, 1000.0), (0.0005, 80.0), (0.00375, 150.0)] {
            let sc = SemiCoast::new(&param(grad, ll)).unwrap();
            assert_eq!(
                sc.head(-100.0).err(),
                Some(InterfaceError::NotImplemented("head is only available for case 1"))
            );
        }
    }

    #[test]
    fn onshorex_inverts_head() {
        let sc = SemiCoast::new(&param(0.0005, 1000.0)).unwrap();
        for x in linspace(-1000.0, -1.0, 25) {
            let h = sc.head(x).unwrap();
            approx_eq(sc.onshorex(h), x, 1e-9);
        }
        // heads below the coastline head map to the coastline
        assert_eq!(sc.onshorex(0.01), 0.0);
    }

    #[test]
    fn onshorex_works_below_the_sea() {
        let sc = SemiCoast::new(&param(0.00375, 1000.0)).unwrap();
        let phicoast = 1.6072751268321588;
        let nu_hh = 0.25;
        approx_eq(sc.onshorex(nu_hh * phicoast), 0.0, 1e-12);
        approx_eq(sc.onshorex(nu_hh * phicoast + 0.00375 * 400.0), -400.0, 1e-9);
        assert_eq!(sc.onshorex(0.1), 0.0);

        let sc = SemiCoast::new(&param(0.00375, 150.0)).unwrap();
        let phicoast = 1.5824832122429988;
        approx_eq(sc.onshorex(nu_hh * phicoast + 0.00375 * 400.0), -400.0, 1e-6);
    }

    #[test]
    fn display_works() {
        let sc = SemiCoast::new(&param(0.0005, 1000.0)).unwrap();
        let text = format!("{}", sc);
        assert!(text.starts_with("SemiCoast: case 1\nmu  = "));
        assert!(text.contains("phi0     = "));
        assert!(text.ends_with(&format!("tip = {:?}", sc.tip())));
    }

    #[test]
    fn plot_interfaces() {
        if SAVE_FIGURE {
            let mut plot = Plot::new();
            for (grad, ll, color) in [
                (0.0005, 1000.0, "#1f77b4"),
                (0.00375, 1000.0, "#ff7f0e"),
                (0.0005, 80.0, "#2ca02c"),
                (0.00375, 150.0, "#d62728"),
            ] {
                let sc = SemiCoast::new(&param(grad, ll)).unwrap();
                let (x, zeta) = sc.interface(100).unwrap();
                let mut curve = Curve::new();
                curve
                    .set_label(&format!("case {}", sc.case()))
                    .set_line_color(color)
                    .draw(&x, &zeta);
                plot.add(&curve);
            }
            plot.grid_labels_legend("$x$", "$\\zeta$")
                .save(&format!("{}/semi_coast_interfaces.svg", DEFAULT_TEST_DIR))
                .unwrap();
        }
    }
}
