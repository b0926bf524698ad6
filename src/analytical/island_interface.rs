use crate::base::{density_ratio, InterfaceError, ParamIsland};
use crate::util::InterfaceProfile;
use plotpy::linspace;

/// Holds the outflow zone below the sea when the island is surrounded by a leaky sea floor
#[derive(Clone, Copy, Debug)]
struct OutflowZone {
    /// Leakage factor √(k D c)
    lab: f64,

    /// Dimensionless gradient at the coastline
    mu: f64,

    /// Head at the coastline
    h0: f64,

    /// Length of the outflow zone
    loutflow: f64,

    /// Discharge potential at the coastline
    phicoast: f64,
}

/// Implements the freshwater lens below a strip island with areal recharge
///
/// The island has half-width L and receives a recharge N. The aquifer bottom is at a depth D
/// below sea level. Where the lens reaches the bottom, the flow is confined (the interface
/// is at -D); elsewhere the interface is at ζ = -α h (Ghyben-Herzberg).
///
/// ```text
///        -L                 0                 L
///   ~~~~~~|~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~|~~~~~~ sea level
///          ' ,                             , '
///              ' ,  fresh  N ↓↓↓↓       , '
///                  ' ,_____________ , '        interface
///   _______________________________________________ bottom (-D)
/// ```
///
/// If the resistance c of the sea floor is positive, freshwater flows out through an outflow
/// zone beyond each coastline, with the same solution as the semi-confined coast (case 1).
#[derive(Clone, Debug)]
pub struct IslandInterface {
    /// Parameters of the island
    param: ParamIsland,

    /// Ghyben-Herzberg factor ρf / (ρs - ρf)
    alpha: f64,

    /// Discharge potential at the toe
    phitoe: f64,

    /// Constant of the discharge potential in the confined zone
    cc: f64,

    /// Outflow zone below the sea (if the sea floor is leaky)
    outflow: Option<OutflowZone>,
}

impl IslandInterface {
    /// Allocates a new instance
    pub fn new(param: &ParamIsland) -> Result<Self, InterfaceError> {
        param.validate()?;
        let (k, dd) = (param.k, param.dd);
        let alpha = param.rhof / (param.rhos - param.rhof);
        let outflow = if param.c > 0.0 {
            let lab = f64::sqrt(k * dd * param.c);
            let nu = density_ratio(param.rhof, param.rhos);
            let grad = param.nn * param.ll / (k * dd);
            let mu = grad * lab / dd / nu;
            let h0 = nu * dd * f64::cbrt(1.5 * mu * mu);
            Some(OutflowZone {
                lab,
                mu,
                h0,
                loutflow: f64::cbrt(18.0 * mu) * lab,
                phicoast: 0.5 * k * (alpha + 1.0) * h0 * h0,
            })
        } else {
            None
        };
        Ok(IslandInterface {
            param: *param,
            alpha,
            phitoe: 0.5 * k * (alpha + 1.0) / (alpha * alpha) * dd * dd,
            cc: -0.5 * k * (alpha + 1.0) / alpha * dd * dd,
            outflow,
        })
    }

    /// Returns the parameters
    pub fn param(&self) -> &ParamIsland {
        &self.param
    }

    /// Returns the discharge potential at the coastline
    pub fn phicoast(&self) -> f64 {
        self.outflow.map_or(0.0, |o| o.phicoast)
    }

    /// Returns the discharge potential at the toe
    pub fn phitoe(&self) -> f64 {
        self.phitoe
    }

    /// Returns the length of the outflow zone (zero if c = 0)
    pub fn outflow_length(&self) -> f64 {
        self.outflow.map_or(0.0, |o| o.loutflow)
    }

    /// Returns the dimensionless gradient at the coastline (zero if c = 0)
    pub fn mu(&self) -> f64 {
        self.outflow.map_or(0.0, |o| o.mu)
    }

    /// Returns the distance from the center to the toes, if the lens reaches the bottom
    pub fn toe(&self) -> Option<f64> {
        let ll = self.param.ll;
        let x2 = ll * ll - 2.0 * (self.phitoe - self.phicoast()) / self.param.nn;
        if x2 >= 0.0 {
            Some(f64::min(f64::sqrt(x2), ll))
        } else {
            None
        }
    }

    /// Calculates the discharge potential at x (|x| ≤ L)
    pub fn potential(&self, x: f64) -> f64 {
        let ll = self.param.ll;
        -0.5 * self.param.nn * (x * x - ll * ll) + self.phicoast()
    }

    /// Calculates the head and the elevation of the interface at x (|x| ≤ L)
    ///
    /// Returns `(h, zeta)`
    pub fn head_interface(&self, x: f64) -> Result<(f64, f64), InterfaceError> {
        if f64::abs(x) > self.param.ll {
            return Err(InterfaceError::InvalidInput("x must be within the island (|x| ≤ L)"));
        }
        Ok(self.head_interface_potential(self.potential(x)))
    }

    /// Converts the discharge potential into head and interface elevation
    fn head_interface_potential(&self, phi: f64) -> (f64, f64) {
        let (k, dd) = (self.param.k, self.param.dd);
        if phi <= self.phitoe {
            let h = f64::sqrt(2.0 * f64::max(0.0, phi) / (k * (self.alpha + 1.0)));
            (h, -self.alpha * h)
        } else {
            (f64::sqrt(2.0 / k * (phi - self.cc)) - dd, -dd)
        }
    }

    /// Computes `n` points across the island, from -L to L
    ///
    /// The discharge is Qx = N x.
    pub fn profile(&self, n: usize) -> Result<InterfaceProfile, InterfaceError> {
        if n < 2 {
            return Err(InterfaceError::InvalidInput("the number of points must be ≥ 2"));
        }
        let ll = self.param.ll;
        let mut profile = InterfaceProfile::new("Island", n);
        profile.x = linspace(-ll, ll, n);
        profile.qx = profile.x.iter().map(|x| self.param.nn * x).collect();
        for i in 0..n {
            let (h, zeta) = self.head_interface_potential(self.potential(profile.x[i]));
            profile.h[i] = h;
            profile.zeta[i] = zeta;
        }
        Ok(profile)
    }

    /// Computes `n` points along the outflow zone beyond the coastline at x = L
    ///
    /// The zone beyond x = -L is the mirror image.
    pub fn outflow_profile(&self, n: usize) -> Result<InterfaceProfile, InterfaceError> {
        let zone = self
            .outflow
            .ok_or(InterfaceError::NotImplemented("there is no outflow zone if c = 0"))?;
        if n < 2 {
            return Err(InterfaceError::InvalidInput("the number of points must be ≥ 2"));
        }
        let (k, dd) = (self.param.k, self.param.dd);
        let nu = density_ratio(self.param.rhof, self.param.rhos);
        let lo = zone.loutflow / zone.lab;
        let mut profile = InterfaceProfile::new("IslandOutflow", n);
        profile.qx = vec![0.0; n];
        for (i, x2) in linspace(0.0, zone.loutflow, n).into_iter().enumerate() {
            let u = x2 / zone.lab;
            let phi2 = (u - lo) * (u - lo) / 6.0;
            let h = nu * dd * phi2;
            let zeta = -h / nu;
            profile.x[i] = self.param.ll + x2;
            profile.h[i] = h;
            profile.zeta[i] = zeta;
            profile.qx[i] = -k * (-zeta) * dd * nu * (u - lo) / (3.0 * zone.lab);
        }
        Ok(profile)
    }

    /// Returns the head at the coastline
    pub fn coast_head(&self) -> f64 {
        self.outflow.map_or(0.0, |o| o.h0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::IslandInterface;
    use crate::base::{InterfaceError, ParamIsland};
    use russell_lab::approx_eq;

    #[test]
    fn new_captures_errors() {
        let mut param = ParamIsland::default();
        param.c = -1.0;
        assert_eq!(
            IslandInterface::new(&param).err(),
            Some(InterfaceError::InvalidInput("c must be ≥ 0"))
        );
    }

    #[test]
    fn island_without_outflow_zone_works() {
        let island = IslandInterface::new(&ParamIsland::default()).unwrap();
        approx_eq(island.phitoe(), 320.3125, 1e-12);
        assert_eq!(island.phicoast(), 0.0);
        assert_eq!(island.outflow_length(), 0.0);

        // the lens reaches the bottom around the center
        let toe = island.toe().unwrap();
        approx_eq(toe, f64::sqrt(359375.0), 1e-9);
        let (h, zeta) = island.head_interface(toe).unwrap();
        approx_eq(h, 1.25, 1e-9);
        approx_eq(zeta, -50.0, 1e-7);
        let (h, zeta) = island.head_interface(0.0).unwrap();
        approx_eq(h, f64::sqrt(2662.5) - 50.0, 1e-12);
        assert_eq!(zeta, -50.0);

        // coastline
        let (h, zeta) = island.head_interface(1000.0).unwrap();
        assert_eq!(h, 0.0);
        assert_eq!(zeta, 0.0);

        assert_eq!(
            island.head_interface(1000.1).err(),
            Some(InterfaceError::InvalidInput("x must be within the island (|x| ≤ L)"))
        );
        assert_eq!(
            island.outflow_profile(10).err(),
            Some(InterfaceError::NotImplemented("there is no outflow zone if c = 0"))
        );
    }

    #[test]
    fn thin_lens_does_not_reach_the_bottom() {
        let param = ParamIsland {
            dd: 1000.0,
            ..ParamIsland::default()
        };
        let island = IslandInterface::new(&param).unwrap();
        assert_eq!(island.toe(), None);
        let (h, zeta) = island.head_interface(0.0).unwrap();
        // φ(0) = N L²/2 = 500; h = √(2φ / (k (α + 1)))
        approx_eq(h, f64::sqrt(1000.0 / 410.0), 1e-14);
        approx_eq(zeta, -40.0 * h, 1e-13);
    }

    #[test]
    fn profile_works() {
        let island = IslandInterface::new(&ParamIsland::default()).unwrap();
        let profile = island.profile(21).unwrap();
        assert_eq!(profile.name, "Island");
        assert_eq!(profile.len(), 21);
        assert_eq!(profile.x[0], -1000.0);
        assert_eq!(profile.x[20], 1000.0);
        approx_eq(profile.qx[0], -1.0, 1e-15);
        approx_eq(profile.qx[20], 1.0, 1e-15);
        // symmetric lens
        for i in 0..21 {
            approx_eq(profile.h[i], profile.h[20 - i], 1e-12);
            approx_eq(profile.zeta[i], profile.zeta[20 - i], 1e-10);
            assert!(profile.zeta[i] >= -50.0);
        }
        assert_eq!(
            island.profile(1).err(),
            Some(InterfaceError::InvalidInput("the number of points must be ≥ 2"))
        );
    }

    #[test]
    fn outflow_zone_works() {
        let param = ParamIsland {
            c: 100.0,
            ..ParamIsland::default()
        };
        let island = IslandInterface::new(&param).unwrap();
        let lab = f64::sqrt(50000.0);
        let mu = 0.002 * lab / 50.0 / 0.025;
        approx_eq(island.mu(), mu, 1e-14);
        approx_eq(island.outflow_length(), f64::cbrt(18.0 * mu) * lab, 1e-10);
        assert!(island.phicoast() > 0.0);

        // the head is continuous at the coastline
        let (h, _) = island.head_interface(1000.0).unwrap();
        approx_eq(h, island.coast_head(), 1e-12);
        let outflow = island.outflow_profile(11).unwrap();
        approx_eq(outflow.x[0], 1000.0, 1e-15);
        approx_eq(outflow.x[10], 1000.0 + island.outflow_length(), 1e-10);
        approx_eq(outflow.h[0], island.coast_head(), 1e-12);
        approx_eq(outflow.h[10], 0.0, 1e-15);
        approx_eq(outflow.zeta[0], -island.coast_head() / 0.025, 1e-9);

        // the discharge at the coastline equals the recharge over half the island
        approx_eq(outflow.qx[0], 0.001 * 1000.0, 1e-12);
        approx_eq(outflow.qx[10], 0.0, 1e-15);
    }
}
