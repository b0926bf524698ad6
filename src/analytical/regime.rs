use super::fint_span;
use crate::base::{density_ratio, equivalent_sea_head, Config, InterfaceError, ParamSemiCoast};
use crate::math::{bracket_root, find_root, root_finder, Expansion};
use crate::StrError;
use log::debug;
use russell_lab::math::{ONE_BY_3, SQRT_2_BY_3, SQRT_6};

/// Holds the derived scales of a semi-confined coastal aquifer
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    /// Leakage factor λ = √(k H c)
    pub lab: f64,

    /// Density ratio ν = (ρs - ρf) / ρf
    pub nu: f64,

    /// Dimensionless gradient μ = grad λ / (H ν)
    pub mu: f64,

    /// Equivalent freshwater head of the sea at the top of the aquifer
    pub hs: f64,
}

impl Scales {
    /// Computes the scales from the parameters
    pub fn new(param: &ParamSemiCoast) -> Self {
        let lab = f64::sqrt(param.k * param.hh * param.c);
        let nu = density_ratio(param.rhof, param.rhos);
        Scales {
            lab,
            nu,
            mu: param.grad * lab / param.hh / nu,
            hs: equivalent_sea_head(param.rhof, param.rhos, param.ztop, param.sealevel),
        }
    }
}

/// Holds the solution of one of the four regimes of the interface below the sea
///
/// All lengths are divided by the leakage factor λ. The variable `doverlab` is the
/// distance between the coastline and the toe of the interface.
///
/// ```text
/// Case 1: toe inland (x < 0), tip below the sea; the outflow zone fits in L
/// Case 2: toe below the sea (x > 0); the outflow zone fits in L
/// Case 3: as case 1, but the outflow zone is truncated at L
/// Case 4: as case 2, but the outflow zone is truncated at L
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegimeSolution {
    Case1 {
        /// Distance from the coastline to the toe (inland)
        doverlab: f64,

        /// Dimensionless head at the coastline
        phi0: f64,

        /// Length of the outflow zone
        loverlab: f64,
    },
    Case2 {
        /// Distance from the coastline to the toe (below the sea)
        doverlab: f64,

        /// Dimensionless head at the coastline
        phicoast: f64,

        /// Length of the outflow zone beyond the toe
        loverlab: f64,
    },
    Case3 {
        /// Distance from the coastline to the toe (inland)
        doverlab: f64,

        /// Dimensionless head at the coastline
        phi0: f64,

        /// Shape parameter of the truncated outflow zone
        a: f64,

        /// Length of the aquifer below the sea
        lsoverlab: f64,
    },
    Case4 {
        /// Distance from the coastline to the toe (below the sea)
        doverlab: f64,

        /// Dimensionless head at the coastline
        phicoast: f64,

        /// Shape parameter of the truncated outflow zone
        a: f64,

        /// Length of the aquifer below the sea
        lsoverlab: f64,
    },
}

impl RegimeSolution {
    /// Returns the case number (1, 2, 3, or 4)
    pub fn case(&self) -> usize {
        match self {
            RegimeSolution::Case1 { .. } => 1,
            RegimeSolution::Case2 { .. } => 2,
            RegimeSolution::Case3 { .. } => 3,
            RegimeSolution::Case4 { .. } => 4,
        }
    }

    /// Returns the distance from the coastline to the toe (divided by λ)
    pub fn doverlab(&self) -> f64 {
        match *self {
            RegimeSolution::Case1 { doverlab, .. } => doverlab,
            RegimeSolution::Case2 { doverlab, .. } => doverlab,
            RegimeSolution::Case3 { doverlab, .. } => doverlab,
            RegimeSolution::Case4 { doverlab, .. } => doverlab,
        }
    }
}

/// Returns the toe distance of case 2, which is also the largest toe distance of case 4
fn doverlab_case2(mu: f64) -> f64 {
    f64::ln((mu + f64::sqrt(mu * mu + ONE_BY_3)) / (1.0 + SQRT_2_BY_3))
}

/// Returns the dimensionless head at the coastline of cases 2 and 4
fn phicoast_case4(mu: f64, doverlab: f64) -> f64 {
    1.0 / f64::cosh(doverlab) + mu * f64::tanh(doverlab)
}

/// Returns the toe distance of case 4 for a given shape parameter `a`
///
/// ```text
/// γ² = 2 (1 + a³) / 3
/// d(a) = ln((μ + √(μ² + 1 - γ²)) / (1 + γ))
/// ```
///
/// with d(0) = d₂ (the toe of case 2) and d(a₀) = 0 for a₀³ = 3μ²/2 - 1.
fn doverlab_case4(mu: f64, a: f64) -> f64 {
    let gamma_sq = 2.0 * (1.0 + a * a * a) / 3.0;
    f64::ln((mu + f64::sqrt(mu * mu + 1.0 - gamma_sq)) / (1.0 + f64::sqrt(gamma_sq)))
}

/// Converts a root-finding failure into a non-convergence error, logging the cause
fn non_convergence(cause: StrError, message: &'static str) -> InterfaceError {
    debug!("{}: {}", message, cause);
    InterfaceError::NonConvergence(message)
}

/// Checks the residual of a root equation at the solution
fn check_residual(residual: f64, config: &Config, message: &'static str) -> Result<(), InterfaceError> {
    if f64::abs(residual) > config.tol_residual {
        debug!("{}: residual = {:?}", message, residual);
        return Err(InterfaceError::NonConvergence(message));
    }
    Ok(())
}

/// Finds the transition value `atr` of the shape parameter between cases 3 and 4
///
/// If L/λ ≥ √6 the transition equation has no root (the unconstrained outflow zone of
/// case 2 starts fitting); then `atr = 0`, i.e., `mutr = √(2/3)`.
///
/// The unknown is s = √a because span(1, a) ≈ -√6 + C√a as a → 0.
fn find_atr(lsoverlab: f64, config: &Config) -> Result<f64, InterfaceError> {
    if lsoverlab >= SQRT_6 {
        return Ok(0.0);
    }
    let solver = root_finder(config);
    let residual = |s: f64, _: &mut usize| -> Result<f64, StrError> { Ok(fint_span(1.0, s * s)? + lsoverlab) };
    let s0 = f64::sqrt(config.atr_guess);
    let (s_lo, s_hi) = bracket_root(s0, Expansion::Multiplicative(2.0), config.n_bracket_max, &mut 0, residual)
        .map_err(|e| non_convergence(e, "atr cannot be bracketed"))?;
    let (s, n_iterations) = find_root(&solver, s_lo, s_hi, config.tol_residual, &mut 0, residual)
        .map_err(|e| non_convergence(e, "atr was not found"))?;
    let res = residual(s, &mut 0).map_err(InterfaceError::NonConvergence)?;
    check_residual(res, config, "the residual of the atr equation is too large")?;
    debug!("atr = {:?} found after {} iterations", s * s, n_iterations);
    Ok(s * s)
}

/// Solves case 3 for the shape parameter `a`; returns `(a, phi0)`
///
/// The unknown is s = √a in [0, √amax] with amax³ = 3μ²/2. The residual is
/// L/λ - (18μ)^(1/3) < 0 at s = 0 and L/λ > 0 at s = √amax.
fn solve_case3(mu: f64, lsoverlab: f64, config: &Config) -> Result<(f64, f64), InterfaceError> {
    let phi0_max_cubed = 1.5 * mu * mu;
    let amax = f64::cbrt(phi0_max_cubed);
    let phi0_of = |a: f64| f64::cbrt(f64::max(0.0, phi0_max_cubed - a * a * a));
    let residual = |s: f64, _: &mut usize| -> Result<f64, StrError> {
        let a = s * s;
        Ok(fint_span(phi0_of(a), a)? + lsoverlab)
    };
    let solver = root_finder(config);
    let (s, n_iterations) = find_root(&solver, 0.0, f64::sqrt(amax), config.tol_residual, &mut 0, residual)
        .map_err(|e| non_convergence(e, "a was not found for case 3"))?;
    let res = residual(s, &mut 0).map_err(InterfaceError::NonConvergence)?;
    check_residual(res, config, "the residual of case 3 is too large")?;
    let a = s * s;
    debug!("case 3: a = {:?} found after {} iterations", a, n_iterations);
    Ok((a, phi0_of(a)))
}

/// Solves case 4 for the toe distance; returns `(doverlab, a)`
///
/// The unknown is s = √a in [0, √a₀] with a₀³ = 3μ²/2 - 1 and the toe distance is given
/// by [doverlab_case4]. The residual is L/λ - √6 - d₂ < 0 at s = 0 (case 2 does not fit)
/// and non-negative at s = √a₀ for μ ≥ μtr.
fn solve_case4(mu: f64, lsoverlab: f64, config: &Config) -> Result<(f64, f64), InterfaceError> {
    let a0 = f64::cbrt(f64::max(0.0, 1.5 * mu * mu - 1.0));
    let residual = |s: f64, _: &mut usize| -> Result<f64, StrError> {
        let a = s * s;
        Ok(fint_span(1.0, a)? + lsoverlab - doverlab_case4(mu, a))
    };
    let solver = root_finder(config);
    let (s, n_iterations) = find_root(&solver, 0.0, f64::sqrt(a0), config.tol_residual, &mut 0, residual)
        .map_err(|e| non_convergence(e, "doverlab was not found for case 4"))?;
    let res = residual(s, &mut 0).map_err(InterfaceError::NonConvergence)?;
    check_residual(res, config, "the residual of case 4 is too large")?;
    let a = s * s;
    let doverlab = doverlab_case4(mu, a);
    debug!("case 4: doverlab = {:?} found after {} iterations", doverlab, n_iterations);
    Ok((doverlab, a))
}

/// Classifies the regime and solves the corresponding equations
///
/// The classification runs as follows:
///
/// 1. μ < √(2/3): the toe is inland; case 1 if the outflow zone (18μ)^(1/3) λ fits in L
/// 2. μ ≥ √(2/3): the toe is below the sea; case 2 if d + √6 λ fits in L
/// 3. otherwise, case 3 if μ < μtr (transition value), or case 4 if μ ≥ μtr
pub fn solve(param: &ParamSemiCoast, config: &Config) -> Result<RegimeSolution, InterfaceError> {
    param.validate()?;
    let Scales { lab, mu, .. } = Scales::new(param);

    // cases 1 and 2 (the outflow zone fits in the domain)
    if mu < SQRT_2_BY_3 {
        let loverlab = f64::cbrt(18.0 * mu);
        if loverlab * lab <= param.ll {
            let phi0 = f64::cbrt(1.5 * mu * mu);
            let solution = RegimeSolution::Case1 {
                doverlab: (1.0 - phi0 * phi0) / (2.0 * mu),
                phi0,
                loverlab,
            };
            debug!("mu = {:?} → {:?}", mu, solution);
            return Ok(solution);
        }
    } else {
        let loverlab = SQRT_6;
        let doverlab = doverlab_case2(mu);
        if (loverlab + doverlab) * lab <= param.ll {
            let solution = RegimeSolution::Case2 {
                doverlab,
                phicoast: phicoast_case4(mu, doverlab),
                loverlab,
            };
            debug!("mu = {:?} → {:?}", mu, solution);
            return Ok(solution);
        }
    }

    // cases 3 and 4 (the outflow zone is truncated)
    let lsoverlab = param.ll / lab;
    let atr = find_atr(lsoverlab, config)?;
    let mutr = f64::sqrt(2.0 * (1.0 + atr * atr * atr) / 3.0);
    let solution = if mu < mutr {
        let (a, phi0) = solve_case3(mu, lsoverlab, config)?;
        RegimeSolution::Case3 {
            doverlab: (1.0 - phi0 * phi0) / (2.0 * mu),
            phi0,
            a,
            lsoverlab,
        }
    } else {
        let (doverlab, a) = solve_case4(mu, lsoverlab, config)?;
        RegimeSolution::Case4 {
            doverlab,
            phicoast: phicoast_case4(mu, doverlab),
            a,
            lsoverlab,
        }
    };
    debug!("mu = {:?}, mutr = {:?} → {:?}", mu, mutr, solution);
    Ok(solution)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
