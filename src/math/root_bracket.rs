use crate::base::Config;
use crate::StrError;
use russell_lab::RootFinder;

/// Specifies how a bracket grows while searching for a sign change
#[derive(Clone, Copy, Debug)]
pub enum Expansion {
    /// Shifts both ends by a fixed amount: x0 ± k·step
    Additive(f64),

    /// Scales both ends by a fixed factor: x0·factor^±k (for unknowns that must stay positive)
    Multiplicative(f64),
}

/// Allocates a Brent solver with the tolerance and the iteration budget of a configuration
pub fn root_finder(config: &Config) -> RootFinder {
    let mut solver = RootFinder::new();
    solver.brent_tolerance = config.tol_root;
    solver.brent_max_iterations = config.n_iteration_max;
    solver
}

/// Searches for an interval [xa, xb] where f changes sign, starting from x0
///
/// The lower and upper ends are moved alternately away from x0. A function value that
/// cannot be computed at a trial point stops the expansion in that direction.
///
/// Returns `(xa, xb)` with xa ≤ xb (xa = xb = x0 if f(x0) = 0)
pub fn bracket_root<F, A>(
    x0: f64,
    expansion: Expansion,
    n_bracket_max: usize,
    args: &mut A,
    mut f: F,
) -> Result<(f64, f64), StrError>
where
    F: FnMut(f64, &mut A) -> Result<f64, StrError>,
{
    let step = |x: f64, up: bool| match expansion {
        Expansion::Additive(delta) => {
            if up {
                x + delta
            } else {
                x - delta
            }
        }
        Expansion::Multiplicative(factor) => {
            if up {
                x * factor
            } else {
                x / factor
            }
        }
    };
    let f0 = f(x0, args)?;
    if !f0.is_finite() {
        return Err("f(x0) must be finite");
    }
    if f0 == 0.0 {
        return Ok((x0, x0));
    }
    let (mut lo, mut f_lo, mut lo_ok) = (x0, f0, true);
    let (mut hi, mut f_hi, mut hi_ok) = (x0, f0, true);
    for _ in 0..n_bracket_max {
        if lo_ok {
            let x = step(lo, false);
            match f(x, args) {
                Ok(fx) if fx.is_finite() => {
                    if fx * f_lo <= 0.0 {
                        return Ok((x, lo));
                    }
                    lo = x;
                    f_lo = fx;
                }
                _ => lo_ok = false,
            }
        }
        if hi_ok {
            let x = step(hi, true);
            match f(x, args) {
                Ok(fx) if fx.is_finite() => {
                    if fx * f_hi <= 0.0 {
                        return Ok((hi, x));
                    }
                    hi = x;
                    f_hi = fx;
                }
                _ => hi_ok = false,
            }
        }
        if !lo_ok && !hi_ok {
            break;
        }
    }
    Err("cannot find a sign change")
}

/// Finds the root of f in [xa, xb] using Brent's method
///
/// An end point is accepted as the root if |f| ≤ `tol_residual` there; this covers roots
/// lying on the boundary of the interval, where Brent's method requires a strict sign change.
///
/// Returns `(root, n_iterations)`
pub fn find_root<F, A>(
    solver: &RootFinder,
    xa: f64,
    xb: f64,
    tol_residual: f64,
    args: &mut A,
    mut f: F,
) -> Result<(f64, usize), StrError>
where
    F: FnMut(f64, &mut A) -> Result<f64, StrError>,
{
    let fa = f(xa, args)?;
    let fb = f(xb, args)?;
    if !fa.is_finite() || !fb.is_finite() {
        return Err("f(xa) and f(xb) must be finite");
    }
    if f64::abs(fa) <= tol_residual || f64::abs(fb) <= tol_residual {
        let root = if f64::abs(fa) <= f64::abs(fb) { xa } else { xb };
        return Ok((root, 0));
    }
    if fa * fb > 0.0 {
        return Err("f(xa) and f(xb) must have opposite signs");
    }
    let (root, stats) = solver.brent(xa, xb, args, f)?;
    Ok((root, stats.n_iterations))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
