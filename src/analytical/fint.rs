use crate::StrError;
use russell_lab::math::{elliptic_e, elliptic_f, PI, SQRT_3, SQRT_6};

/// Holds the parameter κ² = (2 + √3)/4 of the elliptic integrals
pub const KAPPA_SQ: f64 = (2.0 + SQRT_3) / 4.0;

/// Evaluates the elliptic-integral combination describing the interface in the outflow zone
///
/// ```text
/// θ = arccos(-1 + 2√3 / (√3 + 1 + φ/a))
///
/// fint(φ, a) = (3^(-1/4) - 3^(1/4)) F(θ|κ²) + 2·3^(1/4) E(θ|κ²)
///              - 2·3^(1/4) sin θ √(1 - κ² sin²θ) / (1 + cos θ)
/// ```
///
/// The function decreases monotonically with φ for φ ≥ 0.
///
/// # Input
///
/// * `phi` -- dimensionless head φ ≥ 0
/// * `a` -- shape parameter of the regime (must be > 0)
///
/// # Reference
///
/// 1. Bakker M (2006) Analytic solutions for interface flow in combined confined and
///    semi-confined, coastal aquifers. Advances in Water Resources, 29(3), 417-425
pub fn fint(phi: f64, a: f64) -> Result<f64, StrError> {
    if !(a > 0.0) {
        return Err("fint requires a > 0");
    }
    if phi < 0.0 {
        return Err("fint requires phi ≥ 0");
    }
    // w = 1 + cos θ is computed directly to keep accuracy when θ → π
    let w = 2.0 * SQRT_3 / (SQRT_3 + 1.0 + phi / a);
    let sin_theta = f64::sqrt(w * (2.0 - w));
    let r = f64::powf(3.0, 0.25);
    let (ff, ee) = if w >= 1.0 {
        let theta = f64::acos(w - 1.0);
        (elliptic_f(theta, KAPPA_SQ)?, elliptic_e(theta, KAPPA_SQ)?)
    } else {
        // θ > π/2: F(θ) = 2K - F(π - θ) and E(θ) = 2E - E(π - θ)
        let theta_c = f64::acos(1.0 - w);
        let kk = elliptic_f(PI / 2.0, KAPPA_SQ)?;
        let em = elliptic_e(PI / 2.0, KAPPA_SQ)?;
        (
            2.0 * kk - elliptic_f(theta_c, KAPPA_SQ)?,
            2.0 * em - elliptic_e(theta_c, KAPPA_SQ)?,
        )
    };
    let algebraic = sin_theta * f64::sqrt(1.0 - KAPPA_SQ * sin_theta * sin_theta) / w;
    Ok((1.0 / r - r) * ff + 2.0 * r * ee - 2.0 * r * algebraic)
}

/// Evaluates fint for a series of φ values
pub fn fint_vec(phi: &[f64], a: f64) -> Result<Vec<f64>, StrError> {
    phi.iter().map(|p| fint(*p, a)).collect()
}

/// Evaluates the dimensionless horizontal span of the outflow zone between heads φ and 0
///
/// ```text
/// span(φ, a) = √(3a/2) (fint(φ, a) - fint(0, a))
/// ```
///
/// The span is negative for φ > 0. For a → 0, it tends to -√6 √φ, the span of the
/// unconstrained outflow zone; this limit is returned for a = 0.
pub fn fint_span(phi: f64, a: f64) -> Result<f64, StrError> {
    if a < 0.0 {
        return Err("fint_span requires a ≥ 0");
    }
    if phi < 0.0 {
        return Err("fint_span requires phi ≥ 0");
    }
    if phi == 0.0 {
        return Ok(0.0);
    }
    if a == 0.0 {
        return Ok(-SQRT_6 * f64::sqrt(phi));
    }
    Ok(f64::sqrt(1.5 * a) * (fint(phi, a)? - fint(0.0, a)?))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
