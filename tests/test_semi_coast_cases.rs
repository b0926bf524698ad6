use plotpy::linspace;
use russell_lab::approx_eq;
use russell_lab::math::SQRT_2_BY_3;
use saltfront::analytical::{fint, RegimeSolution};
use saltfront::prelude::*;

// Semi-confined coastal aquifer with k = 10 m/d, H = 10 m, c = 100 d (λ = 100 m),
// ρf = 1000 and ρs = 1025 (ν = 0.025). The four regimes are obtained by changing
// the gradient and the length of the aquifer below the sea.
//
//   land (x < 0)        │        sea (x > 0)
//   ════════════════════╪═══════════════════════╗
//    fresh →            │  ↑ ↑ ↑ outflow zone   ║
//   ────────────────────┼───────────────────────╜
//                      x=0                     x=L

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
fn test_semi_coast_concrete_cases() -> Result<(), InterfaceError> {
    // case 1: μ = 0.2 < √(2/3) and the outflow zone fits
    let sc = SemiCoast::new(&param(0.0005, 1000.0))?;
    assert_eq!(sc.case(), 1);
    approx_eq(sc.mu(), 0.2, 1e-14);
    assert!(sc.mu() < SQRT_2_BY_3);
    assert!(sc.tip() <= 1000.0);

    // case 2: μ = 1.5 ≥ √(2/3) and the outflow zone fits
    let sc = SemiCoast::new(&param(0.00375, 1000.0))?;
    assert_eq!(sc.case(), 2);
    assert!(sc.mu() >= SQRT_2_BY_3);
    assert!(sc.tip() <= 1000.0);

    // case 3 or 4: the natural extent of case 1 does not fit in L = 80
    let sc = SemiCoast::new(&param(0.0005, 80.0))?;
    assert!(sc.case() == 3 || sc.case() == 4);
    assert_eq!(sc.case(), 3);

    // case 4
    let sc = SemiCoast::new(&param(0.00375, 150.0))?;
    assert_eq!(sc.case(), 4);
    Ok(())
}

#[test]
fn test_semi_coast_domain_fit() -> Result<(), InterfaceError> {
    for grad in linspace(0.0002, 0.006, 15) {
        for ll in [50.0, 120.0, 200.0, 400.0, 1000.0, f64::INFINITY] {
            let sc = SemiCoast::new(&param(grad, ll))?;
            match *sc.solution() {
                RegimeSolution::Case1 { loverlab, .. } => {
                    assert!(sc.mu() < SQRT_2_BY_3);
                    assert!(loverlab * sc.lab() <= ll);
                }
                RegimeSolution::Case2 {
                    doverlab, loverlab, ..
                } => {
                    assert!(sc.mu() >= SQRT_2_BY_3);
                    assert!((loverlab + doverlab) * sc.lab() <= ll);
                }
                RegimeSolution::Case3 { lsoverlab, phi0, a, .. } => {
                    approx_eq(lsoverlab * sc.lab(), ll, 1e-10);
                    assert!(a > 0.0 && phi0 > 0.0 && phi0 < 1.0);
                    // the natural extent of case 1 does not fit
                    assert!(f64::cbrt(18.0 * sc.mu()) * sc.lab() > ll);
                }
                RegimeSolution::Case4 {
                    lsoverlab, phicoast, ..
                } => {
                    approx_eq(lsoverlab * sc.lab(), ll, 1e-10);
                    assert!(phicoast >= 1.0);
                }
            }
            // the interface lies between the toe and the tip
            let (x, _) = sc.interface(30)?;
            for xi in &x {
                assert!(*xi >= sc.toe() - 1e-8 && *xi <= sc.tip() + 1e-8);
            }
        }
    }
    Ok(())
}

#[test]
fn test_semi_coast_round_trip_case1() -> Result<(), InterfaceError> {
    let sc = SemiCoast::new(&param(0.0005, 1000.0))?;
    for x in linspace(3.0 * sc.toe(), -0.5, 40) {
        let h = sc.head(x)?;
        let x_back = sc.onshorex(h);
        approx_eq(x_back, x, 1e-6 * f64::abs(x));
    }
    Ok(())
}

#[test]
fn test_semi_coast_regime_boundary() -> Result<(), InterfaceError> {
    // grad such that μ = √(2/3); nearby gradients must give nearby toes and tips
    let grad = SQRT_2_BY_3 * 10.0 * 0.025 / 100.0;
    let mut toes = Vec::new();
    let mut tips = Vec::new();
    for factor in [1.0 - 1e-9, 1.0 - 1e-15, 1.0, 1.0 + 1e-15, 1.0 + 1e-9] {
        let sc = SemiCoast::new(&param(grad * factor, 1000.0))?;
        assert!(sc.case() == 1 || sc.case() == 2);
        toes.push(sc.toe());
        tips.push(sc.tip());
    }
    for i in 1..toes.len() {
        approx_eq(toes[i], toes[0], 1e-5);
        approx_eq(tips[i], tips[0], 1e-5);
    }
    Ok(())
}

#[test]
fn test_fint_is_monotonic() {
    for a in [0.05, 0.3, 1.0, 3.0] {
        let phi = linspace(0.0, 1.0, 51);
        let values: Vec<_> = phi.iter().map(|p| fint(*p, a).unwrap()).collect();
        for i in 1..values.len() {
            assert!(values[i] < values[i - 1]);
        }
    }
}

#[test]
fn test_semi_coast_truncation_boundaries() -> Result<(), InterfaceError> {
    // shortening L just below the tip of case 2 leads to case 4 with the same toe
    let unbounded = SemiCoast::new(&param(0.00375, 1000.0))?;
    assert_eq!(unbounded.case(), 2);
    for delta in [1e-9, 1e-6, 1e-3, 1.0, 5.0, 20.0] {
        let sc = SemiCoast::new(&param(0.00375, unbounded.tip() - delta))?;
        assert_eq!(sc.case(), 4, "L = tip - {}", delta);
        approx_eq(sc.toe(), unbounded.toe(), 1e-3);
        let (x, _) = sc.interface(20)?;
        approx_eq(x[0], sc.toe(), 1e-6);
        approx_eq(x[19], sc.tip(), 1e-9);
    }

    // shortening L just below the tip of case 1 leads to case 3 with the same toe
    let unbounded = SemiCoast::new(&param(0.0005, 1000.0))?;
    assert_eq!(unbounded.case(), 1);
    for delta in [1e-9, 1e-6, 1e-3, 1.0, 5.0] {
        let sc = SemiCoast::new(&param(0.0005, unbounded.tip() - delta))?;
        assert_eq!(sc.case(), 3, "L = tip - {}", delta);
        approx_eq(sc.toe(), unbounded.toe(), 1e-6);
        let (x, _) = sc.interface(20)?;
        approx_eq(x[0], sc.toe(), 1e-6);
    }

    // increasing the gradient with L = 150 m moves from case 3 to case 4 without jumps
    let mut previous: Option<(usize, f64)> = None;
    for grad in linspace(0.001, 0.004, 61) {
        let sc = SemiCoast::new(&param(grad, 150.0))?;
        assert!(sc.case() == 3 || sc.case() == 4, "grad = {}", grad);
        let (x, _) = sc.interface(20)?;
        approx_eq(x[0], sc.toe(), 1e-6);
        if let Some((case, toe)) = previous {
            assert!(sc.case() >= case, "grad = {}", grad);
            assert!(f64::abs(sc.toe() - toe) < 10.0, "grad = {}", grad);
        }
        previous = Some((sc.case(), sc.toe()));
    }
    assert_eq!(previous.map(|(case, _)| case), Some(4));
    Ok(())
}
