use super::SemiCoast;
use crate::base::{equivalent_sea_head, Config, InterfaceError, ParamSemiCoastHead, INITIAL_GRADIENT};
use crate::math::{bracket_root, find_root, root_finder, Expansion};
use crate::StrError;
use log::info;
use std::fmt;

/// Implements the semi-confined coastal aquifer given the head at an inland point
///
/// The background gradient is found such that the head at `x` equals `h`. The gradient is
/// searched in log-space to keep it positive. The search is first carried out with an
/// infinitely long aquifer below the sea; if the resulting tip lies beyond the actual
/// length L, the search is repeated with L, starting from the first gradient.
#[derive(Clone, Debug)]
pub struct SemiCoastHead {
    param: ParamSemiCoastHead,
    grad: f64,
    n_stage: usize,
    model: SemiCoast,
}

impl SemiCoastHead {
    /// Allocates a new instance with the default configuration
    pub fn new(param: &ParamSemiCoastHead) -> Result<Self, InterfaceError> {
        SemiCoastHead::new_with_config(param, &Config::new())
    }

    /// Allocates a new instance
    pub fn new_with_config(param: &ParamSemiCoastHead, config: &Config) -> Result<Self, InterfaceError> {
        param.validate()?;
        let hs = equivalent_sea_head(param.rhof, param.rhos, param.ztop, param.sealevel);
        if !(param.h > hs) {
            return Err(InterfaceError::InvalidInput(
                "h must be greater than the equivalent freshwater head of the sea",
            ));
        }
        let mut inner = *config;
        inner.verbose = false;

        // stage 1: infinite aquifer below the sea
        let lg_start = if param.x < 0.0 {
            f64::ln((param.h - hs) / f64::abs(param.x))
        } else {
            f64::ln(INITIAL_GRADIENT)
        };
        let mut grad = find_gradient(param, f64::INFINITY, lg_start, &inner)?;
        let mut n_stage = 1;
        let unbounded = SemiCoast::new_with_config(&param.with_gradient(grad, f64::INFINITY), &inner)?;

        // stage 2: actual length, warm-started
        if unbounded.tip() > param.ll {
            grad = find_gradient(param, param.ll, f64::ln(grad), &inner)?;
            n_stage = 2;
        }
        let model = SemiCoast::new_with_config(&param.with_gradient(grad, param.ll), config)?;
        info!(
            "gradient = {:?} (case {}) found after {} stage(s)",
            grad,
            model.case(),
            n_stage
        );
        Ok(SemiCoastHead {
            param: *param,
            grad,
            n_stage,
            model,
        })
    }

    /// Returns the gradient that yields the given head at the given point
    pub fn grad(&self) -> f64 {
        self.grad
    }

    /// Returns the number of stages of the search (1 or 2)
    pub fn n_stage(&self) -> usize {
        self.n_stage
    }

    /// Returns the parameters
    pub fn param(&self) -> &ParamSemiCoastHead {
        &self.param
    }

    /// Returns the solved model (with the found gradient)
    pub fn model(&self) -> &SemiCoast {
        &self.model
    }
}

/// Finds the gradient (log-transformed) such that onshorex(h) = x for a given length L
fn find_gradient(param: &ParamSemiCoastHead, ll: f64, lg_start: f64, config: &Config) -> Result<f64, InterfaceError> {
    let residual = |lg: f64, _: &mut usize| -> Result<f64, StrError> {
        let model = SemiCoast::new_with_config(&param.with_gradient(f64::exp(lg), ll), config)
            .map_err(|e| e.message())?;
        Ok(model.onshorex(param.h) - param.x)
    };
    let solver = root_finder(config);
    let (lg_lo, lg_hi) = bracket_root(lg_start, Expansion::Additive(1.0), config.n_bracket_max, &mut 0, residual)
        .map_err(|_| InterfaceError::NonConvergence("the gradient cannot be bracketed"))?;
    let (lg, _) = find_root(&solver, lg_lo, lg_hi, config.tol_residual, &mut 0, residual)
        .map_err(|_| InterfaceError::NonConvergence("the gradient was not found"))?;
    Ok(f64::exp(lg))
}

impl fmt::Display for SemiCoastHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SemiCoastHead: h = {:?} at x = {:?}\n", self.param.h, self.param.x)?;
        write!(f, "grad = {:?}\n", self.grad)?;
        write!(f, "{}", self.model)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
