use super::{DEFAULT_ATR_GUESS, DEFAULT_N_POINT};
use crate::StrError;
use std::fmt;

/// Holds configuration data for the numerical solution (root finding and sampling)
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Tolerance for the root finder (absolute, on the unknown)
    pub tol_root: f64,

    /// Largest residual of a root equation accepted as a solution
    pub tol_residual: f64,

    /// Maximum number of iterations of the root finder
    pub n_iteration_max: usize,

    /// Maximum number of steps allowed while searching for a bracket
    pub n_bracket_max: usize,

    /// Starting guess for the transition parameter `atr`
    pub atr_guess: f64,

    /// Number of points along the interface
    pub n_point: usize,

    /// Prints a summary after each solution
    pub verbose: bool,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            tol_root: 1e-12,
            tol_residual: 1e-10,
            n_iteration_max: 100,
            n_bracket_max: 60,
            atr_guess: DEFAULT_ATR_GUESS,
            n_point: DEFAULT_N_POINT,
            verbose: false,
        }
    }

    /// Sets the tolerance of the root finder
    pub fn set_tol_root(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value >= 1e-15 && value <= 1e-2) {
            return Err("tol_root must be in [1e-15, 1e-2]");
        }
        self.tol_root = value;
        Ok(self)
    }

    /// Sets the largest accepted residual of the root equations
    pub fn set_tol_residual(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value >= 1e-15 && value <= 1e-4) {
            return Err("tol_residual must be in [1e-15, 1e-4]");
        }
        self.tol_residual = value;
        Ok(self)
    }

    /// Sets the maximum number of iterations of the root finder
    pub fn set_n_iteration_max(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 2 {
            return Err("n_iteration_max must be ≥ 2");
        }
        self.n_iteration_max = value;
        Ok(self)
    }

    /// Sets the maximum number of bracket-expansion steps
    pub fn set_n_bracket_max(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_bracket_max must be ≥ 1");
        }
        self.n_bracket_max = value;
        Ok(self)
    }

    /// Sets the starting guess for the transition parameter
    pub fn set_atr_guess(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) {
            return Err("atr_guess must be > 0.0");
        }
        self.atr_guess = value;
        Ok(self)
    }

    /// Sets the number of points along the interface
    pub fn set_n_point(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 2 {
            return Err("n_point must be ≥ 2");
        }
        self.n_point = value;
        Ok(self)
    }

    /// Enables or disables the summary printing
    pub fn set_verbose(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.verbose = flag;
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "tol_root = {:?}\n", self.tol_root)?;
        write!(f, "tol_residual = {:?}\n", self.tol_residual)?;
        write!(f, "n_iteration_max = {:?}\n", self.n_iteration_max)?;
        write!(f, "n_bracket_max = {:?}\n", self.n_bracket_max)?;
        write!(f, "atr_guess = {:?}\n", self.atr_guess)?;
        write!(f, "n_point = {:?}\n", self.n_point)?;
        write!(f, "verbose = {:?}\n", self.verbose)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
