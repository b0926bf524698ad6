use super::InterfaceError;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn infinite_length() -> f64 {
    f64::INFINITY
}

/// Holds parameters for the interface in a semi-confined coastal aquifer
///
/// The aquifer extends below the sea floor for a length `ll` and is covered there by
/// a semi-confining layer with resistance `c`. The coastline is at `x = 0`; the land
/// is at `x < 0`.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamSemiCoast {
    /// Hydraulic conductivity k
    pub k: f64,

    /// Aquifer thickness H
    pub hh: f64,

    /// Resistance c of the semi-confining layer below the sea
    pub c: f64,

    /// Background head gradient inland
    pub grad: f64,

    /// Density of freshwater
    pub rhof: f64,

    /// Density of saltwater
    pub rhos: f64,

    /// Length L of the aquifer below the sea (infinite if absent)
    #[serde(default = "infinite_length")]
    pub ll: f64,

    /// Elevation of the top of the aquifer
    #[serde(default)]
    pub ztop: f64,

    /// Sea level
    #[serde(default)]
    pub sealevel: f64,
}

/// Holds parameters for the semi-confined coastal aquifer given a head at an inland point
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamSemiCoastHead {
    /// Hydraulic conductivity k
    pub k: f64,

    /// Aquifer thickness H
    pub hh: f64,

    /// Resistance c of the semi-confining layer below the sea
    pub c: f64,

    /// Head at the inland point
    pub h: f64,

    /// Position of the inland point (must be ≤ 0)
    pub x: f64,

    /// Density of freshwater
    pub rhof: f64,

    /// Density of saltwater
    pub rhos: f64,

    /// Length L of the aquifer below the sea (infinite if absent)
    #[serde(default = "infinite_length")]
    pub ll: f64,

    /// Elevation of the top of the aquifer
    #[serde(default)]
    pub ztop: f64,

    /// Sea level
    #[serde(default)]
    pub sealevel: f64,
}

/// Holds parameters for the interface below a strip island with areal recharge
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamIsland {
    /// Hydraulic conductivity k
    pub k: f64,

    /// Depth D of the aquifer bottom below sea level
    pub dd: f64,

    /// Resistance c of the semi-confining layer offshore (zero means no outflow zone)
    #[serde(default)]
    pub c: f64,

    /// Density of freshwater
    pub rhof: f64,

    /// Density of saltwater
    pub rhos: f64,

    /// Half-width L of the island
    pub ll: f64,

    /// Areal recharge N
    pub nn: f64,
}

/// Holds parameters for the interface around a pumping well near a straight coastline
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamWellNearCoast {
    /// Hydraulic conductivity k
    pub k: f64,

    /// Depth D of the aquifer bottom below sea level
    pub dd: f64,

    /// Density of freshwater
    pub rhof: f64,

    /// Density of saltwater
    pub rhos: f64,

    /// Uniform discharge toward the coast (per unit coastline length)
    pub q0: f64,

    /// Distance d from the well to the coastline
    pub d: f64,

    /// Radius of the well
    pub rw: f64,

    /// Discharge Q of the well
    pub qq: f64,
}

/// Selects one of the models and its parameters (e.g., from a JSON file)
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(tag = "model")]
pub enum ParamModel {
    SemiCoast(ParamSemiCoast),
    SemiCoastHead(ParamSemiCoastHead),
    Island(ParamIsland),
    WellNearCoast(ParamWellNearCoast),
}

/// Returns the density ratio ν = (ρs - ρf) / ρf
pub fn density_ratio(rhof: f64, rhos: f64) -> f64 {
    (rhos - rhof) / rhof
}

/// Returns the equivalent freshwater head of the sea at the top of the aquifer
pub fn equivalent_sea_head(rhof: f64, rhos: f64, ztop: f64, sealevel: f64) -> f64 {
    sealevel + (sealevel - ztop) * density_ratio(rhof, rhos)
}

fn check_densities(rhof: f64, rhos: f64) -> Result<(), InterfaceError> {
    if !(rhof > 0.0) {
        return Err(InterfaceError::InvalidInput("rhof must be > 0"));
    }
    if !(rhos > rhof) {
        return Err(InterfaceError::InvalidInput("rhos must be > rhof"));
    }
    Ok(())
}

impl ParamSemiCoast {
    /// Checks the parameters
    pub fn validate(&self) -> Result<(), InterfaceError> {
        if !(self.k > 0.0) {
            return Err(InterfaceError::InvalidInput("k must be > 0"));
        }
        if !(self.hh > 0.0) {
            return Err(InterfaceError::InvalidInput("H must be > 0"));
        }
        if !(self.c > 0.0) {
            return Err(InterfaceError::InvalidInput("c must be > 0"));
        }
        if !(self.grad > 0.0) || !self.grad.is_finite() {
            return Err(InterfaceError::InvalidInput("grad must be positive and finite"));
        }
        if !(self.ll > 0.0) {
            return Err(InterfaceError::InvalidInput("L must be > 0"));
        }
        check_densities(self.rhof, self.rhos)
    }
}

impl ParamSemiCoastHead {
    /// Checks the parameters (except the head, which depends on the equivalent sea head)
    pub fn validate(&self) -> Result<(), InterfaceError> {
        if !(self.x <= 0.0) {
            return Err(InterfaceError::InvalidInput("x must be ≤ 0"));
        }
        if !(self.k > 0.0) {
            return Err(InterfaceError::InvalidInput("k must be > 0"));
        }
        if !(self.hh > 0.0) {
            return Err(InterfaceError::InvalidInput("H must be > 0"));
        }
        if !(self.c > 0.0) {
            return Err(InterfaceError::InvalidInput("c must be > 0"));
        }
        if !(self.ll > 0.0) {
            return Err(InterfaceError::InvalidInput("L must be > 0"));
        }
        check_densities(self.rhof, self.rhos)
    }

    /// Returns the forward-model parameters for a given gradient and length
    pub fn with_gradient(&self, grad: f64, ll: f64) -> ParamSemiCoast {
        ParamSemiCoast {
            k: self.k,
            hh: self.hh,
            c: self.c,
            grad,
            rhof: self.rhof,
            rhos: self.rhos,
            ll,
            ztop: self.ztop,
            sealevel: self.sealevel,
        }
    }
}

impl ParamIsland {
    /// Checks the parameters
    pub fn validate(&self) -> Result<(), InterfaceError> {
        if !(self.k > 0.0) {
            return Err(InterfaceError::InvalidInput("k must be > 0"));
        }
        if !(self.dd > 0.0) {
            return Err(InterfaceError::InvalidInput("D must be > 0"));
        }
        if !(self.c >= 0.0) {
            return Err(InterfaceError::InvalidInput("c must be ≥ 0"));
        }
        if !(self.ll > 0.0) || !self.ll.is_finite() {
            return Err(InterfaceError::InvalidInput("L must be positive and finite"));
        }
        if !(self.nn > 0.0) {
            return Err(InterfaceError::InvalidInput("N must be > 0"));
        }
        check_densities(self.rhof, self.rhos)
    }
}

impl Default for ParamIsland {
    fn default() -> Self {
        ParamIsland {
            k: 10.0,
            dd: 50.0,
            c: 0.0,
            rhof: 1000.0,
            rhos: 1025.0,
            ll: 1000.0,
            nn: 0.001,
        }
    }
}

impl ParamWellNearCoast {
    /// Checks the parameters
    pub fn validate(&self) -> Result<(), InterfaceError> {
        if !(self.k > 0.0) {
            return Err(InterfaceError::InvalidInput("k must be > 0"));
        }
        if !(self.dd > 0.0) {
            return Err(InterfaceError::InvalidInput("D must be > 0"));
        }
        if !(self.q0 > 0.0) {
            return Err(InterfaceError::InvalidInput("Q0 must be > 0"));
        }
        if !(self.qq > 0.0) {
            return Err(InterfaceError::InvalidInput("Q must be > 0"));
        }
        if !(self.rw > 0.0) {
            return Err(InterfaceError::InvalidInput("rw must be > 0"));
        }
        if !(self.d > self.rw) {
            return Err(InterfaceError::InvalidInput("d must be > rw"));
        }
        check_densities(self.rhof, self.rhos)
    }
}

impl Default for ParamWellNearCoast {
    fn default() -> Self {
        ParamWellNearCoast {
            k: 10.0,
            dd: 20.0,
            rhof: 1000.0,
            rhos: 1025.0,
            q0: 0.2,
            d: 2000.0,
            rw: 0.3,
            qq: 800.0,
        }
    }
}

impl ParamModel {
    /// Reads a JSON file containing the model and its parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let param = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(param)
    }

    /// Returns the name of the model
    pub fn name(&self) -> &'static str {
        match self {
            ParamModel::SemiCoast(..) => "SemiCoast",
            ParamModel::SemiCoastHead(..) => "SemiCoastHead",
            ParamModel::Island(..) => "Island",
            ParamModel::WellNearCoast(..) => "WellNearCoast",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
