//! Saltfront -- analytical saltwater-freshwater interface solutions for coastal aquifers
//!
//! The solutions assume steady-state flow, the Dupuit approximation, and a sharp interface
//! between fresh and salt groundwater. The main models are:
//!
//! * [analytical::SemiCoast] -- interface below a semi-confined aquifer extending under the sea
//! * [analytical::SemiCoastHead] -- the same model, given a head at an inland point instead of the gradient
//! * [analytical::IslandInterface] -- interface below a strip island with areal recharge
//! * [analytical::WellNearCoast] -- interface near a pumping well close to a straight coastline

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analytical;
pub mod base;
pub mod math;
pub mod prelude;
pub mod util;
