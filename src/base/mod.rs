//! Implements the base structures: constants, errors, parameters, and configuration

mod config;
mod constants;
mod error;
mod parameters;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::error::*;
pub use crate::base::parameters::*;
