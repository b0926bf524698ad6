//! Contains the interface profile (output buffer) and the plotting functions

mod interface_profile;
mod plotting;

pub use interface_profile::*;
pub use plotting::*;
