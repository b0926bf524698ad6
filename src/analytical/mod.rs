//! This module contains the analytical solutions for the saltwater-freshwater interface

mod fint;
mod island_interface;
mod regime;
mod semi_coast;
mod semi_coast_head;
mod well_near_coast;

pub use fint::*;
pub use island_interface::*;
pub use regime::*;
pub use semi_coast::*;
pub use semi_coast_head::*;
pub use well_near_coast::*;
