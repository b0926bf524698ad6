//! Implements the root-finding support around Brent's method (bracket search and end-point checks)

mod root_bracket;
pub use crate::math::root_bracket::*;
