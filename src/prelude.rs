//! Makes available common structures needed to compute an interface
//!
//! You may write `use saltfront::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analytical::{IslandInterface, RegimeSolution, SemiCoast, SemiCoastHead, WellNearCoast};
pub use crate::base::{Config, InterfaceError, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::base::{ParamIsland, ParamModel, ParamSemiCoast, ParamSemiCoastHead, ParamWellNearCoast};
pub use crate::util::InterfaceProfile;
