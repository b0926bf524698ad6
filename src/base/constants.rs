/// Defines the directory where the output files (profiles and figures) are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/saltfront/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/saltfront/test";

/// Defines the default number of points along the interface
pub const DEFAULT_N_POINT: usize = 100;

/// Defines the default starting guess for the transition parameter `atr`
pub const DEFAULT_ATR_GUESS: f64 = 0.1;

/// Holds the gradient used to bootstrap the inverse (given head) solution
pub const INITIAL_GRADIENT: f64 = 0.001;

/// Holds the distance from the well kept out of the search for the stagnation point
pub const WELL_STAGNATION_OFFSET: f64 = 0.1;
