//! Benchmark configuration constants.

/// Grid side lengths; node count is the square.
pub const GRID_SIDES: &[usize] = &[10, 20, 40];

/// Node counts for random geometric graphs.
pub const RANDOM_SIZES: &[usize] = &[100, 500, 1000];

/// Neighbors linked per node in random graphs.
pub const RANDOM_DEGREE: usize = 4;

/// Seed for every generated graph.
pub const SEED: u64 = 0x5eed;
