//! The percolation grid and the Monte Carlo experiments run on it.

pub mod grid;
pub mod stats;

pub use self::{
    grid::Percolation,
    stats::{PercolationStats, run_trial},
};
