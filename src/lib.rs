//! Estimates the [percolation threshold] of a square lattice with Monte Carlo experiments.
//!
//! The sites of an `n` by `n` grid are opened one at a time in random order.
//! The grid percolates as soon as the open sites connect the top row to the bottom row.
//! The fraction of open sites at that moment is close to `0.5927` for large grids.
//!
//! The main structs of this crate are:
//!
//! - [`DisjointSetForest`], a [disjoint-sets/union-find] forest joined by weight with path
//!   compression. The `union`, `find` and `connected` methods have an amortized complexity of
//!   `O(α(n))` where 'α' is the inverse Ackermann function.
//! - [`Percolation`], the grid itself. Every site is an element of a forest and two extra
//!   virtual elements stand for the top and bottom edges, so asking whether the grid percolates
//!   is a single `connected` query.
//! - [`PercolationStats`], which runs independent experiments and reports the mean, standard
//!   deviation and 95% confidence interval of the thresholds.
//!
//! With the `rayon` feature, which is enabled by default, the experiments run in parallel.
//! Each experiment owns its grid and its random number generator so the results do not depend
//! on the amount of threads.
//!
//! ```
//! use percolation::PercolationStats;
//!
//! let stats = PercolationStats::with_seed(64, 20, 1)?;
//!
//! println!("mean                    = {}", stats.mean());
//! println!("stddev                  = {}", stats.stddev());
//! println!("95% confidence interval = [{}, {}]", stats.confidence_low(), stats.confidence_high());
//! # Ok::<(), percolation::Error>(())
//! ```
//!
//! Progress is reported through the [`log`] facade, install any logger to see it.
//!
//! [percolation threshold]: https://en.wikipedia.org/wiki/Percolation_threshold
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSetForest`]: disjoint_sets/forest/struct.DisjointSetForest.html
//! [`Percolation`]: percolation/grid/struct.Percolation.html
//! [`PercolationStats`]: percolation/stats/struct.PercolationStats.html
//! [`log`]: https://docs.rs/log

/// A convenient macro to create a `BitVec` similar to `vec!`.
macro_rules! bit_vec {
    ($element: expr; $len: expr) => {
        ::bit_vec::BitVec::from_elem($len, $element)
    };
}

mod error;
pub mod disjoint_sets;
pub mod percolation;

pub use crate::{
    disjoint_sets::DisjointSetForest,
    error::{Error, Result},
    percolation::{Percolation, PercolationStats, run_trial},
};
