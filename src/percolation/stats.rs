//! Monte Carlo estimation of the percolation threshold.
//!
//! See [`PercolationStats`] for more information.
//!
//! [`PercolationStats`]: struct.PercolationStats.html

use {
    log::{debug, info, trace},
    rand::{
        Rng,
        SeedableRng,
        rngs::StdRng,
    },
    crate::{
        error::{Error, Result},
        percolation::grid::Percolation,
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The `z` value of a two sided 95% confidence interval under the normal distribution.
const CONFIDENCE_95: f64 = 1.96;

/// The results of `trials` independent experiments on an `n` by `n` grid.
///
/// In each experiment all sites start out blocked and random sites are opened until the grid
/// percolates. The fraction of open sites at that moment is the threshold of the experiment.
///
/// Every experiment has its own grid and its own random number generator seeded from the
/// seed of the whole run and the index of the experiment.
/// With the `rayon` feature the experiments run in parallel, the thresholds are the same
/// as in a sequential run with the same seed.
///
/// When there is a single experiment the standard deviation is `0` and both bounds of the
/// confidence interval equal the mean.
///
/// # Examples
///
/// ```
/// use percolation::PercolationStats;
///
/// let stats = PercolationStats::with_seed(20, 30, 7)?;
///
/// assert_eq!(stats.thresholds().len(), 30);
/// assert!(stats.confidence_low() <= stats.mean());
/// assert!(stats.mean() <= stats.confidence_high());
/// assert!(stats.mean() > 0.3 && stats.mean() < 0.9);
/// # Ok::<(), percolation::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PercolationStats {
    n: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` experiments on an `n` by `n` grid with a random seed.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `n` or `trials` is zero.
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::with_seed(n, trials, rand::thread_rng().gen())
    }

    /// Runs `trials` experiments on an `n` by `n` grid.
    ///
    /// The same arguments always give the same thresholds.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `n` or `trials` is zero
    /// or if the `n * n` sites of a grid do not fit in memory addresses.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::{Error, PercolationStats};
    ///
    /// let first = PercolationStats::with_seed(10, 5, 42)?;
    /// let second = PercolationStats::with_seed(10, 5, 42)?;
    /// assert_eq!(first, second);
    ///
    /// assert_eq!(PercolationStats::with_seed(10, 0, 42), Err(Error::InvalidParameters));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_seed(n: usize, trials: usize, seed: u64) -> Result<Self> {
        if n == 0 || trials == 0 {
            return Err(Error::InvalidParameters)
        }
        if n.checked_mul(n).and_then(|len| len.checked_add(2)).is_none() {
            return Err(Error::InvalidParameters)
        }

        let thresholds = run_trials(n, trials, seed)?;
        let stats = Self { n, thresholds };

        info!(
            "{} trials on a {}x{} grid: mean = {}, stddev = {}",
            trials, n, n, stats.mean(), stats.stddev()
        );

        Ok(stats)
    }

    /// Collects statistics over thresholds that were computed elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameters` if `n` is zero and
    /// `Error::InsufficientSamples` if `thresholds` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::PercolationStats;
    ///
    /// let stats = PercolationStats::from_thresholds(4, vec![0.5, 0.75])?;
    ///
    /// assert_eq!(stats.mean(), 0.625);
    /// assert_eq!(stats.trials(), 2);
    /// # Ok::<(), percolation::Error>(())
    /// ```
    pub fn from_thresholds(n: usize, thresholds: Vec<f64>) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidParameters)
        }
        if thresholds.is_empty() {
            return Err(Error::InsufficientSamples)
        }

        Ok(Self { n, thresholds })
    }

    /// Returns the length of a side of the grids.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the amount of experiments.
    #[inline]
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Returns the threshold of each experiment in the order they were started.
    #[inline]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Returns the sample mean of the thresholds.
    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.trials() as f64
    }

    /// Returns the sample standard deviation of the thresholds.
    ///
    /// This divides by `trials - 1` and is `0` for a single experiment.
    pub fn stddev(&self) -> f64 {
        if self.trials() == 1 {
            return 0.0
        }

        let mean = self.mean();
        let squares: f64 = self.thresholds.iter()
            .map(|threshold| (threshold - mean) * (threshold - mean))
            .sum();

        (squares / (self.trials() - 1) as f64).sqrt()
    }

    /// Returns the lower bound of the 95% confidence interval of the mean.
    pub fn confidence_low(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// Returns the upper bound of the 95% confidence interval of the mean.
    pub fn confidence_high(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}

/// Opens random sites of a new `n` by `n` grid until it percolates and returns the fraction
/// of open sites.
///
/// Drawing a site that is already open is not counted, another site is drawn instead.
///
/// # Errors
///
/// Returns `Error::InvalidSize` if `n` is zero.
///
/// # Examples
///
/// ```
/// use percolation::run_trial;
///
/// let threshold = run_trial(1, &mut rand::thread_rng())?;
/// assert_eq!(threshold, 1.0);
/// # Ok::<(), percolation::Error>(())
/// ```
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64> {
    let grid = open_until_percolation(n, rng)?;

    Ok(threshold(&grid))
}

/// Opens random sites of a new `n` by `n` grid and returns it once it percolates.
fn open_until_percolation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Percolation> {
    let mut grid = Percolation::new(n)?;

    while !grid.percolates() {
        let row = rng.gen_range(1 ..= n);
        let col = rng.gen_range(1 ..= n);

        match grid.open(row, col) {
            Ok(()) => {},
            Err(Error::AlreadyOpen { .. }) => {
                trace!("site ({}, {}) drawn again", row, col);
            },
            Err(error) => return Err(error),
        }
    }

    Ok(grid)
}

/// The fraction of open sites of `grid`.
fn threshold(grid: &Percolation) -> f64 {
    grid.number_of_open_sites() as f64 / (grid.n() * grid.n()) as f64
}

/// The generator of experiment `trial` of a run seeded with `seed`.
fn trial_rng(seed: u64, trial: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (trial as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn run_seeded_trial(n: usize, seed: u64, trial: usize) -> Result<f64> {
    let grid = open_until_percolation(n, &mut trial_rng(seed, trial))?;
    let threshold = threshold(&grid);

    debug!(
        "trial {} on a {}x{} grid percolated after {} open sites at {}",
        trial, n, n, grid.number_of_open_sites(), threshold
    );

    Ok(threshold)
}

#[cfg(feature = "rayon")]
fn run_trials(n: usize, trials: usize, seed: u64) -> Result<Vec<f64>> {
    (0 .. trials).into_par_iter()
        .map(|trial| run_seeded_trial(n, seed, trial))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn run_trials(n: usize, trials: usize, seed: u64) -> Result<Vec<f64>> {
    (0 .. trials)
        .map(|trial| run_seeded_trial(n, seed, trial))
        .collect()
}
