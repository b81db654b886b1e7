//! An `n` by `n` grid of sites that are opened one by one.
//!
//! See [`Percolation`] for more information.
//!
//! [`Percolation`]: struct.Percolation.html

use {
    std::fmt,
    bit_vec::BitVec,
    crate::{
        disjoint_sets::DisjointSetForest,
        error::{Error, Result},
    },
};

/// The forest index of the virtual site above the first row.
const VIRTUAL_TOP: usize = 0;

/// An `n` by `n` grid of sites where each site is either blocked or open.
///
/// Sites are addressed by `(row, col)` with both coordinates in `1 ..= n`.
/// All sites start out blocked and can be opened once, after which they stay open.
/// An open site is full when it can be reached from the top row through a chain of open sites
/// that are next to each other horizontally or vertically.
/// The system percolates when some site in the bottom row is full.
///
/// The connections are kept in a [`DisjointSetForest`] of `n * n + 2` elements.
/// Site `(row, col)` is element `(row - 1) * n + col` and the two remaining elements are
/// virtual sites joined with every open site of the top and bottom row.
/// This way percolation is a single `connected` query.
///
/// # Examples
///
/// ```
/// use percolation::Percolation;
///
/// let mut grid = Percolation::new(2)?;
///
/// grid.open(1, 1)?;
/// assert!(!grid.percolates());
///
/// grid.open(2, 1)?;
/// assert!(grid.percolates());
/// assert!(grid.is_full(2, 1)?);
/// assert!(!grid.is_open(2, 2)?);
/// # Ok::<(), percolation::Error>(())
/// ```
///
/// [`DisjointSetForest`]: ../../disjoint_sets/forest/struct.DisjointSetForest.html
#[derive(Clone, Debug)]
pub struct Percolation {
    /// The length of a side of the grid.
    n: usize,
    /// Whether each site is open, stored row after row.
    sites: BitVec,
    /// The connections between the open sites and the two virtual sites.
    forest: DisjointSetForest,
    /// The amount of set bits in `sites`.
    open_sites: usize,
}

impl Percolation {
    /// Constructs an `n` by `n` grid with all sites blocked.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSize` if `n` is zero or if `n * n + 2` does not fit a `usize`.
    pub fn new(n: usize) -> Result<Self> {
        let len = n.checked_mul(n).filter(|&len| len > 0).ok_or(Error::InvalidSize)?;
        let forest = DisjointSetForest::new(len.checked_add(2).ok_or(Error::InvalidSize)?)?;

        Ok(Self {
            n,
            sites: bit_vec![false; len],
            forest,
            open_sites: 0,
        })
    }

    /// Returns the length of a side of the grid.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the amount of open sites.
    #[inline]
    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Opens the site at `(row, col)`.
    ///
    /// The site is connected to every open site next to it and, when it lies in the top or
    /// bottom row, to the matching virtual site.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `row` or `col` is not in `1 ..= n` and
    /// `Error::AlreadyOpen` if the site was opened before.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::{Error, Percolation};
    ///
    /// let mut grid = Percolation::new(3)?;
    /// grid.open(2, 2)?;
    ///
    /// assert_eq!(grid.open(2, 2), Err(Error::AlreadyOpen { row: 2, col: 2 }));
    /// assert_eq!(grid.open(0, 2), Err(Error::OutOfRange { row: 0, col: 2, n: 3 }));
    /// assert_eq!(grid.number_of_open_sites(), 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.check(row, col)?;

        let bit = self.bit(row, col);
        if self.sites[bit] {
            return Err(Error::AlreadyOpen { row, col })
        }

        self.sites.set(bit, true);
        self.open_sites += 1;

        let site = self.linearize(row, col);

        // With a single row a site touches both virtual sites.
        if row == 1 {
            self.forest.union(VIRTUAL_TOP, site)?;
        }
        if row == self.n {
            let bottom = self.virtual_bottom();
            self.forest.union(bottom, site)?;
        }

        if row > 1 {
            self.connect_if_open(site, row - 1, col)?;
        }
        if row < self.n {
            self.connect_if_open(site, row + 1, col)?;
        }
        if col > 1 {
            self.connect_if_open(site, row, col - 1)?;
        }
        if col < self.n {
            self.connect_if_open(site, row, col + 1)?;
        }

        Ok(())
    }

    /// Returns `true` if the site at `(row, col)` is open.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `row` or `col` is not in `1 ..= n`.
    #[inline]
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.check(row, col)?;

        Ok(self.sites[self.bit(row, col)])
    }

    /// Returns `true` if the site at `(row, col)` is connected to the top row.
    ///
    /// A blocked site is never full because it is never joined with another element.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `row` or `col` is not in `1 ..= n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::Percolation;
    ///
    /// let mut grid = Percolation::new(3)?;
    /// grid.open(2, 2)?;
    /// assert!(!grid.is_full(2, 2)?);
    ///
    /// grid.open(1, 2)?;
    /// assert!(grid.is_full(2, 2)?);
    /// assert!(!grid.is_full(3, 2)?);
    /// # Ok::<(), percolation::Error>(())
    /// ```
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        self.check(row, col)?;

        self.forest.connected(VIRTUAL_TOP, self.linearize(row, col))
    }

    /// Returns `true` if the top row is connected to the bottom row.
    ///
    /// Once a grid percolates it keeps percolating.
    #[inline]
    pub fn percolates(&self) -> bool {
        self.forest.same_set(VIRTUAL_TOP, self.virtual_bottom())
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if (1 ..= self.n).contains(&row) && (1 ..= self.n).contains(&col) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                row,
                col,
                n: self.n,
            })
        }
    }

    fn connect_if_open(&mut self, site: usize, row: usize, col: usize) -> Result<()> {
        if self.sites[self.bit(row, col)] {
            let neighbor = self.linearize(row, col);
            self.forest.union(site, neighbor)?;
        }

        Ok(())
    }

    /// The position of `(row, col)` in `sites`.
    #[inline]
    fn bit(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + (col - 1)
    }

    /// The forest element of `(row, col)`, one past its position in `sites`.
    #[inline]
    fn linearize(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + col
    }

    #[inline]
    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }
}

/// Draws the grid one row per line with `#` for a blocked site,
/// `o` for an open site and `*` for a full site.
impl fmt::Display for Percolation {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for row in 1 ..= self.n {
            for col in 1 ..= self.n {
                let symbol = if !self.sites[self.bit(row, col)] {
                    '#'
                } else if self.forest.same_set(VIRTUAL_TOP, self.linearize(row, col)) {
                    '*'
                } else {
                    'o'
                };

                write!(formatter, "{}", symbol)?;
            }

            writeln!(formatter)?;
        }

        Ok(())
    }
}
