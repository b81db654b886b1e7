//! A weighted [disjoint-sets/union-find] forest over a fixed amount of elements.
//!
//! See [`DisjointSetForest`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSetForest`]: struct.DisjointSetForest.html

use {
    std::{
        cmp::Ordering,
        collections::HashMap,
    },
    crate::{
        disjoint_sets::metadata::Metadata,
        error::{Error, Result},
    },
};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] forest over the elements `0 .. size`.
///
/// Every element starts out in its own set and sets can be joined with the `union` method.
/// Sets are joined by weight: the root of the tree with the fewest elements is placed under
/// the root of the other tree. Together with the path compression done by `find`
/// this makes `union`, `find` and `connected` run in `O(α(n))` amortized time.
///
/// The amount of elements is fixed when the forest is made and is returned by `size`.
/// The amount of sets starts out equal to it and goes down by one for each `union`
/// that joins two different sets, this is returned by `component_count`.
///
/// # Examples
///
/// ```
/// use percolation::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4)?;
/// forest.union(1, 2)?;
/// forest.union(2, 3)?;
///
/// assert!(forest.connected(1, 3)?);
/// assert!(!forest.connected(0, 3)?);
/// assert_eq!(forest.size(), 4);
/// assert_eq!(forest.component_count(), 2);
/// # Ok::<(), percolation::Error>(())
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone)]
pub struct DisjointSetForest {
    /// The metadata for each element, this never changes length.
    meta: Vec<Metadata>,
    /// The amount of disjoint sets.
    count: usize,
}

impl DisjointSetForest {
    /// Constructs a forest of `size` singleton sets.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSize` if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::{DisjointSetForest, Error};
    ///
    /// let forest = DisjointSetForest::new(3)?;
    /// assert_eq!(forest.component_count(), 3);
    ///
    /// assert_eq!(DisjointSetForest::new(0).err(), Some(Error::InvalidSize));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize)
        }

        Ok(Self {
            meta: (0 .. size).map(Metadata::new).collect(),
            count: size,
        })
    }

    /// Returns the amount of elements in the forest.
    ///
    /// This is the `size` given at construction and never changes.
    #[inline]
    pub fn size(&self) -> usize {
        self.meta.len()
    }

    /// Returns the amount of disjoint sets in the forest.
    ///
    /// This will be done in `O(1)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::new(5)?;
    /// forest.union(0, 1)?;
    /// forest.union(1, 0)?;
    /// forest.union(3, 4)?;
    ///
    /// assert_eq!(forest.component_count(), 3);
    /// assert_eq!(forest.size(), 5);
    /// # Ok::<(), percolation::Error>(())
    /// ```
    #[inline]
    pub fn component_count(&self) -> usize {
        self.count
    }

    /// Gives the representative of the set that `index` belongs to.
    ///
    /// Each index of a set gives the same value until the set is joined with another one.
    /// Every element on the path to the root is moved directly under the root,
    /// this changes the shape of the tree but never which elements share a set.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is not below `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::new(3)?;
    /// forest.union(0, 2)?;
    ///
    /// assert_eq!(forest.find(0)?, forest.find(2)?);
    /// assert_eq!(forest.find(1)?, 1);
    /// assert!(forest.find(3).is_err());
    /// # Ok::<(), percolation::Error>(())
    /// ```
    pub fn find(&self, index: usize) -> Result<usize> {
        self.check(index)?;

        Ok(self.find_root(index))
    }

    /// Joins the sets of `first_index` and `second_index`.
    ///
    /// Returns `true` if two different sets were joined and `false` if they already shared
    /// a set, in which case nothing changes.
    /// When both trees have the same weight the second tree is placed under the first.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if either index is not below `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::new(4)?;
    ///
    /// assert!(forest.union(1, 2)?);
    /// assert!(!forest.union(2, 1)?);
    ///
    /// assert_eq!(forest.len_of_set(1)?, 2);
    /// assert_eq!(forest.len_of_set(3)?, 1);
    /// # Ok::<(), percolation::Error>(())
    /// ```
    pub fn union(&mut self, first_index: usize, second_index: usize) -> Result<bool> {
        self.check(first_index)?;
        self.check(second_index)?;

        Ok(self.union_unchecked(first_index, second_index))
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if either index is not below `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percolation::DisjointSetForest;
    ///
    /// let mut forest = DisjointSetForest::new(4)?;
    ///
    /// forest.union(1, 3)?;
    /// forest.union(0, 1)?;
    ///
    /// assert!(forest.connected(0, 3)?);
    /// assert!(!forest.connected(0, 2)?);
    /// assert!(!forest.connected(2, 3)?);
    /// # Ok::<(), percolation::Error>(())
    /// ```
    #[inline]
    pub fn connected(&self, first_index: usize, second_index: usize) -> Result<bool> {
        Ok(self.find(first_index)? == self.find(second_index)?)
    }

    /// Returns the amount of elements in the set that `index` belongs to.
    ///
    /// The weight is kept at the root so this is as fast as `find`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` if `index` is not below `size`.
    pub fn len_of_set(&self, index: usize) -> Result<usize> {
        let root = self.find(index)?;

        Ok(self.meta[root].weight())
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    #[inline]
    pub(crate) fn same_set(&self, first_index: usize, second_index: usize) -> bool {
        self.find_root(first_index) == self.find_root(second_index)
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.size() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                size: self.size(),
            })
        }
    }

    /// # Panics
    ///
    /// If `index` is out of bounds.
    fn find_root(&self, index: usize) -> usize {
        // If the node is its own parent we have found the root.
        if self.meta[index].parent() == index {
            index
        } else {
            // The depth is logarithmic in the weight so the recursion stays shallow.
            let root = self.find_root(self.meta[index].parent());

            self.meta[index].set_parent(root);

            root
        }
    }

    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    pub(crate) fn union_unchecked(&mut self, first_index: usize, second_index: usize) -> bool {
        let i = self.find_root(first_index);
        let j = self.find_root(second_index);

        if i == j {
            return false
        }

        let weight = self.meta[i].weight() + self.meta[j].weight();

        // We add the lighter tree to the heavier tree.
        match Ord::cmp(&self.meta[i].weight(), &self.meta[j].weight()) {
            Ordering::Less => {
                self.meta[i].set_parent(j);
                self.meta[j].set_weight(weight);
            },
            Ordering::Equal | Ordering::Greater => {
                self.meta[j].set_parent(i);
                self.meta[i].set_weight(weight);
            },
        }

        self.count -= 1;

        true
    }
}

impl std::fmt::Debug for DisjointSetForest {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        // We map the roots to `usize` names.
        let mut map = HashMap::with_capacity(self.count);
        let mut builder = formatter.debug_list();

        for i in 0 .. self.size() {
            let root = self.find_root(i);
            let names = map.len();
            let name = *map.entry(root).or_insert(names);

            builder.entry(&format_args!("{} => {}", i, name));
        }

        builder.finish()
    }
}

impl PartialEq for DisjointSetForest {
    fn eq(&self, other: &Self) -> bool {
        if self.size() != other.size() || self.count != other.count {
            return false
        }

        // With equal set counts a consistent map from our roots to theirs is a bijection.
        let mut map = HashMap::with_capacity(self.count);

        for i in 0 .. self.size() {
            let self_root = self.find_root(i);
            let other_root = other.find_root(i);

            if *map.entry(self_root).or_insert(other_root) != other_root {
                return false
            }
        }

        true
    }
}

impl Eq for DisjointSetForest {}

#[cfg(feature = "proptest")]
impl Arbitrary for DisjointSetForest {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_params: Self::Parameters) -> Self::Strategy {
        (1 .. 64usize).prop_flat_map(|size| {
            let pairs = proptest::collection::vec((0 .. size, 0 .. size), 0 .. 2 * size);

            (Just(size), pairs)
        }).prop_map(|(size, pairs)| {
            let mut forest = Self {
                meta: (0 .. size).map(Metadata::new).collect(),
                count: size,
            };

            for (p, q) in pairs {
                forest.union_unchecked(p, q);
            }

            forest
        }).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "proptest")]
    use proptest::prelude::*;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(DisjointSetForest::new(0).err(), Some(Error::InvalidSize));
    }

    #[test]
    fn indices_are_checked() {
        let mut forest = DisjointSetForest::new(3).unwrap();
        let expected = Error::IndexOutOfRange { index: 3, size: 3 };

        assert_eq!(forest.find(3), Err(expected.clone()));
        assert_eq!(forest.union(0, 3), Err(expected.clone()));
        assert_eq!(forest.connected(3, 0), Err(expected.clone()));
        assert_eq!(forest.len_of_set(3), Err(expected));
        assert_eq!(forest.component_count(), 3);
    }

    #[test]
    fn size_is_fixed_while_count_shrinks() {
        let mut forest = DisjointSetForest::new(6).unwrap();

        assert!(forest.union(0, 1).unwrap());
        assert!(forest.union(2, 3).unwrap());
        assert!(forest.union(1, 3).unwrap());
        assert!(!forest.union(0, 2).unwrap());

        assert_eq!(forest.size(), 6);
        assert_eq!(forest.component_count(), 3);
        assert_eq!(forest.len_of_set(2).unwrap(), 4);
    }

    #[test]
    fn equal_weights_place_second_under_first() {
        let mut forest = DisjointSetForest::new(2).unwrap();
        forest.union(0, 1).unwrap();

        assert_eq!(forest.find(1).unwrap(), 0);
    }

    #[test]
    fn lighter_tree_goes_under_heavier_tree() {
        let mut forest = DisjointSetForest::new(4).unwrap();
        forest.union(1, 2).unwrap();
        forest.union(1, 3).unwrap();
        forest.union(0, 1).unwrap();

        // 0 is a singleton so it is placed under the root of {1, 2, 3}.
        assert_eq!(forest.find(0).unwrap(), 1);
    }

    #[test]
    fn find_compresses_paths() {
        let mut forest = DisjointSetForest::new(4).unwrap();
        forest.union(0, 1).unwrap();
        forest.union(2, 3).unwrap();
        forest.union(0, 2).unwrap();

        // 3 hangs under 2 which hangs under 0.
        assert_eq!(forest.meta[3].parent(), 2);
        assert_eq!(forest.find(3).unwrap(), 0);
        assert_eq!(forest.meta[3].parent(), 0);
    }

    #[test]
    fn debug_names_sets_in_order() {
        let mut forest = DisjointSetForest::new(4).unwrap();
        forest.union(3, 1).unwrap();

        assert_eq!(format!("{:?}", forest), "[0 => 0, 1 => 1, 2 => 2, 3 => 1]");
    }

    #[test]
    fn equality_ignores_tree_shape() {
        let mut first = DisjointSetForest::new(4).unwrap();
        first.union(0, 1).unwrap();
        first.union(1, 2).unwrap();

        let mut second = DisjointSetForest::new(4).unwrap();
        second.union(2, 1).unwrap();
        second.union(0, 2).unwrap();

        let mut third = DisjointSetForest::new(4).unwrap();
        third.union(0, 3).unwrap();
        third.union(1, 2).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[cfg(feature = "proptest")]
    proptest! {
        #[test]
        fn size_never_changes(forest in any::<DisjointSetForest>()) {
            let mut forest = forest;
            let size = forest.size();

            forest.union(0, size - 1).unwrap();

            prop_assert_eq!(forest.size(), size);
        }

        #[test]
        fn count_matches_distinct_roots(forest in any::<DisjointSetForest>()) {
            let mut roots: Vec<usize> = (0 .. forest.size())
                .map(|i| forest.find(i).unwrap())
                .collect();
            roots.sort();
            roots.dedup();

            prop_assert_eq!(roots.len(), forest.component_count());
        }

        #[test]
        fn weights_add_up_to_size(forest in any::<DisjointSetForest>()) {
            let total: usize = (0 .. forest.size())
                .filter(|&i| forest.find(i).unwrap() == i)
                .map(|i| forest.len_of_set(i).unwrap())
                .sum();

            prop_assert_eq!(total, forest.size());
        }

        #[test]
        fn union_connects_and_counts_once(
            forest in any::<DisjointSetForest>(),
            p in any::<prop::sample::Index>(),
            q in any::<prop::sample::Index>()
        ) {
            let mut forest = forest;
            let p = p.index(forest.size());
            let q = q.index(forest.size());
            let before = forest.component_count();
            let was_connected = forest.connected(p, q).unwrap();

            let merged = forest.union(p, q).unwrap();

            prop_assert_eq!(merged, !was_connected);
            prop_assert!(forest.connected(p, q).unwrap());
            prop_assert_eq!(forest.component_count(), before - merged as usize);
        }

        #[test]
        fn find_does_not_change_the_partition(forest in any::<DisjointSetForest>()) {
            let before = forest.clone();

            for i in 0 .. forest.size() {
                forest.find(i).unwrap();
            }

            prop_assert_eq!(forest, before);
        }
    }
}
