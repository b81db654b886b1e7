use std::cell::Cell;

/// This provides the tree information about a given element in the `DisjointSetForest`.
///
/// For each element of the forest we store a `Metadata`.
/// The values are kept in a `Cell` so that the parents can be updated by path compression
/// while the forest is only borrowed immutably.
#[derive(Clone, Debug)]
pub(crate) struct Metadata {
    /// The parent of the element in its sets tree.
    /// These form an upside down tree where each child has the index of its parent.
    parent: Cell<usize>,
    /// The amount of elements in the tree below this element, including itself.
    /// Only the value stored at a root is kept up to date.
    weight: Cell<usize>,
}

impl Metadata {
    /// Create a new `Metadata` for a singleton element with the given index.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            weight: Cell::new(1),
        }
    }

    /// Return the `parent` variable.
    #[inline]
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    #[inline]
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `weight` variable.
    #[inline]
    pub(crate) fn weight(&self) -> usize {
        self.weight.get()
    }

    /// Set the `weight` variable.
    #[inline]
    pub(crate) fn set_weight(&self, value: usize) {
        self.weight.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::Metadata;

    #[test]
    fn new_is_a_root_of_weight_one() {
        let meta = Metadata::new(7);

        assert_eq!(meta.parent(), 7);
        assert_eq!(meta.weight(), 1);
    }

    #[test]
    fn setters_go_through_a_shared_reference() {
        let meta = Metadata::new(0);
        let shared = &meta;

        shared.set_parent(3);
        shared.set_weight(5);

        assert_eq!(meta.parent(), 3);
        assert_eq!(meta.weight(), 5);
    }
}
