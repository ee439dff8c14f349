//! Arena-backed disjoint set (union-find) used by the Kruskal driver.
//!
//! Elements live in a dense vector indexed by vertex id and refer to their
//! parent by index, so no element owns another. `find` performs full path
//! compression and `union` links by rank, breaking rank ties in favour of the
//! element with the smaller value. Both policies are observable through
//! [`DisjointSet::depth`], which reports the current height of an element in
//! its set's internal tree.
//!
//! Methods taking an element id panic when the id was never produced by
//! [`DisjointSet::make_set`], mirroring slice indexing.

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Element {
    value: usize,
    parent: usize,
    rank: u32,
}

impl Element {
    const fn singleton(value: usize) -> Self {
        Self {
            value,
            parent: value,
            rank: 0,
        }
    }
}

/// Disjoint set over the ids `0..len()`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DisjointSet {
    elements: Vec<Element>,
}

impl DisjointSet {
    /// Creates a set containing `len` singletons, calling
    /// [`make_set`](Self::make_set) for each id in ascending order.
    ///
    /// # Examples
    /// ```
    /// use msf_core::DisjointSet;
    ///
    /// let set = DisjointSet::new(3);
    /// assert_eq!(set.len(), 3);
    /// assert!((0..3).all(|id| set.is_root(id)));
    /// ```
    #[must_use]
    pub fn new(len: usize) -> Self {
        let mut set = Self {
            elements: Vec::with_capacity(len),
        };
        for _ in 0..len {
            set.make_set();
        }
        set
    }

    /// Appends a new singleton element and returns its id.
    ///
    /// Ids are assigned densely in creation order, so the `n`th call returns
    /// `n - 1`. The new element is its own root with rank zero.
    pub fn make_set(&mut self) -> usize {
        let id = self.elements.len();
        self.elements.push(Element::singleton(id));
        id
    }

    /// Returns the number of elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.elements.len() }

    /// Returns `true` when no element has been created.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    /// Returns the current parent of `id` (itself when `id` is a root).
    #[must_use]
    pub fn parent(&self, id: usize) -> usize {
        self.elements[id].parent
    }

    /// Returns the rank of `id`.
    #[must_use]
    pub fn rank(&self, id: usize) -> u32 {
        self.elements[id].rank
    }

    /// Returns `true` when `id` is the root of its set.
    #[must_use]
    pub fn is_root(&self, id: usize) -> bool {
        self.elements[id].parent == id
    }

    /// Returns the root of the set containing `id`.
    ///
    /// Every non-root element visited on the way up is re-linked directly to
    /// the root. Ranks are never touched. Calling `find` on a root returns
    /// it without mutation.
    pub fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.elements[root].parent != root {
            root = self.elements[root].parent;
        }

        let mut node = id;
        while node != root {
            let parent = self.elements[node].parent;
            self.elements[node].parent = root;
            node = parent;
        }

        root
    }

    /// Merges the sets rooted at `left` and `right`.
    ///
    /// The root with the greater rank becomes the parent. On equal ranks the
    /// root with the smaller value becomes the parent and its rank grows by
    /// one; the other root's rank is left unchanged.
    ///
    /// Both arguments must be distinct roots, typically obtained from
    /// [`find`](Self::find). This is checked only in debug builds; passing a
    /// non-root corrupts the rank bound.
    pub fn union(&mut self, left: usize, right: usize) {
        debug_assert!(self.is_root(left), "union called with non-root {left}");
        debug_assert!(self.is_root(right), "union called with non-root {right}");
        debug_assert_ne!(left, right, "union called with identical roots");

        let (parent, child) = self.choose_parent_child(left, right);
        self.elements[child].parent = parent;
    }

    fn choose_parent_child(&mut self, left: usize, right: usize) -> (usize, usize) {
        let left_elem = self.elements[left];
        let right_elem = self.elements[right];
        match left_elem.rank.cmp(&right_elem.rank) {
            Ordering::Greater => (left, right),
            Ordering::Less => (right, left),
            Ordering::Equal => {
                let (parent, child) = if left_elem.value < right_elem.value {
                    (left, right)
                } else {
                    (right, left)
                };
                let winner = &mut self.elements[parent];
                winner.rank = winner.rank.saturating_add(1);
                (parent, child)
            }
        }
    }

    /// Counts the parent hops from `id` to its root without compressing.
    ///
    /// The result reflects the full history of finds and unions on this set;
    /// it is not a graph distance.
    #[must_use]
    pub fn depth(&self, id: usize) -> usize {
        let mut depth = 0;
        let mut node = id;
        while self.elements[node].parent != node {
            node = self.elements[node].parent;
            depth += 1;
        }
        depth
    }
}
