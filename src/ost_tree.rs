use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::raw::{NodeId, RawOstTree, SENTINEL};

/// An insert-only ordered set with O(log n) positional access.
///
/// `OrderStatisticTree` stores unique, totally-ordered keys in a red-black
/// tree whose nodes track their left-subtree sizes, so besides insertion it
/// answers two order-statistic queries in logarithmic time: [`rank`] (how
/// many stored keys are strictly less than a value) and [`select`] (the key
/// at a given zero-based position in ascending order).
///
/// There is no deletion: once a key is stored it stays for the tree's
/// lifetime. Queries never panic; misses are reported through sentinel
/// values instead. `rank` answers `-1` for an absent key, and `select`
/// answers the `not_found` value handed to [`new`] for any out-of-range
/// position, so that value must be distinguishable from every key the
/// caller intends to insert (the tree does not check this).
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key, as determined by the [`Ord`] trait,
/// changes while it is in the tree. This is normally only possible through
/// [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
///
/// [`rank`]: OrderStatisticTree::rank
/// [`select`]: OrderStatisticTree::select
/// [`new`]: OrderStatisticTree::new
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use rbost_tree::OrderStatisticTree;
///
/// let mut tree = OrderStatisticTree::new(-1);
/// for v in [5, 3, 8, 1, 4] {
///     tree.insert(v);
/// }
///
/// assert_eq!(tree.len(), 5);
/// assert_eq!(tree.rank(&5), 3); // 1, 3 and 4 are smaller
/// assert_eq!(*tree.select(0), 1); // the minimum
/// assert_eq!(*tree.select(4), 8); // the maximum
/// assert_eq!(*tree.select(5), -1); // out of range
/// ```
#[derive(Clone)]
pub struct OrderStatisticTree<T> {
    raw: RawOstTree<T>,
}

impl<T> OrderStatisticTree<T> {
    /// Makes a new, empty `OrderStatisticTree`.
    ///
    /// `not_found` is the value returned by [`select`] for out-of-range
    /// positions. It is cloned once at construction (for the internal leaf
    /// sentinel) and never again.
    ///
    /// [`select`]: OrderStatisticTree::select
    ///
    /// # Examples
    ///
    /// ```
    /// use rbost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::new("not found");
    /// tree.insert("World!");
    /// tree.insert("Hello,");
    ///
    /// assert_eq!(*tree.select(3), "not found");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn new(not_found: T) -> Self
    where
        T: Clone,
    {
        Self {
            raw: RawOstTree::new(not_found),
        }
    }

    /// Adds a key to the tree.
    ///
    /// Returns whether the key was newly inserted. That is:
    ///
    /// - If the tree did not previously contain an equal key, `true` is
    ///   returned and the key is stored.
    /// - If an equal key was already present, `false` is returned and the
    ///   stored keys are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::new(-1);
    ///
    /// assert_eq!(tree.insert(2), true);
    /// assert_eq!(tree.insert(2), false);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.raw.insert(value)
    }

    /// Returns the number of stored keys strictly less than `value`, which
    /// is `value`'s zero-based position in ascending order when it is
    /// present. Returns `-1` when `value` is not in the tree.
    ///
    /// The value may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form *must* match the ordering on the key
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::new(-1);
    /// for v in [10, 20, 30] {
    ///     tree.insert(v);
    /// }
    ///
    /// assert_eq!(tree.rank(&10), 0);
    /// assert_eq!(tree.rank(&30), 2);
    /// assert_eq!(tree.rank(&25), -1); // never inserted
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn rank<Q>(&self, value: &Q) -> i64
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.rank(value)
    }

    /// Returns a reference to the key at zero-based position `k` in
    /// ascending order, or to the constructor's `not_found` value when `k`
    /// is outside `[0, len())`. Negative positions take the same
    /// out-of-range path; no input panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::new(-1);
    /// for v in [10, 20, 30] {
    ///     tree.insert(v);
    /// }
    ///
    /// assert_eq!(*tree.select(0), 10);
    /// assert_eq!(*tree.select(2), 30);
    /// assert_eq!(*tree.select(3), -1);
    /// assert_eq!(*tree.select(-7), -1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn select(&self, k: i64) -> &T
    where
        T: Ord,
    {
        self.raw.select(k)
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::new(-1);
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no keys.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// Returns the maximum number of nodes on any root-to-leaf path.
    ///
    /// The balancing keeps this at most `2 * log2(len + 1)`; the method
    /// exists so callers can observe that bound. An empty tree has height 0.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize
    where
        T: Ord,
    {
        self.raw.height()
    }

    /// Gets an iterator over the keys in ascending order.
    ///
    /// The iterator borrows the tree and walks it without mutating anything,
    /// so it can be created any number of times; each call re-walks from the
    /// root.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbost_tree::OrderStatisticTree;
    ///
    /// let mut tree = OrderStatisticTree::new("not found");
    /// tree.insert("World!");
    /// tree.insert("Hello,");
    ///
    /// let keys: Vec<_> = tree.iter().collect();
    /// assert_eq!(keys, [&"Hello,", &"World!"]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; O(1) amortized per step.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            tree: &self.raw,
            stack: SmallVec::new(),
            remaining: self.raw.len(),
        };
        iter.descend_left(self.raw.root());
        iter
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderStatisticTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Extend<T> for OrderStatisticTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for OrderStatisticTree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderStatisticTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator over the keys of an [`OrderStatisticTree`] in ascending
/// order.
///
/// This `struct` is created by the [`iter`] method on [`OrderStatisticTree`].
/// See its documentation for more.
///
/// [`iter`]: OrderStatisticTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    tree: &'a RawOstTree<T>,
    // Pending ancestors of the in-order walk; inline capacity covers the
    // red-black height of any tree small enough not to care about a spill.
    stack: SmallVec<[NodeId; 16]>,
    remaining: usize,
}

impl<T> Iter<'_, T> {
    fn descend_left(&mut self, mut n: NodeId) {
        while n != SENTINEL {
            self.stack.push(n);
            n = self.tree.left(n);
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let n = self.stack.pop()?;
        self.remaining -= 1;
        self.descend_left(self.tree.right(n));
        Some(self.tree.key(n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
