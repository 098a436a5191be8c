use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::error::EmptyTreeError;
use crate::raw;
use crate::raw::RawBst;

/// An ordered set implemented as a plain (unbalanced) binary search tree.
///
/// Every operation is O(height). No rebalancing is ever performed: the shape
/// of the tree is entirely determined by insertion and removal order, so
/// inserting keys in sorted order degrades the tree to a linked list and the
/// height to O(n). That is an accepted property of this structure, not a
/// defect; use a self-balancing tree when adversarial insertion orders
/// matter.
///
/// Nodes live in an arena and are addressed by stable indices, so removal
/// rewires a handful of links instead of juggling owned pointers, and a
/// freed node's slot is reused by a later insertion.
///
/// Operations that need at least one element (`contains`, `min`, `max`,
/// `replace_key`, `remove`) return [`EmptyTreeError`] when called on an
/// empty set. An absent key, by contrast, is an ordinary outcome reported in
/// the `Ok` value, and inserting a key that is already present is rejected
/// without being an error.
///
/// # Examples
///
/// ```
/// use bst_set::BstSet;
///
/// let mut primes = BstSet::new();
///
/// primes.insert(5);
/// primes.insert(2);
/// primes.insert(3);
///
/// assert_eq!(primes.contains(&3), Ok(true));
/// assert_eq!(primes.contains(&4), Ok(false));
///
/// // In-order iteration yields ascending keys.
/// let sorted: Vec<_> = primes.iter().copied().collect();
/// assert_eq!(sorted, [2, 3, 5]);
/// ```
pub struct BstSet<K> {
    raw: RawBst<K>,
}

/// An iterator over the keys of a [`BstSet`] in ascending (in-order)
/// traversal order.
///
/// This `struct` is created by the [`iter`](BstSet::iter) method.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K: 'a> {
    inner: raw::InOrder<'a, K>,
}

/// An iterator over the keys of a [`BstSet`] in pre-order traversal order
/// (node, left subtree, right subtree).
///
/// This `struct` is created by the [`pre_order`](BstSet::pre_order) method.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PreOrder<'a, K: 'a> {
    inner: raw::PreOrder<'a, K>,
}

/// An iterator over the keys of a [`BstSet`] in post-order traversal order
/// (left subtree, right subtree, node).
///
/// This `struct` is created by the [`post_order`](BstSet::post_order)
/// method.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PostOrder<'a, K: 'a> {
    inner: raw::PostOrder<'a, K>,
}

/// An owning iterator over the keys of a [`BstSet`] in ascending order.
///
/// This `struct` is created by the [`into_iter`](BstSet#method.into_iter)
/// method (provided by the [`IntoIterator`] trait).
pub struct IntoIter<K> {
    inner: raw::IntoInOrder<K>,
}

impl<K> BstSet<K> {
    /// Makes a new, empty `BstSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> BstSet<K> {
        BstSet {
            raw: RawBst::new(),
        }
    }

    /// Makes a new, empty `BstSet` with node storage pre-allocated for at
    /// least `capacity` keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let set: BstSet<i64> = BstSet::with_capacity(100);
    /// assert!(set.capacity() >= 100);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> BstSet<K> {
        BstSet {
            raw: RawBst::with_capacity(capacity),
        }
    }

    /// Returns the number of keys the set can hold without reallocating its
    /// node storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert!(set.is_empty());
    /// set.insert(1);
    /// assert!(!set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the set, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let mut set = BstSet::from([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Adds a key to the set.
    ///
    /// Returns whether the key was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal key, `true` is
    ///   returned and the key is inserted as a new leaf.
    /// - If the set already contained an equal key, `false` is returned and
    ///   the set is left untouched. A duplicate is an expected outcome, not
    ///   an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let mut set = BstSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height); O(n) worst case for sorted insertion order.
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        self.raw.insert(key)
    }

    /// Returns whether the set contains a key equal to `key`.
    ///
    /// The key may be any borrowed form of the set's key type, but the
    /// ordering on the borrowed form *must* match the ordering on the key
    /// type.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the set is empty. Searching an empty
    /// set is a contract violation, kept distinct from the ordinary
    /// `Ok(false)` of a key that is simply absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{BstSet, EmptyTreeError};
    ///
    /// let empty: BstSet<i32> = BstSet::new();
    /// assert_eq!(empty.contains(&1), Err(EmptyTreeError));
    ///
    /// let set = BstSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), Ok(true));
    /// assert_eq!(set.contains(&4), Ok(false));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn contains<Q>(&self, key: &Q) -> Result<bool, EmptyTreeError>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        if self.raw.is_empty() {
            return Err(EmptyTreeError);
        }
        Ok(self.raw.contains(key))
    }

    /// Returns a reference to the minimum key in the set, reached by
    /// walking left from the root.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::{BstSet, EmptyTreeError};
    ///
    /// let mut set = BstSet::new();
    /// assert_eq!(set.min(), Err(EmptyTreeError));
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.min(), Ok(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn min(&self) -> Result<&K, EmptyTreeError> {
        self.raw.min().ok_or(EmptyTreeError)
    }

    /// Returns a reference to the maximum key in the set, reached by
    /// walking right from the root.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let set = BstSet::from([5, 9, 1]);
    /// assert_eq!(set.max(), Ok(&9));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn max(&self) -> Result<&K, EmptyTreeError> {
        self.raw.max().ok_or(EmptyTreeError)
    }

    /// Overwrites the key equal to `old` with `new`, in place.
    ///
    /// The node keeps its position in the tree; nothing is removed or
    /// re-inserted. Returns `Ok(true)` if a node was rewritten and
    /// `Ok(false)` if no key equals `old` (an ordinary outcome, not an
    /// error). The set's length never changes.
    ///
    /// **The ordering invariant is not re-validated.** The caller is trusted
    /// to supply a replacement that still belongs at the node's position
    /// relative to its ancestors and descendants. An order-incompatible
    /// replacement silently corrupts the search order: later lookups may
    /// miss keys that are present, and iteration order may no longer be
    /// sorted. This permissive in-place edit is a deliberate design
    /// property of the structure.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let mut set = BstSet::from([1, 5, 9]);
    ///
    /// // 6 is still between 1 and 9, so the ordering survives.
    /// assert_eq!(set.replace_key(&5, 6), Ok(true));
    /// assert_eq!(set.contains(&6), Ok(true));
    /// assert_eq!(set.contains(&5), Ok(false));
    /// assert_eq!(set.len(), 3);
    ///
    /// assert_eq!(set.replace_key(&5, 7), Ok(false));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn replace_key<Q>(&mut self, old: &Q, new: K) -> Result<bool, EmptyTreeError>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        if self.raw.is_empty() {
            return Err(EmptyTreeError);
        }
        Ok(self.raw.replace_key(old, new))
    }

    /// Removes the key equal to `key` from the set and returns it.
    ///
    /// Returns `Ok(None)` when no key matches, leaving the set untouched.
    /// Removal distinguishes three structural cases: a childless node is
    /// detached, a node with one child is replaced by that child, and a node
    /// with two children is replaced by its in-order successor (the leftmost
    /// node of its right subtree), which inherits both subtrees. The
    /// successor is always used; the tie-break is not configurable.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let mut set = BstSet::from([5, 3, 8, 1, 4, 7, 9]);
    ///
    /// // 5 is the root and has two children; its successor 7 takes over.
    /// assert_eq!(set.remove(&5), Ok(Some(5)));
    /// assert_eq!(set.remove(&5), Ok(None));
    ///
    /// let sorted: Vec<_> = set.iter().copied().collect();
    /// assert_eq!(sorted, [1, 3, 4, 7, 8, 9]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Option<K>, EmptyTreeError>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        if self.raw.is_empty() {
            return Err(EmptyTreeError);
        }
        Ok(self.raw.remove(key))
    }

    /// Gets an iterator over the keys of the set in ascending order
    /// (in-order traversal).
    ///
    /// On an empty set the iterator is simply empty; no error is raised.
    /// The iterator borrows the set and every call starts a fresh,
    /// independent traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let set = BstSet::from([3, 1, 2]);
    /// let sorted: Vec<_> = set.iter().copied().collect();
    /// assert_eq!(sorted, [1, 2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) to traverse the whole set; the stack holds at most `height`
    /// handles.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: self.raw.in_order(),
        }
    }

    /// Gets an iterator over the keys of the set in pre-order: each node
    /// before its left subtree, each left subtree before its right subtree.
    ///
    /// Useful when the shape of the tree matters, e.g. to serialize a tree
    /// so that re-insertion reproduces the exact structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let set = BstSet::from([50, 30, 70, 20, 40]);
    /// let order: Vec<_> = set.pre_order().copied().collect();
    /// assert_eq!(order, [50, 30, 20, 40, 70]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder {
            inner: self.raw.pre_order(),
        }
    }

    /// Gets an iterator over the keys of the set in post-order: each node
    /// after both of its subtrees, left subtree first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let set = BstSet::from([50, 30, 70, 20, 40]);
    /// let order: Vec<_> = set.post_order().copied().collect();
    /// assert_eq!(order, [20, 40, 30, 70, 50]);
    /// ```
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder {
            inner: self.raw.post_order(),
        }
    }
}

impl<K> Default for BstSet<K> {
    fn default() -> Self {
        BstSet::new()
    }
}

impl<K: Clone> Clone for BstSet<K> {
    fn clone(&self) -> Self {
        BstSet {
            raw: self.raw.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for BstSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two sets are equal when they contain the same keys; the shapes of the
/// trees are irrelevant.
impl<K: PartialEq> PartialEq for BstSet<K> {
    fn eq(&self, other: &BstSet<K>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq> Eq for BstSet<K> {}

impl<K: Ord> FromIterator<K> for BstSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = BstSet::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord> Extend<K> for BstSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: 'a + Ord + Copy> Extend<&'a K> for BstSet<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        for &key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for BstSet<K> {
    fn from(arr: [K; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K> IntoIterator for BstSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    /// Gets an iterator for moving out the `BstSet`'s keys in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::BstSet;
    ///
    /// let set = BstSet::from([2, 4, 1, 3]);
    /// let keys: Vec<_> = set.into_iter().collect();
    /// assert_eq!(keys, [1, 2, 3, 4]);
    /// ```
    fn into_iter(self) -> IntoIter<K> {
        IntoIter {
            inner: self.raw.into_in_order(),
        }
    }
}

impl<'a, K> IntoIterator for &'a BstSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").finish_non_exhaustive()
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for PreOrder<'_, K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

impl<K> Clone for PreOrder<'_, K> {
    fn clone(&self) -> Self {
        PreOrder {
            inner: self.inner.clone(),
        }
    }
}

impl<K> fmt::Debug for PreOrder<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreOrder").finish_non_exhaustive()
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for PostOrder<'_, K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for PostOrder<'_, K> {}

impl<K> Clone for PostOrder<'_, K> {
    fn clone(&self) -> Self {
        PostOrder {
            inner: self.inner.clone(),
        }
    }
}

impl<K> fmt::Debug for PostOrder<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostOrder").finish_non_exhaustive()
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for IntoIter<K> {}

impl<K> fmt::Debug for IntoIter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").finish_non_exhaustive()
    }
}
