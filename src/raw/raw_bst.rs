use core::borrow::Borrow;
use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// Unbalanced binary search tree over arena-allocated nodes.
///
/// All descent is iterative. No rebalancing is ever performed, so the height
/// is O(n) in the worst case (sorted insertion order); every operation here
/// is O(height).
#[derive(Clone)]
pub(crate) struct RawBst<K> {
    pub(super) arena: Arena<Node<K>>,
    pub(super) root: Option<Handle>,
}

impl<K> RawBst<K> {
    pub(crate) const fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Number of live nodes. One node exists per distinct key, so this is
    /// exactly the element count.
    pub(crate) const fn len(&self) -> usize {
        self.arena.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Inserts a key, returning `false` without touching the tree when an
    /// equal key is already present. Allocation happens only once the
    /// insertion point is known.
    pub(crate) fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let Some(mut current) = self.root else {
            self.root = Some(self.arena.alloc(Node::new(key)));
            return true;
        };

        loop {
            let node = self.arena.get(current);
            let side = match key.cmp(node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            match node.child(side) {
                Some(next) => current = next,
                None => {
                    let leaf = self.arena.alloc(Node::new(key));
                    self.arena.get_mut(current).set_child(side, Some(leaf));
                    return true;
                }
            }
        }
    }

    /// Descends to the node holding `key`, also reporting the parent link
    /// that points at it (`None` when the node is the root). The parent link
    /// is what removal rewrites; nodes carry no back-references.
    fn locate<Q>(&self, key: &Q) -> Option<(Option<(Handle, Side)>, Handle)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut parent = None;
        let mut current = self.root?;

        loop {
            let node = self.arena.get(current);
            let side = match key.cmp(node.key().borrow()) {
                Ordering::Equal => return Some((parent, current)),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            parent = Some((current, side));
            current = node.child(side)?;
        }
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.locate(key).is_some()
    }

    /// Leftmost key, or `None` on an empty tree.
    pub(crate) fn min(&self) -> Option<&K> {
        let mut current = self.root?;
        while let Some(left) = self.arena.get(current).left() {
            current = left;
        }
        Some(self.arena.get(current).key())
    }

    /// Rightmost key, or `None` on an empty tree.
    pub(crate) fn max(&self) -> Option<&K> {
        let mut current = self.root?;
        while let Some(right) = self.arena.get(current).right() {
            current = right;
        }
        Some(self.arena.get(current).key())
    }

    /// Overwrites the key stored at `old`'s node without moving the node.
    /// Ordering relative to the rest of the tree is not re-checked.
    pub(crate) fn replace_key<Q>(&mut self, old: &Q, new: K) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.locate(old) {
            Some((_, handle)) => {
                self.arena.get_mut(handle).set_key(new);
                true
            }
            None => false,
        }
    }

    /// Unlinks the node holding `key` and returns its key, or `None` when no
    /// node matches.
    ///
    /// Three structural cases: a childless node is detached, a one-child
    /// node is replaced by its child, and a two-child node is replaced by
    /// its in-order successor (leftmost node of the right subtree), which
    /// inherits the removed node's subtrees. The successor is the fixed
    /// tie-break; the predecessor is never used.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (parent, target) = self.locate(key)?;
        let node = self.arena.get(target);
        let (left, right) = (node.left(), node.right());

        let replacement = match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut succ_parent = target;
                let mut succ = right;
                while let Some(next) = self.arena.get(succ).left() {
                    succ_parent = succ;
                    succ = next;
                }

                if succ_parent != target {
                    // The successor sits deeper in the right subtree: its
                    // parent adopts the successor's right subtree, and the
                    // successor takes over the target's right subtree.
                    let succ_right = self.arena.get(succ).right();
                    self.arena.get_mut(succ_parent).set_left(succ_right);
                    self.arena.get_mut(succ).set_right(Some(right));
                }
                // Either way the successor takes the target's left subtree.
                self.arena.get_mut(succ).set_left(Some(left));
                Some(succ)
            }
        };

        match parent {
            Some((handle, side)) => self.arena.get_mut(handle).set_child(side, replacement),
            None => self.root = replacement,
        }
        Some(self.arena.take(target).into_key())
    }
}
