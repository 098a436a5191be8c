//! Lazy traversal cores over the node arena.
//!
//! All three orders use an explicit stack instead of recursion, so a
//! degenerate (linear-depth) tree cannot overflow the call stack. Each
//! iterator borrows the tree and is independently restartable; nothing is
//! consumed or mutated.

use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use super::raw_bst::RawBst;

impl<K> RawBst<K> {
    /// Left subtree, node, right subtree: keys in ascending order.
    pub(crate) fn in_order(&self) -> InOrder<'_, K> {
        let mut iter = InOrder {
            arena: &self.arena,
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Node, left subtree, right subtree.
    pub(crate) fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder {
            arena: &self.arena,
            stack: self.root.into_iter().collect(),
            remaining: self.len(),
        }
    }

    /// Left subtree, right subtree, node.
    pub(crate) fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder {
            arena: &self.arena,
            stack: self.root.map(|handle| (handle, false)).into_iter().collect(),
            remaining: self.len(),
        }
    }

    /// Consumes the tree, yielding owned keys in ascending order.
    pub(crate) fn into_in_order(self) -> IntoInOrder<K> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.arena.get(handle).left();
            }
            let Some(handle) = stack.pop() else { break };
            order.push(handle);
            current = self.arena.get(handle).right();
        }
        IntoInOrder {
            arena: self.arena,
            order: order.into_iter(),
        }
    }
}

pub(crate) struct InOrder<'a, K> {
    arena: &'a Arena<Node<K>>,
    // Ancestors of the next key whose own key is still pending.
    stack: Vec<Handle>,
    remaining: usize,
}

impl<K> InOrder<'_, K> {
    fn push_left_spine(&mut self, mut current: Option<Handle>) {
        while let Some(handle) = current {
            self.stack.push(handle);
            current = self.arena.get(handle).left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let handle = self.stack.pop()?;
        let node = self.arena.get(handle);
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for InOrder<'_, K> {}
impl<K> core::iter::FusedIterator for InOrder<'_, K> {}

impl<K> Clone for InOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

pub(crate) struct PreOrder<'a, K> {
    arena: &'a Arena<Node<K>>,
    stack: Vec<Handle>,
    remaining: usize,
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let handle = self.stack.pop()?;
        let node = self.arena.get(handle);
        // Right below left so the left subtree is popped first.
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for PreOrder<'_, K> {}
impl<K> core::iter::FusedIterator for PreOrder<'_, K> {}

impl<K> Clone for PreOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

pub(crate) struct PostOrder<'a, K> {
    arena: &'a Arena<Node<K>>,
    // The flag records whether a node's children have been expanded; a node
    // is yielded only on its second visit.
    stack: Vec<(Handle, bool)>,
    remaining: usize,
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        loop {
            let (handle, expanded) = self.stack.pop()?;
            let node = self.arena.get(handle);
            if expanded {
                self.remaining -= 1;
                return Some(node.key());
            }
            self.stack.push((handle, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for PostOrder<'_, K> {}
impl<K> core::iter::FusedIterator for PostOrder<'_, K> {}

impl<K> Clone for PostOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

pub(crate) struct IntoInOrder<K> {
    arena: Arena<Node<K>>,
    order: alloc::vec::IntoIter<Handle>,
}

impl<K> Iterator for IntoInOrder<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.order.next().map(|handle| self.arena.take(handle).into_key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K> ExactSizeIterator for IntoInOrder<K> {}
impl<K> core::iter::FusedIterator for IntoInOrder<K> {}
