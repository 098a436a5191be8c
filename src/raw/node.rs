use super::handle::Handle;

/// Which child slot of a node a link goes through.
///
/// Descent code carries `(Handle, Side)` pairs instead of storing parent
/// back-references on nodes, so removal knows exactly which link to rewrite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A single tree node: one key and up to two child links.
///
/// The key is the element; there is no separate payload. All keys in the
/// left subtree are strictly less than `key`, all keys in the right subtree
/// strictly greater.
#[derive(Clone)]
pub(crate) struct Node<K> {
    key: K,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K> Node<K> {
    pub(crate) const fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    /// Overwrites the key in place. The node keeps its position and links;
    /// the caller is responsible for the replacement being order-compatible.
    pub(crate) fn set_key(&mut self, key: K) {
        self.key = key;
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn set_left(&mut self, child: Option<Handle>) {
        self.left = child;
    }

    pub(crate) fn set_right(&mut self, child: Option<Handle>) {
        self.right = child;
    }
}
