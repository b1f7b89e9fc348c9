use std::fmt;

use crate::node::{Color, Id};
use crate::tree::RbTree;

/// Read-only handle to a slot of a tree, possibly the sentinel.
///
/// Equality is identity: two handles are equal when they name the same slot
/// of the same tree, regardless of key.
pub struct NodeRef<'a, K> {
    tree: &'a RbTree<K>,
    id: Id,
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(tree: &'a RbTree<K>, id: Id) -> Self {
        Self { tree, id }
    }

    pub fn is_nil(&self) -> bool {
        self.id.is_nil()
    }

    /// `None` for the sentinel.
    pub fn key(&self) -> Option<&'a K> {
        self.tree.node(self.id).key.as_ref()
    }

    pub fn color(&self) -> Color {
        self.tree.color(self.id)
    }

    pub fn left(&self) -> Self {
        Self::new(self.tree, self.tree.left(self.id))
    }

    pub fn right(&self) -> Self {
        Self::new(self.tree, self.tree.right(self.id))
    }

    /// The sentinel for the root and for the sentinel itself.
    pub fn parent(&self) -> Self {
        if self.id.is_nil() {
            return *self;
        }
        Self::new(self.tree, self.tree.parent(self.id))
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<K> Eq for NodeRef<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => f
                .debug_struct("NodeRef")
                .field("key", key)
                .field("color", &self.color())
                .finish(),
            None => f.write_str("NodeRef(nil)"),
        }
    }
}
