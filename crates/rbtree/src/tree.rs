use std::cmp::Ordering;

use crate::node::{Color, Id, Node, id};
use crate::view::NodeRef;

/// Red-black tree over unique, totally ordered keys.
///
/// Nodes live in an arena. Slot 0 holds the sentinel, which stands in for every
/// absent child and for the parent of the root, so links are plain indices and
/// "no node" is an index comparison.
#[derive(Clone)]
pub struct RbTree<K> {
    pub(crate) nodes: Vec<Node<K>>,
    pub(crate) free: Vec<Id>,
    pub(crate) root: Id,
    pub(crate) len: usize,
}

impl<K> RbTree<K> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree whose arena can hold `capacity` keys without
    /// reallocating.
    ///
    /// Slots are addressed by `u32`; holding more than `u32::MAX` keys
    /// panics.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::sentinel());
        Self {
            nodes,
            free: Vec::new(),
            root: Id::NIL,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0] = Node::sentinel();
        self.free.clear();
        self.root = Id::NIL;
        self.len = 0;
    }

    /// Handle to the root, or to the sentinel when the tree is empty.
    pub fn root(&self) -> NodeRef<'_, K> {
        NodeRef::new(self, self.root)
    }

    /// Handle to the sentinel, for identity comparisons by a renderer.
    pub fn nil(&self) -> NodeRef<'_, K> {
        NodeRef::new(self, Id::NIL)
    }

    pub fn min(&self) -> Option<&K> {
        if self.root.is_nil() {
            return None;
        }
        Some(self.key(self.minimum(self.root)))
    }

    pub fn max(&self) -> Option<&K> {
        if self.root.is_nil() {
            return None;
        }
        Some(self.key(self.maximum(self.root)))
    }

    #[inline(always)]
    pub(crate) fn node(&self, x: Id) -> &Node<K> {
        debug_assert!(x.idx() < self.nodes.len());
        &self.nodes[x.idx()]
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, x: Id) -> &mut Node<K> {
        debug_assert!(x.idx() < self.nodes.len());
        &mut self.nodes[x.idx()]
    }

    #[inline(always)]
    pub(crate) fn color(&self, x: Id) -> Color {
        self.node(x).color
    }

    #[inline(always)]
    pub(crate) fn set_color(&mut self, x: Id, color: Color) {
        debug_assert!(!x.is_nil() || color.is_black(), "sentinel must stay black");
        self.node_mut(x).color = color;
    }

    #[inline(always)]
    pub(crate) fn left(&self, x: Id) -> Id {
        self.node(x).left
    }

    #[inline(always)]
    pub(crate) fn right(&self, x: Id) -> Id {
        self.node(x).right
    }

    #[inline(always)]
    pub(crate) fn parent(&self, x: Id) -> Id {
        self.node(x).parent
    }

    #[inline(always)]
    pub(crate) fn key(&self, x: Id) -> &K {
        debug_assert!(!x.is_nil());
        self.node(x).key.as_ref().expect("live node has a key")
    }

    pub(crate) fn alloc(&mut self, key: K) -> Id {
        self.len += 1;
        if let Some(x) = self.free.pop() {
            *self.node_mut(x) = Node::new(key);
            return x;
        }
        let x = id(self.nodes.len());
        self.nodes.push(Node::new(key));
        x
    }

    /// Returns the slot to the free list and hands back its key.
    pub(crate) fn release(&mut self, x: Id) -> K {
        debug_assert!(!x.is_nil());
        self.len -= 1;
        let node = self.node_mut(x);
        node.left = Id::NIL;
        node.right = Id::NIL;
        node.parent = Id::NIL;
        node.color = Color::Black;
        let key = node.key.take().expect("live node has a key");
        self.free.push(x);
        key
    }

    pub(crate) fn minimum(&self, mut x: Id) -> Id {
        while !self.left(x).is_nil() {
            x = self.left(x);
        }
        x
    }

    pub(crate) fn maximum(&self, mut x: Id) -> Id {
        while !self.right(x).is_nil() {
            x = self.right(x);
        }
        x
    }

    /// Points `parent`'s link to `old` (or the root, if `parent` is the
    /// sentinel) at `new`.
    fn replace_child(&mut self, parent: Id, old: Id, new: Id) {
        if parent.is_nil() {
            self.root = new;
        } else if self.left(parent) == old {
            self.node_mut(parent).left = new;
        } else {
            self.node_mut(parent).right = new;
        }
    }

    pub(crate) fn left_rotate(&mut self, x: Id) {
        let y = self.right(x);
        debug_assert!(!y.is_nil(), "left_rotate requires a right child");
        let moved = self.left(y);
        self.node_mut(x).right = moved;
        if !moved.is_nil() {
            self.node_mut(moved).parent = x;
        }
        let xp = self.parent(x);
        self.node_mut(y).parent = xp;
        self.replace_child(xp, x, y);
        self.node_mut(y).left = x;
        self.node_mut(x).parent = y;
    }

    pub(crate) fn right_rotate(&mut self, x: Id) {
        let y = self.left(x);
        debug_assert!(!y.is_nil(), "right_rotate requires a left child");
        let moved = self.right(y);
        self.node_mut(x).left = moved;
        if !moved.is_nil() {
            self.node_mut(moved).parent = x;
        }
        let xp = self.parent(x);
        self.node_mut(y).parent = xp;
        self.replace_child(xp, x, y);
        self.node_mut(y).right = x;
        self.node_mut(x).parent = y;
    }

    /// Installs `v` where `u` hangs from its parent. `v` may be the sentinel,
    /// in which case the sentinel's parent link is written too; deletion fixup
    /// reads it back.
    pub(crate) fn transplant(&mut self, u: Id, v: Id) {
        let up = self.parent(u);
        self.replace_child(up, u, v);
        self.node_mut(v).parent = up;
    }
}

impl<K: Ord> RbTree<K> {
    pub(crate) fn find(&self, key: &K) -> Id {
        let mut x = self.root;
        while !x.is_nil() {
            match key.cmp(self.key(x)) {
                Ordering::Less => x = self.left(x),
                Ordering::Equal => return x,
                Ordering::Greater => x = self.right(x),
            }
        }
        Id::NIL
    }

    pub fn search(&self, key: &K) -> Option<NodeRef<'_, K>> {
        let x = self.find(key);
        if x.is_nil() {
            None
        } else {
            Some(NodeRef::new(self, x))
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        !self.find(key).is_nil()
    }

    /// Smallest key `>= key`.
    pub fn lower_bound(&self, key: &K) -> Option<&K> {
        let mut x = self.root;
        let mut candidate = Id::NIL;
        while !x.is_nil() {
            match key.cmp(self.key(x)) {
                Ordering::Less | Ordering::Equal => {
                    candidate = x;
                    x = self.left(x);
                }
                Ordering::Greater => x = self.right(x),
            }
        }
        if candidate.is_nil() {
            None
        } else {
            Some(self.key(candidate))
        }
    }
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}
