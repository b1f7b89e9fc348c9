use std::fmt;
use std::iter::FusedIterator;

use crate::node::Id;
use crate::tree::RbTree;

/// Ascending iterator over the keys of an [`RbTree`].
///
/// Steps along successor links through `parent`, so it holds no stack.
pub struct Iter<'a, K> {
    tree: &'a RbTree<K>,
    front: Id,
    back: Id,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a RbTree<K>) -> Self {
        let (front, back) = if tree.root.is_nil() {
            (Id::NIL, Id::NIL)
        } else {
            (tree.minimum(tree.root), tree.maximum(tree.root))
        };
        Self {
            tree,
            front,
            back,
            remaining: tree.len,
        }
    }
}

impl<K> RbTree<K> {
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    pub(crate) fn successor(&self, mut x: Id) -> Id {
        if !self.right(x).is_nil() {
            return self.minimum(self.right(x));
        }
        let mut y = self.parent(x);
        while !y.is_nil() && x == self.right(y) {
            x = y;
            y = self.parent(y);
        }
        y
    }

    pub(crate) fn predecessor(&self, mut x: Id) -> Id {
        if !self.left(x).is_nil() {
            return self.maximum(self.left(x));
        }
        let mut y = self.parent(x);
        while !y.is_nil() && x == self.left(y) {
            x = y;
            y = self.parent(y);
        }
        y
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.front;
        self.remaining -= 1;
        self.front = self.tree.successor(x);
        Some(self.tree.key(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> DoubleEndedIterator for Iter<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.back;
        self.remaining -= 1;
        self.back = self.tree.predecessor(x);
        Some(self.tree.key(x))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Duplicates are dropped, as with [`RbTree::insert`].
impl<K: Ord> Extend<K> for RbTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for RbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = RbTree::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
