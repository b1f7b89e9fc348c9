use std::cmp::Ordering;

use crate::node::{Color, Id};
use crate::tree::RbTree;

/// Result of [`RbTree::insert`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The key was already present; the tree is unchanged.
    RejectedDuplicate,
}

impl InsertOutcome {
    pub fn is_inserted(self) -> bool {
        self == InsertOutcome::Inserted
    }
}

impl<K: Ord> RbTree<K> {
    pub fn insert(&mut self, key: K) -> InsertOutcome {
        let mut y = Id::NIL;
        let mut x = self.root;
        let mut go_left = false;
        while !x.is_nil() {
            y = x;
            match key.cmp(self.key(x)) {
                Ordering::Less => {
                    go_left = true;
                    x = self.left(x);
                }
                Ordering::Equal => {
                    log::debug!("insert rejected: key already present");
                    return InsertOutcome::RejectedDuplicate;
                }
                Ordering::Greater => {
                    go_left = false;
                    x = self.right(x);
                }
            }
        }

        let z = self.alloc(key);
        self.node_mut(z).parent = y;
        if y.is_nil() {
            self.root = z;
        } else if go_left {
            self.node_mut(y).left = z;
        } else {
            self.node_mut(y).right = z;
        }
        self.insert_fixup(z);
        InsertOutcome::Inserted
    }

    /// Restores the red-black properties after `z` was linked in as a red leaf.
    ///
    /// On every iteration `z` is red and the only possible red-red edge is
    /// `z`-`z.parent`.
    fn insert_fixup(&mut self, mut z: Id) {
        while self.color(self.parent(z)).is_red() {
            let p = self.parent(z);
            let gp = self.parent(p);
            if p == self.left(gp) {
                let uncle = self.right(gp);
                if self.color(uncle).is_red() {
                    log::trace!("insert fixup: red uncle, recolor");
                    self.set_color(p, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(gp, Color::Red);
                    z = gp;
                    continue;
                }
                if z == self.right(p) {
                    log::trace!("insert fixup: inner grandchild, rotate parent");
                    z = p;
                    self.left_rotate(z);
                }
                log::trace!("insert fixup: outer grandchild, rotate grandparent");
                let p = self.parent(z);
                let gp = self.parent(p);
                self.set_color(p, Color::Black);
                self.set_color(gp, Color::Red);
                self.right_rotate(gp);
            } else {
                let uncle = self.left(gp);
                if self.color(uncle).is_red() {
                    log::trace!("insert fixup: red uncle, recolor");
                    self.set_color(p, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(gp, Color::Red);
                    z = gp;
                    continue;
                }
                if z == self.left(p) {
                    log::trace!("insert fixup: inner grandchild, rotate parent");
                    z = p;
                    self.right_rotate(z);
                }
                log::trace!("insert fixup: outer grandchild, rotate grandparent");
                let p = self.parent(z);
                let gp = self.parent(p);
                self.set_color(p, Color::Black);
                self.set_color(gp, Color::Red);
                self.left_rotate(gp);
            }
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }
}
