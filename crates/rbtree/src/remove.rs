use crate::node::{Color, Id};
use crate::tree::RbTree;

/// Result of [`RbTree::remove`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// No such key; the tree is unchanged.
    NotFound,
}

impl RemoveOutcome {
    pub fn is_removed(self) -> bool {
        self == RemoveOutcome::Removed
    }
}

impl<K: Ord> RbTree<K> {
    pub fn remove(&mut self, key: &K) -> RemoveOutcome {
        match self.take(key) {
            Some(_) => RemoveOutcome::Removed,
            None => RemoveOutcome::NotFound,
        }
    }

    /// Removes `key` and returns the owned key that was stored.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let z = self.find(key);
        if z.is_nil() {
            log::debug!("remove skipped: key not present");
            return None;
        }
        Some(self.delete_node(z))
    }

    fn delete_node(&mut self, z: Id) -> K {
        let mut removed_color = self.color(z);
        let x;
        if self.left(z).is_nil() {
            x = self.right(z);
            self.transplant(z, x);
        } else if self.right(z).is_nil() {
            x = self.left(z);
            self.transplant(z, x);
        } else {
            let y = self.minimum(self.right(z));
            removed_color = self.color(y);
            x = self.right(y);
            if self.parent(y) == z {
                self.node_mut(x).parent = y;
            } else {
                self.transplant(y, x);
                let zr = self.right(z);
                self.node_mut(y).right = zr;
                self.node_mut(zr).parent = y;
            }
            self.transplant(z, y);
            let zl = self.left(z);
            self.node_mut(y).left = zl;
            self.node_mut(zl).parent = y;
            let zc = self.color(z);
            self.set_color(y, zc);
        }

        if removed_color.is_black() {
            self.delete_fixup(x);
        }
        self.node_mut(Id::NIL).parent = Id::NIL;
        self.release(z)
    }

    /// Pushes the extra black carried by `x` up the tree until it can be
    /// absorbed by a red node, resolved by rotation, or dropped at the root.
    fn delete_fixup(&mut self, mut x: Id) {
        while x != self.root && self.color(x).is_black() {
            let p = self.parent(x);
            if x == self.left(p) {
                let mut w = self.right(p);
                if self.color(w).is_red() {
                    log::trace!("delete fixup: red sibling, rotate parent");
                    self.set_color(w, Color::Black);
                    self.set_color(p, Color::Red);
                    self.left_rotate(p);
                    w = self.right(self.parent(x));
                }
                if self.color(self.left(w)).is_black() && self.color(self.right(w)).is_black() {
                    log::trace!("delete fixup: black nephews, recolor sibling");
                    self.set_color(w, Color::Red);
                    x = self.parent(x);
                    continue;
                }
                if self.color(self.right(w)).is_black() {
                    log::trace!("delete fixup: red near nephew, rotate sibling");
                    let near = self.left(w);
                    self.set_color(near, Color::Black);
                    self.set_color(w, Color::Red);
                    self.right_rotate(w);
                    w = self.right(self.parent(x));
                }
                log::trace!("delete fixup: red far nephew, rotate parent");
                let p = self.parent(x);
                let pc = self.color(p);
                self.set_color(w, pc);
                self.set_color(p, Color::Black);
                let far = self.right(w);
                self.set_color(far, Color::Black);
                self.left_rotate(p);
                x = self.root;
            } else {
                let mut w = self.left(p);
                if self.color(w).is_red() {
                    log::trace!("delete fixup: red sibling, rotate parent");
                    self.set_color(w, Color::Black);
                    self.set_color(p, Color::Red);
                    self.right_rotate(p);
                    w = self.left(self.parent(x));
                }
                if self.color(self.right(w)).is_black() && self.color(self.left(w)).is_black() {
                    log::trace!("delete fixup: black nephews, recolor sibling");
                    self.set_color(w, Color::Red);
                    x = self.parent(x);
                    continue;
                }
                if self.color(self.left(w)).is_black() {
                    log::trace!("delete fixup: red near nephew, rotate sibling");
                    let near = self.right(w);
                    self.set_color(near, Color::Black);
                    self.set_color(w, Color::Red);
                    self.left_rotate(w);
                    w = self.left(self.parent(x));
                }
                log::trace!("delete fixup: red far nephew, rotate parent");
                let p = self.parent(x);
                let pc = self.color(p);
                self.set_color(w, pc);
                self.set_color(p, Color::Black);
                let far = self.left(w);
                self.set_color(far, Color::Black);
                self.right_rotate(p);
                x = self.root;
            }
        }
        self.set_color(x, Color::Black);
    }
}
