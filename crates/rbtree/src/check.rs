use std::fmt;

use crate::node::{Color, Id};
use crate::tree::RbTree;

/// A broken red-black property found by [`RbTree::check_invariants`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    RedSentinel,
    RedRoot,
    /// A red node has a red child. Carries the in-order position of the child.
    RedRedEdge { position: usize },
    BlackHeightMismatch { expected: usize, found: usize },
    /// In-order keys are not strictly increasing at this position.
    OutOfOrder { position: usize },
    BrokenParentLink { position: usize },
    LengthMismatch { recorded: usize, reachable: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InvariantViolation::RedSentinel => f.write_str("sentinel is red"),
            InvariantViolation::RedRoot => f.write_str("root is red"),
            InvariantViolation::RedRedEdge { position } => {
                write!(f, "red node at in-order position {position} has a red parent")
            }
            InvariantViolation::BlackHeightMismatch { expected, found } => {
                write!(f, "black height mismatch: expected {expected}, found {found}")
            }
            InvariantViolation::OutOfOrder { position } => {
                write!(f, "keys out of order at in-order position {position}")
            }
            InvariantViolation::BrokenParentLink { position } => {
                write!(f, "parent link broken at in-order position {position}")
            }
            InvariantViolation::LengthMismatch {
                recorded,
                reachable,
            } => write!(f, "length is {recorded} but {reachable} nodes are reachable"),
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl<K> RbTree<K> {
    /// In-order keys with their colors.
    pub fn traverse(&self) -> Vec<(&K, Color)> {
        let mut out = Vec::with_capacity(self.len);
        self.traverse_from(self.root, &mut out);
        out
    }

    fn traverse_from<'a>(&'a self, x: Id, out: &mut Vec<(&'a K, Color)>) {
        if x.is_nil() {
            return;
        }
        self.traverse_from(self.left(x), out);
        out.push((self.key(x), self.color(x)));
        self.traverse_from(self.right(x), out);
    }

    /// Whether every root-to-sentinel path crosses the same number of black
    /// nodes. Red-red edges are not examined; see [`RbTree::check_invariants`].
    pub fn is_balanced(&self) -> bool {
        self.black_height().is_some()
    }

    /// Black height of the root (sentinel excluded), or `None` when paths
    /// disagree. The empty tree has black height 0.
    pub fn black_height(&self) -> Option<usize> {
        self.black_height_from(self.root)
    }

    fn black_height_from(&self, x: Id) -> Option<usize> {
        if x.is_nil() {
            return Some(0);
        }
        let left = self.black_height_from(self.left(x))?;
        let right = self.black_height_from(self.right(x))?;
        if left != right {
            return None;
        }
        Some(left + usize::from(self.color(x).is_black()))
    }

    /// Checks every red-black property plus link consistency.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation>
    where
        K: Ord,
    {
        if self.color(Id::NIL).is_red() {
            return Err(InvariantViolation::RedSentinel);
        }
        if self.color(self.root).is_red() {
            return Err(InvariantViolation::RedRoot);
        }
        if !self.root.is_nil() && !self.parent(self.root).is_nil() {
            return Err(InvariantViolation::BrokenParentLink { position: 0 });
        }
        let mut walk = Walk {
            position: 0,
            prev: None,
        };
        self.check_from(self.root, &mut walk)?;
        if walk.position != self.len {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.len,
                reachable: walk.position,
            });
        }
        Ok(())
    }

    /// Returns the black height of the subtree at `x`.
    fn check_from<'a>(&'a self, x: Id, walk: &mut Walk<'a, K>) -> Result<usize, InvariantViolation>
    where
        K: Ord,
    {
        if x.is_nil() {
            return Ok(0);
        }
        let (l, r) = (self.left(x), self.right(x));
        for child in [l, r] {
            if !child.is_nil() && self.parent(child) != x {
                return Err(InvariantViolation::BrokenParentLink {
                    position: walk.position,
                });
            }
        }

        let left = self.check_from(l, walk)?;

        let key = self.key(x);
        if walk.prev.is_some_and(|prev| prev >= key) {
            return Err(InvariantViolation::OutOfOrder {
                position: walk.position,
            });
        }
        if self.color(x).is_red() && self.color(self.parent(x)).is_red() {
            return Err(InvariantViolation::RedRedEdge {
                position: walk.position,
            });
        }
        walk.prev = Some(key);
        walk.position += 1;

        let right = self.check_from(r, walk)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                expected: left,
                found: right,
            });
        }
        Ok(left + usize::from(self.color(x).is_black()))
    }
}

struct Walk<'a, K> {
    position: usize,
    prev: Option<&'a K>,
}
