mod check;
mod insert;
mod iter;
mod node;
mod remove;
mod tree;
mod view;

pub use check::InvariantViolation;
pub use insert::InsertOutcome;
pub use iter::Iter;
pub use node::Color;
pub use remove::RemoveOutcome;
pub use tree::RbTree;
pub use view::NodeRef;
