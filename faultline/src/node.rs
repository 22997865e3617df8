//! Cause-tree navigation.
//!
//! Any error type joins a cause tree by implementing [`ErrorNode`]. The trait
//! exposes two optional capabilities instead of a common base type:
//!
//! - [`ErrorNode::cause_node`]: zero or one single cause (**Chained**)
//! - [`ErrorNode::cause_nodes`]: an ordered list of sibling causes (**Fanned**)
//!
//! [`shape`] classifies a node by the capability it exposes. A node exposing
//! an ordered cause list is Fanned whatever its concrete type; every other
//! node is Chained, and a node exposing neither capability is Chained with
//! no cause.

use crate::metadata::Metadata;

/// An error that can carry an error code and take part in a cause tree.
///
/// Every method has a default, so a foreign type only overrides the
/// capabilities it actually has. A type that keeps the default
/// [`metadata`](Self::metadata) has no bag: reading its code yields `None`
/// and attaching a code fails.
pub trait ErrorNode: std::error::Error + Send + Sync {
    /// Metadata bag, `None` when the type carries none.
    fn metadata(&self) -> Option<&Metadata> {
        None
    }

    /// Mutable metadata bag, `None` when the type carries none.
    fn metadata_mut(&mut self) -> Option<&mut Metadata> {
        None
    }

    /// The single cause of a chained error.
    ///
    /// Causes must form a tree: a node reachable from itself makes the
    /// flattener loop without bound.
    fn cause_node(&self) -> Option<&dyn ErrorNode> {
        None
    }

    /// Ordered sibling causes. Returning `Some` (even an empty list) marks
    /// the node as a fan-out.
    ///
    /// The same acyclicity requirement as [`cause_node`](Self::cause_node)
    /// applies.
    fn cause_nodes(&self) -> Option<Vec<&dyn ErrorNode>> {
        None
    }

    /// Detach and return the causes this node owns.
    ///
    /// Used to tear a tree down iteratively. Types that do not own boxed
    /// causes keep the default.
    fn take_causes(&mut self) -> Vec<Box<dyn ErrorNode>> {
        Vec::new()
    }
}

/// Shape of a node in a cause tree.
#[derive(Debug)]
pub enum Shape<'a> {
    /// Zero or one single cause.
    Chained(Option<&'a dyn ErrorNode>),
    /// Ordered sibling causes.
    Fanned(Vec<&'a dyn ErrorNode>),
}

impl<'a> Shape<'a> {
    /// Returns true for a fan-out.
    pub fn is_fanned(&self) -> bool {
        matches!(self, Self::Fanned(_))
    }

    /// Direct causes in structural order.
    pub fn into_causes(self) -> Vec<&'a dyn ErrorNode> {
        match self {
            Self::Chained(cause) => cause.into_iter().collect(),
            Self::Fanned(causes) => causes,
        }
    }
}

/// Drop `causes` and everything below them without recursing.
///
/// Each node is stripped of its owned causes before it is dropped, so its
/// own destructor never walks further than one level.
pub(crate) fn dismantle(mut pending: Vec<Box<dyn ErrorNode>>) {
    while let Some(mut node) = pending.pop() {
        pending.append(&mut node.take_causes());
    }
}

/// Classify `node` by the cause capability it exposes.
pub fn shape<E: ErrorNode + ?Sized>(node: &E) -> Shape<'_> {
    match node.cause_nodes() {
        Some(causes) => Shape::Fanned(causes),
        None => Shape::Chained(node.cause_node()),
    }
}
