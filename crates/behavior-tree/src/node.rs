//! The closed set of node kinds.
//!
//! A tree is built from exactly four kinds of node. They are represented as a
//! single enum so evaluation is one `match` and the compiler checks that every
//! kind is handled.

use core::fmt;

use crate::{Action, Behavior, Condition, Selector, Sequence, Status};

/// Discriminant of a [`Node`], mostly for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum NodeKind {
    Action,
    Condition,
    Sequence,
    Selector,
}

impl NodeKind {
    /// Leaves have no children.
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Action | Self::Condition)
    }
}

/// A behavior tree node.
///
/// Composites exclusively own their children, so a tree is always a strict
/// hierarchy with no shared or cyclic references. Nodes are immutable once
/// built and carry no memory between ticks.
pub enum Node<C, E> {
    Action(Action<C, E>),
    Condition(Condition<C>),
    Sequence(Sequence<C, E>),
    Selector(Selector<C, E>),
}

impl<C, E> Node<C, E> {
    /// The node's kind.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Action(_) => NodeKind::Action,
            Node::Condition(_) => NodeKind::Condition,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Selector(_) => NodeKind::Selector,
        }
    }

    /// The node's diagnostic label.
    pub fn name(&self) -> &'static str {
        match self {
            Node::Action(node) => node.name(),
            Node::Condition(node) => node.name(),
            Node::Sequence(node) => node.name(),
            Node::Selector(node) => node.name(),
        }
    }

    /// Direct children; empty for leaves.
    pub fn children(&self) -> &[Node<C, E>] {
        match self {
            Node::Sequence(node) => node.children(),
            Node::Selector(node) => node.children(),
            Node::Action(_) | Node::Condition(_) => &[],
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_size(&self) -> usize {
        1 + self.children().iter().map(Node::subtree_size).sum::<usize>()
    }
}

impl<C, E> Behavior<C, E> for Node<C, E> {
    fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        let status = match self {
            Node::Action(node) => node.tick(ctx)?,
            Node::Condition(node) => node.check(ctx),
            Node::Sequence(node) => node.tick(ctx)?,
            Node::Selector(node) => node.tick(ctx)?,
        };
        tracing::trace!(kind = %self.kind(), node = self.name(), %status, "ticked");
        Ok(status)
    }
}

impl<C, E> fmt::Debug for Node<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Action(node) => fmt::Debug::fmt(node, f),
            Node::Condition(node) => fmt::Debug::fmt(node, f),
            Node::Sequence(node) => fmt::Debug::fmt(node, f),
            Node::Selector(node) => fmt::Debug::fmt(node, f),
        }
    }
}

impl<C, E> From<Action<C, E>> for Node<C, E> {
    fn from(node: Action<C, E>) -> Self {
        Node::Action(node)
    }
}

impl<C, E> From<Condition<C>> for Node<C, E> {
    fn from(node: Condition<C>) -> Self {
        Node::Condition(node)
    }
}

impl<C, E> From<Sequence<C, E>> for Node<C, E> {
    fn from(node: Sequence<C, E>) -> Self {
        Node::Sequence(node)
    }
}

impl<C, E> From<Selector<C, E>> for Node<C, E> {
    fn from(node: Selector<C, E>) -> Self {
        Node::Selector(node)
    }
}
