//! Root wrapper.

use crate::{Behavior, Node, Status};

/// Owns the root node of a tree and ticks it.
///
/// The tree holds nothing else: every tick evaluates the root from scratch.
/// The returned status is informational; callers are free to ignore it.
#[derive(Debug)]
pub struct BehaviorTree<C, E> {
    root: Node<C, E>,
}

impl<C, E> BehaviorTree<C, E> {
    pub fn new(root: Node<C, E>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node<C, E> {
        &self.root
    }

    /// Evaluates the whole tree once.
    ///
    /// Errors raised by a leaf are returned unchanged.
    pub fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        self.root.tick(ctx)
    }
}
