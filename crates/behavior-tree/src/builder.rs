//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Node::Sequence(Sequence::new("name", vec![...]))`, you can use shorter
//! functions like `sequence("name", vec![...])`.

use crate::{Action, Condition, Node, Selector, Sequence, Status};

/// Creates a sequence node.
///
/// Shorthand for `Node::Sequence(Sequence::new(name, children))`.
#[inline]
pub fn sequence<C, E>(name: &'static str, children: Vec<Node<C, E>>) -> Node<C, E> {
    Node::Sequence(Sequence::new(name, children))
}

/// Creates a selector node.
///
/// Shorthand for `Node::Selector(Selector::new(name, children))`.
#[inline]
pub fn selector<C, E>(name: &'static str, children: Vec<Node<C, E>>) -> Node<C, E> {
    Node::Selector(Selector::new(name, children))
}

/// Creates an action leaf.
///
/// Shorthand for `Node::Action(Action::new(name, run))`.
#[inline]
pub fn action<C, E, F>(name: &'static str, run: F) -> Node<C, E>
where
    F: Fn(&mut C) -> Result<Status, E> + Send + Sync + 'static,
{
    Node::Action(Action::new(name, run))
}

/// Creates a condition leaf.
///
/// Shorthand for `Node::Condition(Condition::new(name, predicate))`.
#[inline]
pub fn condition<C, E, F>(name: &'static str, predicate: F) -> Node<C, E>
where
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Node::Condition(Condition::new(name, predicate))
}
