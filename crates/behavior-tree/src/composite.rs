//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the two building blocks used for reactive decision
//! making: [`Sequence`] (AND logic) and [`Selector`] (OR logic, i.e. priority).
//!
//! Neither composite remembers which child was running on the previous tick.
//! Every tick starts again from the first child, so a gate that stops holding
//! cancels the work behind it on the very next frame.

use core::fmt;

use crate::{Behavior, Node, Status};

/// Executes child behaviors in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence **stops immediately** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C, E> {
    name: &'static str,
    children: Vec<Node<C, E>>,
}

impl<C, E> Sequence<C, E> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(name: &'static str, children: Vec<Node<C, E>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { name, children }
    }

    /// Diagnostic label of this sequence.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Children in evaluation order.
    pub fn children(&self) -> &[Node<C, E>] {
        &self.children
    }
}

impl<C, E> Behavior<C, E> for Sequence<C, E> {
    fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        for child in &self.children {
            match child.tick(ctx)? {
                Status::Success => continue,
                status => return Ok(status), // Short-circuit on Failure or Running
            }
        }
        Ok(Status::Success)
    }
}

impl<C, E> fmt::Debug for Sequence<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("name", &self.name)
            .field("children", &self.children)
            .finish()
    }
}

/// Executes child behaviors in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Running`, the selector **stops immediately** and returns `Running`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. Child
/// order is the priority order: an earlier branch whose gates hold always
/// wins, even if a later branch was `Running` on the previous tick.
pub struct Selector<C, E> {
    name: &'static str,
    children: Vec<Node<C, E>>,
}

impl<C, E> Selector<C, E> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(name: &'static str, children: Vec<Node<C, E>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { name, children }
    }

    /// Diagnostic label of this selector.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Children in priority order.
    pub fn children(&self) -> &[Node<C, E>] {
        &self.children
    }
}

impl<C, E> Behavior<C, E> for Selector<C, E> {
    fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        for child in &self.children {
            match child.tick(ctx)? {
                Status::Failure => continue,
                status => return Ok(status), // Short-circuit on Success or Running
            }
        }
        Ok(Status::Failure)
    }
}

impl<C, E> fmt::Debug for Selector<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("name", &self.name)
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Condition};

    #[derive(Default)]
    struct TestContext {
        value: i32,
        spy_calls: u32,
    }

    #[derive(Debug, PartialEq)]
    struct Fault;

    type TestNode = Node<TestContext, Fault>;

    fn increment() -> TestNode {
        Node::Action(Action::new("increment", |ctx: &mut TestContext| {
            ctx.value += 1;
            Ok(Status::Success)
        }))
    }

    fn decrement() -> TestNode {
        Node::Action(Action::new("decrement", |ctx: &mut TestContext| {
            ctx.value -= 1;
            Ok(Status::Success)
        }))
    }

    fn fail_always() -> TestNode {
        Node::Condition(Condition::new("never", |_: &TestContext| false))
    }

    fn running() -> TestNode {
        Node::Action(Action::new("running", |_: &mut TestContext| Ok(Status::Running)))
    }

    fn spy() -> TestNode {
        Node::Action(Action::new("spy", |ctx: &mut TestContext| {
            ctx.spy_calls += 1;
            Ok(Status::Success)
        }))
    }

    fn raise() -> TestNode {
        Node::Action(Action::new("raise", |_: &mut TestContext| Err(Fault)))
    }

    #[test]
    fn sequence_all_success() {
        let seq = Sequence::new("both", vec![increment(), increment()]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Ok(Status::Success));
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let seq = Sequence::new("gated", vec![increment(), fail_always(), spy()]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Ok(Status::Failure));
        assert_eq!(ctx.value, 1); // Only first increment executed
        assert_eq!(ctx.spy_calls, 0);
    }

    #[test]
    fn sequence_stops_on_running() {
        let seq = Sequence::new("walk then spy", vec![running(), spy()]);

        let mut ctx = TestContext::default();
        assert_eq!(seq.tick(&mut ctx), Ok(Status::Running));
        assert_eq!(seq.tick(&mut ctx), Ok(Status::Running));
        assert_eq!(ctx.spy_calls, 0);
    }

    #[test]
    fn sequence_restarts_from_first_child_every_tick() {
        let seq = Sequence::new("count then walk", vec![increment(), running()]);

        let mut ctx = TestContext::default();
        for _ in 0..3 {
            assert_eq!(seq.tick(&mut ctx), Ok(Status::Running));
        }
        assert_eq!(ctx.value, 3);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let sel = Selector::new("first", vec![fail_always(), increment(), decrement()]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Ok(Status::Success));
        assert_eq!(ctx.value, 1); // Only increment executed
    }

    #[test]
    fn selector_does_not_evaluate_after_success() {
        let sel = Selector::new("first", vec![increment(), spy()]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Ok(Status::Success));
        assert_eq!(ctx.spy_calls, 0);
    }

    #[test]
    fn selector_stops_on_running() {
        let sel = Selector::new("busy", vec![fail_always(), running(), spy()]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Ok(Status::Running));
        assert_eq!(ctx.spy_calls, 0);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let sel = Selector::new("none", vec![fail_always(), fail_always()]);

        let mut ctx = TestContext::default();
        assert_eq!(sel.tick(&mut ctx), Ok(Status::Failure));
    }

    #[test]
    fn errors_pass_through_nested_composites() {
        let tree = Selector::new(
            "root",
            vec![
                fail_always(),
                Node::Sequence(Sequence::new("inner", vec![increment(), raise(), spy()])),
                spy(),
            ],
        );

        let mut ctx = TestContext::default();
        assert_eq!(tree.tick(&mut ctx), Err(Fault));
        assert_eq!(ctx.value, 1);
        assert_eq!(ctx.spy_calls, 0);
    }

    #[test]
    fn steady_inputs_give_the_same_status() {
        let gate = Sequence::new(
            "gate",
            vec![
                Node::Condition(Condition::new("non-negative", |ctx: &TestContext| {
                    ctx.value >= 0
                })),
                running(),
            ],
        );

        let mut ctx = TestContext::default();
        let first = gate.tick(&mut ctx);
        for _ in 0..5 {
            assert_eq!(gate.tick(&mut ctx), first);
        }
    }

    #[test]
    #[should_panic(expected = "Sequence must have at least one child")]
    fn empty_sequence_panics() {
        let _ = Sequence::<TestContext, Fault>::new("empty", Vec::new());
    }

    #[test]
    #[should_panic(expected = "Selector must have at least one child")]
    fn empty_selector_panics() {
        let _ = Selector::<TestContext, Fault>::new("empty", Vec::new());
    }
}
