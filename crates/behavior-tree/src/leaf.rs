//! Leaf behavior nodes.
//!
//! Leaves do the actual work of a tree. Their arguments are captured by the
//! closure when the tree is built; the context is handed in on every tick.
//!
//! - [`Action`] receives `&mut C` and may return any [`Status`] or an error.
//! - [`Condition`] receives `&C` and answers yes or no. Because it only gets a
//!   shared borrow, a condition cannot mutate the context.

use core::fmt;

use crate::{Behavior, Status};

type ActionFn<C, E> = Box<dyn Fn(&mut C) -> Result<Status, E> + Send + Sync>;
type PredicateFn<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;

/// Runs a behavior-specific function against the context.
///
/// # Semantics
///
/// - Instantaneous actions assign something and return `Success`.
/// - Progressive actions do one increment of work per tick and return
///   `Running` until their goal holds, then `Success`.
/// - Faults are reported as `Err`, never as `Failure`.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Behavior, Status};
///
/// let step = 2;
/// let count_up = Action::new("count up", move |n: &mut i32| {
///     *n += step;
///     Ok::<_, ()>(if *n >= 4 { Status::Success } else { Status::Running })
/// });
///
/// let mut n = 0;
/// assert_eq!(count_up.tick(&mut n), Ok(Status::Running));
/// assert_eq!(count_up.tick(&mut n), Ok(Status::Success));
/// ```
pub struct Action<C, E> {
    name: &'static str,
    run: ActionFn<C, E>,
}

impl<C, E> Action<C, E> {
    /// Creates a new action from a name label and a callable.
    pub fn new<F>(name: &'static str, run: F) -> Self
    where
        F: Fn(&mut C) -> Result<Status, E> + Send + Sync + 'static,
    {
        Self {
            name,
            run: Box::new(run),
        }
    }

    /// Diagnostic label of this action.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C, E> Behavior<C, E> for Action<C, E> {
    fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        (self.run)(ctx)
    }
}

impl<C, E> fmt::Debug for Action<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish()
    }
}

/// Gates a branch on a read-only predicate.
///
/// Returns `Success` when the predicate holds and `Failure` otherwise. A
/// condition never returns `Running` and never raises an error.
pub struct Condition<C> {
    name: &'static str,
    predicate: PredicateFn<C>,
}

impl<C> Condition<C> {
    /// Creates a new condition from a name label and a predicate.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            predicate: Box::new(predicate),
        }
    }

    /// Diagnostic label of this condition.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluates the predicate.
    #[inline]
    pub fn check(&self, ctx: &C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}

impl<C, E> Behavior<C, E> for Condition<C> {
    fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        Ok(self.check(ctx))
    }
}

impl<C> fmt::Debug for Condition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition").field("name", &self.name).finish()
    }
}
