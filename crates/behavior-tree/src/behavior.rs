//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the single evaluation
//! operation shared by every node. The trait is generic over a context type
//! `C`, through which leaves read and mutate agent state, and over an error
//! type `E` raised by leaves that cannot make progress.

use core::convert::Infallible;

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C, E = Infallible>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Actions may
    ///   modify it; conditions only read it.
    ///
    /// # Returns
    ///
    /// - `Ok(Status::Success)` if the behavior succeeded
    /// - `Ok(Status::Failure)` if the behavior failed
    /// - `Ok(Status::Running)` if the behavior needs further ticks
    /// - `Err(e)` if a leaf raised an error; composites pass it through untouched
    fn tick(&self, ctx: &mut C) -> Result<Status, E>;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C, E>>` to also implement `Behavior<C, E>`,
/// so hosts can store trees behind a trait object.
impl<C, E> Behavior<C, E> for Box<dyn Behavior<C, E>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        (**self).tick(ctx)
    }
}
