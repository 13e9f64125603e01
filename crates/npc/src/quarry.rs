//! The entity an agent chases or flees from.

use crate::Point;

/// Read-only view of the tracked entity.
///
/// The host passes its tracked entity into [`crate::Agent::update`]; the tree
/// never looks it up on its own.
pub trait Tracked {
    fn position(&self) -> Point;
    fn score(&self) -> u32;
}

/// Snapshot of a [`Tracked`] entity taken at the start of a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quarry {
    pub position: Point,
    pub score: u32,
}

impl Quarry {
    pub const fn new(position: Point, score: u32) -> Self {
        Self { position, score }
    }

    pub fn of<T: Tracked + ?Sized>(tracked: &T) -> Self {
        Self {
            position: tracked.position(),
            score: tracked.score(),
        }
    }
}

impl Tracked for Quarry {
    fn position(&self) -> Point {
        self.position
    }

    fn score(&self) -> u32 {
        self.score
    }
}
