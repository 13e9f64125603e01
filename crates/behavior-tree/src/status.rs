//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Reactive Semantics
///
/// The whole tree is evaluated from the root on every tick. `Running` never
/// means "resume here next time"; it means "this subtree wants another tick",
/// and the next tick starts again from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action reached its goal this tick.
    Success,

    /// The behavior failed.
    ///
    /// Only conditions fail in practice. Actions report faults as errors.
    Failure,

    /// The behavior made progress but has not reached its goal yet.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for `Success` or `Failure`.
    #[inline]
    pub fn is_done(self) -> bool {
        !self.is_running()
    }

    /// Maps a predicate outcome onto `Success`/`Failure`.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        Status::from_bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_is_not_done() {
        assert!(Status::Running.is_running());
        assert!(!Status::Running.is_done());
        assert!(Status::Success.is_done());
        assert!(Status::Failure.is_done());
    }

    #[test]
    fn bool_maps_to_terminal_status() {
        assert_eq!(Status::from(true), Status::Success);
        assert_eq!(Status::from(false), Status::Failure);
    }

    #[test]
    fn display_uses_protocol_names() {
        assert_eq!(Status::Success.to_string(), "SUCCESS");
        assert_eq!(Status::Failure.as_ref(), "FAILURE");
        assert_eq!(Status::Running.to_string(), "RUNNING");
    }
}
