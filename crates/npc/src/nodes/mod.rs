//! NPC-specific behavior tree nodes.
//!
//! This module contains the leaves the chase/flee/wander policy is built
//! from. Nodes are divided into:
//!
//! - `conditions`: Read-only gates (return Success/Failure)
//! - `actions`: Steering and target selection (return Success/Running, or raise)

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;

/// Node type used by every NPC leaf and composite.
pub type AgentNode = behavior_tree::Node<crate::AgentContext, crate::AgentError>;
