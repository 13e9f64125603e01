//! Reactive behavior tree library for real-time agents.
//!
//! This library provides a minimal behavior tree implementation designed for
//! frame-driven simulations where an agent re-decides what to do every frame.
//!
//! - **Reactive**: The tree is evaluated from the root on every tick
//! - **Running state**: Long actions report `Running` and are ticked again next frame
//! - **No resumption memory**: Composites never remember the running child,
//!   so higher-priority branches preempt lower ones as soon as their gates hold
//! - **Errors propagate**: Leaves return `Result`; composites pass errors through
//!
//! # Architecture
//!
//! - [`Behavior`]: The single evaluation operation shared by all nodes
//! - [`Status`]: Success, Failure or Running
//! - [`Node`]: Closed set of node kinds
//! - Leaf nodes: [`Action`], [`Condition`]
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - [`BehaviorTree`]: Owns the root and ticks it

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod node;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use leaf::{Action, Condition};
pub use node::{Node, NodeKind};
pub use status::Status;
pub use tree::BehaviorTree;
