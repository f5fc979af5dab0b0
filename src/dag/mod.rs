// src/dag/mod.rs

//! Course dependency graph and its ordering.
//!
//! - [`graph`] holds the directed "must come before" graph.
//! - [`builder`] expands a resolved course set into that graph.
//! - [`topo`] produces a topological order or reports a cycle.

pub mod builder;
pub mod graph;
pub mod topo;

pub use builder::{GraphBuilder, build_graph};
pub use graph::{CourseNode, DependencyGraph, EdgeKind};
pub use topo::topological_order;
