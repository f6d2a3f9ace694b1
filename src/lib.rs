//! A small directed graph container.
//!
//! Nodes hold unique values, edges carry an annotation (a weight, a label, ...).
//! The graph owns every node; edges only refer to their destination by id.

pub use graph::{Edge, Graph, GraphError, GraphResult, Node, NodeId};

mod graph;
