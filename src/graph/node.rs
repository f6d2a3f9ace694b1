use std::fmt;

use super::edge::Edge;

/// Handle to a node slot inside a [`Graph`](super::Graph).
///
/// Ids are never reused, so an id whose node was removed keeps
/// failing to resolve instead of silently pointing at a newer node.
/// Edges aimed at ids the graph never issued share one unresolved id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value stored in the graph together with its outgoing edges.
///
/// Two nodes compare equal when their values do, regardless of edges.
#[derive(Debug)]
pub struct Node<T, E> {
    value: T,
    /// Outgoing edges in insertion order. Parallel edges are allowed.
    edges: Vec<Edge<E>>,
}

impl<T, E> Node<T, E> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            edges: vec![],
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn edges(&self) -> &[Edge<E>] {
        &self.edges
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn add_edge(&mut self, destination: NodeId, annotation: E) {
        self.edges.push(Edge::new(destination, annotation));
    }

    /// Removes the first edge pointing at `destination`.
    /// Later parallel edges to the same node are kept.
    pub(crate) fn remove_edge(&mut self, destination: NodeId) -> bool {
        match self
            .edges
            .iter()
            .position(|edge| edge.destination() == destination)
        {
            Some(position) => {
                self.edges.remove(position);
                true
            }
            None => false,
        }
    }
}

// Only a whole-graph copy may duplicate nodes.
impl<T: Clone, E: Clone> Node<T, E> {
    pub(crate) fn duplicate(&self) -> Self {
        Self {
            value: self.value.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl<T: PartialEq, E> PartialEq for Node<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, E> Eq for Node<T, E> {}
