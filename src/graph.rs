mod edge;
mod error;
mod node;

use std::fmt;

use tracing::trace;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};

/// A directed graph whose nodes hold unique values and whose edges
/// carry an annotation of type `E`.
///
/// Nodes live in slots owned by the graph; edges refer to their destination
/// by [`NodeId`]. Removing a node vacates its slot but leaves edges from
/// other nodes untouched, so those edges dangle until removed explicitly.
#[derive(Debug)]
pub struct Graph<T, E> {
    /// Slots in insertion order. `None` marks a removed node or the unresolved slot.
    slots: Vec<Option<Node<T, E>>>,
    len: usize,
    /// Shared destination for edges aimed at something that was never a node here.
    unresolved: Option<NodeId>,
}

impl<T, E> Graph<T, E> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            len: 0,
            unresolved: None,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of edges over all live nodes, dangling ones included.
    pub fn edge_count(&self) -> usize {
        self.nodes().map(|(_, node)| node.out_degree()).sum()
    }

    /// Iterates over live nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<T, E>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|node| (NodeId(index), node)))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes().map(|(_, node)| node.value())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T, E>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Resolves the destination of `edge`.
    pub fn destination(&self, edge: &Edge<E>) -> GraphResult<&Node<T, E>> {
        self.node(edge.destination())
            .ok_or(GraphError::DanglingEdge {
                destination: edge.destination(),
            })
    }

    pub fn is_dangling(&self, edge: &Edge<E>) -> bool {
        !self.contains_node(edge.destination())
    }

    /// Adds an edge `from -> to`.
    ///
    /// Returns `false` only when *neither* id belongs to a live node.
    /// If just one side is live the call succeeds: a live `from` gets the
    /// edge even when `to` is stale, while a stale `from` has nowhere to
    /// store it and the edge is dropped. A `to` this graph never issued
    /// (one from another graph, say) is stored as the unresolved id, so it
    /// can't start resolving once more nodes are added.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, annotation: E) -> bool {
        if !self.contains_node(from) && !self.contains_node(to) {
            trace!(%from, %to, "edge rejected, both endpoints absent");
            return false;
        }
        let to = self.issued(to);
        self.attach(from, to, annotation);
        true
    }

    /// Removes the first edge `from -> to`.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        let Some(to) = self.issued(to).or(self.unresolved) else {
            return false;
        };
        let removed = self
            .node_mut(from)
            .is_some_and(|node| node.remove_edge(to));
        if removed {
            trace!(%from, %to, "edge removed");
        }
        removed
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T, E>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// `to == None` stands for a destination that was never a node of this graph.
    fn attach(&mut self, from: NodeId, to: Option<NodeId>, annotation: E) {
        if !self.contains_node(from) {
            trace!(%from, "edge source is not in the graph, edge dropped");
            return;
        }
        let to = match to {
            Some(to) => to,
            None => self.unresolved(),
        };
        if let Some(node) = self.node_mut(from) {
            node.add_edge(to, annotation);
            trace!(%from, %to, "edge added");
        }
    }

    fn issued(&self, id: NodeId) -> Option<NodeId> {
        (id.0 < self.slots.len()).then_some(id)
    }

    /// The one id that never resolves, created on first use.
    fn unresolved(&mut self) -> NodeId {
        if let Some(id) = self.unresolved {
            return id;
        }
        let id = NodeId(self.slots.len());
        self.slots.push(None);
        self.unresolved = Some(id);
        id
    }
}

impl<T: PartialEq, E> Graph<T, E> {
    /// Adds a node holding `value`.
    /// Returns `false` and leaves the graph unchanged if the value is already present.
    pub fn add_node(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        let id = NodeId(self.slots.len());
        self.slots.push(Some(Node::new(value)));
        self.len += 1;
        trace!(node = %id, len = self.len, "node added");
        true
    }

    /// Removes the node holding `value` together with its outgoing edges.
    ///
    /// Edges of other nodes that point at it are not touched.
    pub fn remove_node(&mut self, value: &T) -> bool {
        let Some(id) = self.position(value) else {
            return false;
        };
        self.slots[id.0] = None;
        self.len -= 1;
        trace!(node = %id, len = self.len, "node removed");
        true
    }

    /// Same as [`Graph::add_edge`], with endpoints looked up by value.
    ///
    /// Returns `false` only when neither value is present. An absent `to`
    /// still produces an edge, aimed at the unresolved id and dangling from the start.
    pub fn add_edge_by_value(&mut self, from: &T, to: &T, annotation: E) -> bool {
        match (self.position(from), self.position(to)) {
            (None, None) => {
                trace!("edge rejected, both values absent");
                false
            }
            (Some(from), to) => {
                self.attach(from, to, annotation);
                true
            }
            (None, Some(to)) => {
                trace!(%to, "edge source value is not in the graph, edge dropped");
                true
            }
        }
    }

    pub fn node_from_data(&self, value: &T) -> GraphResult<NodeId> {
        self.position(value).ok_or(GraphError::NodeNotFound)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    fn position(&self, value: &T) -> Option<NodeId> {
        self.nodes()
            .find(|(_, node)| node.value() == value)
            .map(|(id, _)| id)
    }
}

impl<T, E> Default for Graph<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces an independent graph with the same values, annotations and
/// topology. Ids, vacated slots included, carry over unchanged.
impl<T: Clone, E: Clone> Clone for Graph<T, E> {
    fn clone(&self) -> Self {
        Self {
            slots: self
                .slots
                .iter()
                .map(|slot| slot.as_ref().map(Node::duplicate))
                .collect(),
            len: self.len,
            unresolved: self.unresolved,
        }
    }
}

impl<T: PartialEq, E> Extend<T> for Graph<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.add_node(value);
        }
    }
}

impl<T: PartialEq, E> FromIterator<T> for Graph<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut graph = Self::new();
        graph.extend(values);
        graph
    }
}

/// One line per node: `value -> dest (annotation), ...`.
/// A dangling destination is printed as `?`.
impl<T: fmt::Display, E: fmt::Display> fmt::Display for Graph<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, node) in self.nodes() {
            write!(f, "{}", node.value())?;
            for (i, edge) in node.edges().iter().enumerate() {
                let separator = if i == 0 { " -> " } else { ", " };
                match self.node(edge.destination()) {
                    Some(destination) => write!(
                        f,
                        "{separator}{} ({})",
                        destination.value(),
                        edge.annotation()
                    )?,
                    None => write!(f, "{separator}? ({})", edge.annotation())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
