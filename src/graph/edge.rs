use super::NodeId;

/// A directed connection to another node, carrying an arbitrary annotation
/// (a weight, a label, ...).
///
/// The edge does not own its destination. It only remembers the id,
/// which may stop resolving once the destination is removed from the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E> {
    destination: NodeId,
    annotation: E,
}

impl<E> Edge<E> {
    pub(crate) fn new(destination: NodeId, annotation: E) -> Self {
        Self {
            destination,
            annotation,
        }
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn annotation(&self) -> &E {
        &self.annotation
    }
}
