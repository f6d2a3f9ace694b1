use thiserror::Error;

use super::NodeId;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("No node in the graph holds the requested value")]
    NodeNotFound,

    /// The edge still points at a node that has since been removed,
    /// or at a value that was never added.
    #[error("Edge destination {destination} is not a node of the graph")]
    DanglingEdge { destination: NodeId },
}
