use std::fmt::Debug;
use num_traits::Float;

use crate::graph::edge::DirectedEdge;
use crate::Result;

/// Trait representing a read-only weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges of a vertex, in insertion order.
    /// Fails with `InvalidVertex` for a vertex outside the graph.
    fn adjacent(&self, vertex: usize) -> Result<Box<dyn Iterator<Item = DirectedEdge<W>> + '_>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}
