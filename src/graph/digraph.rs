use crate::graph::edge::DirectedEdge;
use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// An edge-weighted directed graph using adjacency lists
///
/// The vertex set is fixed at construction. Edges can only be appended, and
/// each vertex keeps its outgoing edges in insertion order.
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Outgoing edges for each vertex, indexed by vertex id
    adjacency: Vec<Vec<DirectedEdge<W>>>,

    /// Total number of edges over all adjacency lists
    edge_count: usize,
}

impl<W> EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new digraph with the specified number of vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        EdgeWeightedDigraph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a digraph from a list of `(from, to, weight)` triples
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(vertex_count);
        for (from, to, weight) in edges {
            graph.add_edge(DirectedEdge::new(from, to, weight))?;
        }
        Ok(graph)
    }

    /// Appends `edge` to the adjacency list of its tail vertex
    pub fn add_edge(&mut self, edge: DirectedEdge<W>) -> Result<()> {
        let vertex_count = self.adjacency.len();
        if edge.from() >= vertex_count || edge.to() >= vertex_count {
            return Err(Error::InvalidEdge {
                from: edge.from(),
                to: edge.to(),
                vertex_count,
            });
        }
        if !edge.weight().is_finite() {
            return Err(Error::NonFiniteWeight(
                edge.weight().to_f64().unwrap_or(f64::NAN),
            ));
        }

        self.adjacency[edge.from()].push(edge);
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `vertex`, failing for a vertex outside the graph
    pub fn out_edges(&self, vertex: usize) -> Result<&[DirectedEdge<W>]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidVertex {
                vertex,
                vertex_count: self.adjacency.len(),
            })
    }

    pub fn out_degree(&self, vertex: usize) -> Result<usize> {
        self.out_edges(vertex).map(<[_]>::len)
    }

    /// Iterates over every edge, grouped by tail vertex
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge<W>> + '_ {
        self.adjacency.iter().flatten()
    }

    /// Returns true if any edge has a negative weight
    pub fn has_negative_weights(&self) -> bool {
        self.edges().any(|edge| edge.weight() < W::zero())
    }
}

impl<W> Graph<W> for EdgeWeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn adjacent(&self, vertex: usize) -> Result<Box<dyn Iterator<Item = DirectedEdge<W>> + '_>> {
        let edges = self.out_edges(vertex)?;
        Ok(Box::new(edges.iter().copied()))
    }
}
