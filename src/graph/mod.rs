pub mod digraph;
pub mod edge;
pub mod generators;
pub mod traits;

pub use digraph::EdgeWeightedDigraph;
pub use edge::DirectedEdge;
pub use traits::Graph;
