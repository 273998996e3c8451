//! Indexed Dijkstra - Single-Source Shortest Paths with an Indexed Priority Queue
//!
//! This library computes shortest-path trees over edge-weighted directed graphs
//! using Dijkstra's algorithm. The priority queue is an indexed binary heap that
//! supports decrease-key, so a run takes O((V + E) log V) time.
//!
//! Edge weights are expected to be non-negative. Negative weights are accepted
//! by the graph but the computed distances are then not guaranteed to be optimal.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::dijkstra::{DijkstraShortestPath, RunStats};
pub use data_structures::IndexMinPriorityQueue;
/// Re-export main types for convenient use
pub use graph::{DirectedEdge, EdgeWeightedDigraph, Graph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("Invalid edge: from {from} to {to} in a graph with {vertex_count} vertices")]
    InvalidEdge {
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("Edge weight must be finite, got {0}")]
    NonFiniteWeight(f64),

    #[error("Index {index} is outside the queue capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("Index {0} is already in the priority queue")]
    DuplicateIndex(usize),

    #[error("Index {0} is not in the priority queue")]
    IndexNotPresent(usize),

    #[error("Key change for index {index} goes in the wrong direction")]
    InvalidKeyChange { index: usize },

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Negative cycle reachable from the source through vertex {vertex}")]
    NegativeCycle { vertex: usize },

    #[error("Shortest path optimality violated: {0}")]
    OptimalityViolation(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
