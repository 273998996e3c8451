pub mod dijkstra;

pub use dijkstra::{DijkstraShortestPath, RunStats};
