use log::{debug, trace, warn};
use num_traits::Float;
use serde::Serialize;
use std::fmt::Debug;

use crate::data_structures::IndexMinPriorityQueue;
use crate::graph::{DirectedEdge, Graph};
use crate::{Error, Result};

/// Counters collected while building a shortest-path tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Vertices removed from the queue
    pub finalized: usize,
    /// Edges examined
    pub edges_scanned: usize,
    /// Edges that improved a tentative distance
    pub relaxations: usize,
    pub inserts: usize,
    pub key_changes: usize,
}

/// Shortest-path tree from a single source, computed with Dijkstra's algorithm
///
/// The whole computation runs inside [`DijkstraShortestPath::new`]; afterwards the
/// structure only answers queries and does not keep a reference to the graph.
#[derive(Debug, Clone)]
pub struct DijkstraShortestPath<W>
where
    W: Float + Debug + Copy,
{
    source: usize,

    /// Best known distance per vertex, `None` while unreached
    dist_to: Vec<Option<W>>,

    /// Last edge on the best known path per vertex
    edge_to: Vec<Option<DirectedEdge<W>>>,

    stats: RunStats,
}

impl<W> DijkstraShortestPath<W>
where
    W: Float + Debug + Copy,
{
    /// Computes the shortest-path tree of `graph` rooted at `source`
    ///
    /// Negative weights are tolerated but give no optimality guarantee. A vertex
    /// finalized more than once triggers a walk of its tree edges, and a cycle
    /// there (a negative cycle reachable from `source`) aborts with `NegativeCycle`.
    pub fn new<G>(graph: &G, source: usize) -> Result<Self>
    where
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex {
                vertex: source,
                vertex_count: n,
            });
        }

        debug!(
            "Dijkstra from source {} over {} vertices and {} edges",
            source,
            n,
            graph.edge_count()
        );

        let mut sp = DijkstraShortestPath {
            source,
            dist_to: vec![None; n],
            edge_to: vec![None; n],
            stats: RunStats::default(),
        };
        sp.dist_to[source] = Some(W::zero());

        let mut queue = IndexMinPriorityQueue::new(n);
        queue.insert(source, W::zero())?;
        sp.stats.inserts += 1;

        let mut warned_negative = false;
        let mut finalized = vec![false; n];
        while !queue.is_empty() {
            let v = queue.delete_minimum()?;
            sp.stats.finalized += 1;
            trace!("Finalized vertex {} at distance {:?}", v, sp.dist_to[v]);

            // Only reachable through negative weights
            if finalized[v] && sp.has_tree_cycle(v) {
                warn!("Negative cycle detected through vertex {}", v);
                return Err(Error::NegativeCycle { vertex: v });
            }
            finalized[v] = true;

            for edge in graph.adjacent(v)? {
                if !warned_negative && edge.weight() < W::zero() {
                    warn!(
                        "Negative edge weight {:?} on {}->{}; distances may not be optimal",
                        edge.weight(),
                        edge.from(),
                        edge.to()
                    );
                    warned_negative = true;
                }
                sp.relax(&edge, &mut queue)?;
            }
        }

        debug!(
            "Dijkstra from source {} finished: {} vertices finalized, {} relaxations",
            source, sp.stats.finalized, sp.stats.relaxations
        );

        Ok(sp)
    }

    fn relax(&mut self, edge: &DirectedEdge<W>, queue: &mut IndexMinPriorityQueue<W>) -> Result<()> {
        self.stats.edges_scanned += 1;

        let (v, w) = (edge.from(), edge.to());
        let Some(dist_v) = self.dist_to[v] else {
            return Ok(());
        };
        let new_dist = dist_v + edge.weight();
        if !new_dist.is_finite() {
            // Overflowed past the largest representable distance
            return Ok(());
        }

        let should_update = match self.dist_to[w] {
            None => true,
            Some(current) => new_dist < current,
        };
        if !should_update {
            return Ok(());
        }

        self.dist_to[w] = Some(new_dist);
        self.edge_to[w] = Some(*edge);
        self.stats.relaxations += 1;

        if queue.contains_index(w)? {
            queue.change_key(w, new_dist)?;
            self.stats.key_changes += 1;
        } else {
            queue.insert(w, new_dist)?;
            self.stats.inserts += 1;
        }
        Ok(())
    }

    /// True if following tree edges backward from `vertex` revisits a vertex
    fn has_tree_cycle(&self, vertex: usize) -> bool {
        let mut steps = 0;
        let mut current = self.edge_to[vertex];
        while let Some(edge) = current {
            steps += 1;
            if steps > self.edge_to.len() {
                return true;
            }
            current = self.edge_to[edge.from()];
        }
        false
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.dist_to.len()
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.dist_to.len() {
            return Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.dist_to.len(),
            });
        }
        Ok(())
    }

    /// Distance from the source, or `None` if `vertex` is unreachable
    pub fn reached_distance(&self, vertex: usize) -> Result<Option<W>> {
        self.check_vertex(vertex)?;
        Ok(self.dist_to[vertex])
    }

    /// Distance from the source; positive infinity if `vertex` is unreachable
    pub fn distance_to(&self, vertex: usize) -> Result<W> {
        Ok(self.reached_distance(vertex)?.unwrap_or_else(W::infinity))
    }

    pub fn has_path_to(&self, vertex: usize) -> Result<bool> {
        Ok(self.reached_distance(vertex)?.is_some())
    }

    /// Last edge on the shortest path to `vertex` (the tree edge into it)
    pub fn edge_to(&self, vertex: usize) -> Result<Option<&DirectedEdge<W>>> {
        self.check_vertex(vertex)?;
        Ok(self.edge_to[vertex].as_ref())
    }

    /// Edges of a shortest path from the source to `vertex`, in source-to-target order.
    ///
    /// Returns `Ok(None)` when `vertex` is unreachable and an empty path for the source itself.
    pub fn path_to(&self, vertex: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        if !self.has_path_to(vertex)? {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut current = self.edge_to[vertex];
        while let Some(edge) = current {
            path.push(edge);
            // A tree built from non-negative weights never revisits a vertex
            if path.len() > self.dist_to.len() {
                return Err(Error::OptimalityViolation(format!(
                    "cycle in shortest-path tree while walking back from {}",
                    vertex
                )));
            }
            current = self.edge_to[edge.from()];
        }
        path.reverse();

        Ok(Some(path))
    }

    /// Vertices of a shortest path from the source to `vertex`, both ends included
    pub fn path_vertices(&self, vertex: usize) -> Result<Option<Vec<usize>>> {
        Ok(self.path_to(vertex)?.map(|edges| {
            std::iter::once(self.source)
                .chain(edges.iter().map(DirectedEdge::to))
                .collect()
        }))
    }

    /// Total weight of the edges on the path to `vertex`, if reachable
    pub fn path_weight(&self, vertex: usize) -> Result<Option<W>> {
        Ok(self
            .path_to(vertex)?
            .map(|edges| edges.iter().fold(W::zero(), |acc, edge| acc + edge.weight())))
    }

    /// Verifies the optimality conditions of the tree against `graph`:
    /// the source has distance zero and no tree edge, no edge can be relaxed
    /// further, and every tree edge is tight.
    pub fn check<G>(&self, graph: &G) -> Result<()>
    where
        G: Graph<W>,
    {
        if graph.vertex_count() != self.dist_to.len() {
            return Err(Error::OptimalityViolation(format!(
                "graph has {} vertices, tree has {}",
                graph.vertex_count(),
                self.dist_to.len()
            )));
        }

        if self.dist_to[self.source] != Some(W::zero()) || self.edge_to[self.source].is_some() {
            return Err(Error::OptimalityViolation(
                "source distance is not zero or source has a tree edge".to_string(),
            ));
        }

        for v in 0..self.dist_to.len() {
            if v != self.source && self.dist_to[v].is_some() != self.edge_to[v].is_some() {
                return Err(Error::OptimalityViolation(format!(
                    "vertex {} has inconsistent distance and tree edge",
                    v
                )));
            }

            let Some(dist_v) = self.dist_to[v] else {
                continue;
            };
            for edge in graph.adjacent(v)? {
                let candidate = dist_v + edge.weight();
                let relaxable = match self.dist_to[edge.to()] {
                    None => candidate.is_finite(),
                    Some(dist_w) => candidate < dist_w,
                };
                if relaxable {
                    return Err(Error::OptimalityViolation(format!("edge {} is not relaxed", edge)));
                }
            }
        }

        for (w, tree_edge) in self.edge_to.iter().enumerate() {
            let Some(edge) = tree_edge else {
                continue;
            };
            if edge.to() != w {
                return Err(Error::OptimalityViolation(format!(
                    "tree edge {} stored for vertex {}",
                    edge, w
                )));
            }
            let tight = match (self.dist_to[edge.from()], self.dist_to[w]) {
                (Some(dist_v), Some(dist_w)) => dist_v + edge.weight() == dist_w,
                _ => false,
            };
            if !tight {
                return Err(Error::OptimalityViolation(format!("tree edge {} is not tight", edge)));
            }
        }

        Ok(())
    }
}
