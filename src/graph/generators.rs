use crate::graph::{DirectedEdge, EdgeWeightedDigraph};
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random digraph with `n` vertices and `m` edges.
/// Endpoints are uniform over all vertices (self-loops and parallel edges allowed),
/// weights are uniform in `[0, max_weight)`. The same seed always yields the same graph.
pub fn generate_random_digraph(
    n: usize,
    m: usize,
    max_weight: f64,
    seed: u64,
) -> Result<EdgeWeightedDigraph<f64>> {
    let mut graph = EdgeWeightedDigraph::new(n);
    if n == 0 {
        return Ok(graph);
    }
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..m {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        let weight = if max_weight > 0.0 {
            rng.gen_range(0.0..max_weight)
        } else {
            0.0
        };
        graph.add_edge(DirectedEdge::new(from, to, weight))?;
    }

    Ok(graph)
}

/// Generates a `width * height` grid where every cell has edges to its
/// 4-connected neighbours. Vertex `(x, y)` has id `y * width + x`.
/// Horizontal moves cost 1.0, vertical moves cost `vertical_cost`.
pub fn generate_grid(width: usize, height: usize, vertical_cost: f64) -> Result<EdgeWeightedDigraph<f64>> {
    let mut graph = EdgeWeightedDigraph::new(width * height);

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);

            if x > 0 {
                graph.add_edge(DirectedEdge::new(current, get_index(x - 1, y), 1.0))?;
            }
            if x + 1 < width {
                graph.add_edge(DirectedEdge::new(current, get_index(x + 1, y), 1.0))?;
            }
            if y > 0 {
                graph.add_edge(DirectedEdge::new(current, get_index(x, y - 1), vertical_cost))?;
            }
            if y + 1 < height {
                graph.add_edge(DirectedEdge::new(current, get_index(x, y + 1), vertical_cost))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a layered DAG: `layers` layers of `width` vertices each, with every
/// vertex linked to `fan_out` random vertices of the next layer.
/// Vertex 0 is an extra root linked to the whole first layer with weight 0.
pub fn generate_layered_dag(
    layers: usize,
    width: usize,
    fan_out: usize,
    seed: u64,
) -> Result<EdgeWeightedDigraph<f64>> {
    let mut graph = EdgeWeightedDigraph::new(1 + layers * width);
    let mut rng = StdRng::seed_from_u64(seed);

    let vertex_at = |layer: usize, slot: usize| -> usize { 1 + layer * width + slot };

    if layers == 0 || width == 0 {
        return Ok(graph);
    }

    for slot in 0..width {
        graph.add_edge(DirectedEdge::new(0, vertex_at(0, slot), 0.0))?;
    }

    for layer in 0..layers - 1 {
        for slot in 0..width {
            let from = vertex_at(layer, slot);
            let targets: Vec<usize> = (0..width).choose_multiple(&mut rng, fan_out.min(width));
            for target in targets {
                let weight = rng.gen_range(1.0..10.0);
                graph.add_edge(DirectedEdge::new(from, vertex_at(layer + 1, target), weight))?;
            }
        }
    }

    Ok(graph)
}
