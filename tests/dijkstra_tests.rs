use indexed_dijkstra::graph::generators::{generate_grid, generate_layered_dag, generate_random_digraph};
use indexed_dijkstra::graph::{DirectedEdge, EdgeWeightedDigraph, Graph};
use indexed_dijkstra::{DijkstraShortestPath, Error};
use ordered_float::OrderedFloat;

const EPS: f64 = 1e-9;

// Four vertices from the worked example plus an isolated vertex 4
fn create_small_graph() -> EdgeWeightedDigraph<f64> {
    EdgeWeightedDigraph::from_edges(
        5,
        vec![(0, 1, 5.0), (0, 2, 9.0), (1, 2, 2.0), (1, 3, 1.0)],
    )
    .unwrap()
}

// Brute-force distances used as an oracle
fn bellman_ford(graph: &EdgeWeightedDigraph<f64>, source: usize) -> Vec<f64> {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    dist[source] = 0.0;
    for _ in 0..n {
        let mut changed = false;
        for edge in graph.edges() {
            let candidate = dist[edge.from()] + edge.weight();
            if candidate < dist[edge.to()] {
                dist[edge.to()] = candidate;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn assert_valid_tree(graph: &EdgeWeightedDigraph<f64>, sp: &DijkstraShortestPath<f64>) {
    sp.check(graph).unwrap();
    let source = sp.source();
    for v in 0..graph.vertex_count() {
        match sp.path_to(v).unwrap() {
            None => {
                assert!(!sp.has_path_to(v).unwrap());
                assert_eq!(sp.distance_to(v).unwrap(), f64::INFINITY);
            }
            Some(path) => {
                let total: f64 = path.iter().map(|e| e.weight()).sum();
                assert!((total - sp.distance_to(v).unwrap()).abs() < EPS);
                if let (Some(first), Some(last)) = (path.first(), path.last()) {
                    assert_eq!(first.from(), source);
                    assert_eq!(last.to(), v);
                } else {
                    assert_eq!(v, source);
                }
                for pair in path.windows(2) {
                    assert_eq!(pair[0].to(), pair[1].from());
                }
            }
        }
    }
}

#[test]
fn test_small_graph_distances() {
    let graph = create_small_graph();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();

    assert_eq!(sp.distance_to(0).unwrap(), 0.0);
    assert_eq!(sp.distance_to(1).unwrap(), 5.0);
    assert_eq!(sp.distance_to(2).unwrap(), 7.0);
    assert_eq!(sp.distance_to(3).unwrap(), 6.0);

    let path = sp.path_to(2).unwrap().unwrap();
    assert_eq!(
        path,
        vec![DirectedEdge::new(0, 1, 5.0), DirectedEdge::new(1, 2, 2.0)]
    );
    assert_eq!(sp.path_vertices(3).unwrap(), Some(vec![0, 1, 3]));
    assert_eq!(sp.path_weight(3).unwrap(), Some(6.0));
    assert_eq!(sp.edge_to(2).unwrap(), Some(&DirectedEdge::new(1, 2, 2.0)));

    assert_valid_tree(&graph, &sp);
}

#[test]
fn test_unreachable_vertex_has_no_path() {
    let graph = create_small_graph();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();

    assert!(!sp.has_path_to(4).unwrap());
    assert_eq!(sp.distance_to(4).unwrap(), f64::INFINITY);
    assert_eq!(sp.reached_distance(4).unwrap(), None);
    assert_eq!(sp.path_to(4).unwrap(), None);
    assert_eq!(sp.path_vertices(4).unwrap(), None);
    assert_eq!(sp.edge_to(4).unwrap(), None);
}

#[test]
fn test_source_path_is_empty() {
    let graph = create_small_graph();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();

    assert!(sp.has_path_to(0).unwrap());
    assert_eq!(sp.distance_to(0).unwrap(), 0.0);
    assert_eq!(sp.edge_to(0).unwrap(), None);
    assert_eq!(sp.path_to(0).unwrap(), Some(Vec::new()));
    assert_eq!(sp.path_vertices(0).unwrap(), Some(vec![0]));
}

#[test]
fn test_single_vertex_graph() {
    let graph: EdgeWeightedDigraph<f64> = EdgeWeightedDigraph::new(1);
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();

    assert_eq!(sp.distance_to(0).unwrap(), 0.0);
    assert_eq!(sp.stats().finalized, 1);
    assert_eq!(sp.stats().edges_scanned, 0);
    sp.check(&graph).unwrap();
}

#[test]
fn test_non_zero_source() {
    let graph = EdgeWeightedDigraph::from_edges(
        4,
        vec![(2, 3, 1.0), (3, 0, 2.0), (0, 1, 4.0), (2, 1, 10.0)],
    )
    .unwrap();
    let sp = DijkstraShortestPath::new(&graph, 2).unwrap();

    assert_eq!(sp.distance_to(2).unwrap(), 0.0);
    assert_eq!(sp.distance_to(3).unwrap(), 1.0);
    assert_eq!(sp.distance_to(0).unwrap(), 3.0);
    assert_eq!(sp.distance_to(1).unwrap(), 7.0);
    assert_eq!(sp.path_vertices(1).unwrap(), Some(vec![2, 3, 0, 1]));
    assert_valid_tree(&graph, &sp);

    // Vertex 2 is unreachable from 0
    let sp0 = DijkstraShortestPath::new(&graph, 0).unwrap();
    assert!(!sp0.has_path_to(2).unwrap());
}

#[test]
fn test_decrease_key_path_is_taken() {
    // 0->3 is discovered first at 10, then improved through 1 and 2
    let graph = EdgeWeightedDigraph::from_edges(
        4,
        vec![(0, 3, 10.0), (0, 1, 1.0), (1, 3, 8.0), (1, 2, 1.0), (2, 3, 1.0)],
    )
    .unwrap();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();

    assert_eq!(sp.distance_to(3).unwrap(), 3.0);
    assert_eq!(sp.path_vertices(3).unwrap(), Some(vec![0, 1, 2, 3]));
    assert_eq!(sp.stats().key_changes, 2);
    assert_eq!(sp.stats().finalized, 4);
}

#[test]
fn test_zero_weight_edges() {
    let graph =
        EdgeWeightedDigraph::from_edges(3, vec![(0, 1, 0.0), (1, 2, 0.0), (2, 0, 0.0)]).unwrap();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();
    for v in 0..3 {
        assert_eq!(sp.distance_to(v).unwrap(), 0.0);
    }
    assert_valid_tree(&graph, &sp);
}

#[test]
fn test_invalid_vertices_are_errors() {
    let graph = create_small_graph();

    assert_eq!(
        DijkstraShortestPath::new(&graph, 5).unwrap_err(),
        Error::InvalidVertex { vertex: 5, vertex_count: 5 }
    );

    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();
    let expected = Error::InvalidVertex { vertex: 9, vertex_count: 5 };
    assert_eq!(sp.distance_to(9).unwrap_err(), expected);
    assert_eq!(sp.has_path_to(9).unwrap_err(), expected);
    assert_eq!(sp.path_to(9).unwrap_err(), expected);
    assert_eq!(sp.edge_to(9).unwrap_err(), expected);

    let empty: EdgeWeightedDigraph<f64> = EdgeWeightedDigraph::new(0);
    assert!(DijkstraShortestPath::new(&empty, 0).is_err());
}

#[test]
fn test_runs_are_idempotent() {
    let graph = generate_random_digraph(300, 1500, 50.0, 11).unwrap();
    let first = DijkstraShortestPath::new(&graph, 3).unwrap();
    let second = DijkstraShortestPath::new(&graph, 3).unwrap();

    for v in 0..graph.vertex_count() {
        assert_eq!(first.reached_distance(v).unwrap(), second.reached_distance(v).unwrap());
        assert_eq!(first.edge_to(v).unwrap(), second.edge_to(v).unwrap());
        assert_eq!(first.path_to(v).unwrap(), second.path_to(v).unwrap());
    }
    assert_eq!(first.stats(), second.stats());
}

#[test]
fn test_matches_bellman_ford_on_random_graphs() {
    for seed in 0..20 {
        let graph = generate_random_digraph(80, 240, 20.0, seed).unwrap();
        let source = (seed as usize * 7) % graph.vertex_count();
        let sp = DijkstraShortestPath::new(&graph, source).unwrap();
        let expected = bellman_ford(&graph, source);

        for v in 0..graph.vertex_count() {
            let actual = sp.distance_to(v).unwrap();
            if expected[v].is_infinite() {
                assert!(actual.is_infinite(), "seed {} vertex {}", seed, v);
            } else {
                assert!((actual - expected[v]).abs() < EPS, "seed {} vertex {}", seed, v);
            }
        }
        assert_valid_tree(&graph, &sp);
    }
}

#[test]
fn test_optimality_condition_holds_for_every_edge() {
    let graph = generate_random_digraph(200, 1000, 100.0, 99).unwrap();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();
    for edge in graph.edges() {
        let dist_v = sp.distance_to(edge.from()).unwrap();
        let dist_w = sp.distance_to(edge.to()).unwrap();
        assert!(dist_w <= dist_v + edge.weight());
    }
}

#[test]
fn test_grid_distances() {
    let graph = generate_grid(10, 10, 2.0).unwrap();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();

    // Manhattan distance with vertical moves costing 2
    assert_eq!(sp.distance_to(99).unwrap(), 9.0 + 18.0);
    assert_eq!(sp.distance_to(9).unwrap(), 9.0);
    assert_eq!(sp.path_to(99).unwrap().unwrap().len(), 18);
    assert_valid_tree(&graph, &sp);
}

#[test]
fn test_layered_dag_reaches_every_vertex() {
    let graph = generate_layered_dag(6, 8, 3, 5).unwrap();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();

    // Every first-layer vertex hangs off the root with weight 0
    for slot in 1..=8 {
        assert_eq!(sp.distance_to(slot).unwrap(), 0.0);
    }
    assert_valid_tree(&graph, &sp);
    let reachable = (0..graph.vertex_count())
        .filter(|&v| sp.has_path_to(v).unwrap())
        .count();
    assert_eq!(sp.stats().finalized, reachable);
}

#[test]
fn test_ordered_float_weights() {
    let graph = EdgeWeightedDigraph::from_edges(
        3,
        vec![
            (0, 1, OrderedFloat(1.5)),
            (1, 2, OrderedFloat(1.5)),
            (0, 2, OrderedFloat(4.0)),
        ],
    )
    .unwrap();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();
    assert_eq!(sp.distance_to(2).unwrap(), OrderedFloat(3.0));
    sp.check(&graph).unwrap();
}

#[test]
fn test_check_detects_foreign_graph() {
    let graph = create_small_graph();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();

    // Same vertex count but a shortcut the tree does not know about
    let mut other = create_small_graph();
    other.add_edge(DirectedEdge::new(0, 3, 1.0)).unwrap();
    assert!(matches!(sp.check(&other), Err(Error::OptimalityViolation(_))));

    let smaller: EdgeWeightedDigraph<f64> = EdgeWeightedDigraph::new(2);
    assert!(matches!(sp.check(&smaller), Err(Error::OptimalityViolation(_))));
}

#[test]
fn test_overflowing_distance_stays_unreached() {
    let graph =
        EdgeWeightedDigraph::from_edges(3, vec![(0, 1, f64::MAX), (1, 2, f64::MAX)]).unwrap();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();

    assert!(sp.has_path_to(1).unwrap());
    assert_eq!(sp.distance_to(1).unwrap(), f64::MAX);

    assert!(!sp.has_path_to(2).unwrap());
    assert_eq!(sp.distance_to(2).unwrap(), f64::INFINITY);
    assert_eq!(sp.path_to(2).unwrap(), None);
    for v in 0..graph.vertex_count() {
        assert_eq!(
            sp.has_path_to(v).unwrap(),
            sp.distance_to(v).unwrap() < f64::INFINITY
        );
    }
    sp.check(&graph).unwrap();
}

#[test]
fn test_negative_cycle_is_an_error() {
    let graph = EdgeWeightedDigraph::from_edges(2, vec![(0, 1, 1.0), (1, 0, -2.0)]).unwrap();
    assert!(matches!(
        DijkstraShortestPath::new(&graph, 0),
        Err(Error::NegativeCycle { .. })
    ));
}

#[test]
fn test_negative_edge_without_cycle_terminates() {
    // Vertex 1 is finalized at 2, then improved to 1 through 2->1
    let graph =
        EdgeWeightedDigraph::from_edges(3, vec![(0, 1, 2.0), (0, 2, 5.0), (2, 1, -4.0)]).unwrap();
    let sp = DijkstraShortestPath::new(&graph, 0).unwrap();

    assert_eq!(sp.distance_to(1).unwrap(), 1.0);
    assert_eq!(sp.path_vertices(1).unwrap(), Some(vec![0, 2, 1]));
    assert_eq!(sp.stats().finalized, 4);
}
