//! Integration tests for the recursive `bmssp` core and the `Bmssp`
//! `ShortestPathAlgorithm` entry point: diamond and detour graphs,
//! directionality, single-vertex graphs, and precondition violations.

use std::collections::HashSet;

use bmssp::algorithm::bmssp::bmssp;
use bmssp::graph::traits::MutableGraph;
use bmssp::{Bmssp, DirectedGraph, Error, ShortestPathAlgorithm, ShortestPathResult};
use ordered_float::OrderedFloat;

fn w(x: f64) -> OrderedFloat<f64> {
    OrderedFloat(x)
}

fn run(
    graph: &mut DirectedGraph<OrderedFloat<f64>>,
    source: usize,
) -> ShortestPathResult<OrderedFloat<f64>> {
    graph.prepare();
    Bmssp::new().compute_shortest_paths(graph, source).unwrap()
}

fn plain_distances(result: &ShortestPathResult<OrderedFloat<f64>>) -> Vec<f64> {
    result
        .distances
        .iter()
        .map(|d| d.map(|x| x.0).unwrap_or(f64::INFINITY))
        .collect()
}

#[test]
fn diamond_graph_with_branching_paths() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(4);
    g.add_edge(0, 1, w(2.0)).unwrap();
    g.add_edge(0, 2, w(4.0)).unwrap();
    g.add_edge(1, 2, w(1.0)).unwrap();
    g.add_edge(1, 3, w(7.0)).unwrap();
    g.add_edge(2, 3, w(3.0)).unwrap();

    let result = run(&mut g, 0);
    assert_eq!(plain_distances(&result), vec![0.0, 2.0, 3.0, 6.0]);
    assert_eq!(result.predecessors, vec![None, Some(0), Some(1), Some(2)]);
}

#[test]
fn graph_with_a_longer_detour_still_wins() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(5);
    g.add_edge(0, 1, w(2.0)).unwrap();
    g.add_edge(0, 3, w(4.0)).unwrap();
    g.add_edge(1, 2, w(1.0)).unwrap();
    g.add_edge(1, 4, w(7.0)).unwrap();
    g.add_edge(2, 4, w(2.0)).unwrap();
    g.add_edge(4, 3, w(1.0)).unwrap();

    let result = run(&mut g, 0);
    assert_eq!(plain_distances(&result), vec![0.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(
        result.predecessors,
        vec![None, Some(0), Some(1), Some(0), Some(2)]
    );
}

#[test]
fn chain_graph_forward_and_unreachable_reverse() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(3);
    g.add_edge(0, 1, w(1.0)).unwrap();
    g.add_edge(1, 2, w(1.0)).unwrap();

    let result = run(&mut g, 0);
    assert_eq!(plain_distances(&result), vec![0.0, 1.0, 2.0]);

    let result = run(&mut g, 2);
    assert_eq!(
        plain_distances(&result),
        vec![f64::INFINITY, f64::INFINITY, 0.0]
    );
}

#[test]
fn single_vertex_graph() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(1);
    let result = run(&mut g, 0);
    assert_eq!(plain_distances(&result), vec![0.0]);
    assert_eq!(result.predecessors, vec![None]);
}

#[test]
fn level_zero_with_non_singleton_frontier_is_precondition_violation() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(3);
    g.add_edge(0, 1, w(1.0)).unwrap();
    g.prepare();
    let mut d = vec![w(0.0), w(0.0), OrderedFloat(f64::INFINITY)];
    let mut pred = vec![None, None, None];
    let s = HashSet::from([0, 1]);
    let err = bmssp(&g, 0, OrderedFloat(f64::INFINITY), &s, 1, 1, &mut d, &mut pred);
    assert!(matches!(err, Err(Error::PreconditionViolation(_))));
}

#[test]
fn rejects_frontier_vertex_at_or_above_bound() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(2);
    g.add_edge(0, 1, w(1.0)).unwrap();
    g.prepare();
    let mut d = vec![w(5.0), OrderedFloat(f64::INFINITY)];
    let mut pred = vec![None, None];
    let s = HashSet::from([0]);
    let err = bmssp(&g, 1, w(5.0), &s, 1, 1, &mut d, &mut pred);
    assert!(matches!(err, Err(Error::PreconditionViolation(_))));
}
