//! Integration tests for the `api` free-function boundary
//! (`run_dijkstra`/`run_base_case`/`run_bmssp`/`shortest_paths`).

use std::collections::HashSet;

use bmssp::graph::traits::MutableGraph;
use bmssp::{run_base_case, run_bmssp, run_dijkstra, shortest_paths, DirectedGraph, Error};
use ordered_float::OrderedFloat;

fn w(x: f64) -> OrderedFloat<f64> {
    OrderedFloat(x)
}

#[test]
fn run_dijkstra_and_shortest_paths_agree() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(4);
    g.add_edge(0, 1, w(2.0)).unwrap();
    g.add_edge(0, 2, w(4.0)).unwrap();
    g.add_edge(1, 2, w(1.0)).unwrap();
    g.add_edge(1, 3, w(7.0)).unwrap();
    g.add_edge(2, 3, w(3.0)).unwrap();
    g.prepare();

    let dijkstra = run_dijkstra(&g, 0).unwrap();
    let bmssp = shortest_paths(&g, 0).unwrap();
    assert_eq!(dijkstra.distances, bmssp.distances);
}

#[test]
fn run_base_case_reports_bound_reached_overflow() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(5);
    for (i, dist) in [(1, 1.0), (2, 2.0), (3, 3.0), (4, 4.0)] {
        g.add_edge(0, i, w(dist)).unwrap();
    }
    g.calc_k(); // n=5 -> k=1, so the cap of k+1=2 triggers on this graph.

    let (b_prime, u) = run_base_case(&g, 0, w(1000.0)).unwrap();
    assert_eq!(b_prime, w(1.0));
    assert_eq!(u, HashSet::from([0]));
}

#[test]
fn run_base_case_rejects_out_of_range_source() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(2);
    g.calc_k();
    assert!(run_base_case(&g, 9, w(10.0)).is_err());
}

#[test]
fn run_bmssp_requires_prepared_graph() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(2);
    g.add_edge(0, 1, w(1.0)).unwrap();
    let mut d = vec![w(0.0), OrderedFloat(f64::INFINITY)];
    let mut pred = vec![None, None];
    let s = HashSet::from([0]);
    let err = run_bmssp(&g, &mut d, &mut pred, 1, OrderedFloat(f64::INFINITY), &s);
    assert!(matches!(err, Err(Error::PreconditionViolation(_))));
}
