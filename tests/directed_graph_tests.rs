//! Integration tests for `DirectedGraph` beyond the cross-cutting
//! boundary-behavior suite: edge validation, `k`/`t` derivation, and
//! neighbor insertion order.

use bmssp::graph::traits::{Graph, MutableGraph};
use bmssp::{DirectedGraph, Error};
use ordered_float::OrderedFloat;

fn w(x: f64) -> OrderedFloat<f64> {
    OrderedFloat(x)
}

#[test]
fn add_edge_rejects_out_of_range_vertices() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(2);
    assert!(g.add_edge(0, 5, w(1.0)).is_err());
    assert!(g.add_edge(5, 0, w(1.0)).is_err());
}

#[test]
fn add_edge_rejects_negative_and_nan_weight() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(2);
    assert!(g.add_edge(0, 1, w(-1.0)).is_err());
    assert!(g.add_edge(0, 1, OrderedFloat(f64::NAN)).is_err());
    assert!(g.add_edge(0, 1, w(0.0)).is_ok());
}

#[test]
fn calc_k_and_t_floor_clamp_to_one() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(1);
    assert_eq!(g.calc_k(), 1);
    assert_eq!(g.calc_t(), 1);

    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(0);
    assert_eq!(g.calc_k(), 1);
    assert_eq!(g.calc_t(), 1);
}

#[test]
fn get_k_before_calc_k_is_precondition_violation() {
    let g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(4);
    assert!(matches!(g.get_k(), Err(Error::PreconditionViolation(_))));
}

#[test]
fn neighbors_preserve_insertion_order() {
    let mut g: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(3);
    g.add_edge(0, 2, w(1.0)).unwrap();
    g.add_edge(0, 1, w(2.0)).unwrap();
    let ns: Vec<_> = g.neighbors(0).collect();
    assert_eq!(ns, vec![(2, w(1.0)), (1, w(2.0))]);
}
