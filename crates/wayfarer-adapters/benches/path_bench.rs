//! Benchmarks for the pathfinding algorithms on a weighted grid.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wayfarer_adapters::plugins::algorithms::{Heuristic, astar, dijkstra, k_shortest_paths};
use wayfarer_common::types::{EdgeId, NodeId};
use wayfarer_core::{Edge, GraphSnapshot, Node};

const SIDE: u64 = 40;

/// A `SIDE x SIDE` grid with coordinates and slightly uneven weights.
fn grid() -> GraphSnapshot {
    let id = |row: u64, col: u64| NodeId::new(row * SIDE + col);
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut next = 0u64;

    for row in 0..SIDE {
        for col in 0..SIDE {
            nodes.push(Node::at(id(row, col), (col * 10) as f64, (row * 10) as f64));
            let weight = 10 + ((row * 7 + col * 3) % 5) as i64;
            if col + 1 < SIDE {
                edges.push(Edge::weighted(EdgeId::new(next), id(row, col), id(row, col + 1), weight));
                next += 1;
            }
            if row + 1 < SIDE {
                edges.push(Edge::weighted(EdgeId::new(next), id(row, col), id(row + 1, col), weight));
                next += 1;
            }
        }
    }

    GraphSnapshot::new(nodes, edges).expect("grid is valid")
}

fn bench_single_pair(c: &mut Criterion) {
    let snapshot = grid();
    let source = NodeId::new(0);
    let target = NodeId::new(SIDE * SIDE - 1);

    c.bench_function("dijkstra/grid_40", |b| {
        b.iter(|| dijkstra(black_box(&snapshot), source, target));
    });
    c.bench_function("astar/grid_40_euclidean", |b| {
        b.iter(|| astar(black_box(&snapshot), source, target, Heuristic::Euclidean));
    });
    c.bench_function("astar/grid_40_manhattan", |b| {
        b.iter(|| astar(black_box(&snapshot), source, target, Heuristic::Manhattan));
    });
}

fn bench_k_shortest(c: &mut Criterion) {
    let snapshot = grid();
    let source = NodeId::new(0);
    let target = NodeId::new(SIDE * 5 + 5);

    c.bench_function("k_shortest/grid_40_k8", |b| {
        b.iter(|| k_shortest_paths(black_box(&snapshot), source, target, 8));
    });
}

criterion_group!(benches, bench_single_pair, bench_k_shortest);
criterion_main!(benches);
