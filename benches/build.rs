mod common;

use common::{random_edges, random_out_edges, RANDOM_SEED};
use divan::Bencher;
use fastrand::Rng;
use graft::{
    build,
    storage::{AdjacencyGraph, BidirectionalGraph},
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [true, false])]
fn graft_adjacency_from_edges<const N: usize>(bencher: Bencher, allow_parallel_edges: bool) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let edges = random_edges(N, 8 * N, &mut rng);

    bencher.bench_local(|| {
        build::from_edges_with::<AdjacencyGraph<_, _>, _, _, _>(
            edges.iter().copied(),
            allow_parallel_edges,
        )
    });
}

#[divan::bench(consts = [100, 1000], args = [true, false])]
fn graft_bidirectional_from_edges<const N: usize>(bencher: Bencher, allow_parallel_edges: bool) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let edges = random_edges(N, 8 * N, &mut rng);

    bencher.bench_local(|| {
        build::from_edges_with::<BidirectionalGraph<_, _>, _, _, _>(
            edges.iter().copied(),
            allow_parallel_edges,
        )
    });
}

#[divan::bench(consts = [100, 1000])]
fn graft_bidirectional_from_vertices<const N: usize>(bencher: Bencher) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let table = random_out_edges(N, 8, &mut rng);

    bencher.bench_local(|| {
        build::from_vertices::<BidirectionalGraph<_, _>, _, _, _, _, _>(
            0..N as u32,
            |&v| table[v as usize].iter().map(move |&w| (v, w)),
        )
    });
}

#[divan::bench(consts = [100, 1000])]
fn petgraph_graphmap_from_edges<const N: usize>(bencher: Bencher) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let edges = random_edges(N, 8 * N, &mut rng);

    bencher.bench_local(|| {
        petgraph::graphmap::DiGraphMap::<u32, ()>::from_edges(edges.iter().copied())
    });
}
