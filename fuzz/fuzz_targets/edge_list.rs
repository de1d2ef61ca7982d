#![no_main]

use libfuzzer_sys::fuzz_target;

use graft::{
    build,
    core::{GraphStore, TaggedEdge},
    infra::testing::{check_bidirectional_consistency, check_consistency},
    storage::{AdjacencyGraph, BidirectionalGraph},
};

fuzz_target!(|input: (bool, Vec<TaggedEdge<u8, i8>>)| {
    let (allow_parallel_edges, edges) = input;

    let forward: AdjacencyGraph<_, _> = build::from_edges_with(edges.clone(), allow_parallel_edges);
    let bidirectional: BidirectionalGraph<_, _> =
        build::from_edges_with(edges, allow_parallel_edges);

    check_consistency(&forward)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
    check_bidirectional_consistency(&bidirectional)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    assert!(forward.vertices().eq(bidirectional.vertices()));
    assert!(forward.edges().eq(bidirectional.edges()));
});
