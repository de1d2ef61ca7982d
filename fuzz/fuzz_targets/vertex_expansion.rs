#![no_main]

use libfuzzer_sys::fuzz_target;

use graft::{
    build,
    core::GraphStore,
    infra::testing::check_bidirectional_consistency,
    storage::BidirectionalGraph,
};

fuzz_target!(|input: (bool, Vec<u8>, Vec<Vec<u8>>)| {
    let (allow_parallel_edges, vertices, table) = input;

    let mut calls = 0;
    let graph: BidirectionalGraph<_, _> = build::from_vertices_with(
        vertices.iter().copied(),
        |&v| {
            calls += 1;
            table
                .get(v as usize)
                .into_iter()
                .flatten()
                .map(move |&w| (v, w))
        },
        allow_parallel_edges,
    );

    check_bidirectional_consistency(&graph)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    let mut distinct = vertices.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(calls, distinct.len());
});
