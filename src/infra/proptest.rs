use std::ops::Range;

use proptest::{collection::vec, prelude::*};

/// Vertices drawn from a small domain so that repetitions are common.
pub fn vertex(domain: u8) -> impl Strategy<Value = u8> + Clone {
    0..domain.max(1)
}

/// List of vertices that is likely to contain duplicates.
pub fn vertex_list(domain: u8, len: Range<usize>) -> impl Strategy<Value = Vec<u8>> {
    vec(vertex(domain), len)
}

/// List of edges between vertices of a small domain. Parallel edges and
/// self-loops are common.
pub fn edge_list(domain: u8, len: Range<usize>) -> impl Strategy<Value = Vec<(u8, u8)>> {
    vec((vertex(domain), vertex(domain)), len)
}

/// Out-edge table for vertex expansion. Entry `i` lists the targets of vertex
/// `i`, targets may lie outside of the table.
pub fn out_edge_table(
    domain: u8,
    fan_out: Range<usize>,
) -> impl Strategy<Value = Vec<Vec<u8>>> {
    vec(vec(vertex(domain.saturating_mul(2)), fan_out), domain as usize)
}
