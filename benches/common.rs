#![allow(dead_code)]

use fastrand::Rng;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Random edges over vertices `0..vertex_count`, each edge picked
/// independently, so parallel edges and self-loops appear naturally.
pub fn random_edges(vertex_count: usize, edge_count: usize, rng: &mut Rng) -> Vec<(u32, u32)> {
    let bound = vertex_count as u32;

    (0..edge_count)
        .map(|_| (rng.u32(0..bound), rng.u32(0..bound)))
        .collect()
}

/// Out-edge table where vertex `i` points to `fan_out` random vertices among
/// `0..2 * vertex_count`.
pub fn random_out_edges(vertex_count: usize, fan_out: usize, rng: &mut Rng) -> Vec<Vec<u32>> {
    let bound = 2 * vertex_count as u32;

    (0..vertex_count)
        .map(|_| (0..fan_out).map(|_| rng.u32(0..bound)).collect())
        .collect()
}
