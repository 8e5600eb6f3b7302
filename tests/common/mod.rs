// Shared parcel layouts for the integration tests.
#![allow(dead_code)]

use landswap::{OwnerId, Parcel, ParcelId};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub const REGION: [&str; 3] = ["Arco da Calheta", "Calheta", "Ilha da Madeira (Madeira)"];

/// Axis-aligned square of side `size` with lower-left corner at `(x, y)`.
pub fn square(id: ParcelId, owner: OwnerId, x: f64, y: f64, size: f64) -> Parcel {
    Parcel::new(id, owner, REGION, size * size, 4.0 * size,
        [(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
}

/// `rows` x `cols` grid of unit squares; ids run row-major from 1.
pub fn grid(rows: usize, cols: usize, owner_of: impl Fn(usize, usize) -> OwnerId) -> Vec<Parcel> {
    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .map(|(r, c)| square((r * cols + c + 1) as ParcelId, owner_of(r, c), c as f64, r as f64, 1.0))
        .collect()
}

/// Grid with owners drawn uniformly from `1..=owners`.
pub fn random_grid(seed: u64, rows: usize, cols: usize, owners: OwnerId) -> Vec<Parcel> {
    let mut rng = StdRng::seed_from_u64(seed);
    let assignment = (0..rows * cols).map(|_| rng.random_range(1..=owners)).collect::<Vec<_>>();
    grid(rows, cols, |r, c| assignment[r * cols + c])
}
