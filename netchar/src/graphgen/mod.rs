//! Synthetic graph generators, used to build test fixtures, benchmark inputs and the
//! `generate` command's network directories.

pub mod preferential_attachment;

use rand::{rngs::StdRng, SeedableRng};

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
