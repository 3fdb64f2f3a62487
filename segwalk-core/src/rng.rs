// Every consumer owns its generator. A seed, if given, makes the generator reproducible,
// otherwise it is drawn from the OS.

use rand::{Rng, SeedableRng, rngs::StdRng};

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Draws the seed for the next episode.
pub fn next_seed<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.random::<u64>()
}
