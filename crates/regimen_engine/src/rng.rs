//! Random number generation for plan resolution.
//!
//! Resolution never touches a process-wide generator. Callers build a
//! [`PlanRng`] and pass it in, either from a fixed seed (reproducible
//! output) or from operating system entropy.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The generator used by the runtime. Any [`rand::Rng`] works with the
/// resolver; this one is portable and reproducible across platforms.
pub type PlanRng = ChaCha8Rng;

/// Creates a generator from an explicit seed.
#[must_use]
pub fn seeded(seed: u64) -> PlanRng {
    PlanRng::seed_from_u64(seed)
}

/// Creates a generator seeded from operating system entropy.
#[must_use]
pub fn from_entropy() -> PlanRng {
    PlanRng::from_entropy()
}

/// Draws a fresh seed from operating system entropy.
///
/// Useful when a run should be random but still repeatable: log the seed,
/// then build the generator with [`seeded`].
#[must_use]
pub fn entropy_seed() -> u64 {
    rand::random()
}
