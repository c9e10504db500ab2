//! Process-wide default randomness for identifier generation.
//!
//! All `random()` constructors draw from one seeded-from-entropy generator
//! behind a mutex, so concurrent callers serialize on it. Callers that
//! need an isolated or deterministic stream use the `random_from` variants
//! with their own [`rand::Rng`].

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static SHARED_RNG: LazyLock<Mutex<StdRng>> =
    LazyLock::new(|| Mutex::new(StdRng::from_entropy()));

pub(super) fn next_u64() -> u64 {
    lock().gen()
}

pub(super) fn next_u96() -> (u32, u64) {
    let mut rng = lock();
    (rng.gen(), rng.gen())
}

fn lock() -> MutexGuard<'static, StdRng> {
    // A panic while holding the lock cannot leave the generator in an
    // invalid state, so a poisoned lock is still usable.
    SHARED_RNG.lock().unwrap_or_else(PoisonError::into_inner)
}
