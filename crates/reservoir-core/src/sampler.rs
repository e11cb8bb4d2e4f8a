//! Incremental Algorithm R.
//!
//! Algorithm R (Vitter, 1985) keeps the first `k` items, then admits item `n`
//! with probability `k / n` into a uniformly chosen slot. Applied batch by
//! batch over a [`SamplerState`], it produces the same distribution as a
//! single pass over the concatenated input.

use rand::{Rng, RngCore};
use tracing::trace;

use crate::rng::RngHandle;
use crate::state::SamplerState;

/// Folds `items` into `state` and returns the advanced state.
///
/// Each item increments the seen count first. While the count is within
/// capacity the item is appended. Afterwards one uniform `r` in `[0, 1)` is
/// drawn per item; if `r <= capacity / seen` (post-increment count) a slot
/// index is drawn and overwritten, otherwise the item is dropped.
///
/// The RNG is consumed item by item, never per batch, so a fixed RNG sequence
/// yields the same sample for every partition of the input.
pub fn update<T, I, R>(mut state: SamplerState<T>, items: I, rng: &mut R) -> SamplerState<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let (sample, seen, capacity) = state.parts_mut();
    let k = capacity as u64;
    for item in items {
        *seen += 1;
        if *seen <= k {
            sample.push(item);
            if *seen == k {
                trace!(capacity, "reservoir full");
            }
            continue;
        }
        let r: f64 = rng.gen();
        if r <= k as f64 / *seen as f64 {
            let idx = rng.gen_range(0..capacity);
            sample[idx] = item;
        }
    }
    state
}

/// Reservoir sampler owning its randomness source.
///
/// The sampler carries no sampling progress of its own; all of that lives in
/// the [`SamplerState`] passed through [`update`](Self::update). One sampler
/// may therefore drive several independent states, though each state must be
/// advanced by a single caller.
#[derive(Debug, Clone)]
pub struct Sampler<R = RngHandle> {
    rng: R,
}

impl Sampler<RngHandle> {
    /// Sampler with a reproducible seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RngHandle::from_seed(seed))
    }

    /// Sampler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(RngHandle::from_entropy())
    }
}

impl<R: RngCore> Sampler<R> {
    /// Wraps an injected RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Folds `items` into `state`. See [`update`](crate::update).
    pub fn update<T, I>(&mut self, state: SamplerState<T>, items: I) -> SamplerState<T>
    where
        I: IntoIterator<Item = T>,
    {
        update(state, items, &mut self.rng)
    }
}
