//! The sampling accumulator.

use serde::{Deserialize, Serialize};

use crate::capacity::Capacity;
use crate::errors::{ErrorInfo, SampleError, CODE_STATE_INVARIANT};

/// Slots reserved up front. Larger reservoirs grow as items arrive, so any
/// positive capacity is valid regardless of available memory.
const PREALLOC_LIMIT: usize = 1024;

/// Progress of a reservoir through its two phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Fewer than `capacity` items have been seen; every item is kept.
    Filling,
    /// The reservoir holds exactly `capacity` items. Absorbing.
    Full,
}

/// Everything needed to resume sampling with more input.
///
/// The sample holds `min(seen, capacity)` items. Slots are filled in input
/// order and later overwritten in place, so the order of
/// [`sample`](Self::sample) is slot order, not stream order.
///
/// There is no public mutator: a state only advances by being moved through
/// [`update`](crate::update) or [`Sampler::update`](crate::Sampler::update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawState<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct SamplerState<T> {
    capacity: Capacity,
    seen: u64,
    sample: Vec<T>,
}

impl<T> SamplerState<T> {
    /// Creates an empty state for a reservoir of `capacity` items.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            capacity,
            seen: 0,
            sample: Vec::with_capacity(capacity.get().min(PREALLOC_LIMIT)),
        }
    }

    /// Current sample, in slot order.
    pub fn sample(&self) -> &[T] {
        &self.sample
    }

    /// Consumes the state and returns the sample.
    pub fn into_sample(self) -> Vec<T> {
        self.sample
    }

    /// Total number of items ever presented.
    pub fn seen_count(&self) -> u64 {
        self.seen
    }

    /// Maximum sample size.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.sample.len()
    }

    /// True until the first item arrives.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }

    /// True once `capacity` items have been seen.
    pub fn is_full(&self) -> bool {
        self.phase() == Phase::Full
    }

    /// Which phase the reservoir is in.
    pub fn phase(&self) -> Phase {
        if self.seen >= self.capacity.get() as u64 {
            Phase::Full
        } else {
            Phase::Filling
        }
    }

    /// Probability that any single item seen so far is in the sample.
    pub fn inclusion_probability(&self) -> f64 {
        if self.seen == 0 {
            0.0
        } else {
            (self.capacity.get() as f64 / self.seen as f64).min(1.0)
        }
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Vec<T>, &mut u64, usize) {
        (&mut self.sample, &mut self.seen, self.capacity.get())
    }
}

#[derive(Deserialize)]
struct RawState<T> {
    capacity: Capacity,
    seen: u64,
    sample: Vec<T>,
}

impl<T> TryFrom<RawState<T>> for SamplerState<T> {
    type Error = SampleError;

    fn try_from(raw: RawState<T>) -> Result<Self, Self::Error> {
        let expected = raw.seen.min(raw.capacity.get() as u64);
        if raw.sample.len() as u64 != expected {
            return Err(SampleError::Serde(
                ErrorInfo::new(
                    CODE_STATE_INVARIANT,
                    "sample length must equal min(seen, capacity)",
                )
                .with_context("capacity", raw.capacity.to_string())
                .with_context("seen", raw.seen.to_string())
                .with_context("len", raw.sample.len().to_string()),
            ));
        }
        Ok(Self {
            capacity: raw.capacity,
            seen: raw.seen,
            sample: raw.sample,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty_and_filling() {
        let state: SamplerState<String> = SamplerState::new(Capacity::new(4).unwrap());
        assert!(state.is_empty());
        assert_eq!(state.seen_count(), 0);
        assert_eq!(state.phase(), Phase::Filling);
        assert_eq!(state.inclusion_probability(), 0.0);
    }

    #[test]
    fn huge_capacity_allocates_only_what_it_holds() {
        let capacity: Capacity = "1000000000000000000".parse().unwrap();
        let state: SamplerState<String> = SamplerState::new(capacity);
        assert!(state.sample.capacity() <= PREALLOC_LIMIT);
    }
}
