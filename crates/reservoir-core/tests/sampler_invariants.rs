use proptest::prelude::*;
use rand::rngs::mock::StepRng;
use reservoir_core::{update, Capacity, Phase, Sampler, SamplerState};

fn empty(k: usize) -> SamplerState<u32> {
    SamplerState::new(Capacity::new(k).unwrap())
}

/// Splits `items` at the given cut points, which may be unsorted or repeated.
fn partition(items: &[u32], cuts: &[usize]) -> Vec<Vec<u32>> {
    let mut cuts: Vec<usize> = cuts.iter().map(|c| c % (items.len() + 1)).collect();
    cuts.sort_unstable();
    let mut batches = Vec::new();
    let mut start = 0;
    for cut in cuts {
        batches.push(items[start..cut].to_vec());
        start = cut;
    }
    batches.push(items[start..].to_vec());
    batches
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn length_is_min_of_seen_and_capacity(
        k in 1usize..20,
        n in 0u32..200,
        cuts in prop::collection::vec(any::<usize>(), 0..6),
        seed in any::<u64>(),
    ) {
        let items: Vec<u32> = (0..n).collect();
        let mut sampler = Sampler::from_seed(seed);
        let mut state = empty(k);
        for batch in partition(&items, &cuts) {
            state = sampler.update(state, batch);
            prop_assert_eq!(state.len() as u64, state.seen_count().min(k as u64));
        }
        prop_assert_eq!(state.seen_count(), n as u64);
        prop_assert_eq!(state.len(), (n as usize).min(k));
        prop_assert_eq!(state.capacity().get(), k);
    }

    #[test]
    fn prefix_is_kept_in_order_while_filling(
        k in 1usize..30,
        n_frac in 0usize..=100,
        seed in any::<u64>(),
    ) {
        let n = (k * n_frac / 100) as u32;
        let items: Vec<u32> = (100..100 + n).collect();
        let state = Sampler::from_seed(seed).update(empty(k), items.clone());
        prop_assert_eq!(state.sample(), items.as_slice());
    }

    #[test]
    fn batching_does_not_change_the_sample(
        k in 1usize..10,
        n in 0u32..150,
        cuts in prop::collection::vec(any::<usize>(), 0..8),
        seed in any::<u64>(),
    ) {
        let items: Vec<u32> = (0..n).collect();
        let whole = Sampler::from_seed(seed).update(empty(k), items.clone());

        let mut sampler = Sampler::from_seed(seed);
        let mut split = empty(k);
        for batch in partition(&items, &cuts) {
            split = sampler.update(split, batch);
        }
        prop_assert_eq!(whole, split);
    }

    #[test]
    fn sample_only_holds_presented_items(
        k in 1usize..10,
        n in 1u32..300,
        seed in any::<u64>(),
    ) {
        let state = Sampler::from_seed(seed).update(empty(k), 0..n);
        let mut seen_slots = state.sample().to_vec();
        seen_slots.sort_unstable();
        seen_slots.dedup();
        prop_assert_eq!(seen_slots.len(), state.len());
        prop_assert!(state.sample().iter().all(|&x| x < n));
    }

    #[test]
    fn empty_batch_is_a_no_op(
        k in 1usize..10,
        n in 0u32..50,
        seed in any::<u64>(),
    ) {
        let mut sampler = Sampler::from_seed(seed);
        let before = sampler.update(empty(k), 0..n);
        let after = sampler.update(before.clone(), Vec::new());
        prop_assert_eq!(before, after);
    }
}

#[test]
fn same_seed_same_sample() {
    let a = Sampler::from_seed(5).update(empty(4), 0..1000);
    let b = Sampler::from_seed(5).update(empty(4), 0..1000);
    assert_eq!(a.sample(), b.sample());
}

#[test]
fn full_phase_is_absorbing() {
    let mut sampler = Sampler::from_seed(11);
    let mut state = sampler.update(empty(3), [1, 2, 3]);
    assert_eq!(state.phase(), Phase::Full);
    for chunk in (4..200u32).collect::<Vec<_>>().chunks(7) {
        state = sampler.update(state, chunk.to_vec());
        assert_eq!(state.phase(), Phase::Full);
        assert_eq!(state.len(), 3);
    }
    assert!((state.inclusion_probability() - 3.0 / 199.0).abs() < 1e-12);
}

#[test]
fn injected_zero_randomness_overwrites_first_slot() {
    let mut sampler = Sampler::new(StepRng::new(0, 0));
    let state = sampler.update(empty(3), [1, 2, 3, 4, 5]);
    assert_eq!(state.sample(), &[5, 2, 3]);
    let state = sampler.update(state, [10, 20, 30, 40, 50]);
    assert_eq!(state.sample(), &[50, 2, 3]);
    assert_eq!(state.seen_count(), 10);
}

#[test]
fn free_function_matches_sampler_method() {
    let mut rng = reservoir_core::RngHandle::from_seed(77);
    let a = update(empty(5), 0..500, &mut rng);
    let b = Sampler::from_seed(77).update(empty(5), 0..500);
    assert_eq!(a, b);
}

#[test]
fn huge_capacity_samples_without_reserving_every_slot() {
    for k in [100_000_000_000usize, usize::MAX] {
        let state = SamplerState::new(Capacity::new(k).unwrap());
        let state = Sampler::from_seed(3).update(state, ["a".to_string(), "b".to_string()]);
        assert_eq!(state.sample(), &["a", "b"]);
        assert_eq!(state.seen_count(), 2);
        assert_eq!(state.phase(), Phase::Filling);
    }
}
