use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `n` distinct keys in random order.
pub fn distinct_keys<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<u64> {
    let stride = rng.random_range(1..=1_000_u64);
    let offset: u64 = rng.random_range(0..1 << 32);
    let mut keys = (0..n as u64)
        .map(|i| offset.wrapping_add(i.wrapping_mul(stride)))
        .collect::<Vec<_>>();
    keys.shuffle(rng);
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn distinct_keys_are_distinct() {
        let mut rng = default_rng();
        for n in [0, 1, 17, 1_000] {
            let keys = distinct_keys(&mut rng, n);
            assert_eq!(keys.len(), n);
            assert_eq!(keys.iter().collect::<HashSet<_>>().len(), n);
        }
    }
}
